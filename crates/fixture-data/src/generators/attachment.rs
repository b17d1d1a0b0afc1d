//! Generation of the smaller records a contact carries: notes, tasks,
//! debts, gifts, calls, addresses, pets, conversations, life events, and
//! contact fields.

use fake::faker::address::en::{CityName, PostCode, StateName, StreetName};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::{Paragraph, Sentence, Word};
use fake::faker::name::en::FirstName;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::Rng;
use time::{Date, Duration, OffsetDateTime};

use contacts::models::{ContactFieldKind, DebtDirection, LifeEventKind, PetCategory};

/// Generated note body.
#[derive(Debug, Clone)]
pub struct GeneratedNote {
    pub body: String,
    pub is_favorited: bool,
    pub favorited_at: Option<OffsetDateTime>,
}

/// Generated task.
#[derive(Debug, Clone)]
pub struct GeneratedTask {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub completed_at: Option<OffsetDateTime>,
}

/// Generated debt.
#[derive(Debug, Clone)]
pub struct GeneratedDebt {
    pub direction: DebtDirection,
    pub amount: u32,
    pub reason: String,
}

/// Generated gift idea.
#[derive(Debug, Clone)]
pub struct GeneratedGift {
    pub name: String,
    pub comment: Option<String>,
    pub url: Option<String>,
    pub value: u32,
}

/// Generated address with partially-known components.
#[derive(Debug, Clone)]
pub struct GeneratedAddress {
    pub name: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Generated pet.
#[derive(Debug, Clone)]
pub struct GeneratedPet {
    pub category: PetCategory,
    pub name: Option<String>,
}

/// Generated conversation message.
#[derive(Debug, Clone)]
pub struct GeneratedMessage {
    pub written_at: OffsetDateTime,
    pub written_by_me: bool,
    pub content: String,
}

/// Generated life event.
#[derive(Debug, Clone)]
pub struct GeneratedLifeEvent {
    pub kind: LifeEventKind,
    pub happened_on: Date,
    pub name: Option<String>,
    pub note: Option<String>,
}

/// Generated way to reach a contact.
#[derive(Debug, Clone)]
pub struct GeneratedContactField {
    pub kind: ContactFieldKind,
    pub value: String,
}

/// Configuration for attachment generation.
#[derive(Debug, Clone)]
pub struct AttachmentGenConfig {
    /// Probability that an optional field (address component, task
    /// description, pet name, ...) is filled in.
    pub optional_field_probability: f64,
    /// Debt amounts (inclusive range).
    pub debt_amount: (u32, u32),
    /// Gift values (inclusive range).
    pub gift_value: (u32, u32),
}

impl Default for AttachmentGenConfig {
    fn default() -> Self {
        Self {
            optional_field_probability: 1.0 / 3.0,
            debt_amount: (100, 40_000),
            gift_value: (12, 120),
        }
    }
}

const PET_CATEGORIES: [PetCategory; 9] = [
    PetCategory::Dog,
    PetCategory::Cat,
    PetCategory::Bird,
    PetCategory::Fish,
    PetCategory::Hamster,
    PetCategory::Rabbit,
    PetCategory::Reptile,
    PetCategory::Horse,
    PetCategory::Other,
];

const COUNTRY_CODES: [&str; 10] = ["US", "CA", "GB", "FR", "DE", "ES", "IT", "NL", "SE", "AU"];

/// Generates contact attachments.
pub struct AttachmentGenerator {
    config: AttachmentGenConfig,
}

impl AttachmentGenerator {
    /// Creates a new attachment generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: AttachmentGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: AttachmentGenConfig) -> Self {
        Self { config }
    }

    pub fn generate_note(&self, today: Date, rng: &mut impl Rng) -> GeneratedNote {
        let is_favorited = rng.r#gen::<f64>() < 1.0 / 3.0;
        GeneratedNote {
            body: Paragraph(1..4).fake_with_rng(rng),
            is_favorited,
            favorited_at: is_favorited.then(|| random_datetime(today, rng)),
        }
    }

    pub fn generate_task(&self, today: Date, rng: &mut impl Rng) -> GeneratedTask {
        let completed = rng.r#gen::<f64>() < 0.5;
        GeneratedTask {
            title: Sentence(3..8).fake_with_rng(rng),
            description: self.maybe(rng, |rng| Paragraph(1..3).fake_with_rng(rng)),
            completed,
            completed_at: completed.then(|| random_datetime(today, rng)),
        }
    }

    pub fn generate_debt(&self, rng: &mut impl Rng) -> GeneratedDebt {
        let direction = if rng.r#gen::<f64>() < 0.5 {
            DebtDirection::ContactOwesUser
        } else {
            DebtDirection::UserOwesContact
        };
        let (lo, hi) = self.config.debt_amount;
        GeneratedDebt {
            direction,
            amount: rng.gen_range(lo..=hi),
            reason: Sentence(4..12).fake_with_rng(rng),
        }
    }

    pub fn generate_gift(&self, rng: &mut impl Rng) -> GeneratedGift {
        let (lo, hi) = self.config.gift_value;
        GeneratedGift {
            name: Sentence(2..6).fake_with_rng(rng),
            comment: self.maybe(rng, |rng| Paragraph(1..3).fake_with_rng(rng)),
            url: self.maybe(rng, |rng| {
                let slug: String = Word().fake_with_rng(rng);
                format!("https://shop.example/{slug}")
            }),
            value: rng.gen_range(lo..=hi),
        }
    }

    pub fn generate_call_time(&self, today: Date, rng: &mut impl Rng) -> OffsetDateTime {
        random_datetime(today, rng)
    }

    pub fn generate_address(&self, rng: &mut impl Rng) -> GeneratedAddress {
        GeneratedAddress {
            name: Word().fake_with_rng(rng),
            street: self.maybe(rng, |rng| StreetName().fake_with_rng(rng)),
            city: self.maybe(rng, |rng| CityName().fake_with_rng(rng)),
            province: self.maybe(rng, |rng| StateName().fake_with_rng(rng)),
            postal_code: self.maybe(rng, |rng| PostCode().fake_with_rng(rng)),
            country: self
                .maybe(rng, |rng| COUNTRY_CODES[rng.gen_range(0..COUNTRY_CODES.len())])
                .map(str::to_string),
        }
    }

    pub fn generate_pet(&self, rng: &mut impl Rng) -> GeneratedPet {
        GeneratedPet {
            category: PET_CATEGORIES[rng.gen_range(0..PET_CATEGORIES.len())],
            name: self.maybe(rng, |rng| FirstName().fake_with_rng(rng)),
        }
    }

    pub fn generate_message(&self, today: Date, rng: &mut impl Rng) -> GeneratedMessage {
        GeneratedMessage {
            written_at: random_datetime(today, rng),
            written_by_me: rng.r#gen::<f64>() < 0.5,
            content: Paragraph(1..3).fake_with_rng(rng),
        }
    }

    /// A milestone within roughly the last decade.
    pub fn generate_life_event(&self, today: Date, rng: &mut impl Rng) -> GeneratedLifeEvent {
        GeneratedLifeEvent {
            kind: LifeEventKind::ALL[rng.gen_range(0..LifeEventKind::ALL.len())],
            happened_on: today - Duration::days(rng.gen_range(0..3_650)),
            name: self.maybe(rng, |rng| Sentence(2..6).fake_with_rng(rng)),
            note: self.maybe(rng, |rng| Paragraph(1..3).fake_with_rng(rng)),
        }
    }

    pub fn generate_contact_field(
        &self,
        kind: ContactFieldKind,
        rng: &mut impl Rng,
    ) -> GeneratedContactField {
        let value = match kind {
            ContactFieldKind::Email => SafeEmail().fake_with_rng(rng),
            ContactFieldKind::Phone => PhoneNumber().fake_with_rng(rng),
            _ => {
                let handle: String = Word().fake_with_rng(rng);
                format!("@{handle}")
            }
        };
        GeneratedContactField { kind, value }
    }

    fn maybe<R: Rng, T>(&self, rng: &mut R, f: impl FnOnce(&mut R) -> T) -> Option<T> {
        if rng.r#gen::<f64>() < self.config.optional_field_probability {
            Some(f(rng))
        } else {
            None
        }
    }
}

impl Default for AttachmentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// A timestamp within the year before `today`.
fn random_datetime(today: Date, rng: &mut impl Rng) -> OffsetDateTime {
    let date = today - Duration::days(rng.gen_range(0..365));
    date.midnight().assume_utc()
        + Duration::hours(rng.gen_range(0..24))
        + Duration::minutes(rng.gen_range(0..60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn today() -> Date {
        Date::from_calendar_date(2023, Month::June, 1).unwrap()
    }

    #[test]
    fn test_favorited_notes_carry_a_timestamp() {
        let attachment_gen = AttachmentGenerator::new();
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let note = attachment_gen.generate_note(today(), &mut rng);
            assert_eq!(note.is_favorited, note.favorited_at.is_some());
            assert!(!note.body.is_empty());
        }
    }

    #[test]
    fn test_completed_tasks_carry_a_timestamp() {
        let attachment_gen = AttachmentGenerator::new();
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let task = attachment_gen.generate_task(today(), &mut rng);
            assert_eq!(task.completed, task.completed_at.is_some());
        }
    }

    #[test]
    fn test_debt_amount_in_range() {
        let attachment_gen = AttachmentGenerator::new();
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let debt = attachment_gen.generate_debt(&mut rng);
            assert!((100..=40_000).contains(&debt.amount));
        }
    }

    #[test]
    fn test_address_label_is_always_present() {
        let attachment_gen = AttachmentGenerator::new();
        let mut rng = rand::thread_rng();
        let address = attachment_gen.generate_address(&mut rng);
        assert!(!address.name.is_empty());
    }

    #[test]
    fn test_contact_field_values_match_their_kind() {
        let attachment_gen = AttachmentGenerator::new();
        let mut rng = rand::thread_rng();

        let email = attachment_gen.generate_contact_field(ContactFieldKind::Email, &mut rng);
        assert!(email.value.contains('@'));

        let handle = attachment_gen.generate_contact_field(ContactFieldKind::Twitter, &mut rng);
        assert!(handle.value.starts_with('@'));
    }

    #[test]
    fn test_life_event_dates_are_in_the_past() {
        let attachment_gen = AttachmentGenerator::new();
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let event = attachment_gen.generate_life_event(today(), &mut rng);
            assert!(event.happened_on <= today());
        }
    }
}
