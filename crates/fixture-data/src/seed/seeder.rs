//! The fixture seeder: walks an account through the full population steps.

use rand::Rng;
use thiserror::Error;
use time::{Date, Duration};
use tracing::info;

use contacts::dates::SpecialDateRole;
use contacts::models::{
    AccountId, ContactFieldKind, ContactId, NewActivity, NewAddress, NewContact, NewDebt,
    NewEntry, NewGift, NewLifeEvent, NewMessage, NewNote, NewTask,
};
use contacts::reminders::ReminderFrequency;
use contacts::ContactStore;

use crate::config::SeedConfig;
use crate::generators::contact::ContactGenConfig;
use crate::generators::{AttachmentGenerator, ContactGenerator, JournalGenerator};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("domain error: {0}")]
    Domain(#[from] contacts::Error),
}

/// Counts of everything one seeding run created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub contacts: usize,
    pub placeholder_contacts: usize,
    pub special_dates: usize,
    pub reminders: usize,
    /// Logical relationships (each one is a reciprocal edge pair).
    pub relationships: usize,
    pub notes: usize,
    pub activities: usize,
    pub tasks: usize,
    pub debts: usize,
    pub gifts: usize,
    pub calls: usize,
    pub addresses: usize,
    pub pets: usize,
    pub conversations: usize,
    pub messages: usize,
    pub life_events: usize,
    pub contact_fields: usize,
    pub entries: usize,
    pub day_ratings: usize,
}

impl SeedReport {
    /// Journal rows implied by the journalables created: exactly one per
    /// activity, entry, and day rating.
    pub fn journal_rows(&self) -> usize {
        self.activities + self.entries + self.day_ratings
    }
}

/// Populates a store with generated fixture data.
pub struct Seeder<'a> {
    store: &'a mut ContactStore,
    config: SeedConfig,
    contact_gen: ContactGenerator,
    journal_gen: JournalGenerator,
    attachment_gen: AttachmentGenerator,
}

impl<'a> Seeder<'a> {
    /// Creates a seeder with default configuration.
    pub fn new(store: &'a mut ContactStore) -> Self {
        Self::with_config(store, SeedConfig::default())
    }

    /// Creates a seeder with custom configuration. The contact-level knobs
    /// flow into the contact generator here.
    pub fn with_config(store: &'a mut ContactStore, config: SeedConfig) -> Self {
        let contact_gen = ContactGenerator::with_config(ContactGenConfig {
            starred_probability: config.starred_probability,
            food_preferences_probability: config.food_preferences_probability,
            ..ContactGenConfig::default()
        });
        Self {
            store,
            config,
            contact_gen,
            journal_gen: JournalGenerator::new(),
            attachment_gen: AttachmentGenerator::new(),
        }
    }

    /// Populates one account end to end and reports what was created.
    pub fn populate_account(
        &mut self,
        account: AccountId,
        rng: &mut impl Rng,
    ) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();
        let count = sample(rng, self.config.contact_count);
        info!("Generating {count} contacts...");

        let mut primaries = Vec::with_capacity(count);
        for i in 0..count {
            let contact = self.populate_contact(account, rng, &mut report)?;
            primaries.push(contact);
            if (i + 1) % 25 == 0 {
                info!("  Seeded {}/{} contacts", i + 1, count);
            }
        }

        self.link_introductions(&primaries, rng)?;
        self.populate_entries(account, rng, &mut report)?;
        self.populate_day_ratings(account, rng, &mut report)?;

        info!(
            "Seeded {} contacts ({} placeholders) and {} journal rows",
            report.contacts,
            report.placeholder_contacts,
            report.journal_rows(),
        );
        Ok(report)
    }

    /// Creates one primary contact and everything attached to it.
    fn populate_contact(
        &mut self,
        account: AccountId,
        rng: &mut impl Rng,
        report: &mut SeedReport,
    ) -> Result<ContactId, SeedError> {
        let generated = self.contact_gen.generate(rng);
        let contact = self.store.create_contact(
            account,
            NewContact {
                first_name: generated.first_name,
                last_name: generated.last_name,
                nickname: generated.nickname,
                gender: generated.gender,
                is_starred: generated.is_starred,
            },
        )?;
        report.contacts += 1;

        self.store.contact_mut(contact)?.food_preferences = generated.food_preferences;

        self.populate_deceased(contact, rng, report)?;
        self.populate_birthday(contact, rng, report)?;
        self.populate_first_met(contact, rng, report)?;
        self.populate_relationships(account, contact, rng, report)?;
        self.populate_notes(contact, rng, report)?;
        self.populate_activities(contact, rng, report)?;
        self.populate_tasks(contact, rng, report)?;
        self.populate_debts(contact, rng, report)?;
        self.populate_gifts(contact, rng, report)?;
        self.populate_calls(contact, rng, report)?;
        self.populate_addresses(contact, rng, report)?;
        self.populate_pets(contact, rng, report)?;
        self.populate_conversations(contact, rng, report)?;
        self.populate_life_events(contact, rng, report)?;
        self.populate_contact_fields(contact, rng, report)?;
        self.touch_last_consulted(contact, rng)?;

        Ok(contact)
    }

    fn populate_deceased(
        &mut self,
        contact: ContactId,
        rng: &mut impl Rng,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        if !chance(rng, self.config.deceased_probability) {
            return Ok(());
        }
        self.store.contact_mut(contact)?.is_dead = true;

        if chance(rng, self.config.deceased_date_probability) {
            let date = self.random_past_date(rng);
            let year = chance(rng, self.config.known_year_probability).then(|| date.year());
            let date_id = self.store.set_special_date(
                contact,
                SpecialDateRole::DeceasedDate,
                year,
                u8::from(date.month()),
                date.day(),
            )?;
            report.special_dates += 1;

            let first_name = self.store.contact(contact)?.first_name.clone();
            self.store.set_reminder(
                date_id,
                ReminderFrequency::Yearly,
                1,
                format!("Commemorate the passing of {first_name}"),
            )?;
            report.reminders += 1;
        }
        Ok(())
    }

    fn populate_birthday(
        &mut self,
        contact: ContactId,
        rng: &mut impl Rng,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        if !chance(rng, self.config.birthday_probability) {
            return Ok(());
        }

        if chance(rng, self.config.exact_birthday_probability) {
            let date = self.random_past_date(rng);
            let year = chance(rng, self.config.known_year_probability).then(|| date.year());
            let date_id = self.store.set_special_date(
                contact,
                SpecialDateRole::Birthdate,
                year,
                u8::from(date.month()),
                date.day(),
            )?;
            report.special_dates += 1;

            let first_name = self.store.contact(contact)?.first_name.clone();
            self.store.set_reminder(
                date_id,
                ReminderFrequency::Yearly,
                1,
                format!("Wish {first_name} a happy birthday"),
            )?;
            report.reminders += 1;
        } else {
            // Only an approximate age is known; no reminder for a guess.
            let age = self.contact_gen.random_age(rng);
            self.store
                .set_special_date_from_age(contact, SpecialDateRole::Birthdate, age)?;
            report.special_dates += 1;
        }
        Ok(())
    }

    fn populate_first_met(
        &mut self,
        contact: ContactId,
        rng: &mut impl Rng,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        if !chance(rng, self.config.first_met_probability) {
            return Ok(());
        }

        let first_met = self.contact_gen.generate_first_met(rng);
        {
            let record = self.store.contact_mut(contact)?;
            record.first_met_where = first_met.location;
            record.first_met_additional_info = first_met.additional_info;
        }

        let date = self.random_past_date(rng);
        let year = chance(rng, self.config.known_year_probability).then(|| date.year());
        let date_id = self.store.set_special_date(
            contact,
            SpecialDateRole::FirstMet,
            year,
            u8::from(date.month()),
            date.day(),
        )?;
        report.special_dates += 1;

        let first_name = self.store.contact(contact)?.first_name.clone();
        self.store.set_reminder(
            date_id,
            ReminderFrequency::Yearly,
            1,
            format!("Anniversary of meeting {first_name}"),
        )?;
        report.reminders += 1;
        Ok(())
    }

    fn populate_relationships(
        &mut self,
        account: AccountId,
        contact: ContactId,
        rng: &mut impl Rng,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        if !chance(rng, self.config.relationships_probability) {
            return Ok(());
        }

        for _ in 0..sample(rng, self.config.relationships_per_contact) {
            let generated = self.contact_gen.generate(rng);

            let related = if chance(rng, self.config.placeholder_probability) {
                let related = self.store.create_placeholder_contact(
                    account,
                    generated.first_name,
                    generated.last_name,
                    generated.gender,
                )?;
                report.placeholder_contacts += 1;
                related
            } else {
                self.store.create_contact(
                    account,
                    NewContact {
                        first_name: generated.first_name,
                        last_name: generated.last_name,
                        nickname: generated.nickname,
                        gender: generated.gender,
                        is_starred: false,
                    },
                )?
            };
            report.contacts += 1;

            // Related contacts get a birthdate and reminder of their own.
            let birthdate = self.random_past_date(rng);
            let year = chance(rng, self.config.known_year_probability).then(|| birthdate.year());
            let date_id = self.store.set_special_date(
                related,
                SpecialDateRole::Birthdate,
                year,
                u8::from(birthdate.month()),
                birthdate.day(),
            )?;
            report.special_dates += 1;

            let first_name = self.store.contact(related)?.first_name.clone();
            self.store.set_reminder(
                date_id,
                ReminderFrequency::Yearly,
                1,
                format!("Wish {first_name} a happy birthday"),
            )?;
            report.reminders += 1;

            let type_id = self.store.relationship_types().random_type(rng);
            self.store.set_relationship(contact, related, type_id)?;
            report.relationships += 1;
        }
        Ok(())
    }

    fn populate_notes(
        &mut self,
        contact: ContactId,
        rng: &mut impl Rng,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        if !chance(rng, self.config.notes_probability) {
            return Ok(());
        }
        let today = self.store.today();
        for _ in 0..sample(rng, self.config.notes_per_contact) {
            let note = self.attachment_gen.generate_note(today, rng);
            self.store.add_note(
                contact,
                NewNote {
                    body: note.body,
                    is_favorited: note.is_favorited,
                    favorited_at: note.favorited_at,
                },
            )?;
            report.notes += 1;
        }
        Ok(())
    }

    fn populate_activities(
        &mut self,
        contact: ContactId,
        rng: &mut impl Rng,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        if !chance(rng, self.config.activities_probability) {
            return Ok(());
        }
        let today = self.store.today();
        for _ in 0..sample(rng, self.config.activities_per_contact) {
            let activity = self.journal_gen.generate_activity(today, rng);
            self.store.add_activity(
                contact,
                NewActivity {
                    summary: activity.summary,
                    description: activity.description,
                    happened_on: Some(activity.happened_on),
                    activity_type_id: activity.activity_type_id,
                },
            )?;
            report.activities += 1;
        }
        Ok(())
    }

    fn populate_tasks(
        &mut self,
        contact: ContactId,
        rng: &mut impl Rng,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        if !chance(rng, self.config.tasks_probability) {
            return Ok(());
        }
        let today = self.store.today();
        for _ in 0..sample(rng, self.config.tasks_per_contact) {
            let task = self.attachment_gen.generate_task(today, rng);
            self.store.add_task(
                contact,
                NewTask {
                    title: task.title,
                    description: task.description,
                    completed: task.completed,
                    completed_at: task.completed_at,
                },
            )?;
            report.tasks += 1;
        }
        Ok(())
    }

    fn populate_debts(
        &mut self,
        contact: ContactId,
        rng: &mut impl Rng,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        if !chance(rng, self.config.debts_probability) {
            return Ok(());
        }
        for _ in 0..sample(rng, self.config.debts_per_contact) {
            let debt = self.attachment_gen.generate_debt(rng);
            self.store.add_debt(
                contact,
                NewDebt {
                    direction: debt.direction,
                    amount: debt.amount,
                    reason: debt.reason,
                },
            )?;
            report.debts += 1;
        }
        Ok(())
    }

    fn populate_gifts(
        &mut self,
        contact: ContactId,
        rng: &mut impl Rng,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        if !chance(rng, self.config.gifts_probability) {
            return Ok(());
        }
        for _ in 0..sample(rng, self.config.gifts_per_contact) {
            let gift = self.attachment_gen.generate_gift(rng);
            self.store.add_gift(
                contact,
                NewGift {
                    name: gift.name,
                    comment: gift.comment,
                    url: gift.url,
                    value: gift.value,
                    is_an_idea: true,
                    has_been_offered: false,
                },
            )?;
            report.gifts += 1;
        }
        Ok(())
    }

    fn populate_calls(
        &mut self,
        contact: ContactId,
        rng: &mut impl Rng,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        if chance(rng, self.config.calls_probability) {
            let today = self.store.today();
            let called_at = self.attachment_gen.generate_call_time(today, rng);
            self.store.add_call(contact, called_at)?;
            report.calls += 1;
        }
        Ok(())
    }

    fn populate_addresses(
        &mut self,
        contact: ContactId,
        rng: &mut impl Rng,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        if chance(rng, self.config.addresses_probability) {
            let address = self.attachment_gen.generate_address(rng);
            self.store.add_address(
                contact,
                NewAddress {
                    name: address.name,
                    street: address.street,
                    city: address.city,
                    province: address.province,
                    postal_code: address.postal_code,
                    country: address.country,
                },
            )?;
            report.addresses += 1;
        }
        Ok(())
    }

    fn populate_pets(
        &mut self,
        contact: ContactId,
        rng: &mut impl Rng,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        if !chance(rng, self.config.pets_probability) {
            return Ok(());
        }
        for _ in 0..sample(rng, self.config.pets_per_contact) {
            let pet = self.attachment_gen.generate_pet(rng);
            self.store.add_pet(contact, pet.category, pet.name)?;
            report.pets += 1;
        }
        Ok(())
    }

    fn populate_conversations(
        &mut self,
        contact: ContactId,
        rng: &mut impl Rng,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        if !chance(rng, self.config.conversations_probability) {
            return Ok(());
        }
        let today = self.store.today();
        for _ in 0..sample(rng, self.config.conversations_per_contact) {
            let happened_at = self.attachment_gen.generate_call_time(today, rng);
            let messages: Vec<NewMessage> = (0..sample(rng, self.config.messages_per_conversation))
                .map(|_| {
                    let message = self.attachment_gen.generate_message(today, rng);
                    NewMessage {
                        written_at: message.written_at,
                        written_by_me: message.written_by_me,
                        content: message.content,
                    }
                })
                .collect();
            report.messages += messages.len();
            self.store.add_conversation(contact, happened_at, messages)?;
            report.conversations += 1;
        }
        Ok(())
    }

    fn populate_life_events(
        &mut self,
        contact: ContactId,
        rng: &mut impl Rng,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        if !chance(rng, self.config.life_events_probability) {
            return Ok(());
        }
        let today = self.store.today();
        for _ in 0..sample(rng, self.config.life_events_per_contact) {
            let event = self.attachment_gen.generate_life_event(today, rng);
            self.store.add_life_event(
                contact,
                NewLifeEvent {
                    kind: event.kind,
                    happened_on: event.happened_on,
                    name: event.name,
                    note: event.note,
                },
            )?;
            report.life_events += 1;
        }
        Ok(())
    }

    /// Email and phone, each present on roughly half the contacts.
    fn populate_contact_fields(
        &mut self,
        contact: ContactId,
        rng: &mut impl Rng,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        for kind in [ContactFieldKind::Email, ContactFieldKind::Phone] {
            if chance(rng, self.config.contact_fields_probability) {
                let field = self.attachment_gen.generate_contact_field(kind, rng);
                self.store.add_contact_field(contact, field.kind, field.value)?;
                report.contact_fields += 1;
            }
        }
        Ok(())
    }

    /// Marks some contacts as introduced through another primary contact.
    fn link_introductions(
        &mut self,
        primaries: &[ContactId],
        rng: &mut impl Rng,
    ) -> Result<(), SeedError> {
        if primaries.len() < 2 {
            return Ok(());
        }
        for (idx, &contact) in primaries.iter().enumerate() {
            if !chance(rng, self.config.met_through_probability) {
                continue;
            }
            // Anyone but the contact itself.
            let mut other = rng.gen_range(0..primaries.len() - 1);
            if other >= idx {
                other += 1;
            }
            self.store.contact_mut(contact)?.first_met_through = Some(primaries[other]);
        }
        Ok(())
    }

    fn populate_entries(
        &mut self,
        account: AccountId,
        rng: &mut impl Rng,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        let count = sample(rng, self.config.entries_per_account);
        let today = self.store.today();
        info!("Seeding {count} journal entries...");
        for _ in 0..count {
            let entry = self.journal_gen.generate_entry(today, rng);
            self.store.add_entry(
                account,
                NewEntry {
                    title: entry.title,
                    post: entry.post,
                    written_on: Some(entry.written_on),
                },
            )?;
            report.entries += 1;
        }
        Ok(())
    }

    fn populate_day_ratings(
        &mut self,
        account: AccountId,
        rng: &mut impl Rng,
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        let count = sample(rng, self.config.day_ratings_per_account);
        let today = self.store.today();
        info!("Seeding {count} day ratings...");
        for _ in 0..count {
            let rating = self.journal_gen.generate_day_rating(today, rng);
            self.store
                .add_day_rating(account, rating.rated_on, rating.rating)?;
            report.day_ratings += 1;
        }
        Ok(())
    }

    fn touch_last_consulted(
        &mut self,
        contact: ContactId,
        rng: &mut impl Rng,
    ) -> Result<(), SeedError> {
        let today = self.store.today();
        let consulted_at = self.attachment_gen.generate_call_time(today, rng);
        self.store.contact_mut(contact)?.last_consulted_at = Some(consulted_at);
        Ok(())
    }

    /// A date within the last hundred years, for birthdates and similar.
    fn random_past_date(&self, rng: &mut impl Rng) -> Date {
        self.store.today() - Duration::days(rng.gen_range(365..36_500))
    }
}

fn chance(rng: &mut impl Rng, probability: f64) -> bool {
    rng.r#gen::<f64>() < probability
}

fn sample(rng: &mut impl Rng, (lo, hi): (usize, usize)) -> usize {
    rng.gen_range(lo..=hi)
}
