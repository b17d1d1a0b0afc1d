//! Core records for a personal relationship manager: accounts, contacts,
//! journalable records (activities, entries, day ratings), and the smaller
//! attachments a contact can carry (notes, tasks, debts, gifts, ...).

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

uuid_id!(
    /// Identifier for an account (one user's data set).
    AccountId
);
uuid_id!(
    /// Identifier for a contact within an account.
    ContactId
);
uuid_id!(
    /// Identifier for a special date attached to a contact.
    SpecialDateId
);
uuid_id!(
    /// Identifier for a reminder attached to a special date.
    ReminderId
);
uuid_id!(
    /// Identifier for a row in the journal index.
    JournalEntryId
);
uuid_id!(
    /// Identifier for an activity shared with a contact.
    ActivityId
);
uuid_id!(
    /// Identifier for a free-form journal entry.
    EntryId
);
uuid_id!(
    /// Identifier for a day rating.
    DayRatingId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// A person tracked in an account.
///
/// Contacts created only to stand on the other side of a relationship are
/// flagged `is_partial` and usually carry a reduced field set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub account_id: AccountId,
    pub first_name: String,
    pub last_name: Option<String>,
    pub nickname: Option<String>,
    pub gender: Option<Gender>,
    pub is_starred: bool,
    pub is_partial: bool,
    pub is_dead: bool,
    pub food_preferences: Option<String>,
    pub first_met_where: Option<String>,
    pub first_met_additional_info: Option<String>,
    pub first_met_through: Option<ContactId>,
    pub last_consulted_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}

impl Contact {
    /// The contact's display name: "First Last" when the last name is known.
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {last}", self.first_name),
            None => self.first_name.clone(),
        }
    }
}

/// Parameters for creating a full (non-placeholder) contact.
#[derive(Debug, Clone, Default)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: Option<String>,
    pub nickname: Option<String>,
    pub gender: Option<Gender>,
    pub is_starred: bool,
}

/// Something done together with a contact, shown in the unified journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub account_id: AccountId,
    pub contact_id: ContactId,
    pub summary: String,
    pub description: Option<String>,
    /// The date the activity happened (its semantic journal date).
    pub happened_on: Date,
    pub activity_type_id: u16,
}

#[derive(Debug, Clone, Default)]
pub struct NewActivity {
    pub summary: String,
    pub description: Option<String>,
    pub happened_on: Option<Date>,
    pub activity_type_id: u16,
}

/// A free-form journal entry, not tied to any contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub account_id: AccountId,
    pub title: String,
    pub post: String,
    pub written_on: Date,
}

#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub title: String,
    pub post: String,
    pub written_on: Option<Date>,
}

/// A 1-3 rating of how a day went.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRating {
    pub id: DayRatingId,
    pub account_id: AccountId,
    pub rated_on: Date,
    pub rating: u8,
}

/// A note written about a contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub contact_id: ContactId,
    pub body: String,
    pub is_favorited: bool,
    pub favorited_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Default)]
pub struct NewNote {
    pub body: String,
    pub is_favorited: bool,
    pub favorited_at: Option<OffsetDateTime>,
}

/// A task related to a contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub contact_id: ContactId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub completed_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub completed_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtDirection {
    /// The contact owes the account holder.
    ContactOwesUser,
    /// The account holder owes the contact.
    UserOwesContact,
}

/// Money owed between the account holder and a contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub id: Uuid,
    pub contact_id: ContactId,
    pub direction: DebtDirection,
    pub amount: u32,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct NewDebt {
    pub direction: DebtDirection,
    pub amount: u32,
    pub reason: String,
}

/// A gift idea (or offered gift) for a contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gift {
    pub id: Uuid,
    pub contact_id: ContactId,
    pub name: String,
    pub comment: Option<String>,
    pub url: Option<String>,
    pub value: u32,
    pub is_an_idea: bool,
    pub has_been_offered: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NewGift {
    pub name: String,
    pub comment: Option<String>,
    pub url: Option<String>,
    pub value: u32,
    pub is_an_idea: bool,
    pub has_been_offered: bool,
}

/// A phone call logged against a contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Call {
    pub id: Uuid,
    pub contact_id: ContactId,
    pub called_at: OffsetDateTime,
}

/// A postal address for a contact. Every component is optional except the
/// label; real address books are full of half-known addresses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: Uuid,
    pub contact_id: ContactId,
    pub name: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewAddress {
    pub name: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// A logged exchange with a contact held on another medium (texts, DMs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub contact_id: ContactId,
    pub happened_at: OffsetDateTime,
    pub messages: Vec<Message>,
}

/// One message inside a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub written_at: OffsetDateTime,
    /// Whether the account holder wrote it, as opposed to the contact.
    pub written_by_me: bool,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct NewMessage {
    pub written_at: OffsetDateTime,
    pub written_by_me: bool,
    pub content: String,
}

/// The closed set of milestones a contact's timeline can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeEventKind {
    NewJob,
    Retirement,
    NewSchool,
    StudyAbroad,
    VolunteerWork,
    Engagement,
    Marriage,
    NewChild,
    NewPet,
    Moved,
    Travel,
    Surgery,
}

impl LifeEventKind {
    pub const ALL: [LifeEventKind; 12] = [
        LifeEventKind::NewJob,
        LifeEventKind::Retirement,
        LifeEventKind::NewSchool,
        LifeEventKind::StudyAbroad,
        LifeEventKind::VolunteerWork,
        LifeEventKind::Engagement,
        LifeEventKind::Marriage,
        LifeEventKind::NewChild,
        LifeEventKind::NewPet,
        LifeEventKind::Moved,
        LifeEventKind::Travel,
        LifeEventKind::Surgery,
    ];
}

/// A dated milestone on a contact's timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifeEvent {
    pub id: Uuid,
    pub contact_id: ContactId,
    pub kind: LifeEventKind,
    pub happened_on: Date,
    pub name: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewLifeEvent {
    pub kind: LifeEventKind,
    pub happened_on: Date,
    pub name: Option<String>,
    pub note: Option<String>,
}

/// The closed set of ways to reach a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactFieldKind {
    Email,
    Phone,
    Facebook,
    Twitter,
    Whatsapp,
    Telegram,
    LinkedIn,
}

impl ContactFieldKind {
    pub const ALL: [ContactFieldKind; 7] = [
        ContactFieldKind::Email,
        ContactFieldKind::Phone,
        ContactFieldKind::Facebook,
        ContactFieldKind::Twitter,
        ContactFieldKind::Whatsapp,
        ContactFieldKind::Telegram,
        ContactFieldKind::LinkedIn,
    ];
}

/// A way to reach a contact (email address, phone number, handle).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactField {
    pub id: Uuid,
    pub contact_id: ContactId,
    pub kind: ContactFieldKind,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetCategory {
    Dog,
    Cat,
    Bird,
    Fish,
    Hamster,
    Rabbit,
    Reptile,
    Horse,
    Other,
}

/// A pet belonging to a contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub id: Uuid,
    pub contact_id: ContactId,
    pub category: PetCategory,
    pub name: Option<String>,
}
