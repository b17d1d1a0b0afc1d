//! Configuration for fixture generation.

use serde::{Deserialize, Serialize};

/// Probability and volume knobs for seeding an account.
///
/// Defaults reproduce the odds of the original hand-rolled seeder: most
/// features appear on roughly half the contacts, rarer ones (death, pets,
/// addresses) on a third to a seventh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// How many primary contacts to create (inclusive range).
    pub contact_count: (usize, usize),

    /// Probability that a contact is starred.
    pub starred_probability: f64,

    /// Probability that a contact has food preferences recorded.
    pub food_preferences_probability: f64,

    /// Probability that a contact is deceased.
    pub deceased_probability: f64,
    /// Probability that a deceased contact has a known deceased date.
    pub deceased_date_probability: f64,

    /// Probability that a contact has a birthday recorded.
    pub birthday_probability: f64,
    /// Probability that a recorded birthday is an exact date rather than
    /// derived from an approximate age.
    pub exact_birthday_probability: f64,
    /// Probability that an exact date carries its year (otherwise the year
    /// is unknown and only the month/day recur).
    pub known_year_probability: f64,

    /// Probability that first-met information is recorded.
    pub first_met_probability: f64,
    /// Probability that a contact was introduced by another contact.
    pub met_through_probability: f64,

    /// Probability that a contact has relationships.
    pub relationships_probability: f64,
    /// How many related contacts to fan out per contact (inclusive range).
    pub relationships_per_contact: (usize, usize),
    /// Probability that a related contact is a bare placeholder rather than
    /// a fully populated contact.
    pub placeholder_probability: f64,

    /// Probability and volume of notes per contact.
    pub notes_probability: f64,
    pub notes_per_contact: (usize, usize),

    /// Probability and volume of activities per contact.
    pub activities_probability: f64,
    pub activities_per_contact: (usize, usize),

    /// Probability and volume of tasks per contact.
    pub tasks_probability: f64,
    pub tasks_per_contact: (usize, usize),

    /// Probability and volume of debts per contact.
    pub debts_probability: f64,
    pub debts_per_contact: (usize, usize),

    /// Probability and volume of gift ideas per contact.
    pub gifts_probability: f64,
    pub gifts_per_contact: (usize, usize),

    /// Probability that a contact has a logged call.
    pub calls_probability: f64,

    /// Probability that a contact has an address.
    pub addresses_probability: f64,

    /// Probability and volume of pets per contact.
    pub pets_probability: f64,
    pub pets_per_contact: (usize, usize),

    /// Probability and volume of logged conversations per contact; each
    /// conversation carries a number of messages.
    pub conversations_probability: f64,
    pub conversations_per_contact: (usize, usize),
    pub messages_per_conversation: (usize, usize),

    /// Probability and volume of life events per contact.
    pub life_events_probability: f64,
    pub life_events_per_contact: (usize, usize),

    /// Probability that each reachable-field kind (email, phone) is
    /// recorded for a contact.
    pub contact_fields_probability: f64,

    /// Free-form journal entries per account (inclusive range).
    pub entries_per_account: (usize, usize),

    /// Day ratings per account (inclusive range).
    pub day_ratings_per_account: (usize, usize),
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            contact_count: (60, 100),
            starred_probability: 0.2,
            food_preferences_probability: 0.5,
            deceased_probability: 1.0 / 7.0,
            deceased_date_probability: 1.0 / 3.0,
            birthday_probability: 0.5,
            exact_birthday_probability: 0.5,
            known_year_probability: 0.5,
            first_met_probability: 0.5,
            met_through_probability: 0.5,
            relationships_probability: 0.5,
            relationships_per_contact: (2, 6),
            placeholder_probability: 0.5,
            notes_probability: 0.5,
            notes_per_contact: (1, 13),
            activities_probability: 0.5,
            activities_per_contact: (1, 13),
            tasks_probability: 0.5,
            tasks_per_contact: (1, 10),
            debts_probability: 0.5,
            debts_per_contact: (1, 6),
            gifts_probability: 0.5,
            gifts_per_contact: (1, 31),
            calls_probability: 1.0 / 3.0,
            addresses_probability: 1.0 / 3.0,
            pets_probability: 1.0 / 3.0,
            pets_per_contact: (1, 3),
            // Conversations and life events appear on every contact, like
            // the original data set.
            conversations_probability: 1.0,
            conversations_per_contact: (1, 10),
            messages_per_conversation: (1, 10),
            life_events_probability: 1.0,
            life_events_per_contact: (1, 8),
            contact_fields_probability: 0.5,
            entries_per_account: (10, 100),
            day_ratings_per_account: (10, 100),
        }
    }
}

impl SeedConfig {
    /// A small configuration for quick smoke runs and tests.
    pub fn small() -> Self {
        Self {
            contact_count: (5, 8),
            relationships_per_contact: (1, 2),
            notes_per_contact: (1, 3),
            activities_per_contact: (1, 3),
            tasks_per_contact: (1, 2),
            debts_per_contact: (1, 2),
            gifts_per_contact: (1, 3),
            conversations_per_contact: (1, 2),
            messages_per_conversation: (1, 3),
            life_events_per_contact: (1, 2),
            entries_per_account: (3, 6),
            day_ratings_per_account: (3, 6),
            ..Self::default()
        }
    }
}
