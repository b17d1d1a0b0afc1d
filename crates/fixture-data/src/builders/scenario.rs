//! Fluent builder for constructing seeded accounts.

use rand::Rng;

use contacts::models::AccountId;
use contacts::ContactStore;

use crate::config::SeedConfig;
use crate::seed::{SeedError, SeedReport, Seeder};

/// Result of building a scenario: the seeded account and what went into it.
#[derive(Debug)]
pub struct ScenarioResult {
    pub account: AccountId,
    pub report: SeedReport,
}

/// Builder for populating an account in one call.
///
/// # Example
///
/// ```rust,ignore
/// let mut store = ContactStore::default();
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let result = ScenarioBuilder::new()
///     .with_contacts(25)
///     .without_attachments()
///     .build(&mut store, &mut rng)?;
/// ```
pub struct ScenarioBuilder {
    config: SeedConfig,
}

impl ScenarioBuilder {
    /// Creates a builder with the default seeding configuration.
    pub fn new() -> Self {
        Self {
            config: SeedConfig::default(),
        }
    }

    /// Creates a builder with a small configuration for quick runs.
    pub fn small() -> Self {
        Self {
            config: SeedConfig::small(),
        }
    }

    /// Replaces the whole configuration.
    pub fn with_seed_config(mut self, config: SeedConfig) -> Self {
        self.config = config;
        self
    }

    /// Fixes the number of primary contacts.
    pub fn with_contacts(mut self, count: usize) -> Self {
        self.config.contact_count = (count, count);
        self
    }

    /// Sets how many related contacts fan out per contact.
    pub fn with_relationship_fanout(mut self, min: usize, max: usize) -> Self {
        self.config.relationships_probability = 1.0;
        self.config.relationships_per_contact = (min, max);
        self
    }

    /// Disables notes, tasks, debts, gifts, calls, addresses, pets,
    /// conversations, life events, and contact fields, leaving only
    /// contacts, dates, relationships, and the journal.
    pub fn without_attachments(mut self) -> Self {
        self.config.notes_probability = 0.0;
        self.config.tasks_probability = 0.0;
        self.config.debts_probability = 0.0;
        self.config.gifts_probability = 0.0;
        self.config.calls_probability = 0.0;
        self.config.addresses_probability = 0.0;
        self.config.pets_probability = 0.0;
        self.config.conversations_probability = 0.0;
        self.config.life_events_probability = 0.0;
        self.config.contact_fields_probability = 0.0;
        self
    }

    /// Sets the volume of account-level entries and day ratings.
    pub fn with_journal_volume(mut self, min: usize, max: usize) -> Self {
        self.config.entries_per_account = (min, max);
        self.config.day_ratings_per_account = (min, max);
        self
    }

    /// Creates an account in the store and populates it.
    pub fn build(
        self,
        store: &mut ContactStore,
        rng: &mut impl Rng,
    ) -> Result<ScenarioResult, SeedError> {
        let account = store.create_account();
        let report = Seeder::with_config(store, self.config).populate_account(account, rng)?;
        Ok(ScenarioResult { account, report })
    }
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fixed_contact_count() {
        let mut store = ContactStore::default();
        let mut rng = StdRng::seed_from_u64(5);

        let result = ScenarioBuilder::small()
            .with_contacts(4)
            .without_attachments()
            .with_journal_volume(1, 2)
            .build(&mut store, &mut rng)
            .unwrap();

        // Related contacts may push the total above the primary count.
        assert!(result.report.contacts >= 4);
        assert_eq!(result.report.notes, 0);
        assert_eq!(result.report.pets, 0);
        assert_eq!(result.report.conversations, 0);
        assert_eq!(result.report.life_events, 0);
    }

    #[test]
    fn test_journal_volume_bounds() {
        let mut store = ContactStore::default();
        let mut rng = StdRng::seed_from_u64(6);

        let result = ScenarioBuilder::small()
            .with_contacts(1)
            .with_journal_volume(3, 3)
            .build(&mut store, &mut rng)
            .unwrap();

        assert_eq!(result.report.entries, 3);
        assert_eq!(result.report.day_ratings, 3);
    }
}
