//! Journalable record generation: activities, free-form entries, and day
//! ratings.

use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::Fake;
use rand::Rng;
use time::{Date, Duration};

/// Generated activity, dated within the recent past.
#[derive(Debug, Clone)]
pub struct GeneratedActivity {
    pub summary: String,
    pub description: Option<String>,
    pub happened_on: Date,
    pub activity_type_id: u16,
}

/// Generated free-form journal entry.
#[derive(Debug, Clone)]
pub struct GeneratedEntry {
    pub title: String,
    pub post: String,
    pub written_on: Date,
}

/// Generated day rating.
#[derive(Debug, Clone)]
pub struct GeneratedDayRating {
    pub rated_on: Date,
    pub rating: u8,
}

/// Configuration for journalable generation.
#[derive(Debug, Clone)]
pub struct JournalGenConfig {
    /// Probability that an activity has a long description.
    pub description_probability: f64,
    /// Number of distinct activity types to spread activities over.
    pub activity_type_count: u16,
    /// How far back in the past journalable dates may fall.
    pub history_days: i64,
}

impl Default for JournalGenConfig {
    fn default() -> Self {
        Self {
            description_probability: 0.5,
            activity_type_count: 13,
            history_days: 365,
        }
    }
}

/// Generates journalable records.
pub struct JournalGenerator {
    config: JournalGenConfig,
}

impl JournalGenerator {
    /// Creates a new journal generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: JournalGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: JournalGenConfig) -> Self {
        Self { config }
    }

    /// Generates an activity dated within the configured history window.
    pub fn generate_activity(&self, today: Date, rng: &mut impl Rng) -> GeneratedActivity {
        let description = if rng.r#gen::<f64>() < self.config.description_probability {
            Some(Paragraph(2..5).fake_with_rng(rng))
        } else {
            None
        };

        GeneratedActivity {
            summary: Sentence(4..10).fake_with_rng(rng),
            description,
            happened_on: self.random_date(today, rng),
            activity_type_id: rng.gen_range(1..=self.config.activity_type_count),
        }
    }

    /// Generates a free-form entry dated within the history window.
    pub fn generate_entry(&self, today: Date, rng: &mut impl Rng) -> GeneratedEntry {
        GeneratedEntry {
            title: Sentence(2..5).fake_with_rng(rng),
            post: Paragraph(3..6).fake_with_rng(rng),
            written_on: self.random_date(today, rng),
        }
    }

    /// Generates a day rating within the history window.
    pub fn generate_day_rating(&self, today: Date, rng: &mut impl Rng) -> GeneratedDayRating {
        GeneratedDayRating {
            rated_on: self.random_date(today, rng),
            rating: rng.gen_range(1..=3),
        }
    }

    /// A date up to `history_days` in the past.
    pub fn random_date(&self, today: Date, rng: &mut impl Rng) -> Date {
        today - Duration::days(rng.gen_range(0..self.config.history_days))
    }
}

impl Default for JournalGenerator {
    fn default() -> Self {
        Self::new()
    }
}
