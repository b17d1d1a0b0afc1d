//! Fixture generation for rolodex.
//!
//! This crate populates a [`contacts::ContactStore`] with synthetic but
//! plausible data: contacts with fuzzy birthdates and reminders, reciprocal
//! relationship fan-outs, and a journal of activities, entries, and day
//! ratings. Everything is driven by an injected `Rng`, so a seeded rng
//! reproduces an account exactly.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fixture_data::prelude::*;
//!
//! let mut store = ContactStore::default();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let result = ScenarioBuilder::new()
//!     .with_contacts(50)
//!     .with_relationship_fanout(2, 6)
//!     .build(&mut store, &mut rng)?;
//! ```

pub mod builders;
pub mod config;
pub mod generators;
pub mod seed;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{ScenarioBuilder, ScenarioResult};
    pub use crate::config::SeedConfig;
    pub use crate::generators::{AttachmentGenerator, ContactGenerator, JournalGenerator};
    pub use crate::seed::{SeedError, SeedReport, Seeder};
    pub use contacts::ContactStore;
}
