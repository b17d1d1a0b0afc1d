//! Domain model for a personal relationship manager.
//!
//! The interesting parts live in three sub-models:
//!
//! - [`dates`] / [`reminders`]: fuzzy calendar dates whose year may be
//!   unknown, with recurring reminders computed from the month/day pair.
//! - [`relationships`]: a symmetric contact graph where every edge is
//!   materialized together with its reciprocal (parent ↔ child).
//! - [`journal`]: an append-only, date-ordered index unifying heterogeneous
//!   records (activities, entries, day ratings) into one feed.
//!
//! [`store::ContactStore`] ties them together with contact lifecycle and
//! cascade rules, backed by plain in-memory tables.

pub mod dates;
pub mod errors;
pub mod journal;
pub mod models;
pub mod relationships;
pub mod reminders;
pub mod store;

pub use errors::Error;
pub use store::ContactStore;
