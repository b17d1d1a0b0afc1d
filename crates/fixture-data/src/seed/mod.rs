//! Store seeding orchestration.
//!
//! The [`Seeder`] drives the generators against a [`contacts::ContactStore`],
//! populating an account the way a long-time user of the app would have:
//! contacts with partial dates, reminders, relationship fan-outs, and a
//! journal full of activities, entries, and day ratings.

mod seeder;

pub use seeder::{SeedError, SeedReport, Seeder};
