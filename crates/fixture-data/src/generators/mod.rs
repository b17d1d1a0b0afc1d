//! Entity generators for fixture data.
//!
//! This module provides generators for creating realistic synthetic
//! entities:
//! - [`ContactGenerator`]: contacts with demographics and first-met context
//! - [`JournalGenerator`]: activities, free-form entries, and day ratings
//! - [`AttachmentGenerator`]: notes, tasks, debts, gifts, calls, addresses,
//!   pets, conversation messages, life events, and contact fields

pub mod attachment;
pub mod contact;
pub mod journal;

pub use attachment::{
    AttachmentGenConfig, AttachmentGenerator, GeneratedAddress, GeneratedContactField,
    GeneratedDebt, GeneratedGift, GeneratedLifeEvent, GeneratedMessage, GeneratedNote,
    GeneratedPet, GeneratedTask,
};
pub use contact::{ContactGenConfig, ContactGenerator, GeneratedContact, GeneratedFirstMet};
pub use journal::{
    GeneratedActivity, GeneratedDayRating, GeneratedEntry, JournalGenConfig, JournalGenerator,
};
