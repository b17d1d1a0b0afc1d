use thiserror::Error;

use crate::models::{AccountId, ContactId, ReminderId, SpecialDateId};
use crate::relationships::RelationshipTypeId;

/// Errors surfaced by the domain model.
///
/// All of these are local, non-retryable failures: they abort the current
/// unit of work for the contact or record at hand and are reported to the
/// caller as-is.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid date: {reason} (year {year:?}, month {month}, day {day})")]
    InvalidDate {
        year: Option<i32>,
        month: u8,
        day: u8,
        reason: &'static str,
    },

    #[error("unknown relationship type: {0}")]
    UnknownRelationshipType(RelationshipTypeId),

    #[error("invalid relationship type table: {0}")]
    InvalidTypeTable(&'static str),

    #[error("a contact cannot have a relationship with itself")]
    SelfRelationship,

    #[error("contacts belong to different accounts")]
    CrossAccountRelationship,

    #[error("account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("contact not found: {0}")]
    ContactNotFound(ContactId),

    #[error("special date not found: {0}")]
    SpecialDateNotFound(SpecialDateId),

    #[error("reminder not found: {0}")]
    ReminderNotFound(ReminderId),

    #[error("day rating must be between 1 and 3, got {0}")]
    InvalidDayRating(u8),
}
