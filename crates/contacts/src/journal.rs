//! The unified journal: a date-ordered index over heterogeneous records.
//!
//! Activities, free-form entries, and day ratings all land in one
//! chronological feed. The index never resolves a record by id; it only
//! carries `(date, kind, id)` triples that a renderer joins against the
//! strongly-typed tables.

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::models::{AccountId, JournalEntryId};

/// The closed set of record kinds that can appear in the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalableKind {
    Activity,
    Entry,
    DayRating,
}

/// One index row. Exactly one row exists per underlying journalable record,
/// and its `date` equals the record's semantic date (when an activity
/// happened, when an entry was written, which day was rated).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalRow {
    pub id: JournalEntryId,
    pub account_id: AccountId,
    pub date: Date,
    pub kind: JournalableKind,
    pub journalable_id: Uuid,
}

/// Append-only index over an account's journalable records.
///
/// Rows are kept in insertion order; reads re-scan and stable-sort, so ties
/// on the same date come back in the order they were recorded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalIndex {
    rows: Vec<JournalRow>,
}

impl JournalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one row. Idempotency is the caller's responsibility: callers
    /// must record each underlying record exactly once.
    pub fn record(
        &mut self,
        account_id: AccountId,
        date: Date,
        kind: JournalableKind,
        journalable_id: Uuid,
    ) -> JournalEntryId {
        let id = JournalEntryId::new();
        self.rows.push(JournalRow {
            id,
            account_id,
            date,
            kind,
            journalable_id,
        });
        id
    }

    /// Rows for one account within `[from, to]`, ascending by date, ties in
    /// insertion order. Each call is a fresh scan; no cursor state survives
    /// between calls.
    pub fn list_by_date_range(
        &self,
        account_id: AccountId,
        from: Date,
        to: Date,
    ) -> impl Iterator<Item = &JournalRow> + '_ {
        let mut rows: Vec<&JournalRow> = self
            .rows
            .iter()
            .filter(|r| r.account_id == account_id && r.date >= from && r.date <= to)
            .collect();
        rows.sort_by_key(|r| r.date);
        rows.into_iter()
    }

    /// Drops the row indexing a given record. Cascade hook for record
    /// deletion.
    pub fn remove_journalable(&mut self, kind: JournalableKind, journalable_id: Uuid) {
        self.rows
            .retain(|r| !(r.kind == kind && r.journalable_id == journalable_id));
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[JournalRow] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn d(year: i32, month: u8, day: u8) -> Date {
        Date::from_calendar_date(year, Month::try_from(month).unwrap(), day).unwrap()
    }

    fn all_time() -> (Date, Date) {
        (d(1900, 1, 1), d(2100, 12, 31))
    }

    #[test]
    fn test_ordering_and_insertion_order_ties() {
        let mut index = JournalIndex::new();
        let account = AccountId::new();

        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let third = Uuid::new_v4();

        index.record(account, d(2021, 1, 5), JournalableKind::Activity, first);
        index.record(account, d(2020, 6, 1), JournalableKind::Entry, second);
        index.record(account, d(2021, 1, 5), JournalableKind::DayRating, third);

        let (from, to) = all_time();
        let feed: Vec<_> = index.list_by_date_range(account, from, to).collect();

        assert_eq!(feed.len(), 3);
        assert_eq!(feed[0].journalable_id, second);
        assert_eq!(feed[0].date, d(2020, 6, 1));
        // Same-date rows keep the order they were recorded in.
        assert_eq!(feed[1].journalable_id, first);
        assert_eq!(feed[2].journalable_id, third);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let mut index = JournalIndex::new();
        let account = AccountId::new();

        index.record(account, d(2021, 1, 1), JournalableKind::Entry, Uuid::new_v4());
        index.record(account, d(2021, 1, 2), JournalableKind::Entry, Uuid::new_v4());
        index.record(account, d(2021, 1, 3), JournalableKind::Entry, Uuid::new_v4());

        let feed: Vec<_> = index
            .list_by_date_range(account, d(2021, 1, 1), d(2021, 1, 2))
            .collect();
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn test_accounts_are_isolated() {
        let mut index = JournalIndex::new();
        let (a, b) = (AccountId::new(), AccountId::new());

        index.record(a, d(2021, 5, 5), JournalableKind::Activity, Uuid::new_v4());
        index.record(b, d(2021, 5, 5), JournalableKind::Activity, Uuid::new_v4());

        let (from, to) = all_time();
        assert_eq!(index.list_by_date_range(a, from, to).count(), 1);
        assert_eq!(index.list_by_date_range(b, from, to).count(), 1);
    }

    #[test]
    fn test_scan_is_restartable() {
        let mut index = JournalIndex::new();
        let account = AccountId::new();
        index.record(account, d(2021, 2, 2), JournalableKind::Entry, Uuid::new_v4());

        let (from, to) = all_time();
        let first: Vec<_> = index.list_by_date_range(account, from, to).collect();
        let second: Vec<_> = index.list_by_date_range(account, from, to).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_remove_journalable() {
        let mut index = JournalIndex::new();
        let account = AccountId::new();
        let target = Uuid::new_v4();

        index.record(account, d(2021, 3, 3), JournalableKind::Activity, target);
        index.record(account, d(2021, 3, 3), JournalableKind::Activity, Uuid::new_v4());
        // Same id under a different kind must survive.
        index.record(account, d(2021, 3, 3), JournalableKind::Entry, target);

        index.remove_journalable(JournalableKind::Activity, target);
        assert_eq!(index.len(), 2);
    }
}
