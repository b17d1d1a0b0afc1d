//! The in-memory account store.
//!
//! All mutation flows through [`ContactStore`], which gives every operation
//! the run-to-completion, single-writer transaction scope the domain
//! assumes: methods take `&mut self`, so two writers on one account cannot
//! be expressed within a process. Cross-process serialization is the
//! caller's problem.
//!
//! Persistence is out of scope; the store keeps plain tables and enforces
//! the domain invariants the ORM layer of a full deployment would carry
//! (one special date per role, reminder cascades, reciprocal relationship
//! pairs, one journal row per journalable record).

use std::collections::HashMap;

use time::util::days_in_year_month;
use time::{Date, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::dates::{FuzzyDate, SpecialDate, SpecialDateRole};
use crate::errors::Error;
use crate::journal::{JournalIndex, JournalRow, JournalableKind};
use crate::models::{
    AccountId, Activity, ActivityId, Address, Call, Contact, ContactField, ContactFieldKind,
    ContactId, Conversation, DayRating, DayRatingId, Debt, Entry, EntryId, Gender, Gift,
    LifeEvent, Message, NewActivity, NewAddress, NewContact, NewDebt, NewEntry, NewGift,
    NewLifeEvent, NewMessage, NewNote, NewTask, Note, Pet, PetCategory, ReminderId,
    SpecialDateId, Task,
};
use crate::relationships::{
    Relationship, RelationshipGraph, RelationshipTypeId, RelationshipTypeTable,
};
use crate::reminders::{next_occurrence, Reminder, ReminderFrequency};

pub struct ContactStore {
    today: Date,
    relationship_types: RelationshipTypeTable,
    accounts: Vec<AccountId>,
    contacts: HashMap<ContactId, Contact>,
    special_dates: HashMap<SpecialDateId, SpecialDate>,
    reminders: HashMap<ReminderId, Reminder>,
    graphs: HashMap<AccountId, RelationshipGraph>,
    journal: JournalIndex,
    activities: HashMap<ActivityId, Activity>,
    entries: HashMap<EntryId, Entry>,
    day_ratings: HashMap<DayRatingId, DayRating>,
    notes: Vec<Note>,
    tasks: Vec<Task>,
    debts: Vec<Debt>,
    gifts: Vec<Gift>,
    calls: Vec<Call>,
    addresses: Vec<Address>,
    pets: Vec<Pet>,
    conversations: Vec<Conversation>,
    life_events: Vec<LifeEvent>,
    contact_fields: Vec<ContactField>,
}

impl ContactStore {
    pub fn new(relationship_types: RelationshipTypeTable) -> Self {
        Self {
            today: OffsetDateTime::now_utc().date(),
            relationship_types,
            accounts: Vec::new(),
            contacts: HashMap::new(),
            special_dates: HashMap::new(),
            reminders: HashMap::new(),
            graphs: HashMap::new(),
            journal: JournalIndex::new(),
            activities: HashMap::new(),
            entries: HashMap::new(),
            day_ratings: HashMap::new(),
            notes: Vec::new(),
            tasks: Vec::new(),
            debts: Vec::new(),
            gifts: Vec::new(),
            calls: Vec::new(),
            addresses: Vec::new(),
            pets: Vec::new(),
            conversations: Vec::new(),
            life_events: Vec::new(),
            contact_fields: Vec::new(),
        }
    }

    /// Pins "today" for age derivation and reminder queries. Tests inject a
    /// fixed date here instead of reading the wall clock.
    pub fn with_today(mut self, today: Date) -> Self {
        self.today = today;
        self
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn relationship_types(&self) -> &RelationshipTypeTable {
        &self.relationship_types
    }

    // ---- accounts and contacts ----

    pub fn create_account(&mut self) -> AccountId {
        let id = AccountId::new();
        self.accounts.push(id);
        self.graphs.insert(id, RelationshipGraph::new());
        debug!(account = %id, "created account");
        id
    }

    fn check_account(&self, account_id: AccountId) -> Result<(), Error> {
        if self.accounts.contains(&account_id) {
            Ok(())
        } else {
            Err(Error::AccountNotFound(account_id))
        }
    }

    pub fn create_contact(
        &mut self,
        account_id: AccountId,
        new: NewContact,
    ) -> Result<ContactId, Error> {
        self.check_account(account_id)?;
        let id = ContactId::new();
        self.contacts.insert(
            id,
            Contact {
                id,
                account_id,
                first_name: new.first_name,
                last_name: new.last_name,
                nickname: new.nickname,
                gender: new.gender,
                is_starred: new.is_starred,
                is_partial: false,
                is_dead: false,
                food_preferences: None,
                first_met_where: None,
                first_met_additional_info: None,
                first_met_through: None,
                last_consulted_at: None,
                created_at: OffsetDateTime::now_utc(),
            },
        );
        debug!(contact = %id, "created contact");
        Ok(id)
    }

    /// Creates a partial contact: one that only exists to stand on the other
    /// side of a relationship, with a reduced field set.
    pub fn create_placeholder_contact(
        &mut self,
        account_id: AccountId,
        first_name: String,
        last_name: Option<String>,
        gender: Option<Gender>,
    ) -> Result<ContactId, Error> {
        let id = self.create_contact(
            account_id,
            NewContact {
                first_name,
                last_name,
                gender,
                ..NewContact::default()
            },
        )?;
        self.contacts
            .get_mut(&id)
            .expect("contact was just inserted")
            .is_partial = true;
        Ok(id)
    }

    pub fn contact(&self, id: ContactId) -> Result<&Contact, Error> {
        self.contacts.get(&id).ok_or(Error::ContactNotFound(id))
    }

    pub fn contact_mut(&mut self, id: ContactId) -> Result<&mut Contact, Error> {
        self.contacts.get_mut(&id).ok_or(Error::ContactNotFound(id))
    }

    pub fn contacts_in(&self, account_id: AccountId) -> impl Iterator<Item = &Contact> + '_ {
        self.contacts
            .values()
            .filter(move |c| c.account_id == account_id)
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// Deletes a contact and everything hanging off it: special dates and
    /// their reminders, relationship pairs, attachments, and the contact's
    /// activities together with their journal rows. Other contacts'
    /// `first_met_through` references to the deleted contact are cleared.
    pub fn delete_contact(&mut self, id: ContactId) -> Result<(), Error> {
        let contact = self.contacts.remove(&id).ok_or(Error::ContactNotFound(id))?;

        let date_ids: Vec<SpecialDateId> = self
            .special_dates
            .values()
            .filter(|d| d.contact_id == id)
            .map(|d| d.id)
            .collect();
        for date_id in &date_ids {
            self.special_dates.remove(date_id);
        }
        self.reminders
            .retain(|_, r| !date_ids.contains(&r.special_date_id));

        if let Some(graph) = self.graphs.get_mut(&contact.account_id) {
            graph.remove_contact(id);
        }

        let activity_ids: Vec<ActivityId> = self
            .activities
            .values()
            .filter(|a| a.contact_id == id)
            .map(|a| a.id)
            .collect();
        for activity_id in activity_ids {
            self.activities.remove(&activity_id);
            self.journal
                .remove_journalable(JournalableKind::Activity, activity_id.as_uuid());
        }

        self.notes.retain(|n| n.contact_id != id);
        self.tasks.retain(|t| t.contact_id != id);
        self.debts.retain(|d| d.contact_id != id);
        self.gifts.retain(|g| g.contact_id != id);
        self.calls.retain(|c| c.contact_id != id);
        self.addresses.retain(|a| a.contact_id != id);
        self.pets.retain(|p| p.contact_id != id);
        self.conversations.retain(|c| c.contact_id != id);
        self.life_events.retain(|e| e.contact_id != id);
        self.contact_fields.retain(|f| f.contact_id != id);

        for other in self.contacts.values_mut() {
            if other.first_met_through == Some(id) {
                other.first_met_through = None;
            }
        }

        debug!(contact = %id, "deleted contact and cascaded records");
        Ok(())
    }

    // ---- special dates and reminders ----

    /// Upserts the special date for `(contact, role)`. Setting a role that
    /// already has a date supersedes it; the superseded date's reminder is
    /// cascaded away with it.
    pub fn set_special_date(
        &mut self,
        contact_id: ContactId,
        role: SpecialDateRole,
        year: Option<i32>,
        month: u8,
        day: u8,
    ) -> Result<SpecialDateId, Error> {
        self.contact(contact_id)?;
        let date = FuzzyDate::new(year, month, day)?;

        if let Some(existing) = self
            .special_dates
            .values()
            .find(|d| d.contact_id == contact_id && d.role == role)
            .map(|d| d.id)
        {
            self.special_dates.remove(&existing);
            self.reminders.retain(|_, r| r.special_date_id != existing);
        }

        let id = SpecialDateId::new();
        self.special_dates.insert(
            id,
            SpecialDate {
                id,
                contact_id,
                role,
                date,
            },
        );
        debug!(contact = %contact_id, %role, %date, "set special date");
        Ok(id)
    }

    /// Derives a special date from an approximate age: the year is today's
    /// year minus `age_years`, month and day are today's. The result always
    /// has a known year.
    pub fn set_special_date_from_age(
        &mut self,
        contact_id: ContactId,
        role: SpecialDateRole,
        age_years: u32,
    ) -> Result<SpecialDateId, Error> {
        let year = self.today.year() - age_years as i32;
        let month = self.today.month();
        // Today's day may not exist in the target year (Feb 29).
        let day = self.today.day().min(days_in_year_month(year, month));
        self.set_special_date(contact_id, role, Some(year), u8::from(month), day)
    }

    pub fn special_date(
        &self,
        contact_id: ContactId,
        role: SpecialDateRole,
    ) -> Option<&SpecialDate> {
        self.special_dates
            .values()
            .find(|d| d.contact_id == contact_id && d.role == role)
    }

    pub fn special_date_by_id(&self, id: SpecialDateId) -> Result<&SpecialDate, Error> {
        self.special_dates
            .get(&id)
            .ok_or(Error::SpecialDateNotFound(id))
    }

    /// Attaches a reminder to a special date, replacing any existing one (at
    /// most one active reminder per special date).
    pub fn set_reminder(
        &mut self,
        special_date_id: SpecialDateId,
        frequency: ReminderFrequency,
        recurrence_step: u32,
        title: String,
    ) -> Result<ReminderId, Error> {
        self.special_date_by_id(special_date_id)?;
        self.reminders
            .retain(|_, r| r.special_date_id != special_date_id);

        let id = ReminderId::new();
        self.reminders.insert(
            id,
            Reminder {
                id,
                special_date_id,
                frequency,
                recurrence_step: recurrence_step.max(1),
                title,
            },
        );
        Ok(id)
    }

    pub fn reminder_for(&self, special_date_id: SpecialDateId) -> Option<&Reminder> {
        self.reminders
            .values()
            .find(|r| r.special_date_id == special_date_id)
    }

    pub fn reminder_count(&self) -> usize {
        self.reminders.len()
    }

    /// The next date the reminder fires, computed against the store's
    /// "today".
    pub fn next_reminder_occurrence(&self, reminder_id: ReminderId) -> Result<Date, Error> {
        let reminder = self
            .reminders
            .get(&reminder_id)
            .ok_or(Error::ReminderNotFound(reminder_id))?;
        let special_date = self.special_date_by_id(reminder.special_date_id)?;
        Ok(next_occurrence(
            &special_date.date,
            reminder.frequency,
            reminder.recurrence_step,
            self.today,
        ))
    }

    // ---- relationships ----

    /// Links two contacts of the same account; the graph is per-account, so
    /// a pair spanning accounts is rejected.
    pub fn set_relationship(
        &mut self,
        contact_a: ContactId,
        contact_b: ContactId,
        type_id: RelationshipTypeId,
    ) -> Result<(Relationship, Relationship), Error> {
        let account_id = self.contact(contact_a)?.account_id;
        if self.contact(contact_b)?.account_id != account_id {
            return Err(Error::CrossAccountRelationship);
        }

        let graph = self
            .graphs
            .get_mut(&account_id)
            .ok_or(Error::AccountNotFound(account_id))?;
        graph.set_relationship(contact_a, contact_b, type_id, &self.relationship_types)
    }

    pub fn remove_relationship(
        &mut self,
        contact_a: ContactId,
        contact_b: ContactId,
    ) -> Result<bool, Error> {
        let account_id = self.contact(contact_a)?.account_id;
        let graph = self
            .graphs
            .get_mut(&account_id)
            .ok_or(Error::AccountNotFound(account_id))?;
        Ok(graph.remove_relationship(contact_a, contact_b))
    }

    pub fn relationships_of(
        &self,
        contact_id: ContactId,
    ) -> Result<impl Iterator<Item = &Relationship> + '_, Error> {
        let account_id = self.contact(contact_id)?.account_id;
        let graph = self
            .graphs
            .get(&account_id)
            .ok_or(Error::AccountNotFound(account_id))?;
        Ok(graph.relationships_of(contact_id))
    }

    // ---- journalables ----

    /// Creates an activity and its journal row as one unit.
    pub fn add_activity(
        &mut self,
        contact_id: ContactId,
        new: NewActivity,
    ) -> Result<ActivityId, Error> {
        let account_id = self.contact(contact_id)?.account_id;
        let happened_on = new.happened_on.unwrap_or(self.today);

        let id = ActivityId::new();
        self.activities.insert(
            id,
            Activity {
                id,
                account_id,
                contact_id,
                summary: new.summary,
                description: new.description,
                happened_on,
                activity_type_id: new.activity_type_id,
            },
        );
        self.journal
            .record(account_id, happened_on, JournalableKind::Activity, id.as_uuid());
        Ok(id)
    }

    /// Creates a free-form entry and its journal row as one unit.
    pub fn add_entry(&mut self, account_id: AccountId, new: NewEntry) -> Result<EntryId, Error> {
        self.check_account(account_id)?;
        let written_on = new.written_on.unwrap_or(self.today);

        let id = EntryId::new();
        self.entries.insert(
            id,
            Entry {
                id,
                account_id,
                title: new.title,
                post: new.post,
                written_on,
            },
        );
        self.journal
            .record(account_id, written_on, JournalableKind::Entry, id.as_uuid());
        Ok(id)
    }

    /// Creates a day rating and its journal row as one unit.
    pub fn add_day_rating(
        &mut self,
        account_id: AccountId,
        rated_on: Date,
        rating: u8,
    ) -> Result<DayRatingId, Error> {
        self.check_account(account_id)?;
        if !(1..=3).contains(&rating) {
            return Err(Error::InvalidDayRating(rating));
        }

        let id = DayRatingId::new();
        self.day_ratings.insert(
            id,
            DayRating {
                id,
                account_id,
                rated_on,
                rating,
            },
        );
        self.journal
            .record(account_id, rated_on, JournalableKind::DayRating, id.as_uuid());
        Ok(id)
    }

    pub fn activity(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.get(&id)
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(&id)
    }

    pub fn day_rating(&self, id: DayRatingId) -> Option<&DayRating> {
        self.day_ratings.get(&id)
    }

    pub fn journal(&self) -> &JournalIndex {
        &self.journal
    }

    /// The unified feed for an account: every journalable within the range,
    /// ascending by date.
    pub fn journal_feed(
        &self,
        account_id: AccountId,
        from: Date,
        to: Date,
    ) -> impl Iterator<Item = &JournalRow> + '_ {
        self.journal.list_by_date_range(account_id, from, to)
    }

    // ---- attachments ----

    pub fn add_note(&mut self, contact_id: ContactId, new: NewNote) -> Result<Uuid, Error> {
        self.contact(contact_id)?;
        let id = Uuid::new_v4();
        self.notes.push(Note {
            id,
            contact_id,
            body: new.body,
            is_favorited: new.is_favorited,
            favorited_at: new.favorited_at,
        });
        Ok(id)
    }

    pub fn add_task(&mut self, contact_id: ContactId, new: NewTask) -> Result<Uuid, Error> {
        self.contact(contact_id)?;
        let id = Uuid::new_v4();
        self.tasks.push(Task {
            id,
            contact_id,
            title: new.title,
            description: new.description,
            completed: new.completed,
            completed_at: new.completed_at,
        });
        Ok(id)
    }

    pub fn add_debt(&mut self, contact_id: ContactId, new: NewDebt) -> Result<Uuid, Error> {
        self.contact(contact_id)?;
        let id = Uuid::new_v4();
        self.debts.push(Debt {
            id,
            contact_id,
            direction: new.direction,
            amount: new.amount,
            reason: new.reason,
        });
        Ok(id)
    }

    pub fn add_gift(&mut self, contact_id: ContactId, new: NewGift) -> Result<Uuid, Error> {
        self.contact(contact_id)?;
        let id = Uuid::new_v4();
        self.gifts.push(Gift {
            id,
            contact_id,
            name: new.name,
            comment: new.comment,
            url: new.url,
            value: new.value,
            is_an_idea: new.is_an_idea,
            has_been_offered: new.has_been_offered,
        });
        Ok(id)
    }

    pub fn add_call(
        &mut self,
        contact_id: ContactId,
        called_at: OffsetDateTime,
    ) -> Result<Uuid, Error> {
        self.contact(contact_id)?;
        let id = Uuid::new_v4();
        self.calls.push(Call {
            id,
            contact_id,
            called_at,
        });
        Ok(id)
    }

    pub fn add_address(&mut self, contact_id: ContactId, new: NewAddress) -> Result<Uuid, Error> {
        self.contact(contact_id)?;
        let id = Uuid::new_v4();
        self.addresses.push(Address {
            id,
            contact_id,
            name: new.name,
            street: new.street,
            city: new.city,
            province: new.province,
            postal_code: new.postal_code,
            country: new.country,
        });
        Ok(id)
    }

    pub fn add_pet(
        &mut self,
        contact_id: ContactId,
        category: PetCategory,
        name: Option<String>,
    ) -> Result<Uuid, Error> {
        self.contact(contact_id)?;
        let id = Uuid::new_v4();
        self.pets.push(Pet {
            id,
            contact_id,
            category,
            name,
        });
        Ok(id)
    }

    /// Logs a conversation and its messages as one unit.
    pub fn add_conversation(
        &mut self,
        contact_id: ContactId,
        happened_at: OffsetDateTime,
        messages: Vec<NewMessage>,
    ) -> Result<Uuid, Error> {
        self.contact(contact_id)?;
        let id = Uuid::new_v4();
        let messages = messages
            .into_iter()
            .map(|m| Message {
                id: Uuid::new_v4(),
                written_at: m.written_at,
                written_by_me: m.written_by_me,
                content: m.content,
            })
            .collect();
        self.conversations.push(Conversation {
            id,
            contact_id,
            happened_at,
            messages,
        });
        Ok(id)
    }

    pub fn add_life_event(
        &mut self,
        contact_id: ContactId,
        new: NewLifeEvent,
    ) -> Result<Uuid, Error> {
        self.contact(contact_id)?;
        let id = Uuid::new_v4();
        self.life_events.push(LifeEvent {
            id,
            contact_id,
            kind: new.kind,
            happened_on: new.happened_on,
            name: new.name,
            note: new.note,
        });
        Ok(id)
    }

    pub fn add_contact_field(
        &mut self,
        contact_id: ContactId,
        kind: ContactFieldKind,
        value: String,
    ) -> Result<Uuid, Error> {
        self.contact(contact_id)?;
        let id = Uuid::new_v4();
        self.contact_fields.push(ContactField {
            id,
            contact_id,
            kind,
            value,
        });
        Ok(id)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn gifts(&self) -> &[Gift] {
        &self.gifts
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn life_events(&self) -> &[LifeEvent] {
        &self.life_events
    }

    pub fn contact_fields(&self) -> &[ContactField] {
        &self.contact_fields
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new(RelationshipTypeTable::with_default_types())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn d(year: i32, month: u8, day: u8) -> Date {
        Date::from_calendar_date(year, Month::try_from(month).unwrap(), day).unwrap()
    }

    fn store_with_contact() -> (ContactStore, AccountId, ContactId) {
        let mut store = ContactStore::default().with_today(d(2023, 1, 1));
        let account = store.create_account();
        let contact = store
            .create_contact(
                account,
                NewContact {
                    first_name: "Maya".to_string(),
                    ..NewContact::default()
                },
            )
            .unwrap();
        (store, account, contact)
    }

    #[test]
    fn test_special_date_upsert_per_role() {
        let (mut store, _, contact) = store_with_contact();

        let first = store
            .set_special_date(contact, SpecialDateRole::Birthdate, None, 6, 1)
            .unwrap();
        store
            .set_reminder(first, ReminderFrequency::Yearly, 1, "Bday".to_string())
            .unwrap();

        let second = store
            .set_special_date(contact, SpecialDateRole::Birthdate, Some(1990), 7, 2)
            .unwrap();

        // Only the new date survives; the superseded one took its reminder
        // with it.
        assert!(store.special_date_by_id(first).is_err());
        let current = store.special_date(contact, SpecialDateRole::Birthdate).unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.date.year(), Some(1990));
        assert_eq!(store.reminder_count(), 0);
    }

    #[test]
    fn test_roles_are_independent() {
        let (mut store, _, contact) = store_with_contact();

        store
            .set_special_date(contact, SpecialDateRole::Birthdate, None, 6, 1)
            .unwrap();
        store
            .set_special_date(contact, SpecialDateRole::FirstMet, Some(2015), 9, 12)
            .unwrap();

        assert!(store.special_date(contact, SpecialDateRole::Birthdate).is_some());
        assert!(store.special_date(contact, SpecialDateRole::FirstMet).is_some());
    }

    #[test]
    fn test_set_special_date_from_age() {
        let (mut store, _, contact) = store_with_contact();

        let id = store
            .set_special_date_from_age(contact, SpecialDateRole::Birthdate, 30)
            .unwrap();
        let date = store.special_date_by_id(id).unwrap();

        // today is pinned to 2023-01-01
        assert_eq!(date.date.year(), Some(1993));
        assert_eq!(date.date.month(), 1);
        assert_eq!(date.date.day(), 1);
        assert_eq!(date.date.age_on(store.today()), Some(30));
    }

    #[test]
    fn test_reminder_requires_existing_date() {
        let (mut store, _, _) = store_with_contact();
        let result = store.set_reminder(
            SpecialDateId::new(),
            ReminderFrequency::Yearly,
            1,
            "nope".to_string(),
        );
        assert!(matches!(result, Err(Error::SpecialDateNotFound(_))));
    }

    #[test]
    fn test_reminder_replacement() {
        let (mut store, _, contact) = store_with_contact();
        let date = store
            .set_special_date(contact, SpecialDateRole::Birthdate, None, 6, 1)
            .unwrap();

        store
            .set_reminder(date, ReminderFrequency::Yearly, 1, "first".to_string())
            .unwrap();
        store
            .set_reminder(date, ReminderFrequency::Yearly, 2, "second".to_string())
            .unwrap();

        assert_eq!(store.reminder_count(), 1);
        assert_eq!(store.reminder_for(date).unwrap().title, "second");
    }

    #[test]
    fn test_leap_day_reminder_scenario() {
        // Birthdate (0, 02, 29) + yearly reminder, today 2023-01-01: the
        // rollover policy answers 2023-03-01.
        let (mut store, _, contact) = store_with_contact();
        let date = store
            .set_special_date(contact, SpecialDateRole::Birthdate, None, 2, 29)
            .unwrap();
        let reminder = store
            .set_reminder(date, ReminderFrequency::Yearly, 1, "Bday".to_string())
            .unwrap();

        let next = store.next_reminder_occurrence(reminder).unwrap();
        assert_eq!(next, d(2023, 3, 1));
    }

    #[test]
    fn test_journalables_get_exactly_one_row() {
        let (mut store, account, contact) = store_with_contact();

        store
            .add_activity(
                contact,
                NewActivity {
                    summary: "coffee".to_string(),
                    happened_on: Some(d(2022, 11, 5)),
                    ..NewActivity::default()
                },
            )
            .unwrap();
        store
            .add_entry(
                account,
                NewEntry {
                    title: "hello".to_string(),
                    post: "world".to_string(),
                    written_on: Some(d(2022, 11, 6)),
                },
            )
            .unwrap();
        store.add_day_rating(account, d(2022, 11, 7), 2).unwrap();

        assert_eq!(store.journal().len(), 3);
        let feed: Vec<_> = store
            .journal_feed(account, d(2022, 1, 1), d(2022, 12, 31))
            .collect();
        assert_eq!(feed.len(), 3);
        assert_eq!(feed[0].kind, JournalableKind::Activity);
        assert_eq!(feed[0].date, d(2022, 11, 5));
    }

    #[test]
    fn test_day_rating_range() {
        let (mut store, account, _) = store_with_contact();
        let result = store.add_day_rating(account, d(2022, 1, 1), 4);
        assert!(matches!(result, Err(Error::InvalidDayRating(4))));
        assert!(store.journal().is_empty());
    }

    #[test]
    fn test_delete_contact_cascades() {
        let (mut store, account, contact) = store_with_contact();
        let other = store
            .create_placeholder_contact(account, "Sam".to_string(), None, None)
            .unwrap();

        let date = store
            .set_special_date(contact, SpecialDateRole::Birthdate, Some(1990), 6, 1)
            .unwrap();
        store
            .set_reminder(date, ReminderFrequency::Yearly, 1, "Bday".to_string())
            .unwrap();
        store
            .set_relationship(contact, other, crate::relationships::builtin_types::FRIEND)
            .unwrap();
        store
            .add_activity(
                contact,
                NewActivity {
                    summary: "hike".to_string(),
                    ..NewActivity::default()
                },
            )
            .unwrap();

        store.delete_contact(contact).unwrap();

        assert!(store.contact(contact).is_err());
        assert!(store.special_date(contact, SpecialDateRole::Birthdate).is_none());
        assert_eq!(store.reminder_count(), 0);
        assert_eq!(store.relationships_of(other).unwrap().count(), 0);
        assert!(store.journal().is_empty());
    }

    #[test]
    fn test_conversations_life_events_and_fields_cascade() {
        let (mut store, _, contact) = store_with_contact();
        let when = d(2022, 5, 5).midnight().assume_utc();

        store
            .add_conversation(
                contact,
                when,
                vec![NewMessage {
                    written_at: when,
                    written_by_me: true,
                    content: "see you saturday?".to_string(),
                }],
            )
            .unwrap();
        store
            .add_life_event(
                contact,
                NewLifeEvent {
                    kind: crate::models::LifeEventKind::NewJob,
                    happened_on: d(2020, 9, 1),
                    name: None,
                    note: None,
                },
            )
            .unwrap();
        store
            .add_contact_field(contact, ContactFieldKind::Email, "maya@example.com".to_string())
            .unwrap();

        assert_eq!(store.conversations().len(), 1);
        assert_eq!(store.conversations()[0].messages.len(), 1);
        assert_eq!(store.life_events().len(), 1);
        assert_eq!(store.contact_fields().len(), 1);

        store.delete_contact(contact).unwrap();
        assert!(store.conversations().is_empty());
        assert!(store.life_events().is_empty());
        assert!(store.contact_fields().is_empty());
    }

    #[test]
    fn test_delete_clears_introduction_references() {
        let (mut store, account, contact) = store_with_contact();
        let other = store
            .create_contact(
                account,
                NewContact {
                    first_name: "Sam".to_string(),
                    ..NewContact::default()
                },
            )
            .unwrap();
        store.contact_mut(other).unwrap().first_met_through = Some(contact);

        store.delete_contact(contact).unwrap();
        assert_eq!(store.contact(other).unwrap().first_met_through, None);
    }

    #[test]
    fn test_cross_account_relationship_is_rejected() {
        let (mut store, _, contact) = store_with_contact();
        let other_account = store.create_account();
        let stranger = store
            .create_contact(
                other_account,
                NewContact {
                    first_name: "Eve".to_string(),
                    ..NewContact::default()
                },
            )
            .unwrap();

        let result = store.set_relationship(
            contact,
            stranger,
            crate::relationships::builtin_types::FRIEND,
        );
        assert!(matches!(result, Err(Error::CrossAccountRelationship)));
        assert_eq!(store.relationships_of(contact).unwrap().count(), 0);
    }

    #[test]
    fn test_placeholder_contact_is_partial() {
        let (mut store, account, _) = store_with_contact();
        let id = store
            .create_placeholder_contact(account, "Sam".to_string(), None, Some(Gender::Other))
            .unwrap();
        let contact = store.contact(id).unwrap();
        assert!(contact.is_partial);
        assert!(contact.last_name.is_none());
    }

    #[test]
    fn test_unknown_account_is_rejected() {
        let mut store = ContactStore::default();
        let result = store.create_contact(AccountId::new(), NewContact::default());
        assert!(matches!(result, Err(Error::AccountNotFound(_))));
    }
}
