//! Shift record storage functionality.
//!
//! This module provides the [`ShiftStore`] type, which owns every stored
//! shift record and enforces the one-entry-per-owner-per-date rule. Each
//! operation validates its input first, then takes the store lock exactly
//! once for the whole check-then-act sequence, so a failed call never
//! leaves a partial write behind.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDate, NaiveTime, Utc};

use crate::calculation::{calculate_pay, calculate_total_hours};
use crate::config::RateSchedule;
use crate::error::{EngineError, EngineResult};
use crate::models::{MAX_NOTE_LEN, ShiftChange, ShiftDraft, ShiftRecord, WorkSummary};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Records per owner, ordered by date.
type OwnerEntries = HashMap<String, BTreeMap<NaiveDate, ShiftRecord>>;

/// In-memory collection of shift records keyed by `(owner, date)`.
///
/// The store is the sole owner of record state. It recomputes the derived
/// fields (`total_hours`, `overtime_hours`, `pay`) on every write using the
/// rate schedule passed to the call; externally supplied derived values are
/// never trusted.
///
/// All operations are safe to call from multiple threads. Uniqueness of
/// `(owner, date)` is checked and acted on under a single lock acquisition,
/// so two concurrent adds for the same key cannot both succeed.
///
/// # Example
///
/// ```
/// use timesheet_engine::config::RateSchedule;
/// use timesheet_engine::models::ShiftDraft;
/// use timesheet_engine::store::ShiftStore;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let store = ShiftStore::new();
/// let schedule = RateSchedule {
///     hourly_rate: Decimal::from_str("14").unwrap(),
///     overtime_threshold_hours: Decimal::from_str("8").unwrap(),
///     overtime_multiplier: Decimal::from_str("1.5").unwrap(),
/// };
///
/// let draft = ShiftDraft {
///     date: "2024-01-15".to_string(),
///     start: "09:00".to_string(),
///     end: "19:00".to_string(),
///     note: None,
/// };
///
/// let record = store.add("u1", draft, &schedule).unwrap();
/// assert_eq!(record.total_hours, Decimal::from_str("10").unwrap());
/// assert_eq!(record.overtime_hours, Decimal::from_str("2").unwrap());
/// assert_eq!(record.pay, Decimal::from_str("154").unwrap());
/// ```
#[derive(Debug, Default)]
pub struct ShiftStore {
    entries: RwLock<OwnerEntries>,
}

impl ShiftStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Adds a new shift entry for the owner.
    ///
    /// Parses and validates the draft, computes the derived fields under
    /// the given rate schedule, and inserts the record if no entry exists
    /// for `(owner, date)`.
    ///
    /// # Returns
    ///
    /// Returns the stored record on success, or:
    /// - `InvalidEntry` if the date, a time, or the note fails validation
    /// - `DuplicateEntry` if an entry already exists for the owner and date;
    ///   the existing record is left untouched
    pub fn add(
        &self,
        owner: &str,
        draft: ShiftDraft,
        schedule: &RateSchedule,
    ) -> EngineResult<ShiftRecord> {
        let date = parse_date(&draft.date)?;
        let start_time = parse_time(&draft.start, "start")?;
        let end_time = parse_time(&draft.end, "end")?;
        validate_note(draft.note.as_deref())?;

        let total_hours = calculate_total_hours(start_time, end_time);
        let breakdown = calculate_pay(total_hours, schedule);

        let record = ShiftRecord {
            owner: owner.to_string(),
            date,
            start_time,
            end_time,
            total_hours,
            overtime_hours: breakdown.overtime_hours,
            pay: breakdown.pay,
            note: draft.note,
            created_at: Utc::now(),
        };

        let mut entries = self.write_entries()?;

        match entries.entry(owner.to_string()).or_default().entry(date) {
            Entry::Occupied(_) => Err(EngineError::DuplicateEntry {
                owner: owner.to_string(),
                date,
            }),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    /// Edits the shift entry for `(owner, date)`.
    ///
    /// Parses and validates the change, then replaces the entry's times and
    /// note and recomputes the full derived triple from the new times. The
    /// record's `created_at` is preserved. A failed edit leaves the prior
    /// record fully intact.
    ///
    /// # Returns
    ///
    /// Returns the updated record on success, or:
    /// - `InvalidEntry` if the date, a time, or the note fails validation
    /// - `EntryNotFound` if no entry exists for the owner and date
    pub fn edit(
        &self,
        owner: &str,
        date: &str,
        change: ShiftChange,
        schedule: &RateSchedule,
    ) -> EngineResult<ShiftRecord> {
        let date = parse_date(date)?;
        let start_time = parse_time(&change.start, "start")?;
        let end_time = parse_time(&change.end, "end")?;
        validate_note(change.note.as_deref())?;

        let total_hours = calculate_total_hours(start_time, end_time);
        let breakdown = calculate_pay(total_hours, schedule);

        let mut entries = self.write_entries()?;

        let record = entries
            .get_mut(owner)
            .and_then(|dates| dates.get_mut(&date))
            .ok_or_else(|| EngineError::EntryNotFound {
                owner: owner.to_string(),
                date,
            })?;

        record.start_time = start_time;
        record.end_time = end_time;
        record.total_hours = total_hours;
        record.overtime_hours = breakdown.overtime_hours;
        record.pay = breakdown.pay;
        record.note = change.note;

        Ok(record.clone())
    }

    /// Removes the shift entry for `(owner, date)`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` on success, or:
    /// - `InvalidEntry` if the date is malformed
    /// - `EntryNotFound` if no entry exists, including on repeated removal
    pub fn remove(&self, owner: &str, date: &str) -> EngineResult<()> {
        let date = parse_date(date)?;

        let mut entries = self.write_entries()?;

        let dates = entries
            .get_mut(owner)
            .ok_or_else(|| EngineError::EntryNotFound {
                owner: owner.to_string(),
                date,
            })?;

        dates.remove(&date).ok_or_else(|| EngineError::EntryNotFound {
            owner: owner.to_string(),
            date,
        })?;

        if dates.is_empty() {
            entries.remove(owner);
        }

        Ok(())
    }

    /// Lists every shift entry for the owner, newest date first.
    ///
    /// An owner with no entries yields an empty list, not an error. The
    /// descending date order is a contract relied on by consumers.
    pub fn list(&self, owner: &str) -> EngineResult<Vec<ShiftRecord>> {
        let entries = self.read_entries()?;

        Ok(entries
            .get(owner)
            .map(|dates| dates.values().rev().cloned().collect())
            .unwrap_or_default())
    }

    /// Looks up the shift entry for `(owner, date)`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(record))` if present, `Ok(None)` if absent, or
    /// `InvalidEntry` if the date is malformed. Absence is not an error
    /// here; callers decide how to surface a miss.
    pub fn find_by_date(&self, owner: &str, date: &str) -> EngineResult<Option<ShiftRecord>> {
        let date = parse_date(date)?;

        let entries = self.read_entries()?;

        Ok(entries
            .get(owner)
            .and_then(|dates| dates.get(&date))
            .cloned())
    }

    /// Computes the aggregate work summary across the owner's entries.
    pub fn summary(&self, owner: &str) -> EngineResult<WorkSummary> {
        let records = self.list(owner)?;
        Ok(WorkSummary::from_records(&records))
    }

    fn read_entries(&self) -> EngineResult<RwLockReadGuard<'_, OwnerEntries>> {
        self.entries.read().map_err(|_| EngineError::Storage {
            message: "shift store lock poisoned".to_string(),
        })
    }

    fn write_entries(&self) -> EngineResult<RwLockWriteGuard<'_, OwnerEntries>> {
        self.entries.write().map_err(|_| EngineError::Storage {
            message: "shift store lock poisoned".to_string(),
        })
    }
}

fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| EngineError::InvalidEntry {
        field: "date".to_string(),
        message: format!("expected YYYY-MM-DD, got '{}'", value),
    })
}

fn parse_time(value: &str, field: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| EngineError::InvalidEntry {
        field: field.to_string(),
        message: format!("expected HH:MM, got '{}'", value),
    })
}

fn validate_note(note: Option<&str>) -> EngineResult<()> {
    if let Some(note) = note {
        let len = note.chars().count();
        if len > MAX_NOTE_LEN {
            return Err(EngineError::InvalidEntry {
                field: "note".to_string(),
                message: format!(
                    "{} characters exceeds the {} character limit",
                    len, MAX_NOTE_LEN
                ),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Arc;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_schedule() -> RateSchedule {
        RateSchedule {
            hourly_rate: dec("14"),
            overtime_threshold_hours: dec("8"),
            overtime_multiplier: dec("1.5"),
        }
    }

    fn make_draft(date: &str, start: &str, end: &str) -> ShiftDraft {
        ShiftDraft {
            date: date.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            note: None,
        }
    }

    fn make_change(start: &str, end: &str) -> ShiftChange {
        ShiftChange {
            start: start.to_string(),
            end: end.to_string(),
            note: None,
        }
    }

    // ==========================================================================
    // STO-001: add computes the derived fields from the schedule
    // 09:00 to 19:00 = 10 hours: 2 overtime, pay 8×14 + 2×21 = $154
    // ==========================================================================
    #[test]
    fn test_sto_001_add_computes_derived_fields() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        let record = store
            .add("u1", make_draft("2024-01-15", "09:00", "19:00"), &schedule)
            .unwrap();

        assert_eq!(record.owner, "u1");
        assert_eq!(record.total_hours, dec("10"));
        assert_eq!(record.overtime_hours, dec("2"));
        assert_eq!(record.pay, dec("154"));
    }

    // ==========================================================================
    // STO-002: duplicate (owner, date) is rejected, original untouched
    // ==========================================================================
    #[test]
    fn test_sto_002_duplicate_date_rejected() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        let original = store
            .add("u1", make_draft("2024-01-15", "09:00", "17:00"), &schedule)
            .unwrap();

        let result = store.add("u1", make_draft("2024-01-15", "10:00", "18:00"), &schedule);

        match result {
            Err(EngineError::DuplicateEntry { owner, date }) => {
                assert_eq!(owner, "u1");
                assert_eq!(date, original.date);
            }
            other => panic!("Expected DuplicateEntry error, got {:?}", other),
        }

        // The stored record is the original, not the rejected one
        let stored = store.find_by_date("u1", "2024-01-15").unwrap().unwrap();
        assert_eq!(stored, original);
    }

    // ==========================================================================
    // STO-003: the same date under different owners does not collide
    // ==========================================================================
    #[test]
    fn test_sto_003_same_date_different_owners() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        store
            .add("u1", make_draft("2024-01-15", "09:00", "17:00"), &schedule)
            .unwrap();
        store
            .add("u2", make_draft("2024-01-15", "10:00", "18:00"), &schedule)
            .unwrap();

        assert_eq!(store.list("u1").unwrap().len(), 1);
        assert_eq!(store.list("u2").unwrap().len(), 1);
    }

    // ==========================================================================
    // STO-004: malformed input is rejected before anything is written
    // ==========================================================================
    #[test]
    fn test_sto_004_malformed_date_rejected() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        let result = store.add("u1", make_draft("15/01/2024", "09:00", "17:00"), &schedule);

        match result {
            Err(EngineError::InvalidEntry { field, .. }) => assert_eq!(field, "date"),
            other => panic!("Expected InvalidEntry error, got {:?}", other),
        }
        assert!(store.list("u1").unwrap().is_empty());
    }

    #[test]
    fn test_sto_004_malformed_start_time_rejected() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        let result = store.add("u1", make_draft("2024-01-15", "9am", "17:00"), &schedule);

        match result {
            Err(EngineError::InvalidEntry { field, .. }) => assert_eq!(field, "start"),
            other => panic!("Expected InvalidEntry error, got {:?}", other),
        }
    }

    #[test]
    fn test_sto_004_out_of_range_end_time_rejected() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        let result = store.add("u1", make_draft("2024-01-15", "09:00", "24:30"), &schedule);

        match result {
            Err(EngineError::InvalidEntry { field, .. }) => assert_eq!(field, "end"),
            other => panic!("Expected InvalidEntry error, got {:?}", other),
        }
    }

    #[test]
    fn test_sto_004_seconds_in_time_rejected() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        let result = store.add("u1", make_draft("2024-01-15", "09:00:30", "17:00"), &schedule);
        assert!(result.is_err());
    }

    // ==========================================================================
    // STO-005: note length is bounded at 200 characters
    // ==========================================================================
    #[test]
    fn test_sto_005_note_at_limit_accepted() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        let mut draft = make_draft("2024-01-15", "09:00", "17:00");
        draft.note = Some("x".repeat(MAX_NOTE_LEN));

        assert!(store.add("u1", draft, &schedule).is_ok());
    }

    #[test]
    fn test_sto_005_note_over_limit_rejected() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        let mut draft = make_draft("2024-01-15", "09:00", "17:00");
        draft.note = Some("x".repeat(MAX_NOTE_LEN + 1));

        match store.add("u1", draft, &schedule) {
            Err(EngineError::InvalidEntry { field, .. }) => assert_eq!(field, "note"),
            other => panic!("Expected InvalidEntry error, got {:?}", other),
        }
    }

    #[test]
    fn test_sto_005_note_limit_counts_characters_not_bytes() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        // 200 multibyte characters are within the limit
        let mut draft = make_draft("2024-01-15", "09:00", "17:00");
        draft.note = Some("ü".repeat(MAX_NOTE_LEN));

        assert!(store.add("u1", draft, &schedule).is_ok());
    }

    // ==========================================================================
    // STO-006: edit recomputes derived fields and preserves created_at
    // 09:00-17:00 edited to 09:00-19:00: 8.0 -> 10.0 hours, 0 -> 2 overtime
    // ==========================================================================
    #[test]
    fn test_sto_006_edit_recomputes_derived_fields() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        let original = store
            .add("u1", make_draft("2024-01-15", "09:00", "17:00"), &schedule)
            .unwrap();
        assert_eq!(original.total_hours, dec("8"));
        assert_eq!(original.overtime_hours, Decimal::ZERO);
        assert_eq!(original.pay, dec("112"));

        let updated = store
            .edit("u1", "2024-01-15", make_change("09:00", "19:00"), &schedule)
            .unwrap();

        assert_eq!(updated.total_hours, dec("10"));
        assert_eq!(updated.overtime_hours, dec("2"));
        assert_eq!(updated.pay, dec("154"));
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.date, original.date);
    }

    // ==========================================================================
    // STO-007: edit of an absent entry is EntryNotFound
    // ==========================================================================
    #[test]
    fn test_sto_007_edit_missing_entry() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        let result = store.edit("u1", "2024-01-15", make_change("09:00", "17:00"), &schedule);

        match result {
            Err(EngineError::EntryNotFound { owner, .. }) => assert_eq!(owner, "u1"),
            other => panic!("Expected EntryNotFound error, got {:?}", other),
        }
    }

    // ==========================================================================
    // STO-008: a failed edit leaves the prior record intact
    // ==========================================================================
    #[test]
    fn test_sto_008_failed_edit_leaves_record_intact() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        let original = store
            .add("u1", make_draft("2024-01-15", "09:00", "17:00"), &schedule)
            .unwrap();

        let result = store.edit("u1", "2024-01-15", make_change("notatime", "19:00"), &schedule);
        assert!(result.is_err());

        let stored = store.find_by_date("u1", "2024-01-15").unwrap().unwrap();
        assert_eq!(stored, original);
    }

    // ==========================================================================
    // STO-009: edit replaces the note, including clearing it
    // ==========================================================================
    #[test]
    fn test_sto_009_edit_replaces_note() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        let mut draft = make_draft("2024-01-15", "09:00", "17:00");
        draft.note = Some("morning shift".to_string());
        store.add("u1", draft, &schedule).unwrap();

        let updated = store
            .edit("u1", "2024-01-15", make_change("09:00", "17:00"), &schedule)
            .unwrap();
        assert!(updated.note.is_none());

        let mut change = make_change("09:00", "17:00");
        change.note = Some("swapped with Dana".to_string());
        let updated = store.edit("u1", "2024-01-15", change, &schedule).unwrap();
        assert_eq!(updated.note.as_deref(), Some("swapped with Dana"));
    }

    // ==========================================================================
    // STO-010: remove deletes the entry; repeats are EntryNotFound every time
    // ==========================================================================
    #[test]
    fn test_sto_010_remove_then_repeat() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        store
            .add("u1", make_draft("2024-01-15", "09:00", "17:00"), &schedule)
            .unwrap();

        assert!(store.remove("u1", "2024-01-15").is_ok());
        assert!(store.find_by_date("u1", "2024-01-15").unwrap().is_none());

        for _ in 0..2 {
            match store.remove("u1", "2024-01-15") {
                Err(EngineError::EntryNotFound { owner, .. }) => assert_eq!(owner, "u1"),
                other => panic!("Expected EntryNotFound error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_remove_for_unknown_owner() {
        let store = ShiftStore::new();

        let result = store.remove("nobody", "2024-01-15");
        assert!(matches!(result, Err(EngineError::EntryNotFound { .. })));
    }

    // ==========================================================================
    // STO-011: list returns entries newest date first
    // ==========================================================================
    #[test]
    fn test_sto_011_list_is_date_descending() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        // Inserted out of order on purpose
        for date in ["2024-01-16", "2024-01-14", "2024-01-18", "2024-01-15"] {
            store
                .add("u1", make_draft(date, "09:00", "17:00"), &schedule)
                .unwrap();
        }

        let dates: Vec<String> = store
            .list("u1")
            .unwrap()
            .iter()
            .map(|r| r.date.to_string())
            .collect();

        assert_eq!(
            dates,
            vec!["2024-01-18", "2024-01-16", "2024-01-15", "2024-01-14"]
        );
    }

    #[test]
    fn test_list_unknown_owner_is_empty() {
        let store = ShiftStore::new();
        assert!(store.list("nobody").unwrap().is_empty());
    }

    // ==========================================================================
    // STO-012: find_by_date distinguishes hit from miss
    // ==========================================================================
    #[test]
    fn test_sto_012_find_by_date() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        store
            .add("u1", make_draft("2024-01-15", "09:00", "17:00"), &schedule)
            .unwrap();

        let found = store.find_by_date("u1", "2024-01-15").unwrap();
        assert!(found.is_some());

        let missing = store.find_by_date("u1", "2024-01-16").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_find_by_date_malformed_date() {
        let store = ShiftStore::new();

        let result = store.find_by_date("u1", "yesterday");
        assert!(matches!(result, Err(EngineError::InvalidEntry { .. })));
    }

    // ==========================================================================
    // STO-013: overnight shift stored with wrapped duration
    // 22:00 to 02:00 = 4 hours, pay 4×14 = $56
    // ==========================================================================
    #[test]
    fn test_sto_013_overnight_shift() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        let record = store
            .add("u1", make_draft("2024-01-15", "22:00", "02:00"), &schedule)
            .unwrap();

        assert_eq!(record.total_hours, dec("4"));
        assert_eq!(record.overtime_hours, Decimal::ZERO);
        assert_eq!(record.pay, dec("56"));
        assert!(record.is_overnight());
    }

    // ==========================================================================
    // STO-014: equal start and end is a zero-hour entry, not an error
    // ==========================================================================
    #[test]
    fn test_sto_014_zero_length_shift() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        let record = store
            .add("u1", make_draft("2024-01-15", "09:00", "09:00"), &schedule)
            .unwrap();

        assert_eq!(record.total_hours, Decimal::ZERO);
        assert_eq!(record.pay, Decimal::ZERO);
    }

    // ==========================================================================
    // STO-015: summary folds every entry for the owner
    // ==========================================================================
    #[test]
    fn test_sto_015_summary() {
        let store = ShiftStore::new();
        let schedule = make_schedule();

        store
            .add("u1", make_draft("2024-01-15", "09:00", "19:00"), &schedule)
            .unwrap();
        store
            .add("u1", make_draft("2024-01-16", "09:00", "15:00"), &schedule)
            .unwrap();

        let summary = store.summary("u1").unwrap();
        assert_eq!(summary.entry_count, 2);
        assert_eq!(summary.total_hours, dec("16"));
        assert_eq!(summary.overtime_hours, dec("2"));
        assert_eq!(summary.total_pay, dec("238"));
    }

    #[test]
    fn test_summary_for_unknown_owner_is_zero() {
        let store = ShiftStore::new();

        let summary = store.summary("nobody").unwrap();
        assert_eq!(summary.entry_count, 0);
        assert_eq!(summary.total_pay, Decimal::ZERO);
    }

    // ==========================================================================
    // STO-016: concurrent adds for the same key admit exactly one winner
    // ==========================================================================
    #[test]
    fn test_sto_016_concurrent_adds_single_winner() {
        let store = Arc::new(ShiftStore::new());
        let schedule = make_schedule();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let schedule = schedule.clone();
                std::thread::spawn(move || {
                    store.add("u1", make_draft("2024-01-15", "09:00", "17:00"), &schedule)
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|r| r.is_ok())
            .count();

        assert_eq!(successes, 1);
        assert_eq!(store.list("u1").unwrap().len(), 1);
    }
}
