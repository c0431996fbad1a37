//! Daily completion tracking.
//!
//! One JSON record per day under a single key: `{"date":"2026-08-24",
//! "count":3}`. A record stamped with another date means the day rolled
//! over and the count starts fresh. Absent or malformed data is treated
//! as zero, never as an error.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::KeyValueStore;

/// Store key for the daily completion record.
pub const DAILY_RECORD_KEY: &str = "daily_record";

/// Store key for the persisted mute flag.
pub const MUTE_KEY: &str = "muted";

/// Completion count for one calendar day (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub count: u32,
}

impl DailyRecord {
    /// Today's completion count.
    ///
    /// Returns 0 when the stored record is absent, malformed, or stamped
    /// with a date other than `today`.
    pub fn load_count(store: &dyn KeyValueStore, today: NaiveDate) -> u32 {
        if let Ok(Some(raw)) = store.get(DAILY_RECORD_KEY) {
            if let Ok(record) = serde_json::from_str::<DailyRecord>(&raw) {
                if record.date == today {
                    return record.count;
                }
            }
        }
        0
    }

    /// Persist `count` against `today`, replacing any previous record.
    /// Write failures are swallowed; the in-memory count stays
    /// authoritative for the rest of the run.
    pub fn save(store: &mut dyn KeyValueStore, today: NaiveDate, count: u32) {
        let record = DailyRecord { date: today, count };
        if let Ok(json) = serde_json::to_string(&record) {
            let _ = store.set(DAILY_RECORD_KEY, &json);
        }
    }
}

/// The persisted mute flag. Anything other than the literal `"true"`
/// reads as unmuted.
pub fn load_muted(store: &dyn KeyValueStore) -> bool {
    matches!(store.get(MUTE_KEY), Ok(Some(v)) if v == "true")
}

/// Persist the mute flag. Write failures are swallowed.
pub fn save_muted(store: &mut dyn KeyValueStore, muted: bool) {
    let _ = store.set(MUTE_KEY, if muted { "true" } else { "false" });
}

/// Today's date in UTC, the calendar the daily record lives on.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: HashMap<String, String>,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.values.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.values.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn round_trips_todays_count() {
        let mut store = MemoryStore::default();
        let today = date("2026-08-24");
        DailyRecord::save(&mut store, today, 5);
        assert_eq!(DailyRecord::load_count(&store, today), 5);
    }

    #[test]
    fn stale_record_reads_as_zero() {
        let mut store = MemoryStore::default();
        DailyRecord::save(&mut store, date("2026-08-23"), 7);
        assert_eq!(DailyRecord::load_count(&store, date("2026-08-24")), 0);
    }

    #[test]
    fn malformed_record_reads_as_zero() {
        let mut store = MemoryStore::default();
        store.set(DAILY_RECORD_KEY, "{not json").unwrap();
        assert_eq!(DailyRecord::load_count(&store, date("2026-08-24")), 0);
    }

    #[test]
    fn missing_record_reads_as_zero() {
        let store = MemoryStore::default();
        assert_eq!(DailyRecord::load_count(&store, date("2026-08-24")), 0);
    }

    #[test]
    fn record_serializes_as_iso_date() {
        let record = DailyRecord {
            date: date("2026-08-24"),
            count: 2,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"date":"2026-08-24","count":2}"#);
    }

    #[test]
    fn mute_flag_round_trips() {
        let mut store = MemoryStore::default();
        assert!(!load_muted(&store));
        save_muted(&mut store, true);
        assert!(load_muted(&store));
        save_muted(&mut store, false);
        assert!(!load_muted(&store));
    }

    #[test]
    fn garbage_mute_value_reads_as_unmuted() {
        let mut store = MemoryStore::default();
        store.set(MUTE_KEY, "banana").unwrap();
        assert!(!load_muted(&store));
    }
}
