//! Persistence for the two earnings ledgers.
//!
//! The engine owns its accounting state in memory; this module provides
//! the small repository seam it loads from at startup and writes through
//! after every mutation. Implementations are best-effort: the engine
//! treats a failed load as an empty ledger and logs failed saves without
//! propagating them.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::WeekendShiftEntry;

/// The finalized weekday earnings ledger, keyed by shift-start date.
pub type RecordedLedger = BTreeMap<NaiveDate, Decimal>;

/// The manually recorded weekend entries, keyed by date.
pub type WeekendLedger = BTreeMap<NaiveDate, WeekendShiftEntry>;

/// Repository seam for the two persisted ledgers.
pub trait LedgerStore {
    /// Loads the finalized weekday earnings ledger.
    fn load_recorded(&self) -> EngineResult<RecordedLedger>;

    /// Persists the finalized weekday earnings ledger.
    fn save_recorded(&self, ledger: &RecordedLedger) -> EngineResult<()>;

    /// Loads the weekend shift entries.
    fn load_weekend_entries(&self) -> EngineResult<WeekendLedger>;

    /// Persists the weekend shift entries.
    fn save_weekend_entries(&self, entries: &WeekendLedger) -> EngineResult<()>;
}

/// File name of the weekday earnings ledger.
const RECORDED_FILE: &str = "recorded_shifts.json";

/// File name of the weekend entries ledger.
const WEEKEND_FILE: &str = "weekend_entries.json";

/// A [`LedgerStore`] backed by JSON files in a data directory.
///
/// A missing file reads as an empty ledger; saves create the directory on
/// demand and rewrite the whole file.
///
/// # Example
///
/// ```no_run
/// use paywatch::storage::{JsonFileStore, LedgerStore};
///
/// let store = JsonFileStore::new("./data");
/// let recorded = store.load_recorded().unwrap_or_default();
/// println!("{} recorded shifts", recorded.len());
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at the given data directory.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn load_map<T: serde::de::DeserializeOwned + Default>(&self, file: &str) -> EngineResult<T> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(T::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| EngineError::LedgerIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| EngineError::LedgerParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn save_map<T: serde::Serialize>(&self, file: &str, value: &T) -> EngineResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| EngineError::LedgerIo {
            path: self.dir.display().to_string(),
            message: e.to_string(),
        })?;

        let path = self.dir.join(file);
        let content = serde_json::to_string_pretty(value).map_err(|e| EngineError::LedgerParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        fs::write(&path, content).map_err(|e| EngineError::LedgerIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the path of the weekday earnings ledger file.
    pub fn recorded_path(&self) -> PathBuf {
        self.dir.join(RECORDED_FILE)
    }

    /// Returns the path of the weekend entries ledger file.
    pub fn weekend_path(&self) -> PathBuf {
        self.dir.join(WEEKEND_FILE)
    }
}

impl LedgerStore for JsonFileStore {
    fn load_recorded(&self) -> EngineResult<RecordedLedger> {
        self.load_map(RECORDED_FILE)
    }

    fn save_recorded(&self, ledger: &RecordedLedger) -> EngineResult<()> {
        self.save_map(RECORDED_FILE, ledger)
    }

    fn load_weekend_entries(&self) -> EngineResult<WeekendLedger> {
        self.load_map(WEEKEND_FILE)
    }

    fn save_weekend_entries(&self, entries: &WeekendLedger) -> EngineResult<()> {
        self.save_map(WEEKEND_FILE, entries)
    }
}

/// An in-memory [`LedgerStore`] for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    recorded: Mutex<RecordedLedger>,
    weekend: Mutex<WeekendLedger>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for MemoryStore {
    fn load_recorded(&self) -> EngineResult<RecordedLedger> {
        Ok(self.recorded.lock().expect("ledger mutex poisoned").clone())
    }

    fn save_recorded(&self, ledger: &RecordedLedger) -> EngineResult<()> {
        *self.recorded.lock().expect("ledger mutex poisoned") = ledger.clone();
        Ok(())
    }

    fn load_weekend_entries(&self) -> EngineResult<WeekendLedger> {
        Ok(self.weekend.lock().expect("ledger mutex poisoned").clone())
    }

    fn save_weekend_entries(&self, entries: &WeekendLedger) -> EngineResult<()> {
        *self.weekend.lock().expect("ledger mutex poisoned") = entries.clone();
        Ok(())
    }
}

/// Blanket implementation so engines can hold a shared store.
impl<S: LedgerStore + ?Sized> LedgerStore for std::sync::Arc<S> {
    fn load_recorded(&self) -> EngineResult<RecordedLedger> {
        (**self).load_recorded()
    }

    fn save_recorded(&self, ledger: &RecordedLedger) -> EngineResult<()> {
        (**self).save_recorded(ledger)
    }

    fn load_weekend_entries(&self) -> EngineResult<WeekendLedger> {
        (**self).load_weekend_entries()
    }

    fn save_weekend_entries(&self, entries: &WeekendLedger) -> EngineResult<()> {
        (**self).save_weekend_entries(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn temp_store(name: &str) -> JsonFileStore {
        let dir = std::env::temp_dir().join(format!("paywatch_store_{name}"));
        let _ = fs::remove_dir_all(&dir);
        JsonFileStore::new(dir)
    }

    #[test]
    fn test_missing_files_read_as_empty_ledgers() {
        let store = temp_store("missing");
        assert!(store.load_recorded().unwrap().is_empty());
        assert!(store.load_weekend_entries().unwrap().is_empty());
    }

    #[test]
    fn test_recorded_ledger_round_trip() {
        let store = temp_store("recorded_round_trip");

        let mut ledger = RecordedLedger::new();
        ledger.insert(make_date("2026-08-03"), dec("1960.00"));
        ledger.insert(make_date("2026-08-04"), dec("2072.50"));

        store.save_recorded(&ledger).unwrap();
        assert_eq!(store.load_recorded().unwrap(), ledger);
    }

    #[test]
    fn test_weekend_ledger_round_trip() {
        let store = temp_store("weekend_round_trip");

        let mut entries = WeekendLedger::new();
        entries.insert(
            make_date("2026-08-08"),
            WeekendShiftEntry::new(dec("6.5"), NaiveTime::from_hms_opt(14, 30, 0).unwrap())
                .unwrap(),
        );

        store.save_weekend_entries(&entries).unwrap();
        assert_eq!(store.load_weekend_entries().unwrap(), entries);
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let store = temp_store("malformed");
        fs::create_dir_all(store.recorded_path().parent().unwrap()).unwrap();
        fs::write(store.recorded_path(), "{not json").unwrap();

        let result = store.load_recorded();
        assert!(matches!(result, Err(EngineError::LedgerParse { .. })));
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let store = temp_store("overwrite");

        let mut ledger = RecordedLedger::new();
        ledger.insert(make_date("2026-08-03"), dec("1960.00"));
        store.save_recorded(&ledger).unwrap();

        ledger.clear();
        ledger.insert(make_date("2026-08-04"), dec("2000"));
        store.save_recorded(&ledger).unwrap();

        let loaded = store.load_recorded().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(&make_date("2026-08-04")), Some(&dec("2000")));
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();

        let mut ledger = RecordedLedger::new();
        ledger.insert(make_date("2026-08-03"), dec("1960.00"));
        store.save_recorded(&ledger).unwrap();
        assert_eq!(store.load_recorded().unwrap(), ledger);

        let mut entries = WeekendLedger::new();
        entries.insert(
            make_date("2026-08-09"),
            WeekendShiftEntry::new(dec("8"), NaiveTime::from_hms_opt(22, 0, 0).unwrap())
                .unwrap(),
        );
        store.save_weekend_entries(&entries).unwrap();
        assert_eq!(store.load_weekend_entries().unwrap(), entries);
    }
}
