//! The bounded conversion log

use chrono::{DateTime, Utc};
use codeshift_core::Language;
use parking_lot::Mutex;

use crate::entry::HistoryEntry;
use crate::store::KeyValueStore;

/// Most entries kept; adding past this drops the oldest
pub const MAX_ENTRIES: usize = 10;

/// Key the log is stored under
pub const HISTORY_KEY: &str = "conversion_history";

/// Newest-first log of recent conversions over a key-value store
///
/// Storage failures never reach the caller: reads degrade to an empty log
/// and writes are logged and dropped. `add` and `clear` hold a lock for
/// their whole read-modify-write, so concurrent callers can't lose entries
/// or push the log past [`MAX_ENTRIES`].
pub struct HistoryStore<S> {
    store: S,
    /// Last id handed out; also serializes writers
    last_id: Mutex<i64>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            last_id: Mutex::new(0),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The persisted log, or an empty one if nothing valid is stored
    pub fn list(&self) -> Vec<HistoryEntry> {
        let payload = match self.store.get(HISTORY_KEY) {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read conversion history");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<HistoryEntry>>(&payload) {
            Ok(mut entries) => {
                entries.truncate(MAX_ENTRIES);
                entries
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring corrupt conversion history");
                Vec::new()
            }
        }
    }

    /// Record a conversion made now
    pub fn add(
        &self,
        source: Language,
        target: Language,
        input: &str,
        output: &str,
    ) -> Vec<HistoryEntry> {
        self.add_at(source, target, input, output, Utc::now())
    }

    /// Record a conversion made at `now`
    ///
    /// Returns the new log, even when it could not be persisted.
    pub fn add_at(
        &self,
        source: Language,
        target: Language,
        input: &str,
        output: &str,
        now: DateTime<Utc>,
    ) -> Vec<HistoryEntry> {
        let mut last_id = self.last_id.lock();
        let mut log = self.list();

        let floor = log.first().map_or(*last_id, |newest| newest.id.max(*last_id));
        let id = match floor.checked_add(1) {
            Some(next) => now.timestamp_millis().max(next),
            None => {
                tracing::warn!(
                    newest = floor,
                    "conversion history ids exhausted; starting a fresh log"
                );
                log.clear();
                now.timestamp_millis()
            }
        };
        *last_id = id;

        log.insert(0, HistoryEntry::new(id, source, target, input, output, now));
        log.truncate(MAX_ENTRIES);

        self.persist(&log);
        log
    }

    /// Erase the persisted log
    pub fn clear(&self) {
        let _guard = self.last_id.lock();
        if let Err(e) = self.store.remove(HISTORY_KEY) {
            tracing::warn!(error = %e, "failed to clear conversion history");
        }
    }

    fn persist(&self, log: &[HistoryEntry]) {
        let payload = match serde_json::to_string(log) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize conversion history");
                return;
            }
        };

        if let Err(e) = self.store.set(HISTORY_KEY, &payload) {
            tracing::warn!(error = %e, entries = log.len(), "failed to persist conversion history");
        }
    }
}
