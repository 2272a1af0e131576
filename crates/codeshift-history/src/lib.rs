//! codeshift-history: Recent conversions, persisted through a pluggable store
//!
//! - `HistoryStore`: the newest-first log, capped at [`MAX_ENTRIES`]
//! - `KeyValueStore`: the storage capability it persists into
//! - `MemoryStore` / `FileStore`: in-process and on-disk implementations
//!
//! # Example
//!
//! ```
//! use codeshift_core::Language;
//! use codeshift_history::{HistoryStore, MemoryStore};
//!
//! let history = HistoryStore::new(MemoryStore::new());
//! history.add(Language::JavaScript, Language::Python, "console.log(1)", "print(1)");
//! assert_eq!(history.list().len(), 1);
//! ```

mod entry;
mod history;
mod store;

pub use entry::{truncate_code, HistoryEntry, ELLIPSIS, MAX_CODE_CHARS};
pub use history::{HistoryStore, HISTORY_KEY, MAX_ENTRIES};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
