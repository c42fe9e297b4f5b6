//! A text input with an optional attached button and an optional dropdown of
//! recently submitted values, for `iced` applications.
//!
//! Recent entries live in a [`KeyValueStore`](storage::KeyValueStore) under
//! `"<id>LocalStorageKey"` as a JSON array of
//! `{"type": "proposal", "label": ..., "value": ...}` objects.

pub mod app;
pub mod combo;
pub mod completion;
pub mod config;
pub mod error;
pub mod matcher;
pub mod messages;
pub mod provider;
pub mod recent;
pub mod storage;
pub mod ui;

pub use combo::{Action, ComboTextInput, Message, Options};
pub use error::{Error, Result};
pub use recent::{Proposal, RecentEntries};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
