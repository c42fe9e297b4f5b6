//! Recent entries: previously submitted input values kept in a [`KeyValueStore`]
//! as one JSON array per widget.
//!
//! Every operation reads the array from the store, so several widgets (or
//! several processes sharing a [`FileStore`](crate::storage::FileStore)) see
//! each other's writes. Mutations write the whole array back.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::KeyValueStore;

/// Kind tag carried by every stored entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalKind {
    #[default]
    Proposal,
}

/// A completion proposal, and the shape recent entries are persisted in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    #[serde(rename = "type", default)]
    pub kind: ProposalKind,
    /// Text shown in the dropdown
    pub label: String,
    /// Text put into the input when selected
    pub value: String,
}

impl Proposal {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            kind: ProposalKind::Proposal,
            label: value.clone(),
            value,
        }
    }
}

impl AsRef<str> for Proposal {
    fn as_ref(&self) -> &str {
        &self.label
    }
}

/// Storage key for the widget with the given identifier
pub fn storage_key(id: &str) -> String {
    format!("{id}LocalStorageKey")
}

/// Index of the first entry whose `value` equals `value`
pub fn index_of_value(entries: &[Proposal], value: &str) -> Option<usize> {
    entries.iter().position(|entry| entry.value == value)
}

/// The recent-entry list of one widget
#[derive(Clone)]
pub struct RecentEntries {
    key: String,
    store: Arc<dyn KeyValueStore>,
    /// 0 keeps every entry
    max_entries: usize,
}

impl std::fmt::Debug for RecentEntries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecentEntries")
            .field("key", &self.key)
            .field("max_entries", &self.max_entries)
            .finish_non_exhaustive()
    }
}

impl RecentEntries {
    pub fn new(id: &str, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            key: storage_key(id),
            store,
            max_entries: 0,
        }
    }

    /// Cap the list; once exceeded the oldest entries are dropped
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Stored entries in insertion order. Nothing stored reads as empty.
    pub fn load(&self) -> Result<Vec<Proposal>> {
        match self.store.get_item(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    fn save(&self, entries: &[Proposal]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        self.store.set_item(&self.key, &raw)
    }

    /// Append `value` unless it is empty or already stored.
    ///
    /// Returns whether the list changed.
    pub fn add(&self, value: &str) -> Result<bool> {
        if value.is_empty() {
            return Ok(false);
        }
        let mut entries = self.load()?;
        if index_of_value(&entries, value).is_some() {
            tracing::debug!("'{}' already in {}", value, self.key);
            return Ok(false);
        }
        entries.push(Proposal::new(value));
        if self.max_entries > 0 && entries.len() > self.max_entries {
            let excess = entries.len() - self.max_entries;
            entries.drain(..excess);
        }
        self.save(&entries)?;
        tracing::debug!("Added '{}' to {} ({} entries)", value, self.key, entries.len());
        Ok(true)
    }

    /// Remove the entry whose `value` equals `value`.
    ///
    /// Returns whether an entry was removed; the store is only written when one was.
    pub fn remove(&self, value: &str) -> Result<bool> {
        let mut entries = self.load()?;
        let Some(index) = index_of_value(&entries, value) else {
            return Ok(false);
        };
        entries.remove(index);
        self.save(&entries)?;
        tracing::debug!("Removed '{}' from {}", value, self.key);
        Ok(true)
    }
}
