use std::time::Duration;

use crate::error::Result;
use crate::recent::{Proposal, RecentEntries};

/// Default delay before a deletion is announced to the dropdown
pub const DEFAULT_NOTIFY_DELAY: Duration = Duration::from_millis(20);

/// Data source for the completion dropdown (extensibility point)
pub trait ProposalProvider: Send + Sync {
    fn proposals(&self, recent: &RecentEntries) -> Result<Vec<Proposal>>;
}

impl<F> ProposalProvider for F
where
    F: Fn(&RecentEntries) -> Result<Vec<Proposal>> + Send + Sync,
{
    fn proposals(&self, recent: &RecentEntries) -> Result<Vec<Proposal>> {
        self(recent)
    }
}

/// Called when the user deletes a proposal from the dropdown
pub trait DeleteHandler: Send + Sync {
    /// Returns whether `entry` was actually removed
    fn delete(&self, entry: &Proposal, recent: &RecentEntries) -> Result<bool>;
}

impl<F> DeleteHandler for F
where
    F: Fn(&Proposal, &RecentEntries) -> Result<bool> + Send + Sync,
{
    fn delete(&self, entry: &Proposal, recent: &RecentEntries) -> Result<bool> {
        self(entry, recent)
    }
}

/// Default provider: the stored recent entries, oldest first
pub fn stored_proposals(recent: &RecentEntries) -> Result<Vec<Proposal>> {
    recent.load()
}

/// Default delete handler: remove the stored entry with the same value
pub fn delete_stored(entry: &Proposal, recent: &RecentEntries) -> Result<bool> {
    recent.remove(&entry.value)
}

/// Notification that the proposal list changed underneath the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataListChanged {
    pub deleting: bool,
}

impl DataListChanged {
    pub const EVENT_TYPE: &'static str = "inputDataListChanged";

    /// Resolve to a deletion notice once `delay` has passed, giving the
    /// store write time to land before the dropdown reloads
    pub async fn deletion_after(delay: Duration) -> Self {
        tokio::time::sleep(delay).await;
        Self { deleting: true }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Instant;

    use super::*;
    use crate::storage::MemoryStore;

    fn recent() -> RecentEntries {
        let recent = RecentEntries::new("search", Arc::new(MemoryStore::new()));
        recent.add("a").unwrap();
        recent.add("b").unwrap();
        recent
    }

    #[test]
    fn stored_proposals_returns_entries_in_order() {
        let labels: Vec<_> = stored_proposals(&recent())
            .unwrap()
            .into_iter()
            .map(|p| p.label)
            .collect();
        assert_eq!(labels, ["a", "b"]);
    }

    #[test]
    fn delete_stored_matches_on_value() {
        let recent = recent();
        let entry = Proposal {
            label: "shown differently".to_string(),
            ..Proposal::new("a")
        };
        assert!(delete_stored(&entry, &recent).unwrap());
        assert!(!delete_stored(&entry, &recent).unwrap());
        assert_eq!(recent.load().unwrap(), vec![Proposal::new("b")]);
    }

    #[test]
    fn closures_act_as_providers() {
        let provider = |_: &RecentEntries| -> Result<Vec<Proposal>> {
            Ok(vec![Proposal::new("from closure")])
        };
        let got = provider.proposals(&recent()).unwrap();
        assert_eq!(got, vec![Proposal::new("from closure")]);
    }

    #[tokio::test]
    async fn deletion_notice_waits_for_delay() {
        let start = Instant::now();
        let notice = DataListChanged::deletion_after(DEFAULT_NOTIFY_DELAY).await;
        assert!(start.elapsed() >= DEFAULT_NOTIFY_DELAY);
        assert_eq!(notice, DataListChanged { deleting: true });
        assert_eq!(DataListChanged::EVENT_TYPE, "inputDataListChanged");
    }
}
