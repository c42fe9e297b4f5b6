//! Dropdown state for proposals shown under the text input.

use crate::matcher::engine::ProposalMatcher;
use crate::recent::Proposal;

pub struct InputCompletion {
    group: String,
    delete_tooltip: String,
    matcher: ProposalMatcher,
    /// Every proposal from the providers, in provider order
    proposals: Vec<Proposal>,
    /// Proposals matching the current query
    filtered: Vec<Proposal>,
    query: String,
    selected: Option<usize>,
    open: bool,
}

impl InputCompletion {
    pub fn new(id: &str, delete_tooltip: impl Into<String>) -> Self {
        Self {
            group: format!("{id}InputCompletion"),
            delete_tooltip: delete_tooltip.into(),
            matcher: ProposalMatcher::new(),
            proposals: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            selected: None,
            open: false,
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn delete_tooltip(&self) -> &str {
        &self.delete_tooltip
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Proposals currently listed
    pub fn visible(&self) -> &[Proposal] {
        &self.filtered
    }

    /// Text the listed proposals are filtered by
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Proposal> {
        self.selected.and_then(|i| self.visible().get(i))
    }

    /// Open the dropdown over `proposals`, filtered by `query`
    pub fn propose_on(&mut self, proposals: Vec<Proposal>, query: &str) {
        self.open = true;
        self.proposals = proposals;
        self.query = query.to_string();
        self.refilter();
        tracing::debug!(
            "{}: showing {} of {} proposals",
            self.group,
            self.filtered.len(),
            self.proposals.len()
        );
    }

    /// Replace the proposals of an open dropdown, keeping the query
    pub fn refresh(&mut self, proposals: Vec<Proposal>) {
        if !self.open {
            return;
        }
        self.proposals = proposals;
        self.refilter();
    }

    /// Drop every proposal with this value without waiting for a reload
    pub fn remove(&mut self, value: &str) {
        self.proposals.retain(|p| p.value != value);
        if self.open {
            self.refilter();
        }
    }

    pub fn set_query(&mut self, query: &str) {
        if query == self.query {
            return;
        }
        self.query = query.to_string();
        if self.open {
            self.refilter();
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.visible().len() {
            self.selected = Some(index);
        }
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        self.selected = match self.selected {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }

    pub fn dismiss(&mut self) {
        self.open = false;
        self.selected = None;
        self.filtered.clear();
    }

    fn refilter(&mut self) {
        self.filtered = self.matcher.filter(&self.query, &self.proposals);
        let len = self.visible().len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(i) if i >= len => Some(len - 1),
            other => other,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proposals(values: &[&str]) -> Vec<Proposal> {
        values.iter().copied().map(Proposal::new).collect()
    }

    #[test]
    fn group_is_derived_from_identifier() {
        let completion = InputCompletion::new("search", "tip");
        assert_eq!(completion.group(), "searchInputCompletion");
        assert_eq!(completion.delete_tooltip(), "tip");
    }

    #[test]
    fn propose_on_opens_with_everything_for_empty_query() {
        let mut completion = InputCompletion::new("search", "");
        assert!(!completion.is_open());
        completion.propose_on(proposals(&["a", "b"]), "");
        assert!(completion.is_open());
        assert_eq!(completion.visible(), proposals(&["a", "b"]).as_slice());
        assert!(completion.selected().is_none());
    }

    #[test]
    fn long_lists_are_listed_in_full() {
        let mut completion = InputCompletion::new("search", "");
        let many: Vec<String> = (0..20).map(|i| format!("entry {i}")).collect();
        completion.propose_on(many.into_iter().map(Proposal::new).collect(), "");
        assert_eq!(completion.visible().len(), 20);
        for _ in 0..20 {
            completion.select_next();
        }
        assert_eq!(
            completion.selected().map(|p| p.value.as_str()),
            Some("entry 19")
        );
    }

    #[test]
    fn remove_drops_row_and_keeps_selection_in_bounds() {
        let mut completion = InputCompletion::new("search", "");
        completion.propose_on(proposals(&["a", "b"]), "");
        completion.select(1);
        completion.remove("b");
        assert_eq!(completion.visible(), proposals(&["a"]).as_slice());
        assert_eq!(completion.selected().map(|p| p.value.as_str()), Some("a"));
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut completion = InputCompletion::new("search", "");
        completion.propose_on(proposals(&["a", "b"]), "");
        completion.select_previous();
        assert_eq!(completion.selected_index(), None);
        completion.select_next();
        completion.select_next();
        completion.select_next();
        assert_eq!(completion.selected().map(|p| p.value.as_str()), Some("b"));
        completion.select_previous();
        completion.select_previous();
        assert_eq!(completion.selected_index(), None);
    }

    #[test]
    fn refresh_clamps_selection_after_removal() {
        let mut completion = InputCompletion::new("search", "");
        completion.propose_on(proposals(&["a", "b"]), "");
        completion.select(1);
        completion.refresh(proposals(&["a"]));
        assert_eq!(completion.selected().map(|p| p.value.as_str()), Some("a"));
        completion.refresh(Vec::new());
        assert!(completion.selected().is_none());
    }

    #[test]
    fn refresh_is_ignored_while_closed() {
        let mut completion = InputCompletion::new("search", "");
        completion.refresh(proposals(&["a"]));
        assert!(completion.visible().is_empty());
    }

    #[test]
    fn query_filters_open_dropdown() {
        let mut completion = InputCompletion::new("search", "");
        completion.propose_on(proposals(&["alpha", "beta"]), "");
        completion.set_query("bet");
        assert_eq!(completion.visible(), proposals(&["beta"]).as_slice());
    }

    #[test]
    fn dismiss_closes_and_clears_selection() {
        let mut completion = InputCompletion::new("search", "");
        completion.propose_on(proposals(&["a"]), "");
        completion.select(0);
        completion.dismiss();
        assert!(!completion.is_open());
        assert!(completion.selected().is_none());
        assert!(completion.visible().is_empty());
    }
}
