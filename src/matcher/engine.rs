use nucleo::pattern::{CaseMatching, Normalization, Pattern};
use nucleo::{Config, Matcher};

use crate::recent::Proposal;

/// Wrapper around nucleo for filtering proposals by the typed text
pub struct ProposalMatcher {
    matcher: Matcher,
}

impl ProposalMatcher {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
        }
    }

    /// Proposals whose label matches `query`, best score first.
    /// An empty query keeps every proposal in its original order.
    pub fn filter(&mut self, query: &str, proposals: &[Proposal]) -> Vec<Proposal> {
        if query.trim().is_empty() {
            return proposals.to_vec();
        }
        let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);
        pattern
            .match_list(proposals.iter(), &mut self.matcher)
            .into_iter()
            .map(|(proposal, _score)| proposal.clone())
            .collect()
    }
}

impl Default for ProposalMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proposals() -> Vec<Proposal> {
        ["cargo build", "git status", "cargo test"]
            .into_iter()
            .map(Proposal::new)
            .collect()
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let mut matcher = ProposalMatcher::new();
        assert_eq!(matcher.filter("", &proposals()), proposals());
        assert_eq!(matcher.filter("   ", &proposals()), proposals());
    }

    #[test]
    fn query_drops_non_matching_labels() {
        let mut matcher = ProposalMatcher::new();
        let labels: Vec<_> = matcher
            .filter("carg", &proposals())
            .into_iter()
            .map(|p| p.label)
            .collect();
        assert_eq!(labels.len(), 2);
        assert!(labels.iter().all(|l| l.starts_with("cargo")));
    }

    #[test]
    fn unmatched_query_is_empty() {
        let mut matcher = ProposalMatcher::new();
        assert!(matcher.filter("xyz", &proposals()).is_empty());
    }
}
