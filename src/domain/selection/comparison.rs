//! Comparison set - at most four opportunities compared side by side.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OpportunityId;

/// Maximum number of opportunities in the comparison set.
pub const MAX_COMPARISON: usize = 4;

/// Result of asking to add an opportunity to the comparison set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonOutcome {
    Added,
    AlreadyPresent,
    Full,
}

impl ComparisonOutcome {
    /// Returns true if the set changed.
    pub fn is_added(&self) -> bool {
        matches!(self, ComparisonOutcome::Added)
    }
}

/// Ordered set of distinct opportunity ids, capped at [`MAX_COMPARISON`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonSet(Vec<OpportunityId>);

impl ComparisonSet {
    /// Builds a set from stored ids, dropping duplicates and anything past the cap.
    pub fn from_ids(ids: impl IntoIterator<Item = OpportunityId>) -> Self {
        let mut set = Self::default();
        for id in ids {
            set.add(id);
        }
        set
    }

    /// Appends `id` unless it is already present or the set is full.
    ///
    /// The two refusals leave the set untouched.
    pub fn add(&mut self, id: OpportunityId) -> ComparisonOutcome {
        if self.contains(&id) {
            return ComparisonOutcome::AlreadyPresent;
        }
        if self.is_full() {
            return ComparisonOutcome::Full;
        }
        self.0.push(id);
        ComparisonOutcome::Added
    }

    /// Removes `id`. Returns true if it was present.
    pub fn remove(&mut self, id: &OpportunityId) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != id);
        self.0.len() != before
    }

    /// Empties the set. Returns true if anything was removed.
    pub fn clear(&mut self) -> bool {
        let had_entries = !self.0.is_empty();
        self.0.clear();
        had_entries
    }

    pub fn contains(&self, id: &OpportunityId) -> bool {
        self.0.contains(id)
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= MAX_COMPARISON
    }

    pub fn ids(&self) -> &[OpportunityId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> OpportunityId {
        OpportunityId::new(s).unwrap()
    }

    fn full_set() -> ComparisonSet {
        ComparisonSet::from_ids(["1", "2", "3", "4"].map(id))
    }

    #[test]
    fn fifth_add_is_a_no_op() {
        let mut set = full_set();
        let before = set.clone();

        assert_eq!(set.add(id("5")), ComparisonOutcome::Full);
        assert_eq!(set, before);
        assert_eq!(set.len(), MAX_COMPARISON);
    }

    #[test]
    fn duplicate_add_is_a_no_op() {
        let mut set = ComparisonSet::from_ids([id("1")]);

        assert_eq!(set.add(id("1")), ComparisonOutcome::AlreadyPresent);
        assert_eq!(set.ids(), &[id("1")]);
    }

    #[test]
    fn duplicate_of_full_set_reports_already_present() {
        let mut set = full_set();
        assert_eq!(set.add(id("2")), ComparisonOutcome::AlreadyPresent);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut set = ComparisonSet::default();
        assert!(set.add(id("3")).is_added());
        assert!(set.add(id("1")).is_added());
        assert_eq!(set.ids(), &[id("3"), id("1")]);
    }

    #[test]
    fn remove_frees_a_slot() {
        let mut set = full_set();

        assert!(set.remove(&id("2")));
        assert!(!set.remove(&id("2")));
        assert_eq!(set.add(id("5")), ComparisonOutcome::Added);
        assert_eq!(set.ids(), &[id("1"), id("3"), id("4"), id("5")]);
    }

    #[test]
    fn clear_reports_whether_anything_changed() {
        let mut set = full_set();
        assert!(set.clear());
        assert!(set.is_empty());
        assert!(!set.clear());
    }

    #[test]
    fn from_ids_enforces_cap() {
        let set = ComparisonSet::from_ids(["1", "2", "3", "4", "5", "6"].map(id));
        assert_eq!(set.len(), MAX_COMPARISON);
        assert!(!set.contains(&id("5")));
    }

    #[test]
    fn outcome_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&ComparisonOutcome::AlreadyPresent).unwrap(),
            r#""alreadyPresent""#
        );
    }
}
