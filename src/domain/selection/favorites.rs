//! Favorites - an uncapped, ordered set of opportunity ids.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OpportunityId;

/// Opportunities the evaluator has starred, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet(Vec<OpportunityId>);

impl FavoriteSet {
    /// Builds a set from stored ids, dropping duplicates.
    pub fn from_ids(ids: impl IntoIterator<Item = OpportunityId>) -> Self {
        let mut set = Self::default();
        for id in ids {
            if !set.contains(&id) {
                set.0.push(id);
            }
        }
        set
    }

    /// Removes `id` if present, otherwise appends it.
    ///
    /// Returns true if `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: OpportunityId) -> bool {
        if let Some(pos) = self.0.iter().position(|existing| *existing == id) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(id);
            true
        }
    }

    pub fn contains(&self, id: &OpportunityId) -> bool {
        self.0.contains(id)
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
