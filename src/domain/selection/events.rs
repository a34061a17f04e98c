//! Selection domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EventId, OpportunityId, Timestamp};

use super::{ComparisonSet, FavoriteSet, SelectionKind};

/// Published after the favorites set changes. Carries the full new list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritesChanged {
    pub event_id: EventId,
    pub selection: SelectionKind,
    pub opportunity_ids: Vec<OpportunityId>,
    pub changed_at: Timestamp,
}

crate::domain_event!(
    FavoritesChanged,
    event_type = "favorites.changed.v1",
    aggregate_id = selection,
    aggregate_type = "Selection",
    occurred_at = changed_at,
    event_id = event_id
);

impl FavoritesChanged {
    pub fn new(favorites: &FavoriteSet) -> Self {
        Self {
            event_id: EventId::new(),
            selection: SelectionKind::Favorites,
            opportunity_ids: favorites.ids().to_vec(),
            changed_at: Timestamp::now(),
        }
    }
}

/// Published after the comparison set changes. Carries the full new list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonChanged {
    pub event_id: EventId,
    pub selection: SelectionKind,
    pub opportunity_ids: Vec<OpportunityId>,
    pub changed_at: Timestamp,
}

crate::domain_event!(
    ComparisonChanged,
    event_type = "comparison.changed.v1",
    aggregate_id = selection,
    aggregate_type = "Selection",
    occurred_at = changed_at,
    event_id = event_id
);

impl ComparisonChanged {
    pub fn new(comparison: &ComparisonSet) -> Self {
        Self {
            event_id: EventId::new(),
            selection: SelectionKind::Comparison,
            opportunity_ids: comparison.ids().to_vec(),
            changed_at: Timestamp::now(),
        }
    }
}
