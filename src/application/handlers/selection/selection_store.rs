//! SelectionStore - Favorites and comparison sets over a key-value store.
//!
//! Each set is stored under its own key as a JSON array of opportunity id
//! strings. Mutations run read-modify-write under one in-process mutex and
//! publish a change event only when the stored set actually changed.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::{
    CommandMetadata, DomainError, DomainEvent, EventEnvelope, OpportunityId,
};
use crate::domain::selection::{
    ComparisonChanged, ComparisonOutcome, ComparisonSet, FavoriteSet, FavoritesChanged,
    SelectionKind,
};
use crate::ports::{EventPublisher, SelectionStorage, SelectionStorageError};

/// Both selection sets as returned to clients.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub favorites: FavoriteSet,
    pub comparison: ComparisonSet,
}

/// Service owning the favorites and comparison sets.
pub struct SelectionStore {
    storage: Arc<dyn SelectionStorage>,
    event_publisher: Arc<dyn EventPublisher>,
    write_lock: Mutex<()>,
}

impl SelectionStore {
    pub fn new(
        storage: Arc<dyn SelectionStorage>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            storage,
            event_publisher,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn favorites(&self) -> Result<FavoriteSet, DomainError> {
        Ok(FavoriteSet::from_ids(
            self.load_ids(SelectionKind::Favorites).await?,
        ))
    }

    pub async fn comparison(&self) -> Result<ComparisonSet, DomainError> {
        Ok(ComparisonSet::from_ids(
            self.load_ids(SelectionKind::Comparison).await?,
        ))
    }

    pub async fn snapshot(&self) -> Result<SelectionSnapshot, DomainError> {
        Ok(SelectionSnapshot {
            favorites: self.favorites().await?,
            comparison: self.comparison().await?,
        })
    }

    pub async fn is_favorite(&self, id: &OpportunityId) -> Result<bool, DomainError> {
        Ok(self.favorites().await?.contains(id))
    }

    pub async fn is_in_comparison(&self, id: &OpportunityId) -> Result<bool, DomainError> {
        Ok(self.comparison().await?.contains(id))
    }

    /// Removes `id` from favorites if present, appends it otherwise.
    ///
    /// Returns whether `id` is a favorite afterwards.
    pub async fn toggle_favorite(
        &self,
        id: OpportunityId,
        mut metadata: CommandMetadata,
    ) -> Result<bool, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut favorites = self.favorites().await?;
        let is_favorite = favorites.toggle(id.clone());
        self.store_ids(SelectionKind::Favorites, favorites.ids())
            .await?;

        tracing::info!(
            opportunity_id = %id,
            is_favorite,
            favorites = favorites.len(),
            "Favorite toggled"
        );

        self.publish_committed(&FavoritesChanged::new(&favorites), &mut metadata)
            .await;

        Ok(is_favorite)
    }

    /// Appends `id` to the comparison set.
    ///
    /// Already present or full sets are left untouched and nothing is
    /// published; the outcome says which case applied.
    pub async fn add_to_comparison(
        &self,
        id: OpportunityId,
        metadata: CommandMetadata,
    ) -> Result<ComparisonOutcome, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut comparison = self.comparison().await?;
        let outcome = comparison.add(id.clone());
        if !outcome.is_added() {
            tracing::debug!(opportunity_id = %id, ?outcome, "Comparison add ignored");
            return Ok(outcome);
        }

        self.commit_comparison(&comparison, metadata).await?;
        Ok(outcome)
    }

    /// Returns false when `id` was not in the comparison set.
    pub async fn remove_from_comparison(
        &self,
        id: &OpportunityId,
        metadata: CommandMetadata,
    ) -> Result<bool, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut comparison = self.comparison().await?;
        if !comparison.remove(id) {
            return Ok(false);
        }

        self.commit_comparison(&comparison, metadata).await?;
        Ok(true)
    }

    /// Empties the comparison set. Returns false when it was already empty.
    pub async fn clear_comparison(&self, mut metadata: CommandMetadata) -> Result<bool, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut comparison = self.comparison().await?;
        if !comparison.clear() {
            return Ok(false);
        }

        self.storage
            .remove(SelectionKind::Comparison.storage_key())
            .await?;
        tracing::info!("Comparison cleared");

        self.publish_committed(&ComparisonChanged::new(&comparison), &mut metadata)
            .await;

        Ok(true)
    }

    async fn commit_comparison(
        &self,
        comparison: &ComparisonSet,
        mut metadata: CommandMetadata,
    ) -> Result<(), DomainError> {
        self.store_ids(SelectionKind::Comparison, comparison.ids())
            .await?;
        tracing::info!(comparison = comparison.len(), "Comparison updated");

        self.publish_committed(&ComparisonChanged::new(comparison), &mut metadata)
            .await;
        Ok(())
    }

    /// Publishes a change that is already stored.
    ///
    /// Failures are logged, not returned: the caller's change has been kept,
    /// so reporting an error would invite a retry that undoes it.
    async fn publish_committed<E>(&self, event: &E, metadata: &mut CommandMetadata)
    where
        E: DomainEvent + Serialize,
    {
        let published = async {
            let envelope =
                EventEnvelope::from_event(event)?.with_correlation_id(metadata.correlation_id());
            self.event_publisher.publish(envelope).await
        }
        .await;

        if let Err(e) = published {
            tracing::warn!(
                event_type = event.event_type(),
                error = %e,
                "Selection stored but change event not published"
            );
        }
    }

    /// Reads a stored id list.
    ///
    /// Missing keys are empty sets. Unparseable values and invalid ids are
    /// logged and skipped, so one corrupt entry never blocks the dashboard.
    async fn load_ids(&self, kind: SelectionKind) -> Result<Vec<OpportunityId>, DomainError> {
        let key = kind.storage_key();
        let Some(raw) = self.storage.get(key).await? else {
            return Ok(Vec::new());
        };

        let values: Vec<String> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(key, error = %e, "Ignoring unreadable selection");
                return Ok(Vec::new());
            }
        };

        Ok(values
            .into_iter()
            .filter_map(|value| match OpportunityId::new(value.clone()) {
                Ok(id) => Some(id),
                Err(e) => {
                    tracing::warn!(key, value = %value, error = %e, "Skipping invalid selection id");
                    None
                }
            })
            .collect())
    }

    async fn store_ids(&self, kind: SelectionKind, ids: &[OpportunityId]) -> Result<(), DomainError> {
        let json = serde_json::to_string(ids)
            .map_err(|e| SelectionStorageError::SerializationFailed(e.to_string()))?;
        self.storage.set(kind.storage_key(), &json).await?;
        Ok(())
    }
}
