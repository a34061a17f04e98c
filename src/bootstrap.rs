//! Wires adapters, handlers and the router from configuration.

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::adapters::catalog::{seed_catalog, CatalogFile, CatalogLoadError, InMemoryOpportunityCatalog};
use crate::adapters::events::InMemoryEventBus;
use crate::adapters::http::{app_router, AppState};
use crate::adapters::judgments::{
    InMemoryJudgmentRepository, JsonFileJudgmentRepository, JUDGMENTS_FILE_NAME,
};
use crate::adapters::storage::{FileSelectionStorage, InMemorySelectionStorage};
use crate::adapters::websocket::{LiveEventBridge, LiveHub};
use crate::application::handlers::SelectionStore;
use crate::config::AppConfig;
use crate::domain::foundation::DomainError;
use crate::ports::{JudgmentRepository, SelectionStorage};

/// Errors that stop the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),

    #[error("Failed to open judgment storage: {0}")]
    Judgments(#[from] DomainError),

    #[error("Failed to prepare data directory: {0}")]
    DataDir(#[from] std::io::Error),
}

/// A fully wired application.
pub struct Application {
    pub router: Router,
    pub hub: Arc<LiveHub>,
    pub event_bus: Arc<InMemoryEventBus>,
}

/// Builds every component described by `config`.
///
/// - Catalog: the YAML file at `storage.catalog_path`, else the built-in seed
/// - Judgments: `judgments.json` under `storage.data_dir`, else in memory
/// - Selections: one file per set under `<data_dir>/selection`, else in memory
pub async fn build_application(config: &AppConfig) -> Result<Application, StartupError> {
    let catalog_file = match &config.storage.catalog_path {
        Some(path) => {
            let file = CatalogFile::load(path).await?;
            tracing::info!(
                path = %path.display(),
                opportunities = file.opportunities.len(),
                "Catalog loaded"
            );
            file
        }
        None => seed_catalog().clone(),
    };
    let catalog = Arc::new(InMemoryOpportunityCatalog::new(catalog_file.opportunities));

    let judgments: Arc<dyn JudgmentRepository> = match &config.storage.data_dir {
        Some(dir) => {
            tokio::fs::create_dir_all(dir).await?;
            let path = dir.join(JUDGMENTS_FILE_NAME);
            Arc::new(JsonFileJudgmentRepository::open(path, catalog_file.judgments).await?)
        }
        None => Arc::new(InMemoryJudgmentRepository::with_judgments(
            catalog_file.judgments,
        )),
    };

    let selection_storage: Arc<dyn SelectionStorage> = match config.storage.selection_dir() {
        Some(dir) => Arc::new(FileSelectionStorage::new(dir)),
        None => Arc::new(InMemorySelectionStorage::new()),
    };

    let event_bus = Arc::new(InMemoryEventBus::dispatch_only());
    let hub = Arc::new(LiveHub::new(config.storage.live_channel_capacity));
    LiveEventBridge::new_shared(hub.clone()).register(event_bus.as_ref());

    let selection = Arc::new(SelectionStore::new(selection_storage, event_bus.clone()));
    let state = AppState::new(catalog, judgments, selection, event_bus.clone());
    let router = app_router(state, hub.clone(), &config.server);

    tracing::info!(
        persistent = config.storage.data_dir.is_some(),
        seed_catalog = config.storage.catalog_path.is_none(),
        "Application wired"
    );

    Ok(Application {
        router,
        hub,
        event_bus,
    })
}
