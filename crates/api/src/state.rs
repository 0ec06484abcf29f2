use std::sync::Arc;

use galeri_core::view_state::DeleteConfirmation;
use galeri_db::Store;
use tokio::sync::Mutex;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The public gallery's project collection. Read-only.
    pub gallery: Store,
    /// The admin dashboard's project collection.
    pub dashboard: Store,
    /// Pending two-step delete of the dashboard.
    pub delete_confirmation: Arc<Mutex<DeleteConfirmation>>,
}

impl AppState {
    /// Fresh state with both views seeded from the mock data.
    pub fn seeded(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            gallery: Store::seeded_gallery(),
            dashboard: Store::seeded_dashboard(),
            delete_confirmation: Arc::new(Mutex::new(DeleteConfirmation::default())),
        }
    }
}
