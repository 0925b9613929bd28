//! Shared application state for axum handlers.

use std::sync::Arc;

use depot_app::ports::DeviceRepository;
use depot_app::services::device_service::DeviceService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Device lifecycle service.
    pub device_service: Arc<DeviceService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
        }
    }
}

impl<R> AppState<R>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(device_service: DeviceService<R>) -> Self {
        Self {
            device_service: Arc::new(device_service),
        }
    }
}
