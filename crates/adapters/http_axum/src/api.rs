//! JSON REST API route assembly.

use axum::Router;
use axum::routing::get;

use depot_app::ports::DeviceRepository;

use crate::state::AppState;

pub mod devices;

/// Routes mounted under `/api`.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/devices", get(devices::list).post(devices::create))
        .route(
            "/devices/{id}",
            get(devices::get)
                .patch(devices::update)
                .delete(devices::delete),
        )
        .route("/devices/state/{state}", get(devices::list_by_state))
        .route("/devices/brand/{brand}", get(devices::list_by_brand))
}
