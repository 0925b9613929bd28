//! JSON REST handlers for devices.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use depot_app::ports::DeviceRepository;
use depot_domain::device::{Device, DevicePatch, DeviceState};
use depot_domain::id::DeviceId;

use crate::error::ApiError;
use crate::state::AppState;
use crate::validate;

/// Request body for creating a device.
///
/// All fields are optional at the serde level so that missing fields reach
/// the validation schema (and produce a 400 with a message) instead of
/// failing JSON extraction.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CreateDeviceRequest {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub state: Option<String>,
}

/// Request body for partially updating a device.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UpdateDeviceRequest {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub state: Option<String>,
}

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Device>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Device>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    NoContent,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(id: &str) -> Result<DeviceId, ApiError> {
    DeviceId::from_str(id).map_err(|_| ApiError::InvalidId)
}

fn parse_state(state: &str) -> Result<DeviceState, ApiError> {
    DeviceState::from_str(state)
        .map_err(|err| ApiError::Domain(depot_domain::error::DepotError::Validation(err)))
}

/// `GET /api/devices`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    let devices = state.device_service.list_devices().await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET /api/devices/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    let device_id = parse_id(&id)?;
    let device = state.device_service.get_device(device_id).await?;
    Ok(GetResponse::Ok(Json(device)))
}

/// `GET /api/devices/state/{state}`
pub async fn list_by_state<R>(
    State(state): State<AppState<R>>,
    Path(wanted): Path<String>,
) -> Result<ListResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    let wanted = parse_state(&wanted)?;
    let devices = state.device_service.list_devices_by_state(wanted).await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET /api/devices/brand/{brand}`
pub async fn list_by_brand<R>(
    State(state): State<AppState<R>>,
    Path(brand): Path<String>,
) -> Result<ListResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    let devices = state.device_service.list_devices_by_brand(&brand).await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `POST /api/devices`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<CreateDeviceRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    validate::run(
        validate::CREATE_DEVICE,
        &[req.name.as_deref(), req.brand.as_deref(), req.state.as_deref()],
    )
    .map_err(ApiError::InvalidRequest)?;

    // The schema guarantees presence and membership past this point.
    let device_state = parse_state(req.state.as_deref().unwrap_or_default())?;
    let device = Device::builder()
        .name(req.name.unwrap_or_default())
        .brand(req.brand.unwrap_or_default())
        .state(device_state)
        .build()
        .map_err(depot_domain::error::DepotError::from)?;

    let created = state.device_service.create_device(device).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PATCH /api/devices/{id}`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateDeviceRequest>,
) -> Result<UpdateResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    let device_id = parse_id(&id)?;

    validate::run(
        validate::UPDATE_DEVICE,
        &[req.name.as_deref(), req.brand.as_deref(), req.state.as_deref()],
    )
    .map_err(ApiError::InvalidRequest)?;

    let patch = DevicePatch {
        name: req.name,
        brand: req.brand,
        state: req.state.as_deref().map(parse_state).transpose()?,
    };

    state.device_service.update_device(device_id, patch).await?;
    Ok(UpdateResponse::NoContent)
}

/// `DELETE /api/devices/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    let device_id = parse_id(&id)?;
    state.device_service.delete_device(device_id).await?;
    Ok(DeleteResponse::NoContent)
}
