//! `SQLite` implementation of [`DeviceRepository`].

use std::future::Future;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use depot_app::ports::DeviceRepository;
use depot_domain::device::{Device, DeviceState};
use depot_domain::error::DepotError;
use depot_domain::id::DeviceId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Device`].
struct Wrapper(Device);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Device> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let brand: String = row.try_get("brand")?;
        let state: String = row.try_get("state")?;
        let created_at: String = row.try_get("created_at")?;

        let id = DeviceId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let state =
            DeviceState::from_str(&state).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .with_timezone(&Utc);

        Ok(Self(Device {
            id,
            name,
            brand,
            state,
            created_at,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO devices (id, name, brand, state, created_at) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM devices WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM devices";
const SELECT_BY_STATE: &str = "SELECT * FROM devices WHERE state = ?";
const SELECT_BY_BRAND: &str = "SELECT * FROM devices WHERE brand = ?";
const UPDATE: &str = "UPDATE devices SET name = ?, brand = ?, state = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM devices WHERE id = ?";

/// `SQLite`-backed device repository.
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    fn create(&self, device: Device) -> impl Future<Output = Result<Device, DepotError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(device.id.to_string())
                .bind(&device.name)
                .bind(&device.brand)
                .bind(device.state.as_str())
                .bind(device.created_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(device)
        }
    }

    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, DepotError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, DepotError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_state(
        &self,
        state: DeviceState,
    ) -> impl Future<Output = Result<Vec<Device>, DepotError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_STATE)
                .bind(state.as_str())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_brand(
        &self,
        brand: &str,
    ) -> impl Future<Output = Result<Vec<Device>, DepotError>> + Send {
        let pool = self.pool.clone();
        let brand = brand.to_string();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_BRAND)
                .bind(brand)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, device: Device) -> impl Future<Output = Result<Device, DepotError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&device.name)
                .bind(&device.brand)
                .bind(device.state.as_str())
                .bind(device.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(device)
        }
    }

    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), DepotError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
