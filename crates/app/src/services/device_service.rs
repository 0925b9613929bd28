//! Device lifecycle service — use-cases for managing devices.
//!
//! This is the single place where the in-use guard is enforced. Update and
//! delete always re-fetch the current record first; the guard is evaluated
//! against the persisted state, never against caller-supplied state.

use depot_domain::device::{Device, DevicePatch, DeviceState};
use depot_domain::error::{DepotError, DeviceInUseError, NotFoundError};
use depot_domain::id::DeviceId;

use crate::ports::DeviceRepository;

/// Application service for device CRUD operations with lifecycle guards.
pub struct DeviceService<R> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new device after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DepotError::Validation`] if invariants fail, or a storage
    /// error propagated from the repository.
    #[tracing::instrument(skip(self, device), fields(device_name = %device.name))]
    pub async fn create_device(&self, device: Device) -> Result<Device, DepotError> {
        device.validate()?;
        self.repo.create(device).await
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DepotError::NotFound`] when no device with `id` exists, or
    /// a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, DepotError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all devices.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_devices(&self) -> Result<Vec<Device>, DepotError> {
        self.repo.get_all().await
    }

    /// List devices in the given lifecycle state.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_devices_by_state(
        &self,
        state: DeviceState,
    ) -> Result<Vec<Device>, DepotError> {
        self.repo.find_by_state(state).await
    }

    /// List devices with exactly the given brand (case-sensitive, no
    /// partial match).
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_devices_by_brand(&self, brand: &str) -> Result<Vec<Device>, DepotError> {
        self.repo.find_by_brand(brand).await
    }

    /// Apply a partial update to an existing device.
    ///
    /// The current record is re-fetched first. While the device is `in_use`,
    /// patches touching name or brand are rejected; state-only patches are
    /// always allowed. The guard looks at the pre-update state only, so a
    /// patch that releases the device cannot rename it in the same call.
    ///
    /// # Errors
    ///
    /// Returns [`DepotError::NotFound`] when no device with `id` exists,
    /// [`DepotError::DeviceInUse`] when the guard rejects the patch,
    /// [`DepotError::Validation`] if the patched record violates invariants,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_device(
        &self,
        id: DeviceId,
        patch: DevicePatch,
    ) -> Result<Device, DepotError> {
        let mut device = self.get_device(id).await?;

        if device.is_in_use() && patch.renames_or_rebrands() {
            return Err(DeviceInUseError { id: id.to_string() }.into());
        }

        device.apply(patch);
        device.validate()?;
        self.repo.update(device).await
    }

    /// Delete a device by id.
    ///
    /// The current record is re-fetched first; a device that is `in_use`
    /// cannot be deleted.
    ///
    /// # Errors
    ///
    /// Returns [`DepotError::NotFound`] when no device with `id` exists,
    /// [`DepotError::DeviceInUse`] when the device is in use, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(&self, id: DeviceId) -> Result<(), DepotError> {
        let device = self.get_device(id).await?;

        if device.is_in_use() {
            return Err(DeviceInUseError { id: id.to_string() }.into());
        }

        self.repo.delete(id).await
    }
}
