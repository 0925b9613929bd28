//! Storage port — repository trait for device persistence.

use std::future::Future;

use depot_domain::device::{Device, DeviceState};
use depot_domain::error::DepotError;
use depot_domain::id::DeviceId;

/// Persistence contract for device records.
///
/// Absence is modelled as `Ok(None)` on lookups; the service layer decides
/// whether that becomes a [`DepotError::NotFound`]. Any other failure
/// surfaces as [`DepotError::Storage`] and is propagated untouched.
pub trait DeviceRepository {
    /// Persist a new device record.
    fn create(&self, device: Device) -> impl Future<Output = Result<Device, DepotError>> + Send;

    /// Fetch a single device by id, `None` when no record matches.
    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, DepotError>> + Send;

    /// Fetch all devices, in no particular order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, DepotError>> + Send;

    /// Fetch all devices in the given lifecycle state.
    fn find_by_state(
        &self,
        state: DeviceState,
    ) -> impl Future<Output = Result<Vec<Device>, DepotError>> + Send;

    /// Fetch all devices with exactly the given brand (case-sensitive).
    fn find_by_brand(
        &self,
        brand: &str,
    ) -> impl Future<Output = Result<Vec<Device>, DepotError>> + Send;

    /// Overwrite name, brand, and state of the record matching the device id.
    fn update(&self, device: Device) -> impl Future<Output = Result<Device, DepotError>> + Send;

    /// Remove the record with the given id.
    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), DepotError>> + Send;
}
