//! Device — an inventory record with a name, a brand, and a lifecycle state.
//!
//! The lifecycle state drives the only nontrivial business rule in the
//! system: a device that is [`DeviceState::InUse`] is protected from
//! identity changes (name, brand) and from removal, but its state may always
//! be changed (e.g. to release it back to `available`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::DeviceId;
use crate::time::Timestamp;

/// Maximum length, in characters, of a device name or brand.
pub const MAX_FIELD_LEN: usize = 255;

/// Lifecycle state of a device.
///
/// Any state may move to any other state through an update; the only
/// restriction is the in-use guard applied by the lifecycle service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceState {
    /// The device is free to be claimed.
    Available,
    /// The device is claimed; name and brand are frozen, deletion is blocked.
    InUse,
    /// The device is retired from rotation but kept on record.
    Inactive,
}

impl DeviceState {
    /// Canonical wire/storage representation of the state.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::InUse => "in_use",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "in_use" => Ok(Self::InUse),
            "inactive" => Ok(Self::Inactive),
            other => Err(ValidationError::UnknownState(other.to_string())),
        }
    }
}

/// A managed device record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub brand: String,
    pub state: DeviceState,
    /// Assigned once at creation, never updated afterwards.
    pub created_at: Timestamp,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `name` or `brand` is empty or
    /// longer than [`MAX_FIELD_LEN`] characters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.name.chars().count() > MAX_FIELD_LEN {
            return Err(ValidationError::NameTooLong);
        }
        if self.brand.is_empty() {
            return Err(ValidationError::EmptyBrand);
        }
        if self.brand.chars().count() > MAX_FIELD_LEN {
            return Err(ValidationError::BrandTooLong);
        }
        Ok(())
    }

    /// Whether the device is currently claimed and therefore protected by
    /// the in-use guard.
    #[must_use]
    pub fn is_in_use(&self) -> bool {
        self.state == DeviceState::InUse
    }

    /// Apply a patch, overwriting only the fields that are present.
    pub fn apply(&mut self, patch: DevicePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }
    }
}

/// Partial update for a device: fields left as `None` are untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DevicePatch {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub state: Option<DeviceState>,
}

impl DevicePatch {
    /// Whether the patch touches the device's identity fields (name or
    /// brand) — the fields frozen while the device is in use.
    #[must_use]
    pub fn renames_or_rebrands(&self) -> bool {
        self.name.is_some() || self.brand.is_some()
    }

    /// Whether the patch carries no changes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.brand.is_none() && self.state.is_none()
    }
}

/// Step-by-step builder for [`Device`].
///
/// Assigns a fresh identifier and the current instant unless overridden.
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    brand: Option<String>,
    state: Option<DeviceState>,
    created_at: Option<Timestamp>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: DeviceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: DeviceState) -> Self {
        self.state = Some(state);
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `name` or `brand` is missing, empty,
    /// or too long.
    pub fn build(self) -> Result<Device, ValidationError> {
        let device = Device {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            brand: self.brand.unwrap_or_default(),
            state: self.state.unwrap_or(DeviceState::Available),
            created_at: self.created_at.unwrap_or_else(crate::time::now),
        };
        device.validate()?;
        Ok(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_device() -> Device {
        Device::builder()
            .name("Pixel 8")
            .brand("acme")
            .state(DeviceState::Available)
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_device_when_name_and_brand_provided() {
        let device = valid_device();
        assert_eq!(device.name, "Pixel 8");
        assert_eq!(device.brand, "acme");
        assert_eq!(device.state, DeviceState::Available);
    }

    #[test]
    fn should_default_state_to_available() {
        let device = Device::builder().name("a").brand("b").build().unwrap();
        assert_eq!(device.state, DeviceState::Available);
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Device::builder().brand("acme").build();
        assert!(matches!(result, Err(ValidationError::EmptyName)));
    }

    #[test]
    fn should_return_validation_error_when_brand_is_empty() {
        let result = Device::builder().name("Pixel 8").build();
        assert!(matches!(result, Err(ValidationError::EmptyBrand)));
    }

    #[test]
    fn should_return_validation_error_when_name_too_long() {
        let result = Device::builder()
            .name("x".repeat(MAX_FIELD_LEN + 1))
            .brand("acme")
            .build();
        assert!(matches!(result, Err(ValidationError::NameTooLong)));
    }

    #[test]
    fn should_return_validation_error_when_brand_too_long() {
        let result = Device::builder()
            .name("Pixel 8")
            .brand("x".repeat(MAX_FIELD_LEN + 1))
            .build();
        assert!(matches!(result, Err(ValidationError::BrandTooLong)));
    }

    #[test]
    fn should_accept_fields_at_max_length() {
        let result = Device::builder()
            .name("x".repeat(MAX_FIELD_LEN))
            .brand("y".repeat(MAX_FIELD_LEN))
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn should_parse_all_states_from_str() {
        assert_eq!(
            "available".parse::<DeviceState>().unwrap(),
            DeviceState::Available
        );
        assert_eq!("in_use".parse::<DeviceState>().unwrap(), DeviceState::InUse);
        assert_eq!(
            "inactive".parse::<DeviceState>().unwrap(),
            DeviceState::Inactive
        );
    }

    #[test]
    fn should_reject_unknown_state() {
        let result = "broken".parse::<DeviceState>();
        assert_eq!(result, Err(ValidationError::UnknownState("broken".into())));
    }

    #[test]
    fn should_serialize_state_as_snake_case() {
        let json = serde_json::to_string(&DeviceState::InUse).unwrap();
        assert_eq!(json, "\"in_use\"");
    }

    #[test]
    fn should_roundtrip_device_through_serde_json() {
        let device = valid_device();
        let json = serde_json::to_string(&device).unwrap();
        let parsed: Device = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, device);
    }

    #[test]
    fn should_apply_only_present_fields_when_patching() {
        let mut device = valid_device();
        let created_at = device.created_at;
        device.apply(DevicePatch {
            name: Some("Pixel 9".to_string()),
            brand: None,
            state: None,
        });
        assert_eq!(device.name, "Pixel 9");
        assert_eq!(device.brand, "acme");
        assert_eq!(device.state, DeviceState::Available);
        assert_eq!(device.created_at, created_at);
    }

    #[test]
    fn should_apply_state_only_patch() {
        let mut device = valid_device();
        device.apply(DevicePatch {
            state: Some(DeviceState::InUse),
            ..DevicePatch::default()
        });
        assert_eq!(device.state, DeviceState::InUse);
        assert_eq!(device.name, "Pixel 8");
    }

    #[test]
    fn should_detect_identity_changes_in_patch() {
        let rename = DevicePatch {
            name: Some("new".to_string()),
            ..DevicePatch::default()
        };
        let rebrand = DevicePatch {
            brand: Some("new".to_string()),
            ..DevicePatch::default()
        };
        let state_only = DevicePatch {
            state: Some(DeviceState::Available),
            ..DevicePatch::default()
        };
        assert!(rename.renames_or_rebrands());
        assert!(rebrand.renames_or_rebrands());
        assert!(!state_only.renames_or_rebrands());
        assert!(!DevicePatch::default().renames_or_rebrands());
        assert!(DevicePatch::default().is_empty());
    }

    #[test]
    fn should_report_in_use_only_for_in_use_state() {
        let mut device = valid_device();
        assert!(!device.is_in_use());
        device.state = DeviceState::InUse;
        assert!(device.is_in_use());
        device.state = DeviceState::Inactive;
        assert!(!device.is_in_use());
    }
}
