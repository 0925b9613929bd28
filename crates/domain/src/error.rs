//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`DepotError`]
//! via `#[from]`. Storage adapters wrap their failures into the opaque
//! [`DepotError::Storage`] variant; nothing is retried or swallowed on the
//! way up.

/// Field-level invariant violations on a device record.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Device name must not be empty.
    #[error("device name must not be empty")]
    EmptyName,

    /// Device brand must not be empty.
    #[error("device brand must not be empty")]
    EmptyBrand,

    /// Device name exceeds the maximum length.
    #[error("device name must be at most {max} characters", max = crate::device::MAX_FIELD_LEN)]
    NameTooLong,

    /// Device brand exceeds the maximum length.
    #[error("device brand must be at most {max} characters", max = crate::device::MAX_FIELD_LEN)]
    BrandTooLong,

    /// The given state is not one of the enumerated lifecycle states.
    #[error("unknown device state: {0}")]
    UnknownState(String),
}

/// A requested record does not exist.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    /// Kind of record looked up (e.g. `"Device"`).
    pub entity: &'static str,
    /// Identifier that had no matching record.
    pub id: String,
}

/// A mutation was rejected because the device is currently `in_use`.
///
/// Renaming, rebranding, and deletion are blocked while a device is in use;
/// state-only updates are always allowed.
#[derive(Debug, thiserror::Error)]
#[error("device {id} is in use and cannot be modified or deleted")]
pub struct DeviceInUseError {
    /// Identifier of the protected device.
    pub id: String,
}

/// Top-level error for all depot operations.
#[derive(Debug, thiserror::Error)]
pub enum DepotError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The device is in use and protected from the attempted mutation.
    #[error("device in use")]
    DeviceInUse(#[from] DeviceInUseError),

    /// The storage layer failed for reasons outside domain rules.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Device",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Device with id abc not found");
    }

    #[test]
    fn should_convert_validation_error_into_depot_error() {
        let err: DepotError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            DepotError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_convert_in_use_error_into_depot_error() {
        let err: DepotError = DeviceInUseError {
            id: "abc".to_string(),
        }
        .into();
        assert!(matches!(err, DepotError::DeviceInUse(_)));
    }
}
