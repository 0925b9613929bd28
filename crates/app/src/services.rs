//! Application services — the use-case layer.

pub mod device_service;

pub use device_service::DeviceService;
