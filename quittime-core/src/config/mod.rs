//! Configuration types
//!
//! [`Settings`] belong to the host and are shared by every face;
//! [`FaceConfig`] and [`TimezoneTable`] are injected into this face at
//! construction and never change afterwards.

pub mod face;
pub mod settings;
pub mod timezone;

pub use face::{ConfigError, FaceConfig};
pub use settings::Settings;
pub use timezone::TimezoneTable;
