//! Intel integrated graphics identification
//!
//! - [`models`]: device ID to display name
//! - [`family`]: device ID to hardware generation
//! - [`tables`]: per-generation property data
//! - [`select`]: platform-id row selection within a generation

pub mod family;
pub mod models;
pub mod select;
pub mod tables;

#[cfg(test)]
mod tests;

pub use family::{is_mobile_device, IntelFamily};
pub use models::{find_model, gma_model_name, is_known_device, GpuModel, KNOWN_GPUS, UNSUPPORTED_NAME};
pub use select::{select_platform_row, PanelProfile, RowQuery, Selection};
