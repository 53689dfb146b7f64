//! Intel integrated graphics identification and device-property injection
//!
//! Resolves Intel GMA / HD / Iris / UHD graphics by PCI device ID, classifies
//! the device into its hardware family and assembles the vendor-specific
//! device properties a pre-boot loader hands to the operating system so that
//! the native graphics driver binds correctly.
//!
//! The crate is a leaf: it never reads PCI configuration space and never
//! serializes the property list. Callers provide a [`pci::PciDevice`] and a
//! [`devprop::PropertyWriter`] implementation.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
pub mod logging;

pub mod config;
pub mod devprop;
pub mod error;
pub mod gpu;
pub mod pci;

pub use config::{GmaConfig, GmaFeatures};
pub use devprop::assembler::{assemble, inject, GmaProperties};
pub use devprop::{DeviceProperty, PropValue, PropertyList, PropertyRecorder, PropertyValue, PropertyWriter};
pub use error::{GmaError, Result, WriterError};
pub use gpu::family::IntelFamily;
pub use gpu::models::{gma_model_name, GpuModel, KNOWN_GPUS, UNSUPPORTED_NAME};
pub use pci::PciDevice;
