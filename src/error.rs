// Graphics property injection errors
// Only "device not recognized" is expected during boot, and it is not an error here

use alloc::string::String;
use core::fmt;

use crate::gpu::family::IntelFamily;

/// Result type for GMA operations
pub type Result<T> = core::result::Result<T, GmaError>;

/// Property injection errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GmaError {
    /// Device vendor is not Intel
    NotIntel(u16),
    /// Device is not a display controller (base class code)
    NotDisplay(u8),
    /// Bounded property list has no room for the named property
    PropertyListFull(&'static str),
    /// A table-backed generation is missing one of its tables
    MissingTable(IntelFamily),
    /// Malformed configuration option
    InvalidConfig(String),
    /// The device-property writer refused a property
    Writer(WriterError),
}

/// Failures reported by a [`crate::devprop::PropertyWriter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterError {
    /// Writer ran out of buffer or pool space
    OutOfResources,
    /// Writer rejected the named property
    Rejected(&'static str),
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Warning,
    Error,
}

impl GmaError {
    /// Caller-facing severity. Wrong-device errors mean "skip this device".
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GmaError::NotIntel(_) | GmaError::NotDisplay(_) => ErrorSeverity::Warning,
            GmaError::PropertyListFull(_)
            | GmaError::MissingTable(_)
            | GmaError::InvalidConfig(_)
            | GmaError::Writer(_) => {
                ErrorSeverity::Error
            }
        }
    }
}

impl From<WriterError> for GmaError {
    fn from(error: WriterError) -> Self {
        GmaError::Writer(error)
    }
}

impl fmt::Display for GmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GmaError::NotIntel(vendor) => write!(f, "not an Intel device (vendor 0x{:04x})", vendor),
            GmaError::NotDisplay(class) => write!(f, "not a display controller (class 0x{:02x})", class),
            GmaError::PropertyListFull(name) => write!(f, "property list full while adding {}", name),
            GmaError::MissingTable(family) => write!(f, "no property table for {}", family),
            GmaError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            GmaError::Writer(e) => write!(f, "property writer error: {}", e),
        }
    }
}

impl fmt::Display for WriterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriterError::OutOfResources => write!(f, "out of resources"),
            WriterError::Rejected(name) => write!(f, "rejected {}", name),
        }
    }
}
