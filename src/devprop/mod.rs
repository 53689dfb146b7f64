//! Device properties
//!
//! A device property is a `(name, bytes)` pair attached to a PCI function
//! and handed to the operating system by the loader. This module holds the
//! value types shared by the generation tables and the assembler, the
//! bounded list the assembler fills, and the [`PropertyWriter`] seam to the
//! loader's device-property store.

pub mod assembler;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::error::{GmaError, Result, WriterError};
use crate::pci::{PciDevice, PciLocation};

/// Upper bound on properties assembled for a single device
pub const MAX_PROPERTIES: usize = 48;

/// Ordered, bounded list of properties for one device
pub type PropertyList = heapless::Vec<DeviceProperty, MAX_PROPERTIES>;

/// Raw 32-bit property value, little-endian on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropValue(pub [u8; 4]);

impl PropValue {
    pub const fn from_u32(value: u32) -> Self {
        Self(value.to_le_bytes())
    }

    pub const fn as_u32(&self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    pub const fn bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Upper half of a platform id, the device ID the row was built for
    pub const fn device_fragment(&self) -> u16 {
        (self.as_u32() >> 16) as u16
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.as_u32())
    }
}

/// Value side of a device property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyValue {
    Dword(PropValue),
    Bytes(&'static [u8]),
    /// Encoded with a trailing NUL
    Str(&'static str),
}

impl PropertyValue {
    pub fn encoded_len(&self) -> usize {
        match self {
            PropertyValue::Dword(_) => 4,
            PropertyValue::Bytes(bytes) => bytes.len(),
            PropertyValue::Str(s) => s.len() + 1,
        }
    }

    /// Bytes handed to the property writer
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        match self {
            PropertyValue::Dword(value) => out.extend_from_slice(value.bytes()),
            PropertyValue::Bytes(bytes) => out.extend_from_slice(bytes),
            PropertyValue::Str(s) => {
                out.extend_from_slice(s.as_bytes());
                out.push(0);
            }
        }
        out
    }

    pub fn as_dword(&self) -> Option<PropValue> {
        match self {
            PropertyValue::Dword(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Dword(value) => write!(f, "{}", value),
            PropertyValue::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
            PropertyValue::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Named device property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProperty {
    pub name: &'static str,
    pub value: PropertyValue,
}

impl DeviceProperty {
    pub const fn dword(name: &'static str, bytes: [u8; 4]) -> Self {
        Self { name, value: PropertyValue::Dword(PropValue(bytes)) }
    }

    pub const fn bytes(name: &'static str, bytes: &'static [u8]) -> Self {
        Self { name, value: PropertyValue::Bytes(bytes) }
    }

    pub const fn string(name: &'static str, s: &'static str) -> Self {
        Self { name, value: PropertyValue::Str(s) }
    }
}

impl fmt::Display for DeviceProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// Append to a bounded list, naming the property that did not fit
pub(crate) fn push_property(list: &mut PropertyList, property: DeviceProperty) -> Result<()> {
    list.push(property).map_err(|p| GmaError::PropertyListFull(p.name))
}

/// Loader-side store receiving properties for a PCI function
pub trait PropertyWriter {
    fn add_property(
        &mut self,
        device: &PciDevice,
        name: &str,
        value: &[u8],
    ) -> core::result::Result<(), WriterError>;
}

/// Property accepted by a [`PropertyRecorder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedProperty {
    pub location: PciLocation,
    pub name: String,
    pub value: Vec<u8>,
}

/// In-memory [`PropertyWriter`]
///
/// Keeps every property in write order. An optional limit makes it fail
/// with [`WriterError::OutOfResources`] once full, like a fixed-size
/// firmware buffer would.
#[derive(Debug, Default)]
pub struct PropertyRecorder {
    entries: Vec<RecordedProperty>,
    limit: Option<usize>,
}

impl PropertyRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self { entries: Vec::new(), limit: Some(limit) }
    }

    pub fn entries(&self) -> &[RecordedProperty] {
        &self.entries
    }

    /// Value of the first property written under `name`
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.value.as_slice())
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl PropertyWriter for PropertyRecorder {
    fn add_property(
        &mut self,
        device: &PciDevice,
        name: &str,
        value: &[u8],
    ) -> core::result::Result<(), WriterError> {
        if let Some(limit) = self.limit {
            if self.entries.len() >= limit {
                return Err(WriterError::OutOfResources);
            }
        }

        self.entries.push(RecordedProperty {
            location: device.location,
            name: name.to_string(),
            value: value.to_vec(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_prop_value_is_little_endian() {
        let value = PropValue([0x03, 0x00, 0x66, 0x01]);
        assert_eq!(value.as_u32(), 0x0166_0003);
        assert_eq!(value.device_fragment(), 0x0166);
        assert_eq!(PropValue::from_u32(0x0166_0003), value);
        assert_eq!(format!("{}", value), "0x01660003");
    }

    #[test]
    fn test_string_values_are_nul_terminated() {
        let value = PropertyValue::Str("display");
        assert_eq!(value.encoded_len(), 8);
        assert_eq!(value.encode(), b"display\0".to_vec());
    }

    #[test]
    fn test_bytes_encode_verbatim() {
        static BLOB: [u8; 3] = [0x30, 0x49, 0x01];
        let value = PropertyValue::Bytes(&BLOB);
        assert_eq!(value.encode(), BLOB.to_vec());
        assert_eq!(value.as_dword(), None);
    }

    #[test]
    fn test_list_full_names_property() {
        let mut list = PropertyList::new();
        for _ in 0..MAX_PROPERTIES {
            push_property(&mut list, DeviceProperty::dword("filler", [0; 4])).unwrap();
        }
        let err = push_property(&mut list, DeviceProperty::string("model", "x")).unwrap_err();
        assert_eq!(err, GmaError::PropertyListFull("model"));
    }

    #[test]
    fn test_recorder_limit() {
        let dev = PciDevice::intel_igpu(0x0166);
        let mut recorder = PropertyRecorder::with_limit(1);
        assert!(recorder.add_property(&dev, "a", &[1]).is_ok());
        assert_eq!(recorder.add_property(&dev, "b", &[2]), Err(WriterError::OutOfResources));
        assert_eq!(recorder.names(), ["a"]);
        assert_eq!(recorder.get("a"), Some(&[1u8][..]));
    }
}
