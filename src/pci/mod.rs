//! PCI identity of the graphics function
//!
//! Only what property injection needs: the location used to key the
//! injected properties and the IDs read by the caller during enumeration.

use core::fmt;

/// Intel Corporation PCI vendor ID
pub const INTEL_VENDOR_ID: u16 = 0x8086;
/// Apple Inc. PCI vendor ID, injected as subsystem vendor
pub const APPLE_VENDOR_ID: u16 = 0x106B;

/// Display controller base class
pub const PCI_CLASS_DISPLAY: u8 = 0x03;
/// VGA compatible controller subclass
pub const PCI_SUBCLASS_VGA: u8 = 0x00;

/// Bus/device/function of the integrated graphics on every supported chipset
pub const IGPU_LOCATION: PciLocation = PciLocation { bus: 0, device: 2, function: 0 };

/// PCI bus location
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PciLocation {
    pub bus: u8,
    pub device: u8,
    pub function: u8,
}

impl PciLocation {
    pub const fn new(bus: u8, device: u8, function: u8) -> Self {
        Self { bus, device, function }
    }

    /// UEFI text device path of a root-bus function
    pub fn device_path(&self) -> DevicePathText {
        DevicePathText(*self)
    }
}

impl fmt::Display for PciLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02x}:{:02x}.{}", self.bus, self.device, self.function)
    }
}

/// Formats a [`PciLocation`] as `PciRoot(0x0)/Pci(0x2,0x0)`
#[derive(Debug, Clone, Copy)]
pub struct DevicePathText(PciLocation);

impl fmt::Display for DevicePathText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "PciRoot(0x{:x})/Pci(0x{:x},0x{:x})",
            self.0.bus, self.0.device, self.0.function
        )
    }
}

/// PCI function as read by the caller's enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PciDevice {
    pub location: PciLocation,
    pub vendor_id: u16,
    pub device_id: u16,
    pub class_code: u8,
    pub subclass: u8,
    pub revision_id: u8,
    pub subsystem_vendor_id: u16,
    pub subsystem_id: u16,
}

impl PciDevice {
    /// Create a new PCI device with default values
    pub fn new(bus: u8, device: u8, function: u8) -> Self {
        Self {
            location: PciLocation::new(bus, device, function),
            vendor_id: 0,
            device_id: 0,
            class_code: 0,
            subclass: 0,
            revision_id: 0,
            subsystem_vendor_id: 0,
            subsystem_id: 0,
        }
    }

    /// Intel VGA controller at 00:02.0
    pub fn intel_igpu(device_id: u16) -> Self {
        Self {
            location: IGPU_LOCATION,
            vendor_id: INTEL_VENDOR_ID,
            device_id,
            class_code: PCI_CLASS_DISPLAY,
            subclass: PCI_SUBCLASS_VGA,
            revision_id: 0,
            subsystem_vendor_id: INTEL_VENDOR_ID,
            subsystem_id: 0,
        }
    }

    pub fn with_ids(mut self, vendor_id: u16, device_id: u16) -> Self {
        self.vendor_id = vendor_id;
        self.device_id = device_id;
        self
    }

    pub fn with_class(mut self, class_code: u8, subclass: u8) -> Self {
        self.class_code = class_code;
        self.subclass = subclass;
        self
    }

    pub fn with_subsystem(mut self, vendor_id: u16, subsystem_id: u16) -> Self {
        self.subsystem_vendor_id = vendor_id;
        self.subsystem_id = subsystem_id;
        self
    }

    pub fn is_intel(&self) -> bool {
        self.vendor_id == INTEL_VENDOR_ID
    }

    pub fn is_display(&self) -> bool {
        self.class_code == PCI_CLASS_DISPLAY
    }
}

impl fmt::Display for PciDevice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} [{:04x}:{:04x}] subsys [{:04x}:{:04x}]",
            self.location, self.vendor_id, self.device_id, self.subsystem_vendor_id, self.subsystem_id
        )
    }
}
