//! Generation property tables
//!
//! Platform-id rows and named property values per Intel graphics
//! generation, plus the fixed `AAPL,os-info` / `AAPL,tbl-info` blobs
//! captured from shipping Apple machines. All data is immutable; each
//! array's declared length is part of its type.

use crate::devprop::{DeviceProperty, PropValue};
use crate::gpu::family::IntelFamily;

/// One selectable framebuffer personality of a generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformRow {
    pub value: PropValue,
    pub mobile: bool,
    pub pipes: u8,
    pub ports: u8,
    pub stolen_mb: u16,
    pub fbmem_mb: u16,
    pub vram_mb: u16,
    /// Apple models shipping with this personality
    pub macs: &'static [&'static str],
}

impl PlatformRow {
    /// Row with its memory layout in MB and no known Apple models
    pub const fn new(
        value: [u8; 4],
        mobile: bool,
        pipes: u8,
        ports: u8,
        stolen_mb: u16,
        fbmem_mb: u16,
        vram_mb: u16,
    ) -> Self {
        Self {
            value: PropValue(value),
            mobile,
            pipes,
            ports,
            stolen_mb,
            fbmem_mb,
            vram_mb,
            macs: &[],
        }
    }

    /// Sandy Bridge rows carry no memory layout
    pub const fn snb(value: [u8; 4], mobile: bool, pipes: u8, ports: u8) -> Self {
        Self::new(value, mobile, pipes, ports, 0, 0, 0)
    }

    /// Attach the Apple models shipping with this personality
    pub const fn used_by(self, macs: &'static [&'static str]) -> Self {
        Self { macs, ..self }
    }

    /// Device ID encoded in the upper half of the platform id
    pub fn device_fragment(&self) -> u16 {
        self.value.device_fragment()
    }

    pub fn is_used_by(&self, product_name: &str) -> bool {
        self.macs.iter().any(|mac| *mac == product_name)
    }
}

pub const REG_FALSE: PropValue = PropValue([0x00, 0x00, 0x00, 0x00]);
pub const REG_TRUE: PropValue = PropValue([0x01, 0x00, 0x00, 0x00]);
/// Apple's PCI vendor ID
pub const SUBSYSTEM_VENDOR_ID: PropValue = PropValue([0x6b, 0x10, 0x00, 0x00]);

pub static COMMON_VALS: [PropValue; 3] = [REG_FALSE, REG_TRUE, SUBSYSTEM_VENDOR_ID];

/// Value of `class-code`: display controller, VGA
pub static CLASS_FIX: [u8; 4] = [0x00, 0x00, 0x03, 0x00];

/// GMA 950 laptop panel (also Lakeport desktop parts)
pub static CALISTOGA_GMA_VALS: [DeviceProperty; 30] = [
    DeviceProperty::dword("AAPL,HasLid", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL,HasPanel", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL,NumDisplays", [0x04, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL,NumFramebuffers", [0x02, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,BacklightIntensity", [0x3f, 0x00, 0x00, 0x08]),
    DeviceProperty::dword("AAPL01,BootDisplay", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,CurrentDisplay", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,DataJustify", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,Depth", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,Dither", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,Height", [0x20, 0x03, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,Interlace", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,Inverter", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,InverterCurrent", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,InverterFrequency", [0xc8, 0x52, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,IODisplayMode", [0x00, 0x10, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,LinkFormat", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,LinkType", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,Pipe", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,PixelFormat", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,Refresh", [0x3b, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,Stretch", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,T1", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,T2", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,T3", [0xc8, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,T4", [0xc8, 0x01, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,T5", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,T6", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,T7", [0x90, 0x01, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,Width", [0x00, 0x05, 0x00, 0x00]),
];

/// GMA X3100 laptop panel
pub static CRESTLINE_GMA_VALS: [DeviceProperty; 34] = [
    DeviceProperty::dword("AAPL,HasLid", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL,HasPanel", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL,NumDisplays", [0x04, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL,NumFramebuffers", [0x02, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL,SelfRefreshSupported", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL,aux-power-connected", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL,backlight-control", [0x01, 0x00, 0x00, 0x08]),
    DeviceProperty::dword("AAPL00,blackscreen-preferences", [0x00, 0x00, 0x00, 0x08]),
    DeviceProperty::dword("AAPL01,BootDisplay", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,BacklightIntensity", [0x38, 0x00, 0x00, 0x08]),
    DeviceProperty::dword("AAPL01,blackscreen-preferences", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,CurrentDisplay", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,DataJustify", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,Depth", [0x20, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,Dither", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,Height", [0x20, 0x03, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,Interlace", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,Inverter", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,InverterCurrent", [0x08, 0x52, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,InverterFrequency", [0xaa, 0x01, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,LinkFormat", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,LinkType", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,Pipe", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,PixelFormat", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,Refresh", [0x3d, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,Stretch", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,T1", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,T2", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,T3", [0xc8, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,T4", [0xc8, 0x01, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,T5", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,T6", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,T7", [0x90, 0x01, 0x00, 0x00]),
    DeviceProperty::dword("AAPL01,Width", [0x00, 0x05, 0x00, 0x00]),
];

/// First generation HD Graphics (Arrandale)
///
/// Desktop parts only get the final `VRAM,totalsize` row.
pub static IRONLAKE_HD_VALS: [DeviceProperty; 10] = [
    DeviceProperty::dword("AAPL,aux-power-connected", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL,backlight-control", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,T1", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,T2", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,T3", [0xc8, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,T4", [0xc8, 0x01, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,T5", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,T6", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,T7", [0x90, 0x01, 0x00, 0x00]),
    DeviceProperty::dword("VRAM,totalsize", [0x00, 0x00, 0x00, 0x12]),
];

/// `AAPL,snb-platform-id` personalities; byte 2 is the SNB index
pub static SANDY_BRIDGE_SNB_VALS: [PlatformRow; 7] = [
    PlatformRow::snb([0x00, 0x00, 0x01, 0x00], true, 2, 4).used_by(&["MacBookPro8,1", "MacBookPro8,2", "MacBookPro8,3"]),
    PlatformRow::snb([0x00, 0x00, 0x02, 0x00], true, 2, 1),
    PlatformRow::snb([0x10, 0x00, 0x03, 0x00], false, 2, 3).used_by(&["Macmini5,1", "Macmini5,3"]),
    PlatformRow::snb([0x20, 0x00, 0x03, 0x00], false, 2, 3).used_by(&["Macmini5,1", "Macmini5,3"]),
    PlatformRow::snb([0x30, 0x00, 0x03, 0x00], false, 0, 0).used_by(&["Macmini5,2"]),
    PlatformRow::snb([0x00, 0x00, 0x04, 0x00], true, 2, 3).used_by(&["MacBookAir4,1", "MacBookAir4,2"]),
    PlatformRow::snb([0x00, 0x00, 0x05, 0x00], false, 0, 0).used_by(&["iMac12,1", "iMac12,2"]),
];

/// Laptop panel timings followed by `graphic-options`
pub static SANDY_BRIDGE_HD_VALS: [DeviceProperty; 13] = [
    DeviceProperty::dword("AAPL00,DataJustify", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,Dither", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,LinkFormat", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,LinkType", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,PixelFormat", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,T1", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,T2", [0x14, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,T3", [0xfa, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,T4", [0x2c, 0x01, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,T5", [0x00, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,T6", [0x14, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,T7", [0xf4, 0x01, 0x00, 0x00]),
    DeviceProperty::dword("graphic-options", [0x04, 0x00, 0x00, 0x00]),
];

pub static IVY_BRIDGE_IG_VALS: [PlatformRow; 12] = [
    PlatformRow::new([0x05, 0x00, 0x62, 0x01], false, 2, 3, 32, 16, 1536),
    PlatformRow::new([0x06, 0x00, 0x62, 0x01], false, 0, 0, 0, 0, 256).used_by(&["iMac13,1"]),
    PlatformRow::new([0x07, 0x00, 0x62, 0x01], false, 0, 0, 0, 0, 256).used_by(&["iMac13,2"]),
    PlatformRow::new([0x00, 0x00, 0x66, 0x01], false, 3, 4, 96, 24, 1024),
    PlatformRow::new([0x01, 0x00, 0x66, 0x01], true, 3, 4, 96, 24, 1536).used_by(&["MacBookPro10,2"]),
    PlatformRow::new([0x02, 0x00, 0x66, 0x01], true, 3, 1, 64, 24, 1536).used_by(&["MacBookPro10,1"]),
    PlatformRow::new([0x03, 0x00, 0x66, 0x01], true, 2, 4, 64, 16, 1536).used_by(&["MacBookPro9,2"]),
    PlatformRow::new([0x04, 0x00, 0x66, 0x01], true, 3, 1, 32, 16, 1536).used_by(&["MacBookPro9,1"]),
    PlatformRow::new([0x08, 0x00, 0x66, 0x01], true, 3, 3, 64, 16, 1536).used_by(&["MacBookAir5,1"]),
    PlatformRow::new([0x09, 0x00, 0x66, 0x01], true, 3, 3, 64, 16, 1536).used_by(&["MacBookAir5,2"]),
    PlatformRow::new([0x0a, 0x00, 0x66, 0x01], false, 2, 3, 32, 16, 1536).used_by(&["Macmini6,1"]),
    PlatformRow::new([0x0b, 0x00, 0x66, 0x01], false, 2, 3, 32, 16, 1536).used_by(&["Macmini6,2"]),
];

pub static IVY_BRIDGE_HD_VALS: [DeviceProperty; 1] = [
    DeviceProperty::dword("graphics-options", [0x0c, 0x00, 0x00, 0x00]),
];

pub static HASWELL_IG_VALS: [PlatformRow; 24] = [
    PlatformRow::new([0x00, 0x00, 0x06, 0x04], false, 3, 3, 64, 16, 1024),
    PlatformRow::new([0x04, 0x00, 0x12, 0x04], false, 0, 0, 32, 0, 1536),
    PlatformRow::new([0x0b, 0x00, 0x12, 0x04], false, 0, 0, 32, 0, 1536).used_by(&["iMac15,1"]),
    PlatformRow::new([0x00, 0x00, 0x16, 0x04], false, 3, 3, 64, 16, 1024),
    PlatformRow::new([0x00, 0x00, 0x26, 0x04], false, 3, 3, 64, 16, 1024),
    PlatformRow::new([0x00, 0x00, 0x16, 0x0a], false, 3, 3, 64, 16, 1024),
    PlatformRow::new([0x0c, 0x00, 0x16, 0x0a], true, 3, 3, 64, 34, 1536),
    PlatformRow::new([0x00, 0x00, 0x26, 0x0a], false, 3, 3, 64, 16, 1024),
    PlatformRow::new([0x05, 0x00, 0x26, 0x0a], true, 3, 3, 32, 19, 1536),
    PlatformRow::new([0x06, 0x00, 0x26, 0x0a], true, 3, 3, 32, 19, 1536).used_by(&["MacBookAir6,1", "MacBookAir6,2", "Macmini7,1"]),
    PlatformRow::new([0x0a, 0x00, 0x26, 0x0a], false, 3, 3, 32, 19, 1536),
    PlatformRow::new([0x0d, 0x00, 0x26, 0x0a], false, 3, 2, 96, 34, 1536),
    PlatformRow::new([0x08, 0x00, 0x2e, 0x0a], true, 3, 3, 64, 34, 1536).used_by(&["MacBookPro11,1"]),
    PlatformRow::new([0x0a, 0x00, 0x2e, 0x0a], false, 3, 3, 32, 19, 1536),
    PlatformRow::new([0x0d, 0x00, 0x2e, 0x0a], false, 3, 2, 96, 34, 1536),
    PlatformRow::new([0x00, 0x00, 0x06, 0x0c], false, 3, 3, 64, 16, 1024),
    PlatformRow::new([0x00, 0x00, 0x16, 0x0c], false, 3, 3, 64, 16, 1024),
    PlatformRow::new([0x00, 0x00, 0x26, 0x0c], false, 3, 3, 64, 16, 1024),
    PlatformRow::new([0x03, 0x00, 0x22, 0x0d], false, 3, 3, 32, 19, 1536).used_by(&["iMac14,1", "iMac14,4"]),
    PlatformRow::new([0x00, 0x00, 0x26, 0x0d], false, 3, 3, 64, 16, 1024),
    PlatformRow::new([0x07, 0x00, 0x26, 0x0d], true, 3, 4, 64, 34, 1536).used_by(&["MacBookPro11,2", "MacBookPro11,3"]),
    PlatformRow::new([0x09, 0x00, 0x26, 0x0d], true, 3, 1, 64, 34, 1536),
    PlatformRow::new([0x0e, 0x00, 0x26, 0x0d], true, 3, 4, 96, 34, 1536),
    PlatformRow::new([0x0f, 0x00, 0x26, 0x0d], true, 3, 1, 96, 34, 1536),
];

pub static HASWELL_HD_VALS: [DeviceProperty; 1] = [
    DeviceProperty::dword("graphics-options", [0x0c, 0x00, 0x00, 0x00]),
];

pub static BROADWELL_IG_VALS: [PlatformRow; 22] = [
    PlatformRow::new([0x00, 0x00, 0x06, 0x16], false, 3, 3, 16, 15, 1024),
    PlatformRow::new([0x02, 0x00, 0x06, 0x16], true, 3, 3, 34, 21, 1536),
    PlatformRow::new([0x00, 0x00, 0x0e, 0x16], false, 3, 3, 16, 15, 1024),
    PlatformRow::new([0x01, 0x00, 0x0e, 0x16], true, 3, 3, 34, 21, 1536),
    PlatformRow::new([0x03, 0x00, 0x12, 0x16], true, 3, 4, 34, 21, 1536),
    PlatformRow::new([0x00, 0x00, 0x16, 0x16], false, 3, 3, 16, 15, 1024),
    PlatformRow::new([0x02, 0x00, 0x16, 0x16], true, 3, 3, 34, 21, 1536),
    PlatformRow::new([0x00, 0x00, 0x1e, 0x16], false, 3, 3, 16, 15, 1024),
    PlatformRow::new([0x01, 0x00, 0x1e, 0x16], true, 3, 3, 38, 21, 1536).used_by(&["MacBook8,1"]),
    PlatformRow::new([0x00, 0x00, 0x22, 0x16], false, 3, 3, 16, 15, 1024),
    PlatformRow::new([0x02, 0x00, 0x22, 0x16], true, 3, 3, 34, 21, 1536),
    PlatformRow::new([0x07, 0x00, 0x22, 0x16], false, 3, 3, 38, 38, 1536).used_by(&["iMac16,2"]),
    PlatformRow::new([0x00, 0x00, 0x26, 0x16], false, 3, 3, 16, 15, 1024),
    PlatformRow::new([0x02, 0x00, 0x26, 0x16], true, 3, 3, 34, 21, 1536),
    PlatformRow::new([0x04, 0x00, 0x26, 0x16], false, 3, 3, 34, 21, 1536),
    PlatformRow::new([0x05, 0x00, 0x26, 0x16], true, 3, 3, 34, 21, 1536),
    PlatformRow::new([0x06, 0x00, 0x26, 0x16], true, 3, 3, 34, 21, 1536).used_by(&["iMac16,1", "MacBookAir7,1", "MacBookAir7,2"]),
    PlatformRow::new([0x08, 0x00, 0x26, 0x16], false, 2, 2, 34, 34, 1536),
    PlatformRow::new([0x00, 0x00, 0x2b, 0x16], false, 3, 3, 16, 15, 1024),
    PlatformRow::new([0x02, 0x00, 0x2b, 0x16], true, 3, 3, 34, 21, 1536).used_by(&["MacBookPro12,1"]),
    PlatformRow::new([0x04, 0x00, 0x2b, 0x16], false, 3, 3, 34, 21, 1536),
    PlatformRow::new([0x08, 0x00, 0x2b, 0x16], false, 2, 2, 34, 34, 1536),
];

pub static BROADWELL_HD_VALS: [DeviceProperty; 2] = [
    DeviceProperty::dword("AAPL,ig-tcon-scaler", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("graphics-options", [0x0c, 0x00, 0x00, 0x00]),
];

pub static SKYLAKE_IG_VALS: [PlatformRow; 19] = [
    PlatformRow::new([0x01, 0x00, 0x02, 0x19], false, 0, 0, 0, 0, 1536),
    PlatformRow::new([0x00, 0x00, 0x12, 0x19], true, 3, 3, 34, 21, 1536),
    PlatformRow::new([0x01, 0x00, 0x12, 0x19], false, 0, 0, 0, 0, 1536).used_by(&["iMac17,1"]),
    PlatformRow::new([0x00, 0x00, 0x16, 0x19], true, 3, 3, 34, 21, 1536),
    PlatformRow::new([0x02, 0x00, 0x16, 0x19], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x01, 0x00, 0x17, 0x19], false, 0, 0, 0, 0, 1536),
    PlatformRow::new([0x00, 0x00, 0x1b, 0x19], true, 3, 3, 34, 21, 1536).used_by(&["MacBookPro13,3"]),
    PlatformRow::new([0x06, 0x00, 0x1b, 0x19], true, 1, 1, 38, 0, 1536),
    PlatformRow::new([0x00, 0x00, 0x1e, 0x19], true, 3, 3, 34, 21, 1536),
    PlatformRow::new([0x03, 0x00, 0x1e, 0x19], true, 3, 3, 40, 0, 1536).used_by(&["MacBook9,1"]),
    PlatformRow::new([0x00, 0x00, 0x26, 0x19], true, 3, 3, 34, 21, 1536),
    PlatformRow::new([0x02, 0x00, 0x26, 0x19], true, 3, 3, 57, 0, 1536).used_by(&["MacBookPro13,1"]),
    PlatformRow::new([0x04, 0x00, 0x26, 0x19], true, 3, 3, 34, 0, 1536),
    PlatformRow::new([0x07, 0x00, 0x26, 0x19], true, 3, 3, 34, 0, 1536),
    PlatformRow::new([0x00, 0x00, 0x27, 0x19], true, 3, 3, 34, 21, 1536),
    PlatformRow::new([0x04, 0x00, 0x27, 0x19], true, 3, 3, 57, 0, 1536).used_by(&["MacBookPro13,2"]),
    PlatformRow::new([0x01, 0x00, 0x32, 0x19], false, 0, 0, 0, 0, 1536),
    PlatformRow::new([0x00, 0x00, 0x3b, 0x19], true, 3, 3, 34, 21, 1536),
    PlatformRow::new([0x05, 0x00, 0x3b, 0x19], true, 3, 4, 34, 21, 1536),
];

/// Panel rows: Gfx324, GfxYTile, PanelCycleDelay, MacBook power
/// sequence, MacBookPro power sequence, `graphic-options`
pub static SKYLAKE_HD_VALS: [DeviceProperty; 12] = [
    DeviceProperty::dword("AAPL,Gfx324", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL,GfxYTile", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,PanelCycleDelay", [0xfa, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,PanelPowerDown", [0x11, 0x00, 0x00, 0x08]),
    DeviceProperty::dword("AAPL00,PanelPowerOff", [0x11, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,PanelPowerOn", [0xe2, 0x00, 0x00, 0x08]),
    DeviceProperty::dword("AAPL00,PanelPowerUp", [0x48, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,PanelPowerDown", [0x3c, 0x00, 0x00, 0x08]),
    DeviceProperty::dword("AAPL00,PanelPowerOff", [0x11, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,PanelPowerOn", [0x19, 0x01, 0x00, 0x08]),
    DeviceProperty::dword("AAPL00,PanelPowerUp", [0x30, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("graphic-options", [0x0c, 0x00, 0x00, 0x00]),
];

pub static KABYLAKE_IG_VALS: [PlatformRow; 19] = [
    PlatformRow::new([0x00, 0x00, 0x12, 0x59], false, 3, 3, 38, 0, 1536),
    PlatformRow::new([0x03, 0x00, 0x12, 0x59], true, 0, 0, 0, 0, 1536).used_by(&["iMac18,2", "iMac18,3"]),
    PlatformRow::new([0x00, 0x00, 0x16, 0x59], true, 3, 3, 34, 0, 1536),
    PlatformRow::new([0x09, 0x00, 0x16, 0x59], true, 3, 3, 38, 0, 1536),
    PlatformRow::new([0x02, 0x00, 0x18, 0x59], true, 0, 0, 0, 0, 1536),
    PlatformRow::new([0x00, 0x00, 0x1b, 0x59], true, 3, 3, 38, 21, 1536).used_by(&["MacBookPro14,3"]),
    PlatformRow::new([0x06, 0x00, 0x1b, 0x59], true, 1, 1, 38, 0, 1536),
    PlatformRow::new([0x05, 0x00, 0x1c, 0x59], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x00, 0x00, 0x1e, 0x59], true, 3, 3, 34, 0, 1536),
    PlatformRow::new([0x01, 0x00, 0x1e, 0x59], true, 3, 3, 38, 0, 1536).used_by(&["MacBook10,1"]),
    PlatformRow::new([0x00, 0x00, 0x23, 0x59], false, 3, 3, 38, 0, 1536),
    PlatformRow::new([0x00, 0x00, 0x26, 0x59], false, 3, 3, 38, 0, 1536),
    PlatformRow::new([0x02, 0x00, 0x26, 0x59], true, 3, 3, 57, 0, 1536).used_by(&["MacBookPro14,1", "iMac18,1"]),
    PlatformRow::new([0x07, 0x00, 0x26, 0x59], false, 3, 3, 57, 21, 1536),
    PlatformRow::new([0x00, 0x00, 0x27, 0x59], false, 3, 3, 38, 0, 1536),
    PlatformRow::new([0x04, 0x00, 0x27, 0x59], true, 3, 3, 57, 0, 1536).used_by(&["MacBookPro14,2"]),
    PlatformRow::new([0x09, 0x00, 0x27, 0x59], true, 3, 3, 38, 0, 1536),
    PlatformRow::new([0x00, 0x00, 0xc0, 0x87], true, 3, 3, 34, 0, 1536),
    PlatformRow::new([0x05, 0x00, 0xc0, 0x87], true, 3, 3, 57, 0, 1536).used_by(&["MacBookAir8,1"]),
];

/// Same layout as [`SKYLAKE_HD_VALS`]
pub static KABYLAKE_HD_VALS: [DeviceProperty; 12] = [
    DeviceProperty::dword("AAPL,Gfx324", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL,GfxYTile", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,PanelCycleDelay", [0xfa, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,PanelPowerDown", [0x11, 0x00, 0x00, 0x08]),
    DeviceProperty::dword("AAPL00,PanelPowerOff", [0x11, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,PanelPowerOn", [0xe2, 0x00, 0x00, 0x08]),
    DeviceProperty::dword("AAPL00,PanelPowerUp", [0x48, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,PanelPowerDown", [0x3c, 0x00, 0x00, 0x08]),
    DeviceProperty::dword("AAPL00,PanelPowerOff", [0x11, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,PanelPowerOn", [0x19, 0x01, 0x00, 0x08]),
    DeviceProperty::dword("AAPL00,PanelPowerUp", [0x30, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("graphic-options", [0x0c, 0x00, 0x00, 0x00]),
];

pub static COFFEELAKE_IG_VALS: [PlatformRow; 15] = [
    PlatformRow::new([0x00, 0x00, 0x00, 0x3e], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x03, 0x00, 0x91, 0x3e], false, 0, 0, 0, 0, 1536),
    PlatformRow::new([0x00, 0x00, 0x92, 0x3e], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x03, 0x00, 0x92, 0x3e], false, 0, 0, 0, 0, 1536),
    PlatformRow::new([0x09, 0x00, 0x92, 0x3e], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x03, 0x00, 0x98, 0x3e], false, 0, 0, 0, 0, 1536).used_by(&["iMac19,1"]),
    PlatformRow::new([0x00, 0x00, 0x9b, 0x3e], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x06, 0x00, 0x9b, 0x3e], true, 1, 1, 38, 0, 1536).used_by(&["MacBookPro15,1"]),
    PlatformRow::new([0x07, 0x00, 0x9b, 0x3e], false, 3, 3, 57, 0, 1536).used_by(&["Macmini8,1", "iMac19,2"]),
    PlatformRow::new([0x09, 0x00, 0x9b, 0x3e], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x00, 0x00, 0xa5, 0x3e], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x04, 0x00, 0xa5, 0x3e], true, 3, 3, 57, 0, 1536).used_by(&["MacBookPro15,2"]),
    PlatformRow::new([0x05, 0x00, 0xa5, 0x3e], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x09, 0x00, 0xa5, 0x3e], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x05, 0x00, 0xa6, 0x3e], true, 3, 3, 57, 0, 1536),
];

/// MacBookPro power sequence only
pub static COFFEELAKE_HD_VALS: [DeviceProperty; 8] = [
    DeviceProperty::dword("AAPL,Gfx324", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL,GfxYTile", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,PanelCycleDelay", [0xfa, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,PanelPowerDown", [0x3c, 0x00, 0x00, 0x08]),
    DeviceProperty::dword("AAPL00,PanelPowerOff", [0x11, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,PanelPowerOn", [0x19, 0x01, 0x00, 0x08]),
    DeviceProperty::dword("AAPL00,PanelPowerUp", [0x30, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("graphic-options", [0x0c, 0x00, 0x00, 0x00]),
];

pub static CANNONLAKE_IG_VALS: [PlatformRow; 14] = [
    PlatformRow::new([0x00, 0x00, 0x01, 0x0a], true, 1, 1, 34, 0, 1536),
    PlatformRow::new([0x00, 0x00, 0x40, 0x5a], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x09, 0x00, 0x40, 0x5a], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x00, 0x00, 0x41, 0x5a], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x09, 0x00, 0x41, 0x5a], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x00, 0x00, 0x49, 0x5a], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x09, 0x00, 0x49, 0x5a], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x00, 0x00, 0x50, 0x5a], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x09, 0x00, 0x50, 0x5a], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x00, 0x00, 0x51, 0x5a], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x09, 0x00, 0x51, 0x5a], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x00, 0x00, 0x52, 0x5a], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x00, 0x00, 0x59, 0x5a], true, 3, 3, 57, 0, 1536),
    PlatformRow::new([0x09, 0x00, 0x59, 0x5a], true, 3, 3, 57, 0, 1536),
];

/// Same layout as [`COFFEELAKE_HD_VALS`]
pub static CANNONLAKE_HD_VALS: [DeviceProperty; 8] = [
    DeviceProperty::dword("AAPL,Gfx324", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL,GfxYTile", [0x01, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,PanelCycleDelay", [0xfa, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,PanelPowerDown", [0x3c, 0x00, 0x00, 0x08]),
    DeviceProperty::dword("AAPL00,PanelPowerOff", [0x11, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("AAPL00,PanelPowerOn", [0x19, 0x01, 0x00, 0x08]),
    DeviceProperty::dword("AAPL00,PanelPowerUp", [0x30, 0x00, 0x00, 0x00]),
    DeviceProperty::dword("graphic-options", [0x0c, 0x00, 0x00, 0x00]),
];

// MacBookPro6,1
pub static MBP_HD_OS_INFO: [u8; 20] = [
    0x30, 0x49, 0x01, 0x11, 0x01, 0x10, 0x08, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
];

// MacBookAir4,1
pub static MBA_HD3000_TBL_INFO: [u8; 18] = [
    0x30, 0x44, 0x02, 0x02, 0x02, 0x02, 0x00, 0x00, 0x00,
    0x00, 0x02, 0x02, 0x02, 0x02, 0x01, 0x01, 0x01, 0x01,
];

pub static MBA_HD3000_OS_INFO: [u8; 20] = [
    0x30, 0x49, 0x01, 0x12, 0x12, 0x12, 0x08, 0x00, 0x00, 0x01,
    0xf0, 0x1f, 0x01, 0x00, 0x00, 0x00, 0x10, 0x07, 0x00, 0x00,
];

// MacBookPro8,1
pub static MBP_HD3000_TBL_INFO: [u8; 18] = [
    0x30, 0x44, 0x02, 0x02, 0x02, 0x02, 0x00, 0x00, 0x00,
    0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
];

pub static MBP_HD3000_OS_INFO: [u8; 20] = [
    0x30, 0x49, 0x01, 0x11, 0x11, 0x11, 0x08, 0x00, 0x00, 0x01,
    0xf0, 0x1f, 0x01, 0x00, 0x00, 0x00, 0x10, 0x07, 0x00, 0x00,
];

// Macmini5,1
pub static MN_HD3000_TBL_INFO: [u8; 18] = [
    0x30, 0x44, 0x02, 0x02, 0x02, 0x02, 0x00, 0x00, 0x00,
    0x00, 0x02, 0x02, 0x02, 0x02, 0x00, 0x00, 0x00, 0x00,
];

pub static MN_HD3000_OS_INFO: [u8; 20] = [
    0x30, 0x49, 0x01, 0x50, 0x50, 0x50, 0x08, 0x00, 0x00, 0x01,
    0xf0, 0x1f, 0x01, 0x00, 0x00, 0x00, 0x10, 0x07, 0x00, 0x00,
];

/// `AAPL,tbl-info` / `AAPL,os-info` pair for a Sandy Bridge personality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hd3000Info {
    pub tbl_info: &'static [u8; 18],
    pub os_info: &'static [u8; 20],
}

pub static MBP_HD3000_INFO: Hd3000Info = Hd3000Info {
    tbl_info: &MBP_HD3000_TBL_INFO,
    os_info: &MBP_HD3000_OS_INFO,
};

pub static MBA_HD3000_INFO: Hd3000Info = Hd3000Info {
    tbl_info: &MBA_HD3000_TBL_INFO,
    os_info: &MBA_HD3000_OS_INFO,
};

pub static MN_HD3000_INFO: Hd3000Info = Hd3000Info {
    tbl_info: &MN_HD3000_TBL_INFO,
    os_info: &MN_HD3000_OS_INFO,
};

/// Blob pair matching an `AAPL,snb-platform-id`
pub fn hd3000_info(snb_platform_id: u32) -> Option<&'static Hd3000Info> {
    match snb_platform_id {
        0x0001_0000 | 0x0002_0000 => Some(&MBP_HD3000_INFO),
        0x0004_0000 => Some(&MBA_HD3000_INFO),
        0x0003_0010 | 0x0003_0020 | 0x0003_0030 | 0x0005_0000 => Some(&MN_HD3000_INFO),
        _ => None,
    }
}

/// Platform-id rows of a generation, if it has any
pub fn platform_rows(family: IntelFamily) -> Option<&'static [PlatformRow]> {
    match family {
        IntelFamily::SandyBridge => Some(&SANDY_BRIDGE_SNB_VALS),
        IntelFamily::IvyBridge => Some(&IVY_BRIDGE_IG_VALS),
        IntelFamily::Haswell => Some(&HASWELL_IG_VALS),
        IntelFamily::Broadwell => Some(&BROADWELL_IG_VALS),
        IntelFamily::Skylake => Some(&SKYLAKE_IG_VALS),
        IntelFamily::KabyLake => Some(&KABYLAKE_IG_VALS),
        IntelFamily::CoffeeLake => Some(&COFFEELAKE_IG_VALS),
        IntelFamily::Cannonlake => Some(&CANNONLAKE_IG_VALS),
        _ => None,
    }
}

/// Named property table of a generation
pub fn named_values(family: IntelFamily) -> Option<&'static [DeviceProperty]> {
    match family {
        IntelFamily::Lakeport | IntelFamily::Calistoga => Some(&CALISTOGA_GMA_VALS),
        IntelFamily::Crestline => Some(&CRESTLINE_GMA_VALS),
        IntelFamily::Ironlake => Some(&IRONLAKE_HD_VALS),
        IntelFamily::SandyBridge => Some(&SANDY_BRIDGE_HD_VALS),
        IntelFamily::IvyBridge => Some(&IVY_BRIDGE_HD_VALS),
        IntelFamily::Haswell => Some(&HASWELL_HD_VALS),
        IntelFamily::Broadwell => Some(&BROADWELL_HD_VALS),
        IntelFamily::Skylake => Some(&SKYLAKE_HD_VALS),
        IntelFamily::KabyLake => Some(&KABYLAKE_HD_VALS),
        IntelFamily::CoffeeLake => Some(&COFFEELAKE_HD_VALS),
        IntelFamily::Cannonlake => Some(&CANNONLAKE_HD_VALS),
        _ => None,
    }
}

/// Panel rows of a Skylake-or-later `*_HD_VALS` table, split by purpose
#[derive(Debug, Clone, Copy)]
pub struct PanelRows {
    pub gfx324: &'static DeviceProperty,
    pub y_tile: &'static DeviceProperty,
    pub cycle_delay: &'static DeviceProperty,
    pub macbook_power: Option<&'static [DeviceProperty]>,
    pub macbook_pro_power: &'static [DeviceProperty],
    pub graphic_options: &'static DeviceProperty,
}

pub fn panel_rows(family: IntelFamily) -> Option<PanelRows> {
    let (table, macbook): (&'static [DeviceProperty], bool) = match family {
        IntelFamily::Skylake => (&SKYLAKE_HD_VALS[..], true),
        IntelFamily::KabyLake => (&KABYLAKE_HD_VALS[..], true),
        IntelFamily::CoffeeLake => (&COFFEELAKE_HD_VALS[..], false),
        IntelFamily::Cannonlake => (&CANNONLAKE_HD_VALS[..], false),
        _ => return None,
    };

    let pro_start = if macbook { 7 } else { 3 };
    Some(PanelRows {
        gfx324: &table[0],
        y_tile: &table[1],
        cycle_delay: &table[2],
        macbook_power: if macbook { Some(&table[3..7]) } else { None },
        macbook_pro_power: &table[pro_start..pro_start + 4],
        graphic_options: &table[table.len() - 1],
    })
}
