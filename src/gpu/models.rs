//! Intel graphics model names
//!
//! Device ID to marketing name table for every Intel integrated graphics
//! part the loader knows about, and the name resolver built on top of it.

use alloc::collections::BTreeMap;
use lazy_static::lazy_static;

/// Name reported for device IDs missing from [`KNOWN_GPUS`]
pub const UNSUPPORTED_NAME: &str = "Intel Unsupported";

/// Sentinel device ID paired with [`UNSUPPORTED_NAME`]
pub const UNSUPPORTED_DEVICE_ID: u16 = 0xFFFF;

/// Intel graphics identity record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpuModel {
    pub device_id: u16,
    pub name: &'static str,
}

/// Known Intel integrated graphics, grouped by platform
pub static KNOWN_GPUS: &[GpuModel] = &[
    GpuModel { device_id: 0xFFFF, name: "Intel Unsupported" },

    // Lakeport
    GpuModel { device_id: 0x2772, name: "Intel GMA 950" },
    GpuModel { device_id: 0x2776, name: "Intel GMA 950" },

    // Calistoga
    GpuModel { device_id: 0x27A2, name: "Intel GMA 950" },
    GpuModel { device_id: 0x27A6, name: "Intel GMA 950" },
    GpuModel { device_id: 0x27AE, name: "Intel GMA 950" },

    // Crestline
    GpuModel { device_id: 0x2A02, name: "Intel GMA X3100" },
    GpuModel { device_id: 0x2A03, name: "Intel GMA X3100" },
    GpuModel { device_id: 0x2A12, name: "Intel GMA X3100" },
    GpuModel { device_id: 0x2A13, name: "Intel GMA X3100" },

    // Ironlake
    GpuModel { device_id: 0x0042, name: "Intel HD Graphics" },
    GpuModel { device_id: 0x0046, name: "Intel HD Graphics" },

    // Sandy Bridge
    // GT1
    GpuModel { device_id: 0x0102, name: "Intel HD Graphics 2000" },
    GpuModel { device_id: 0x0106, name: "Intel HD Graphics 2000" },
    GpuModel { device_id: 0x010A, name: "Intel HD Graphics P3000" },
    // GT2
    GpuModel { device_id: 0x0112, name: "Intel HD Graphics 3000" },
    GpuModel { device_id: 0x0116, name: "Intel HD Graphics 3000" },
    GpuModel { device_id: 0x0122, name: "Intel HD Graphics 3000" },
    GpuModel { device_id: 0x0126, name: "Intel HD Graphics 3000" },

    // Ivy Bridge
    // GT1
    GpuModel { device_id: 0x0152, name: "Intel HD Graphics 2500" },
    GpuModel { device_id: 0x0156, name: "Intel HD Graphics 2500" },
    GpuModel { device_id: 0x015A, name: "Intel HD Graphics 2500" },
    GpuModel { device_id: 0x015E, name: "Intel Ivy Bridge GT1" },
    // GT2
    GpuModel { device_id: 0x0162, name: "Intel HD Graphics 4000" },
    GpuModel { device_id: 0x0166, name: "Intel HD Graphics 4000" },
    GpuModel { device_id: 0x016A, name: "Intel HD Graphics P4000" },

    // Haswell
    // GT1
    GpuModel { device_id: 0x0402, name: "Intel Haswell GT1" },
    GpuModel { device_id: 0x0406, name: "Intel Haswell GT1" },
    GpuModel { device_id: 0x040A, name: "Intel Haswell GT1" },
    GpuModel { device_id: 0x040B, name: "Intel Haswell GT1" },
    GpuModel { device_id: 0x040E, name: "Intel Haswell GT1" },
    // GT2
    GpuModel { device_id: 0x0412, name: "Intel HD Graphics 4600" },
    GpuModel { device_id: 0x0416, name: "Intel HD Graphics 4600" },
    GpuModel { device_id: 0x041A, name: "Intel HD Graphics P4600" },
    GpuModel { device_id: 0x041B, name: "Intel Haswell GT2" },
    GpuModel { device_id: 0x041E, name: "Intel HD Graphics 4400" },
    // GT3
    GpuModel { device_id: 0x0422, name: "Intel HD Graphics 5000" },
    GpuModel { device_id: 0x0426, name: "Intel HD Graphics 5000" },
    GpuModel { device_id: 0x042A, name: "Intel HD Graphics 5000" },
    GpuModel { device_id: 0x042B, name: "Intel Haswell GT3" },
    GpuModel { device_id: 0x042E, name: "Intel Haswell GT3" },
    // GT1
    GpuModel { device_id: 0x0A02, name: "Intel Haswell GT1" },
    GpuModel { device_id: 0x0A06, name: "Intel HD Graphics" },
    GpuModel { device_id: 0x0A0A, name: "Intel Haswell GT1" },
    GpuModel { device_id: 0x0A0B, name: "Intel Haswell GT1" },
    GpuModel { device_id: 0x0A0E, name: "Intel Haswell GT1" },
    // GT2
    GpuModel { device_id: 0x0A12, name: "Intel Haswell GT2" },
    GpuModel { device_id: 0x0A16, name: "Intel HD Graphics 4400" },
    GpuModel { device_id: 0x0A1A, name: "Intel Haswell GT2" },
    GpuModel { device_id: 0x0A1B, name: "Intel Haswell GT2" },
    GpuModel { device_id: 0x0A1E, name: "Intel HD Graphics 4200" },
    // GT3
    GpuModel { device_id: 0x0A22, name: "Intel Iris Graphics 5100" },
    GpuModel { device_id: 0x0A26, name: "Intel HD Graphics 5000" },
    GpuModel { device_id: 0x0A2A, name: "Intel Iris Graphics 5100" },
    GpuModel { device_id: 0x0A2B, name: "Intel Iris Graphics 5100" },
    GpuModel { device_id: 0x0A2E, name: "Intel Iris Graphics 5100" },
    // GT1
    GpuModel { device_id: 0x0C02, name: "Intel Haswell GT1" },
    GpuModel { device_id: 0x0C06, name: "Intel Haswell GT1" },
    GpuModel { device_id: 0x0C0A, name: "Intel Haswell GT1" },
    GpuModel { device_id: 0x0C0B, name: "Intel Haswell GT1" },
    GpuModel { device_id: 0x0C0E, name: "Intel Haswell GT1" },
    // GT2
    GpuModel { device_id: 0x0C12, name: "Intel Haswell GT2" },
    GpuModel { device_id: 0x0C16, name: "Intel Haswell GT2" },
    GpuModel { device_id: 0x0C1A, name: "Intel Haswell GT2" },
    GpuModel { device_id: 0x0C1B, name: "Intel Haswell GT2" },
    GpuModel { device_id: 0x0C1E, name: "Intel Haswell GT2" },
    // GT3
    GpuModel { device_id: 0x0C22, name: "Intel Haswell GT3" },
    GpuModel { device_id: 0x0C26, name: "Intel Haswell GT3" },
    GpuModel { device_id: 0x0C2A, name: "Intel Haswell GT3" },
    GpuModel { device_id: 0x0C2B, name: "Intel Haswell GT3" },
    GpuModel { device_id: 0x0C2E, name: "Intel Haswell GT3" },
    // GT1
    GpuModel { device_id: 0x0D02, name: "Intel Haswell GT1" },
    GpuModel { device_id: 0x0D06, name: "Intel Haswell GT1" },
    GpuModel { device_id: 0x0D0A, name: "Intel Haswell GT1" },
    GpuModel { device_id: 0x0D0B, name: "Intel Haswell GT1" },
    GpuModel { device_id: 0x0D0E, name: "Intel Haswell GT1" },
    // GT2
    GpuModel { device_id: 0x0D12, name: "Intel HD Graphics 4600" },
    GpuModel { device_id: 0x0D16, name: "Intel HD Graphics 4600" },
    GpuModel { device_id: 0x0D1A, name: "Intel Haswell GT2" },
    GpuModel { device_id: 0x0D1B, name: "Intel Haswell GT2" },
    GpuModel { device_id: 0x0D1E, name: "Intel Haswell GT2" },
    // GT3
    GpuModel { device_id: 0x0D22, name: "Intel Iris Pro Graphics 5200" },
    GpuModel { device_id: 0x0D26, name: "Intel Iris Pro Graphics 5200" },
    GpuModel { device_id: 0x0D2A, name: "Intel Iris Pro Graphics 5200" },
    GpuModel { device_id: 0x0D2B, name: "Intel Iris Pro Graphics 5200" },
    GpuModel { device_id: 0x0D2E, name: "Intel Iris Pro Graphics 5200" },

    // ValleyView
    GpuModel { device_id: 0x0F30, name: "Intel HD Graphics" },
    GpuModel { device_id: 0x0F31, name: "Intel HD Graphics" },
    GpuModel { device_id: 0x0F32, name: "Intel HD Graphics" },
    GpuModel { device_id: 0x0F33, name: "Intel HD Graphics" },
    GpuModel { device_id: 0x0155, name: "Intel HD Graphics" },
    GpuModel { device_id: 0x0157, name: "Intel HD Graphics" },

    // Broadwell
    // GT1
    GpuModel { device_id: 0x1602, name: "Intel Broadwell GT1" },
    GpuModel { device_id: 0x1606, name: "Intel Broadwell GT1" },
    GpuModel { device_id: 0x160A, name: "Intel Broadwell GT1" },
    GpuModel { device_id: 0x160B, name: "Intel Broadwell GT1" },
    GpuModel { device_id: 0x160D, name: "Intel Broadwell GT1" },
    GpuModel { device_id: 0x160E, name: "Intel Broadwell GT1" },
    // GT2
    GpuModel { device_id: 0x1612, name: "Intel HD Graphics 5600" },
    GpuModel { device_id: 0x1616, name: "Intel HD Graphics 5500" },
    GpuModel { device_id: 0x161A, name: "Intel Broadwell GT2" },
    GpuModel { device_id: 0x161B, name: "Intel Broadwell GT2" },
    GpuModel { device_id: 0x161D, name: "Intel Broadwell GT2" },
    GpuModel { device_id: 0x161E, name: "Intel HD Graphics 5300" },
    // GT3
    GpuModel { device_id: 0x1626, name: "Intel HD Graphics 6000" },
    GpuModel { device_id: 0x162B, name: "Intel Iris Graphics 6100" },
    GpuModel { device_id: 0x162D, name: "Intel Iris Pro Graphics P6300" },
    // GT3e
    GpuModel { device_id: 0x1622, name: "Intel Iris Pro Graphics 6200" },
    GpuModel { device_id: 0x162A, name: "Intel Iris Pro Graphics P6300" },
    // RSVD
    GpuModel { device_id: 0x162E, name: "Intel Broadwell RSVD" },
    GpuModel { device_id: 0x1632, name: "Intel Broadwell RSVD" },
    GpuModel { device_id: 0x1636, name: "Intel Broadwell RSVD" },
    GpuModel { device_id: 0x163A, name: "Intel Broadwell RSVD" },
    GpuModel { device_id: 0x163B, name: "Intel Broadwell RSVD" },
    GpuModel { device_id: 0x163D, name: "Intel Broadwell RSVD" },
    GpuModel { device_id: 0x163E, name: "Intel Broadwell RSVD" },

    // Cherryview/Braswell
    GpuModel { device_id: 0x22B0, name: "Intel HD Graphics 400" },
    GpuModel { device_id: 0x22B1, name: "Intel HD Graphics 405" },
    GpuModel { device_id: 0x22B2, name: "Intel HD Graphics 400" },
    GpuModel { device_id: 0x22B3, name: "Intel HD Graphics 405" },

    // Skylake
    // GT1
    GpuModel { device_id: 0x1902, name: "Intel HD Graphics 510" },
    GpuModel { device_id: 0x1906, name: "Intel HD Graphics 510" },
    GpuModel { device_id: 0x190A, name: "Intel Skylake GT1" },
    GpuModel { device_id: 0x190B, name: "Intel HD Graphics 510" },
    GpuModel { device_id: 0x190E, name: "Intel Skylake GT1" },
    // GT2
    GpuModel { device_id: 0x1912, name: "Intel HD Graphics 530" },
    GpuModel { device_id: 0x1916, name: "Intel HD Graphics 520" },
    GpuModel { device_id: 0x191A, name: "Intel Skylake GT2" },
    GpuModel { device_id: 0x191B, name: "Intel HD Graphics 530" },
    GpuModel { device_id: 0x191D, name: "Intel HD Graphics P530" },
    GpuModel { device_id: 0x191E, name: "Intel HD Graphics 515" },
    GpuModel { device_id: 0x1921, name: "Intel HD Graphics 520" },
    // GT2f
    GpuModel { device_id: 0x1913, name: "Intel Skylake GT2f" },
    GpuModel { device_id: 0x1915, name: "Intel Skylake GT2f" },
    GpuModel { device_id: 0x1917, name: "Intel Skylake GT2f" },
    // GT3
    GpuModel { device_id: 0x1923, name: "Intel HD Graphics 535" },
    // GT3e
    GpuModel { device_id: 0x1926, name: "Intel Iris Graphics 540" },
    GpuModel { device_id: 0x1927, name: "Intel Iris Graphics 550" },
    GpuModel { device_id: 0x192B, name: "Intel Iris Graphics 555" },
    GpuModel { device_id: 0x192D, name: "Intel Iris Graphics P555" },
    // GT4
    GpuModel { device_id: 0x192A, name: "Intel Skylake GT4" },
    // GT4e
    GpuModel { device_id: 0x1932, name: "Intel Iris Pro Graphics 580" },
    GpuModel { device_id: 0x193A, name: "Intel Iris Pro Graphics P580" },
    GpuModel { device_id: 0x193B, name: "Intel Iris Pro Graphics 580" },
    GpuModel { device_id: 0x193D, name: "Intel Iris Pro Graphics P580" },

    // Goldmont
    GpuModel { device_id: 0x0A84, name: "Intel HD Graphics" },
    GpuModel { device_id: 0x1A84, name: "Intel HD Graphics" },
    GpuModel { device_id: 0x1A85, name: "Intel HD Graphics" },
    GpuModel { device_id: 0x5A84, name: "Intel HD Graphics 505" },
    GpuModel { device_id: 0x5A85, name: "Intel HD Graphics 500" },

    // Kaby Lake
    // GT1
    GpuModel { device_id: 0x5902, name: "Intel HD Graphics 610" },
    GpuModel { device_id: 0x5906, name: "Intel HD Graphics 610" },
    GpuModel { device_id: 0x5908, name: "Intel Kaby Lake GT1" },
    GpuModel { device_id: 0x590A, name: "Intel Kaby Lake GT1" },
    GpuModel { device_id: 0x590B, name: "Intel Kaby Lake GT1" },
    GpuModel { device_id: 0x590E, name: "Intel Kaby Lake GT1" },
    // GT1.5
    GpuModel { device_id: 0x5913, name: "Intel Kaby Lake GT1.5" },
    GpuModel { device_id: 0x5915, name: "Intel Kaby Lake GT1.5" },
    // GT2
    GpuModel { device_id: 0x5912, name: "Intel HD Graphics 630" },
    GpuModel { device_id: 0x5916, name: "Intel HD Graphics 620" },
    GpuModel { device_id: 0x591A, name: "Intel HD Graphics P630" },
    GpuModel { device_id: 0x591B, name: "Intel HD Graphics 630" },
    GpuModel { device_id: 0x591D, name: "Intel HD Graphics P630" },
    GpuModel { device_id: 0x591E, name: "Intel HD Graphics 615" },
    // GT2F
    GpuModel { device_id: 0x5921, name: "Intel Kaby Lake GT2F" },
    // GT3
    GpuModel { device_id: 0x5923, name: "Intel HD Graphics 635" },
    GpuModel { device_id: 0x5926, name: "Intel Iris Plus Graphics 640" },
    GpuModel { device_id: 0x5927, name: "Intel Iris Plus Graphics 650" },
    // GT4
    GpuModel { device_id: 0x593B, name: "Intel Kaby Lake GT4" },

    // Kaby Lake Refresh
    // GT1.5
    GpuModel { device_id: 0x5917, name: "Intel UHD Graphics 620" },

    // Amber Lake
    // GT2
    GpuModel { device_id: 0x591C, name: "Intel UHD Graphics 615" },
    GpuModel { device_id: 0x87C0, name: "Intel UHD Graphics 617" },
    GpuModel { device_id: 0x87CA, name: "Intel UHD Graphics 615" },

    // Coffee Lake
    // GT1
    GpuModel { device_id: 0x3E90, name: "Intel UHD Graphics 610" },
    GpuModel { device_id: 0x3E93, name: "Intel UHD Graphics 610" },
    GpuModel { device_id: 0x3E99, name: "Intel Coffee Lake GT1" },
    // GT2
    GpuModel { device_id: 0x3E91, name: "Intel UHD Graphics 630" },
    GpuModel { device_id: 0x3E92, name: "Intel UHD Graphics 630" },
    GpuModel { device_id: 0x3E94, name: "Intel Coffee Lake GT2" },
    GpuModel { device_id: 0x3E96, name: "Intel Coffee Lake GT2" },
    GpuModel { device_id: 0x3E98, name: "Intel UHD Graphics 630" },
    GpuModel { device_id: 0x3E9A, name: "Intel Coffee Lake GT2" },
    GpuModel { device_id: 0x3E9B, name: "Intel UHD Graphics 630" },
    GpuModel { device_id: 0x3EA9, name: "Intel Coffee Lake GT2" },
    // GT3
    GpuModel { device_id: 0x3EA5, name: "Intel Iris Plus Graphics 655" },
    GpuModel { device_id: 0x3EA6, name: "Intel Coffee Lake GT3" },
    GpuModel { device_id: 0x3EA7, name: "Intel Coffee Lake GT3" },
    GpuModel { device_id: 0x3EA8, name: "Intel Coffee Lake GT3" },

    // Whiskey Lake
    // GT1
    GpuModel { device_id: 0x3EA1, name: "Intel Whiskey Lake GT1" },
    GpuModel { device_id: 0x3EA4, name: "Intel Whiskey Lake GT1" },
    // GT2
    GpuModel { device_id: 0x3EA0, name: "Intel UHD Graphics 620" },
    GpuModel { device_id: 0x3EA3, name: "Intel Whiskey Lake GT2" },
    // GT3
    GpuModel { device_id: 0x3EA2, name: "Intel Whiskey Lake GT3" },

    // Comet Lake
    // GT1
    GpuModel { device_id: 0x9B21, name: "Intel Comet Lake GT1" },
    GpuModel { device_id: 0x9BA0, name: "Intel Comet Lake GT1" },
    GpuModel { device_id: 0x9BA2, name: "Intel Comet Lake GT1" },
    GpuModel { device_id: 0x9BA4, name: "Intel Comet Lake GT1" },
    GpuModel { device_id: 0x9BA5, name: "Intel Comet Lake GT1" },
    GpuModel { device_id: 0x9BA8, name: "Intel Comet Lake GT1" },
    GpuModel { device_id: 0x9BAA, name: "Intel Comet Lake GT1" },
    GpuModel { device_id: 0x9BAB, name: "Intel Comet Lake GT1" },
    GpuModel { device_id: 0x9BAC, name: "Intel Comet Lake GT1" },
    // GT2
    GpuModel { device_id: 0x9B41, name: "Intel UHD Graphics 620" },
    GpuModel { device_id: 0x9BC0, name: "Intel Comet Lake GT2" },
    GpuModel { device_id: 0x9BC2, name: "Intel Comet Lake GT2" },
    GpuModel { device_id: 0x9BC4, name: "Intel Comet Lake GT2" },
    GpuModel { device_id: 0x9BC5, name: "Intel Comet Lake GT2" },
    GpuModel { device_id: 0x9BC8, name: "Intel Comet Lake GT2" },
    GpuModel { device_id: 0x9BCA, name: "Intel UHD Graphics 620" },
    GpuModel { device_id: 0x9BCB, name: "Intel Comet Lake GT2" },
    GpuModel { device_id: 0x9BCC, name: "Intel Comet Lake GT2" },

    // Gemini Lake
    GpuModel { device_id: 0x3184, name: "Intel UHD Graphics 605" },
    GpuModel { device_id: 0x3185, name: "Intel UHD Graphics 600" },

    // Cannonlake
    // GTx
    GpuModel { device_id: 0x5A40, name: "Intel Cannonlake GTx" },
    // GT0.5
    GpuModel { device_id: 0x5A49, name: "Intel Cannonlake GT0.5" },
    GpuModel { device_id: 0x5A4A, name: "Intel Cannonlake GT0.5" },
    // GT1
    GpuModel { device_id: 0x0A01, name: "Intel Cannonlake GT1" },
    GpuModel { device_id: 0x5A41, name: "Intel Cannonlake GT1" },
    GpuModel { device_id: 0x5A42, name: "Intel Cannonlake GT1" },
    GpuModel { device_id: 0x5A44, name: "Intel Cannonlake GT1" },
    // GT1.5
    GpuModel { device_id: 0x5A59, name: "Intel Cannonlake GT1.5" },
    GpuModel { device_id: 0x5A5A, name: "Intel Cannonlake GT1.5" },
    GpuModel { device_id: 0x5A5C, name: "Intel Cannonlake GT1.5" },
    // GT2
    GpuModel { device_id: 0x5A50, name: "Intel Cannonlake GT2" },
    GpuModel { device_id: 0x5A51, name: "Intel Cannonlake GT2" },
    GpuModel { device_id: 0x5A52, name: "Intel Cannonlake GT2" },
    GpuModel { device_id: 0x5A54, name: "Intel Cannonlake GT2" },

    // Ice Lake
    // GT0.5
    GpuModel { device_id: 0x8A71, name: "Intel Ice Lake GT0.5" },
    // GT1
    GpuModel { device_id: 0x8A5B, name: "Intel Ice Lake GT1" },
    GpuModel { device_id: 0x8A5D, name: "Intel Ice Lake GT1" },
    // GT1.5
    GpuModel { device_id: 0x8A5A, name: "Intel Ice Lake GT1.5" },
    GpuModel { device_id: 0x8A5C, name: "Intel Ice Lake GT1.5" },
    // GT2
    GpuModel { device_id: 0x8A50, name: "Intel Ice Lake GT2" },
    GpuModel { device_id: 0x8A51, name: "Intel Ice Lake GT2" },
    GpuModel { device_id: 0x8A52, name: "Intel Ice Lake GT2" },

    // Lakefield
    GpuModel { device_id: 0x9840, name: "Intel Lakefield" },
    GpuModel { device_id: 0x9850, name: "Intel Lakefield" },

    // Jasper Lake
    GpuModel { device_id: 0x4500, name: "Intel Jasper Lake" },
];

lazy_static! {
    static ref MODEL_INDEX: BTreeMap<u16, &'static str> = {
        let mut m = BTreeMap::new();

        for model in KNOWN_GPUS {
            m.insert(model.device_id, model.name);
        }

        m
    };
}

/// Resolve a device ID to its display name.
///
/// Unknown IDs resolve to [`UNSUPPORTED_NAME`]; callers treat that as
/// "inject the generic set only".
pub fn gma_model_name(device_id: u16) -> &'static str {
    MODEL_INDEX.get(&device_id).copied().unwrap_or(UNSUPPORTED_NAME)
}

/// Table entry for a device ID, without the unsupported fallback
pub fn find_model(device_id: u16) -> Option<&'static GpuModel> {
    KNOWN_GPUS.iter().find(|m| m.device_id == device_id)
}

/// `true` for real table entries; the unsupported sentinel does not count
pub fn is_known_device(device_id: u16) -> bool {
    device_id != UNSUPPORTED_DEVICE_ID && MODEL_INDEX.contains_key(&device_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(gma_model_name(0x0166), "Intel HD Graphics 4000");
        assert_eq!(gma_model_name(0x0D26), "Intel Iris Pro Graphics 5200");
        assert_eq!(gma_model_name(0x3E9B), "Intel UHD Graphics 630");
        assert_eq!(gma_model_name(0x87C0), "Intel UHD Graphics 617");
        assert_eq!(gma_model_name(0x4500), "Intel Jasper Lake");
    }

    #[test]
    fn test_unknown_falls_back() {
        assert_eq!(gma_model_name(0x9999), UNSUPPORTED_NAME);
        assert_eq!(gma_model_name(0x0000), UNSUPPORTED_NAME);
        assert!(find_model(0x9999).is_none());
        assert!(!is_known_device(0x9999));
    }

    #[test]
    fn test_sentinel() {
        assert_eq!(KNOWN_GPUS[0].device_id, UNSUPPORTED_DEVICE_ID);
        assert_eq!(gma_model_name(UNSUPPORTED_DEVICE_ID), UNSUPPORTED_NAME);
        assert!(!is_known_device(UNSUPPORTED_DEVICE_ID));
    }

    #[test]
    fn test_disabled_legacy_parts_absent() {
        // i810/i830/i915 era and PowerVR parts are not handled
        for id in [0x7121u16, 0x3577, 0x2582, 0x29A2, 0x2E22, 0x0BE0] {
            assert_eq!(gma_model_name(id), UNSUPPORTED_NAME, "0x{:04x}", id);
        }
    }

    #[test]
    fn test_index_agrees_with_linear_scan() {
        for model in KNOWN_GPUS {
            assert_eq!(find_model(model.device_id), Some(model));
            assert_eq!(gma_model_name(model.device_id), model.name);
        }
    }
}
