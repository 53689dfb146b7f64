//! Graphics table invariants

#![cfg(test)]

use super::*;
use super::tables::*;
use crate::devprop::{DeviceProperty, PropertyValue};
use alloc::collections::BTreeSet;
use alloc::vec::Vec;

fn dword(property: &DeviceProperty) -> u32 {
    match property.value {
        PropertyValue::Dword(value) => value.as_u32(),
        other => panic!("{} is not a dword: {:?}", property.name, other),
    }
}

fn names(table: &[DeviceProperty]) -> Vec<&'static str> {
    table.iter().map(|p| p.name).collect()
}

#[test]
fn test_device_ids_are_unique() {
    let mut seen = BTreeSet::new();
    for model in KNOWN_GPUS {
        assert!(seen.insert(model.device_id), "duplicate 0x{:04x}", model.device_id);
    }
}

#[test]
fn test_every_known_id_classifies() {
    for model in KNOWN_GPUS.iter().filter(|m| m.device_id != models::UNSUPPORTED_DEVICE_ID) {
        assert!(
            IntelFamily::from_device_id(model.device_id).is_some(),
            "0x{:04x} {} has no family",
            model.device_id,
            model.name
        );
    }
}

#[test]
fn test_table_dimensions() {
    assert_eq!(COMMON_VALS.len(), 3);
    assert_eq!(CALISTOGA_GMA_VALS.len(), 30);
    assert_eq!(CRESTLINE_GMA_VALS.len(), 34);
    assert_eq!(IRONLAKE_HD_VALS.len(), 10);
    assert_eq!(SANDY_BRIDGE_SNB_VALS.len(), 7);
    assert_eq!(SANDY_BRIDGE_HD_VALS.len(), 13);
    assert_eq!(IVY_BRIDGE_IG_VALS.len(), 12);
    assert_eq!(IVY_BRIDGE_HD_VALS.len(), 1);
    assert_eq!(HASWELL_IG_VALS.len(), 24);
    assert_eq!(HASWELL_HD_VALS.len(), 1);
    assert_eq!(BROADWELL_IG_VALS.len(), 22);
    assert_eq!(BROADWELL_HD_VALS.len(), 2);
    assert_eq!(SKYLAKE_IG_VALS.len(), 19);
    assert_eq!(SKYLAKE_HD_VALS.len(), 12);
    assert_eq!(KABYLAKE_IG_VALS.len(), 19);
    assert_eq!(KABYLAKE_HD_VALS.len(), 12);
    assert_eq!(COFFEELAKE_IG_VALS.len(), 15);
    assert_eq!(COFFEELAKE_HD_VALS.len(), 8);
    assert_eq!(CANNONLAKE_IG_VALS.len(), 14);
    assert_eq!(CANNONLAKE_HD_VALS.len(), 8);
}

#[test]
fn test_named_rows_are_dwords() {
    for family in [
        IntelFamily::Calistoga,
        IntelFamily::Crestline,
        IntelFamily::Ironlake,
        IntelFamily::SandyBridge,
        IntelFamily::IvyBridge,
        IntelFamily::Haswell,
        IntelFamily::Broadwell,
        IntelFamily::Skylake,
        IntelFamily::KabyLake,
        IntelFamily::CoffeeLake,
        IntelFamily::Cannonlake,
    ] {
        let table = named_values(family).unwrap();
        assert!(!table.is_empty());
        for property in table {
            assert_eq!(property.value.encoded_len(), 4, "{} {}", family, property.name);
        }
    }
}

#[test]
fn test_platform_rows_match_family() {
    for family in [
        IntelFamily::IvyBridge,
        IntelFamily::Haswell,
        IntelFamily::Broadwell,
        IntelFamily::Skylake,
        IntelFamily::KabyLake,
        IntelFamily::CoffeeLake,
        IntelFamily::Cannonlake,
    ] {
        let rows = platform_rows(family).unwrap();
        let mut ids = BTreeSet::new();
        for row in rows {
            assert!(ids.insert(row.value.as_u32()), "duplicate row in {}", family);
            // Coffee Lake row 0 is a generic 0x3E00 personality
            if row.device_fragment() != 0x3E00 {
                assert_eq!(
                    IntelFamily::from_device_id(row.device_fragment()),
                    Some(family),
                    "0x{:08x}",
                    row.value.as_u32()
                );
            }
        }
    }
}

#[test]
fn test_known_row_values() {
    assert_eq!(IVY_BRIDGE_IG_VALS[4].value.as_u32(), 0x0166_0001);
    assert_eq!(IVY_BRIDGE_IG_VALS[4].macs, &["MacBookPro10,2"]);
    assert_eq!(HASWELL_IG_VALS[9].macs, &["MacBookAir6,1", "MacBookAir6,2", "Macmini7,1"]);
    assert_eq!(HASWELL_IG_VALS[23].value.as_u32(), 0x0D26_000F);
    assert_eq!(SKYLAKE_IG_VALS[6].value.as_u32(), 0x191B_0000);
    assert_eq!(KABYLAKE_IG_VALS[18].value.as_u32(), 0x87C0_0005);
    assert_eq!(COFFEELAKE_IG_VALS[7].value.as_u32(), 0x3E9B_0006);
    assert_eq!(SANDY_BRIDGE_SNB_VALS[4].value.as_u32(), 0x0003_0030);
    assert!(!SANDY_BRIDGE_SNB_VALS[6].mobile);
}

#[test]
fn test_common_values() {
    assert_eq!(COMMON_VALS[0].as_u32(), 0);
    assert_eq!(COMMON_VALS[1].as_u32(), 1);
    assert_eq!(COMMON_VALS[2].as_u32(), 0x106B);
    assert_eq!(CLASS_FIX, [0x00, 0x00, 0x03, 0x00]);
}

#[test]
fn test_named_tables_keep_order() {
    assert_eq!(CALISTOGA_GMA_VALS[0].name, "AAPL,HasLid");
    assert_eq!(CALISTOGA_GMA_VALS[29].name, "AAPL01,Width");
    assert_eq!(dword(&CALISTOGA_GMA_VALS[4]), 0x0800_003F);
    assert_eq!(CRESTLINE_GMA_VALS[7].name, "AAPL00,blackscreen-preferences");
    assert_eq!(dword(&IRONLAKE_HD_VALS[9]), 0x1200_0000);
    assert_eq!(SANDY_BRIDGE_HD_VALS[12].name, "graphic-options");
    assert_eq!(dword(&SANDY_BRIDGE_HD_VALS[12]), 0x04);
    assert_eq!(names(&IVY_BRIDGE_HD_VALS), ["graphics-options"]);
    assert_eq!(names(&BROADWELL_HD_VALS), ["AAPL,ig-tcon-scaler", "graphics-options"]);
}

#[test]
fn test_platform_row_values() {
    let expected: [(&[PlatformRow], &[u32]); 8] = [
        (&SANDY_BRIDGE_SNB_VALS, &[
            0x0001_0000, 0x0002_0000, 0x0003_0010, 0x0003_0020,
            0x0003_0030, 0x0004_0000, 0x0005_0000,
        ]),
        (&IVY_BRIDGE_IG_VALS, &[
            0x0162_0005, 0x0162_0006, 0x0162_0007, 0x0166_0000,
            0x0166_0001, 0x0166_0002, 0x0166_0003, 0x0166_0004,
            0x0166_0008, 0x0166_0009, 0x0166_000A, 0x0166_000B,
        ]),
        (&HASWELL_IG_VALS, &[
            0x0406_0000, 0x0412_0004, 0x0412_000B, 0x0416_0000,
            0x0426_0000, 0x0A16_0000, 0x0A16_000C, 0x0A26_0000,
            0x0A26_0005, 0x0A26_0006, 0x0A26_000A, 0x0A26_000D,
            0x0A2E_0008, 0x0A2E_000A, 0x0A2E_000D, 0x0C06_0000,
            0x0C16_0000, 0x0C26_0000, 0x0D22_0003, 0x0D26_0000,
            0x0D26_0007, 0x0D26_0009, 0x0D26_000E, 0x0D26_000F,
        ]),
        (&BROADWELL_IG_VALS, &[
            0x1606_0000, 0x1606_0002, 0x160E_0000, 0x160E_0001,
            0x1612_0003, 0x1616_0000, 0x1616_0002, 0x161E_0000,
            0x161E_0001, 0x1622_0000, 0x1622_0002, 0x1622_0007,
            0x1626_0000, 0x1626_0002, 0x1626_0004, 0x1626_0005,
            0x1626_0006, 0x1626_0008, 0x162B_0000, 0x162B_0002,
            0x162B_0004, 0x162B_0008,
        ]),
        (&SKYLAKE_IG_VALS, &[
            0x1902_0001, 0x1912_0000, 0x1912_0001, 0x1916_0000,
            0x1916_0002, 0x1917_0001, 0x191B_0000, 0x191B_0006,
            0x191E_0000, 0x191E_0003, 0x1926_0000, 0x1926_0002,
            0x1926_0004, 0x1926_0007, 0x1927_0000, 0x1927_0004,
            0x1932_0001, 0x193B_0000, 0x193B_0005,
        ]),
        (&KABYLAKE_IG_VALS, &[
            0x5912_0000, 0x5912_0003, 0x5916_0000, 0x5916_0009,
            0x5918_0002, 0x591B_0000, 0x591B_0006, 0x591C_0005,
            0x591E_0000, 0x591E_0001, 0x5923_0000, 0x5926_0000,
            0x5926_0002, 0x5926_0007, 0x5927_0000, 0x5927_0004,
            0x5927_0009, 0x87C0_0000, 0x87C0_0005,
        ]),
        (&COFFEELAKE_IG_VALS, &[
            0x3E00_0000, 0x3E91_0003, 0x3E92_0000, 0x3E92_0003,
            0x3E92_0009, 0x3E98_0003, 0x3E9B_0000, 0x3E9B_0006,
            0x3E9B_0007, 0x3E9B_0009, 0x3EA5_0000, 0x3EA5_0004,
            0x3EA5_0005, 0x3EA5_0009, 0x3EA6_0005,
        ]),
        (&CANNONLAKE_IG_VALS, &[
            0x0A01_0000, 0x5A40_0000, 0x5A40_0009, 0x5A41_0000,
            0x5A41_0009, 0x5A49_0000, 0x5A49_0009, 0x5A50_0000,
            0x5A50_0009, 0x5A51_0000, 0x5A51_0009, 0x5A52_0000,
            0x5A59_0000, 0x5A59_0009,
        ]),
    ];
    for (rows, values) in expected {
        let actual: Vec<u32> = rows.iter().map(|row| row.value.as_u32()).collect();
        assert_eq!(actual, values);
    }
}

#[test]
fn test_named_table_values() {
    let expected: [(&[DeviceProperty], &[u32]); 11] = [
        (&CALISTOGA_GMA_VALS, &[
            0x0000_0001, 0x0000_0001, 0x0000_0004, 0x0000_0002,
            0x0800_003F, 0x0000_0001, 0x0000_0000, 0x0000_0001,
            0x0000_0000, 0x0000_0000, 0x0000_0320, 0x0000_0000,
            0x0000_0000, 0x0000_0000, 0x0000_52C8, 0x0000_1000,
            0x0000_0000, 0x0000_0000, 0x0000_0001, 0x0000_0000,
            0x0000_003B, 0x0000_0000, 0x0000_0000, 0x0000_0001,
            0x0000_00C8, 0x0000_01C8, 0x0000_0001, 0x0000_0000,
            0x0000_0190, 0x0000_0500,
        ]),
        (&CRESTLINE_GMA_VALS, &[
            0x0000_0001, 0x0000_0001, 0x0000_0004, 0x0000_0002,
            0x0000_0001, 0x0000_0001, 0x0800_0001, 0x0800_0000,
            0x0000_0001, 0x0800_0038, 0x0000_0000, 0x0000_0000,
            0x0000_0001, 0x0000_0020, 0x0000_0000, 0x0000_0320,
            0x0000_0000, 0x0000_0000, 0x0000_5208, 0x0000_01AA,
            0x0000_0000, 0x0000_0000, 0x0000_0001, 0x0000_0000,
            0x0000_003D, 0x0000_0000, 0x0000_0000, 0x0000_0001,
            0x0000_00C8, 0x0000_01C8, 0x0000_0001, 0x0000_0000,
            0x0000_0190, 0x0000_0500,
        ]),
        (&IRONLAKE_HD_VALS, &[
            0x0000_0001, 0x0000_0001, 0x0000_0000, 0x0000_0001,
            0x0000_00C8, 0x0000_01C8, 0x0000_0001, 0x0000_0000,
            0x0000_0190, 0x1200_0000,
        ]),
        (&SANDY_BRIDGE_HD_VALS, &[
            0x0000_0000, 0x0000_0000, 0x0000_0000, 0x0000_0000,
            0x0000_0000, 0x0000_0000, 0x0000_0014, 0x0000_00FA,
            0x0000_012C, 0x0000_0000, 0x0000_0014, 0x0000_01F4,
            0x0000_0004,
        ]),
        (&IVY_BRIDGE_HD_VALS, &[
            0x0000_000C,
        ]),
        (&HASWELL_HD_VALS, &[
            0x0000_000C,
        ]),
        (&BROADWELL_HD_VALS, &[
            0x0000_0001, 0x0000_000C,
        ]),
        (&SKYLAKE_HD_VALS, &[
            0x0000_0001, 0x0000_0001, 0x0000_00FA, 0x0800_0011,
            0x0000_0011, 0x0800_00E2, 0x0000_0048, 0x0800_003C,
            0x0000_0011, 0x0800_0119, 0x0000_0030, 0x0000_000C,
        ]),
        (&KABYLAKE_HD_VALS, &[
            0x0000_0001, 0x0000_0001, 0x0000_00FA, 0x0800_0011,
            0x0000_0011, 0x0800_00E2, 0x0000_0048, 0x0800_003C,
            0x0000_0011, 0x0800_0119, 0x0000_0030, 0x0000_000C,
        ]),
        (&COFFEELAKE_HD_VALS, &[
            0x0000_0001, 0x0000_0001, 0x0000_00FA, 0x0800_003C,
            0x0000_0011, 0x0800_0119, 0x0000_0030, 0x0000_000C,
        ]),
        (&CANNONLAKE_HD_VALS, &[
            0x0000_0001, 0x0000_0001, 0x0000_00FA, 0x0800_003C,
            0x0000_0011, 0x0800_0119, 0x0000_0030, 0x0000_000C,
        ]),
    ];
    for (table, values) in expected {
        let actual: Vec<u32> = table.iter().map(dword).collect();
        assert_eq!(actual, values);
    }
}

#[test]
fn test_blobs() {
    assert_eq!(
        MBP_HD_OS_INFO,
        [
            0x30, 0x49, 0x01, 0x11, 0x01, 0x10, 0x08, 0x00, 0x00, 0x01,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
        ]
    );
    assert_eq!(
        MBA_HD3000_TBL_INFO,
        [
            0x30, 0x44, 0x02, 0x02, 0x02, 0x02, 0x00, 0x00, 0x00,
            0x00, 0x02, 0x02, 0x02, 0x02, 0x01, 0x01, 0x01, 0x01,
        ]
    );
    assert_eq!(
        MBA_HD3000_OS_INFO,
        [
            0x30, 0x49, 0x01, 0x12, 0x12, 0x12, 0x08, 0x00, 0x00, 0x01,
            0xf0, 0x1f, 0x01, 0x00, 0x00, 0x00, 0x10, 0x07, 0x00, 0x00,
        ]
    );
    assert_eq!(
        MBP_HD3000_TBL_INFO,
        [
            0x30, 0x44, 0x02, 0x02, 0x02, 0x02, 0x00, 0x00, 0x00,
            0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
        ]
    );
    assert_eq!(
        MBP_HD3000_OS_INFO,
        [
            0x30, 0x49, 0x01, 0x11, 0x11, 0x11, 0x08, 0x00, 0x00, 0x01,
            0xf0, 0x1f, 0x01, 0x00, 0x00, 0x00, 0x10, 0x07, 0x00, 0x00,
        ]
    );
    assert_eq!(
        MN_HD3000_TBL_INFO,
        [
            0x30, 0x44, 0x02, 0x02, 0x02, 0x02, 0x00, 0x00, 0x00,
            0x00, 0x02, 0x02, 0x02, 0x02, 0x00, 0x00, 0x00, 0x00,
        ]
    );
    assert_eq!(
        MN_HD3000_OS_INFO,
        [
            0x30, 0x49, 0x01, 0x50, 0x50, 0x50, 0x08, 0x00, 0x00, 0x01,
            0xf0, 0x1f, 0x01, 0x00, 0x00, 0x00, 0x10, 0x07, 0x00, 0x00,
        ]
    );
}

#[test]
fn test_hd3000_info_by_snb_id() {
    assert_eq!(hd3000_info(0x0001_0000), Some(&MBP_HD3000_INFO));
    assert_eq!(hd3000_info(0x0002_0000), Some(&MBP_HD3000_INFO));
    assert_eq!(hd3000_info(0x0004_0000), Some(&MBA_HD3000_INFO));
    for id in [0x0003_0010, 0x0003_0020, 0x0003_0030, 0x0005_0000] {
        assert_eq!(hd3000_info(id), Some(&MN_HD3000_INFO));
    }
    assert_eq!(hd3000_info(0x0166_0000), None);
}

#[test]
fn test_panel_row_groups() {
    let skl = panel_rows(IntelFamily::Skylake).unwrap();
    assert_eq!(skl.gfx324.name, "AAPL,Gfx324");
    assert_eq!(skl.cycle_delay.name, "AAPL00,PanelCycleDelay");
    assert_eq!(dword(&skl.macbook_power.unwrap()[2]), 0x0800_00E2);
    assert_eq!(dword(&skl.macbook_pro_power[2]), 0x0800_0119);
    assert_eq!(skl.graphic_options.name, "graphic-options");

    let cfl = panel_rows(IntelFamily::CoffeeLake).unwrap();
    assert!(cfl.macbook_power.is_none());
    assert_eq!(names(cfl.macbook_pro_power), [
        "AAPL00,PanelPowerDown",
        "AAPL00,PanelPowerOff",
        "AAPL00,PanelPowerOn",
        "AAPL00,PanelPowerUp",
    ]);
    assert_eq!(dword(&cfl.macbook_pro_power[0]), 0x0800_003C);

    assert!(panel_rows(IntelFamily::Haswell).is_none());
}
