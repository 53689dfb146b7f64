//! Intel graphics generation classification

use core::fmt;

/// Intel integrated graphics hardware family
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntelFamily {
    Lakeport,    // 945G desktop
    Calistoga,   // GMA 950 mobile
    Crestline,   // GMA X3100
    Ironlake,    // HD Graphics (Arrandale/Clarkdale)
    SandyBridge, // HD 2000/3000
    IvyBridge,   // HD 2500/4000
    ValleyView,  // Bay Trail
    Haswell,
    Broadwell,
    Cherryview,  // Braswell
    Skylake,
    Goldmont,    // Apollo Lake
    KabyLake,    // incl. Amber Lake
    CoffeeLake,  // incl. Whiskey Lake, Comet Lake
    GeminiLake,
    Cannonlake,
    IceLake,
    Lakefield,
    JasperLake,
}

impl IntelFamily {
    /// Classify a PCI device ID. `None` for IDs outside every known range.
    pub fn from_device_id(device_id: u16) -> Option<Self> {
        let family = match device_id {
            0x2772 | 0x2776 => IntelFamily::Lakeport,
            0x27A2 | 0x27A6 | 0x27AE => IntelFamily::Calistoga,
            0x2A02 | 0x2A03 | 0x2A12 | 0x2A13 => IntelFamily::Crestline,

            0x0042 | 0x0046 => IntelFamily::Ironlake,

            0x0102 | 0x0106 | 0x010A | 0x0112 | 0x0116 | 0x0122 | 0x0126 => IntelFamily::SandyBridge,

            0x0152 | 0x0156 | 0x015A | 0x015E | 0x0162 | 0x0166 | 0x016A => IntelFamily::IvyBridge,

            // 0x0155/0x0157 sit inside the Ivy Bridge block but are Bay Trail
            0x0F30..=0x0F33 | 0x0155 | 0x0157 => IntelFamily::ValleyView,

            0x0402..=0x042E | 0x0A02..=0x0A2E | 0x0C02..=0x0C2E | 0x0D02..=0x0D2E => IntelFamily::Haswell,

            0x1602..=0x163E => IntelFamily::Broadwell,
            0x22B0..=0x22B3 => IntelFamily::Cherryview,

            0x1902..=0x193D => IntelFamily::Skylake,
            0x0A84 | 0x1A84 | 0x1A85 | 0x5A84 | 0x5A85 => IntelFamily::Goldmont,
            0x5902..=0x593B | 0x87C0 | 0x87CA => IntelFamily::KabyLake,
            0x3E90..=0x3EA9 | 0x9B21..=0x9BCC => IntelFamily::CoffeeLake,
            0x3184 | 0x3185 => IntelFamily::GeminiLake,

            0x0A01 | 0x5A40..=0x5A5C => IntelFamily::Cannonlake,
            0x8A50..=0x8A71 => IntelFamily::IceLake,
            0x9840 | 0x9850 => IntelFamily::Lakefield,
            0x4500 => IntelFamily::JasperLake,

            _ => return None,
        };
        Some(family)
    }

    /// Whether property tables exist for this family
    pub fn has_property_tables(&self) -> bool {
        matches!(
            self,
            IntelFamily::Lakeport
                | IntelFamily::Calistoga
                | IntelFamily::Crestline
                | IntelFamily::Ironlake
                | IntelFamily::SandyBridge
                | IntelFamily::IvyBridge
                | IntelFamily::Haswell
                | IntelFamily::Broadwell
                | IntelFamily::Skylake
                | IntelFamily::KabyLake
                | IntelFamily::CoffeeLake
                | IntelFamily::Cannonlake
        )
    }

    /// Families selected through `AAPL,ig-platform-id`
    pub fn uses_ig_platform_id(&self) -> bool {
        matches!(
            self,
            IntelFamily::IvyBridge
                | IntelFamily::Haswell
                | IntelFamily::Broadwell
                | IntelFamily::Skylake
                | IntelFamily::KabyLake
                | IntelFamily::CoffeeLake
                | IntelFamily::Cannonlake
        )
    }

    /// Sandy Bridge and every generation after it
    pub fn is_hd_audio_capable(&self) -> bool {
        *self >= IntelFamily::SandyBridge
    }

    pub fn name(&self) -> &'static str {
        match self {
            IntelFamily::Lakeport => "Lakeport",
            IntelFamily::Calistoga => "Calistoga",
            IntelFamily::Crestline => "Crestline",
            IntelFamily::Ironlake => "Ironlake",
            IntelFamily::SandyBridge => "Sandy Bridge",
            IntelFamily::IvyBridge => "Ivy Bridge",
            IntelFamily::ValleyView => "ValleyView",
            IntelFamily::Haswell => "Haswell",
            IntelFamily::Broadwell => "Broadwell",
            IntelFamily::Cherryview => "Cherryview",
            IntelFamily::Skylake => "Skylake",
            IntelFamily::Goldmont => "Goldmont",
            IntelFamily::KabyLake => "Kaby Lake",
            IntelFamily::CoffeeLake => "Coffee Lake",
            IntelFamily::GeminiLake => "Gemini Lake",
            IntelFamily::Cannonlake => "Cannonlake",
            IntelFamily::IceLake => "Ice Lake",
            IntelFamily::Lakefield => "Lakefield",
            IntelFamily::JasperLake => "Jasper Lake",
        }
    }
}

impl fmt::Display for IntelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Guess whether a device ID is a laptop part.
///
/// Used when the configuration does not say. Desktop parts of a family
/// that only shipped in laptops still report `true`.
pub fn is_mobile_device(device_id: u16) -> bool {
    let low = device_id & 0x000F;
    match IntelFamily::from_device_id(device_id) {
        None | Some(IntelFamily::Lakeport) => false,
        Some(IntelFamily::Calistoga) | Some(IntelFamily::Crestline) => true,
        Some(IntelFamily::Ironlake) => device_id == 0x0046,
        Some(IntelFamily::SandyBridge) => matches!(device_id, 0x0106 | 0x0116 | 0x0126),
        Some(IntelFamily::IvyBridge) => matches!(device_id, 0x0156 | 0x0166),
        Some(IntelFamily::Haswell) => (device_id & 0xFF00) == 0x0A00 || low == 0x6,
        Some(IntelFamily::Broadwell) => matches!(low, 0x6 | 0xB | 0xE),
        Some(IntelFamily::Skylake) | Some(IntelFamily::KabyLake) => {
            matches!(device_id, 0x87C0 | 0x87CA) || matches!(low, 0x3 | 0x5 | 0x6 | 0x7 | 0xB | 0xC | 0xE)
        }
        Some(IntelFamily::CoffeeLake) => {
            matches!(device_id, 0x3E94 | 0x3E9B | 0x3EA0..=0x3EA9 | 0x9B41 | 0x9BCA | 0x9BCC)
        }
        // Atom and low-power parts
        Some(_) => true,
    }
}
