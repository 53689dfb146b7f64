// Graphics injection options
// Parsed from `Key: Value` lines of the loader's option text

use alloc::format;
use alloc::string::{String, ToString};
use bitflags::bitflags;

use crate::error::{GmaError, Result};

bitflags! {
    /// Optional property groups
    pub struct GmaFeatures: u32 {
        /// `hda-gfx` for HDMI/DP audio
        const HDA_GFX = 1 << 0;
        /// `AAPL00,DualLink` on laptop panels
        const DUAL_LINK = 1 << 1;
        /// Panel power sequencing on Skylake and later laptops
        const PANEL_TIMINGS = 1 << 2;
        /// `AAPL,os-info` / `AAPL,tbl-info` blobs
        const OS_INFO = 1 << 3;
        /// The OS ships a Coffee Lake framebuffer
        const CFL_FRAMEBUFFER = 1 << 4;
    }
}

impl Default for GmaFeatures {
    fn default() -> Self {
        GmaFeatures::PANEL_TIMINGS | GmaFeatures::OS_INFO | GmaFeatures::CFL_FRAMEBUFFER
    }
}

/// Injection configuration for one graphics device
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GmaConfig {
    pub ig_platform_id: Option<u32>,
    pub snb_platform_id: Option<u32>,
    /// SMBIOS product name, e.g. `MacBookPro14,1`
    pub product_name: Option<String>,
    /// Overrides the device-ID laptop heuristic
    pub mobile: Option<bool>,
    pub fake_device_id: Option<u16>,
    pub features: GmaFeatures,
}

impl GmaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ig_platform_id(mut self, id: u32) -> Self {
        self.ig_platform_id = Some(id);
        self
    }

    pub fn with_snb_platform_id(mut self, id: u32) -> Self {
        self.snb_platform_id = Some(id);
        self
    }

    pub fn with_product_name(mut self, name: &str) -> Self {
        self.product_name = Some(name.to_string());
        self
    }

    pub fn with_mobile(mut self, mobile: bool) -> Self {
        self.mobile = Some(mobile);
        self
    }

    pub fn with_fake_device_id(mut self, id: u16) -> Self {
        self.fake_device_id = Some(id);
        self
    }

    pub fn with_features(mut self, features: GmaFeatures) -> Self {
        self.features = features;
        self
    }

    pub fn enable(mut self, features: GmaFeatures) -> Self {
        self.features.insert(features);
        self
    }

    pub fn disable(mut self, features: GmaFeatures) -> Self {
        self.features.remove(features);
        self
    }

    pub fn has(&self, feature: GmaFeatures) -> bool {
        self.features.contains(feature)
    }

    pub fn product_name(&self) -> Option<&str> {
        self.product_name.as_deref()
    }

    /// Parse option text. Blank lines and `#` comments are skipped,
    /// unknown keys are logged and ignored.
    pub fn parse(content: &str) -> Result<Self> {
        let mut config = GmaConfig::default();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let colon_pos = line.find(':').ok_or_else(|| {
                GmaError::InvalidConfig(format!("line {}: expected `key: value`", index + 1))
            })?;
            let key = line[..colon_pos].trim();
            let value = line[colon_pos + 1..].trim();

            match key {
                "ig-platform-id" => config.ig_platform_id = Some(parse_u32(key, value)?),
                "snb-platform-id" => config.snb_platform_id = Some(parse_u32(key, value)?),
                "product-name" => {
                    if value.is_empty() {
                        return Err(GmaError::InvalidConfig(format!("{}: empty value", key)));
                    }
                    config.product_name = Some(value.to_string());
                }
                "mobile" => config.mobile = Some(parse_bool(key, value)?),
                "fake-device-id" => {
                    let id = parse_u32(key, value)?;
                    let id = u16::try_from(id).map_err(|_| {
                        GmaError::InvalidConfig(format!("{}: 0x{:x} is not a 16-bit device ID", key, id))
                    })?;
                    config.fake_device_id = Some(id);
                }
                "hda-gfx" => config.features.set(GmaFeatures::HDA_GFX, parse_bool(key, value)?),
                "dual-link" => config.features.set(GmaFeatures::DUAL_LINK, parse_bool(key, value)?),
                "panel-timings" => {
                    config.features.set(GmaFeatures::PANEL_TIMINGS, parse_bool(key, value)?)
                }
                "os-info" => config.features.set(GmaFeatures::OS_INFO, parse_bool(key, value)?),
                "cfl-framebuffer" => {
                    config.features.set(GmaFeatures::CFL_FRAMEBUFFER, parse_bool(key, value)?)
                }
                _ => log_warn!("gma", "ignoring unknown option `{}`", key),
            }
        }

        Ok(config)
    }
}

fn parse_u32(key: &str, value: &str) -> Result<u32> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse::<u32>(),
    };
    parsed.map_err(|_| GmaError::InvalidConfig(format!("{}: `{}` is not a number", key, value)))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "yes" | "true" | "1" => Ok(true),
        "no" | "false" | "0" => Ok(false),
        _ => Err(GmaError::InvalidConfig(format!("{}: `{}` is not a boolean", key, value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GmaConfig::default();
        assert!(config.has(GmaFeatures::PANEL_TIMINGS));
        assert!(config.has(GmaFeatures::OS_INFO));
        assert!(config.has(GmaFeatures::CFL_FRAMEBUFFER));
        assert!(!config.has(GmaFeatures::HDA_GFX));
        assert!(!config.has(GmaFeatures::DUAL_LINK));
        assert_eq!(config.mobile, None);
    }

    #[test]
    fn test_parse_options() {
        let text = "\
# laptop
ig-platform-id: 0x01660004
product-name: MacBookPro9,1
mobile: yes
fake-device-id: 0x0166
hda-gfx: true
os-info: no

dual-link: 1
";
        let config = GmaConfig::parse(text).unwrap();
        assert_eq!(config.ig_platform_id, Some(0x0166_0004));
        assert_eq!(config.product_name(), Some("MacBookPro9,1"));
        assert_eq!(config.mobile, Some(true));
        assert_eq!(config.fake_device_id, Some(0x0166));
        assert!(config.has(GmaFeatures::HDA_GFX | GmaFeatures::DUAL_LINK));
        assert!(!config.has(GmaFeatures::OS_INFO));
        assert!(config.has(GmaFeatures::PANEL_TIMINGS));
    }

    #[test]
    fn test_decimal_ids() {
        let config = GmaConfig::parse("snb-platform-id: 65536").unwrap();
        assert_eq!(config.snb_platform_id, Some(0x10000));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = GmaConfig::parse("inject-edid: yes\nmobile: no").unwrap();
        assert_eq!(config.mobile, Some(false));
    }

    #[test]
    fn test_malformed_values() {
        assert!(matches!(
            GmaConfig::parse("ig-platform-id: 0xZZ"),
            Err(GmaError::InvalidConfig(_))
        ));
        assert!(matches!(GmaConfig::parse("mobile: maybe"), Err(GmaError::InvalidConfig(_))));
        assert!(matches!(
            GmaConfig::parse("fake-device-id: 0x10000"),
            Err(GmaError::InvalidConfig(_))
        ));
        assert!(matches!(GmaConfig::parse("no colon here"), Err(GmaError::InvalidConfig(_))));
        assert!(matches!(GmaConfig::parse("product-name:"), Err(GmaError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder() {
        let config = GmaConfig::new()
            .with_product_name("MacBook10,1")
            .with_mobile(true)
            .enable(GmaFeatures::HDA_GFX)
            .disable(GmaFeatures::PANEL_TIMINGS);
        assert_eq!(config.product_name(), Some("MacBook10,1"));
        assert!(config.has(GmaFeatures::HDA_GFX));
        assert!(!config.has(GmaFeatures::PANEL_TIMINGS));
    }
}
