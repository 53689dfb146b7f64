//! Property assembly for Intel integrated graphics
//!
//! Builds the ordered property list for one device from the generation
//! tables and drives it into a [`PropertyWriter`].

use crate::config::{GmaConfig, GmaFeatures};
use crate::devprop::{push_property, DeviceProperty, PropValue, PropertyList, PropertyValue, PropertyWriter};
use crate::error::{GmaError, Result};
use crate::gpu::family::{is_mobile_device, IntelFamily};
use crate::gpu::models::gma_model_name;
use crate::gpu::select::{select_platform_row, PanelProfile, RowQuery, Selection};
use crate::gpu::tables::{self, CLASS_FIX, MBP_HD_OS_INFO, REG_TRUE, SUBSYSTEM_VENDOR_ID};
use crate::pci::PciDevice;

/// Kaby Lake personalities standing in for Coffee Lake without its framebuffer
const CFL_AS_KBL_MOBILE: u16 = 0x591B;
const CFL_AS_KBL_DESKTOP: u16 = 0x5912;

static HDA_GFX: &str = "onboard-1";
static DEVICE_TYPE: &str = "display";
static BUILT_IN: [u8; 1] = [0x01];

/// Result of assembling properties for one device
#[derive(Debug, Clone)]
pub struct GmaProperties {
    pub family: Option<IntelFamily>,
    pub model: &'static str,
    pub mobile: bool,
    pub selection: Option<Selection>,
    pub properties: PropertyList,
    /// `false` when only the generic set was produced
    pub supported: bool,
}

impl GmaProperties {
    pub fn get(&self, name: &str) -> Option<&DeviceProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

struct Builder {
    list: PropertyList,
}

impl Builder {
    fn new() -> Self {
        Self { list: PropertyList::new() }
    }

    fn push(&mut self, property: DeviceProperty) -> Result<()> {
        push_property(&mut self.list, property)
    }

    fn extend(&mut self, properties: &[DeviceProperty]) -> Result<()> {
        for property in properties {
            self.push(*property)?;
        }
        Ok(())
    }

    fn dword(&mut self, name: &'static str, value: PropValue) -> Result<()> {
        self.push(DeviceProperty { name, value: PropertyValue::Dword(value) })
    }
}

/// Assemble the property list for `device`.
///
/// Devices outside the table-backed generations get the generic set and
/// `supported == false`. Wrong-vendor and non-display devices are errors.
pub fn assemble(device: &PciDevice, config: &GmaConfig) -> Result<GmaProperties> {
    if !device.is_intel() {
        return Err(GmaError::NotIntel(device.vendor_id));
    }
    if !device.is_display() {
        return Err(GmaError::NotDisplay(device.class_code));
    }

    let model = gma_model_name(device.device_id);
    let family = IntelFamily::from_device_id(device.device_id);
    let mobile = config.mobile.unwrap_or_else(|| is_mobile_device(device.device_id));
    let mut out = Builder::new();

    let family = match family.filter(|f| f.has_property_tables()) {
        Some(family) => family,
        None => {
            log_info!(
                "devprop",
                "{}: {} (0x{:04x}) has no property tables, injecting generic set",
                device.location,
                model,
                device.device_id
            );
            out.push(DeviceProperty::string("model", model))?;
            out.push(DeviceProperty::string("device_type", DEVICE_TYPE))?;
            out.push(DeviceProperty::bytes("built-in", &BUILT_IN))?;
            return Ok(GmaProperties {
                family,
                model,
                mobile,
                selection: None,
                properties: out.list,
                supported: false,
            });
        }
    };

    log_info!(
        "devprop",
        "{}: {} (0x{:04x}), {} {}",
        device.location,
        model,
        device.device_id,
        family,
        if mobile { "mobile" } else { "desktop" }
    );

    // Coffee Lake without its framebuffer runs on Kaby Lake personalities
    let (table_family, table_device_id, fake_device_id) =
        if family == IntelFamily::CoffeeLake && !config.has(GmaFeatures::CFL_FRAMEBUFFER) {
            let stand_in = if mobile { CFL_AS_KBL_MOBILE } else { CFL_AS_KBL_DESKTOP };
            log_info!("devprop", "no Coffee Lake framebuffer, using Kaby Lake 0x{:04x}", stand_in);
            (IntelFamily::KabyLake, stand_in, config.fake_device_id.or(Some(stand_in)))
        } else {
            (family, device.device_id, config.fake_device_id)
        };

    out.push(DeviceProperty::string("model", model))?;
    out.push(DeviceProperty::string("device_type", DEVICE_TYPE))?;
    out.dword("subsystem-vendor-id", SUBSYSTEM_VENDOR_ID)?;
    out.push(DeviceProperty::bytes("class-code", &CLASS_FIX))?;
    out.push(DeviceProperty::bytes("built-in", &BUILT_IN))?;
    if let Some(id) = fake_device_id {
        out.dword("device-id", PropValue::from_u32(u32::from(id)))?;
    }

    let query = RowQuery {
        device_id: table_device_id,
        mobile,
        platform_id: if table_family == IntelFamily::SandyBridge {
            config.snb_platform_id
        } else {
            config.ig_platform_id
        },
        product_name: config.product_name(),
    };
    let selection = select_platform_row(table_family, &query);

    if let Some(selection) = &selection {
        log_debug!(
            "devprop",
            "platform id 0x{:08x} (row {}{})",
            selection.platform_id(),
            selection.index,
            if selection.fallback { ", fallback" } else { "" }
        );
    }

    match table_family {
        IntelFamily::Lakeport | IntelFamily::Calistoga | IntelFamily::Crestline => {
            if mobile {
                out.extend(named(table_family)?)?;
            }
        }
        IntelFamily::Ironlake => {
            let values = named(table_family)?;
            if mobile {
                out.extend(values)?;
                out.push(DeviceProperty::bytes("AAPL,os-info", &MBP_HD_OS_INFO))?;
            } else if let Some(total) = values.last() {
                out.push(*total)?;
            }
        }
        IntelFamily::SandyBridge => {
            let values = named(table_family)?;
            let snb = selected(&selection, table_family)?;
            out.dword("AAPL,snb-platform-id", snb.row.value)?;
            if mobile {
                out.extend(&values[..values.len() - 1])?;
            }
            if let Some(options) = values.last() {
                out.push(*options)?;
            }
            if config.has(GmaFeatures::OS_INFO) {
                if let Some(info) = tables::hd3000_info(snb.platform_id()) {
                    out.push(DeviceProperty::bytes("AAPL,tbl-info", info.tbl_info))?;
                    out.push(DeviceProperty::bytes("AAPL,os-info", info.os_info))?;
                }
            }
        }
        IntelFamily::IvyBridge | IntelFamily::Haswell | IntelFamily::Broadwell => {
            let ig = selected(&selection, table_family)?;
            out.dword("AAPL,ig-platform-id", ig.row.value)?;
            out.extend(named(table_family)?)?;
        }
        IntelFamily::Skylake | IntelFamily::KabyLake | IntelFamily::CoffeeLake | IntelFamily::Cannonlake => {
            let ig = selected(&selection, table_family)?;
            out.dword("AAPL,ig-platform-id", ig.row.value)?;

            let panel = tables::panel_rows(table_family).ok_or(GmaError::MissingTable(table_family))?;
            if config.has(GmaFeatures::PANEL_TIMINGS) {
                if let Some(profile) = PanelProfile::for_product(config.product_name(), mobile) {
                    if profile == PanelProfile::MacBookPro {
                        out.push(*panel.gfx324)?;
                    }
                    out.push(*panel.y_tile)?;
                    out.push(*panel.cycle_delay)?;
                    let power = match (profile, panel.macbook_power) {
                        (PanelProfile::MacBook, Some(macbook)) => macbook,
                        _ => panel.macbook_pro_power,
                    };
                    out.extend(power)?;
                }
            }
            out.push(*panel.graphic_options)?;
        }
        _ => {}
    }

    if mobile
        && config.has(GmaFeatures::DUAL_LINK)
        && matches!(family, IntelFamily::Ironlake | IntelFamily::SandyBridge | IntelFamily::IvyBridge)
    {
        out.dword("AAPL00,DualLink", REG_TRUE)?;
    }

    if config.has(GmaFeatures::HDA_GFX) && family.is_hd_audio_capable() {
        out.push(DeviceProperty::string("hda-gfx", HDA_GFX))?;
    }

    Ok(GmaProperties {
        family: Some(family),
        model,
        mobile,
        selection,
        properties: out.list,
        supported: true,
    })
}

/// Assemble and write every property to `writer`, in order.
///
/// Returns the number of properties written.
pub fn inject<W: PropertyWriter + ?Sized>(
    device: &PciDevice,
    config: &GmaConfig,
    writer: &mut W,
) -> Result<usize> {
    let assembled = assemble(device, config)?;

    for property in assembled.properties.iter() {
        let value = property.value.encode();
        writer.add_property(device, property.name, &value).map_err(|e| {
            log_error!("devprop", "{}: writing {} failed: {}", device.location, property.name, e);
            GmaError::from(e)
        })?;
        log_debug!("devprop", "{}: {}", device.location, property);
    }

    log_info!(
        "devprop",
        "{}: injected {} properties for {}",
        device.location,
        assembled.len(),
        assembled.model
    );
    Ok(assembled.len())
}

fn named(family: IntelFamily) -> Result<&'static [DeviceProperty]> {
    tables::named_values(family).ok_or(GmaError::MissingTable(family))
}

fn selected(selection: &Option<Selection>, family: IntelFamily) -> Result<Selection> {
    selection.ok_or(GmaError::MissingTable(family))
}
