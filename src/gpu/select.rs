//! Platform-id row selection
//!
//! Picks one framebuffer personality from a generation's platform table:
//! an explicit platform id from the configuration when it names a row,
//! otherwise the rows built for this device ID ranked by product name and
//! mobile flag, otherwise a deterministic family-wide fallback.

use core::fmt;

use super::family::IntelFamily;
use super::tables::{self, PlatformRow};

/// Panel power sequencing profile for Skylake and later laptops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelProfile {
    MacBook,
    MacBookPro,
}

impl PanelProfile {
    /// Profile for a product name. Desktops have none; laptops that do not
    /// identify as a MacBook use the MacBookPro sequence.
    pub fn for_product(product_name: Option<&str>, mobile: bool) -> Option<Self> {
        if !mobile {
            return None;
        }
        match product_name {
            Some(name) if name.starts_with("MacBookPro") => Some(PanelProfile::MacBookPro),
            Some(name) if name.starts_with("MacBook") => Some(PanelProfile::MacBook),
            _ => Some(PanelProfile::MacBookPro),
        }
    }
}

impl fmt::Display for PanelProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelProfile::MacBook => write!(f, "MacBook"),
            PanelProfile::MacBookPro => write!(f, "MacBookPro"),
        }
    }
}

/// What the selector knows about the device being injected
#[derive(Debug, Clone, Copy)]
pub struct RowQuery<'a> {
    pub device_id: u16,
    pub mobile: bool,
    /// Platform id forced by configuration
    pub platform_id: Option<u32>,
    pub product_name: Option<&'a str>,
}

/// Chosen platform row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub row: &'static PlatformRow,
    /// No row was built for the device ID
    pub fallback: bool,
}

impl Selection {
    pub fn platform_id(&self) -> u32 {
        self.row.value.as_u32()
    }
}

/// Select a row of `family`'s platform table. `None` when the family has
/// no platform table.
pub fn select_platform_row(family: IntelFamily, query: &RowQuery<'_>) -> Option<Selection> {
    let rows = tables::platform_rows(family)?;
    if rows.is_empty() {
        return None;
    }
    Some(select_in(family, rows, query))
}

fn select_in(family: IntelFamily, rows: &'static [PlatformRow], query: &RowQuery<'_>) -> Selection {
    if let Some(id) = query.platform_id {
        if let Some(index) = rows.iter().position(|row| row.value.as_u32() == id) {
            log_debug!("gma", "using configured platform id 0x{:08x}", id);
            return Selection { index, row: &rows[index], fallback: false };
        }
        log_warn!("gma", "platform id 0x{:08x} is not a {} personality, ignored", id, family);
    }

    // Sandy Bridge rows are keyed by SNB index, not device ID
    let built_for = |row: &PlatformRow| {
        family == IntelFamily::SandyBridge || row.device_fragment() == query.device_id
    };

    let candidate = query
        .product_name
        .and_then(|name| rows.iter().position(|row| built_for(row) && row.is_used_by(name)))
        .or_else(|| rows.iter().position(|row| built_for(row) && row.mobile == query.mobile))
        .or_else(|| rows.iter().position(|row| built_for(row)));

    if let Some(index) = candidate {
        return Selection { index, row: &rows[index], fallback: false };
    }

    let index = rows.iter().position(|row| row.mobile == query.mobile).unwrap_or(0);
    log_warn!(
        "gma",
        "no {} personality for device 0x{:04x}, falling back to 0x{:08x}",
        family,
        query.device_id,
        rows[index].value.as_u32()
    );
    Selection { index, row: &rows[index], fallback: true }
}
