use crate::las::Version;
use crate::LasError;

/// Which fields of the fixed header region exist for a given version.
///
/// Reading and writing both go through this table so that they
/// always agree on the layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HeaderLayout {
    pub version: Version,
    /// Size in bytes of the fixed region, before the vlrs
    pub header_size: u16,
    /// Start of waveform data packet record (LAS >= 1.3)
    pub has_waveform_offset: bool,
    /// EVLR offset & count, 64 bit point count & 15 returns (LAS >= 1.4)
    pub has_extended_counts: bool,
}

impl HeaderLayout {
    /// Number of return counts the legacy 32 bit fields hold
    pub const LEGACY_NUM_RETURNS: usize = 5;
    /// Number of return counts the 1.4 64 bit fields hold
    pub const NUM_RETURNS: usize = 15;

    const fn new(minor: u8, header_size: u16) -> Self {
        Self {
            version: Version::new(1, minor),
            header_size,
            has_waveform_offset: minor >= 3,
            has_extended_counts: minor >= 4,
        }
    }

    pub fn of(version: Version) -> crate::Result<&'static HeaderLayout> {
        LAYOUTS
            .iter()
            .find(|layout| layout.version == version)
            .ok_or(LasError::UnsupportedVersion(version))
    }

    pub fn supported_versions() -> impl Iterator<Item = Version> {
        LAYOUTS.iter().map(|layout| layout.version)
    }
}

static LAYOUTS: [HeaderLayout; 4] = [
    HeaderLayout::new(1, 227),
    HeaderLayout::new(2, 227),
    HeaderLayout::new(3, 235),
    HeaderLayout::new(4, 375),
];
