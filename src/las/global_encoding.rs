//! The global encoding bit field of the header.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

/// Meaning of the GPS time stored in the points
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GpsTimeType {
    /// GPS time is the GPS week time
    WeekTime = 0,
    /// GPS time is standard GPS time (satellite GPS time) minus 1e9
    Standard = 1,
}

/// 16 bits of flags describing format wide settings.
///
/// Bits without a named accessor are kept as they are.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GlobalEncoding {
    value: u16,
}

impl GlobalEncoding {
    pub const GPS_TIME_TYPE_MASK: u16 = 0b0000_0000_0000_0001;
    pub const WAVEFORM_INTERNAL_MASK: u16 = 0b0000_0000_0000_0010;
    pub const WAVEFORM_EXTERNAL_MASK: u16 = 0b0000_0000_0000_0100;
    pub const SYNTHETIC_RETURN_NUMBERS_MASK: u16 = 0b0000_0000_0000_1000;
    /// Only meaningful for LAS >= 1.4
    pub const WKT_MASK: u16 = 0b0000_0000_0001_0000;

    pub fn from_bits(value: u16) -> Self {
        Self { value }
    }

    pub fn bits(&self) -> u16 {
        self.value
    }

    fn is_set(&self, mask: u16) -> bool {
        self.value & mask == mask
    }

    fn set(&mut self, mask: u16, state: bool) {
        if state {
            self.value |= mask;
        } else {
            self.value &= !mask;
        }
    }

    pub fn gps_time_type(&self) -> GpsTimeType {
        if self.is_set(Self::GPS_TIME_TYPE_MASK) {
            GpsTimeType::Standard
        } else {
            GpsTimeType::WeekTime
        }
    }

    pub fn set_gps_time_type(&mut self, gps_time_type: GpsTimeType) {
        self.value &= !Self::GPS_TIME_TYPE_MASK;
        self.value |= gps_time_type as u16 & Self::GPS_TIME_TYPE_MASK;
    }

    pub fn waveform_data_packets_internal(&self) -> bool {
        self.is_set(Self::WAVEFORM_INTERNAL_MASK)
    }

    pub fn set_waveform_data_packets_internal(&mut self, state: bool) {
        self.set(Self::WAVEFORM_INTERNAL_MASK, state)
    }

    pub fn waveform_data_packets_external(&self) -> bool {
        self.is_set(Self::WAVEFORM_EXTERNAL_MASK)
    }

    pub fn set_waveform_data_packets_external(&mut self, state: bool) {
        self.set(Self::WAVEFORM_EXTERNAL_MASK, state)
    }

    pub fn synthetic_return_numbers(&self) -> bool {
        self.is_set(Self::SYNTHETIC_RETURN_NUMBERS_MASK)
    }

    pub fn set_synthetic_return_numbers(&mut self, state: bool) {
        self.set(Self::SYNTHETIC_RETURN_NUMBERS_MASK, state)
    }

    pub fn wkt(&self) -> bool {
        self.is_set(Self::WKT_MASK)
    }

    pub fn set_wkt(&mut self, state: bool) {
        self.set(Self::WKT_MASK, state)
    }

    pub fn read_from<R: Read>(src: &mut R) -> std::io::Result<Self> {
        Ok(Self::from_bits(src.read_u16::<LittleEndian>()?))
    }

    pub fn write_to<W: Write>(&self, dst: &mut W) -> std::io::Result<()> {
        dst.write_u16::<LittleEndian>(self.value)
    }
}
