//! The Extra Bytes VLR, which describes the extra dimensions
//! appended to the standard fields of each point.

use crate::io::{fixed_bytes_to_string, string_to_fixed_bytes};
use crate::las::extra_dims::{
    data_type_for, type_of_data_type, ScalarType, UNDOCUMENTED_DATA_TYPE,
};
use crate::las::point_format::ExtraDimension;
use crate::las::vlr::KnownVlr;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::warn;
use std::io::{Cursor, Read, Write};

/// Description of one extra dimension, as stored in the Extra Bytes VLR
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExtraBytesStruct {
    pub data_type: u8,
    /// Bit flags, or the number of bytes when `data_type` is 0
    pub options: u8,
    pub name: [u8; 32],
    // no_data, min & max are not interpreted, but kept as read
    pub no_data: [u8; 24],
    pub min: [u8; 24],
    pub max: [u8; 24],
    pub scale: [f64; 3],
    pub offset: [f64; 3],
    pub description: [u8; 32],
}

impl Default for ExtraBytesStruct {
    fn default() -> Self {
        Self {
            data_type: UNDOCUMENTED_DATA_TYPE,
            options: 0,
            name: [0u8; 32],
            no_data: [0u8; 24],
            min: [0u8; 24],
            max: [0u8; 24],
            scale: [0.0; 3],
            offset: [0.0; 3],
            description: [0u8; 32],
        }
    }
}

impl ExtraBytesStruct {
    pub const SIZE: usize = 192;

    pub const NO_DATA_BIT: u8 = 0b0000_0001;
    pub const MIN_BIT: u8 = 0b0000_0010;
    pub const MAX_BIT: u8 = 0b0000_0100;
    pub const SCALE_BIT: u8 = 0b0000_1000;
    pub const OFFSET_BIT: u8 = 0b0001_0000;

    /// Builds the struct describing `dimension`.
    ///
    /// u8 arrays of more than 3 elements use the undocumented data type,
    /// with the number of elements stored in `options`.
    pub fn from_extra_dimension(dimension: &ExtraDimension) -> crate::Result<Self> {
        dimension.validate()?;
        let mut eb_struct = Self {
            name: string_to_fixed_bytes(&dimension.name, "extra dimension name")?,
            description: string_to_fixed_bytes(
                &dimension.description,
                "extra dimension description",
            )?,
            ..Default::default()
        };

        match data_type_for(dimension.scalar_type, dimension.num_elements) {
            Some(data_type) => {
                eb_struct.data_type = data_type;
            }
            None => {
                eb_struct.data_type = UNDOCUMENTED_DATA_TYPE;
                eb_struct.options = dimension.num_elements;
            }
        }

        if let Some(scales) = &dimension.scales {
            eb_struct.options |= Self::SCALE_BIT;
            eb_struct.scale[..scales.len()].copy_from_slice(scales);
        }
        if let Some(offsets) = &dimension.offsets {
            eb_struct.options |= Self::OFFSET_BIT;
            eb_struct.offset[..offsets.len()].copy_from_slice(offsets);
        }
        Ok(eb_struct)
    }

    /// Copies the no_data, min & max values (and their flags) of `other`,
    /// which are not derived from the extra dimension.
    pub fn carry_statistics_from(&mut self, other: &ExtraBytesStruct) {
        if self.is_undocumented() || other.is_undocumented() {
            return;
        }
        let mask = Self::NO_DATA_BIT | Self::MIN_BIT | Self::MAX_BIT;
        self.options = (self.options & !mask) | (other.options & mask);
        self.no_data = other.no_data;
        self.min = other.min;
        self.max = other.max;
    }

    pub fn is_undocumented(&self) -> bool {
        self.data_type == UNDOCUMENTED_DATA_TYPE
    }

    pub fn scale_is_relevant(&self) -> bool {
        !self.is_undocumented() && self.options & Self::SCALE_BIT != 0
    }

    pub fn offset_is_relevant(&self) -> bool {
        !self.is_undocumented() && self.options & Self::OFFSET_BIT != 0
    }

    pub fn name(&self) -> String {
        fixed_bytes_to_string(&self.name)
    }

    pub fn description(&self) -> String {
        fixed_bytes_to_string(&self.description)
    }

    /// Returns the type and number of elements of the dimension
    pub fn type_of_extra_dim(&self) -> crate::Result<(ScalarType, u8)> {
        if self.is_undocumented() {
            Ok((ScalarType::U8, self.options))
        } else {
            type_of_data_type(self.data_type)
        }
    }

    pub fn to_extra_dimension(&self) -> crate::Result<ExtraDimension> {
        let (scalar_type, num_elements) = self.type_of_extra_dim()?;
        let n = usize::from(num_elements);
        let mut dimension = ExtraDimension::new(self.name(), scalar_type, num_elements)
            .with_description(self.description());
        if self.scale_is_relevant() {
            dimension.scales = Some(self.scale[..n].to_vec());
        }
        if self.offset_is_relevant() {
            dimension.offsets = Some(self.offset[..n].to_vec());
        }
        Ok(dimension)
    }

    pub fn read_from<R: Read>(src: &mut R) -> std::io::Result<Self> {
        let mut eb_struct = Self::default();
        src.read_u16::<LittleEndian>()?; // reserved
        eb_struct.data_type = src.read_u8()?;
        eb_struct.options = src.read_u8()?;
        src.read_exact(&mut eb_struct.name)?;
        src.read_u32::<LittleEndian>()?; // unused
        src.read_exact(&mut eb_struct.no_data)?;
        src.read_exact(&mut eb_struct.min)?;
        src.read_exact(&mut eb_struct.max)?;
        src.read_f64_into::<LittleEndian>(&mut eb_struct.scale)?;
        src.read_f64_into::<LittleEndian>(&mut eb_struct.offset)?;
        src.read_exact(&mut eb_struct.description)?;
        Ok(eb_struct)
    }

    pub fn write_to<W: Write>(&self, dst: &mut W) -> std::io::Result<()> {
        dst.write_u16::<LittleEndian>(0)?;
        dst.write_u8(self.data_type)?;
        dst.write_u8(self.options)?;
        dst.write_all(&self.name)?;
        dst.write_u32::<LittleEndian>(0)?;
        dst.write_all(&self.no_data)?;
        dst.write_all(&self.min)?;
        dst.write_all(&self.max)?;
        for value in self.scale.iter().chain(self.offset.iter()) {
            dst.write_f64::<LittleEndian>(*value)?;
        }
        dst.write_all(&self.description)?;
        Ok(())
    }
}

/// The Extra Bytes VLR, one [`ExtraBytesStruct`] per extra dimension
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtraBytesVlr {
    pub extra_bytes_structs: Vec<ExtraBytesStruct>,
}

impl ExtraBytesVlr {
    pub fn from_extra_dimensions(dimensions: &[ExtraDimension]) -> crate::Result<Self> {
        Ok(Self {
            extra_bytes_structs: dimensions
                .iter()
                .map(ExtraBytesStruct::from_extra_dimension)
                .collect::<crate::Result<Vec<_>>>()?,
        })
    }

    pub fn type_of_extra_dims(&self) -> crate::Result<Vec<ExtraDimension>> {
        self.extra_bytes_structs
            .iter()
            .map(ExtraBytesStruct::to_extra_dimension)
            .collect()
    }
}

impl KnownVlr for ExtraBytesVlr {
    const USER_ID: &'static str = "LASF_Spec";
    const RECORD_ID: u16 = 4;
    const DESCRIPTION: &'static str = "Extra Bytes Record";

    fn from_buffer(record_data: &[u8]) -> crate::Result<Self> {
        let num_structs = record_data.len() / ExtraBytesStruct::SIZE;
        let trailing = record_data.len() % ExtraBytesStruct::SIZE;
        if trailing != 0 {
            warn!(
                "Extra bytes vlr data has {} trailing bytes that will be ignored",
                trailing
            );
        }
        let mut src = Cursor::new(record_data);
        let extra_bytes_structs = (0..num_structs)
            .map(|_| ExtraBytesStruct::read_from(&mut src))
            .collect::<std::io::Result<Vec<_>>>()?;
        Ok(Self {
            extra_bytes_structs,
        })
    }

    fn write_to<W: Write>(&self, dst: &mut W) -> crate::Result<()> {
        for eb_struct in &self.extra_bytes_structs {
            eb_struct.write_to(dst)?;
        }
        Ok(())
    }
}
