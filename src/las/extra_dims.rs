//! Numeric types an extra dimension can have and their
//! encoding as the `data_type` tag of the extra bytes vlr.

use crate::LasError;
use std::fmt;

/// Type of one element of an extra dimension
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ScalarType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl ScalarType {
    const ALL: [ScalarType; 10] = [
        ScalarType::U8,
        ScalarType::I8,
        ScalarType::U16,
        ScalarType::I16,
        ScalarType::U32,
        ScalarType::I32,
        ScalarType::U64,
        ScalarType::I64,
        ScalarType::F32,
        ScalarType::F64,
    ];

    pub fn size(self) -> u16 {
        match self {
            ScalarType::U8 | ScalarType::I8 => 1,
            ScalarType::U16 | ScalarType::I16 => 2,
            ScalarType::U32 | ScalarType::I32 | ScalarType::F32 => 4,
            ScalarType::U64 | ScalarType::I64 | ScalarType::F64 => 8,
        }
    }

    /// Type code of a single element of this type, in 1..=10
    fn base_code(self) -> u8 {
        match self {
            ScalarType::U8 => 1,
            ScalarType::I8 => 2,
            ScalarType::U16 => 3,
            ScalarType::I16 => 4,
            ScalarType::U32 => 5,
            ScalarType::I32 => 6,
            ScalarType::U64 => 7,
            ScalarType::I64 => 8,
            ScalarType::F32 => 9,
            ScalarType::F64 => 10,
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            ScalarType::U8 => "u1",
            ScalarType::I8 => "i1",
            ScalarType::U16 => "u2",
            ScalarType::I16 => "i2",
            ScalarType::U32 => "u4",
            ScalarType::I32 => "i4",
            ScalarType::U64 => "u8",
            ScalarType::I64 => "i8",
            ScalarType::F32 => "f4",
            ScalarType::F64 => "f8",
        };
        f.write_str(s)
    }
}

/// data_type of byte arrays whose element count is stored in `options`
pub const UNDOCUMENTED_DATA_TYPE: u8 = 0;

/// Max number of elements a documented data type can describe
pub const MAX_DOCUMENTED_ELEMENTS: u8 = 3;

/// Returns the data_type tag for `num_elements` values of `scalar_type`,
/// `None` when no tag exists for that combination.
pub fn data_type_for(scalar_type: ScalarType, num_elements: u8) -> Option<u8> {
    if num_elements == 0 || num_elements > MAX_DOCUMENTED_ELEMENTS {
        return None;
    }
    Some(scalar_type.base_code() + 10 * (num_elements - 1))
}

/// Inverse of [`data_type_for`]
pub fn type_of_data_type(data_type: u8) -> crate::Result<(ScalarType, u8)> {
    if data_type == UNDOCUMENTED_DATA_TYPE || data_type > 10 * MAX_DOCUMENTED_ELEMENTS {
        return Err(LasError::UnknownExtraBytesType(data_type));
    }
    let num_elements = (data_type - 1) / 10 + 1;
    let scalar_type = ScalarType::ALL[usize::from((data_type - 1) % 10)];
    Ok((scalar_type, num_elements))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_data_type_codes() {
        assert_eq!(data_type_for(ScalarType::U8, 1), Some(1));
        assert_eq!(data_type_for(ScalarType::F64, 1), Some(10));
        assert_eq!(data_type_for(ScalarType::U8, 2), Some(11));
        assert_eq!(data_type_for(ScalarType::F64, 3), Some(30));
        assert_eq!(data_type_for(ScalarType::U8, 4), None);
        assert_eq!(data_type_for(ScalarType::I32, 0), None);
    }

    #[test]
    fn test_every_code_decodes_back() {
        for code in 1..=30u8 {
            let (scalar_type, n) = type_of_data_type(code).unwrap();
            assert_eq!(data_type_for(scalar_type, n), Some(code));
        }
        assert!(type_of_data_type(0).is_err());
        assert!(type_of_data_type(31).is_err());
    }
}
