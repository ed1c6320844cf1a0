//! Definitions of error related things.

use crate::las::Version;
use std::fmt;

/// Errors of this crate
#[derive(Debug)]
#[non_exhaustive]
pub enum LasError {
    /// The first 4 bytes of the stream are not `LASF`
    BadSignature([u8; 4]),
    /// The string could not be parsed as `major.minor`
    InvalidVersionString(String),
    /// The version is not one of the known LAS revisions
    UnsupportedVersion(Version),
    /// The point format id is not supported
    UnsupportedPointFormat(u8),
    /// The point format cannot be used with the version
    IncompatibleFormat { point_format_id: u8, version: Version },
    /// The header size written in the file is smaller than the fields
    /// its version requires
    IncoherentHeaderSize { declared: u16, actual: u64 },
    /// The VLRs end after the offset to the point data
    IncoherentPointDataOffset { declared: u32, actual: u64 },
    /// The point size declared in the header does not match the point format
    IncoherentPointSize { declared: u16, expected: u16 },
    /// The point count does not fit in the legacy 32 bit field
    PointCountOverflow { version: Version, point_count: u64 },
    /// The header size does not fit in 16 bits once the extra header bytes are added
    ExtraHeaderBytesTooLarge(usize),
    /// The offset to the point data does not fit in 32 bits
    PointDataOffsetOverflow(u64),
    /// A fixed size string field contains non ASCII characters
    NonAsciiString { field: &'static str, value: String },
    /// The payload of a VLR does not fit in its 16 bit length field
    VlrTooLarge { user_id: String, record_id: u16, len: usize },
    /// The data type tag of an extra bytes struct is not known
    UnknownExtraBytesType(u8),
    /// The extra dimension cannot be added to a point format
    InvalidExtraDimension { name: String, reason: String },
    /// No extra dimension with that name exists
    NoSuchExtraDimension(String),
    /// Extra bytes VLRs are managed by the header
    ExtraBytesVlrIsManaged,
    /// Wrapper around and io error from the std lib
    IoError(std::io::Error),
}

impl From<std::io::Error> for LasError {
    fn from(e: std::io::Error) -> Self {
        LasError::IoError(e)
    }
}

impl fmt::Display for LasError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            LasError::BadSignature(sig) => write!(
                f,
                "Invalid file signature {:?}, expected \"LASF\"",
                String::from_utf8_lossy(sig)
            ),
            LasError::InvalidVersionString(s) => {
                write!(f, "'{}' is not a valid version, expected 'major.minor'", s)
            }
            LasError::UnsupportedVersion(version) => {
                write!(f, "Version {} is not supported", version)
            }
            LasError::UnsupportedPointFormat(id) => {
                write!(f, "Point format {} is not supported", id)
            }
            LasError::IncompatibleFormat {
                point_format_id,
                version,
            } => write!(
                f,
                "Point format {} is not compatible with version {}",
                point_format_id, version
            ),
            LasError::IncoherentHeaderSize { declared, actual } => write!(
                f,
                "Incoherent header size: the header declares {} bytes but its fields span {} bytes",
                declared, actual
            ),
            LasError::IncoherentPointDataOffset { declared, actual } => write!(
                f,
                "Incoherent offset to point data: declared {} but the vlrs end at {}",
                declared, actual
            ),
            LasError::IncoherentPointSize { declared, expected } => write!(
                f,
                "Incoherent point size: the header declares {} bytes, the point format has {}",
                declared, expected
            ),
            LasError::PointCountOverflow {
                version,
                point_count,
            } => write!(
                f,
                "Version {} cannot save clouds with more than {} points (got {})",
                version,
                u32::MAX,
                point_count
            ),
            LasError::ExtraHeaderBytesTooLarge(len) => write!(
                f,
                "{} extra header bytes make the header larger than {} bytes",
                len,
                u16::MAX
            ),
            LasError::PointDataOffsetOverflow(offset) => write!(
                f,
                "The offset to point data ({}) does not fit in 32 bits",
                offset
            ),
            LasError::NonAsciiString { field, value } => {
                write!(f, "The {} '{}' is not ASCII", field, value)
            }
            LasError::VlrTooLarge {
                user_id,
                record_id,
                len,
            } => write!(
                f,
                "Vlr ({}, {}) has {} bytes of data, more than the {} allowed",
                user_id,
                record_id,
                len,
                u16::MAX
            ),
            LasError::UnknownExtraBytesType(t) => {
                write!(f, "Extra bytes data type {} is unknown", t)
            }
            LasError::InvalidExtraDimension { name, reason } => {
                write!(f, "Invalid extra dimension '{}': {}", name, reason)
            }
            LasError::NoSuchExtraDimension(name) => {
                write!(f, "No extra dimension named '{}'", name)
            }
            LasError::ExtraBytesVlrIsManaged => write!(
                f,
                "The extra bytes vlr is derived from the point format, add extra dimensions instead"
            ),
            LasError::IoError(e) => write!(f, "IoError: {}", e),
        }
    }
}

impl std::error::Error for LasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LasError::IoError(e) => Some(e),
            _ => None,
        }
    }
}
