//! Reading & writing of the header of LAS (and LAZ) files.
//!
//! [`LasHeader`] holds the public header block and the VLRs of a file.
//! It keeps the version and the point format compatible and keeps the
//! Extra Bytes VLR in sync with the extra dimensions of the point format.
//!
//! # Examples
//!
//! ```
//! use las_header::{ExtraDimension, LasError, LasHeader, RawPoint, ScalarType, Version};
//! use std::io::Cursor;
//!
//! # fn main() -> Result<(), LasError> {
//! let mut header = LasHeader::new(Some(Version::new(1, 4)), None)?;
//! header.add_extra_dimension(ExtraDimension::new("temperature", ScalarType::F32, 1))?;
//!
//! // fold the points written so far into the header
//! header.update(&[
//!     RawPoint { x: 10, y: 20, z: 30, return_number: 1 },
//!     RawPoint { x: -5, y: 0, z: 12, return_number: 2 },
//! ]);
//!
//! let mut output = Cursor::new(Vec::<u8>::new());
//! header.write_to(&mut output, true)?;
//! assert_eq!(output.get_ref().len() as u32, header.offset_to_point_data());
//!
//! output.set_position(0);
//! let read_header = LasHeader::read_from(&mut output)?;
//! assert_eq!(read_header.point_count, 2);
//! assert_eq!(read_header.point_format().size(), 24);
//! assert_eq!(read_header, header);
//! # Ok(())
//! # }
//! ```
//!
//! Versions and point formats that do not go together are refused:
//!
//! ```
//! use las_header::{LasHeader, PointFormat, Version};
//!
//! let point_format = PointFormat::new(6).unwrap();
//! assert!(LasHeader::new(Some(Version::new(1, 2)), Some(point_format)).is_err());
//! ```
//!
//! [`LasHeader`]: las/header/struct.LasHeader.html

pub mod errors;
pub mod io;
pub mod las;
pub(crate) mod packers;

pub use errors::LasError;
pub use las::{
    ExtraDimension, GlobalEncoding, GpsTimeType, LasHeader, LasHeaderBuilder, LasPoint,
    PointFormat, RawPoint, ScalarType, Version, Vlr, VlrList,
};

pub type Result<T> = std::result::Result<T, LasError>;
