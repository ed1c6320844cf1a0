//! The LAS header, its vlrs and the point format description.

pub mod compatibility;
pub mod compression;
pub mod extra_bytes;
pub mod extra_dims;
pub mod global_encoding;
pub mod header;
pub mod layout;
pub mod point;
pub mod point_format;
pub mod version;
pub mod vlr;

pub use compatibility::{
    is_point_format_compatible, min_point_format_for_version, preferred_version_for_point_format,
    raise_if_version_not_compatible_with_fmt,
};
pub use extra_bytes::{ExtraBytesStruct, ExtraBytesVlr};
pub use extra_dims::ScalarType;
pub use global_encoding::{GlobalEncoding, GpsTimeType};
pub use header::{LasHeader, LasHeaderBuilder};
pub use layout::HeaderLayout;
pub use point::{LasPoint, RawPoint};
pub use point_format::{ExtraDimension, PointFormat};
pub use version::Version;
pub use vlr::{KnownVlr, Vlr, VlrList};
