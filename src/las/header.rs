//! The public header block of a LAS file, with its vlrs.

use crate::io::{read_bytes, read_fixed_string, string_to_fixed_bytes, Tracking};
use crate::las::compatibility::{
    min_point_format_for_version, preferred_version_for_point_format,
    raise_if_version_not_compatible_with_fmt,
};
use crate::las::compression::{
    compressed_id_to_uncompressed, is_point_format_compressed, uncompressed_id_to_compressed,
};
use crate::las::extra_bytes::{ExtraBytesStruct, ExtraBytesVlr};
use crate::las::layout::HeaderLayout;
use crate::las::point::LasPoint;
use crate::las::point_format::{ExtraDimension, PointFormat};
use crate::las::vlr::{KnownVlr, Vlr, VlrList};
use crate::las::{GlobalEncoding, Version};
use crate::LasError;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use chrono::{Datelike, Local, NaiveDate};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt;
use std::io::{Read, Write};
use uuid::Uuid;

pub const LAS_FILE_SIGNATURE: &[u8; 4] = b"LASF";

pub const DEFAULT_VERSION: Version = Version::new(1, 2);
pub const DEFAULT_POINT_FORMAT_ID: u8 = 3;
pub const DEFAULT_SYSTEM_IDENTIFIER: &str = "OTHER";
pub const DEFAULT_GENERATING_SOFTWARE: &str = "las-header";
pub const DEFAULT_SCALES: [f64; 3] = [0.01, 0.01, 0.01];

const SYSTEM_IDENTIFIER_LEN: usize = 32;
const GENERATING_SOFTWARE_LEN: usize = 32;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Year 0 or day 0 means the creation date is not known
fn date_from_year_and_day(year: u16, day_of_year: u16) -> Option<NaiveDate> {
    if year == 0 || day_of_year == 0 {
        if year != 0 || day_of_year != 0 {
            warn!(
                "Creation date year {}, day {} is incomplete, it will be ignored",
                year, day_of_year
            );
        }
        return None;
    }
    let date = NaiveDate::from_yo_opt(i32::from(year), u32::from(day_of_year));
    if date.is_none() {
        warn!(
            "Day {} does not exist in year {}, the creation date will be ignored",
            day_of_year, year
        );
    }
    date
}

fn year_and_day_of(date: Option<NaiveDate>) -> (u16, u16) {
    match date {
        Some(date) => match u16::try_from(date.year()) {
            Ok(year) => (year, date.ordinal() as u16),
            Err(_) => {
                warn!("Year {} cannot be stored, it will be written as 0", date.year());
                (0, 0)
            }
        },
        None => (0, 0),
    }
}

/// The LAS header.
///
/// The version and point format are only reachable through setters
/// which keep them compatible, and the Extra Bytes VLR is kept in sync
/// with the extra dimensions of the point format.
#[derive(Debug, Clone, PartialEq)]
pub struct LasHeader {
    pub file_source_id: u16,
    pub global_encoding: GlobalEncoding,
    pub uuid: Uuid,
    version: Version,
    pub system_identifier: String,
    pub generating_software: String,
    point_format: PointFormat,
    /// `None` when the file does not say (or says something impossible)
    pub creation_date: Option<NaiveDate>,
    pub point_count: u64,
    pub scales: [f64; 3],
    pub offsets: [f64; 3],
    pub maxs: [f64; 3],
    pub mins: [f64; 3],
    /// Slot `i` counts the points with return number `i + 1`.
    /// Only the first 5 slots are saved for versions older than 1.4
    pub number_of_points_by_return: [u64; HeaderLayout::NUM_RETURNS],
    vlrs: VlrList,
    /// Bytes between the end of the known header fields and the first vlr
    pub extra_header_bytes: Vec<u8>,
    /// Bytes between the last vlr and the start of the points
    pub extra_vlr_bytes: Vec<u8>,
    pub start_of_waveform_data_packet_record: u64,
    pub start_of_first_evlr: u64,
    pub number_of_evlrs: u32,
    offset_to_point_data: u32,
    are_points_compressed: bool,
}

impl LasHeader {
    /// Creates a header, missing parts are deduced from the given ones.
    ///
    /// - no version: the version preferred by the point format is used
    /// - no point format: the smallest point format of the version is used
    /// - neither: LAS 1.2 with point format 3
    pub fn new(version: Option<Version>, point_format: Option<PointFormat>) -> crate::Result<Self> {
        let (version, point_format) = match (version, point_format) {
            (Some(version), Some(point_format)) => (version, point_format),
            (Some(version), None) => (
                version,
                PointFormat::new(min_point_format_for_version(version)?)?,
            ),
            (None, Some(point_format)) => (
                preferred_version_for_point_format(point_format.id())?,
                point_format,
            ),
            (None, None) => (DEFAULT_VERSION, PointFormat::new(DEFAULT_POINT_FORMAT_ID)?),
        };
        raise_if_version_not_compatible_with_fmt(point_format.id(), version)?;
        let layout = HeaderLayout::of(version)?;

        let mut header = Self {
            file_source_id: 0,
            global_encoding: GlobalEncoding::default(),
            uuid: Uuid::nil(),
            version,
            system_identifier: DEFAULT_SYSTEM_IDENTIFIER.to_owned(),
            generating_software: DEFAULT_GENERATING_SOFTWARE.to_owned(),
            point_format: PointFormat::new(point_format.id())?,
            creation_date: Some(today()),
            point_count: 0,
            scales: DEFAULT_SCALES,
            offsets: [0.0; 3],
            maxs: [0.0; 3],
            mins: [0.0; 3],
            number_of_points_by_return: [0; HeaderLayout::NUM_RETURNS],
            vlrs: VlrList::new(),
            extra_header_bytes: vec![],
            extra_vlr_bytes: vec![],
            start_of_waveform_data_packet_record: 0,
            start_of_first_evlr: 0,
            number_of_evlrs: 0,
            offset_to_point_data: u32::from(layout.header_size),
            are_points_compressed: false,
        };
        header.set_point_format(point_format)?;
        Ok(header)
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn point_format(&self) -> &PointFormat {
        &self.point_format
    }

    pub fn vlrs(&self) -> &VlrList {
        &self.vlrs
    }

    /// Offset to the point data, as read or as computed by the last `write_to`
    pub fn offset_to_point_data(&self) -> u32 {
        self.offset_to_point_data
    }

    pub fn are_points_compressed(&self) -> bool {
        self.are_points_compressed
    }

    /// When set, the point format id is written with its compression bit
    pub fn set_compressed(&mut self, state: bool) {
        self.are_points_compressed = state;
    }

    /// Changes the version, which must support the current point format.
    ///
    /// Versions older than 1.4 only have 5 return counts,
    /// the counts above are lost when downgrading.
    pub fn set_version(&mut self, version: Version) -> crate::Result<()> {
        raise_if_version_not_compatible_with_fmt(self.point_format.id(), version)?;
        let layout = HeaderLayout::of(version)?;
        if !layout.has_extended_counts {
            let upper_counts =
                &mut self.number_of_points_by_return[HeaderLayout::LEGACY_NUM_RETURNS..];
            if upper_counts.iter().any(|count| *count != 0) {
                warn!(
                    "Version {} only has {} return counts, the counts above are dropped",
                    version,
                    HeaderLayout::LEGACY_NUM_RETURNS
                );
                upper_counts.iter_mut().for_each(|count| *count = 0);
            }
        }
        self.version = version;
        Ok(())
    }

    /// Number of return counts the current version has
    fn num_return_counts(&self) -> usize {
        match HeaderLayout::of(self.version) {
            Ok(layout) if layout.has_extended_counts => HeaderLayout::NUM_RETURNS,
            _ => HeaderLayout::LEGACY_NUM_RETURNS,
        }
    }

    /// Changes the point format, which must be supported by the current version.
    pub fn set_point_format(&mut self, point_format: PointFormat) -> crate::Result<()> {
        raise_if_version_not_compatible_with_fmt(point_format.id(), self.version)?;
        let extra_bytes_vlr = self.extra_bytes_vlr_for(&point_format)?;
        self.point_format = point_format;
        self.replace_extra_bytes_vlr(extra_bytes_vlr);
        Ok(())
    }

    /// Changes both at once, for when neither of the two intermediate
    /// states would be valid (e.g 1.2 & 3 to 1.4 & 6).
    pub fn set_version_and_point_format(
        &mut self,
        version: Version,
        point_format: PointFormat,
    ) -> crate::Result<()> {
        raise_if_version_not_compatible_with_fmt(point_format.id(), version)?;
        let old_version = std::mem::replace(&mut self.version, version);
        if let Err(e) = self.set_point_format(point_format) {
            self.version = old_version;
            return Err(e);
        }
        // runs the downgrade check
        self.set_version(version)
    }

    pub fn add_extra_dimension(&mut self, dimension: ExtraDimension) -> crate::Result<()> {
        self.add_extra_dimensions(vec![dimension])
    }

    /// Adds all the dimensions, or none of them if one is invalid.
    pub fn add_extra_dimensions<I>(&mut self, dimensions: I) -> crate::Result<()>
    where
        I: IntoIterator<Item = ExtraDimension>,
    {
        let mut point_format = self.point_format.clone();
        for dimension in dimensions {
            point_format.add_extra_dimension(dimension)?;
        }
        self.set_point_format(point_format)
    }

    pub fn remove_extra_dimension(&mut self, name: &str) -> crate::Result<ExtraDimension> {
        let mut point_format = self.point_format.clone();
        let removed = point_format.remove_extra_dimension(name)?;
        self.set_point_format(point_format)?;
        Ok(removed)
    }

    /// Appends a vlr.
    ///
    /// The Extra Bytes VLR cannot be pushed, it is derived
    /// from the extra dimensions of the point format.
    pub fn push_vlr(&mut self, vlr: Vlr) -> crate::Result<()> {
        if vlr.is::<ExtraBytesVlr>() {
            return Err(LasError::ExtraBytesVlrIsManaged);
        }
        self.vlrs.push(vlr);
        Ok(())
    }

    /// Removes the vlrs with the given ids and returns them
    pub fn extract_vlrs(&mut self, user_id: &str, record_id: u16) -> crate::Result<Vec<Vlr>> {
        if user_id == ExtraBytesVlr::USER_ID && record_id == ExtraBytesVlr::RECORD_ID {
            return Err(LasError::ExtraBytesVlrIsManaged);
        }
        Ok(self.vlrs.extract_matching(user_id, record_id))
    }

    /// Builds the Extra Bytes VLR describing `point_format`.
    ///
    /// The no_data, min & max values of the current vlr are kept
    /// for the dimensions that did not change type.
    fn extra_bytes_vlr_for(&self, point_format: &PointFormat) -> crate::Result<Option<Vlr>> {
        if point_format.extra_dimensions().is_empty() {
            return Ok(None);
        }
        let previous: Vec<ExtraBytesStruct> = self
            .vlrs
            .iter()
            .filter(|vlr| vlr.is::<ExtraBytesVlr>())
            .filter_map(|vlr| ExtraBytesVlr::from_vlr(vlr).ok())
            .flat_map(|eb_vlr| eb_vlr.extra_bytes_structs)
            .collect();

        let mut eb_vlr = ExtraBytesVlr::from_extra_dimensions(point_format.extra_dimensions())?;
        for eb_struct in &mut eb_vlr.extra_bytes_structs {
            if let Some(old) = previous
                .iter()
                .find(|old| old.name == eb_struct.name && old.data_type == eb_struct.data_type)
            {
                eb_struct.carry_statistics_from(old);
            }
        }
        let vlr = eb_vlr.to_vlr()?;
        if vlr.data.len() > usize::from(u16::MAX) {
            return Err(LasError::VlrTooLarge {
                user_id: vlr.user_id,
                record_id: vlr.record_id,
                len: vlr.data.len(),
            });
        }
        Ok(Some(vlr))
    }

    fn replace_extra_bytes_vlr(&mut self, extra_bytes_vlr: Option<Vlr>) {
        self.vlrs.replace::<ExtraBytesVlr>(extra_bytes_vlr);
    }

    /// Accumulates the statistics of a new batch of points:
    /// point count, bounds & return counts.
    ///
    /// Return number 0 is not counted, nor are return numbers above
    /// the number of return counts of the version (5 before 1.4, 15 after).
    pub fn update<I>(&mut self, points: I)
    where
        I: IntoIterator,
        I::Item: LasPoint,
    {
        let mut raw_maxs = [i32::MIN; 3];
        let mut raw_mins = [i32::MAX; 3];
        let mut return_counts = BTreeMap::<u8, u64>::new();
        let mut num_points = 0u64;

        for point in points {
            let coordinates = [point.x(), point.y(), point.z()];
            for (axis, value) in coordinates.iter().enumerate() {
                raw_maxs[axis] = raw_maxs[axis].max(*value);
                raw_mins[axis] = raw_mins[axis].min(*value);
            }
            *return_counts.entry(point.return_number()).or_insert(0) += 1;
            num_points += 1;
        }

        if num_points == 0 {
            return;
        }

        for axis in 0..3 {
            let max = f64::from(raw_maxs[axis]) * self.scales[axis] + self.offsets[axis];
            let min = f64::from(raw_mins[axis]) * self.scales[axis] + self.offsets[axis];
            self.maxs[axis] = self.maxs[axis].max(max);
            self.mins[axis] = self.mins[axis].min(min);
        }

        let num_return_counts = self.num_return_counts();
        for (return_number, count) in return_counts {
            if return_number == 0 {
                continue;
            }
            let slot = usize::from(return_number) - 1;
            // the map is sorted, the remaining ones are out of range too
            if slot >= num_return_counts {
                debug!("{} points have a return number >= {}", count, return_number);
                break;
            }
            self.number_of_points_by_return[slot] += count;
        }
        self.point_count += num_points;
    }

    /// Forgets the statistics of the points, as if none were written yet
    pub fn partial_reset(&mut self) {
        self.creation_date = Some(today());
        self.point_count = 0;
        self.number_of_points_by_return = [0; HeaderLayout::NUM_RETURNS];
        self.maxs = [0.0; 3];
        self.mins = [0.0; 3];
        self.start_of_first_evlr = 0;
        self.number_of_evlrs = 0;
    }

    /// Reads the header and its vlrs.
    ///
    /// The source is left positioned at the start of the point data.
    pub fn read_from<R: Read>(src: &mut R) -> crate::Result<Self> {
        let mut src = Tracking::new(src);

        let mut signature = [0u8; 4];
        src.read_exact(&mut signature)?;
        if &signature != LAS_FILE_SIGNATURE {
            return Err(LasError::BadSignature(signature));
        }
        let file_source_id = src.read_u16::<LittleEndian>()?;
        let global_encoding = GlobalEncoding::read_from(&mut src)?;
        let mut uuid_bytes = [0u8; 16];
        src.read_exact(&mut uuid_bytes)?;
        let uuid = Uuid::from_bytes_le(uuid_bytes);
        let version = Version::read_from(&mut src)?;
        let layout = HeaderLayout::of(version)?;

        let system_identifier = read_fixed_string(&mut src, SYSTEM_IDENTIFIER_LEN)?;
        let generating_software = read_fixed_string(&mut src, GENERATING_SOFTWARE_LEN)?;
        let day_of_year = src.read_u16::<LittleEndian>()?;
        let year = src.read_u16::<LittleEndian>()?;
        let creation_date = date_from_year_and_day(year, day_of_year);

        let header_size = src.read_u16::<LittleEndian>()?;
        let offset_to_point_data = src.read_u32::<LittleEndian>()?;
        let number_of_vlrs = src.read_u32::<LittleEndian>()?;
        let point_format_id = src.read_u8()?;
        let point_size = src.read_u16::<LittleEndian>()?;

        let mut point_count = u64::from(src.read_u32::<LittleEndian>()?);
        let mut number_of_points_by_return = [0u64; HeaderLayout::NUM_RETURNS];
        for slot in &mut number_of_points_by_return[..HeaderLayout::LEGACY_NUM_RETURNS] {
            *slot = u64::from(src.read_u32::<LittleEndian>()?);
        }

        let mut scales = [0.0f64; 3];
        let mut offsets = [0.0f64; 3];
        let mut maxs = [0.0f64; 3];
        let mut mins = [0.0f64; 3];
        src.read_f64_into::<LittleEndian>(&mut scales)?;
        src.read_f64_into::<LittleEndian>(&mut offsets)?;
        for i in 0..3 {
            maxs[i] = src.read_f64::<LittleEndian>()?;
            mins[i] = src.read_f64::<LittleEndian>()?;
        }

        let mut start_of_waveform_data_packet_record = 0;
        if layout.has_waveform_offset {
            start_of_waveform_data_packet_record = src.read_u64::<LittleEndian>()?;
        }

        let mut start_of_first_evlr = 0;
        let mut number_of_evlrs = 0;
        if layout.has_extended_counts {
            start_of_first_evlr = src.read_u64::<LittleEndian>()?;
            number_of_evlrs = src.read_u32::<LittleEndian>()?;
            // supersede the legacy fields
            point_count = src.read_u64::<LittleEndian>()?;
            for slot in &mut number_of_points_by_return {
                *slot = src.read_u64::<LittleEndian>()?;
            }
        }

        let position = src.position();
        if position > u64::from(header_size) {
            return Err(LasError::IncoherentHeaderSize {
                declared: header_size,
                actual: position,
            });
        }
        let extra_header_bytes = read_bytes(&mut src, u64::from(header_size) - position)?;

        let mut vlrs = VlrList::read_from(&mut src, number_of_vlrs)?;

        let position = src.position();
        if position > u64::from(offset_to_point_data) {
            return Err(LasError::IncoherentPointDataOffset {
                declared: offset_to_point_data,
                actual: position,
            });
        }
        let extra_vlr_bytes = read_bytes(&mut src, u64::from(offset_to_point_data) - position)?;

        let are_points_compressed = is_point_format_compressed(point_format_id);
        let mut point_format = PointFormat::new(compressed_id_to_uncompressed(point_format_id))?;
        raise_if_version_not_compatible_with_fmt(point_format.id(), version)?;

        if let Some(eb_vlr) = vlrs.get::<ExtraBytesVlr>()? {
            if point_size == point_format.size() {
                warn!(
                    "There is an extra bytes vlr but the point size ({}) has no room for extra bytes, the vlr will be dropped",
                    point_size
                );
                vlrs.extract::<ExtraBytesVlr>();
            } else {
                for dimension in eb_vlr.type_of_extra_dims()? {
                    point_format.add_extra_dimension(dimension)?;
                }
                let num_dropped = vlrs.retain_first::<ExtraBytesVlr>();
                if num_dropped > 0 {
                    warn!(
                        "{} extra bytes vlrs found, only the first one is kept",
                        num_dropped + 1
                    );
                }
            }
        }

        if point_size != point_format.size() {
            return Err(LasError::IncoherentPointSize {
                declared: point_size,
                expected: point_format.size(),
            });
        }

        Ok(Self {
            file_source_id,
            global_encoding,
            uuid,
            version,
            system_identifier,
            generating_software,
            point_format,
            creation_date,
            point_count,
            scales,
            offsets,
            maxs,
            mins,
            number_of_points_by_return,
            vlrs,
            extra_header_bytes,
            extra_vlr_bytes,
            start_of_waveform_data_packet_record,
            start_of_first_evlr,
            number_of_evlrs,
            offset_to_point_data,
            are_points_compressed,
        })
    }

    /// Writes the header.
    ///
    /// With `write_vlrs`, the extra header bytes, the vlrs and the extra vlr
    /// bytes follow the header fields and the offset to point data is updated.
    /// Without it, only the header fields are written (to patch them in place)
    /// and the offset to point data is written as is.
    ///
    /// The extra header bytes and extra vlr bytes read from a file are
    /// written back as they were, the declared header size includes the
    /// extra header bytes.
    ///
    /// A missing creation date is set to today.
    pub fn write_to<W: Write>(&mut self, dst: &mut W, write_vlrs: bool) -> crate::Result<()> {
        let layout = HeaderLayout::of(self.version)?;

        // everything that can fail is checked before the first byte is written
        if !layout.has_extended_counts {
            let legacy_counts = &self.number_of_points_by_return[..HeaderLayout::LEGACY_NUM_RETURNS];
            for count in std::iter::once(&self.point_count).chain(legacy_counts) {
                if *count > u64::from(u32::MAX) {
                    return Err(LasError::PointCountOverflow {
                        version: self.version,
                        point_count: *count,
                    });
                }
            }
        }
        let system_identifier = string_to_fixed_bytes::<SYSTEM_IDENTIFIER_LEN>(
            &self.system_identifier,
            "system identifier",
        )?;
        let generating_software = string_to_fixed_bytes::<GENERATING_SOFTWARE_LEN>(
            &self.generating_software,
            "generating software",
        )?;
        let header_size =
            u16::try_from(usize::from(layout.header_size) + self.extra_header_bytes.len())
                .map_err(|_| LasError::ExtraHeaderBytesTooLarge(self.extra_header_bytes.len()))?;

        let vlrs_bytes = if write_vlrs {
            let mut vlrs_bytes = Vec::with_capacity(self.vlrs.serialized_size());
            self.vlrs.write_to(&mut vlrs_bytes)?;
            let offset = u64::from(header_size)
                + vlrs_bytes.len() as u64
                + self.extra_vlr_bytes.len() as u64;
            self.offset_to_point_data =
                u32::try_from(offset).map_err(|_| LasError::PointDataOffsetOverflow(offset))?;
            Some(vlrs_bytes)
        } else {
            None
        };

        let creation_date = *self.creation_date.get_or_insert_with(today);
        let (year, day_of_year) = year_and_day_of(Some(creation_date));

        let point_format_id = if self.are_points_compressed {
            uncompressed_id_to_compressed(self.point_format.id())
        } else {
            self.point_format.id()
        };

        dst.write_all(LAS_FILE_SIGNATURE)?;
        dst.write_u16::<LittleEndian>(self.file_source_id)?;
        self.global_encoding.write_to(dst)?;
        dst.write_all(&self.uuid.to_bytes_le())?;
        self.version.write_to(dst)?;
        dst.write_all(&system_identifier)?;
        dst.write_all(&generating_software)?;
        dst.write_u16::<LittleEndian>(day_of_year)?;
        dst.write_u16::<LittleEndian>(year)?;
        dst.write_u16::<LittleEndian>(header_size)?;
        dst.write_u32::<LittleEndian>(self.offset_to_point_data)?;
        dst.write_u32::<LittleEndian>(self.vlrs.len() as u32)?;
        dst.write_u8(point_format_id)?;
        dst.write_u16::<LittleEndian>(self.point_format.size())?;

        // 1.4 files store the counts in the 64 bit fields and
        // zero the legacy ones
        if layout.has_extended_counts {
            dst.write_u32::<LittleEndian>(0)?;
            for _ in 0..HeaderLayout::LEGACY_NUM_RETURNS {
                dst.write_u32::<LittleEndian>(0)?;
            }
        } else {
            dst.write_u32::<LittleEndian>(self.point_count as u32)?;
            for count in &self.number_of_points_by_return[..HeaderLayout::LEGACY_NUM_RETURNS] {
                dst.write_u32::<LittleEndian>(*count as u32)?;
            }
        }

        for value in self.scales.iter().chain(self.offsets.iter()) {
            dst.write_f64::<LittleEndian>(*value)?;
        }
        for i in 0..3 {
            dst.write_f64::<LittleEndian>(self.maxs[i])?;
            dst.write_f64::<LittleEndian>(self.mins[i])?;
        }

        if layout.has_waveform_offset {
            dst.write_u64::<LittleEndian>(self.start_of_waveform_data_packet_record)?;
        }

        if layout.has_extended_counts {
            dst.write_u64::<LittleEndian>(self.start_of_first_evlr)?;
            dst.write_u32::<LittleEndian>(self.number_of_evlrs)?;
            dst.write_u64::<LittleEndian>(self.point_count)?;
            for count in &self.number_of_points_by_return {
                dst.write_u64::<LittleEndian>(*count)?;
            }
        }

        if let Some(vlrs_bytes) = vlrs_bytes {
            dst.write_all(&self.extra_header_bytes)?;
            dst.write_all(&vlrs_bytes)?;
            dst.write_all(&self.extra_vlr_bytes)?;
        }
        Ok(())
    }
}

impl fmt::Display for LasHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<LasHeader({}, {})>", self.version, self.point_format)
    }
}

/// Builds a [`LasHeader`], the checks happen in `build`.
#[derive(Debug, Clone, Default)]
pub struct LasHeaderBuilder {
    version: Option<Version>,
    point_format_id: Option<u8>,
    extra_dimensions: Vec<ExtraDimension>,
    scales: Option<[f64; 3]>,
    offsets: Option<[f64; 3]>,
    system_identifier: Option<String>,
    generating_software: Option<String>,
    compressed: bool,
    vlrs: Vec<Vlr>,
}

impl LasHeaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_point_format_id(mut self, point_format_id: u8) -> Self {
        self.point_format_id = Some(point_format_id);
        self
    }

    pub fn with_extra_dimension(mut self, dimension: ExtraDimension) -> Self {
        self.extra_dimensions.push(dimension);
        self
    }

    pub fn with_scales(mut self, scales: [f64; 3]) -> Self {
        self.scales = Some(scales);
        self
    }

    pub fn with_offsets(mut self, offsets: [f64; 3]) -> Self {
        self.offsets = Some(offsets);
        self
    }

    pub fn with_system_identifier<S: Into<String>>(mut self, system_identifier: S) -> Self {
        self.system_identifier = Some(system_identifier.into());
        self
    }

    pub fn with_generating_software<S: Into<String>>(mut self, generating_software: S) -> Self {
        self.generating_software = Some(generating_software.into());
        self
    }

    pub fn with_compression(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }

    pub fn with_vlr(mut self, vlr: Vlr) -> Self {
        self.vlrs.push(vlr);
        self
    }

    pub fn build(self) -> crate::Result<LasHeader> {
        let point_format = self.point_format_id.map(PointFormat::new).transpose()?;
        let mut header = LasHeader::new(self.version, point_format)?;
        header.add_extra_dimensions(self.extra_dimensions)?;
        if let Some(scales) = self.scales {
            header.scales = scales;
        }
        if let Some(offsets) = self.offsets {
            header.offsets = offsets;
        }
        if let Some(system_identifier) = self.system_identifier {
            header.system_identifier = system_identifier;
        }
        if let Some(generating_software) = self.generating_software {
            header.generating_software = generating_software;
        }
        header.set_compressed(self.compressed);
        for vlr in self.vlrs {
            header.push_vlr(vlr)?;
        }
        Ok(header)
    }
}
