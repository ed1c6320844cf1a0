use std::io::Cursor;

use las_header::las::{HeaderLayout, KnownVlr};
use las_header::{
    ExtraDimension, LasError, LasHeader, LasHeaderBuilder, PointFormat, RawPoint, ScalarType,
    Version, Vlr,
};

const POINT_FORMAT_ID_OFFSET: usize = 104;
const POINT_SIZE_OFFSET: usize = 105;
const LEGACY_POINT_COUNT_OFFSET: usize = 107;
const POINT_COUNT_1_4_OFFSET: usize = 247;

fn write_header(header: &mut LasHeader) -> Vec<u8> {
    let mut output = Cursor::new(Vec::<u8>::new());
    header.write_to(&mut output, true).unwrap();
    output.into_inner()
}

fn read_header(bytes: Vec<u8>) -> las_header::Result<LasHeader> {
    LasHeader::read_from(&mut Cursor::new(bytes))
}

fn point_formats_of(version: Version) -> Vec<u8> {
    (0..=10u8)
        .filter(|id| las_header::las::is_point_format_compatible(*id, version).unwrap())
        .collect()
}

#[test]
fn test_round_trip_all_versions_and_formats() {
    for version in HeaderLayout::supported_versions() {
        for id in point_formats_of(version) {
            let mut header =
                LasHeader::new(Some(version), Some(PointFormat::new(id).unwrap())).unwrap();
            header.file_source_id = 17;
            header.offsets = [1.5, -2.5, 100.0];
            header.push_vlr(Vlr::new("user", 12, "some data", vec![1, 2, 3]))
                .unwrap();
            header.update(&[
                RawPoint {
                    x: 1,
                    y: 2,
                    z: 3,
                    return_number: 1,
                },
                RawPoint {
                    x: -10,
                    y: 20,
                    z: -30,
                    return_number: 2,
                },
            ]);

            let bytes = write_header(&mut header);
            let layout = HeaderLayout::of(version).unwrap();
            assert_eq!(
                bytes.len(),
                usize::from(layout.header_size) + Vlr::HEADER_SIZE + 3
            );
            assert_eq!(bytes.len() as u32, header.offset_to_point_data());

            let read = read_header(bytes).unwrap();
            assert_eq!(read, header, "{} {}", version, id);
        }
    }
}

#[test]
fn test_header_sizes_written() {
    for (version, size) in &[("1.1", 227u16), ("1.2", 227), ("1.3", 235), ("1.4", 375)] {
        let mut header = LasHeader::new(Some(version.parse().unwrap()), None).unwrap();
        let bytes = write_header(&mut header);
        assert_eq!(bytes.len(), usize::from(*size));
        assert_eq!(&bytes[0..4], b"LASF");
        assert_eq!(&bytes[94..96], &size.to_le_bytes());
        assert_eq!(&bytes[96..100], &u32::from(*size).to_le_bytes());
    }
}

#[test]
fn test_legacy_point_count() {
    let mut header = LasHeader::new(Some(Version::new(1, 2)), None).unwrap();
    header.point_count = 10;
    let bytes = write_header(&mut header);
    assert_eq!(
        &bytes[LEGACY_POINT_COUNT_OFFSET..LEGACY_POINT_COUNT_OFFSET + 4],
        &10u32.to_le_bytes()
    );
    assert_eq!(read_header(bytes).unwrap().point_count, 10);
}

#[test]
fn test_1_4_point_count_uses_64_bits() {
    let mut header = LasHeader::new(Some(Version::new(1, 4)), None).unwrap();
    header.point_count = 5_000_000_000;
    header.number_of_points_by_return[0] = 5_000_000_000;
    let bytes = write_header(&mut header);
    assert_eq!(
        &bytes[LEGACY_POINT_COUNT_OFFSET..LEGACY_POINT_COUNT_OFFSET + 24],
        &[0u8; 24]
    );
    assert_eq!(
        &bytes[POINT_COUNT_1_4_OFFSET..POINT_COUNT_1_4_OFFSET + 8],
        &5_000_000_000u64.to_le_bytes()
    );

    let read = read_header(bytes).unwrap();
    assert_eq!(read.point_count, 5_000_000_000);
    assert_eq!(read.number_of_points_by_return[0], 5_000_000_000);
}

#[test]
fn test_point_count_overflow() {
    let mut header = LasHeader::new(Some(Version::new(1, 2)), None).unwrap();
    header.point_count = u64::from(u32::MAX) + 1;
    let mut output = Vec::<u8>::new();
    match header.write_to(&mut output, true) {
        Err(LasError::PointCountOverflow {
            version,
            point_count,
        }) => {
            assert_eq!(version, "1.2");
            assert_eq!(point_count, u64::from(u32::MAX) + 1);
        }
        other => panic!("{:?}", other),
    }
    assert!(output.is_empty());
}

#[test]
fn test_upper_return_counts_are_not_saved_before_1_4() {
    let mut header = LasHeader::new(Some(Version::new(1, 3)), None).unwrap();
    header.number_of_points_by_return[4] = 3;
    header.number_of_points_by_return[7] = 2;

    let read = read_header(write_header(&mut header)).unwrap();
    assert_eq!(read.number_of_points_by_return[4], 3);
    assert_eq!(read.number_of_points_by_return[7], 0);
}

#[test]
fn test_return_histogram() {
    let mut header = LasHeader::new(None, None).unwrap();
    let points: Vec<RawPoint> = [0u8, 1, 1, 2, 5]
        .iter()
        .map(|return_number| RawPoint {
            return_number: *return_number,
            ..Default::default()
        })
        .collect();
    header.update(&points);
    assert_eq!(header.point_count, 5);
    assert_eq!(
        header.number_of_points_by_return,
        [2, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
    );
}

#[test]
fn test_update_from_raw_records() {
    let point_format = PointFormat::new(1).unwrap();
    let mut records = vec![0u8; usize::from(point_format.size()) * 4];
    for (i, record) in records
        .chunks_exact_mut(usize::from(point_format.size()))
        .enumerate()
    {
        RawPoint {
            x: i as i32 * 100,
            y: 0,
            z: 0,
            return_number: 1,
        }
        .pack_into(record, &point_format);
    }

    let mut header = LasHeader::new(None, Some(point_format.clone())).unwrap();
    header.update(RawPoint::iter_records(&records, &point_format));
    assert_eq!(header.point_count, 4);
    assert_eq!(header.number_of_points_by_return[0], 4);
    assert_eq!(header.maxs[0], 3.0);
}

#[test]
fn test_bad_signature() {
    let mut bytes = write_header(&mut LasHeader::new(None, None).unwrap());
    bytes[0..4].copy_from_slice(b"LASG");
    match read_header(bytes) {
        Err(LasError::BadSignature(signature)) => assert_eq!(&signature, b"LASG"),
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_unsupported_version() {
    let mut bytes = write_header(&mut LasHeader::new(None, None).unwrap());
    bytes[25] = 9;
    assert!(matches!(
        read_header(bytes),
        Err(LasError::UnsupportedVersion(_))
    ));
}

#[test]
fn test_header_size_too_small() {
    let mut bytes = write_header(&mut LasHeader::new(None, None).unwrap());
    bytes[94..96].copy_from_slice(&200u16.to_le_bytes());
    match read_header(bytes) {
        Err(LasError::IncoherentHeaderSize { declared, actual }) => {
            assert_eq!(declared, 200);
            assert_eq!(actual, 227);
        }
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_offset_to_point_data_too_small() {
    let mut header = LasHeader::new(None, None).unwrap();
    header.push_vlr(Vlr::new("a", 1, "", vec![0u8; 10])).unwrap();
    let mut bytes = write_header(&mut header);
    bytes[96..100].copy_from_slice(&250u32.to_le_bytes());
    match read_header(bytes) {
        Err(LasError::IncoherentPointDataOffset { declared, actual }) => {
            assert_eq!(declared, 250);
            assert_eq!(actual, 227 + 54 + 10);
        }
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_incoherent_point_size() {
    let mut bytes = write_header(&mut LasHeader::new(None, None).unwrap());
    bytes[POINT_SIZE_OFFSET..POINT_SIZE_OFFSET + 2].copy_from_slice(&40u16.to_le_bytes());
    match read_header(bytes) {
        Err(LasError::IncoherentPointSize { declared, expected }) => {
            assert_eq!(declared, 40);
            assert_eq!(expected, 34);
        }
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_incompatible_point_format_in_file() {
    let mut bytes = write_header(&mut LasHeader::new(None, None).unwrap());
    bytes[POINT_FORMAT_ID_OFFSET] = 6;
    bytes[POINT_SIZE_OFFSET..POINT_SIZE_OFFSET + 2].copy_from_slice(&30u16.to_le_bytes());
    assert!(matches!(
        read_header(bytes),
        Err(LasError::IncompatibleFormat { .. })
    ));
}

#[test]
fn test_truncated_stream() {
    let bytes = write_header(&mut LasHeader::new(None, None).unwrap());
    assert!(matches!(
        read_header(bytes[..150].to_vec()),
        Err(LasError::IoError(_))
    ));
}

#[test]
fn test_compressed_point_format_id() {
    let mut header = LasHeader::new(None, None).unwrap();
    header.set_compressed(true);
    let bytes = write_header(&mut header);
    assert_eq!(bytes[POINT_FORMAT_ID_OFFSET], 0x83);

    let read = read_header(bytes).unwrap();
    assert!(read.are_points_compressed());
    assert_eq!(read.point_format().id(), 3);
}

#[test]
fn test_extra_header_and_vlr_bytes_are_kept() {
    let mut header = LasHeader::new(Some(Version::new(1, 3)), None).unwrap();
    header.extra_header_bytes = vec![0xAA; 7];
    header.extra_vlr_bytes = vec![0xBB; 2];
    header.push_vlr(Vlr::new("a", 1, "", vec![5; 4])).unwrap();

    let bytes = write_header(&mut header);
    assert_eq!(&bytes[94..96], &(235u16 + 7).to_le_bytes());
    assert_eq!(header.offset_to_point_data(), 235 + 7 + 54 + 4 + 2);
    assert_eq!(bytes.len() as u32, header.offset_to_point_data());

    let read = read_header(bytes).unwrap();
    assert_eq!(read.extra_header_bytes, vec![0xAA; 7]);
    assert_eq!(read.extra_vlr_bytes, vec![0xBB; 2]);
    assert_eq!(read, header);
}

#[test]
fn test_read_stops_at_point_data() {
    let mut header = LasHeader::new(None, None).unwrap();
    header.push_vlr(Vlr::new("a", 1, "", vec![1; 8])).unwrap();
    let mut bytes = write_header(&mut header);
    let offset = bytes.len() as u64;
    bytes.extend_from_slice(&[7u8; 34]);

    let mut src = Cursor::new(bytes);
    LasHeader::read_from(&mut src).unwrap();
    assert_eq!(src.position(), offset);
}

#[test]
fn test_write_without_vlrs() {
    let mut header = LasHeader::new(None, None).unwrap();
    header.push_vlr(Vlr::new("a", 1, "", vec![1; 8])).unwrap();
    write_header(&mut header);
    let offset = header.offset_to_point_data();

    header.point_count = 99;
    let mut patch = Vec::<u8>::new();
    header.write_to(&mut patch, false).unwrap();
    assert_eq!(patch.len(), 227);
    assert_eq!(&patch[96..100], &offset.to_le_bytes());
    assert_eq!(&patch[100..104], &1u32.to_le_bytes());
}

#[test]
fn test_invalid_creation_date_is_unknown() {
    let mut bytes = write_header(&mut LasHeader::new(None, None).unwrap());
    bytes[90..92].copy_from_slice(&400u16.to_le_bytes());
    assert_eq!(read_header(bytes).unwrap().creation_date, None);
}

#[test]
fn test_unknown_creation_date_is_set_when_writing() {
    let mut header = LasHeader::new(None, None).unwrap();
    header.creation_date = None;
    let bytes = write_header(&mut header);
    assert!(header.creation_date.is_some());
    assert_ne!(&bytes[90..94], &[0u8; 4]);
}

#[test]
fn test_strings() {
    let mut header = LasHeader::new(None, None).unwrap();
    header.system_identifier = "x".repeat(40);
    let read = read_header(write_header(&mut header)).unwrap();
    assert_eq!(read.system_identifier, "x".repeat(32));

    header.generating_software = "caf\u{e9}".to_owned();
    let mut output = Vec::<u8>::new();
    assert!(matches!(
        header.write_to(&mut output, true),
        Err(LasError::NonAsciiString { .. })
    ));
    assert!(output.is_empty());
}

#[test]
fn test_uuid_and_global_encoding() {
    let mut header = LasHeader::new(None, None).unwrap();
    header.uuid = uuid::Uuid::from_u128(0x0011_2233_4455_6677_8899_aabb_ccdd_eeff);
    header.global_encoding.set_wkt(true);
    header.global_encoding.set_synthetic_return_numbers(true);
    let bytes = write_header(&mut header);
    assert_eq!(&bytes[6..8], &0b1_1000u16.to_le_bytes());
    // the first 3 groups are little endian
    assert_eq!(&bytes[8..12], &[0x33, 0x22, 0x11, 0x00]);
    assert_eq!(&bytes[16..24], &[0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);

    let read = read_header(bytes).unwrap();
    assert_eq!(read.uuid, header.uuid);
    assert!(read.global_encoding.wkt());
    assert!(!read.global_encoding.waveform_data_packets_internal());
}

#[test]
fn test_builder_output_reads_back() {
    let mut header = LasHeaderBuilder::new()
        .with_version(Version::new(1, 4))
        .with_point_format_id(6)
        .with_extra_dimension(
            ExtraDimension::new("range", ScalarType::U32, 1).with_scales(vec![0.001]),
        )
        .with_offsets([500_000.0, 4_000_000.0, 0.0])
        .with_vlr(Vlr::new("user", 7, "notes", vec![1, 2, 3]))
        .build()
        .unwrap();
    let read = read_header(write_header(&mut header)).unwrap();
    assert_eq!(read.point_format().size(), 34);
    assert!(read.vlrs()[0].is::<las_header::las::ExtraBytesVlr>());
    assert_eq!(read.vlrs()[1].user_id, "user");
    assert_eq!(
        read.point_format().extra_dimension("range").unwrap().scales,
        Some(vec![0.001])
    );
    assert_eq!(
        read.vlrs()
            .iter()
            .filter(|vlr| vlr.user_id == las_header::las::ExtraBytesVlr::USER_ID)
            .count(),
        1
    );
    assert_eq!(read, header);
}
