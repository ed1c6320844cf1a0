//! LAZ convention for the point format id: compressed point data
//! is signaled by setting the high bit of the id stored in the header.

const IS_COMPRESSED_MASK: u8 = 0x80;

pub fn is_point_format_compressed(point_format_id: u8) -> bool {
    point_format_id & IS_COMPRESSED_MASK == IS_COMPRESSED_MASK
}

pub fn compressed_id_to_uncompressed(point_format_id: u8) -> u8 {
    point_format_id & 0x3f
}

pub fn uncompressed_id_to_compressed(point_format_id: u8) -> u8 {
    point_format_id | IS_COMPRESSED_MASK
}
