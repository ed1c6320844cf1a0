//! The few point fields the header statistics are computed from.

use crate::las::PointFormat;
use crate::packers::Packable;

/// Accessors to the fields of a point needed to update a header
pub trait LasPoint {
    /// Raw (unscaled) X coordinate
    fn x(&self) -> i32;
    /// Raw (unscaled) Y coordinate
    fn y(&self) -> i32;
    /// Raw (unscaled) Z coordinate
    fn z(&self) -> i32;
    /// 0 means the return number is not specified
    fn return_number(&self) -> u8;
}

impl<'a, P: LasPoint> LasPoint for &'a P {
    fn x(&self) -> i32 {
        P::x(*self)
    }

    fn y(&self) -> i32 {
        P::y(*self)
    }

    fn z(&self) -> i32 {
        P::z(*self)
    }

    fn return_number(&self) -> u8 {
        P::return_number(*self)
    }
}

#[derive(Default, Copy, Clone, PartialEq, Eq, Debug)]
pub struct RawPoint {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub return_number: u8,
}

impl RawPoint {
    /// Offset of the byte holding the return number,
    /// in every point format.
    const RETURN_BYTE: usize = 14;

    /// Decodes the point from the start of a raw point record
    /// of the given format.
    ///
    /// # Panics
    ///
    /// Panics if `record` is shorter than 15 bytes
    pub fn unpack_from(record: &[u8], point_format: &PointFormat) -> Self {
        let return_byte = record[Self::RETURN_BYTE];
        let return_number = if point_format.is_extended() {
            return_byte & 0b0000_1111
        } else {
            return_byte & 0b0000_0111
        };
        Self {
            x: i32::unpack_from(&record[0..4]),
            y: i32::unpack_from(&record[4..8]),
            z: i32::unpack_from(&record[8..12]),
            return_number,
        }
    }

    /// Writes the fields into a raw point record of the given format,
    /// the other bits of the return number byte are kept.
    ///
    /// # Panics
    ///
    /// Panics if `record` is shorter than 15 bytes
    pub fn pack_into(&self, record: &mut [u8], point_format: &PointFormat) {
        self.x.pack_into(&mut record[0..4]);
        self.y.pack_into(&mut record[4..8]);
        self.z.pack_into(&mut record[8..12]);
        let mask = if point_format.is_extended() {
            0b0000_1111
        } else {
            0b0000_0111
        };
        let byte = &mut record[Self::RETURN_BYTE];
        *byte = (*byte & !mask) | (self.return_number & mask);
    }

    /// Decodes every point of a buffer of packed point records.
    /// A trailing incomplete record is ignored.
    pub fn iter_records<'a>(
        points: &'a [u8],
        point_format: &'a PointFormat,
    ) -> impl Iterator<Item = RawPoint> + 'a {
        points
            .chunks_exact(usize::from(point_format.size()))
            .map(move |record| RawPoint::unpack_from(record, point_format))
    }
}

impl LasPoint for RawPoint {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }

    fn z(&self) -> i32 {
        self.z
    }

    fn return_number(&self) -> u8 {
        self.return_number
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_legacy_return_number_is_3_bits() {
        let fmt = PointFormat::new(3).unwrap();
        let mut record = vec![0u8; usize::from(fmt.size())];
        // number of returns = 5, return number = 2, scan direction flag
        record[14] = 0b0110_1010;
        let point = RawPoint::unpack_from(&record, &fmt);
        assert_eq!(point.return_number, 2);
    }

    #[test]
    fn test_extended_return_number_is_4_bits() {
        let fmt = PointFormat::new(6).unwrap();
        let point = RawPoint {
            x: -1,
            y: 2,
            z: i32::MAX,
            return_number: 13,
        };
        let mut record = vec![0u8; usize::from(fmt.size())];
        record[14] = 0b1111_0000;
        point.pack_into(&mut record, &fmt);
        assert_eq!(record[14], 0b1111_1101);
        assert_eq!(RawPoint::unpack_from(&record, &fmt), point);
    }

    #[test]
    fn test_iter_records() {
        let fmt = PointFormat::new(0).unwrap();
        let mut buffer = vec![0u8; usize::from(fmt.size()) * 3 + 5];
        for (i, record) in buffer.chunks_exact_mut(20).enumerate() {
            let point = RawPoint {
                x: i as i32,
                y: 0,
                z: 0,
                return_number: 1,
            };
            point.pack_into(record, &fmt);
        }
        let xs: Vec<i32> = RawPoint::iter_records(&buffer, &fmt).map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 1, 2]);
    }
}
