//! Which point formats each LAS version allows.

use crate::las::Version;
use crate::LasError;

const VERSION_TO_POINT_FORMATS: [(Version, &[u8]); 4] = [
    (Version::new(1, 1), &[0, 1]),
    (Version::new(1, 2), &[0, 1, 2, 3]),
    (Version::new(1, 3), &[0, 1, 2, 3, 4, 5]),
    (Version::new(1, 4), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]),
];

fn point_formats_of(version: Version) -> crate::Result<&'static [u8]> {
    VERSION_TO_POINT_FORMATS
        .iter()
        .find(|(v, _)| *v == version)
        .map(|(_, ids)| *ids)
        .ok_or(LasError::UnsupportedVersion(version))
}

pub fn is_point_format_compatible(point_format_id: u8, version: Version) -> crate::Result<bool> {
    Ok(point_formats_of(version)?.contains(&point_format_id))
}

pub fn raise_if_version_not_compatible_with_fmt(
    point_format_id: u8,
    version: Version,
) -> crate::Result<()> {
    if is_point_format_compatible(point_format_id, version)? {
        Ok(())
    } else {
        Err(LasError::IncompatibleFormat {
            point_format_id,
            version,
        })
    }
}

pub fn min_point_format_for_version(version: Version) -> crate::Result<u8> {
    point_formats_of(version)?
        .iter()
        .copied()
        .min()
        .ok_or(LasError::UnsupportedVersion(version))
}

/// The oldest version supporting all of the point formats
/// of the same family
pub fn preferred_version_for_point_format(point_format_id: u8) -> crate::Result<Version> {
    match point_format_id {
        0..=3 => Ok(Version::new(1, 2)),
        4 | 5 => Ok(Version::new(1, 3)),
        6..=10 => Ok(Version::new(1, 4)),
        _ => Err(LasError::UnsupportedPointFormat(point_format_id)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_compatibility_table() {
        let v12 = Version::new(1, 2);
        let v14 = Version::new(1, 4);
        assert!(is_point_format_compatible(3, v12).unwrap());
        assert!(!is_point_format_compatible(6, v12).unwrap());
        assert!(is_point_format_compatible(10, v14).unwrap());
        assert!(!is_point_format_compatible(2, Version::new(1, 1)).unwrap());
        assert!(is_point_format_compatible(0, Version::new(1, 5)).is_err());
    }

    #[test]
    fn test_raise_names_the_pair() {
        match raise_if_version_not_compatible_with_fmt(7, Version::new(1, 3)) {
            Err(LasError::IncompatibleFormat {
                point_format_id,
                version,
            }) => {
                assert_eq!(point_format_id, 7);
                assert_eq!(version, Version::new(1, 3));
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_preferred_version_is_compatible() {
        for id in 0..=10u8 {
            let version = preferred_version_for_point_format(id).unwrap();
            assert!(is_point_format_compatible(id, version).unwrap());
        }
        assert!(preferred_version_for_point_format(11).is_err());
    }

    #[test]
    fn test_min_point_format() {
        for (version, _) in VERSION_TO_POINT_FORMATS.iter() {
            assert_eq!(min_point_format_for_version(*version).unwrap(), 0);
        }
    }
}
