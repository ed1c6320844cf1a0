use crate::LasError;
use byteorder::{ReadBytesExt, WriteBytesExt};
use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

/// The `major.minor` revision of the LAS specification a file follows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
}

impl Version {
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    pub fn read_from<R: Read>(src: &mut R) -> std::io::Result<Self> {
        Ok(Self {
            major: src.read_u8()?,
            minor: src.read_u8()?,
        })
    }

    pub fn write_to<W: Write>(&self, dst: &mut W) -> std::io::Result<()> {
        dst.write_u8(self.major)?;
        dst.write_u8(self.minor)?;
        Ok(())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = LasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LasError::InvalidVersionString(s.to_owned());
        let mut parts = s.split('.');
        let (major, minor) = match (parts.next(), parts.next(), parts.next()) {
            (Some(major), Some(minor), None) => (major, minor),
            _ => return Err(invalid()),
        };
        Ok(Self {
            major: major.trim().parse().map_err(|_| invalid())?,
            minor: minor.trim().parse().map_err(|_| invalid())?,
        })
    }
}

impl PartialEq<str> for Version {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl<'a> PartialEq<&'a str> for Version {
    fn eq(&self, other: &&'a str) -> bool {
        *self == **other
    }
}
