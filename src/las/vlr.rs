//! Variable Length Records, stored between the header and the points.

use crate::io::{read_fixed_string, write_fixed_string};
use crate::LasError;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};
use std::ops::Index;

const USER_ID_LEN: usize = 16;
const DESCRIPTION_LEN: usize = 32;

/// A raw VLR, its `data` is not interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vlr {
    pub user_id: String,
    pub record_id: u16,
    pub description: String,
    pub data: Vec<u8>,
}

impl Vlr {
    /// Size of the record header that precedes the data
    pub const HEADER_SIZE: usize = 54;

    pub fn new<U, D>(user_id: U, record_id: u16, description: D, data: Vec<u8>) -> Self
    where
        U: Into<String>,
        D: Into<String>,
    {
        Self {
            user_id: user_id.into(),
            record_id,
            description: description.into(),
            data,
        }
    }

    pub fn read_from<R: Read>(src: &mut R) -> crate::Result<Self> {
        src.read_u16::<LittleEndian>()?; // reserved
        let user_id = read_fixed_string(src, USER_ID_LEN)?;
        let record_id = src.read_u16::<LittleEndian>()?;
        let record_length = src.read_u16::<LittleEndian>()?;
        let description = read_fixed_string(src, DESCRIPTION_LEN)?;

        let mut data = vec![0u8; usize::from(record_length)];
        src.read_exact(&mut data)?;

        Ok(Self {
            user_id,
            record_id,
            description,
            data,
        })
    }

    pub fn write_to<W: Write>(&self, dst: &mut W) -> crate::Result<()> {
        if self.data.len() > usize::from(u16::MAX) {
            return Err(LasError::VlrTooLarge {
                user_id: self.user_id.clone(),
                record_id: self.record_id,
                len: self.data.len(),
            });
        }
        dst.write_u16::<LittleEndian>(0)?;
        write_fixed_string::<_, USER_ID_LEN>(dst, &self.user_id, "vlr user id")?;
        dst.write_u16::<LittleEndian>(self.record_id)?;
        dst.write_u16::<LittleEndian>(self.data.len() as u16)?;
        write_fixed_string::<_, DESCRIPTION_LEN>(dst, &self.description, "vlr description")?;
        dst.write_all(&self.data)?;
        Ok(())
    }

    /// Number of bytes `write_to` produces
    pub fn serialized_size(&self) -> usize {
        Self::HEADER_SIZE + self.data.len()
    }

    pub fn is<K: KnownVlr>(&self) -> bool {
        K::matches(self)
    }
}

/// A VLR whose data has a known meaning, identified
/// by its `(USER_ID, RECORD_ID)` pair.
pub trait KnownVlr: Sized {
    const USER_ID: &'static str;
    const RECORD_ID: u16;
    const DESCRIPTION: &'static str;

    /// Tries to read the Vlr information from the record_data buffer
    fn from_buffer(record_data: &[u8]) -> crate::Result<Self>;

    /// Writes the record_data, the vlr header is not written
    fn write_to<W: Write>(&self, dst: &mut W) -> crate::Result<()>;

    fn matches(vlr: &Vlr) -> bool {
        vlr.record_id == Self::RECORD_ID && vlr.user_id == Self::USER_ID
    }

    fn from_vlr(vlr: &Vlr) -> crate::Result<Self> {
        Self::from_buffer(&vlr.data)
    }

    fn to_vlr(&self) -> crate::Result<Vlr> {
        let mut data = Vec::<u8>::new();
        self.write_to(&mut data)?;
        Ok(Vlr::new(
            Self::USER_ID,
            Self::RECORD_ID,
            Self::DESCRIPTION,
            data,
        ))
    }
}

/// The ordered collection of VLRs of a file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VlrList {
    vlrs: Vec<Vlr>,
}

impl VlrList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vlrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vlrs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<Vlr> {
        self.vlrs.iter()
    }

    pub fn push(&mut self, vlr: Vlr) {
        self.vlrs.push(vlr);
    }

    /// Parses the first vlr of type `K`, if there is one
    pub fn get<K: KnownVlr>(&self) -> crate::Result<Option<K>> {
        self.vlrs
            .iter()
            .find(|vlr| K::matches(vlr))
            .map(K::from_vlr)
            .transpose()
    }

    /// Removes all vlrs with the given ids and returns them
    pub fn extract_matching(&mut self, user_id: &str, record_id: u16) -> Vec<Vlr> {
        let (extracted, kept): (Vec<Vlr>, Vec<Vlr>) = std::mem::take(&mut self.vlrs)
            .into_iter()
            .partition(|vlr| vlr.record_id == record_id && vlr.user_id == user_id);
        self.vlrs = kept;
        extracted
    }

    /// Removes all vlrs of type `K` and returns them
    pub fn extract<K: KnownVlr>(&mut self) -> Vec<Vlr> {
        self.extract_matching(K::USER_ID, K::RECORD_ID)
    }

    /// Keeps the first vlr of type `K` in place and removes the ones after it.
    /// Returns the number of removed vlrs.
    pub fn retain_first<K: KnownVlr>(&mut self) -> usize {
        let len_before = self.vlrs.len();
        let mut seen = false;
        self.vlrs.retain(|vlr| {
            if !K::matches(vlr) {
                return true;
            }
            let is_first = !seen;
            seen = true;
            is_first
        });
        len_before - self.vlrs.len()
    }

    /// Removes all vlrs of type `K` and puts `vlr` where the first one was,
    /// or at the end if there was none.
    pub fn replace<K: KnownVlr>(&mut self, vlr: Option<Vlr>) {
        let position = self.vlrs.iter().position(|v| K::matches(v));
        self.extract::<K>();
        if let Some(vlr) = vlr {
            let index = position.unwrap_or_else(|| self.vlrs.len());
            self.vlrs.insert(index, vlr);
        }
    }

    pub fn read_from<R: Read>(src: &mut R, num_to_read: u32) -> crate::Result<Self> {
        let mut vlrs = Vec::with_capacity(num_to_read.min(256) as usize);
        for _ in 0..num_to_read {
            vlrs.push(Vlr::read_from(src)?);
        }
        Ok(Self { vlrs })
    }

    pub fn write_to<W: Write>(&self, dst: &mut W) -> crate::Result<()> {
        for vlr in &self.vlrs {
            vlr.write_to(dst)?;
        }
        Ok(())
    }

    pub fn serialized_size(&self) -> usize {
        self.vlrs.iter().map(Vlr::serialized_size).sum()
    }
}

impl Index<usize> for VlrList {
    type Output = Vlr;

    fn index(&self, index: usize) -> &Vlr {
        &self.vlrs[index]
    }
}

impl<'a> IntoIterator for &'a VlrList {
    type Item = &'a Vlr;
    type IntoIter = std::slice::Iter<'a, Vlr>;

    fn into_iter(self) -> Self::IntoIter {
        self.vlrs.iter()
    }
}
