//! Binary input and output helpers shared by the header and the vlrs.

use crate::LasError;
use log::warn;
use std::io::{Read, Write};

/// Keeps track of how many bytes were read.
///
/// Lets the header reader know where it is in the stream without
/// requiring `Seek`.
#[derive(Debug)]
pub struct Tracking<R> {
    inner: R,
    position: u64,
}

impl<R: Read> Read for Tracking<R> {
    fn read(&mut self, buffer: &mut [u8]) -> std::io::Result<usize> {
        let count = self.inner.read(buffer)?;
        self.position += count as u64;
        Ok(count)
    }
}

impl<R> Tracking<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Number of bytes read since the creation of this tracker
    pub fn position(&self) -> u64 {
        self.position
    }
}

pub(crate) fn read_bytes<R: Read>(src: &mut R, count: u64) -> std::io::Result<Vec<u8>> {
    // the count comes from the file, it may be garbage
    let mut bytes = Vec::with_capacity(count.min(u64::from(u16::MAX)) as usize);
    let read = src.by_ref().take(count).read_to_end(&mut bytes)?;
    if (read as u64) < count {
        return Err(std::io::ErrorKind::UnexpectedEof.into());
    }
    Ok(bytes)
}

/// Reads a fixed size, NUL padded string
pub(crate) fn read_fixed_string<R: Read>(src: &mut R, len: usize) -> std::io::Result<String> {
    let mut bytes = vec![0u8; len];
    src.read_exact(&mut bytes)?;
    Ok(fixed_bytes_to_string(&bytes))
}

pub(crate) fn fixed_bytes_to_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

/// Encodes `value` on exactly `N` bytes, NUL padded.
///
/// Too long values are truncated (and a warning is emitted),
/// non ASCII values are an error.
pub(crate) fn string_to_fixed_bytes<const N: usize>(
    value: &str,
    field: &'static str,
) -> crate::Result<[u8; N]> {
    if !value.is_ascii() {
        return Err(LasError::NonAsciiString {
            field,
            value: value.to_owned(),
        });
    }
    let bytes = value.as_bytes();
    if bytes.len() > N {
        warn!(
            "{} '{}' does not fit into the {} maximum bytes, it will be truncated",
            field, value, N
        );
    }
    let mut fixed = [0u8; N];
    let len = bytes.len().min(N);
    fixed[..len].copy_from_slice(&bytes[..len]);
    Ok(fixed)
}

pub(crate) fn write_fixed_string<W: Write, const N: usize>(
    dst: &mut W,
    value: &str,
    field: &'static str,
) -> crate::Result<()> {
    dst.write_all(&string_to_fixed_bytes::<N>(value, field)?)?;
    Ok(())
}
