use std::ops::RangeInclusive;

use log::error;
use smallvec::SmallVec;
use thiserror::Error;

use crate::LOG_TARGET;

/// Code points kept on the stack before the scratch buffer spills to the heap.
const INLINE: usize = 64;

const MAX_CODE_POINT: u32 = 0x10_FFFF;
const SURROGATES: RangeInclusive<u32> = 0xD800..=0xDFFF;
const CONTINUATION: RangeInclusive<u8> = 0x80..=0xBF;

const HIGH_SURROGATE_BASE: u32 = 0xD800;
const LOW_SURROGATE_BASE: u32 = 0xDC00;
const SUPPLEMENTARY_BASE: u32 = 0x1_0000;

/// Why a byte sequence could not be decoded.
///
/// Offsets are byte positions into the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid lead byte {byte:#04x} at offset {offset}")]
    InvalidLeadByte { offset: usize, byte: u8 },

    #[error("sequence starting at offset {offset} ends before its continuation bytes")]
    Truncated { offset: usize },

    #[error("invalid continuation byte {byte:#04x} at offset {offset}")]
    InvalidContinuation { offset: usize, byte: u8 },

    #[error("surrogate code point U+{code_point:04X} encoded at offset {offset}")]
    Surrogate { offset: usize, code_point: u32 },

    #[error("code point {code_point:#x} at offset {offset} is beyond U+10FFFF")]
    OutOfRange { offset: usize, code_point: u32 },

    #[error("output buffer holds {capacity} code units but {needed} are needed")]
    BufferTooSmall { needed: usize, capacity: usize },
}

impl DecodeError {
    /// True for every variant caused by the input bytes themselves.
    #[inline]
    pub fn is_malformed(&self) -> bool {
        !matches!(self, DecodeError::BufferTooSmall { .. })
    }
}

/// Emit the diagnostic for a failed decode and hand the error back.
fn report(err: DecodeError) -> DecodeError {
    if err.is_malformed() {
        error!(target: LOG_TARGET, "Not a UTF-8 string: {err}");
    }
    err
}

#[inline]
fn is_continuation(b: u8) -> bool {
    CONTINUATION.contains(&b)
}

/// Decode the code point whose lead byte sits at `start`.
///
/// Returns the code point and the number of bytes it occupied.
fn decode_one(bytes: &[u8], start: usize) -> Result<(u32, usize), DecodeError> {
    let lead = bytes[start];

    let (mut value, todo) = match lead {
        0x00..=0x7F => return Ok((u32::from(lead), 1)),
        0xC0..=0xDF => (u32::from(lead & 0x1F), 1),
        0xE0..=0xEF => (u32::from(lead & 0x0F), 2),
        0xF0..=0xF7 => (u32::from(lead & 0x07), 3),
        // 0x80..=0xBF is a continuation byte, 0xF8.. is never valid.
        _ => {
            return Err(DecodeError::InvalidLeadByte {
                offset: start,
                byte: lead,
            });
        }
    };

    for k in 1..=todo {
        let offset = start + k;
        let Some(&b) = bytes.get(offset) else {
            return Err(DecodeError::Truncated { offset: start });
        };
        if !is_continuation(b) {
            return Err(DecodeError::InvalidContinuation { offset, byte: b });
        }
        value = (value << 6) | u32::from(b & 0x3F);
    }

    if SURROGATES.contains(&value) {
        return Err(DecodeError::Surrogate {
            offset: start,
            code_point: value,
        });
    }
    if value > MAX_CODE_POINT {
        return Err(DecodeError::OutOfRange {
            offset: start,
            code_point: value,
        });
    }

    Ok((value, todo + 1))
}

/// Iterator over the code points of a UTF-8 byte slice.
///
/// Yields at most one error, after which it is exhausted.
pub struct CodePoints<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> CodePoints<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl Iterator for CodePoints<'_> {
    type Item = Result<u32, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.bytes.len() {
            return None;
        }

        match decode_one(self.bytes, self.pos) {
            Ok((cp, len)) => {
                self.pos += len;
                Some(Ok(cp))
            }
            Err(e) => {
                self.pos = self.bytes.len();
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() - self.pos;
        (usize::from(remaining > 0), Some(remaining))
    }
}

/// Number of UTF-16 code units needed for a valid code point.
#[inline]
fn units_for(cp: u32) -> usize {
    if cp < SUPPLEMENTARY_BASE { 1 } else { 2 }
}

/// Encode one validated code point as UTF-16.
///
/// Only the first `units_for(cp)` entries of the result are meaningful.
#[inline]
fn encode_utf16(cp: u32) -> [u16; 2] {
    if cp < SUPPLEMENTARY_BASE {
        [cp as u16, 0]
    } else {
        let v = cp - SUPPLEMENTARY_BASE;
        [
            ((v >> 10) + HIGH_SURROGATE_BASE) as u16,
            ((v & 0x3FF) + LOW_SURROGATE_BASE) as u16,
        ]
    }
}

/// Decode UTF-8 bytes into a freshly allocated UTF-16 buffer.
///
/// Nothing is returned unless every byte of the input decodes.
pub fn decode_utf8_to_utf16(bytes: &[u8]) -> Result<Vec<u16>, DecodeError> {
    let mut out = Vec::with_capacity(bytes.len());

    for cp in CodePoints::new(bytes) {
        let cp = cp.map_err(report)?;
        let units = encode_utf16(cp);
        out.extend_from_slice(&units[..units_for(cp)]);
    }

    Ok(out)
}

/// Decode UTF-8 bytes into a caller-owned buffer, returning the number of
/// code units written.
///
/// The input is validated and measured before `out` is touched, so a failed
/// call leaves the buffer exactly as it was. A buffer as long as the input
/// is always large enough.
pub fn decode_utf8_to_utf16_into(bytes: &[u8], out: &mut [u16]) -> Result<usize, DecodeError> {
    let code_points: SmallVec<[u32; INLINE]> = CodePoints::new(bytes)
        .collect::<Result<_, _>>()
        .map_err(report)?;

    let needed: usize = code_points.iter().map(|&cp| units_for(cp)).sum();
    if needed > out.len() {
        return Err(report(DecodeError::BufferTooSmall {
            needed,
            capacity: out.len(),
        }));
    }

    let mut i = 0;
    for &cp in &code_points {
        let n = units_for(cp);
        out[i..i + n].copy_from_slice(&encode_utf16(cp)[..n]);
        i += n;
    }

    Ok(needed)
}

/// Validate `bytes` and return how many UTF-16 code units they decode to.
pub fn utf16_len(bytes: &[u8]) -> Result<usize, DecodeError> {
    CodePoints::new(bytes).try_fold(0usize, |acc, cp| {
        cp.map(|cp| acc + units_for(cp)).map_err(report)
    })
}

#[cfg(test)]
#[path = "utf8_tests.rs"]
mod tests;
