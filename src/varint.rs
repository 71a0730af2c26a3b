//! Variable-length integers.
//!
//! A value is split into 7-bit groups, which are written most-significant group first. Every
//! byte except the last has its high bit (0x80) set, which tells the reader that more bytes
//! follow. So 300 (`0b10_0101100`) is written as `[0x82, 0x2c]`.
//!
//! Note that this is big-endian group order. LEB128, and .NET's `Write7BitEncodedInt`, write the
//! least-significant group first, and the two encodings are not compatible for values above 127.

use std::io::{Read, Seek, Write};

use crate::error::{DecodeError, Result, StreamError};
use crate::limits::MAX_VARINT_GROUPS_U64;
use crate::stream::BinaryStream;

const MORE: u8 = 0x80; // bit indicating there are more groups
const MASK: u8 = 0x7f;

/// Returns the number of bytes `write_varint` uses for `value`.
pub fn varint_len(value: u64) -> usize {
    let bits = (u64::BITS - value.leading_zeros()) as usize;
    bits.div_ceil(7).max(1)
}

impl<S: Read + Write + Seek> BinaryStream<S> {
    /// Reads a variable-length integer.
    ///
    /// Reading stops at the first byte whose high bit is clear. The read fails with
    /// `StreamError::Decode` if the integer needs more than `Limits::max_varint_groups` bytes, or
    /// if the value does not fit in a `u64`. The limit is checked before each byte is read, so
    /// a limit of 0 rejects every input without consuming anything. It fails with
    /// `StreamError::UnexpectedEnd` if the stream ends in the middle of the integer.
    pub fn read_varint(&mut self) -> Result<u64> {
        let max_groups = self.limits.max_varint_groups;
        let mut out: u64 = 0;
        let mut groups: usize = 0;

        loop {
            if groups >= max_groups {
                log::debug!("variable-length integer exceeded {max_groups} groups");
                return Err(DecodeError::VarIntTooLong { max_groups }.into());
            }

            let b = self.read_byte()?.ok_or(StreamError::UnexpectedEnd)?;
            groups += 1;

            if out > (u64::MAX >> 7) {
                log::debug!("variable-length integer overflowed after {groups} groups");
                return Err(DecodeError::VarIntOverflow.into());
            }
            out = (out << 7) | (b & MASK) as u64;

            if (b & MORE) == 0 {
                return Ok(out);
            }
        }
    }

    /// Writes a variable-length integer and returns the number of bytes written.
    pub fn write_varint(&mut self, value: u64) -> Result<usize> {
        let mut buf = [0u8; MAX_VARINT_GROUPS_U64];
        let mut len = 0;
        let mut n = value;

        // Least-significant group first, then flip the whole thing.
        buf[len] = n as u8 & MASK;
        len += 1;
        n >>= 7;
        while n != 0 {
            buf[len] = (n as u8 & MASK) | MORE;
            len += 1;
            n >>= 7;
        }

        let encoded = &mut buf[..len];
        encoded.reverse();
        self.write(encoded)
    }

    /// Writes a variable-length integer from a signed value. Negative values cannot be
    /// represented and fail with `StreamError::InvalidArgument`.
    pub fn write_varint_i64(&mut self, value: i64) -> Result<usize> {
        let Ok(value) = u64::try_from(value) else {
            return Err(StreamError::InvalidArgument(
                "variable-length integers cannot be negative",
            ));
        };
        self.write_varint(value)
    }
}
