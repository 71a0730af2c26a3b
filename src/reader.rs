use std::io::{Read, Seek, Write};

use zerocopy::byteorder::{BE, I16, I32, I64, LE, U16, U32, U64};
use zerocopy::FromBytes;

use crate::error::{Result, StreamError};
use crate::order::ByteOrder;
use crate::stream::BinaryStream;

/// Width in bytes of the native integer, `u64`. `read_int` rejects anything wider.
pub const NATIVE_INT_SIZE: usize = core::mem::size_of::<u64>();

#[inline(always)]
pub(crate) fn check_int_size(size: usize) -> Result<()> {
    if size > NATIVE_INT_SIZE {
        return Err(StreamError::Overflow {
            size,
            max: NATIVE_INT_SIZE,
        });
    }
    Ok(())
}

/// Sign-extends the low `size` bytes of `value`.
#[inline(always)]
pub(crate) fn sign_extend(value: u64, size: usize) -> i64 {
    if size == 0 || size >= NATIVE_INT_SIZE {
        return value as i64;
    }
    let shift = (64 - 8 * size) as u32;
    ((value << shift) as i64) >> shift
}

/// Reading methods.
///
/// There are two families here. The "lenient" readers (`read_byte`, `read_int`, `read_float`,
/// `read_double`) accept a short read at the end of the stream and decode whatever bytes were
/// available. The "strict" readers (`read_cbytes`, `read_value` and the typed `read_u16` ..
/// `read_i64`) fail with `StreamError::UnexpectedEnd` instead.
impl<S: Read + Write + Seek> BinaryStream<S> {
    /// Reads a single byte. Returns `Ok(None)` at the end of the stream; only a transport failure
    /// is an error.
    pub fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        match self.fill(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf[0])),
        }
    }

    /// Reads an unsigned integer that is `size` bytes wide on the stream.
    ///
    /// `size` may be anything from 0 to `NATIVE_INT_SIZE`. Larger sizes fail with
    /// `StreamError::Overflow` before anything is read, so the cursor does not move.
    ///
    /// If the stream ends before `size` bytes are available, the bytes that were read are
    /// decoded as if they were the whole integer. Callers that need to detect this should use
    /// the strict readers, or check `eof()`.
    pub fn read_int(&mut self, size: usize, order: ByteOrder) -> Result<u64> {
        check_int_size(size)?;
        let mut buf = [0u8; NATIVE_INT_SIZE];
        let n = self.fill(&mut buf[..size])?;
        let bytes = &mut buf[..n];
        order.order_to_msb_first(bytes);
        Ok(bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
    }

    /// Reads a two's complement integer that is `size` bytes wide on the stream, and sign-extends
    /// it. Same size rules and short-read behavior as `read_int`.
    pub fn read_int_signed(&mut self, size: usize, order: ByteOrder) -> Result<i64> {
        let value = self.read_int(size, order)?;
        Ok(sign_extend(value, size))
    }

    /// Reads an IEEE-754 binary32 value. The 4 bytes are read as an integer and reinterpreted;
    /// NaN payloads and signed zeros survive unchanged.
    pub fn read_float(&mut self, order: ByteOrder) -> Result<f32> {
        Ok(f32::from_bits(self.read_int(4, order)? as u32))
    }

    /// Reads an IEEE-754 binary64 value. See `read_float`.
    pub fn read_double(&mut self, order: ByteOrder) -> Result<f64> {
        Ok(f64::from_bits(self.read_int(8, order)?))
    }

    /// Reads a `bool`. Any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        match self.read_byte()? {
            Some(b) => Ok(b != 0),
            None => Err(StreamError::UnexpectedEnd),
        }
    }

    /// Reads a small array of bytes, with a constant length.
    #[inline(always)]
    pub fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        if self.fill(&mut buf)? < N {
            return Err(StreamError::UnexpectedEnd);
        }
        Ok(buf)
    }

    /// Reads any value that can be built from raw bytes, such as the byte-order aware types in
    /// `zerocopy::byteorder`.
    pub fn read_value<T: FromBytes>(&mut self) -> Result<T> {
        let bytes = self.read_exact_bytes(core::mem::size_of::<T>())?;
        T::read_from_bytes(&bytes).map_err(|_| StreamError::UnexpectedEnd)
    }

    /// Reads a single `u8` value.
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_byte()?.ok_or(StreamError::UnexpectedEnd)
    }

    /// Reads a single `i8` value.
    #[inline(always)]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads a `u16` in the given byte order.
    pub fn read_u16(&mut self, order: ByteOrder) -> Result<u16> {
        Ok(match order {
            ByteOrder::BigEndian => self.read_value::<U16<BE>>()?.get(),
            ByteOrder::LittleEndian => self.read_value::<U16<LE>>()?.get(),
        })
    }

    /// Reads a `u32` in the given byte order.
    pub fn read_u32(&mut self, order: ByteOrder) -> Result<u32> {
        Ok(match order {
            ByteOrder::BigEndian => self.read_value::<U32<BE>>()?.get(),
            ByteOrder::LittleEndian => self.read_value::<U32<LE>>()?.get(),
        })
    }

    /// Reads a `u64` in the given byte order.
    pub fn read_u64(&mut self, order: ByteOrder) -> Result<u64> {
        Ok(match order {
            ByteOrder::BigEndian => self.read_value::<U64<BE>>()?.get(),
            ByteOrder::LittleEndian => self.read_value::<U64<LE>>()?.get(),
        })
    }

    /// Reads an `i16` in the given byte order.
    pub fn read_i16(&mut self, order: ByteOrder) -> Result<i16> {
        Ok(match order {
            ByteOrder::BigEndian => self.read_value::<I16<BE>>()?.get(),
            ByteOrder::LittleEndian => self.read_value::<I16<LE>>()?.get(),
        })
    }

    /// Reads an `i32` in the given byte order.
    pub fn read_i32(&mut self, order: ByteOrder) -> Result<i32> {
        Ok(match order {
            ByteOrder::BigEndian => self.read_value::<I32<BE>>()?.get(),
            ByteOrder::LittleEndian => self.read_value::<I32<LE>>()?.get(),
        })
    }

    /// Reads an `i64` in the given byte order.
    pub fn read_i64(&mut self, order: ByteOrder) -> Result<i64> {
        Ok(match order {
            ByteOrder::BigEndian => self.read_value::<I64<BE>>()?.get(),
            ByteOrder::LittleEndian => self.read_value::<I64<LE>>()?.get(),
        })
    }
}
