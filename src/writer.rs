use std::io::{Read, Seek, Write};

use zerocopy::byteorder::{BE, I16, I32, I64, LE, U16, U32, U64};
use zerocopy::{Immutable, IntoBytes};

use crate::error::Result;
use crate::order::ByteOrder;
use crate::stream::BinaryStream;

/// Writing methods. Each returns the number of bytes written.
impl<S: Read + Write + Seek> BinaryStream<S> {
    /// Writes a single byte.
    pub fn write_byte(&mut self, value: u8) -> Result<usize> {
        self.write(&[value])
    }

    /// Writes the low `size` bytes of `value` in the given byte order.
    ///
    /// Exactly `size` bytes are written. There is no overflow check: if `value` does not fit in
    /// `size` bytes, the high-order bytes are dropped. If `size` is larger than 8, the extra
    /// high-order bytes are zero.
    pub fn write_int(&mut self, value: u64, size: usize, order: ByteOrder) -> Result<usize> {
        let mut bytes = Vec::with_capacity(size);
        let mut n = value;
        for _ in 0..size {
            bytes.push(n as u8);
            n >>= 8;
        }
        order.lsb_first_to_order(&mut bytes);
        self.write(&bytes)
    }

    /// Writes the low `size` bytes of the two's complement representation of `value`.
    pub fn write_int_signed(
        &mut self,
        value: i64,
        size: usize,
        order: ByteOrder,
    ) -> Result<usize> {
        self.write_int(value as u64, size, order)
    }

    /// Writes an `f32` as its raw 4-byte bit pattern.
    pub fn write_float(&mut self, value: f32, order: ByteOrder) -> Result<usize> {
        self.write_int(value.to_bits() as u64, 4, order)
    }

    /// Writes an `f64` as its raw 8-byte bit pattern.
    pub fn write_double(&mut self, value: f64, order: ByteOrder) -> Result<usize> {
        self.write_int(value.to_bits(), 8, order)
    }

    /// Writes a `bool` value. True is encoded as 1. False is encoded as 0.
    pub fn write_bool(&mut self, value: bool) -> Result<usize> {
        self.write_byte(value as u8)
    }

    /// Writes a small, fixed-size array of bytes.
    pub fn write_cbytes<const N: usize>(&mut self, value: [u8; N]) -> Result<usize> {
        self.write(&value)
    }

    /// Writes the in-memory bytes of `value`.
    pub fn write_value<T: IntoBytes + Immutable>(&mut self, value: &T) -> Result<usize> {
        self.write(value.as_bytes())
    }

    /// Writes a single `u8` value.
    pub fn write_u8(&mut self, value: u8) -> Result<usize> {
        self.write_byte(value)
    }

    /// Writes a single `i8` value.
    pub fn write_i8(&mut self, value: i8) -> Result<usize> {
        self.write_byte(value as u8)
    }

    /// Writes a `u16` in the given byte order.
    pub fn write_u16(&mut self, value: u16, order: ByteOrder) -> Result<usize> {
        match order {
            ByteOrder::BigEndian => self.write_value(&U16::<BE>::new(value)),
            ByteOrder::LittleEndian => self.write_value(&U16::<LE>::new(value)),
        }
    }

    /// Writes a `u32` in the given byte order.
    pub fn write_u32(&mut self, value: u32, order: ByteOrder) -> Result<usize> {
        match order {
            ByteOrder::BigEndian => self.write_value(&U32::<BE>::new(value)),
            ByteOrder::LittleEndian => self.write_value(&U32::<LE>::new(value)),
        }
    }

    /// Writes a `u64` in the given byte order.
    pub fn write_u64(&mut self, value: u64, order: ByteOrder) -> Result<usize> {
        match order {
            ByteOrder::BigEndian => self.write_value(&U64::<BE>::new(value)),
            ByteOrder::LittleEndian => self.write_value(&U64::<LE>::new(value)),
        }
    }

    /// Writes an `i16` in the given byte order.
    pub fn write_i16(&mut self, value: i16, order: ByteOrder) -> Result<usize> {
        match order {
            ByteOrder::BigEndian => self.write_value(&I16::<BE>::new(value)),
            ByteOrder::LittleEndian => self.write_value(&I16::<LE>::new(value)),
        }
    }

    /// Writes an `i32` in the given byte order.
    pub fn write_i32(&mut self, value: i32, order: ByteOrder) -> Result<usize> {
        match order {
            ByteOrder::BigEndian => self.write_value(&I32::<BE>::new(value)),
            ByteOrder::LittleEndian => self.write_value(&I32::<LE>::new(value)),
        }
    }

    /// Writes an `i64` in the given byte order.
    pub fn write_i64(&mut self, value: i64, order: ByteOrder) -> Result<usize> {
        match order {
            ByteOrder::BigEndian => self.write_value(&I64::<BE>::new(value)),
            ByteOrder::LittleEndian => self.write_value(&I64::<LE>::new(value)),
        }
    }
}
