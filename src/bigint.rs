//! Integers wider than the native `u64`, such as 128-bit or 256-bit identifiers.

use std::io::{Read, Seek, Write};

use num_bigint::BigUint;

use crate::error::Result;
use crate::order::ByteOrder;
use crate::stream::BinaryStream;

impl<S: Read + Write + Seek> BinaryStream<S> {
    /// Reads an unsigned integer of any width. Unlike `read_int`, there is no upper bound on
    /// `size`.
    ///
    /// A short read at the end of the stream decodes the bytes that were available.
    pub fn read_int_big(&mut self, size: usize, order: ByteOrder) -> Result<BigUint> {
        let bytes = self.read(size)?;
        Ok(match order {
            ByteOrder::BigEndian => BigUint::from_bytes_be(&bytes),
            ByteOrder::LittleEndian => BigUint::from_bytes_le(&bytes),
        })
    }

    /// Writes the low `size` base-256 digits of `value`. High-order digits beyond `size` are
    /// dropped; missing ones are written as zero.
    pub fn write_int_big(
        &mut self,
        value: &BigUint,
        size: usize,
        order: ByteOrder,
    ) -> Result<usize> {
        let mut digits = value.to_bytes_le();
        digits.resize(size, 0);
        order.lsb_first_to_order(&mut digits);
        self.write(&digits)
    }
}
