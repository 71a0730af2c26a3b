/// Byte order of a multi-byte value on the stream.
///
/// This is a parameter of each call, never state of the stream. The default is `BigEndian`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum ByteOrder {
    /// Most-significant byte first.
    #[default]
    BigEndian,
    /// Least-significant byte first.
    LittleEndian,
}

impl ByteOrder {
    /// The byte order of the machine this code is running on.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::BigEndian;

    /// The byte order of the machine this code is running on.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::LittleEndian;

    /// Returns `true` for `BigEndian`.
    #[inline(always)]
    pub fn is_big_endian(self) -> bool {
        self == Self::BigEndian
    }

    /// Converts a "big-endian?" flag into a `ByteOrder`.
    #[inline(always)]
    pub fn from_big_endian(big_endian: bool) -> Self {
        if big_endian {
            Self::BigEndian
        } else {
            Self::LittleEndian
        }
    }

    /// Reorders `bytes`, which are in this byte order, into most-significant-first order (or
    /// back). Big-endian data is left untouched.
    #[inline(always)]
    pub(crate) fn order_to_msb_first(self, bytes: &mut [u8]) {
        if self == Self::LittleEndian {
            bytes.reverse();
        }
    }

    /// Reorders `bytes`, which are least-significant-first, into this byte order.
    #[inline(always)]
    pub(crate) fn lsb_first_to_order(self, bytes: &mut [u8]) {
        if self == Self::BigEndian {
            bytes.reverse();
        }
    }
}
