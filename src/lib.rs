//! Reads and writes integers, floats, booleans, variable-length integers, arbitrary-precision
//! integers and delimiter-terminated text over any seekable byte stream.
//!
//! Every multi-byte operation takes a [`ByteOrder`] on each call. The stream itself has no byte
//! order and no buffering; the transport's position is the only cursor.
//!
//! ```
//! use binstream::{BinaryStream, ByteOrder};
//!
//! let mut s = BinaryStream::new();
//! s.write_int(0x0102, 2, ByteOrder::BigEndian)?;
//! s.write_varint(300)?;
//! s.rewind()?;
//! assert_eq!(s.read_int(2, ByteOrder::BigEndian)?, 0x0102);
//! assert_eq!(s.read_varint()?, 300);
//! assert_eq!(s.read_byte()?, None);
//! # Ok::<(), binstream::StreamError>(())
//! ```

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

#[cfg(feature = "bigint")]
mod bigint;
mod error;
mod limits;
mod order;
mod reader;
mod stream;
mod text;
mod varint;
mod writer;


pub use error::{DecodeError, Result, StreamError};
pub use limits::{Limits, DEFAULT_MAX_LINE_LEN, MAX_VARINT_GROUPS_U64};
pub use order::ByteOrder;
pub use reader::NATIVE_INT_SIZE;
pub use stream::BinaryStream;
pub use text::LINE_ENDING;
pub use varint::varint_len;

#[cfg(feature = "bigint")]
pub use num_bigint::BigUint;
