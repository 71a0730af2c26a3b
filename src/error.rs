use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type used by every fallible `BinaryStream` operation.
pub type Result<T> = core::result::Result<T, StreamError>;

/// Error type for `BinaryStream`.
///
/// After any of these errors (other than `Closed`) the stream remains usable, unless the
/// transport itself has become invalid. Nothing is retried and no partial state is repaired.
#[derive(Error, Debug)]
pub enum StreamError {
    /// The transport reported a failure on read, write, seek, tell or flush.
    #[error("stream I/O failed: {0}")]
    Io(#[from] io::Error),

    /// A file could not be opened as a stream.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        /// The path that was passed to `BinaryStream::open`.
        path: PathBuf,
        /// The underlying system error.
        #[source]
        source: io::Error,
    },

    /// The caller asked for a fixed-width integer wider than the native integer. This is
    /// reported before any byte is consumed.
    #[error("cannot read a {size}-byte integer, the native integer holds at most {max} bytes")]
    Overflow {
        /// Requested width in bytes.
        size: usize,
        /// Width of the native integer in bytes.
        max: usize,
    },

    /// The caller passed a value that the operation cannot encode.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The input is malformed, or exceeded one of the configured `Limits`.
    #[error("malformed input: {0}")]
    Decode(#[from] DecodeError),

    /// A strict read reached the end of the stream before it had all of its bytes.
    #[error("unexpected end of stream")]
    UnexpectedEnd,

    /// The stream has already been closed.
    #[error("stream is closed")]
    Closed,
}

/// Describes why decoding of a variable-length value was abandoned.
#[derive(Error, Copy, Clone, Eq, PartialEq, Debug)]
pub enum DecodeError {
    /// A variable-length integer kept its continuation bit set past the group limit.
    #[error("variable-length integer is longer than {max_groups} groups")]
    VarIntTooLong {
        /// The configured `Limits::max_varint_groups`.
        max_groups: usize,
    },

    /// A variable-length integer does not fit in a `u64`.
    #[error("variable-length integer does not fit in 64 bits")]
    VarIntOverflow,

    /// No delimiter was found within the configured line length.
    #[error("delimiter not found within {limit} bytes")]
    DelimiterNotFound {
        /// The configured `Limits::max_line_len`.
        limit: usize,
    },
}

impl StreamError {
    /// Returns `true` if this error came from the transport rather than from the codec.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Open { .. })
    }
}
