/// Number of 7-bit groups needed to hold any `u64`.
pub const MAX_VARINT_GROUPS_U64: usize = 10;

/// Default bound on the bytes `read_until` and `read_line` will scan for a delimiter.
pub const DEFAULT_MAX_LINE_LEN: usize = 1 << 20;

/// Bounds that stop decoders from reading forever on corrupt or hostile input.
///
/// Both variable-length integers and delimiter-terminated text are unbounded in principle. A
/// stream whose bytes all have the continuation bit set, or which never contains the delimiter,
/// would otherwise be consumed to the end (or forever, on a transport that never ends). When a
/// limit is exceeded, the read fails with `StreamError::Decode`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Limits {
    /// Maximum number of bytes (7-bit groups) in a single variable-length integer. No byte is
    /// read past this limit.
    pub max_varint_groups: usize,

    /// Maximum number of bytes scanned while looking for a delimiter. `None` means no bound.
    pub max_line_len: Option<usize>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_varint_groups: MAX_VARINT_GROUPS_U64,
            max_line_len: Some(DEFAULT_MAX_LINE_LEN),
        }
    }
}

impl Limits {
    /// Limits that never trip. Variable-length integers are still rejected once they overflow
    /// a `u64`, but leading zero groups are accepted without bound.
    pub fn unbounded() -> Self {
        Self {
            max_varint_groups: usize::MAX,
            max_line_len: None,
        }
    }

    /// Sets `max_varint_groups`.
    pub fn varint_groups(mut self, max: usize) -> Self {
        self.max_varint_groups = max;
        self
    }

    /// Sets `max_line_len`.
    pub fn line_len(mut self, max: Option<usize>) -> Self {
        self.max_line_len = max;
        self
    }
}
