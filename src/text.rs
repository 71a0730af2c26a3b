//! Delimiter-terminated text.
//!
//! Text is handled as bytes (`bstr::BString`), since nothing guarantees that a stream holds
//! valid UTF-8. Use `BString::to_str` or `to_str_lossy` to get a `str`.

use std::io::{Read, Seek, Write};

use bstr::BString;

use crate::error::{DecodeError, Result, StreamError};
use crate::stream::BinaryStream;

/// The line terminator `write_line` uses.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// The line terminator `write_line` uses.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

impl<S: Read + Write + Seek> BinaryStream<S> {
    /// Reads bytes until the text read so far ends with `delimiter`, and returns all of it,
    /// delimiter included.
    ///
    /// If the stream ends first, whatever was read is returned (this may be empty). If
    /// `Limits::max_line_len` bytes are read without finding the delimiter, the read fails with
    /// `StreamError::Decode`; the bytes consumed so far are not put back.
    pub fn read_until(&mut self, delimiter: &[u8]) -> Result<BString> {
        if delimiter.is_empty() {
            return Err(StreamError::InvalidArgument("delimiter must not be empty"));
        }

        let limit = self.limits.max_line_len;
        let mut text = Vec::new();

        while let Some(b) = self.read_byte()? {
            text.push(b);
            if text.ends_with(delimiter) {
                break;
            }
            if let Some(limit) = limit {
                if text.len() >= limit {
                    log::debug!("no delimiter found within {limit} bytes");
                    return Err(DecodeError::DelimiterNotFound { limit }.into());
                }
            }
        }

        Ok(BString::from(text))
    }

    /// Reads up to and including the next `\n`. A final line without a terminator is returned
    /// as-is, and an empty result means the stream was already at its end.
    pub fn read_line(&mut self) -> Result<BString> {
        self.read_until(b"\n")
    }

    /// Writes `text` followed by `LINE_ENDING`.
    pub fn write_line<T: AsRef<[u8]>>(&mut self, text: T) -> Result<usize> {
        self.write_line_with(text, LINE_ENDING)
    }

    /// Writes `text` followed by `terminator`.
    pub fn write_line_with<T: AsRef<[u8]>, U: AsRef<[u8]>>(
        &mut self,
        text: T,
        terminator: U,
    ) -> Result<usize> {
        let (text, terminator) = (text.as_ref(), terminator.as_ref());
        let mut line = Vec::with_capacity(text.len() + terminator.len());
        line.extend_from_slice(text);
        line.extend_from_slice(terminator);
        self.write(&line)
    }
}
