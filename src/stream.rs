use std::fs::{File, OpenOptions};
use std::io::{self, Cursor, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::{Result, StreamError};
use crate::limits::Limits;

/// Initial allocation for `read`, so that a huge `max_bytes` does not allocate up front.
const READ_CHUNK: usize = 8 * 1024;

/// A seekable byte stream, together with the codecs that read and write typed values on it.
///
/// `BinaryStream` owns exactly one transport. The transport can be a file (`BinaryStream::open`),
/// an in-memory buffer (`BinaryStream::from_bytes`), or anything else that implements `Read`,
/// `Write` and `Seek` (`BinaryStream::wrap`).
///
/// The stream has no internal buffering. Every codec call goes straight to the transport, and
/// the transport's position is the only cursor. Multi-byte operations take a `ByteOrder` on
/// each call; the stream itself has no byte order.
///
/// Closing is idempotent. Dropping a stream that is still open closes it, and any failure
/// during that close is logged and otherwise ignored. Operations on a closed stream fail with
/// `StreamError::Closed`.
///
/// All methods take `&mut self`. To share one stream between threads, put it behind a `Mutex`.
#[derive(Debug)]
pub struct BinaryStream<S: Read + Write + Seek> {
    inner: Option<S>,
    pub(crate) limits: Limits,
}

impl BinaryStream<File> {
    /// Opens an existing file for reading and writing. The file is not created and not
    /// truncated. The cursor starts at offset 0.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| StreamError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        log::trace!("opened {} as a binary stream", path.display());
        Ok(Self::wrap(file))
    }
}

impl BinaryStream<Cursor<Vec<u8>>> {
    /// Creates a stream over an empty in-memory buffer.
    pub fn new() -> Self {
        Self::wrap(Cursor::new(Vec::new()))
    }

    /// Creates a stream over an empty in-memory buffer with the given capacity.
    pub fn with_capacity(len: usize) -> Self {
        Self::wrap(Cursor::new(Vec::with_capacity(len)))
    }

    /// Creates a stream over an in-memory buffer that initially contains `bytes`. The cursor
    /// starts at offset 0.
    pub fn from_bytes<B: Into<Vec<u8>>>(bytes: B) -> Self {
        Self::wrap(Cursor::new(bytes.into()))
    }

    /// Returns the whole contents of the in-memory buffer, regardless of the cursor position.
    pub fn bytes(&self) -> Result<&[u8]> {
        Ok(self.inner()?.get_ref().as_slice())
    }
}

impl Default for BinaryStream<Cursor<Vec<u8>>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Read + Write + Seek> BinaryStream<S> {
    /// Wraps an existing transport. The stream takes ownership of it and uses its current
    /// position.
    pub fn wrap(transport: S) -> Self {
        log::trace!("wrapped transport in a binary stream");
        Self {
            inner: Some(transport),
            limits: Limits::default(),
        }
    }

    /// Replaces the decode limits, builder style.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Replaces the decode limits.
    pub fn set_limits(&mut self, limits: Limits) {
        self.limits = limits;
    }

    /// The decode limits currently in effect.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Accesses the transport.
    pub fn inner(&self) -> Result<&S> {
        self.inner.as_ref().ok_or(StreamError::Closed)
    }

    /// Accesses the transport mutably. Reading or seeking through this reference moves the
    /// stream's cursor.
    pub fn inner_mut(&mut self) -> Result<&mut S> {
        self.inner.as_mut().ok_or(StreamError::Closed)
    }

    /// Extracts the transport without closing it.
    pub fn into_inner(mut self) -> Result<S> {
        self.inner.take().ok_or(StreamError::Closed)
    }

    /// Returns `true` once `close` has run.
    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    /// Reads up to `max_bytes` bytes. Fewer bytes are returned only when the end of the stream
    /// is reached; an empty result means the cursor was already at the end.
    pub fn read(&mut self, max_bytes: usize) -> Result<Vec<u8>> {
        let transport = self.inner_mut()?;
        let mut buf = Vec::with_capacity(max_bytes.min(READ_CHUNK));
        transport.take(max_bytes as u64).read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Reads exactly `len` bytes, or fails with `StreamError::UnexpectedEnd`. On failure the
    /// cursor is left after whatever bytes were available.
    pub fn read_exact_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let buf = self.read(len)?;
        if buf.len() < len {
            return Err(StreamError::UnexpectedEnd);
        }
        Ok(buf)
    }

    /// Fills as much of `buf` as the stream can provide and returns the number of bytes read.
    pub(crate) fn fill(&mut self, buf: &mut [u8]) -> Result<usize> {
        let transport = self.inner_mut()?;
        let mut filled = 0;
        while filled < buf.len() {
            match transport.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(filled)
    }

    /// Writes all of `bytes` and returns the number of bytes written.
    pub fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        self.inner_mut()?.write_all(bytes)?;
        Ok(bytes.len())
    }

    /// Writes exactly `len` bytes: `bytes` truncated to `len`, or followed by zero bytes up to
    /// `len`.
    pub fn write_len(&mut self, bytes: &[u8], len: usize) -> Result<usize> {
        if bytes.len() >= len {
            return self.write(&bytes[..len]);
        }
        let written = self.write(bytes)?;
        let padding = (len - bytes.len()) as u64;
        let padded = io::copy(&mut io::repeat(0).take(padding), self.inner_mut()?)?;
        Ok(written + padded as usize)
    }

    /// Moves the cursor and returns the new offset from the start of the stream.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        Ok(self.inner_mut()?.seek(pos)?)
    }

    /// Moves the cursor to offset 0.
    pub fn rewind(&mut self) -> Result<()> {
        Ok(self.inner_mut()?.rewind()?)
    }

    /// Returns the cursor's offset from the start of the stream.
    pub fn tell(&mut self) -> Result<u64> {
        Ok(self.inner_mut()?.stream_position()?)
    }

    /// Returns `true` if the cursor is at (or beyond) the end of the stream. The cursor does not
    /// move.
    pub fn eof(&mut self) -> Result<bool> {
        let transport = self.inner_mut()?;
        let pos = transport.stream_position()?;
        let end = transport.seek(SeekFrom::End(0))?;
        if end != pos {
            transport.seek(SeekFrom::Start(pos))?;
        }
        Ok(pos >= end)
    }

    /// Flushes the transport.
    pub fn flush(&mut self) -> Result<()> {
        Ok(self.inner_mut()?.flush()?)
    }

    /// Flushes and releases the transport. Calling `close` on a closed stream does nothing.
    ///
    /// The transport is released even if the flush fails; the flush error is still returned.
    pub fn close(&mut self) -> Result<()> {
        let Some(mut transport) = self.inner.take() else {
            return Ok(());
        };
        log::trace!("closing binary stream");
        transport.flush()?;
        Ok(())
    }
}

impl<S: Read + Write + Seek> Drop for BinaryStream<S> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            log::warn!("ignoring error while closing binary stream: {e}");
        }
    }
}
