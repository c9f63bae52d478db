//! Byte stream views consumed by generators.

use crate::error::GeneratorError;
use crate::source::ByteSource;

/// A readable view of bytes with all-or-nothing reads.
///
/// Generators decode values from this trait alone. A read either fills the
/// buffer entirely or reports why the bytes are not there; a failed read
/// consumes nothing and never zero-pads.
pub trait ByteStream {
    /// Fill `buf` entirely from the stream
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), GeneratorError>;
}

/// Endless stream view over a reseedable byte source.
pub struct SourceStream<'a> {
    source: &'a mut dyn ByteSource,
}

impl<'a> SourceStream<'a> {
    /// Borrow `source` as a stream for the duration of one decode
    pub fn new(source: &'a mut dyn ByteSource) -> Self {
        Self { source }
    }
}

impl ByteStream for SourceStream<'_> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), GeneratorError> {
        self.source.fill_bytes(buf)
    }
}

/// Bounded stream replaying a fixed byte sequence.
///
/// Used to re-derive a value from recorded provenance: decoding reads
/// exactly the replayed bytes and nothing beyond them.
pub struct SliceStream<'a> {
    bytes: &'a [u8],
}

impl<'a> SliceStream<'a> {
    /// Create a stream positioned at the start of `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

impl ByteStream for SliceStream<'_> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), GeneratorError> {
        if buf.is_empty() {
            return Ok(());
        }
        if self.bytes.is_empty() {
            return Err(GeneratorError::EndOfInput);
        }
        if self.bytes.len() < buf.len() {
            return Err(GeneratorError::ShortRead {
                requested: buf.len(),
                available: self.bytes.len(),
            });
        }

        let (head, rest) = self.bytes.split_at(buf.len());
        buf.copy_from_slice(head);
        self.bytes = rest;
        Ok(())
    }
}

/// Stream wrapper that records every byte successfully read.
///
/// The recorded bytes are the provenance of whatever the wrapped reads
/// decoded: replaying them through a [`SliceStream`] reproduces the value.
pub struct TeeStream<'a> {
    inner: &'a mut dyn ByteStream,
    seen: Vec<u8>,
}

impl<'a> TeeStream<'a> {
    /// Wrap `inner`, recording from the next read onward
    pub fn new(inner: &'a mut dyn ByteStream) -> Self {
        Self {
            inner,
            seen: Vec::new(),
        }
    }

    /// Bytes read so far
    pub fn bytes(&self) -> &[u8] {
        &self.seen
    }

    /// Consume the tee and keep the recorded bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.seen
    }
}

impl ByteStream for TeeStream<'_> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), GeneratorError> {
        self.inner.read_exact(buf)?;
        self.seen.extend_from_slice(buf);
        Ok(())
    }
}
