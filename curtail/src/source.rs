//! Deterministic byte sources and seed resolution.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

use crate::error::{CheckError, GeneratorError};

/// A reseedable pseudo-random byte stream.
///
/// All randomness in a run flows through one instance of this trait: sample
/// generation reads it through a tee, and shrink draws read it directly.
/// Two sources reseeded with the same seed must yield identical bytes under
/// identical call sequences.
pub trait ByteSource {
    /// Fill `dest` with the next bytes of the stream.
    ///
    /// A pseudo-random source never runs dry; a bounded implementation
    /// reports [`GeneratorError::EndOfInput`] or
    /// [`GeneratorError::ShortRead`] instead of padding.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), GeneratorError>;

    /// Restart the stream at the sequence determined by `seed`.
    ///
    /// Reseeding must be idempotent within a run: reseeding twice with the
    /// same seed is the same as reseeding once.
    fn reseed(&mut self, seed: i64);
}

/// Default byte source backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Create a source positioned at the start of `seed`'s byte sequence
    pub fn new(seed: i64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed as u64),
        }
    }
}

impl ByteSource for SeededSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), GeneratorError> {
        self.rng.fill_bytes(dest);
        Ok(())
    }

    fn reseed(&mut self, seed: i64) {
        self.rng = StdRng::seed_from_u64(seed as u64);
    }
}

/// Resolve the seed for a run: the configured one, or 8 bytes of OS entropy.
///
/// This is the one place where a run touches anything outside its own byte
/// source, and the one failure that aborts a run outright.
pub(crate) fn resolve_seed(configured: Option<i64>) -> Result<i64, CheckError> {
    if let Some(seed) = configured {
        return Ok(seed);
    }

    let mut buf = [0u8; 8];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|err| CheckError::EntropyUnavailable {
            message: err.to_string(),
        })?;
    Ok(i64::from_le_bytes(buf))
}
