//! Single-byte boolean decoder.

use curtail::{ByteStream, Generator, GeneratorError};

/// Decodes one byte; an even byte reads as `true`.
#[derive(Debug, Clone, Default)]
pub struct BoolGenerator;

impl BoolGenerator {
    /// Create a boolean generator
    pub fn new() -> Self {
        Self
    }
}

impl Generator<bool> for BoolGenerator {
    fn generate(&self, stream: &mut dyn ByteStream) -> Result<bool, GeneratorError> {
        let mut buf = [0u8; 1];
        stream.read_exact(&mut buf)?;
        Ok(buf[0] % 2 == 0)
    }
}
