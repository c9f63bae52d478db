//! Generator capability trait and combinators.

use crate::error::GeneratorError;
use crate::stream::ByteStream;

/// Capability to decode values of `T` from a byte stream.
///
/// Implementations must be stateless beyond captured configuration and must
/// consume a well-defined number of bytes for a given stream content:
/// replaying the same bytes reproduces the same value. Failure is
/// recoverable by contract; the caller discards the attempt and may retry
/// with fresh bytes.
pub trait Generator<T> {
    /// Decode one value from the stream
    fn generate(&self, stream: &mut dyn ByteStream) -> Result<T, GeneratorError>;
}

impl<T, G: Generator<T> + ?Sized> Generator<T> for &G {
    fn generate(&self, stream: &mut dyn ByteStream) -> Result<T, GeneratorError> {
        (**self).generate(stream)
    }
}

/// Generator that ignores the stream and yields a fixed value.
///
/// Consumes zero bytes, so its provenance is always empty.
#[derive(Debug, Clone)]
pub struct ConstantGenerator<T> {
    value: T,
}

impl<T: Clone> ConstantGenerator<T> {
    /// Create a generator that always yields `value`
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone> Generator<T> for ConstantGenerator<T> {
    fn generate(&self, _stream: &mut dyn ByteStream) -> Result<T, GeneratorError> {
        Ok(self.value.clone())
    }
}

/// Generator that always yields `value`
pub fn always<T: Clone>(value: T) -> ConstantGenerator<T> {
    ConstantGenerator::new(value)
}

/// Combinator that re-validates the wrapped generator's output.
///
/// Rejection is not a generation failure: it surfaces as
/// [`GeneratorError::FilteredOut`] carrying the predicate's cause string.
/// The combinator consumes no bytes beyond what the wrapped generator
/// consumed, so accepted values keep their provenance intact.
pub struct FilterGenerator<G, F> {
    inner: G,
    predicate: F,
}

impl<G, F> FilterGenerator<G, F> {
    /// Wrap `inner` with a rejection predicate
    pub fn new(inner: G, predicate: F) -> Self {
        Self { inner, predicate }
    }
}

impl<T, G, F> Generator<T> for FilterGenerator<G, F>
where
    G: Generator<T>,
    F: Fn(&T) -> Result<(), String>,
{
    fn generate(&self, stream: &mut dyn ByteStream) -> Result<T, GeneratorError> {
        let value = self.inner.generate(stream)?;
        match (self.predicate)(&value) {
            Ok(()) => Ok(value),
            Err(cause) => Err(GeneratorError::FilteredOut { cause }),
        }
    }
}

/// Wrap `inner` with a rejection predicate; `Err(cause)` rejects the value
pub fn filter<G, F>(inner: G, predicate: F) -> FilterGenerator<G, F> {
    FilterGenerator::new(inner, predicate)
}
