//! Fixed-width big-endian integer decoders.

use std::marker::PhantomData;

use curtail::{ByteStream, FilterGenerator, Generator, GeneratorError, filter};
use num_traits::PrimInt;

/// Decodes `size_of::<T>()` big-endian bytes into a primitive integer.
///
/// Short input propagates as a read error; the decoder never zero-pads.
#[derive(Debug, Clone)]
pub struct IntGenerator<T> {
    _marker: PhantomData<T>,
}

impl<T> IntGenerator<T> {
    /// Create an integer generator for `T`
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for IntGenerator<T> {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_int_generator {
    ($($t:ty),* $(,)?) => {
        $(
            impl Generator<$t> for IntGenerator<$t> {
                fn generate(&self, stream: &mut dyn ByteStream) -> Result<$t, GeneratorError> {
                    let mut buf = [0u8; std::mem::size_of::<$t>()];
                    stream.read_exact(&mut buf)?;
                    Ok(<$t>::from_be_bytes(buf))
                }
            }
        )*
    };
}

impl_int_generator!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Wrap an integer generator so odd values are rejected as filtered out
pub fn even<T, G>(inner: G) -> FilterGenerator<G, impl Fn(&T) -> Result<(), String>>
where
    T: PrimInt + std::fmt::Display,
    G: Generator<T>,
{
    filter(inner, |value: &T| {
        let two = T::one() + T::one();
        if *value % two == T::zero() {
            Ok(())
        } else {
            Err(format!("{} is odd", value))
        }
    })
}
