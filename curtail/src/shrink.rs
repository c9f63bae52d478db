//! Numeric shrink draws over provenance byte sequences.
//!
//! Shrinking never looks at values. It reads a failure's provenance as a
//! non-negative big-endian integer and draws a uniformly random smaller one;
//! whatever that smaller byte sequence decodes to is the shrink candidate.

use crate::error::GeneratorError;
use crate::source::ByteSource;

/// Rejected candidates tolerated per draw before giving up.
///
/// Top-byte masking keeps the acceptance rate at 1/2 or better, so hitting
/// this cap with a uniform source has probability below 2^-128.
const MAX_DRAW_ATTEMPTS: usize = 128;

/// Draw a uniformly random byte sequence strictly below `bound`.
///
/// Both sequences are read as non-negative big-endian integers. The result
/// uses the minimal-length encoding: leading zeros stripped, zero itself is
/// the empty sequence. An empty (or all-zero) `bound` denotes zero, and
/// nothing is below zero: the draw fails without touching the source.
pub fn draw_below(
    bound: &[u8],
    source: &mut dyn ByteSource,
) -> Result<Vec<u8>, GeneratorError> {
    let bound = strip_leading_zeros(bound);
    if bound.is_empty() {
        return Err(GeneratorError::generation(
            "cannot draw below an empty byte sequence",
        ));
    }

    let mask = top_byte_mask(bound[0]);
    let mut candidate = vec![0u8; bound.len()];
    for _ in 0..MAX_DRAW_ATTEMPTS {
        source.fill_bytes(&mut candidate)?;
        candidate[0] &= mask;
        if candidate.as_slice() < bound {
            return Ok(strip_leading_zeros(&candidate).to_vec());
        }
    }

    Err(GeneratorError::entropy_unavailable(format!(
        "no candidate below {} in {} draws",
        hex(bound),
        MAX_DRAW_ATTEMPTS,
    )))
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(bytes.len());
    &bytes[start..]
}

/// Smallest all-ones mask covering `top`'s significant bits.
fn top_byte_mask(top: u8) -> u8 {
    let bits = 8 - top.leading_zeros();
    if bits == 8 {
        0xff
    } else {
        (1u8 << bits) - 1
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SeededSource;

    fn as_int(bytes: &[u8]) -> u128 {
        bytes.iter().fold(0u128, |acc, &b| (acc << 8) | u128::from(b))
    }

    /// Source that only ever produces 0xff bytes.
    struct SaturatedSource;

    impl ByteSource for SaturatedSource {
        fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), GeneratorError> {
            dest.fill(0xff);
            Ok(())
        }

        fn reseed(&mut self, _seed: i64) {}
    }

    /// Source that fails every read.
    struct BrokenSource;

    impl ByteSource for BrokenSource {
        fn fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), GeneratorError> {
            Err(GeneratorError::EndOfInput)
        }

        fn reseed(&mut self, _seed: i64) {}
    }

    #[test]
    fn test_draw_is_strictly_below_the_bound() {
        let mut source = SeededSource::new(77);
        let bound = [0x08u8];

        for _ in 0..200 {
            let drawn = draw_below(&bound, &mut source).unwrap();
            assert!(as_int(&drawn) < 8, "drew {:?}", drawn);
        }
    }

    #[test]
    fn test_draw_covers_multi_byte_bounds() {
        let mut source = SeededSource::new(3);
        let bound = [0x01u8, 0x00, 0x00];

        for _ in 0..100 {
            let drawn = draw_below(&bound, &mut source).unwrap();
            assert!(as_int(&drawn) < 0x0001_0000);
            // Minimal encoding has no leading zero.
            if let Some(first) = drawn.first() {
                assert_ne!(*first, 0);
            }
        }
    }

    #[test]
    fn test_draw_ignores_leading_zeros_in_the_bound() {
        let mut source = SeededSource::new(5);
        let drawn = draw_below(&[0x00, 0x00, 0x02], &mut source).unwrap();
        assert!(as_int(&drawn) < 2);
    }

    #[test]
    fn test_draw_below_zero_fails_deterministically() {
        let mut source = SeededSource::new(1);
        assert!(matches!(
            draw_below(&[], &mut source),
            Err(GeneratorError::Generation { .. })
        ));
        assert!(matches!(
            draw_below(&[0x00, 0x00], &mut source),
            Err(GeneratorError::Generation { .. })
        ));
    }

    #[test]
    fn test_draw_is_deterministic_per_seed() {
        let bound = [0x7fu8, 0x12];

        let mut a = SeededSource::new(99);
        let mut b = SeededSource::new(99);
        for _ in 0..20 {
            assert_eq!(
                draw_below(&bound, &mut a).unwrap(),
                draw_below(&bound, &mut b).unwrap()
            );
        }
    }

    #[test]
    fn test_exhausted_rejection_budget_reports_entropy_unavailable() {
        // Every candidate masks to 1, which is never below a bound of 1.
        let mut source = SaturatedSource;
        assert!(matches!(
            draw_below(&[0x01], &mut source),
            Err(GeneratorError::EntropyUnavailable { .. })
        ));
    }

    #[test]
    fn test_source_failures_propagate() {
        let mut source = BrokenSource;
        assert_eq!(
            draw_below(&[0x42], &mut source),
            Err(GeneratorError::EndOfInput)
        );
    }

    #[test]
    fn test_top_byte_mask_covers_the_bound() {
        assert_eq!(top_byte_mask(0x01), 0x01);
        assert_eq!(top_byte_mask(0x02), 0x03);
        assert_eq!(top_byte_mask(0x08), 0x0f);
        assert_eq!(top_byte_mask(0x7f), 0x7f);
        assert_eq!(top_byte_mask(0x80), 0xff);
        assert_eq!(top_byte_mask(0xff), 0xff);
    }
}
