//! Extra generators over the byte-stream contract
//!
//! - Boolean: single-byte parity decoder
//! - Numeric: fixed-width big-endian integer decoders

pub mod boolean;
pub mod numeric;
