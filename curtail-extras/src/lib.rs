//! # Curtail Extras
//!
//! Concrete generators for the `curtail` engine. The core crate only ships
//! the capability trait and its combinators; this crate holds the example
//! instantiations:
//!
//! - **Boolean**: one-byte decoder, even byte reads as `true`
//! - **Numeric**: fixed-width big-endian decoders for every primitive
//!   integer type, plus an evenness filter
//!
//! Every generator here decodes a fixed number of bytes, reports short
//! input instead of padding, and replays deterministically from recorded
//! provenance. That is the contract the engine's shrink search relies on.
//!
//! ## Quick Start
//!
//! ```rust
//! use curtail::{CheckConfig, PropertyError, check_with_config};
//! use curtail_extras::prelude::*;
//!
//! let config = CheckConfig::default().with_seed(7);
//! let report = check_with_config(
//!     IntGenerator::<u16>::new(),
//!     |n: &u16| {
//!         if n % 2 == 0 {
//!             Ok(())
//!         } else {
//!             Err(PropertyError::new(format!("{} is odd", n)))
//!         }
//!     },
//!     config,
//! )
//! .expect("run is seeded");
//!
//! // Half of all u16 values are odd; a counterexample is inevitable.
//! assert!(report.is_fail());
//! ```

pub mod generators;

pub use generators::boolean::BoolGenerator;
pub use generators::numeric::{IntGenerator, even};

/// Convenient single import for all extra generators
pub mod prelude {
    pub use crate::generators::boolean::BoolGenerator;
    pub use crate::generators::numeric::{IntGenerator, even};
}
