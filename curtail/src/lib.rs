//! # Curtail - Byte-Stream Property Testing
//!
//! Curtail is a property-based testing engine built around a single idea:
//! every sampled value is decoded from a deterministic byte stream, so a
//! failing input can be made simpler by re-decoding from a numerically
//! smaller byte sequence. One generic shrink step replaces per-type shrink
//! logic entirely.
//!
//! A run draws samples from a seeded [`ByteSource`] through a [`Generator`]
//! until the [`Property`] rejects one, then spends a fixed budget drawing
//! smaller provenance sequences and keeping whichever still fail. The
//! [`Report`] lists failures simplest-first, each with the exact bytes that
//! produced it, so any counterexample can be replayed deterministically.
//!
//! ## Quick Start
//!
//! ```rust
//! use curtail::{CheckConfig, PropertyError, always, check_with_config};
//!
//! let config = CheckConfig::default().with_seed(42);
//! let report = check_with_config(
//!     always(7u32),
//!     |n: &u32| {
//!         if *n <= 10 {
//!             Ok(())
//!         } else {
//!             Err(PropertyError::new(format!("{} is too large", n)))
//!         }
//!     },
//!     config,
//! )
//! .expect("run is seeded");
//!
//! assert!(report.is_pass());
//! ```
//!
//! ## Shrinking Caveat
//!
//! Shrinking assumes that a numerically smaller provenance decodes to a
//! simpler value. That heuristic is not guaranteed for every encoding: a
//! generator that reads the highest bit as a sign flag, say, may decode a
//! smaller byte sequence into a larger-magnitude value. The search still
//! only ever replaces the tracked failure with one of smaller provenance,
//! but "smaller bytes" and "simpler value" are allowed to disagree.
//!
//! The shrink search also deliberately runs its whole budget even when it
//! stops improving; bound the budgets in [`CheckConfig`] to bound the cost.

// Public modules
pub mod config;
pub mod error;
pub mod execution;
pub mod generator;
pub mod property;
pub mod report;
pub mod shrink;
pub mod source;
pub mod stream;

// Re-export the main public API
pub use config::{CheckConfig, ConfigError, DEFAULT_BUDGET};
pub use error::{CheckError, GeneratorError, PropertyError};
pub use execution::{Check, check, check_with_config};
pub use generator::{ConstantGenerator, FilterGenerator, Generator, always, filter};
pub use property::Property;
pub use report::{Failure, Report};
pub use shrink::draw_below;
pub use source::{ByteSource, SeededSource};
pub use stream::{ByteStream, SliceStream, SourceStream, TeeStream};
