//! Run outcome bookkeeping.

use crate::config::CheckConfig;
use crate::error::{GeneratorError, PropertyError};

/// A sampled value that failed the property, with its provenance bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure<T> {
    value: T,
    error: PropertyError,
    provenance: Vec<u8>,
}

impl<T> Failure<T> {
    pub(crate) fn new(value: T, error: PropertyError, provenance: Vec<u8>) -> Self {
        Self {
            value,
            error,
            provenance,
        }
    }

    /// The failing value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The error the property returned for this value
    pub fn error(&self) -> &PropertyError {
        &self.error
    }

    /// The exact bytes consumed to produce the value.
    ///
    /// Replaying these through a [`SliceStream`](crate::SliceStream) with
    /// the same generator reproduces the value.
    pub fn provenance(&self) -> &[u8] {
        &self.provenance
    }
}

/// Aggregate outcome of a check run.
///
/// Created once at the start of a run, mutated only by that run's sampling
/// and shrinking phases, immutable once returned. Once the run completes the
/// failure list is ordered simplest-first: index 0 holds the most deeply
/// shrunk failure and the last index holds the one sampling found.
#[derive(Debug, Clone)]
pub struct Report<T> {
    seed: i64,
    config: CheckConfig,
    generator_errors: Vec<GeneratorError>,
    passed: Vec<T>,
    failed: Vec<Failure<T>>,
}

impl<T> Report<T> {
    pub(crate) fn new(seed: i64, config: CheckConfig) -> Self {
        Self {
            seed,
            config,
            generator_errors: Vec::new(),
            passed: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// Whether the run found no counterexample
    pub fn is_pass(&self) -> bool {
        self.failed.is_empty()
    }

    /// Whether the run found at least one counterexample
    pub fn is_fail(&self) -> bool {
        !self.is_pass()
    }

    /// The seed the run resolved to; reuse it to replay the run
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// The configuration the run used
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Accepted sample values, in discovery order
    pub fn passed(&self) -> &[T] {
        &self.passed
    }

    /// Failures, simplest-first once the run has completed
    pub fn failures(&self) -> &[Failure<T>] {
        &self.failed
    }

    /// The simplest failure found, if any
    pub fn minimal(&self) -> Option<&Failure<T>> {
        self.failed.first()
    }

    /// Decode, filter, and shrink-draw errors met along the way.
    ///
    /// Diagnostic only; these never affect the verdict.
    pub fn generator_errors(&self) -> &[GeneratorError] {
        &self.generator_errors
    }

    pub(crate) fn record_pass(&mut self, value: T) {
        self.passed.push(value);
    }

    pub(crate) fn record_failure(&mut self, value: T, error: PropertyError, provenance: Vec<u8>) {
        self.failed.push(Failure::new(value, error, provenance));
    }

    pub(crate) fn record_generator_error(&mut self, error: GeneratorError) {
        self.generator_errors.push(error);
    }

    pub(crate) fn last_failure(&self) -> Option<&Failure<T>> {
        self.failed.last()
    }

    pub(crate) fn reverse_failures(&mut self) {
        self.failed.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Report<u8> {
        Report::new(0, CheckConfig::default())
    }

    #[test]
    fn test_empty_report_is_a_pass() {
        let report = report();
        assert!(report.is_pass());
        assert!(!report.is_fail());
        assert!(report.minimal().is_none());
    }

    #[test]
    fn test_one_failure_is_a_fail() {
        let mut report = report();
        report.record_failure(9, PropertyError::new("9 is odd"), vec![9]);

        assert!(report.is_fail());
        assert_eq!(report.minimal().unwrap().value(), &9);
        assert_eq!(report.minimal().unwrap().provenance(), &[9]);
    }

    #[test]
    fn test_generator_errors_do_not_affect_the_verdict() {
        let mut report = report();
        report.record_generator_error(GeneratorError::EndOfInput);
        assert!(report.is_pass());
        assert_eq!(report.generator_errors().len(), 1);
    }

    #[test]
    fn test_reverse_failures_puts_the_simplest_first() {
        let mut report = report();
        report.record_failure(200, PropertyError::new("original"), vec![200]);
        report.record_failure(50, PropertyError::new("smaller"), vec![50]);
        report.record_failure(3, PropertyError::new("smallest"), vec![3]);
        report.record_pass(4);

        report.reverse_failures();

        let values: Vec<u8> = report.failures().iter().map(|f| *f.value()).collect();
        assert_eq!(values, vec![3, 50, 200]);
        // Reordering leaves the other lists alone.
        assert_eq!(report.passed(), &[4]);
        assert!(report.generator_errors().is_empty());
    }
}
