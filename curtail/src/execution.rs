//! Check runner: sampling loop, shrink search, and result assembly.

use std::marker::PhantomData;

use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::generator::Generator;
use crate::property::Property;
use crate::report::Report;
use crate::shrink::draw_below;
use crate::source::{ByteSource, SeededSource, resolve_seed};
use crate::stream::{SliceStream, SourceStream, TeeStream};

/// A configured check run.
///
/// Pairs a generator with a property, then searches for a counterexample and
/// shrinks the one it finds. Runs synchronously on the caller's thread and
/// owns its byte source exclusively; nothing survives past [`Check::run`].
pub struct Check<T, G, P> {
    generator: G,
    property: P,
    config: CheckConfig,
    source: Option<Box<dyn ByteSource>>,
    _marker: PhantomData<T>,
}

impl<T, G, P> Check<T, G, P>
where
    G: Generator<T>,
    P: Property<T>,
{
    /// Create a run with the default configuration
    pub fn new(generator: G, property: P) -> Self {
        Self {
            generator,
            property,
            config: CheckConfig::default(),
            source: None,
            _marker: PhantomData,
        }
    }

    /// Replace the run configuration
    pub fn with_config(mut self, config: CheckConfig) -> Self {
        self.config = config;
        self
    }

    /// Supply a byte source instead of the default seeded one.
    ///
    /// The source is reseeded with the resolved seed before any reads.
    pub fn with_source(mut self, source: Box<dyn ByteSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Execute the run.
    ///
    /// Sampling stops at the first failure; the shrink search then spends
    /// its whole budget looking for simpler failures regardless of how early
    /// it stops improving. The returned report lists failures simplest-first.
    pub fn run(mut self) -> Result<Report<T>, CheckError> {
        self.config.validate()?;
        let seed = resolve_seed(self.config.seed)?;

        let mut source: Box<dyn ByteSource> = match self.source.take() {
            Some(mut source) => {
                source.reseed(seed);
                source
            }
            None => Box::new(SeededSource::new(seed)),
        };

        let mut report = Report::new(seed, self.config.clone());
        self.sample_until_failure(&mut report, source.as_mut());
        self.seek_simpler(&mut report, source.as_mut());
        report.reverse_failures();
        Ok(report)
    }

    /// Draw and evaluate samples until a failure or the budget runs out.
    fn sample_until_failure(&self, report: &mut Report<T>, source: &mut dyn ByteSource) {
        for _ in 0..self.config.sample_budget {
            let mut stream = SourceStream::new(source);
            let mut tee = TeeStream::new(&mut stream);

            let value = match self.generator.generate(&mut tee) {
                Ok(value) => value,
                Err(err) => {
                    report.record_generator_error(err);
                    continue;
                }
            };
            let provenance = tee.into_bytes();

            match self.property.test(&value) {
                Ok(()) => report.record_pass(value),
                Err(err) => {
                    report.record_failure(value, err, provenance);
                    return;
                }
            }
        }
    }

    /// Spend the shrink budget deriving simpler failures from smaller seeds.
    fn seek_simpler(&self, report: &mut Report<T>, source: &mut dyn ByteSource) {
        if report.last_failure().is_none() {
            return;
        }

        for _ in 0..self.config.shrink_budget {
            self.seek_one_simpler(report, source);
        }
    }

    /// One shrink iteration against the most recently recorded failure.
    fn seek_one_simpler(&self, report: &mut Report<T>, source: &mut dyn ByteSource) {
        let Some(current) = report.last_failure() else {
            return;
        };
        let bound = current.provenance().to_vec();

        let drawn = match draw_below(&bound, source) {
            Ok(drawn) => drawn,
            Err(err) => {
                report.record_generator_error(err);
                return;
            }
        };

        let mut stream = SliceStream::new(&drawn);
        let value = match self.generator.generate(&mut stream) {
            Ok(value) => value,
            // The drawn bytes did not encode a value; a silent miss.
            Err(_) => return,
        };

        match self.property.test(&value) {
            Ok(()) => report.record_pass(value),
            Err(err) => report.record_failure(value, err, drawn),
        }
    }
}

/// Run a check with the default configuration
pub fn check<T, G, P>(generator: G, property: P) -> Result<Report<T>, CheckError>
where
    G: Generator<T>,
    P: Property<T>,
{
    Check::new(generator, property).run()
}

/// Run a check with an explicit configuration
pub fn check_with_config<T, G, P>(
    generator: G,
    property: P,
    config: CheckConfig,
) -> Result<Report<T>, CheckError>
where
    G: Generator<T>,
    P: Property<T>,
{
    Check::new(generator, property).with_config(config).run()
}
