//! Error types for generation, property evaluation, and run setup.

use std::fmt;

use crate::config::ConfigError;

/// Recoverable errors raised while decoding, filtering, or drawing bytes.
///
/// None of these abort a run. The sampling loop and the shrink search treat
/// every variant the same way: discard the attempt, keep the error for
/// diagnostics, and move on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Decoding from the byte stream could not produce a value
    Generation { message: String },

    /// The stream had no bytes left when a read started
    EndOfInput,

    /// The stream held fewer bytes than the read requested
    ShortRead { requested: usize, available: usize },

    /// A filter predicate rejected an otherwise valid value
    FilteredOut { cause: String },

    /// A shrink draw exhausted its candidate budget
    EntropyUnavailable { context: String },
}

impl GeneratorError {
    /// Create a generation error with the given message
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Create a filter rejection carrying the predicate's cause
    pub fn filtered_out(cause: impl Into<String>) -> Self {
        Self::FilteredOut {
            cause: cause.into(),
        }
    }

    /// Create an entropy exhaustion error for a shrink draw
    pub fn entropy_unavailable(context: impl Into<String>) -> Self {
        Self::EntropyUnavailable {
            context: context.into(),
        }
    }

    /// Whether this error is a filter rejection
    pub fn is_filtered_out(&self) -> bool {
        matches!(self, Self::FilteredOut { .. })
    }

    /// Whether this error reports an exhausted or too-short stream
    pub fn is_stream_exhausted(&self) -> bool {
        matches!(self, Self::EndOfInput | Self::ShortRead { .. })
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::Generation { message } => {
                write!(f, "Generation failed: {}", message)
            }
            GeneratorError::EndOfInput => {
                write!(f, "End of input")
            }
            GeneratorError::ShortRead {
                requested,
                available,
            } => {
                write!(f, "Short read: {} of {} bytes", available, requested)
            }
            GeneratorError::FilteredOut { cause } => {
                write!(f, "Filtered out: {}", cause)
            }
            GeneratorError::EntropyUnavailable { context } => {
                write!(f, "Entropy unavailable: {}", context)
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Error returned by a property for a counterexample.
///
/// This is the interesting outcome of a run, not a fault: it is recorded as
/// a [`Failure`](crate::report::Failure) and never discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyError {
    message: String,
}

impl PropertyError {
    /// Create a property error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message describing why the property rejected the value
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Property failed: {}", self.message)
    }
}

impl std::error::Error for PropertyError {}

/// Fatal errors that abort a run before any sampling happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The run configuration did not validate
    Config(ConfigError),

    /// The OS entropy source could not supply bytes for the initial seed
    EntropyUnavailable { message: String },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Config(err) => {
                write!(f, "Invalid configuration: {}", err)
            }
            CheckError::EntropyUnavailable { message } => {
                write!(f, "Cannot seed byte source: {}", message)
            }
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::Config(err) => Some(err),
            CheckError::EntropyUnavailable { .. } => None,
        }
    }
}

impl From<ConfigError> for CheckError {
    fn from(err: ConfigError) -> Self {
        CheckError::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_error_display() {
        let error = GeneratorError::generation("three bytes do not make an int");
        assert_eq!(
            format!("{}", error),
            "Generation failed: three bytes do not make an int"
        );

        let error = GeneratorError::ShortRead {
            requested: 8,
            available: 3,
        };
        assert_eq!(format!("{}", error), "Short read: 3 of 8 bytes");

        let error = GeneratorError::filtered_out("7 is odd");
        assert_eq!(format!("{}", error), "Filtered out: 7 is odd");
    }

    #[test]
    fn test_generator_error_predicates() {
        assert!(GeneratorError::filtered_out("nope").is_filtered_out());
        assert!(!GeneratorError::EndOfInput.is_filtered_out());

        assert!(GeneratorError::EndOfInput.is_stream_exhausted());
        assert!(
            GeneratorError::ShortRead {
                requested: 4,
                available: 1
            }
            .is_stream_exhausted()
        );
        assert!(!GeneratorError::generation("bad").is_stream_exhausted());
    }

    #[test]
    fn test_property_error_display() {
        let error = PropertyError::new("13 is odd");
        assert_eq!(format!("{}", error), "Property failed: 13 is odd");
        assert_eq!(error.message(), "13 is odd");
    }

    #[test]
    fn test_check_error_from_config_error() {
        let error: CheckError = ConfigError::InvalidSampleBudget(0).into();
        assert_eq!(error, CheckError::Config(ConfigError::InvalidSampleBudget(0)));
        assert!(format!("{}", error).starts_with("Invalid configuration"));
    }
}
