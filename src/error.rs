//! Error types for Slopeview.
//!
//! The plane core is infallible; errors only come from configuration and
//! command-line input. Terminal and I/O failures surface through `anyhow`
//! in the binary.

use thiserror::Error;

/// Result type alias for Slopeview operations.
pub type Result<T> = std::result::Result<T, SlopeviewError>;

/// Errors that can occur in Slopeview.
#[derive(Debug, Error)]
pub enum SlopeviewError {
    /// A line parameter is not a finite number.
    #[error("Invalid parameter {name}: {value} is not a finite number")]
    InvalidParameter {
        /// Parameter name (`k` or `b`).
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Drawing surface or scale settings are unusable.
    #[error("Invalid view: {0}")]
    InvalidView(String),

    /// A control range is empty, inverted or has a bad step.
    #[error("Invalid range for {name}: {reason}")]
    InvalidRange {
        /// Control name.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Pointer position could not be parsed.
    #[error("Invalid pointer position '{input}': expected <x>,<y>")]
    InvalidPointer {
        /// Raw argument.
        input: String,
    },
}

impl SlopeviewError {
    /// Create an InvalidView error.
    pub fn invalid_view(reason: impl Into<String>) -> Self {
        Self::InvalidView(reason.into())
    }

    /// Create an InvalidRange error.
    pub fn invalid_range(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            name,
            reason: reason.into(),
        }
    }

    /// Create an InvalidPointer error.
    pub fn invalid_pointer(input: impl Into<String>) -> Self {
        Self::InvalidPointer {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = SlopeviewError::InvalidParameter {
            name: "k",
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "Invalid parameter k: NaN is not a finite number");

        let err = SlopeviewError::invalid_pointer("12");
        assert!(err.to_string().contains("'12'"));

        let err = SlopeviewError::invalid_range("b", "min must be below max");
        assert_eq!(err.to_string(), "Invalid range for b: min must be below max");
    }

    #[test]
    fn every_variant_comes_from_input_validation() {
        let errors = [
            SlopeviewError::InvalidParameter {
                name: "b",
                value: f64::INFINITY,
            },
            SlopeviewError::invalid_view("scale must be positive, got 0"),
            SlopeviewError::invalid_range("k", "bounds must be finite"),
            SlopeviewError::invalid_pointer("x"),
        ];
        for err in errors {
            let prefix = match &err {
                SlopeviewError::InvalidParameter { .. } => "Invalid parameter",
                SlopeviewError::InvalidView(_) => "Invalid view",
                SlopeviewError::InvalidRange { .. } => "Invalid range",
                SlopeviewError::InvalidPointer { .. } => "Invalid pointer",
            };
            assert!(err.to_string().starts_with(prefix));
        }
    }
}
