//! Error types for the reveal engine.

use slidein_text::LayoutError;
use thiserror::Error;

/// Errors raised while building a reveal configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RevealError {
    /// A timing value was negative or not a finite number.
    #[error("invalid reveal config: {field} must be a non-negative duration, got {value}")]
    InvalidRevealConfig {
        /// Name of the rejected field.
        field: &'static str,
        /// The rejected value, in the unit the caller supplied.
        value: f64,
    },
}

/// Any error the reveal engine can return.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Reveal(#[from] RevealError),
}

/// Result type alias for reveal operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RevealError::InvalidRevealConfig {
            field: "delay_per_line",
            value: -5.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid reveal config: delay_per_line must be a non-negative duration, got -5"
        );

        let err: Error = LayoutError::InvalidLayoutConstraint { max_width: 0.0 }.into();
        assert!(matches!(err, Error::Layout(_)));
        assert!(err.to_string().contains("max width"));
    }
}
