//! Error types for text layout operations.

use thiserror::Error;

/// Errors raised by styled text slicing and line splitting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The available width must be a positive, finite number.
    #[error("invalid layout constraint: max width must be positive, got {max_width}")]
    InvalidLayoutConstraint {
        /// The rejected width.
        max_width: f32,
    },

    /// A byte range does not fit the text or splits a character.
    #[error("invalid text range {start}..{end} for text of length {len}")]
    InvalidRange {
        /// Range start (bytes).
        start: usize,
        /// Range end (bytes).
        end: usize,
        /// Text length (bytes).
        len: usize,
    },
}

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
