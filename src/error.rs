//! Error types for parabreak
//!
//! This module provides error types for each subsystem:
//! - Break errors (the optimal and greedy breakpoint searches)
//! - Tokenize errors (text-to-item conversion, hyphenation dictionaries)
//! - Render errors (line string assembly)
//!
//! All errors use the `thiserror` crate for minimal boilerplate and
//! proper error trait implementations.

use thiserror::Error;

/// Result type alias for parabreak operations
///
/// This is a convenience type that uses our Error type as the error variant.
///
/// # Examples
///
/// ```
/// use parabreak::Result;
///
/// fn breaks_ready() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for parabreak
///
/// Each variant wraps a more specific error type for that subsystem.
#[derive(Error, Debug)]
pub enum Error {
  /// Breakpoint search error
  #[error("Break error: {0}")]
  Break(#[from] BreakError),

  /// Tokenization or hyphenation error
  #[error("Tokenize error: {0}")]
  Tokenize(#[from] TokenizeError),

  /// Line rendering error
  #[error("Render error: {0}")]
  Render(#[from] RenderError),
}

/// Errors reported by the breakpoint searches
///
/// These cover invalid input schedules and searches that end without a
/// usable break chain.
///
/// # Examples
///
/// ```
/// use parabreak::error::BreakError;
///
/// let error = BreakError::InvalidLineLength {
///   index: 2,
///   value: -10.0,
/// };
/// assert!(format!("{}", error).contains("index 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BreakError {
  /// The line-length schedule has no entries
  #[error("Line length schedule is empty")]
  EmptyLineLengths,

  /// A line length is not a positive finite number
  #[error("Invalid line length at index {index}: {value}")]
  InvalidLineLength { index: usize, value: f64 },

  /// No break chain reaches the end of the paragraph
  ///
  /// Typically indicates a missing paragraph terminator or a tolerance
  /// too low for the given material.
  #[error("No feasible break sequence reaches the end of the paragraph")]
  NoFeasibleBreak,

  /// An internal invariant was violated; indicates a bug
  #[error("Break position {index} out of range for paragraph of {len} items")]
  IndexOutOfRange { index: usize, len: usize },
}

/// Errors that occur while converting text into typesetting items
#[derive(Error, Debug, Clone)]
pub enum TokenizeError {
  /// The language code is not recognized
  #[error("Unsupported hyphenation language: '{code}'")]
  UnsupportedLanguage { code: String },

  /// The hyphenation dictionary could not be loaded
  #[error("Failed to load hyphenation dictionary for '{language}': {reason}")]
  DictionaryLoad { language: String, reason: String },
}

/// Errors that occur while rendering chosen breaks into line strings
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
  /// The line-length schedule has no entries
  #[error("Line length schedule is empty")]
  EmptyLineLengths,

  /// A break references an item index past the end of the paragraph
  #[error("Break position {position} out of range for paragraph of {len} items")]
  BreakOutOfRange { position: usize, len: usize },
}
