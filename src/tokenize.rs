//! Plain-text tokenization into typesetting items
//!
//! The breaker consumes boxes, glue, and penalties; this module builds
//! them from a string. Each character of a word becomes a box whose width
//! the caller measures, runs of whitespace collapse into a single glue,
//! and (optionally) dictionary hyphenation plants flagged penalties inside
//! words. Marker characters can force or forbid breaks for callers that
//! embed layout hints in the text itself.
//!
//! # Example
//!
//! ```rust,ignore
//! use parabreak::Tokenizer;
//!
//! // Monospace model: every character one unit wide.
//! let par = Tokenizer::new().tokenize("hello world", |_| 1.0)?;
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;
use crate::hyphenate::{HyphenLanguage, Hyphenator};
use crate::item::{Paragraph, INF};

/// Inter-word glue dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceGlue {
    /// Natural width of a space
    pub width: f64,
    /// How far a space may stretch
    pub stretch: f64,
    /// How far a space may shrink
    pub shrink: f64,
}

impl Default for SpaceGlue {
    fn default() -> Self {
        // Double-wide spaces with symmetric give, the classic monospace
        // model.
        Self {
            width: 2.0,
            stretch: 1.0,
            shrink: 1.0,
        }
    }
}

/// Builder-configured text-to-item converter
///
/// # Example
///
/// ```rust,ignore
/// use parabreak::{HyphenLanguage, Tokenizer};
///
/// let tokenizer = Tokenizer::new()
///     .with_space(1.0, 1.0, 1.0)
///     .with_hyphenation(HyphenLanguage::EnglishUS)?
///     .with_forced_break_marker('@');
///
/// let par = tokenizer.tokenize("paragraph text", |_| 1.0)?;
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer {
    space: SpaceGlue,
    hyphenator: Option<Hyphenator>,
    hyphen_width: f64,
    hyphen_penalty: f64,
    forced_break_marker: Option<char>,
    no_break_marker: Option<char>,
    standard_end: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            space: SpaceGlue::default(),
            hyphenator: None,
            hyphen_width: 1.0,
            hyphen_penalty: 50.0,
            forced_break_marker: None,
            no_break_marker: None,
            standard_end: true,
        }
    }
}

impl Tokenizer {
    /// Create a tokenizer with default settings
    ///
    /// Defaults: 2/1/1 spaces, no hyphenation, no marker characters, and
    /// the standard paragraph terminator appended.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inter-word glue dimensions
    #[must_use]
    pub fn with_space(mut self, width: f64, stretch: f64, shrink: f64) -> Self {
        self.space = SpaceGlue {
            width,
            stretch,
            shrink,
        };
        self
    }

    /// Enable dictionary hyphenation for a language
    ///
    /// Words gain a flagged penalty at each legal division point.
    ///
    /// # Errors
    ///
    /// Fails when the language's pattern dictionary cannot be loaded.
    pub fn with_hyphenation(mut self, language: HyphenLanguage) -> Result<Self> {
        self.hyphenator = Some(Hyphenator::new(language)?);
        Ok(self)
    }

    /// Set the width charged for a taken hyphen break
    #[must_use]
    pub fn with_hyphen_width(mut self, width: f64) -> Self {
        self.hyphen_width = width;
        self
    }

    /// Set the penalty charged for a taken hyphen break
    #[must_use]
    pub fn with_hyphen_penalty(mut self, penalty: f64) -> Self {
        self.hyphen_penalty = penalty;
        self
    }

    /// Treat `marker` as a forced line break
    #[must_use]
    pub fn with_forced_break_marker(mut self, marker: char) -> Self {
        self.forced_break_marker = Some(marker);
        self
    }

    /// Treat `marker` as a forbidden break position
    #[must_use]
    pub fn with_no_break_marker(mut self, marker: char) -> Self {
        self.no_break_marker = Some(marker);
        self
    }

    /// Control whether the standard paragraph terminator is appended
    #[must_use]
    pub fn with_standard_end(mut self, append: bool) -> Self {
        self.standard_end = append;
        self
    }

    /// Convert `text` into a paragraph of items
    ///
    /// `measure` supplies the width of each word character. Box payloads
    /// are the characters themselves; glue carries a space and hyphen
    /// penalties carry `'-'`, so a renderer can rebuild the text from
    /// payloads alone.
    pub fn tokenize<F>(&self, text: &str, measure: F) -> Result<Paragraph<char>>
    where
        F: Fn(char) -> f64,
    {
        let mut par = Paragraph::new();
        let mut pending_space = false;

        for segment in text.split_word_bounds() {
            let mut chars = segment.chars();
            let first = match chars.next() {
                Some(ch) => ch,
                None => continue,
            };
            let single = chars.next().is_none();

            if segment.chars().all(char::is_whitespace) {
                // Whitespace runs collapse into one glue, emitted lazily so
                // leading and trailing runs disappear.
                if !par.is_empty() {
                    pending_space = true;
                }
                continue;
            }

            if single && self.forced_break_marker == Some(first) {
                pending_space = false;
                par.append_penalty(0.0, -INF, false, first);
                continue;
            }
            if single && self.no_break_marker == Some(first) {
                pending_space = false;
                par.append_penalty(0.0, INF, false, first);
                continue;
            }

            if pending_space {
                par.append_glue(self.space.width, self.space.stretch, self.space.shrink, ' ');
                pending_space = false;
            }

            self.append_word(&mut par, segment, &measure);
        }

        if self.standard_end {
            par.append_standard_end(' ');
        }

        Ok(par)
    }

    /// Append one word as boxes, with hyphen penalties where allowed
    fn append_word<F>(&self, par: &mut Paragraph<char>, word: &str, measure: &F)
    where
        F: Fn(char) -> f64,
    {
        let division_points = match &self.hyphenator {
            Some(hyphenator) if word.chars().all(char::is_alphabetic) => {
                hyphenator.word_breaks(word)
            }
            _ => Vec::new(),
        };

        let mut divisions = division_points.iter().peekable();
        for (offset, ch) in word.char_indices() {
            if divisions.next_if(|&&p| p <= offset).is_some() {
                par.append_penalty(self.hyphen_width, self.hyphen_penalty, true, '-');
            }
            par.append_box(measure(ch), ch);
        }
    }
}
