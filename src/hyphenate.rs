//! Dictionary-based word hyphenation
//!
//! Hyphenation feeds the tokenizer with discretionary break opportunities:
//! each point where a word may be divided becomes a flagged penalty item,
//! letting the breaker trade a hyphen against a badly stretched line.
//!
//! Break points come from Frank Liang's TeX pattern algorithm via the
//! `hyphenation` crate, with the pattern dictionaries embedded in the
//! binary. Loaded dictionaries are cached process-wide, so constructing a
//! `Hyphenator` for an already-seen language is cheap.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use hyphenation::{Hyphenator as PatternHyphenator, Language, Load, Standard};

use crate::error::{Result, TokenizeError};

static DICTIONARY_CACHE: OnceLock<Mutex<HashMap<HyphenLanguage, Arc<Standard>>>> = OnceLock::new();

/// Languages with embedded hyphenation patterns
///
/// A small, deliberately curated set; the pattern data for each variant
/// ships inside the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HyphenLanguage {
    /// English (United States)
    EnglishUS,
    /// English (United Kingdom)
    EnglishGB,
    /// German (1996 reform spelling)
    German,
    /// French
    French,
    /// Spanish
    Spanish,
    /// Italian
    Italian,
    /// Dutch
    Dutch,
    /// Swedish
    Swedish,
}

impl HyphenLanguage {
    /// Parse a BCP 47 tag or ISO 639-1 code
    ///
    /// Returns `None` for unrecognized codes.
    pub fn parse(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "en" | "en-us" | "eng" => Some(Self::EnglishUS),
            "en-gb" | "en-uk" => Some(Self::EnglishGB),
            "de" | "de-de" | "de-at" | "de-ch" | "deu" | "ger" => Some(Self::German),
            "fr" | "fr-fr" | "fr-ca" | "fra" | "fre" => Some(Self::French),
            "es" | "es-es" | "es-mx" | "spa" => Some(Self::Spanish),
            "it" | "it-it" | "ita" => Some(Self::Italian),
            "nl" | "nl-nl" | "nl-be" | "nld" | "dut" => Some(Self::Dutch),
            "sv" | "sv-se" | "swe" => Some(Self::Swedish),
            _ => None,
        }
    }

    /// The BCP 47 tag for this language
    pub fn code(&self) -> &'static str {
        match self {
            Self::EnglishUS => "en-US",
            Self::EnglishGB => "en-GB",
            Self::German => "de-DE",
            Self::French => "fr-FR",
            Self::Spanish => "es-ES",
            Self::Italian => "it-IT",
            Self::Dutch => "nl-NL",
            Self::Swedish => "sv-SE",
        }
    }

    fn pattern_language(self) -> Language {
        match self {
            Self::EnglishUS => Language::EnglishUS,
            Self::EnglishGB => Language::EnglishGB,
            Self::German => Language::German1996,
            Self::French => Language::French,
            Self::Spanish => Language::Spanish,
            Self::Italian => Language::Italian,
            Self::Dutch => Language::Dutch,
            Self::Swedish => Language::Swedish,
        }
    }
}

fn cached_dictionary(language: HyphenLanguage) -> Result<Arc<Standard>> {
    let cache = DICTIONARY_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = cache.lock().expect("dictionary cache poisoned");
    if let Some(existing) = guard.get(&language) {
        return Ok(Arc::clone(existing));
    }

    let dictionary =
        Standard::from_embedded(language.pattern_language()).map_err(|e| {
            TokenizeError::DictionaryLoad {
                language: language.code().to_string(),
                reason: format!("{:?}", e),
            }
        })?;
    let dictionary = Arc::new(dictionary);
    guard.insert(language, Arc::clone(&dictionary));
    Ok(dictionary)
}

/// Finds legal division points inside words
///
/// # Example
///
/// ```rust,ignore
/// use parabreak::{HyphenLanguage, Hyphenator};
///
/// let hyphenator = Hyphenator::new(HyphenLanguage::EnglishUS)?;
/// let points = hyphenator.word_breaks("hyphenation");
/// // Byte offsets where "hy-phen-ation" may divide.
/// ```
#[derive(Debug, Clone)]
pub struct Hyphenator {
    dictionary: Arc<Standard>,
    language: HyphenLanguage,
    left_min: usize,
    right_min: usize,
    min_word_len: usize,
}

impl Hyphenator {
    /// Minimum characters kept before the first division point
    pub const DEFAULT_LEFT_MIN: usize = 2;

    /// Minimum characters kept after the last division point
    pub const DEFAULT_RIGHT_MIN: usize = 2;

    /// Words shorter than this are never divided
    pub const DEFAULT_MIN_WORD_LEN: usize = 5;

    /// Create a hyphenator for a language
    ///
    /// # Errors
    ///
    /// Returns [`TokenizeError::DictionaryLoad`] if the embedded patterns
    /// cannot be loaded.
    pub fn new(language: HyphenLanguage) -> Result<Self> {
        Ok(Self {
            dictionary: cached_dictionary(language)?,
            language,
            left_min: Self::DEFAULT_LEFT_MIN,
            right_min: Self::DEFAULT_RIGHT_MIN,
            min_word_len: Self::DEFAULT_MIN_WORD_LEN,
        })
    }

    /// Create a hyphenator from a language code such as `"en-US"`
    ///
    /// # Errors
    ///
    /// Returns [`TokenizeError::UnsupportedLanguage`] for an unrecognized
    /// code, or [`TokenizeError::DictionaryLoad`] if patterns fail to load.
    pub fn from_code(code: &str) -> Result<Self> {
        let language = HyphenLanguage::parse(code).ok_or_else(|| TokenizeError::UnsupportedLanguage {
            code: code.to_string(),
        })?;
        Self::new(language)
    }

    /// Override the margin rules
    ///
    /// `left_min`/`right_min` set how many characters must remain on each
    /// side of a division; `min_word_len` skips short words entirely.
    #[must_use]
    pub fn with_margins(mut self, left_min: usize, right_min: usize, min_word_len: usize) -> Self {
        self.left_min = left_min.max(1);
        self.right_min = right_min.max(1);
        self.min_word_len = min_word_len.max(2);
        self
    }

    /// The language this hyphenator divides
    pub fn language(&self) -> HyphenLanguage {
        self.language
    }

    /// Byte offsets at which `word` may be divided
    ///
    /// Offsets are relative to `word`, sorted ascending, and filtered by
    /// the margin rules. Returns an empty vector for words too short to
    /// divide or with no pattern matches.
    pub fn word_breaks(&self, word: &str) -> Vec<usize> {
        let char_count = word.chars().count();
        if char_count < self.min_word_len {
            return Vec::new();
        }

        let mut breaks = self.dictionary.hyphenate(word).breaks;

        // Margin rules speak in characters, the patterns in bytes.
        let left_boundary = word
            .char_indices()
            .nth(self.left_min)
            .map(|(offset, _)| offset)
            .unwrap_or(word.len());
        let right_boundary = word
            .char_indices()
            .rev()
            .nth(self.right_min - 1)
            .map(|(offset, _)| offset)
            .unwrap_or(0);

        breaks.retain(|&pos| {
            pos >= left_boundary && pos <= right_boundary && word.is_char_boundary(pos)
        });
        breaks.sort_unstable();
        breaks
    }
}
