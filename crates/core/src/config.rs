//! Engine configuration
//!
//! This module defines:
//! - TokenizeMode: plain vs. suffix-stemmed tokenization
//! - TokenizerConfig: the ordered suffix table the stemmer strips from
//! - Bm25Params: the free parameters of the BM25 formula
//! - EngineConfig: everything `Engine::build` needs besides the records
//!
//! The index is a pure function of the corpus and this configuration;
//! two engines built from identical inputs produce identical indexes.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Default suffix table: common Ukrainian inflectional endings.
///
/// Ordered longest-first so the longest matching suffix wins. The list is a
/// heuristic for conflating case/number forms of the same word; it does not
/// attempt linguistic correctness.
static DEFAULT_SUFFIXES: Lazy<Vec<String>> = Lazy::new(|| {
    normalize_suffixes(
        [
            "еннями", "аннями", "енням", "анням", "ення", "ання", "іння", "ості", "ами", "ями",
            "ові", "еві", "ого", "ому", "ими", "іми", "ах", "ях", "ів", "ам", "ям", "ом", "ем",
            "ою", "ею", "ій", "им", "их", "ти", "ть", "а", "я", "у", "ю", "і", "и", "о", "е", "й",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    )
});

/// Sort a suffix table longest-first (by character count, stable).
///
/// The stemmer tries entries in table order and stops at the first match, so
/// this ordering is what makes a longer suffix beat a shorter one that is
/// also a suffix of it.
fn normalize_suffixes(mut suffixes: Vec<String>) -> Vec<String> {
    suffixes.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    suffixes
}

// ============================================================================
// TokenizeMode
// ============================================================================

/// Tokenization mode, fixed per engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TokenizeMode {
    /// Lowercase, strip punctuation, split on whitespace.
    #[default]
    Plain,
    /// `Plain`, then strip one suffix from each token longer than 3 characters.
    Stemmed,
}

// ============================================================================
// TokenizerConfig
// ============================================================================

/// Suffix table used in [`TokenizeMode::Stemmed`].
///
/// The table is normalized to longest-first order at construction, so
/// callers may supply suffixes in any order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    suffixes: Vec<String>,
}

impl TokenizerConfig {
    /// Build a config from a custom suffix table.
    pub fn new(suffixes: Vec<String>) -> Self {
        TokenizerConfig {
            suffixes: normalize_suffixes(suffixes),
        }
    }

    /// The suffix table, longest-first.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            suffixes: DEFAULT_SUFFIXES.clone(),
        }
    }
}

// ============================================================================
// Bm25Params
// ============================================================================

/// Free parameters of the BM25 formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Params {
    /// Term-frequency saturation (default 1.5).
    pub k1: f64,
    /// Length-normalization strength, 0 = off, 1 = full (default 0.75).
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Bm25Params { k1: 1.5, b: 0.75 }
    }
}

impl Bm25Params {
    /// Create params with explicit values.
    pub fn new(k1: f64, b: f64) -> Self {
        Bm25Params { k1, b }
    }

    /// Builder: set `k1`.
    pub fn with_k1(mut self, k1: f64) -> Self {
        self.k1 = k1;
        self
    }

    /// Builder: set `b`.
    pub fn with_b(mut self, b: f64) -> Self {
        self.b = b;
        self
    }
}

// ============================================================================
// EngineConfig
// ============================================================================

/// Configuration consumed by `Engine::build`.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Tokenization mode applied to both corpus and queries.
    pub mode: TokenizeMode,

    /// BM25 free parameters.
    pub params: Bm25Params,

    /// Stemmer suffix table.
    pub tokenizer: TokenizerConfig,
}

impl EngineConfig {
    /// Builder: set the tokenization mode.
    pub fn with_mode(mut self, mode: TokenizeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder: set the BM25 parameters.
    pub fn with_params(mut self, params: Bm25Params) -> Self {
        self.params = params;
        self
    }

    /// Builder: set the stemmer suffix table.
    pub fn with_tokenizer(mut self, tokenizer: TokenizerConfig) -> Self {
        self.tokenizer = tokenizer;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bm25_params_defaults() {
        let params = Bm25Params::default();
        assert!((params.k1 - 1.5).abs() < f64::EPSILON);
        assert!((params.b - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bm25_params_builder() {
        let params = Bm25Params::default().with_k1(2.0).with_b(0.5);
        assert!((params.k1 - 2.0).abs() < f64::EPSILON);
        assert!((params.b - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tokenizer_config_sorts_longest_first() {
        // Supplied shortest-first on purpose
        let config = TokenizerConfig::new(vec!["а".into(), "ами".into()]);
        assert_eq!(config.suffixes(), ["ами".to_string(), "а".to_string()]);
    }

    #[test]
    fn test_tokenizer_config_sort_is_by_chars_not_bytes() {
        // "ах" is 2 chars / 4 bytes; "ing" is 3 chars / 3 bytes
        let config = TokenizerConfig::new(vec!["ах".into(), "ing".into()]);
        assert_eq!(config.suffixes()[0], "ing");
    }

    #[test]
    fn test_default_suffixes_are_longest_first() {
        let config = TokenizerConfig::default();
        let lens: Vec<usize> = config.suffixes().iter().map(|s| s.chars().count()).collect();
        assert!(lens.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_engine_config_builder() {
        let config = EngineConfig::default()
            .with_mode(TokenizeMode::Stemmed)
            .with_params(Bm25Params::new(1.2, 0.6));
        assert_eq!(config.mode, TokenizeMode::Stemmed);
        assert!((config.params.k1 - 1.2).abs() < f64::EPSILON);
    }
}
