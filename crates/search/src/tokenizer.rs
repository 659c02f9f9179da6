//! Text tokenizer for indexing and query processing
//!
//! Pipeline: lowercase → punctuation becomes a separator → split on
//! whitespace → drop empty tokens → (Stemmed mode) strip one suffix.
//!
//! The stemmer is a deliberate heuristic: it strips the first matching
//! entry of an ordered suffix table and consults no dictionary. Unrelated
//! words sharing an ending will conflate; that trade-off is accepted.

use kodeks_core::{TokenizeMode, TokenizerConfig};

/// Characters treated as token separators in addition to whitespace.
///
/// Replacing rather than deleting them keeps adjacent words apart, so
/// "don't" tokenizes as `don`, `t` instead of merging into `dont`.
const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Tokens this short are never stemmed; short roots are too ambiguous.
const MIN_STEM_CHARS: usize = 3;

/// Tokenize text into normalized terms.
///
/// Identical `(text, mode, config)` inputs always produce identical output.
/// Empty and punctuation-only input yield an empty sequence, not an error.
///
/// # Example
///
/// ```
/// use kodeks_core::{TokenizeMode, TokenizerConfig};
/// use kodeks_search::tokenize;
///
/// let config = TokenizerConfig::default();
/// let tokens = tokenize("Стаття 625. Боржник не звільняється", TokenizeMode::Plain, &config);
/// assert_eq!(tokens[0], "стаття");
/// assert_eq!(tokens[1], "625");
/// ```
pub fn tokenize(text: &str, mode: TokenizeMode, config: &TokenizerConfig) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| c.is_whitespace() || PUNCTUATION.contains(c))
        .filter(|token| !token.is_empty())
        .map(|token| match mode {
            TokenizeMode::Plain => token.to_string(),
            TokenizeMode::Stemmed => strip_one_suffix(token, config.suffixes()),
        })
        .collect()
}

/// Tokenize and deduplicate, preserving first-occurrence order.
///
/// Used for query processing: BM25 sums over *distinct* query terms, and
/// first-occurrence order fixes the canonical summation order.
pub fn tokenize_unique(text: &str, mode: TokenizeMode, config: &TokenizerConfig) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tokenize(text, mode, config)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Strip the first matching suffix from a token, longest-first.
///
/// Tokens of `MIN_STEM_CHARS` characters or fewer pass through untouched,
/// and a match must leave at least one character of stem. At most one
/// suffix is removed per token.
fn strip_one_suffix(token: &str, suffixes: &[String]) -> String {
    let token_chars = token.chars().count();
    if token_chars <= MIN_STEM_CHARS {
        return token.to_string();
    }
    for suffix in suffixes {
        if suffix.chars().count() < token_chars {
            if let Some(stem) = token.strip_suffix(suffix.as_str()) {
                return stem.to_string();
            }
        }
    }
    token.to_string()
}
