//! Property tests for the retrieval core
//!
//! Exercises the contracts that must hold for arbitrary input: tokenizer
//! determinism and idempotence, longest-suffix-first stemming, BM25
//! term-frequency monotonicity, and ranker window invariants.

use kodeks_core::{Bm25Params, TokenizeMode, TokenizerConfig};
use kodeks_search::{rank, tokenize, Bm25Scorer, Index};
use proptest::prelude::*;

fn plain(text: &str) -> Vec<String> {
    tokenize(text, TokenizeMode::Plain, &TokenizerConfig::default())
}

proptest! {
    /// Identical input always produces identical tokens.
    #[test]
    fn tokenizer_is_deterministic(text in ".{0,200}") {
        prop_assert_eq!(plain(&text), plain(&text));
    }

    /// On lowercased, punctuation-free input, tokenization is exactly
    /// whitespace splitting.
    #[test]
    fn tokenizer_idempotent_on_normalized_input(
        words in proptest::collection::vec("[a-zа-я0-9]{1,8}", 0..20)
    ) {
        let text = words.join(" ");
        let split: Vec<String> = text.split_whitespace().map(String::from).collect();
        prop_assert_eq!(plain(&text), split);
    }

    /// Tokenizing its own output changes nothing.
    #[test]
    fn tokenizer_output_is_fixed_point(text in ".{0,200}") {
        let once = plain(&text);
        let again = plain(&once.join(" "));
        prop_assert_eq!(once, again);
    }

    /// With a table containing both "ами" and its own suffix "а", the longer
    /// entry always wins.
    #[test]
    fn stemmer_prefers_longest_suffix(stem in "[бвгдж]{2,6}") {
        let config = TokenizerConfig::new(vec!["а".into(), "ами".into()]);
        let token = format!("{stem}ами");
        let tokens = tokenize(&token, TokenizeMode::Stemmed, &config);
        prop_assert_eq!(tokens, vec![stem]);
    }

    /// Adding occurrences of a query term to a document never lowers that
    /// document's score, for k1 > 0.
    #[test]
    fn bm25_tf_is_monotonic(tf in 1u32..50, k1 in 0.1f64..3.0, b in 0.0f64..1.0) {
        let doc = |n: u32| {
            let mut words = vec!["позов"; n as usize];
            words.extend(["щодо", "боргу"]);
            words.join(" ")
        };
        let other = "стаття про спадщину та заповіт";
        let scorer = Bm25Scorer::new(Bm25Params::new(k1, b));
        let config = TokenizerConfig::default();
        let query = vec!["позов".to_string()];

        let lo = Index::build(&[doc(tf), other.to_string()], TokenizeMode::Plain, &config);
        let hi = Index::build(&[doc(tf + 1), other.to_string()], TokenizeMode::Plain, &config);

        let score_lo = scorer.score_all(&query, &lo)[0];
        let score_hi = scorer.score_all(&query, &hi)[0];
        prop_assert!(score_hi >= score_lo - 1e-12);
    }

    /// The ranked window never exceeds the limit, contains only positive
    /// scores, is sorted descending, and breaks ties by ascending id.
    #[test]
    fn ranker_window_invariants(
        scores in proptest::collection::vec(0.0f64..10.0, 0..40),
        limit in 0usize..20
    ) {
        let ranked = rank(&scores, limit);
        prop_assert!(ranked.len() <= limit);
        for pair in ranked.windows(2) {
            let (a, b) = (pair[0].as_usize(), pair[1].as_usize());
            prop_assert!(scores[a] >= scores[b]);
            if scores[a] == scores[b] {
                prop_assert!(a < b);
            }
        }
        for id in &ranked {
            prop_assert!(scores[id.as_usize()] > 0.0);
        }
    }

    /// Scoring the same query against the same corpus twice is bit-identical.
    #[test]
    fn scoring_is_deterministic(
        texts in proptest::collection::vec("[a-zа-я ]{0,60}", 0..10),
        query_text in "[a-zа-я ]{0,30}"
    ) {
        let config = TokenizerConfig::default();
        let index = Index::build(&texts, TokenizeMode::Plain, &config);
        let query = tokenize(&query_text, TokenizeMode::Plain, &config);
        let scorer = Bm25Scorer::default();
        prop_assert_eq!(scorer.score_all(&query, &index), scorer.score_all(&query, &index));
    }
}
