//! Match highlighting for the presentation layer
//!
//! A pure helper, deliberately outside the scoring path: scoring never
//! consults it and it never consults the index. Given a text and the raw
//! query, it returns the byte spans where query words occur so a renderer
//! can emphasize them.
//!
//! Matching is substring-based and case-insensitive; query words of 2
//! characters or fewer are ignored as too noisy to highlight.

/// A half-open byte range `[start, end)` into the highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
}

/// Find spans of query-word occurrences in `text`.
///
/// Spans are sorted by start offset and non-overlapping; when candidate
/// matches overlap, the earliest one wins. An empty query yields no spans.
pub fn highlight(text: &str, query: &str) -> Vec<Span> {
    let query_lower = query.to_lowercase();
    let words: Vec<&str> = query_lower
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .collect();

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut spans = Vec::new();
    for word in words {
        collect_matches(text, &chars, word, &mut spans);
    }
    spans.sort_by_key(|s| (s.start, s.end));
    spans.dedup();

    // Keep the earliest span of each overlapping cluster.
    let mut result: Vec<Span> = Vec::with_capacity(spans.len());
    let mut last_end = 0;
    for span in spans {
        if span.start >= last_end {
            last_end = span.end;
            result.push(span);
        }
    }
    result
}

/// Push every case-insensitive occurrence of `word` in `text` onto `out`.
fn collect_matches(text: &str, chars: &[(usize, char)], word: &str, out: &mut Vec<Span>) {
    let word_chars: Vec<char> = word.chars().collect();
    if word_chars.is_empty() {
        return;
    }

    for start in 0..chars.len() {
        let mut pos = start;
        let mut matched = 0;
        while matched < word_chars.len() && pos < chars.len() {
            let mut lowered = chars[pos].1.to_lowercase();
            if lowered.next() != Some(word_chars[matched]) || lowered.next().is_some() {
                break;
            }
            matched += 1;
            pos += 1;
        }
        if matched == word_chars.len() {
            let end = chars.get(pos).map_or(text.len(), |&(offset, _)| offset);
            out.push(Span {
                start: chars[start].0,
                end,
            });
        }
    }
}
