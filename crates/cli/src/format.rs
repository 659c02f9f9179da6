//! Result formatting: search hits → human or JSON output.
//!
//! Human mode renders one card per hit: score, source tag, article line,
//! a short text preview with matched words emphasized, and the source URL.
//! JSON mode emits the full documents for machine consumption.

use kodeks_core::ScoredResult;
use kodeks_engine::{highlight, Engine};

/// How many characters of article text a card shows.
const PREVIEW_CHARS: usize = 150;

const BOLD_YELLOW: &str = "\x1b[1;33m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Terminal cards with ANSI emphasis.
    Human,
    /// `serde_json` array of hits with full documents.
    Json,
}

/// Format a result list for one query.
pub fn format_results(
    engine: &Engine,
    query: &str,
    results: &[ScoredResult],
    mode: OutputMode,
) -> String {
    match mode {
        OutputMode::Json => format_json(engine, query, results),
        OutputMode::Human => format_human(engine, query, results),
    }
}

fn format_json(engine: &Engine, query: &str, results: &[ScoredResult]) -> String {
    let hits: Vec<serde_json::Value> = results
        .iter()
        .enumerate()
        .map(|(i, hit)| {
            serde_json::json!({
                "rank": i + 1,
                "score": hit.score,
                "document": engine.document(hit.doc_id),
            })
        })
        .collect();

    serde_json::to_string_pretty(&serde_json::json!({
        "query": query,
        "results": hits,
    }))
    .unwrap_or_else(|_| "{}".to_string())
}

fn format_human(engine: &Engine, query: &str, results: &[ScoredResult]) -> String {
    if results.is_empty() {
        return "No relevant results found.".to_string();
    }

    let mut out = String::new();
    for (i, hit) in results.iter().enumerate() {
        let Some(doc) = engine.document(hit.doc_id) else {
            continue;
        };

        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{}. [{:.2}] {}\n",
            i + 1,
            hit.score,
            doc.source_tag
        ));
        out.push_str(&format!("   {}\n", article_line(doc)));
        out.push_str(&format!("   {}\n", render_preview(&doc.text, query)));
        if !doc.source_url.is_empty() {
            out.push_str(&format!("   {DIM}{}{RESET}\n", doc.source_url));
        }
    }
    out
}

/// "Стаття {label}. {title}", degrading gracefully when fields are empty.
fn article_line(doc: &kodeks_core::Document) -> String {
    match (doc.article_label.is_empty(), doc.title.is_empty()) {
        (false, false) => format!("Стаття {}. {}", doc.article_label, doc.title),
        (false, true) => format!("Стаття {}", doc.article_label),
        (true, false) => doc.title.clone(),
        (true, true) => "(без назви)".to_string(),
    }
}

/// First `PREVIEW_CHARS` characters of the text with query words emphasized.
fn render_preview(text: &str, query: &str) -> String {
    let (preview, truncated) = truncate_chars(text, PREVIEW_CHARS);
    let spans = highlight(preview, query);

    let mut out = String::with_capacity(preview.len() + spans.len() * 16);
    let mut cursor = 0;
    for span in spans {
        out.push_str(&preview[cursor..span.start]);
        out.push_str(BOLD_YELLOW);
        out.push_str(&preview[span.start..span.end]);
        out.push_str(RESET);
        cursor = span.end;
    }
    out.push_str(&preview[cursor..]);
    if truncated {
        out.push('…');
    }
    out
}

/// Cut at a character boundary; returns the slice and whether it was cut.
fn truncate_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((offset, _)) => (text[..offset].trim_end(), true),
        None => (text, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kodeks_core::{EngineConfig, RawRecord};

    fn engine() -> Engine {
        Engine::build(
            vec![RawRecord {
                text: Some("Шлюбом є сімейний союз жінки та чоловіка".into()),
                title: "Поняття шлюбу".into(),
                article_label: "21".into(),
                source_url: "https://zakon.rada.gov.ua/laws/show/2947-14#n109".into(),
                source_tag: "СКУ • Сімейний кодекс".into(),
            }],
            EngineConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_human_card_contains_metadata() {
        let engine = engine();
        let hits = engine.search("шлюбом", 5);
        let card = format_results(&engine, "шлюбом", &hits, OutputMode::Human);

        assert!(card.contains("Стаття 21. Поняття шлюбу"));
        assert!(card.contains("СКУ • Сімейний кодекс"));
        assert!(card.contains("zakon.rada.gov.ua"));
    }

    #[test]
    fn test_human_highlights_matched_word() {
        let engine = engine();
        let hits = engine.search("шлюбом", 5);
        let card = format_results(&engine, "шлюбом", &hits, OutputMode::Human);
        assert!(card.contains(&format!("{BOLD_YELLOW}Шлюбом{RESET}")));
    }

    #[test]
    fn test_human_empty_results() {
        let engine = engine();
        let card = format_results(&engine, "ніщо", &[], OutputMode::Human);
        assert_eq!(card, "No relevant results found.");
    }

    #[test]
    fn test_json_output_shape() {
        let engine = engine();
        let hits = engine.search("шлюбом", 5);
        let raw = format_results(&engine, "шлюбом", &hits, OutputMode::Json);

        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["query"], "шлюбом");
        assert_eq!(value["results"][0]["rank"], 1);
        assert_eq!(value["results"][0]["document"]["article_label"], "21");
        assert!(value["results"][0]["score"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        // Cyrillic chars are 2 bytes; a byte-based cut would panic or split
        let (cut, truncated) = truncate_chars("стаття про шлюб", 6);
        assert_eq!(cut, "стаття");
        assert!(truncated);

        let (whole, truncated) = truncate_chars("шлюб", 150);
        assert_eq!(whole, "шлюб");
        assert!(!truncated);
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let long = "слово ".repeat(100);
        let rendered = render_preview(&long, "ніщо");
        assert!(rendered.ends_with('…'));
        assert!(rendered.chars().count() <= PREVIEW_CHARS + 1);
    }
}
