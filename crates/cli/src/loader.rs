//! Article ingestion: parsed-JSON files → raw records.
//!
//! This is collaborator code; the engine crates never touch the filesystem.
//! Each data file holds a JSON array of parsed articles. Records get their
//! display tag from an explicit source-identifier → tag table keyed by file
//! stem, so the labeling rules live in data here rather than as string
//! matching inside the core.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use kodeks_core::RawRecord;

/// Tag used when a file stem has no entry in the table.
pub const FALLBACK_TAG: &str = "Закон";

/// Table mapping a source identifier (data-file stem) to its display tag.
pub type SourceTags = HashMap<String, String>;

/// The default table: the five datasets the upstream parsers produce.
pub fn default_source_tags() -> SourceTags {
    [
        ("civil_code_parsed", "ЦКУ • Цивільний кодекс"),
        ("civil_procedure_code_parsed", "ЦПК • Цивільний процес"),
        ("family_code_parsed", "СКУ • Сімейний кодекс"),
        ("mobilization_parsed", "ЗУ • Мобілізація"),
        ("intelectual_property_parsed", "ЗУ • Інтелектуальна власність"),
    ]
    .into_iter()
    .map(|(stem, tag)| (stem.to_string(), tag.to_string()))
    .collect()
}

/// Load and merge article records from JSON files, in argument order.
///
/// A missing file is skipped with a warning, matching the behavior of the
/// upstream data pipeline where some codes may not be parsed yet. A file
/// that exists but fails to parse is an error.
pub fn load_articles<P: AsRef<Path>>(
    paths: &[P],
    tags: &SourceTags,
) -> anyhow::Result<Vec<RawRecord>> {
    let mut records = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "data file not found; skipping");
                continue;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()))
            }
        };

        let mut parsed: Vec<RawRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        let tag = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| tags.get(stem))
            .map_or(FALLBACK_TAG, String::as_str);
        for record in &mut parsed {
            if record.source_tag.is_empty() {
                record.source_tag = tag.to_string();
            }
        }

        tracing::info!(count = parsed.len(), path = %path.display(), "loaded articles");
        records.extend(parsed);
    }

    Ok(records)
}
