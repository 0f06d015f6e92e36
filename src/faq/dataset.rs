//! Dataset loading and expansion.
//!
//! A dataset is a JSON array of FAQ items:
//!
//! ```json
//! [
//!   {
//!     "category": "Admissions",
//!     "question": "How do I apply?",
//!     "answer": "Visit aupp.edu.kh.",
//!     "alt_questions": ["What is the application process?"]
//!   }
//! ]
//! ```
//!
//! Each item expands into one row for its primary question plus one row per
//! alternate phrasing. Items that are not objects, or whose fields have the
//! wrong JSON type, are skipped with a warning rather than failing the load.
//! Rows without a category are dropped after expansion.

use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};

use crate::analysis::normalizer::TextNormalizer;
use crate::error::{FaqError, Result};
use crate::faq::record::{Corpus, CorpusEntry, FaqRecord};

/// Category assigned to items without one. Such rows never reach the corpus.
pub const UNKNOWN_CATEGORY: &str = "UNKNOWN";

/// Why an item was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The item is not a JSON object.
    NotAnObject { found: &'static str },
    /// A field is present with an unusable type.
    WrongFieldType {
        field: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotAnObject { found } => write!(f, "expected an object, found {found}"),
            SkipReason::WrongFieldType { field, found } => {
                write!(f, "field '{field}' should be a string, found {found}")
            }
        }
    }
}

/// What happened to one dataset item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Rows produced by the item, before UNKNOWN filtering.
    Expanded(Vec<FaqRecord>),
    Skipped(SkipReason),
}

/// Result of expanding a dataset.
#[derive(Debug, Clone)]
pub struct Expansion {
    /// Surviving rows with their normalized questions.
    pub corpus: Corpus,
    /// One outcome per input item, in input order.
    pub outcomes: Vec<ItemOutcome>,
    /// Rows removed because their category was missing or UNKNOWN.
    pub dropped_unknown: usize,
}

impl Expansion {
    /// `(item index, reason)` for every skipped item.
    pub fn skipped(&self) -> impl Iterator<Item = (usize, &SkipReason)> {
        self.outcomes
            .iter()
            .enumerate()
            .filter_map(|(i, outcome)| match outcome {
                ItemOutcome::Skipped(reason) => Some((i, reason)),
                ItemOutcome::Expanded(_) => None,
            })
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped().count()
    }

    pub fn item_count(&self) -> usize {
        self.outcomes.len()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Read an optional string field; `null` counts as absent.
fn string_field<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> std::result::Result<Option<&'a str>, SkipReason> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(SkipReason::WrongFieldType {
            field,
            found: json_kind(other),
        }),
    }
}

fn expand_item(item: &Value) -> std::result::Result<Vec<FaqRecord>, SkipReason> {
    let object = item.as_object().ok_or(SkipReason::NotAnObject {
        found: json_kind(item),
    })?;

    let category = match string_field(object, "category")? {
        Some(c) if !c.is_empty() => c,
        _ => UNKNOWN_CATEGORY,
    };
    let question = string_field(object, "question")?.unwrap_or_default();
    let answer = string_field(object, "answer")?.unwrap_or_default();

    let mut rows = vec![FaqRecord::new(category, question, answer)];

    if let Some(Value::Array(alternates)) = object.get("alt_questions") {
        rows.extend(
            alternates
                .iter()
                .filter_map(Value::as_str)
                .filter(|alt| !alt.is_empty())
                .map(|alt| FaqRecord::new(category, alt, answer)),
        );
    }

    Ok(rows)
}

/// Expand raw dataset items into a corpus.
pub fn expand(items: &[Value], normalizer: &TextNormalizer) -> Result<Expansion> {
    let mut outcomes = Vec::with_capacity(items.len());
    let mut rows = Vec::new();

    for (index, item) in items.iter().enumerate() {
        match expand_item(item) {
            Ok(records) => {
                rows.extend(records.iter().cloned());
                outcomes.push(ItemOutcome::Expanded(records));
            }
            Err(reason) => {
                log::warn!("Skipping dataset item {index}: {reason}");
                outcomes.push(ItemOutcome::Skipped(reason));
            }
        }
    }

    let total = rows.len();
    rows.retain(|r| r.category != UNKNOWN_CATEGORY);
    let dropped_unknown = total - rows.len();
    if dropped_unknown > 0 {
        log::info!("Dropped {dropped_unknown} rows without a category");
    }

    let entries = rows
        .into_iter()
        .map(|record| {
            let processed_question = normalizer.normalize(&record.question)?;
            Ok(CorpusEntry {
                record,
                processed_question,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::info!(
        "Expanded {} items into {} corpus rows",
        items.len(),
        entries.len()
    );

    Ok(Expansion {
        corpus: Corpus::new(entries),
        outcomes,
        dropped_unknown,
    })
}

/// Parse dataset JSON text and expand it.
pub fn parse_dataset(content: &str, normalizer: &TextNormalizer) -> Result<Expansion> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| FaqError::dataset_load(format!("invalid JSON: {e}")))?;

    match value {
        Value::Array(items) => expand(&items, normalizer),
        other => Err(FaqError::dataset_load(format!(
            "expected a JSON array of items, found {}",
            json_kind(&other)
        ))),
    }
}

/// Read and expand the dataset at `path`.
pub fn load_dataset<P: AsRef<Path>>(path: P, normalizer: &TextNormalizer) -> Result<Expansion> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| FaqError::dataset_load(format!("{}: {e}", path.display())))?;
    parse_dataset(&content, normalizer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::new().unwrap()
    }

    #[test]
    fn test_expand_with_alternates() {
        let items = vec![json!({
            "category": "Admissions",
            "question": "How do I apply?",
            "answer": "Visit aupp.edu.kh.",
            "alt_questions": ["What is the application process?", "", 42, "Where to apply?"]
        })];

        let expansion = expand(&items, &normalizer()).unwrap();
        let corpus = &expansion.corpus;

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.entries()[0].processed_question, "apply");
        assert_eq!(corpus.entries()[2].record.question, "Where to apply?");
        assert!(
            corpus
                .entries()
                .iter()
                .all(|e| e.record.answer == "Visit aupp.edu.kh.")
        );
        assert_eq!(expansion.skipped_count(), 0);
    }

    #[test]
    fn test_non_object_item_is_skipped() {
        let record = json!({"category": "Finance", "question": "Tuition?", "answer": "$"});
        let with_junk = vec![record.clone(), json!("not a record"), json!(7)];
        let without = vec![record];

        let a = expand(&with_junk, &normalizer()).unwrap();
        let b = expand(&without, &normalizer()).unwrap();

        assert_eq!(a.corpus, b.corpus);
        assert_eq!(a.skipped_count(), 2);
        assert_eq!(
            a.skipped().next(),
            Some((1, &SkipReason::NotAnObject { found: "a string" }))
        );
    }

    #[test]
    fn test_wrong_field_type_is_skipped() {
        let items = vec![json!({"category": "Finance", "question": ["a"], "answer": "x"})];
        let expansion = expand(&items, &normalizer()).unwrap();

        assert!(expansion.corpus.is_empty());
        assert_eq!(
            expansion.outcomes[0],
            ItemOutcome::Skipped(SkipReason::WrongFieldType {
                field: "question",
                found: "an array"
            })
        );
    }

    #[test]
    fn test_unknown_categories_dropped() {
        let items = vec![
            json!({"question": "No category", "answer": "a", "alt_questions": ["alt"]}),
            json!({"category": null, "question": "Null", "answer": "a"}),
            json!({"category": "", "question": "Empty", "answer": "a"}),
            json!({"category": "UNKNOWN", "question": "Literal", "answer": "a"}),
            json!({"category": "Campus", "question": "Library?", "answer": "b"}),
        ];

        let expansion = expand(&items, &normalizer()).unwrap();

        assert_eq!(expansion.dropped_unknown, 5);
        assert_eq!(expansion.corpus.len(), 1);
        assert_eq!(expansion.corpus.categories(), vec!["Campus"]);
    }

    #[test]
    fn test_missing_fields_default_and_bad_alternates_ignored() {
        let items = vec![json!({"category": "Campus", "alt_questions": "not a list"})];
        let expansion = expand(&items, &normalizer()).unwrap();

        assert_eq!(expansion.corpus.len(), 1);
        let entry = &expansion.corpus.entries()[0];
        assert_eq!(entry.record.question, "");
        assert_eq!(entry.record.answer, "");
        assert_eq!(entry.processed_question, "");
    }

    #[test]
    fn test_parse_dataset_errors() {
        let n = normalizer();
        assert!(matches!(
            parse_dataset("{not json", &n),
            Err(FaqError::DatasetLoad(_))
        ));
        assert!(matches!(
            parse_dataset(r#"{"category": "x"}"#, &n),
            Err(FaqError::DatasetLoad(_))
        ));
        assert!(matches!(
            load_dataset("/definitely/not/here.json", &n),
            Err(FaqError::DatasetLoad(_))
        ));
    }
}
