//! Flattening of hand-authored FAQ sources into a CSV table.
//!
//! The input groups entries by the source they were collected from:
//!
//! ```json
//! [
//!   {
//!     "source": "admissions_page",
//!     "entries": [
//!       {"category": "Admissions", "question": "How do I apply?", "answer": "Online."}
//!     ]
//!   }
//! ]
//! ```
//!
//! The output has one row per entry with the header
//! `id,category,question,answer,source`; ids run from 1 in input order.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FaqError, Result};

/// A batch of entries collected from one source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceBatch {
    pub source: String,
    pub entries: Vec<SourceEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub category: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: usize,
    category: &'a str,
    question: &'a str,
    answer: &'a str,
    source: &'a str,
}

/// Totals for an export run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub total: usize,
    /// Row count per category, sorted by category name.
    pub categories: Vec<(String, usize)>,
}

/// Write `batches` as CSV to `writer`.
pub fn export_to_writer<W: Write>(batches: &[SourceBatch], writer: W) -> Result<ExportSummary> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut id = 0;

    for batch in batches {
        for entry in &batch.entries {
            id += 1;
            csv_writer.serialize(ExportRow {
                id,
                category: &entry.category,
                question: &entry.question,
                answer: &entry.answer,
                source: &batch.source,
            })?;
            *counts.entry(entry.category.as_str()).or_insert(0) += 1;
        }
    }

    // The header comes from the first serialized row; write it explicitly for empty exports.
    if id == 0 {
        csv_writer.write_record(["id", "category", "question", "answer", "source"])?;
    }
    csv_writer.flush()?;

    Ok(ExportSummary {
        total: id,
        categories: counts
            .into_iter()
            .map(|(category, count)| (category.to_string(), count))
            .collect(),
    })
}

/// Read source batches from `input` and write the CSV table to `output`.
pub fn export_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ExportSummary> {
    let input = input.as_ref();
    let content = std::fs::read_to_string(input)
        .map_err(|e| FaqError::dataset_load(format!("{}: {e}", input.display())))?;
    let batches: Vec<SourceBatch> = serde_json::from_str(&content)
        .map_err(|e| FaqError::dataset_load(format!("{}: {e}", input.display())))?;

    let file = std::fs::File::create(output.as_ref())?;
    let summary = export_to_writer(&batches, std::io::BufWriter::new(file))?;
    log::info!(
        "Exported {} rows in {} categories to {}",
        summary.total,
        summary.categories.len(),
        output.as_ref().display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: &str, question: &str, answer: &str) -> SourceEntry {
        SourceEntry {
            category: category.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }

    #[test]
    fn test_export_numbers_rows_sequentially() {
        let batches = vec![
            SourceBatch {
                source: "admissions_page".into(),
                entries: vec![
                    entry("Admissions", "How do I apply?", "Online."),
                    entry("Finance", "Tuition?", "$6,000/year"),
                ],
            },
            SourceBatch {
                source: "handbook".into(),
                entries: vec![entry("Admissions", "Deadline?", "May 1")],
            },
        ];

        let mut buffer = Vec::new();
        let summary = export_to_writer(&batches, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "id,category,question,answer,source");
        assert_eq!(lines[1], "1,Admissions,How do I apply?,Online.,admissions_page");
        assert_eq!(lines[2], "2,Finance,Tuition?,\"$6,000/year\",admissions_page");
        assert_eq!(lines[3], "3,Admissions,Deadline?,May 1,handbook");

        assert_eq!(summary.total, 3);
        assert_eq!(
            summary.categories,
            vec![("Admissions".to_string(), 2), ("Finance".to_string(), 1)]
        );
    }

    #[test]
    fn test_empty_export_writes_header() {
        let mut buffer = Vec::new();
        let summary = export_to_writer(&[], &mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "id,category,question,answer,source\n");
        assert_eq!(summary.total, 0);
    }
}
