//! FAQ rows and the corpus built from them.

use serde::{Deserialize, Serialize};

/// One question/answer pair with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    pub category: String,
    pub question: String,
    pub answer: String,
}

impl FaqRecord {
    pub fn new(
        category: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        FaqRecord {
            category: category.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A corpus row: the original record and its normalized question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub record: FaqRecord,
    pub processed_question: String,
}

/// Ordered, immutable collection of corpus rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    pub fn new(entries: Vec<CorpusEntry>) -> Self {
        Corpus { entries }
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn get(&self, row: usize) -> Option<&CorpusEntry> {
        self.entries.get(row)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalized questions in row order.
    pub fn processed_questions(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| e.processed_question.clone())
            .collect()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            let category = entry.record.category.as_str();
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Row count per category, in order of first appearance.
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        self.categories()
            .into_iter()
            .map(|category| (category.to_string(), self.rows_in(category).count()))
            .collect()
    }

    /// Row indices belonging to `category`, in corpus order.
    pub fn rows_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.record.category == category)
            .map(|(i, _)| i)
    }

    /// A copy of this corpus without any row of `category`.
    pub fn without_category(&self, category: &str) -> Corpus {
        Corpus::new(
            self.entries
                .iter()
                .filter(|e| e.record.category != category)
                .cloned()
                .collect(),
        )
    }
}
