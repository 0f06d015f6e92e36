//! Similarity retrieval within a category.
//!
//! The [`SimilarityIndex`] holds its own TF-IDF vectorizer, fitted on the
//! corpus questions independently of the intent classifier, and one
//! L2-normalized vector per corpus row. Ranking is restricted to the rows of
//! a single category.

use serde::{Deserialize, Serialize};

use crate::error::{FaqError, Result};
use crate::faq::record::{Corpus, FaqRecord};
use crate::ml::tfidf::{DocFrequency, SparseVector, TfIdfConfig, TfIdfVectorizer};

/// Retrieval index settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrieverConfig {
    pub vectorizer: TfIdfConfig,
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        Self {
            vectorizer: TfIdfConfig {
                max_features: Some(5000),
                min_df: DocFrequency::Count(2),
                max_df: DocFrequency::Proportion(0.9),
            },
        }
    }
}

impl RetrieverConfig {
    pub fn validate(&self) -> Result<()> {
        self.vectorizer.validate()
    }
}

/// A corpus record with its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: FaqRecord,
    pub similarity: f64,
    /// Row index in the corpus the index was built from.
    pub row: usize,
}

/// TF-IDF vectors for every corpus row.
#[derive(Debug)]
pub struct SimilarityIndex {
    vectorizer: TfIdfVectorizer,
    vectors: Vec<SparseVector>,
    /// CRC32 over the processed questions the index was built from.
    checksum: u32,
}

fn corpus_checksum(corpus: &Corpus) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    for entry in corpus.entries() {
        hasher.update(entry.processed_question.as_bytes());
        hasher.update(b"\n");
    }
    hasher.finalize()
}

impl SimilarityIndex {
    /// Fit the vectorizer on the corpus questions and vectorize every row.
    pub fn build(corpus: &Corpus, config: &RetrieverConfig) -> Result<Self> {
        let mut vectorizer = TfIdfVectorizer::new(config.vectorizer.clone())?;
        let vectors = vectorizer.fit_transform(&corpus.processed_questions())?;

        log::debug!(
            "Built similarity index over {} rows with {} terms",
            vectors.len(),
            vectorizer.vocabulary_size()
        );

        Ok(Self {
            vectorizer,
            vectors,
            checksum: corpus_checksum(corpus),
        })
    }

    /// Whether this index was built from exactly the rows of `corpus`.
    pub fn covers(&self, corpus: &Corpus) -> bool {
        self.vectors.len() == corpus.len() && self.checksum == corpus_checksum(corpus)
    }

    /// Vectorize a normalized query.
    pub fn project(&self, processed_query: &str) -> Result<SparseVector> {
        self.vectorizer.transform(processed_query)
    }

    /// Cosine similarity between `query` and each of `rows`.
    pub fn similarity(&self, query: &SparseVector, rows: &[usize]) -> Result<Vec<f64>> {
        rows.iter()
            .map(|&row| {
                self.vectors
                    .get(row)
                    .map(|v| query.cosine(v))
                    .ok_or_else(|| FaqError::other(format!("row {row} is not in the index")))
            })
            .collect()
    }

    /// Top `top_k` rows of `category`, most similar first. Ties keep corpus order.
    pub fn rank(
        &self,
        processed_query: &str,
        category: &str,
        corpus: &Corpus,
        top_k: usize,
    ) -> Result<Vec<ScoredRecord>> {
        if corpus.len() != self.vectors.len() {
            return Err(FaqError::other(format!(
                "index holds {} rows but the corpus has {}",
                self.vectors.len(),
                corpus.len()
            )));
        }

        let rows: Vec<usize> = corpus.rows_in(category).collect();
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let query = self.project(processed_query)?;
        let scores = self.similarity(&query, &rows)?;

        let mut ranked: Vec<ScoredRecord> = rows
            .into_iter()
            .zip(scores)
            .filter_map(|(row, similarity)| {
                corpus.get(row).map(|entry| ScoredRecord {
                    record: entry.record.clone(),
                    similarity,
                    row,
                })
            })
            .collect();

        ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        ranked.truncate(top_k);
        Ok(ranked)
    }

    /// Number of terms that survived document-frequency pruning.
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    /// Number of indexed rows.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}
