//! TF-IDF vectorizer for text feature extraction.
//!
//! The vectorizer follows the conventions of the common scikit-learn
//! `TfidfVectorizer` defaults so that the models trained on top behave the
//! same way:
//!
//! - terms come from an [`Analyzer`] (by default [`TermAnalyzer`]);
//! - document-frequency filters `min_df` / `max_df` accept either an absolute
//!   count or a proportion of the corpus;
//! - the vocabulary is optionally capped at the `max_features` terms with the
//!   highest corpus frequency, ties resolved alphabetically;
//! - weights are raw counts times a smoothed idf `ln((1 + n) / (1 + df)) + 1`;
//! - every vector is L2-normalized, so cosine similarity is a dot product.

use std::collections::BTreeMap;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, TermAnalyzer};
use crate::error::{FaqError, Result};

/// A document-frequency bound: an absolute document count or a proportion of
/// the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocFrequency {
    /// Absolute number of documents.
    Count(usize),
    /// Fraction of documents in `[0, 1]`.
    Proportion(f64),
}

impl DocFrequency {
    /// Resolve the bound against a corpus of `n_documents`.
    pub fn resolve(&self, n_documents: usize) -> f64 {
        match *self {
            DocFrequency::Count(count) => count as f64,
            DocFrequency::Proportion(p) => p * n_documents as f64,
        }
    }

    fn validate(&self, field: &str) -> Result<()> {
        match *self {
            DocFrequency::Proportion(p) if !(0.0..=1.0).contains(&p) => Err(
                FaqError::invalid_config(format!("{field} proportion must be in [0, 1], got {p}")),
            ),
            _ => Ok(()),
        }
    }
}

/// Configuration for a [`TfIdfVectorizer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfIdfConfig {
    /// Keep at most this many terms (by corpus frequency). `None` keeps all.
    pub max_features: Option<usize>,
    /// Drop terms appearing in fewer documents than this.
    pub min_df: DocFrequency,
    /// Drop terms appearing in more documents than this.
    pub max_df: DocFrequency,
}

impl Default for TfIdfConfig {
    fn default() -> Self {
        Self {
            max_features: Some(5000),
            min_df: DocFrequency::Count(1),
            max_df: DocFrequency::Proportion(1.0),
        }
    }
}

impl TfIdfConfig {
    /// Check the configuration for out-of-range values.
    pub fn validate(&self) -> Result<()> {
        if self.max_features == Some(0) {
            return Err(FaqError::invalid_config("max_features must be positive"));
        }
        self.min_df.validate("min_df")?;
        self.max_df.validate("max_df")
    }
}

/// A sparse, sorted-by-index feature vector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from `(index, value)` pairs; zero values are dropped.
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(_, v)| v != 0.0);
        entries.sort_by_key(|&(i, _)| i);
        SparseVector { entries }
    }

    /// Non-zero `(index, value)` pairs in index order.
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether every component is zero.
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt()
    }

    /// Dot product with another sparse vector.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_val) = self.entries[i];
            let (b_idx, b_val) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_val * b_val;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Dot product with a dense weight slice.
    pub fn dot_dense(&self, weights: &[f64]) -> f64 {
        self.entries
            .iter()
            .map(|&(i, v)| weights.get(i).copied().unwrap_or(0.0) * v)
            .sum()
    }

    /// Cosine similarity; 0 when either vector is zero.
    pub fn cosine(&self, other: &SparseVector) -> f64 {
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            0.0
        } else {
            self.dot(other) / denom
        }
    }

    fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, v) in &mut self.entries {
                *v /= norm;
            }
        }
    }
}

/// TF-IDF vectorizer for text feature extraction.
pub struct TfIdfVectorizer {
    config: TfIdfConfig,
    /// Vocabulary: term -> feature index (indices follow term order).
    vocabulary: AHashMap<String, usize>,
    /// Inverse document frequency for each feature index.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("config", &self.config)
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create an unfitted vectorizer using the [`TermAnalyzer`].
    pub fn new(config: TfIdfConfig) -> Result<Self> {
        Ok(Self::with_analyzer(config, Arc::new(TermAnalyzer::new()?)))
    }

    /// Create an unfitted vectorizer with a custom analyzer.
    pub fn with_analyzer(config: TfIdfConfig, analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            config,
            vocabulary: AHashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer,
        }
    }

    /// Fit the vocabulary and idf weights on `documents`.
    ///
    /// Pruning may leave an empty vocabulary on small corpora; the vectorizer
    /// then maps every document to the zero vector.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        self.config.validate()?;
        self.n_documents = documents.len();

        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();
        let mut term_frequency: AHashMap<String, usize> = AHashMap::new();

        for doc in documents {
            let tokens = self.tokenize(doc)?;
            let mut seen = AHashSet::new();
            for token in tokens {
                *term_frequency.entry(token.clone()).or_insert(0) += 1;
                if seen.insert(token.clone()) {
                    *document_frequency.entry(token).or_insert(0) += 1;
                }
            }
        }

        let min_count = self.config.min_df.resolve(self.n_documents);
        let max_count = self.config.max_df.resolve(self.n_documents);

        // BTreeMap keeps terms sorted, which fixes both feature order and tie-breaks.
        let mut kept: BTreeMap<String, usize> = document_frequency
            .into_iter()
            .filter(|(_, df)| {
                let df = *df as f64;
                df >= min_count && df <= max_count
            })
            .collect();

        if let Some(limit) = self.config.max_features
            && kept.len() > limit
        {
            let mut ranked: Vec<(&String, usize)> = kept
                .keys()
                .map(|term| (term, term_frequency.get(term).copied().unwrap_or(0)))
                .collect();
            // Stable sort over alphabetical order: equal frequencies stay alphabetical.
            ranked.sort_by(|a, b| b.1.cmp(&a.1));
            let retained: AHashSet<String> =
                ranked.into_iter().take(limit).map(|(t, _)| t.clone()).collect();
            kept.retain(|term, _| retained.contains(term));
        }

        if kept.is_empty() {
            log::warn!(
                "TF-IDF pruning left no terms (documents={}, min_df={:?}, max_df={:?}); all vectors will be zero",
                self.n_documents,
                self.config.min_df,
                self.config.max_df
            );
        }

        let n = self.n_documents as f64;
        self.vocabulary = AHashMap::with_capacity(kept.len());
        self.idf = Vec::with_capacity(kept.len());
        for (idx, (term, df)) in kept.into_iter().enumerate() {
            self.idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            self.vocabulary.insert(term, idx);
        }

        log::debug!(
            "Fitted TF-IDF vocabulary of {} terms over {} documents",
            self.vocabulary.len(),
            self.n_documents
        );

        Ok(())
    }

    /// Fit on `documents` and return their vectors.
    pub fn fit_transform(&mut self, documents: &[String]) -> Result<Vec<SparseVector>> {
        self.fit(documents)?;
        documents.iter().map(|doc| self.transform(doc)).collect()
    }

    /// Transform a document into an L2-normalized TF-IDF vector.
    pub fn transform(&self, document: &str) -> Result<SparseVector> {
        let mut counts: AHashMap<usize, f64> = AHashMap::new();
        for token in self.tokenize(document)? {
            if let Some(&idx) = self.vocabulary.get(&token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(idx, count)| (idx, count * self.idf[idx]))
            .collect();
        let mut vector = SparseVector::from_entries(entries);
        vector.l2_normalize();
        Ok(vector)
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyzer.analyze(text)?.map(|token| token.text).collect())
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Whether `term` survived pruning.
    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    /// The idf weight of `term`, if it is in the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&idx| self.idf[idx])
    }

    /// Number of documents the vectorizer was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// The configuration this vectorizer was created with.
    pub fn config(&self) -> &TfIdfConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tfidf_vectorizer() {
        let documents = docs(&["apply admission", "tuition fee", "apply deadline"]);

        let mut vectorizer = TfIdfVectorizer::new(TfIdfConfig::default()).unwrap();
        vectorizer.fit(&documents).unwrap();
        assert_eq!(vectorizer.vocabulary_size(), 5);
        assert_eq!(vectorizer.n_documents(), 3);

        // ln(4/3) + 1 for a term in two documents, ln(4/2) + 1 for one.
        let apply = vectorizer.idf("apply").unwrap();
        let tuition = vectorizer.idf("tuition").unwrap();
        assert!((apply - ((4.0f64 / 3.0).ln() + 1.0)).abs() < 1e-12);
        assert!((tuition - (2.0f64.ln() + 1.0)).abs() < 1e-12);

        let vector = vectorizer.transform("apply apply deadline").unwrap();
        assert_eq!(vector.nnz(), 2);
        assert!((vector.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_char_terms_ignored() {
        let mut vectorizer = TfIdfVectorizer::new(TfIdfConfig::default()).unwrap();
        vectorizer.fit(&docs(&["a b apply", "c apply"])).unwrap();

        assert_eq!(vectorizer.vocabulary_size(), 1);
        assert!(vectorizer.contains_term("apply"));
    }

    #[test]
    fn test_document_frequency_filters() {
        let documents = docs(&[
            "campus housing fee",
            "campus housing deadline",
            "campus library",
            "campus parking",
        ]);
        let config = TfIdfConfig {
            max_features: Some(5000),
            min_df: DocFrequency::Count(2),
            max_df: DocFrequency::Proportion(0.9),
        };

        let mut vectorizer = TfIdfVectorizer::new(config).unwrap();
        vectorizer.fit(&documents).unwrap();

        // "campus" is in 4/4 documents (> 3.6), singletons are below min_df.
        assert_eq!(vectorizer.vocabulary_size(), 1);
        assert!(vectorizer.contains_term("housing"));
        assert!(!vectorizer.contains_term("campus"));
        assert!(!vectorizer.contains_term("library"));
    }

    #[test]
    fn test_max_features_keeps_most_frequent_then_alphabetical() {
        let documents = docs(&["zebra zebra apple", "mango apple", "kiwi"]);
        let config = TfIdfConfig {
            max_features: Some(2),
            ..TfIdfConfig::default()
        };

        let mut vectorizer = TfIdfVectorizer::new(config).unwrap();
        vectorizer.fit(&documents).unwrap();

        // apple and zebra both occur twice; kiwi and mango once.
        assert!(vectorizer.contains_term("apple"));
        assert!(vectorizer.contains_term("zebra"));
        assert!(!vectorizer.contains_term("kiwi"));
        assert!(!vectorizer.contains_term("mango"));

        let config = TfIdfConfig {
            max_features: Some(3),
            ..TfIdfConfig::default()
        };
        let mut vectorizer = TfIdfVectorizer::new(config).unwrap();
        vectorizer.fit(&documents).unwrap();
        assert!(vectorizer.contains_term("kiwi"));
        assert!(!vectorizer.contains_term("mango"));
    }

    #[test]
    fn test_empty_vocabulary_yields_zero_vectors() {
        let config = TfIdfConfig {
            max_features: None,
            min_df: DocFrequency::Count(2),
            max_df: DocFrequency::Proportion(0.9),
        };
        let mut vectorizer = TfIdfVectorizer::new(config).unwrap();
        let vectors = vectorizer
            .fit_transform(&docs(&["housing fee", "library card"]))
            .unwrap();

        assert_eq!(vectorizer.vocabulary_size(), 0);
        assert!(vectors.iter().all(SparseVector::is_zero));
    }

    #[test]
    fn test_invalid_proportion_rejected() {
        let config = TfIdfConfig {
            max_df: DocFrequency::Proportion(1.5),
            ..TfIdfConfig::default()
        };
        let mut vectorizer = TfIdfVectorizer::new(config).unwrap();
        assert!(matches!(
            vectorizer.fit(&docs(&["apply"])),
            Err(FaqError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_sparse_vector_ops() {
        let a = SparseVector::from_entries(vec![(3, 1.0), (0, 2.0), (5, 0.0)]);
        let b = SparseVector::from_entries(vec![(0, 1.0), (3, 1.0)]);

        assert_eq!(a.entries(), &[(0, 2.0), (3, 1.0)]);
        assert_eq!(a.dot(&b), 3.0);
        assert_eq!(a.dot_dense(&[1.0, 0.0, 0.0, 2.0]), 4.0);
        assert!((a.cosine(&a) - 1.0).abs() < 1e-12);
        assert_eq!(a.cosine(&SparseVector::default()), 0.0);
    }

    #[test]
    fn test_doc_frequency_serde() {
        let count: DocFrequency = serde_json::from_str("2").unwrap();
        let proportion: DocFrequency = serde_json::from_str("0.9").unwrap();

        assert_eq!(count, DocFrequency::Count(2));
        assert_eq!(proportion, DocFrequency::Proportion(0.9));
        assert_eq!(proportion.resolve(10), 9.0);
    }
}
