//! The trained FAQ context and its dataset-keyed cache.
//!
//! A [`FaqContext`] bundles everything a query needs: configuration, the
//! normalizer, the corpus, the intent classifier and the similarity index.
//! It is built once and never mutated; [`ContextCache`] swaps in a freshly
//! built context when the dataset on disk changes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::analysis::normalizer::TextNormalizer;
use crate::config::FaqConfig;
use crate::error::{FaqError, Result};
use crate::faq::answer::{AnswerSelector, QueryResult};
use crate::faq::balance::ClassBalancer;
use crate::faq::dataset::{Expansion, load_dataset, parse_dataset};
use crate::faq::record::Corpus;
use crate::faq::retriever::SimilarityIndex;
use crate::ml::intent_classifier::{self, IntentClassifier, IntentSample};

/// Item-level counts from loading a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub items: usize,
    pub skipped: usize,
    pub dropped_unknown: usize,
}

/// Immutable trained state for answering questions.
#[derive(Debug)]
pub struct FaqContext {
    config: FaqConfig,
    normalizer: TextNormalizer,
    corpus: Corpus,
    classifier: Arc<dyn IntentClassifier>,
    index: SimilarityIndex,
    summary: LoadSummary,
}

impl FaqContext {
    /// Load the dataset at `path` and train every component.
    pub fn load<P: AsRef<Path>>(path: P, config: FaqConfig) -> Result<Self> {
        let normalizer = TextNormalizer::new()?;
        let expansion = load_dataset(path, &normalizer)?;
        Self::from_expansion(expansion, normalizer, config)
    }

    /// Train on an already expanded dataset.
    ///
    /// The classifier learns from the balanced corpus; the similarity index
    /// and the returned records come from the unbalanced one.
    pub fn from_expansion(
        expansion: Expansion,
        normalizer: TextNormalizer,
        config: FaqConfig,
    ) -> Result<Self> {
        config.validate()?;

        let summary = LoadSummary {
            items: expansion.item_count(),
            skipped: expansion.skipped_count(),
            dropped_unknown: expansion.dropped_unknown,
        };
        let corpus = expansion.corpus;
        if corpus.is_empty() {
            return Err(FaqError::training("dataset contains no categorized questions"));
        }

        let balanced = ClassBalancer::new(config.balance.clone()).balance(&corpus);
        let samples: Vec<IntentSample> = balanced
            .entries()
            .iter()
            .map(|e| IntentSample::new(e.processed_question.clone(), e.record.category.clone()))
            .collect();
        let classifier = intent_classifier::new_logistic(&samples, &config.classifier)?;
        let index = SimilarityIndex::build(&corpus, &config.retriever)?;

        log::info!(
            "Trained context: {} rows ({} after balancing), {} categories",
            corpus.len(),
            balanced.len(),
            classifier.classes().len()
        );

        Ok(Self {
            config,
            normalizer,
            corpus,
            classifier,
            index,
            summary,
        })
    }

    /// Assemble a context from prebuilt components.
    ///
    /// `index` must have been built from exactly `corpus`; the classifier may
    /// have been trained on any corpus.
    pub fn from_parts(
        config: FaqConfig,
        normalizer: TextNormalizer,
        corpus: Corpus,
        classifier: Arc<dyn IntentClassifier>,
        index: SimilarityIndex,
    ) -> Result<Self> {
        config.validate()?;
        if !index.covers(&corpus) {
            return Err(FaqError::invalid_config(format!(
                "similarity index ({} rows) was not built from the supplied corpus ({} rows)",
                index.len(),
                corpus.len()
            )));
        }

        Ok(Self {
            config,
            normalizer,
            corpus,
            classifier,
            index,
            summary: LoadSummary::default(),
        })
    }

    /// Answer with the configured threshold and `top_k`.
    pub fn answer(&self, query: &str) -> QueryResult {
        self.answer_with(&AnswerSelector::from_config(&self.config.answer), query)
    }

    /// Answer with an explicit selector.
    pub fn answer_with(&self, selector: &AnswerSelector, query: &str) -> QueryResult {
        selector.answer(self, query)
    }

    pub fn config(&self) -> &FaqConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// The unbalanced corpus backing retrieval.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn classifier(&self) -> &dyn IntentClassifier {
        self.classifier.as_ref()
    }

    pub fn index(&self) -> &SimilarityIndex {
        &self.index
    }

    pub fn summary(&self) -> LoadSummary {
        self.summary
    }
}

/// Identifies the dataset content and text resources a context was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetFingerprint {
    pub path: PathBuf,
    pub len: u64,
    pub crc32: u32,
    pub normalizer: String,
}

impl DatasetFingerprint {
    pub fn of(path: &Path, content: &[u8], normalizer: &TextNormalizer) -> Self {
        DatasetFingerprint {
            path: path.to_path_buf(),
            len: content.len() as u64,
            crc32: crc32fast::hash(content),
            normalizer: normalizer.resource_signature().to_string(),
        }
    }
}

/// Caches the context for one dataset and rebuilds it when the file changes.
#[derive(Debug)]
pub struct ContextCache {
    config: FaqConfig,
    normalizer: TextNormalizer,
    current: Option<(DatasetFingerprint, Arc<FaqContext>)>,
    builds: usize,
}

impl ContextCache {
    pub fn new(config: FaqConfig) -> Result<Self> {
        Ok(Self {
            config,
            normalizer: TextNormalizer::new()?,
            current: None,
            builds: 0,
        })
    }

    /// Return the cached context if the dataset is unchanged, otherwise
    /// rebuild every component from the current file content.
    pub fn get_or_build<P: AsRef<Path>>(&mut self, path: P) -> Result<Arc<FaqContext>> {
        let path = path.as_ref();
        let content = std::fs::read(path)
            .map_err(|e| FaqError::dataset_load(format!("{}: {e}", path.display())))?;
        let fingerprint = DatasetFingerprint::of(path, &content, &self.normalizer);

        if let Some((cached, context)) = &self.current
            && *cached == fingerprint
        {
            log::info!("Dataset {} unchanged, reusing context", path.display());
            return Ok(Arc::clone(context));
        }

        log::info!(
            "Building context for {} (crc32 {:08x})",
            path.display(),
            fingerprint.crc32
        );
        let text = String::from_utf8(content)
            .map_err(|e| FaqError::dataset_load(format!("{}: {e}", path.display())))?;
        let expansion = parse_dataset(&text, &self.normalizer)?;
        let context = Arc::new(FaqContext::from_expansion(
            expansion,
            self.normalizer.clone(),
            self.config.clone(),
        )?);

        self.current = Some((fingerprint, Arc::clone(&context)));
        self.builds += 1;
        Ok(context)
    }

    /// Number of contexts built so far.
    pub fn builds(&self) -> usize {
        self.builds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FaqContext>();
        assert_send_sync::<Arc<FaqContext>>();
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let normalizer = TextNormalizer::new().unwrap();
        let path = Path::new("dataset.json");

        let a = DatasetFingerprint::of(path, b"[1]", &normalizer);
        let b = DatasetFingerprint::of(path, b"[1]", &normalizer);
        let c = DatasetFingerprint::of(path, b"[2]", &normalizer);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len, 3);
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let normalizer = TextNormalizer::new().unwrap();
        let expansion = parse_dataset("[]", &normalizer).unwrap();

        assert!(matches!(
            FaqContext::from_expansion(expansion, normalizer, FaqConfig::default()),
            Err(FaqError::Training(_))
        ));
    }
}
