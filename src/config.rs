//! Configuration for the FAQ pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FaqError, Result};
use crate::faq::answer::AnswerConfig;
use crate::faq::balance::BalanceConfig;
use crate::faq::retriever::RetrieverConfig;
use crate::ml::intent_classifier::ClassifierConfig;

/// Settings for every pipeline stage. Missing sections and fields take
/// their defaults when deserialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqConfig {
    /// Oversampling of small categories before classifier training.
    pub balance: BalanceConfig,
    /// Intent classifier vectorizer and solver.
    pub classifier: ClassifierConfig,
    /// Similarity index vectorizer.
    pub retriever: RetrieverConfig,
    /// Thresholds applied when answering.
    pub answer: AnswerConfig,
}

impl FaqConfig {
    /// Read a JSON configuration file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            FaqError::invalid_config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: FaqConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section for out-of-range values.
    pub fn validate(&self) -> Result<()> {
        self.balance.validate()?;
        self.classifier.validate()?;
        self.retriever.validate()?;
        self.answer.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::tfidf::DocFrequency;

    #[test]
    fn test_faq_config_default() {
        let config = FaqConfig::default();
        assert_eq!(config.balance.min_class_size, 15);
        assert_eq!(config.balance.seed, 42);
        assert_eq!(config.classifier.c, 1.0);
        assert_eq!(config.retriever.vectorizer.min_df, DocFrequency::Count(2));
        assert_eq!(config.retriever.vectorizer.max_df, DocFrequency::Proportion(0.9));
        assert_eq!(config.answer.threshold, 0.25);
        assert_eq!(config.answer.top_k, 3);
        assert_eq!(config.answer.related_threshold, 0.15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: FaqConfig =
            serde_json::from_str(r#"{"answer": {"threshold": 0.4}, "balance": {"seed": 7}}"#)
                .unwrap();

        assert_eq!(config.answer.threshold, 0.4);
        assert_eq!(config.answer.top_k, 3);
        assert_eq!(config.balance.seed, 7);
        assert_eq!(config.balance.min_class_size, 15);
        assert_eq!(config.retriever, RetrieverConfig::default());
    }

    #[test]
    fn test_config_round_trip() {
        let config = FaqConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: FaqConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_from_file_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"answer": {"top_k": 0}}"#).unwrap();

        assert!(matches!(
            FaqConfig::from_file(&path),
            Err(FaqError::InvalidConfig(_))
        ));
        assert!(FaqConfig::from_file(dir.path().join("missing.json")).is_err());
    }
}
