//! Common types for intent classification.

use serde::{Deserialize, Serialize};

use crate::error::{FaqError, Result};
use crate::ml::logistic::SolverParams;
use crate::ml::tfidf::TfIdfConfig;

/// Training sample for intent classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentSample {
    /// Normalized question text.
    pub query: String,
    /// Intent label (the FAQ category).
    pub intent: String,
}

impl IntentSample {
    pub fn new(query: impl Into<String>, intent: impl Into<String>) -> Self {
        IntentSample {
            query: query.into(),
            intent: intent.into(),
        }
    }
}

/// Configuration for the logistic intent classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Feature extraction settings.
    pub vectorizer: TfIdfConfig,
    /// Inverse regularization strength.
    pub c: f64,
    /// Maximum solver iterations per binary problem.
    pub max_iter: usize,
    /// Relative gradient tolerance.
    pub tolerance: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        let solver = SolverParams::default();
        Self {
            vectorizer: TfIdfConfig::default(),
            c: solver.c,
            max_iter: solver.max_iter,
            tolerance: solver.tolerance,
        }
    }
}

impl ClassifierConfig {
    /// Check the configuration for out-of-range values.
    pub fn validate(&self) -> Result<()> {
        if self.c.is_nan() || self.c <= 0.0 {
            return Err(FaqError::invalid_config(format!(
                "classifier.c must be positive, got {}",
                self.c
            )));
        }
        if self.max_iter == 0 {
            return Err(FaqError::invalid_config("classifier.max_iter must be positive"));
        }
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(FaqError::invalid_config("classifier.tolerance must be positive"));
        }
        self.vectorizer.validate()
    }

    /// Solver parameters derived from this configuration.
    pub fn solver(&self) -> SolverParams {
        SolverParams {
            c: self.c,
            max_iter: self.max_iter,
            tolerance: self.tolerance,
        }
    }
}
