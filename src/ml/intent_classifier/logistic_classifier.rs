//! Intent classifier using TF-IDF features and one-vs-rest logistic
//! regression.

use std::collections::BTreeSet;

use super::classifier::IntentClassifier;
use super::types::{ClassifierConfig, IntentSample};
use crate::error::{FaqError, Result};
use crate::ml::logistic::BinaryLogisticRegression;
use crate::ml::tfidf::{SparseVector, TfIdfVectorizer};

/// One-vs-rest logistic regression intent classifier.
#[derive(Debug)]
pub struct LogisticIntentClassifier {
    /// TF-IDF vectorizer fitted on the training queries.
    vectorizer: TfIdfVectorizer,
    /// Sorted class labels.
    classes: Vec<String>,
    /// No model for one class, a single model for two, one per class otherwise.
    models: Vec<BinaryLogisticRegression>,
}

impl LogisticIntentClassifier {
    /// Train a classifier from samples.
    pub fn train(samples: &[IntentSample], config: &ClassifierConfig) -> Result<Self> {
        if samples.is_empty() {
            return Err(FaqError::training("Training samples cannot be empty"));
        }
        config.validate()?;

        let documents: Vec<String> = samples.iter().map(|s| s.query.clone()).collect();
        let mut vectorizer = TfIdfVectorizer::new(config.vectorizer.clone())?;
        let features = vectorizer.fit_transform(&documents)?;
        let dim = vectorizer.vocabulary_size();

        let classes: Vec<String> = samples
            .iter()
            .map(|s| s.intent.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let solver = config.solver();
        let fit_one_vs_rest = |positive: &str| -> Result<BinaryLogisticRegression> {
            let labels: Vec<bool> = samples.iter().map(|s| s.intent == positive).collect();
            let model = BinaryLogisticRegression::fit(&features, &labels, dim, &solver)?;
            log::debug!(
                "Trained '{}' vs rest in {} iterations (converged: {})",
                positive,
                model.iterations(),
                model.converged()
            );
            Ok(model)
        };

        let models = match classes.len() {
            1 => Vec::new(),
            2 => vec![fit_one_vs_rest(&classes[1])?],
            _ => classes
                .iter()
                .map(|class| fit_one_vs_rest(class))
                .collect::<Result<Vec<_>>>()?,
        };

        log::debug!(
            "Intent classifier trained on {} samples, {} classes, {} features",
            samples.len(),
            classes.len(),
            dim
        );

        Ok(Self {
            vectorizer,
            classes,
            models,
        })
    }

    /// Raw decision values, one per model.
    pub fn decision_values(&self, query: &str) -> Result<Vec<f64>> {
        let features = self.vectorizer.transform(query)?;
        Ok(self.decide(&features))
    }

    fn decide(&self, features: &SparseVector) -> Vec<f64> {
        self.models
            .iter()
            .map(|model| model.decision_function(features))
            .collect()
    }

    fn predict_impl(&self, query: &str) -> Result<String> {
        let scores = self.decision_values(query)?;
        if let Some(bad) = scores.iter().find(|s| !s.is_finite()) {
            return Err(FaqError::intent_prediction(format!(
                "non-finite decision value {bad} for query '{query}'"
            )));
        }

        let index = match self.classes.len() {
            1 => 0,
            2 => usize::from(scores[0] > 0.0),
            _ => {
                let mut best = 0;
                for (i, &score) in scores.iter().enumerate().skip(1) {
                    if score > scores[best] {
                        best = i;
                    }
                }
                best
            }
        };

        self.classes
            .get(index)
            .cloned()
            .ok_or_else(|| FaqError::intent_prediction("classifier has no classes"))
    }
}

impl IntentClassifier for LogisticIntentClassifier {
    fn predict(&self, query: &str) -> Result<String> {
        self.predict_impl(query)
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn feature_count(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    fn name(&self) -> &str {
        "logistic_ovr"
    }
}
