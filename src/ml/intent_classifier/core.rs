//! Helper functions for creating intent classifiers.

use std::sync::Arc;

use crate::error::Result;
use crate::ml::intent_classifier::classifier::IntentClassifier;
use crate::ml::intent_classifier::logistic_classifier::LogisticIntentClassifier;
use crate::ml::intent_classifier::types::{ClassifierConfig, IntentSample};

/// Create a new logistic intent classifier from training samples.
pub fn new_logistic(
    samples: &[IntentSample],
    config: &ClassifierConfig,
) -> Result<Arc<dyn IntentClassifier>> {
    Ok(Arc::new(LogisticIntentClassifier::train(samples, config)?))
}
