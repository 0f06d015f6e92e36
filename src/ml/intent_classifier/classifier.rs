//! Intent classifier trait definition.

use std::fmt::Debug;

use crate::error::Result;

/// Intent classifier trait.
///
/// Implementations map a normalized question to one of the category labels
/// they were trained on.
pub trait IntentClassifier: Send + Sync + Debug {
    /// Predict the intent for a given (already normalized) query.
    ///
    /// # Arguments
    /// * `query` - The query string to classify
    ///
    /// # Returns
    /// The predicted category label
    fn predict(&self, query: &str) -> Result<String>;

    /// The labels this classifier can return, in sorted order.
    fn classes(&self) -> &[String];

    /// Number of input features the classifier was trained with.
    fn feature_count(&self) -> usize;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
