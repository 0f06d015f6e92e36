//! Intent classification for FAQ questions.
//!
//! Questions are mapped to a category by TF-IDF features fed into a
//! one-vs-rest logistic regression.
//!
//! # Architecture
//!
//! - `IntentClassifier` trait: Common interface for all classifiers
//! - `LogisticIntentClassifier`: TF-IDF + logistic regression implementation
//! - `IntentSample`: Training data structure
//! - `ClassifierConfig`: Vectorizer and solver settings
//!
//! # Example
//!
//! ```rust
//! use faqrank::ml::intent_classifier::{self, ClassifierConfig, IntentSample};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let samples = vec![
//!     IntentSample::new("apply", "Admissions"),
//!     IntentSample::new("tuition fee", "Finance"),
//! ];
//!
//! let classifier = intent_classifier::new_logistic(&samples, &ClassifierConfig::default())?;
//! assert_eq!(classifier.predict("tuition")?, "Finance");
//! # Ok(())
//! # }
//! ```

mod classifier;
mod core;
mod logistic_classifier;
mod types;

// Public exports
pub use classifier::IntentClassifier;
pub use core::new_logistic;
pub use logistic_classifier::LogisticIntentClassifier;
pub use types::{ClassifierConfig, IntentSample};
