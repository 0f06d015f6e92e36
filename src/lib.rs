//! # faqrank
//!
//! Answers free-text questions from a categorized FAQ dataset.
//!
//! ## Pipeline
//!
//! - Text normalization shared by training and queries ([`analysis`])
//! - Dataset expansion with alternate phrasings ([`faq::dataset`])
//! - Oversampling of small categories for classifier training ([`faq::balance`])
//! - TF-IDF + one-vs-rest logistic regression intent classification ([`ml`])
//! - Cosine-similarity retrieval within the predicted category ([`faq::retriever`])
//! - Confidence thresholds and fallback responses ([`faq::answer`])
//!
//! ## Example
//!
//! ```no_run
//! use faqrank::config::FaqConfig;
//! use faqrank::faq::FaqContext;
//!
//! # fn main() -> faqrank::error::Result<()> {
//! let context = FaqContext::load("dataset.json", FaqConfig::default())?;
//! let result = context.answer("How do I apply?");
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod faq;
pub mod ml;

pub mod prelude {
    pub use crate::config::FaqConfig;
    pub use crate::error::{FaqError, Result};
    pub use crate::faq::{FaqContext, FallbackKind, QueryResult, ScoredRecord};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
