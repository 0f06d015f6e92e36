//! Text normalization shared by training and query time.
//!
//! A [`TextNormalizer`] turns free text into the canonical space-joined form
//! that every model in the crate is trained on. Training rows and incoming
//! queries must go through the same instance (or an identical one, as
//! witnessed by [`TextNormalizer::resource_signature`]); a mismatch silently
//! degrades matching.
//!
//! # Examples
//!
//! ```
//! use faqrank::analysis::normalizer::TextNormalizer;
//!
//! let normalizer = TextNormalizer::new().unwrap();
//! assert_eq!(normalizer.normalize("How do I apply?").unwrap(), "apply");
//! assert_eq!(
//!     normalizer.normalize("Where are the Dormitories?").unwrap(),
//!     "dormitory"
//! );
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, FaqAnalyzer};
use crate::analysis::token_filter::stop::ENGLISH_STOP_WORDS;
use crate::error::Result;

/// Deterministic question normalizer.
#[derive(Clone, Debug)]
pub struct TextNormalizer {
    analyzer: Arc<FaqAnalyzer>,
    signature: String,
}

impl TextNormalizer {
    /// Create the standard normalizer.
    pub fn new() -> Result<Self> {
        let analyzer = FaqAnalyzer::new()?;

        let mut hasher = crc32fast::Hasher::new();
        for word in ENGLISH_STOP_WORDS {
            hasher.update(word.as_bytes());
            hasher.update(b"\n");
        }
        let signature = format!("{}#stop:{:08x}", analyzer.describe(), hasher.finalize());

        Ok(TextNormalizer {
            analyzer: Arc::new(analyzer),
            signature,
        })
    }

    /// Normalize `text` into space-separated lemmas.
    pub fn normalize(&self, text: &str) -> Result<String> {
        let tokens: Vec<String> = self.analyzer.analyze(text)?.map(|t| t.text).collect();
        Ok(tokens.join(" "))
    }

    /// Identifies the resources (pipeline stages, stop-word list) this
    /// normalizer was built from. Trained artifacts are only valid for the
    /// signature they were built under.
    pub fn resource_signature(&self) -> &str {
        &self.signature
    }
}
