//! Term extraction analyzer used by the TF-IDF vectorizers.
//!
//! # Pipeline
//!
//! 1. RegexTokenizer (`\b\w\w+\b`, words of two or more characters)
//! 2. LowercaseFilter
//!
//! Input is normally already normalized, so lowercasing is a no-op there; it
//! keeps the vectorizer well-behaved on raw text too.
//!
//! # Examples
//!
//! ```
//! use faqrank::analysis::analyzer::Analyzer;
//! use faqrank::analysis::analyzer::TermAnalyzer;
//!
//! let analyzer = TermAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("apply a Visa").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "apply");
//! assert_eq!(tokens[1].text, "visa");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// Splits text into lowercase terms of at least two word characters.
#[derive(Debug)]
pub struct TermAnalyzer {
    inner: PipelineAnalyzer,
}

impl TermAnalyzer {
    /// Create a new term analyzer.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("term");

        Ok(TermAnalyzer { inner: analyzer })
    }
}

impl Analyzer for TermAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "term"
    }
}
