//! Core analyzer trait definition.
//!
//! Analyzers are the complete text processing pipeline:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Tokens
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom char filter, tokenizer and filter chains
//! - [`FaqAnalyzer`](super::faq::FaqAnalyzer) - The question normalization pipeline
//! - [`TermAnalyzer`](super::term::TermAnalyzer) - Term extraction for the TF-IDF vectorizers
//!
//! # Examples
//!
//! ```
//! use faqrank::analysis::analyzer::Analyzer;
//! use faqrank::analysis::analyzer::FaqAnalyzer;
//!
//! let analyzer = FaqAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("How do I apply?").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].text, "apply");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so a trained context holding analyzers can
/// be shared across threads.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
