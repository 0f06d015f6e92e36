//! Text analysis module for faqrank.
//!
//! This module provides the text processing used on both sides of the
//! pipeline: the question normalizer that training rows and queries share,
//! and the term analyzer the TF-IDF vectorizers tokenize with.

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, FaqAnalyzer, PipelineAnalyzer, TermAnalyzer};
pub use normalizer::TextNormalizer;
pub use token::{Token, TokenStream};
