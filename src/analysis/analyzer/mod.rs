//! Analyzer implementations that combine char filters, tokenizers and filters.

pub mod analyzer;
pub mod faq;
pub mod pipeline;
pub mod term;

pub use analyzer::Analyzer;
pub use faq::FaqAnalyzer;
pub use pipeline::PipelineAnalyzer;
pub use term::TermAnalyzer;
