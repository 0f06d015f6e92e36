use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lemma::LemmaFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// Everything outside lowercase ASCII letters, digits and whitespace.
pub const STRIP_PATTERN: &str = r"[^a-z0-9\s]";

/// The question normalization pipeline.
///
/// lowercase → strip `[^a-z0-9\s]` → whitespace split → stop words → noun
/// lemma → stop words. The second stop pass catches lemmas that land on a
/// stop word ("ands" → "and").
pub struct FaqAnalyzer {
    inner: PipelineAnalyzer,
}

impl FaqAnalyzer {
    pub fn new() -> Result<Self> {
        let stop = Arc::new(StopFilter::new());
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(STRIP_PATTERN, "")?))
            .add_filter(stop.clone())
            .add_filter(Arc::new(LemmaFilter::new()))
            .add_filter(stop)
            .with_name("faq");

        Ok(Self { inner: analyzer })
    }

    /// Stage listing of the underlying pipeline.
    pub fn describe(&self) -> String {
        self.inner.describe()
    }
}

impl Analyzer for FaqAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "faq"
    }
}

impl Debug for FaqAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaqAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn texts(analyzer: &FaqAnalyzer, input: &str) -> Vec<String> {
        analyzer
            .analyze(input)
            .unwrap()
            .map(|t: Token| t.text)
            .collect()
    }

    #[test]
    fn test_faq_analyzer() {
        let analyzer = FaqAnalyzer::new().unwrap();

        assert_eq!(texts(&analyzer, "How do I apply?"), vec!["apply"]);
        assert_eq!(
            texts(&analyzer, "What are the tuition fees for Students?"),
            vec!["tuition", "fee", "student"]
        );
    }

    #[test]
    fn test_punctuation_fuses_words() {
        let analyzer = FaqAnalyzer::new().unwrap();
        assert_eq!(texts(&analyzer, "E-mail address"), vec!["email", "address"]);
    }

    #[test]
    fn test_lemma_landing_on_stop_word_is_removed() {
        let analyzer = FaqAnalyzer::new().unwrap();
        assert_eq!(texts(&analyzer, "ifs ands buts"), vec!["ifs"]);
    }

    #[test]
    fn test_describe() {
        let analyzer = FaqAnalyzer::new().unwrap();
        assert_eq!(
            analyzer.describe(),
            "faq[lowercase>pattern_replace>whitespace>stop>lemma>stop]"
        );
        assert_eq!(analyzer.name(), "faq");
    }
}
