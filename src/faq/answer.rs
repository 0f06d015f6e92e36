//! Answer selection: intent prediction, ranking and confidence thresholds.

use serde::{Deserialize, Serialize};

use crate::error::{FaqError, Result};
use crate::faq::context::FaqContext;
use crate::faq::retriever::ScoredRecord;

/// Answer selection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerConfig {
    /// Minimum best-match similarity for an answer to be returned.
    pub threshold: f64,
    /// Number of ranked matches kept.
    pub top_k: usize,
    /// Minimum similarity for a secondary match to be shown as related.
    pub related_threshold: f64,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            threshold: 0.25,
            top_k: 3,
            related_threshold: 0.15,
        }
    }
}

impl AnswerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(FaqError::invalid_config("answer.top_k must be positive"));
        }
        for (name, value) in [
            ("answer.threshold", self.threshold),
            ("answer.related_threshold", self.related_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(FaqError::invalid_config(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Why no answer was returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FallbackKind {
    /// The classifier failed on the query.
    PredictionFailed,
    /// The predicted category has no rows.
    NoCandidates { intent: String },
    /// Ranking the predicted category failed.
    RetrievalFailed { intent: String },
    /// The best match scored below the threshold.
    LowConfidence { intent: String, confidence: f64 },
}

impl FallbackKind {
    /// The message shown to the user.
    pub fn message(&self) -> String {
        match self {
            FallbackKind::PredictionFailed => {
                "I could not predict a category for that question.".to_string()
            }
            FallbackKind::NoCandidates { intent } => format!(
                "Intent '{intent}' recognized, but no answers are currently available in that category."
            ),
            FallbackKind::RetrievalFailed { intent } => format!(
                "Intent '{intent}' recognized, but I could not search its answers. Please try again."
            ),
            FallbackKind::LowConfidence { intent, confidence } => format!(
                "I'm sorry, I couldn't find a good answer in the '{intent}' category \
                 (Confidence: {}). Please try rephrasing your question or asking about something else.",
                format_confidence(*confidence)
            ),
        }
    }
}

/// Format a similarity as a percentage with two decimals.
pub fn format_confidence(similarity: f64) -> String {
    format!("{:.2}%", similarity * 100.0)
}

/// Outcome of answering one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryResult {
    Answered {
        intent: String,
        best_match: ScoredRecord,
        top_matches: Vec<ScoredRecord>,
    },
    Fallback {
        kind: FallbackKind,
        response: String,
    },
}

impl QueryResult {
    fn fallback(kind: FallbackKind) -> Self {
        let response = kind.message();
        QueryResult::Fallback { kind, response }
    }

    /// The predicted intent, when one was produced.
    pub fn intent(&self) -> Option<&str> {
        match self {
            QueryResult::Answered { intent, .. } => Some(intent),
            QueryResult::Fallback { kind, .. } => match kind {
                FallbackKind::PredictionFailed => None,
                FallbackKind::NoCandidates { intent }
                | FallbackKind::RetrievalFailed { intent }
                | FallbackKind::LowConfidence { intent, .. } => Some(intent),
            },
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, QueryResult::Answered { .. })
    }

    /// Secondary matches scoring strictly above `min_similarity`.
    pub fn related(&self, min_similarity: f64) -> Vec<&ScoredRecord> {
        match self {
            QueryResult::Answered { top_matches, .. } => top_matches
                .iter()
                .skip(1)
                .filter(|m| m.similarity > min_similarity)
                .collect(),
            QueryResult::Fallback { .. } => Vec::new(),
        }
    }
}

/// Applies the confidence policy on top of classification and retrieval.
#[derive(Debug, Clone, Copy)]
pub struct AnswerSelector {
    threshold: f64,
    top_k: usize,
}

impl AnswerSelector {
    pub fn new(threshold: f64, top_k: usize) -> Self {
        AnswerSelector { threshold, top_k }
    }

    pub fn from_config(config: &AnswerConfig) -> Self {
        Self::new(config.threshold, config.top_k)
    }

    /// Answer `query` against a trained context.
    pub fn answer(&self, context: &FaqContext, query: &str) -> QueryResult {
        let prediction = context
            .normalizer()
            .normalize(query)
            .and_then(|processed| {
                let intent = context.classifier().predict(&processed)?;
                Ok((processed, intent))
            });

        let (processed, intent) = match prediction {
            Ok(found) => found,
            Err(e) => {
                log::warn!("Intent prediction failed for {query:?}: {e}");
                return QueryResult::fallback(FallbackKind::PredictionFailed);
            }
        };

        let ranked = context
            .index()
            .rank(&processed, &intent, context.corpus(), self.top_k)
            .inspect_err(|e| log::error!("Ranking failed for {query:?}: {e}"));
        self.select(intent, ranked)
    }

    /// Apply the confidence policy to a ranking of the predicted category.
    fn select(&self, intent: String, ranked: Result<Vec<ScoredRecord>>) -> QueryResult {
        let ranked = match ranked {
            Ok(ranked) => ranked,
            Err(_) => return QueryResult::fallback(FallbackKind::RetrievalFailed { intent }),
        };

        let Some(best) = ranked.first().cloned() else {
            return QueryResult::fallback(FallbackKind::NoCandidates { intent });
        };

        if best.similarity < self.threshold {
            return QueryResult::fallback(FallbackKind::LowConfidence {
                intent,
                confidence: best.similarity,
            });
        }

        QueryResult::Answered {
            intent,
            best_match: best,
            top_matches: ranked,
        }
    }
}

impl Default for AnswerSelector {
    fn default() -> Self {
        Self::from_config(&AnswerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faq::record::FaqRecord;

    fn scored(question: &str, similarity: f64, row: usize) -> ScoredRecord {
        ScoredRecord {
            record: FaqRecord::new("Admissions", question, "answer"),
            similarity,
            row,
        }
    }

    #[test]
    fn test_fallback_messages() {
        assert_eq!(
            FallbackKind::PredictionFailed.message(),
            "I could not predict a category for that question."
        );
        assert_eq!(
            FallbackKind::NoCandidates {
                intent: "Housing".into()
            }
            .message(),
            "Intent 'Housing' recognized, but no answers are currently available in that category."
        );
        assert_eq!(
            FallbackKind::LowConfidence {
                intent: "Finance".into(),
                confidence: 0.1234
            }
            .message(),
            "I'm sorry, I couldn't find a good answer in the 'Finance' category (Confidence: 12.34%). \
             Please try rephrasing your question or asking about something else."
        );
    }

    #[test]
    fn test_related_filters_secondary_matches() {
        let best = scored("How do I apply?", 0.9, 0);
        let result = QueryResult::Answered {
            intent: "Admissions".into(),
            best_match: best.clone(),
            top_matches: vec![best, scored("Deadline?", 0.4, 1), scored("Fees?", 0.15, 2)],
        };

        let related = result.related(0.15);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].row, 1);
        assert_eq!(result.intent(), Some("Admissions"));
    }

    #[test]
    fn test_query_result_json() {
        let result = QueryResult::fallback(FallbackKind::NoCandidates {
            intent: "Housing".into(),
        });
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["status"], "fallback");
        assert_eq!(json["kind"]["reason"], "no_candidates");
        assert_eq!(json["kind"]["intent"], "Housing");
        assert!(result.related(0.0).is_empty());

        let back: QueryResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_answer_config_validation() {
        assert!(AnswerConfig::default().validate().is_ok());
        let bad = AnswerConfig {
            top_k: 0,
            ..AnswerConfig::default()
        };
        assert!(bad.validate().is_err());
        let bad = AnswerConfig {
            threshold: 1.5,
            ..AnswerConfig::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_select_applies_threshold() {
        let selector = AnswerSelector::default();

        let answered = selector.select(
            "Admissions".into(),
            Ok(vec![scored("How do I apply?", 0.6, 0), scored("Deadline?", 0.2, 1)]),
        );
        assert!(answered.is_answered());

        let low = selector.select("Admissions".into(), Ok(vec![scored("Deadline?", 0.2, 1)]));
        assert!(matches!(
            low,
            QueryResult::Fallback {
                kind: FallbackKind::LowConfidence { .. },
                ..
            }
        ));

        let empty = selector.select("Housing".into(), Ok(Vec::new()));
        assert!(matches!(
            empty,
            QueryResult::Fallback {
                kind: FallbackKind::NoCandidates { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_select_reports_ranking_failure() {
        let selector = AnswerSelector::default();
        let result = selector.select(
            "Finance".into(),
            Err(FaqError::other("index holds 5 rows but the corpus has 3")),
        );

        assert_eq!(
            result,
            QueryResult::Fallback {
                kind: FallbackKind::RetrievalFailed {
                    intent: "Finance".into()
                },
                response: "Intent 'Finance' recognized, but I could not search its answers. \
                           Please try again."
                    .into(),
            }
        );
        assert_eq!(result.intent(), Some("Finance"));
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.5), "50.00%");
        assert_eq!(format_confidence(0.0), "0.00%");
    }
}
