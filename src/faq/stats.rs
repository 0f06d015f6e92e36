//! Dataset statistics for a trained context.

use serde::Serialize;

use crate::faq::balance::ClassBalancer;
use crate::faq::context::FaqContext;

/// Counts describing how a dataset was turned into training data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub items: usize,
    pub skipped_items: usize,
    pub dropped_unknown: usize,
    pub corpus_rows: usize,
    /// Per-category rows before balancing, in order of first appearance.
    pub categories: Vec<CategoryStats>,
    pub classifier_vocabulary: usize,
    pub retrieval_vocabulary: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub rows: usize,
    pub balanced_rows: usize,
}

impl DatasetStats {
    pub fn collect(context: &FaqContext) -> Self {
        let corpus = context.corpus();
        let balanced = ClassBalancer::new(context.config().balance.clone()).balance(corpus);
        let summary = context.summary();

        let categories = corpus
            .category_counts()
            .into_iter()
            .map(|(category, rows)| CategoryStats {
                balanced_rows: balanced.rows_in(&category).count(),
                category,
                rows,
            })
            .collect();

        DatasetStats {
            items: summary.items,
            skipped_items: summary.skipped,
            dropped_unknown: summary.dropped_unknown,
            corpus_rows: corpus.len(),
            categories,
            classifier_vocabulary: context.classifier().feature_count(),
            retrieval_vocabulary: context.index().vocabulary_size(),
        }
    }
}
