//! The FAQ pipeline: dataset expansion, class balancing, retrieval and
//! answer selection, tied together by a trained [`FaqContext`].

pub mod answer;
pub mod balance;
pub mod context;
pub mod dataset;
pub mod export;
pub mod record;
pub mod retriever;
pub mod stats;

pub use answer::{AnswerConfig, AnswerSelector, FallbackKind, QueryResult};
pub use balance::{BalanceConfig, ClassBalancer};
pub use context::{ContextCache, DatasetFingerprint, FaqContext};
pub use dataset::{Expansion, ItemOutcome, SkipReason, expand, load_dataset};
pub use export::{ExportSummary, export_file};
pub use record::{Corpus, CorpusEntry, FaqRecord};
pub use retriever::{RetrieverConfig, ScoredRecord, SimilarityIndex};
pub use stats::DatasetStats;
