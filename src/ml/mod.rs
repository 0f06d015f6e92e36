//! Machine learning building blocks: the TF-IDF vectorizer, the binary
//! logistic regression solver, and the intent classifier built from them.

pub mod intent_classifier;
pub mod logistic;
pub mod tfidf;

pub use intent_classifier::{ClassifierConfig, IntentClassifier, IntentSample};
pub use tfidf::{DocFrequency, SparseVector, TfIdfConfig, TfIdfVectorizer};
