//! Oversampling of underrepresented categories.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{FaqError, Result};
use crate::faq::record::Corpus;

/// Class balancing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    /// Every category is topped up to at least this many rows.
    pub min_class_size: usize,
    /// Seed for the resampling RNG.
    pub seed: u64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            min_class_size: 15,
            seed: 42,
        }
    }
}

impl BalanceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_class_size == 0 {
            return Err(FaqError::invalid_config(
                "balance.min_class_size must be positive",
            ));
        }
        Ok(())
    }
}

/// Oversamples small categories with replacement.
///
/// Each category draws from its own RNG seeded with the configured seed, so
/// the rows drawn for one category do not depend on any other category.
#[derive(Debug, Clone)]
pub struct ClassBalancer {
    config: BalanceConfig,
}

impl ClassBalancer {
    pub fn new(config: BalanceConfig) -> Self {
        ClassBalancer { config }
    }

    /// Return the original rows followed by the oversampled extras.
    pub fn balance(&self, corpus: &Corpus) -> Corpus {
        let mut entries = corpus.entries().to_vec();

        for category in corpus.categories() {
            let rows: Vec<usize> = corpus.rows_in(category).collect();
            if rows.len() >= self.config.min_class_size {
                continue;
            }

            let missing = self.config.min_class_size - rows.len();
            let mut rng = StdRng::seed_from_u64(self.config.seed);
            for _ in 0..missing {
                let row = rows[rng.random_range(0..rows.len())];
                entries.push(corpus.entries()[row].clone());
            }

            log::debug!(
                "Oversampled '{}' from {} to {} rows",
                category,
                rows.len(),
                self.config.min_class_size
            );
        }

        Corpus::new(entries)
    }
}

impl Default for ClassBalancer {
    fn default() -> Self {
        Self::new(BalanceConfig::default())
    }
}
