//! Command line argument parsing for the faqrank CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// faqrank - answer questions from a categorized FAQ dataset
#[derive(Parser, Debug, Clone)]
#[command(name = "faqrank")]
#[command(about = "Intent classification and similarity retrieval over FAQ datasets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FaqArgs {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Pipeline configuration file (JSON)
    #[arg(long, value_name = "FILE", env = "FAQRANK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FaqArgs {
    /// Get the effective verbosity level (0 quiet, 1 default, 2 info, 3+ debug)
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Answer a single question
    Ask(AskArgs),

    /// Answer questions interactively from stdin
    Chat(ChatArgs),

    /// Show dataset and model statistics
    Stats(StatsArgs),

    /// Flatten FAQ source batches into a CSV table
    Export(ExportArgs),
}

/// Arguments for answering one question
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// Path to the dataset (JSON)
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// The question to answer
    #[arg(value_name = "QUESTION")]
    pub question: String,

    /// Minimum similarity for an answer
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Number of ranked matches to keep
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,
}

/// Arguments for the interactive loop
#[derive(Parser, Debug, Clone)]
pub struct ChatArgs {
    /// Path to the dataset (JSON)
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,
}

/// Arguments for statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the dataset (JSON)
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,
}

/// Arguments for export
#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    /// Source batches file (JSON)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask() {
        let args = FaqArgs::try_parse_from([
            "faqrank",
            "ask",
            "dataset.json",
            "How do I apply?",
            "--threshold",
            "0.3",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.verbosity(), 3);
        match args.command {
            Command::Ask(ask) => {
                assert_eq!(ask.dataset, PathBuf::from("dataset.json"));
                assert_eq!(ask.question, "How do I apply?");
                assert_eq!(ask.threshold, Some(0.3));
                assert_eq!(ask.top_k, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let quiet = FaqArgs::try_parse_from(["faqrank", "-q", "-v", "stats", "d.json"]).unwrap();
        assert_eq!(quiet.verbosity(), 0);

        let default = FaqArgs::try_parse_from(["faqrank", "stats", "d.json"]).unwrap();
        assert_eq!(default.verbosity(), 1);
        assert_eq!(default.output_format, OutputFormat::Human);
    }

    #[test]
    fn test_parse_export_json_format() {
        let args =
            FaqArgs::try_parse_from(["faqrank", "-f", "json", "export", "in.json", "out.csv"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(matches!(args.command, Command::Export(_)));
    }
}
