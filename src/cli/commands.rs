//! Command implementations for the faqrank CLI.

use std::io::{self, BufRead, Write};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::FaqConfig;
use crate::error::Result;
use crate::faq::context::{ContextCache, FaqContext};
use crate::faq::export::export_file;
use crate::faq::stats::DatasetStats;

/// Execute a CLI command.
pub fn execute_command(args: FaqArgs) -> Result<()> {
    match &args.command {
        Command::Ask(ask_args) => ask(ask_args, &args),
        Command::Chat(chat_args) => chat(chat_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
        Command::Export(export_args) => export(export_args, &args),
    }
}

/// Load the configuration file, or defaults when none was given.
fn load_config(cli_args: &FaqArgs) -> Result<FaqConfig> {
    match &cli_args.config {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            FaqConfig::from_file(path)
        }
        None => Ok(FaqConfig::default()),
    }
}

/// Answer one question.
fn ask(args: &AskArgs, cli_args: &FaqArgs) -> Result<()> {
    let mut config = load_config(cli_args)?;
    if let Some(threshold) = args.threshold {
        config.answer.threshold = threshold;
    }
    if let Some(top_k) = args.top_k {
        config.answer.top_k = top_k;
    }
    config.validate()?;

    let related_threshold = config.answer.related_threshold;
    let context = FaqContext::load(&args.dataset, config)?;
    let result = context.answer(&args.question);

    output_result(&result, cli_args, |r| render_answer(r, related_threshold))
}

/// Answer questions read line by line from stdin.
fn chat(args: &ChatArgs, cli_args: &FaqArgs) -> Result<()> {
    let config = load_config(cli_args)?;
    let mut cache = ContextCache::new(config)?;
    let mut context = cache.get_or_build(&args.dataset)?;
    let interactive = cli_args.output_format == OutputFormat::Human && cli_args.verbosity() > 0;

    if interactive {
        println!("Ask a question (:reload to refresh the dataset, :quit to exit).");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let question = line.trim();

        match question {
            "" => continue,
            ":quit" | ":q" => break,
            ":reload" => {
                context = cache.get_or_build(&args.dataset)?;
                if interactive {
                    println!("Dataset ready ({} rows).", context.corpus().len());
                }
            }
            _ => {
                let result = context.answer(question);
                let related_threshold = context.config().answer.related_threshold;
                output_result(&result, cli_args, |r| render_answer(r, related_threshold))?;
            }
        }
    }

    Ok(())
}

/// Show dataset statistics.
fn show_stats(args: &StatsArgs, cli_args: &FaqArgs) -> Result<()> {
    let config = load_config(cli_args)?;
    let context = FaqContext::load(&args.dataset, config)?;
    let stats = DatasetStats::collect(&context);

    output_result(&stats, cli_args, render_stats)
}

/// Export FAQ source batches to CSV.
fn export(args: &ExportArgs, cli_args: &FaqArgs) -> Result<()> {
    let summary = export_file(&args.input, &args.output)?;

    if cli_args.output_format == OutputFormat::Human && cli_args.verbosity() > 0 {
        println!("File saved as: {}", args.output.display());
    }
    output_result(&summary, cli_args, render_export)
}
