//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{FaqArgs, OutputFormat};
use crate::error::Result;
use crate::faq::answer::{QueryResult, format_confidence};
use crate::faq::export::ExportSummary;
use crate::faq::stats::DatasetStats;

/// Output a result in the selected format. `human` renders the text form.
pub fn output_result<T, F>(result: &T, args: &FaqArgs, human: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", human(result));
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &FaqArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Render an answer, with related questions above `related_threshold`.
pub fn render_answer(result: &QueryResult, related_threshold: f64) -> String {
    let (intent, best_match) = match result {
        QueryResult::Fallback { response, .. } => return format!("{response}\n"),
        QueryResult::Answered {
            intent, best_match, ..
        } => (intent, best_match),
    };

    let mut out = format!(
        "Intent Category: {intent}\nConfidence: {}\n\nAnswer:\n{}\n",
        format_confidence(best_match.similarity),
        best_match.record.answer
    );

    let related = result.related(related_threshold);
    if !related.is_empty() {
        out.push_str("\nRelated Questions:\n");
        for m in related {
            out.push_str(&format!(
                " - {} (Conf: {:.1}%)\n",
                m.record.question,
                m.similarity * 100.0
            ));
        }
    }
    out
}

/// Render dataset statistics.
pub fn render_stats(stats: &DatasetStats) -> String {
    let mut out = String::from("Dataset Statistics:\n══════════════════\n");
    out.push_str(&format!("Items: {}\n", stats.items));
    out.push_str(&format!("Skipped items: {}\n", stats.skipped_items));
    out.push_str(&format!("Dropped uncategorized rows: {}\n", stats.dropped_unknown));
    out.push_str(&format!("Corpus rows: {}\n", stats.corpus_rows));
    out.push_str(&format!("Classifier vocabulary: {}\n", stats.classifier_vocabulary));
    out.push_str(&format!("Retrieval vocabulary: {}\n", stats.retrieval_vocabulary));
    out.push_str("\nCategories:\n───────────\n");
    for c in &stats.categories {
        out.push_str(&format!(
            "  {:<40} {:>4} rows ({:>4} balanced)\n",
            c.category, c.rows, c.balanced_rows
        ));
    }
    out
}

/// Render an export summary.
pub fn render_export(summary: &ExportSummary) -> String {
    let mut out = format!(
        "Total questions: {}\nTotal categories: {}\n\nCategory Distribution:\n──────────────────────\n",
        summary.total,
        summary.categories.len()
    );
    for (category, count) in &summary.categories {
        out.push_str(&format!("  {category:<45} {count:>3} questions\n"));
    }
    out
}
