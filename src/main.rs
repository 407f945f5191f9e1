use anyhow::Result;
use clap::Parser;
use lexi::index::build::build_index_silent;
use lexi::index::types::{Category, CategorySet, InvertedIndex};
use lexi::output;
use lexi::query::filter::{FilterQuery, filter_index, token_detail};
use lexi::utils::history::{FilterHistory, default_history_path};
use lexi::utils::walk::collect_files;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lexi")]
#[command(about = "Interactive lexical token index for source trees")]
struct Cli {
    /// Filter string: empty matches every token, `*` prefix folds case,
    /// a following `"` prefix requires an exact match
    #[arg(default_value = "")]
    filter: String,

    /// Root directory to index
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// Restrict the view to these categories (default: all)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    only: Vec<Category>,

    /// Print the occurrence detail for this token instead of the match tree
    #[arg(short, long)]
    detail: Option<String>,

    /// Emit results as JSON
    #[arg(long)]
    json: bool,

    /// History file for submitted filters (one per line)
    #[arg(long)]
    history: Option<PathBuf>,

    /// Do not record this filter in the history file
    #[arg(long)]
    no_history: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Suppress progress reporting
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let enabled = if cli.only.is_empty() {
        CategorySet::all()
    } else {
        cli.only.iter().copied().collect()
    };
    let color = !cli.no_color;

    let paths = collect_files(&cli.path);
    let index = if cli.quiet {
        build_index_silent(&paths)?
    } else {
        println!("{} files to process", paths.len());
        build_with_progress(&paths)?
    };

    if let Some(token) = cli.detail.as_deref() {
        let details = token_detail(&index, token, &enabled)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&details)?);
        } else {
            output::print_token_detail(token, &details, color)?;
        }
        return Ok(());
    }

    let query = FilterQuery::parse(&cli.filter);
    let matches = filter_index(&index, &query, &enabled);

    if !cli.no_history && !cli.filter.trim().is_empty() {
        let history_path = match cli.history {
            Some(path) => path,
            None => default_history_path()?,
        };
        let mut history = FilterHistory::load(history_path)?;
        history.record(&cli.filter)?;
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        output::print_token_tree(&matches, color)?;
        // A single matching token auto-selects its detail view.
        if let [only_match] = matches.as_slice() {
            println!();
            let details = token_detail(&index, &only_match.token, &enabled)?;
            output::print_token_detail(&only_match.token, &details, color)?;
        }
    }

    Ok(())
}

#[cfg(feature = "progress")]
fn build_with_progress(paths: &[PathBuf]) -> Result<InvertedIndex> {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Duration;

    let bar = ProgressBar::new(paths.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░  "),
    );

    let mut elapsed = Duration::ZERO;
    let index = lexi::index::build::build_index(paths, &mut |report| {
        bar.set_position(report.scanned as u64);
        elapsed = report.elapsed;
    })?;
    bar.finish_and_clear();

    println!(
        "Indexed {} files ({} tokens) in {:.2}s",
        index.file_count(),
        index.token_count(),
        elapsed.as_secs_f64()
    );
    Ok(index)
}

#[cfg(not(feature = "progress"))]
fn build_with_progress(paths: &[PathBuf]) -> Result<InvertedIndex> {
    build_index_silent(paths)
}
