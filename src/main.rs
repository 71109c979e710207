//! capsym CLI
//!
//! Usage:
//!   capsym                                  # Dry run over ./sequence_index.json
//!   capsym --mode apply                     # Append labels to ./cap_labels.jsonl
//!   capsym --word ABAB --verbose            # One word, debug logging
//!   capsym --json                           # JSON summary
//!   capsym --serve                          # HTTP API server

use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use capsym::core::{load_index, run_server, LabelRun, LabelStore, RunConfig, RunMode, RunSummary};
use capsym::types::{CapResult, LabelRecord};
use capsym::{DEFAULT_ADDR, DEFAULT_INDEX_PATH, DEFAULT_LOG_FILTER, DEFAULT_STORE_PATH, VERBOSE_LOG_FILTER, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "capsym",
    version = VERSION,
    about = "Classify circular two-actor movement sequences by their CAP symmetry",
    long_about = "capsym detects how a circular sequence repeats itself: rotated,\n\
                  mirrored, flipped, swapped, inverted, repeated, their compounds,\n\
                  or modular (several motifs with different relationships).\n\n\
                  Modes:\n  \
                  --mode dry-run  Classify and report only (default)\n  \
                  --mode apply    Append auto-labels to the label store\n  \
                  --serve         HTTP API server mode"
)]
struct Args {
    /// Sequence index (JSON array of {word, sequence})
    #[arg(long, default_value = DEFAULT_INDEX_PATH)]
    index: String,

    /// Label store (JSON lines, append-only)
    #[arg(long, default_value = DEFAULT_STORE_PATH)]
    store: String,

    /// Run mode
    #[arg(long, value_enum, default_value_t = ModeArg::DryRun)]
    mode: ModeArg,

    /// Re-label words that already have a label
    #[arg(long)]
    force: bool,

    /// Only process this word
    #[arg(long)]
    word: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Debug logging
    #[arg(long)]
    verbose: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = DEFAULT_ADDR)]
    addr: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    DryRun,
    Apply,
}

impl From<ModeArg> for RunMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::DryRun => RunMode::DryRun,
            ModeArg::Apply => RunMode::Apply,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    let outcome = if args.serve {
        run_server(&args.addr).await
    } else {
        run_labeling(&args)
    };

    if let Err(e) = outcome {
        tracing::error!(error = %e, "capsym failed");
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_labeling(args: &Args) -> CapResult<()> {
    let index = load_index(&args.index)?;
    let mut store = LabelStore::open(&args.store)?;

    let config = RunConfig {
        mode: args.mode.into(),
        force: args.force,
        word_filter: args.word.clone(),
    };
    let summary = LabelRun::new(config).execute(&index, &mut store)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_report(&summary, &args.store);
    }
    Ok(())
}

fn print_report(summary: &RunSummary, store_path: &str) {
    println!("{}", format!("capsym v{}", VERSION).bold());
    println!();

    for record in &summary.records {
        print_record(record);
    }
    if !summary.records.is_empty() {
        println!();
    }

    println!(
        "examined {} | skipped {} | classified {} | unclassifiable {}",
        summary.examined,
        summary.skipped,
        summary.classified.to_string().green(),
        summary.unclassifiable.to_string().yellow(),
    );
    match summary.mode {
        RunMode::Apply => println!("wrote {} label(s) to {}", summary.written, store_path),
        RunMode::DryRun => println!("{}", "dry run: nothing written (use --mode apply)".dimmed()),
    }
}

fn print_record(record: &LabelRecord) {
    let verdict = match record.designations.first() {
        Some(d) => d.cap_type.as_str().green().bold(),
        None => "unclassified".yellow(),
    };
    println!("  {:<24} {:<28} {}", record.word, verdict, record.note.dimmed());
}
