mod analysis;
mod deck;
mod export;
mod parser;
mod records;
mod report;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use deck::{AnswerPolicy, DeckKind, ExtractOptions};
use export::DirSink;
use parser::locators::Locators;

#[derive(Parser)]
#[command(name = "flashcard_scraper", about = "Flashcard deck page extractor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract card records from a saved deck page into a JSON artifact
    Extract {
        /// Saved HTML page to read
        input: PathBuf,
        /// Deck preset: answer policy, raw-text capture, artifact name
        #[arg(short, long, value_enum)]
        deck: DeckKind,
        /// Override the deck's answer normalization policy
        #[arg(long, value_enum)]
        policy: Option<AnswerPolicy>,
        /// Capture flattened card text alongside the structured fields
        #[arg(long)]
        raw_text: bool,
        /// Directory the artifact is written into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
        /// Override the artifact file name
        #[arg(long)]
        file_name: Option<String>,
    },
    /// Tag pattern report over an emitted records file
    Tags {
        /// Records JSON produced by `extract`
        input: PathBuf,
        /// Records to include in the sample section
        #[arg(short = 'n', long, default_value = "10")]
        samples: usize,
    },
    /// Cleaned tabular export with tag classification
    Report {
        /// Records JSON produced by `extract`
        input: PathBuf,
        /// Deck label recorded in the Source column
        #[arg(short, long, value_enum, default_value = "technical")]
        deck: DeckKind,
        /// CSV file to write
        #[arg(short, long, default_value = "flashcards_report.csv")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input,
            deck,
            policy,
            raw_text,
            out_dir,
            file_name,
        } => {
            let html = std::fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;

            let mut opts = ExtractOptions::for_deck(deck);
            if let Some(policy) = policy {
                opts.policy = policy;
            }
            if raw_text {
                opts.include_raw_text = true;
            }

            let locators = Locators::site_default();
            let records = parser::process_document(&html, &locators, &opts);

            let name = file_name.unwrap_or_else(|| deck.file_name().to_string());
            let sink = DirSink::new(out_dir);
            let path = export::deliver_records(&records, &name, &sink)?;

            println!("Extracted {} flashcards with complete data", records.len());
            println!("Saved {}", path.display());
            Ok(())
        }
        Commands::Tags { input, samples } => {
            let records = records::load_records(&input)?;
            let tag_report = analysis::analyze(&records);
            println!("{}", analysis::render(&tag_report, &records, samples));
            Ok(())
        }
        Commands::Report { input, deck, out } => {
            let records = records::load_records(&input)?;
            let rows = report::build_rows(&records, deck.label());

            let dir = out.parent().map(PathBuf::from).unwrap_or_default();
            let name = out
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .context("output path has no file name")?;
            let sink = DirSink::new(dir);
            let path = report::deliver_report(&rows, &name, &sink)?;
            println!("Wrote {} rows to {}", rows.len(), path.display());
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}
