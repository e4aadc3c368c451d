use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use data_loader::{Catalog, Year};
use pipeline::{GenreMatch, RankedEntry, RankingEngine};
use std::path::PathBuf;
use std::time::Instant;

mod output;

/// Film Ranker - top films by blended movie and cast rating
#[derive(Parser)]
#[command(name = "film-ranker")]
#[command(about = "Rank a film catalog by blended movie and actor ratings", long_about = None)]
struct Cli {
    /// Path to the semicolon-delimited film catalog
    #[arg(default_value = "data/films.csv")]
    input: PathBuf,

    /// Only consider films released in this year or later
    #[arg(short, long, default_value = "0")]
    year: Year,

    /// Comma-separated genres; a film matches if it has any of them
    #[arg(short, long, default_value = "")]
    genres: String,

    /// Number of films to keep (0 keeps all)
    #[arg(short = 'n', long, default_value = "0")]
    limit: usize,

    /// File the ranking is written to
    #[arg(short, long, default_value = "top_movies.txt")]
    output: PathBuf,

    /// How to print the ranking on stdout
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Match genres by substring of the film's genre list instead of exact tokens
    #[arg(long)]
    substring_genres: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Phase 1: load everything and build the actor index once
    let start = Instant::now();
    let catalog = Catalog::load_from_file(&cli.input, cli.year)
        .with_context(|| format!("Failed to load catalog {}", cli.input.display()))?;
    let report = catalog.report();
    println!(
        "{} Loaded {} films in {:?} ({} malformed lines skipped)",
        "✓".green(),
        report.accepted,
        start.elapsed(),
        report.skipped_malformed
    );

    // Phase 2: per-request filtering and ranking
    let genre_match = if cli.substring_genres {
        GenreMatch::Substring
    } else {
        GenreMatch::Exact
    };
    let ranked = RankingEngine::new(&catalog)
        .with_genre_match(genre_match)
        .rank(&cli.genres, cli.limit)?;

    output::write_ranking(&cli.output, &ranked)?;

    match cli.format {
        OutputFormat::Text => print_ranking(&ranked),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ranked)?),
    }
    println!(
        "{} Wrote {} entries to {}",
        "✓".green(),
        ranked.len(),
        cli.output.display()
    );

    Ok(())
}

/// Helper function to format and print the ranking
fn print_ranking(ranked: &[RankedEntry]) {
    if ranked.is_empty() {
        println!("{}", "No films matched the request".yellow());
        return;
    }
    println!("{}", "Top films:".bold().blue());
    for (i, entry) in ranked.iter().enumerate() {
        println!(
            "{}. {} - Score: {:.1}",
            (i + 1).to_string().green(),
            entry.title,
            entry.score
        );
    }
}
