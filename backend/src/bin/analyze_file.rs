//! Batch analysis entry point.
//!
//! Reads a diary text file and runs the same library pipeline as the web
//! handler: analyze, parse, persist, then print the outcome and the stored
//! history. Not part of the stable web contract; useful for scripting and
//! for exercising the pipeline without a browser.

use std::path::PathBuf;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::config::AppConfig;
use backend::domain::ports::{AnalysisSource, EntryRepository};
use backend::domain::{DiaryEntry, NewEntry, parse_analysis};
use backend::outbound::anthropic::AnthropicHttpSource;
use backend::outbound::persistence::{DbPool, DieselEntryRepository, PoolConfig, run_migrations};

/// Analyse a diary text file and store the derived fields.
#[derive(Debug, Parser)]
#[command(name = "analyze-file", about = "Analyse a diary text file")]
struct Cli {
    /// Path of the diary text file to analyse.
    #[arg(default_value = "diary.txt")]
    path: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let text = std::fs::read_to_string(&cli.path)?;
    if text.trim().is_empty() {
        return Err(std::io::Error::other(format!(
            "{} is empty",
            cli.path.display()
        )));
    }

    let source = AnthropicHttpSource::new(
        config.api_key.as_str(),
        config.model.as_str(),
        config.analysis_timeout,
    )
    .map_err(std::io::Error::other)?;
    let raw = source.analyze(&text).await.map_err(std::io::Error::other)?;
    let analysis = parse_analysis(&raw);

    println!("Analysis result:");
    println!("  Keywords: {}", analysis.keywords_or_default());
    println!("  Mood: {}", analysis.mood_or_default());
    println!("  Feedback: {}", analysis.feedback_or_default());
    println!("  Recommended task: {}", analysis.recommended_task_or_default());

    let pool =
        DbPool::new(PoolConfig::new(&config.database_url)).map_err(std::io::Error::other)?;
    run_migrations(&pool).map_err(std::io::Error::other)?;
    let repository = DieselEntryRepository::new(pool);

    let entry = NewEntry::from_analysis(chrono::Local::now().date_naive(), text, &analysis);
    match repository.create(entry).await {
        Ok(id) => println!("Saved as entry {id}."),
        Err(err) => warn!(error = %err, "diary entry not persisted"),
    }

    let entries = repository.list_all().await.map_err(std::io::Error::other)?;
    if entries.is_empty() {
        println!("No diary entries stored yet.");
    } else {
        println!("\nStored entries:");
        for entry in &entries {
            print_entry(entry);
        }
    }

    Ok(())
}

fn print_entry(entry: &DiaryEntry) {
    let mut preview: String = entry.text.chars().take(100).collect();
    if entry.text.chars().count() > 100 {
        preview.push_str("...");
    }
    println!("  #{} {}", entry.id, entry.date);
    println!("    Text: {preview}");
    println!("    Mood: {}", entry.mood.as_deref().unwrap_or("Not set"));
    println!(
        "    Keywords: {}",
        entry.keywords.as_deref().unwrap_or("Not set")
    );
}
