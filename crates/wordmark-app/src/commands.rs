use std::path::PathBuf;

use clap::Subcommand;
use wordmark_core::VocabularyStatus;

use crate::state::AppState;

pub mod analyze;
pub mod init_database;
pub mod learn_article;
pub mod mark_article;
pub mod mark_word;

use analyze::handle_analyze;
use init_database::handle_init_database;
use learn_article::handle_learn_article;
use mark_article::handle_mark_article;
use mark_word::{WordTarget, handle_mark_word};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the word pairs of a document with their status
    Analyze {
        file: PathBuf,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Annotate every word not known yet and write its note
    Mark { file: PathBuf },
    /// Mark every word not explicitly unknown as known
    Learn { file: PathBuf },
    /// Mark one word as known and remove its annotations
    Known {
        file: PathBuf,
        word: Option<String>,
        /// Byte offset of the caret instead of a word
        #[arg(long, conflicts_with = "word")]
        at: Option<usize>,
    },
    /// Mark one word as unknown, annotate it and write its note
    Unknown {
        file: PathBuf,
        word: Option<String>,
        /// Byte offset of the caret instead of a word
        #[arg(long, conflicts_with = "word")]
        at: Option<usize>,
    },
    /// Find how many high frequency words you know by asking about a few
    Init {
        /// Word list, most frequent first (defaults to the configured one)
        #[arg(long)]
        words: Option<PathBuf>,
    },
    /// Print the effective configuration
    Config {
        /// Write it to a file instead
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

pub async fn run_command(state: &AppState, command: Command) -> anyhow::Result<()> {
    tracing::debug!("Running {:?}", command);
    match command {
        Command::Analyze { file, json } => {
            let rows = handle_analyze(state, &file).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in rows {
                    println!("{}\t{}\t{}", row.surface, row.lemma, row.status_label());
                }
            }
        }
        Command::Mark { file } => {
            let report = handle_mark_article(state, &file).await?;
            println!(
                "Marked {} word(s) in {}, {} without definitions",
                report.marked.len(),
                file.display(),
                report.failed.len()
            );
        }
        Command::Learn { file } => {
            let learned = handle_learn_article(state, &file).await?;
            println!("Learned {} word(s) from {}", learned, file.display());
        }
        Command::Known { file, word, at } => {
            let target = WordTarget::from_args(word, at)?;
            let lemmas = handle_mark_word(state, &file, target, VocabularyStatus::Known).await?;
            println!("Marked as known: {}", lemmas.join(", "));
        }
        Command::Unknown { file, word, at } => {
            let target = WordTarget::from_args(word, at)?;
            let lemmas = handle_mark_word(state, &file, target, VocabularyStatus::Unknown).await?;
            println!("Marked as unknown: {}", lemmas.join(", "));
        }
        Command::Init { words } => {
            let path = words.unwrap_or_else(|| state.config.vocabulary.high_frequency_path());
            let known = handle_init_database(state, &path).await?;
            println!("Database initialized, {known} word(s) marked known");
        }
        Command::Config { write } => match write {
            Some(path) => crate::profile::write_config(&state.config, &path)?,
            None => println!("{}", serde_json::to_string_pretty(&state.config)?),
        },
    }

    Ok(())
}
