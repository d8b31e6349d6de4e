use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, bail};

use crate::state::AppState;

/// Binary search for the first word the reader does not know.
///
/// `words` is ordered most frequent first, so knowing a word implies knowing
/// every word before it. Returns how many leading words count as known.
pub fn calibrate(
    words: &[String],
    mut knows: impl FnMut(&str) -> anyhow::Result<bool>,
) -> anyhow::Result<usize> {
    let (mut low, mut high) = (0, words.len());
    while low < high {
        let mid = low + (high - low) / 2;
        if knows(&words[mid])? {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    Ok(low)
}

fn ask_stdin(word: &str) -> anyhow::Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "Do you know \"{word}\"? [y/n] ")?;
        stdout.flush()?;

        let mut answer = String::new();
        if stdin.lock().read_line(&mut answer)? == 0 {
            bail!("Input closed before calibration finished");
        }
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => continue,
        }
    }
}

pub fn read_word_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}

pub async fn handle_init_database(state: &AppState, path: &Path) -> anyhow::Result<usize> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    let words = read_word_list(&contents);
    tracing::info!("Calibrating against {} high frequency words", words.len());

    let (words, boundary) = tokio::task::spawn_blocking(move || {
        let boundary = calibrate(&words, ask_stdin)?;
        Ok::<_, anyhow::Error>((words, boundary))
    })
    .await??;

    for word in &words[..boundary] {
        if let Err(e) = state.mark_known(word).await {
            tracing::warn!("Skipping '{}': {:#}", word, e);
        }
    }
    state.save().await?;

    Ok(boundary)
}
