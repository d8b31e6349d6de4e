/// Pick the canonical lemma out of a lexicon response.
///
/// The response is unusable when it is empty or when its first group carries
/// no structure (an empty group). Otherwise the last group wins and its first
/// element is the lemma.
pub fn select_lemma(candidates: &[Vec<String>]) -> Option<String> {
    let first = candidates.first()?;
    if first.is_empty() {
        return None;
    }

    candidates
        .last()
        .and_then(|group| group.first())
        .filter(|lemma| !lemma.is_empty())
        .map(|lemma| lemma.to_lowercase())
}
