//! Merge and statistics logic across the two sentence tables.
//!
//! Practice sentences and word-attached sentences live in separate tables
//! with different shapes; these functions fold them into the unified
//! listing and the combined counts the API exposes.

use crate::models::{PracticeSentence, SentenceStats, UnifiedSentence, WordSentence};

/// Merge both sentence tables into one source-tagged listing.
///
/// Practice rows come first, then word rows; neither group is re-sorted.
/// The result length is always `practice.len() + word.len()`.
pub fn merge_sentences(
    practice: Vec<PracticeSentence>,
    word: Vec<WordSentence>,
) -> Vec<UnifiedSentence> {
    practice
        .into_iter()
        .map(UnifiedSentence::from_practice)
        .chain(word.into_iter().map(UnifiedSentence::from_word))
        .collect()
}

/// Combine per-table counts into the statistics snapshot.
///
/// Word sentences carry no difficulty and are all counted as easy, so
/// `total == easy + medium + hard` holds for every input.
pub fn combine_stats(easy: i64, medium: i64, hard: i64, word_total: i64) -> SentenceStats {
    SentenceStats {
        total: easy + medium + hard + word_total,
        easy: easy + word_total,
        medium,
        hard,
    }
}
