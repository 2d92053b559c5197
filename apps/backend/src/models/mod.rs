//! Database models and API types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// === Database Entity Types ===

/// Difficulty level of a practice sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "difficulty_level", rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty from a path segment, case-insensitively
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Standalone practice sentence stored in PostgreSQL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSentence {
    pub id: i64,
    pub english_sentence: String,
    pub turkish_translation: String,
    pub difficulty: Difficulty,
    pub created_date: NaiveDate,
}

/// Example sentence owned by a vocabulary word.
///
/// Rows in the `sentences` table are written only by the word subsystem;
/// this backend reads them for the unified listing and statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WordSentence {
    pub id: i64,
    pub sentence: String,
    pub translation: String,
    pub word_id: i64,
}

// === Derived View Types ===

/// Origin store of a unified sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceSource {
    Practice,
    Word,
}

/// One row of the merged listing across both sentence tables.
///
/// The `id` is the native numeric id prefixed with the source store name
/// ("practice_7" / "word_7") so ids stay unique across the two tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedSentence {
    pub id: String,
    pub english_sentence: String,
    pub turkish_translation: String,
    pub difficulty: Difficulty,
    pub created_date: Option<NaiveDate>,
    pub source: SentenceSource,
}

impl UnifiedSentence {
    pub fn from_practice(s: PracticeSentence) -> Self {
        Self {
            id: format!("practice_{}", s.id),
            english_sentence: s.english_sentence,
            turkish_translation: s.turkish_translation,
            difficulty: s.difficulty,
            created_date: Some(s.created_date),
            source: SentenceSource::Practice,
        }
    }

    /// Word sentences carry no explicit difficulty or date; they are
    /// listed as EASY with a null created date.
    pub fn from_word(s: WordSentence) -> Self {
        Self {
            id: format!("word_{}", s.id),
            english_sentence: s.sentence,
            turkish_translation: s.translation,
            difficulty: Difficulty::Easy,
            created_date: None,
            source: SentenceSource::Word,
        }
    }
}

/// Combined counts across both sentence tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceStats {
    pub total: i64,
    pub easy: i64,
    pub medium: i64,
    pub hard: i64,
}

// === API Request Types ===

/// Body of POST and PUT /api/sentences.
///
/// `created_date` is optional on create; when absent the server stamps
/// today's date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSentencePayload {
    pub english_sentence: String,
    pub turkish_translation: String,
    pub difficulty: Difficulty,
    pub created_date: Option<NaiveDate>,
}

/// Query parameters of GET /api/sentences/date-range
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: String,
    pub end_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_str_case_insensitive() {
        assert_eq!(Difficulty::from_str("medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("MEDIUM"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("Hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    }

    #[test]
    fn test_difficulty_from_str_rejects_unknown() {
        assert_eq!(Difficulty::from_str("bogus"), None);
        assert_eq!(Difficulty::from_str(""), None);
    }

    #[test]
    fn test_difficulty_serializes_uppercase() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, r#""HARD""#);
    }

    #[test]
    fn test_unified_from_practice_keeps_fields() {
        let practice = PracticeSentence {
            id: 7,
            english_sentence: "The cat sleeps.".to_string(),
            turkish_translation: "Kedi uyuyor.".to_string(),
            difficulty: Difficulty::Hard,
            created_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };

        let unified = UnifiedSentence::from_practice(practice);
        assert_eq!(unified.id, "practice_7");
        assert_eq!(unified.english_sentence, "The cat sleeps.");
        assert_eq!(unified.difficulty, Difficulty::Hard);
        assert_eq!(
            unified.created_date,
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(unified.source, SentenceSource::Practice);
    }

    #[test]
    fn test_unified_from_word_defaults() {
        let word = WordSentence {
            id: 7,
            sentence: "I run every day.".to_string(),
            translation: "Her gün koşarım.".to_string(),
            word_id: 3,
        };

        let unified = UnifiedSentence::from_word(word);
        assert_eq!(unified.id, "word_7");
        assert_eq!(unified.english_sentence, "I run every day.");
        assert_eq!(unified.difficulty, Difficulty::Easy);
        assert_eq!(unified.created_date, None);
        assert_eq!(unified.source, SentenceSource::Word);
    }

    #[test]
    fn test_unified_serializes_camel_case() {
        let word = WordSentence {
            id: 1,
            sentence: "Hello.".to_string(),
            translation: "Merhaba.".to_string(),
            word_id: 1,
        };

        let value = serde_json::to_value(UnifiedSentence::from_word(word)).unwrap();
        assert_eq!(value["id"], "word_1");
        assert_eq!(value["englishSentence"], "Hello.");
        assert_eq!(value["turkishTranslation"], "Merhaba.");
        assert_eq!(value["difficulty"], "EASY");
        assert!(value["createdDate"].is_null());
        assert_eq!(value["source"], "word");
    }
}
