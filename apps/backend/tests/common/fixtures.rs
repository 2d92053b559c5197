//! Test fixtures and factory functions for creating test data.

use serde_json::json;

/// Create a practice sentence request body.
pub fn practice_request(
    english: &str,
    turkish: &str,
    difficulty: &str,
    created_date: Option<&str>,
) -> serde_json::Value {
    match created_date {
        Some(date) => json!({
            "englishSentence": english,
            "turkishTranslation": turkish,
            "difficulty": difficulty,
            "createdDate": date,
        }),
        None => json!({
            "englishSentence": english,
            "turkishTranslation": turkish,
            "difficulty": difficulty,
        }),
    }
}

/// Generate a unique sentence text to avoid collisions between runs.
pub fn unique_sentence(prefix: &str) -> String {
    let nanos = chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default();
    format!("{} {}", prefix, nanos)
}
