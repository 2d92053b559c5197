//! Sentence endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::overview;
use crate::AppState;

/// GET /api/sentences
///
/// Merged listing across both sentence tables, practice rows first.
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<UnifiedSentence>>> {
    let practice = state.db.get_all_sentences().await?;
    let word = state.db.get_all_word_sentences().await?;

    Ok(Json(overview::merge_sentences(practice, word)))
}

/// GET /api/sentences/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PracticeSentence>> {
    let sentence = state
        .db
        .get_sentence(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Sentence {}", id)))?;

    Ok(Json(sentence))
}

/// POST /api/sentences
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<PracticeSentencePayload>,
) -> Result<Json<PracticeSentence>> {
    validate_payload(&payload)?;

    let sentence = state.db.insert_sentence(&payload).await?;

    tracing::info!("Created practice sentence {}", sentence.id);

    Ok(Json(sentence))
}

/// PUT /api/sentences/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<PracticeSentencePayload>,
) -> Result<Json<PracticeSentence>> {
    validate_payload(&payload)?;

    let sentence = state
        .db
        .update_sentence(id, &payload)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Sentence {}", id)))?;

    Ok(Json(sentence))
}

/// DELETE /api/sentences/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode> {
    let deleted = state.db.delete_sentence(id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("Sentence {}", id)));
    }

    Ok(StatusCode::OK)
}

/// GET /api/sentences/difficulty/:difficulty
///
/// The difficulty segment is matched case-insensitively.
pub async fn by_difficulty(
    State(state): State<AppState>,
    Path(difficulty): Path<String>,
) -> Result<Json<Vec<PracticeSentence>>> {
    let difficulty = Difficulty::from_str(&difficulty)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown difficulty '{}'", difficulty)))?;

    let sentences = state.db.get_sentences_by_difficulty(difficulty).await?;
    Ok(Json(sentences))
}

/// GET /api/sentences/date/:date
pub async fn by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Vec<PracticeSentence>>> {
    let date = parse_date(&date)?;

    let sentences = state.db.get_sentences_by_date(date).await?;
    Ok(Json(sentences))
}

/// GET /api/sentences/dates
pub async fn distinct_dates(State(state): State<AppState>) -> Result<Json<Vec<NaiveDate>>> {
    let dates = state.db.get_distinct_dates().await?;
    Ok(Json(dates))
}

/// GET /api/sentences/date-range?startDate=..&endDate=..
///
/// Both bounds are inclusive.
pub async fn by_date_range(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<Vec<PracticeSentence>>> {
    let start = parse_date(&query.start_date)?;
    let end = parse_date(&query.end_date)?;

    let sentences = state.db.get_sentences_by_date_range(start, end).await?;
    Ok(Json(sentences))
}

/// GET /api/sentences/stats
pub async fn stats(State(state): State<AppState>) -> Result<Json<SentenceStats>> {
    let easy = state
        .db
        .count_sentences_by_difficulty(Difficulty::Easy)
        .await?;
    let medium = state
        .db
        .count_sentences_by_difficulty(Difficulty::Medium)
        .await?;
    let hard = state
        .db
        .count_sentences_by_difficulty(Difficulty::Hard)
        .await?;
    let word_total = state.db.count_word_sentences().await?;

    Ok(Json(overview::combine_stats(easy, medium, hard, word_total)))
}

/// Parse an ISO-8601 calendar date (YYYY-MM-DD) from a request
fn parse_date(s: &str) -> Result<NaiveDate> {
    s.parse::<NaiveDate>()
        .map_err(|_| ApiError::BadRequest(format!("unparsable date '{}'", s)))
}

fn validate_payload(payload: &PracticeSentencePayload) -> Result<()> {
    if payload.english_sentence.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "englishSentence must not be empty".to_string(),
        ));
    }
    Ok(())
}
