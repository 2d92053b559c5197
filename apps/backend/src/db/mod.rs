//! PostgreSQL database operations

use chrono::{NaiveDate, Utc};
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Practice Sentence Repository ===

    /// Get a practice sentence by ID
    pub async fn get_sentence(&self, id: i64) -> Result<Option<PracticeSentence>> {
        let sentence = sqlx::query_as::<_, PracticeSentence>(
            r#"
            SELECT id, english_sentence, turkish_translation, difficulty, created_date
            FROM sentence_practices
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sentence)
    }

    /// Get all practice sentences
    pub async fn get_all_sentences(&self) -> Result<Vec<PracticeSentence>> {
        let sentences = sqlx::query_as::<_, PracticeSentence>(
            r#"
            SELECT id, english_sentence, turkish_translation, difficulty, created_date
            FROM sentence_practices
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sentences)
    }

    /// Insert a practice sentence, stamping today's date when the payload
    /// carries none
    pub async fn insert_sentence(&self, payload: &PracticeSentencePayload) -> Result<PracticeSentence> {
        let created_date = payload
            .created_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let sentence = sqlx::query_as::<_, PracticeSentence>(
            r#"
            INSERT INTO sentence_practices (english_sentence, turkish_translation, difficulty, created_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, english_sentence, turkish_translation, difficulty, created_date
            "#,
        )
        .bind(&payload.english_sentence)
        .bind(&payload.turkish_translation)
        .bind(payload.difficulty)
        .bind(created_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(sentence)
    }

    /// Overwrite all mutable fields of an existing practice sentence.
    ///
    /// Returns `None` when no row has the given ID; a missing
    /// `created_date` in the payload keeps the stored date.
    pub async fn update_sentence(
        &self,
        id: i64,
        payload: &PracticeSentencePayload,
    ) -> Result<Option<PracticeSentence>> {
        let sentence = sqlx::query_as::<_, PracticeSentence>(
            r#"
            UPDATE sentence_practices
            SET english_sentence = $2,
                turkish_translation = $3,
                difficulty = $4,
                created_date = COALESCE($5, created_date)
            WHERE id = $1
            RETURNING id, english_sentence, turkish_translation, difficulty, created_date
            "#,
        )
        .bind(id)
        .bind(&payload.english_sentence)
        .bind(&payload.turkish_translation)
        .bind(payload.difficulty)
        .bind(payload.created_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sentence)
    }

    /// Delete a practice sentence by ID
    pub async fn delete_sentence(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM sentence_practices
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get practice sentences with the given difficulty
    pub async fn get_sentences_by_difficulty(
        &self,
        difficulty: Difficulty,
    ) -> Result<Vec<PracticeSentence>> {
        let sentences = sqlx::query_as::<_, PracticeSentence>(
            r#"
            SELECT id, english_sentence, turkish_translation, difficulty, created_date
            FROM sentence_practices
            WHERE difficulty = $1
            ORDER BY id
            "#,
        )
        .bind(difficulty)
        .fetch_all(&self.pool)
        .await?;

        Ok(sentences)
    }

    /// Get practice sentences created on the given date
    pub async fn get_sentences_by_date(&self, date: NaiveDate) -> Result<Vec<PracticeSentence>> {
        let sentences = sqlx::query_as::<_, PracticeSentence>(
            r#"
            SELECT id, english_sentence, turkish_translation, difficulty, created_date
            FROM sentence_practices
            WHERE created_date = $1
            ORDER BY id
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(sentences)
    }

    /// Get practice sentences created within [start, end], inclusive
    pub async fn get_sentences_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PracticeSentence>> {
        let sentences = sqlx::query_as::<_, PracticeSentence>(
            r#"
            SELECT id, english_sentence, turkish_translation, difficulty, created_date
            FROM sentence_practices
            WHERE created_date BETWEEN $1 AND $2
            ORDER BY created_date, id
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(sentences)
    }

    /// Get the distinct creation dates across all practice sentences
    pub async fn get_distinct_dates(&self) -> Result<Vec<NaiveDate>> {
        let dates = sqlx::query_scalar::<_, NaiveDate>(
            r#"
            SELECT DISTINCT created_date
            FROM sentence_practices
            ORDER BY created_date
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(dates)
    }

    /// Count all practice sentences
    pub async fn count_sentences(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM sentence_practices
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Count practice sentences with the given difficulty
    pub async fn count_sentences_by_difficulty(&self, difficulty: Difficulty) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM sentence_practices
            WHERE difficulty = $1
            "#,
        )
        .bind(difficulty)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    // === Word Sentence Repository ===
    //
    // The `sentences` table is written by the word subsystem; this backend
    // reads it for the unified listing. The by-word lookup and bulk delete
    // are part of that subsystem's storage contract.

    /// Get all word-attached sentences
    pub async fn get_all_word_sentences(&self) -> Result<Vec<WordSentence>> {
        let sentences = sqlx::query_as::<_, WordSentence>(
            r#"
            SELECT id, sentence, translation, word_id
            FROM sentences
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sentences)
    }

    /// Count all word-attached sentences
    pub async fn count_word_sentences(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM sentences
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Get the sentences attached to a word
    pub async fn get_word_sentences_by_word(&self, word_id: i64) -> Result<Vec<WordSentence>> {
        let sentences = sqlx::query_as::<_, WordSentence>(
            r#"
            SELECT id, sentence, translation, word_id
            FROM sentences
            WHERE word_id = $1
            ORDER BY id
            "#,
        )
        .bind(word_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(sentences)
    }

    /// Delete every sentence attached to a word
    pub async fn delete_word_sentences_by_word(&self, word_id: i64) -> Result<usize> {
        let result = sqlx::query(
            r#"
            DELETE FROM sentences
            WHERE word_id = $1
            "#,
        )
        .bind(word_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() as usize)
    }
}
