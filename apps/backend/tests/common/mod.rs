//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up the router against a real database
//! - Helpers for seeding word-subsystem rows (words and their sentences)
//! - Cleanup helpers so tests remove the rows they created
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL).

pub mod fixtures;

use std::sync::Arc;

use axum::Router;

use calisma_backend::db::Database;
use calisma_backend::{app, AppState};

/// Test context containing database connection and test server router.
///
/// Requires DATABASE_URL environment variable to be set.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations().await.expect("Failed to run migrations");

        let db = Arc::new(db);
        let app = app(AppState { db: db.clone() });

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Seed a word row, as the word subsystem would.
    pub async fn create_word(&self, english: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO words (english_word, turkish_meaning) VALUES ($1, '') RETURNING id",
        )
        .bind(english)
        .fetch_one(self.db.pool())
        .await
        .expect("Failed to create test word")
    }

    /// Seed a word-attached sentence, as the word subsystem would.
    pub async fn create_word_sentence(
        &self,
        word_id: i64,
        sentence: &str,
        translation: &str,
    ) -> i64 {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO sentences (sentence, translation, word_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(sentence)
        .bind(translation)
        .bind(word_id)
        .fetch_one(self.db.pool())
        .await
        .expect("Failed to create test word sentence")
    }

    /// Remove a seeded word; its sentences cascade.
    pub async fn cleanup_word(&self, word_id: i64) {
        let _ = sqlx::query("DELETE FROM words WHERE id = $1")
            .bind(word_id)
            .execute(self.db.pool())
            .await;
    }

    /// Remove practice sentences created by a test.
    pub async fn cleanup_sentences(&self, ids: &[i64]) {
        let _ = sqlx::query("DELETE FROM sentence_practices WHERE id = ANY($1)")
            .bind(ids)
            .execute(self.db.pool())
            .await;
    }
}
