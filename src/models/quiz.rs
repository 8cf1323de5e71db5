// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'quizzes' table. Questions are associated through
/// the 'quiz_questions' join table, ordered by position.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
}

/// Query parameters for assembling a quiz.
#[derive(Debug, Deserialize)]
pub struct CreateQuizParams {
    pub category: String,
    #[serde(rename = "numQ")]
    pub num_q: i64,
    pub title: String,
}

/// A single submitted answer: question id + the chosen option text.
/// Transient, never persisted.
#[derive(Debug, Deserialize)]
pub struct QuizResponse {
    pub id: i64,
    pub response: String,
}
