// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question itself.
    pub question_title: String,

    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,

    /// The correct answer. Never sent to clients taking a quiz.
    pub right_answer: String,

    /// Difficulty label (e.g., "Easy", "Medium", "Hard").
    pub difficulty_level: String,

    /// Category label used to build quizzes (e.g., "Java", "History").
    pub category: String,
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question_title: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    pub right_answer: String,
    pub difficulty_level: String,
    pub category: String,
}

/// DTO for sending a question to a quiz taker.
/// Excludes the right answer, difficulty and category.
#[derive(Debug, Serialize, FromRow)]
pub struct QuestionWrapper {
    pub id: i64,
    pub question_title: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
}
