// src/handlers/question.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::question::{CreateQuestionRequest, Question},
};

/// Lists every question in the bank, including answers.
pub async fn list_questions(State(pool): State<PgPool>) -> Result<impl IntoResponse, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question_title, option1, option2, option3, option4,
               right_answer, difficulty_level, category
        FROM questions
        "#,
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(questions))
}

/// Lists questions belonging to a category. Unknown categories simply
/// yield an empty list.
pub async fn questions_by_category(
    State(pool): State<PgPool>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question_title, option1, option2, option3, option4,
               right_answer, difficulty_level, category
        FROM questions
        WHERE category = $1
        "#,
    )
    .bind(&category)
    .fetch_all(&pool)
    .await?;

    Ok(Json(questions))
}

/// Adds a question to the bank.
pub async fn add_question(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    sqlx::query(
        r#"
        INSERT INTO questions
            (question_title, option1, option2, option3, option4,
             right_answer, difficulty_level, category)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(&payload.question_title)
    .bind(&payload.option1)
    .bind(&payload.option2)
    .bind(&payload.option3)
    .bind(&payload.option4)
    .bind(&payload.right_answer)
    .bind(&payload.difficulty_level)
    .bind(&payload.category)
    .execute(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to insert question: {:?}", e);
        AppError::from(e)
    })?;

    Ok((StatusCode::CREATED, "Question added successfully"))
}
