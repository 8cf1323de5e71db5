// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::{
        question::QuestionWrapper,
        quiz::{CreateQuizParams, Quiz, QuizResponse},
    },
};

/// Helper struct for fetching answer keys from the database.
#[derive(Debug, sqlx::FromRow)]
struct AnswerKey {
    id: i64,
    right_answer: String,
}

/// Assembles a new quiz from random questions of a category.
///
/// Picks `numQ` questions at random; if the category holds fewer, the
/// quiz is silently created with however many were found. Quiz row and
/// join rows are written in one transaction.
pub async fn create_quiz(
    State(pool): State<PgPool>,
    Query(params): Query<CreateQuizParams>,
) -> Result<impl IntoResponse, AppError> {
    let question_ids: Vec<(i64,)> = sqlx::query_as(
        r#"
        SELECT id FROM questions
        WHERE category = $1
        ORDER BY RANDOM()
        LIMIT $2
        "#,
    )
    .bind(&params.category)
    .bind(params.num_q)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch random questions: {:?}", e);
        AppError::from(e)
    })?;

    let mut tx = pool.begin().await?;

    let (quiz_id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO quizzes (title)
        VALUES ($1)
        RETURNING id
        "#,
    )
    .bind(&params.title)
    .fetch_one(&mut *tx)
    .await?;

    for (position, (question_id,)) in question_ids.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO quiz_questions (quiz_id, question_id, position)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(quiz_id)
        .bind(*question_id)
        .bind(position as i32)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!("Created quiz {} ({} questions)", quiz_id, question_ids.len());

    Ok((StatusCode::CREATED, "Quiz created successfully"))
}

/// Returns a quiz's questions in their stored order, stripped of the
/// right answer, difficulty and category.
pub async fn get_quiz(
    State(pool): State<PgPool>,
    Path(quiz_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    find_quiz(&pool, quiz_id).await?;

    let questions = sqlx::query_as::<_, QuestionWrapper>(
        r#"
        SELECT q.id, q.question_title, q.option1, q.option2, q.option3, q.option4
        FROM quiz_questions qq
        JOIN questions q ON q.id = qq.question_id
        WHERE qq.quiz_id = $1
        ORDER BY qq.position
        "#,
    )
    .bind(quiz_id)
    .fetch_all(&pool)
    .await?;

    Ok(Json(questions))
}

/// Scores a set of submitted answers against a quiz.
///
/// Returns only the total number of correct answers; no per-question
/// breakdown, and nothing is persisted.
pub async fn submit_quiz(
    State(pool): State<PgPool>,
    Path(quiz_id): Path<i64>,
    Json(responses): Json<Vec<QuizResponse>>,
) -> Result<impl IntoResponse, AppError> {
    find_quiz(&pool, quiz_id).await?;

    let answer_keys = sqlx::query_as::<_, AnswerKey>(
        r#"
        SELECT q.id, q.right_answer
        FROM quiz_questions qq
        JOIN questions q ON q.id = qq.question_id
        WHERE qq.quiz_id = $1
        ORDER BY qq.position
        "#,
    )
    .bind(quiz_id)
    .fetch_all(&pool)
    .await?;

    let score = score_responses(&answer_keys, &responses);

    Ok(Json(score))
}

/// Looks up a quiz row, converting a missing id into an explicit 404.
async fn find_quiz(pool: &PgPool, quiz_id: i64) -> Result<Quiz, AppError> {
    sqlx::query_as::<_, Quiz>("SELECT id, title FROM quizzes WHERE id = $1")
        .bind(quiz_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound("Quiz not found".to_string()))
}

/// Counts correct answers. Each response is matched to the first
/// question with the same id; the comparison is whitespace-trimmed and
/// case-insensitive. Responses whose id is not part of the quiz are
/// ignored.
fn score_responses(questions: &[AnswerKey], responses: &[QuizResponse]) -> i32 {
    let mut score = 0;

    for response in responses {
        if let Some(question) = questions.iter().find(|q| q.id == response.id) {
            if response
                .response
                .trim()
                .eq_ignore_ascii_case(question.right_answer.trim())
            {
                score += 1;
            }
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(id: i64, answer: &str) -> AnswerKey {
        AnswerKey {
            id,
            right_answer: answer.to_string(),
        }
    }

    fn resp(id: i64, response: &str) -> QuizResponse {
        QuizResponse {
            id,
            response: response.to_string(),
        }
    }

    #[test]
    fn scoring_is_trimmed_and_case_insensitive() {
        let questions = vec![key(1, "Paris"), key(2, "42")];
        let responses = vec![resp(1, "paris"), resp(2, "41")];

        assert_eq!(score_responses(&questions, &responses), 1);
    }

    #[test]
    fn whitespace_around_answers_is_ignored() {
        let questions = vec![key(1, " Paris ")];
        let responses = vec![resp(1, "PARIS  ")];

        assert_eq!(score_responses(&questions, &responses), 1);
    }

    #[test]
    fn unknown_response_ids_do_not_affect_the_score() {
        let questions = vec![key(1, "Paris")];
        let responses = vec![resp(99, "Paris"), resp(1, "Paris")];

        assert_eq!(score_responses(&questions, &responses), 1);
    }

    #[test]
    fn empty_submission_scores_zero() {
        let questions = vec![key(1, "Paris")];

        assert_eq!(score_responses(&questions, &[]), 0);
    }

    #[test]
    fn all_correct_answers_count() {
        let questions = vec![key(1, "A"), key(2, "B"), key(3, "C")];
        let responses = vec![resp(1, "a"), resp(2, "b"), resp(3, "c")];

        assert_eq!(score_responses(&questions, &responses), 3);
    }
}
