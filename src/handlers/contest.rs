// src/handlers/contest.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::contest::{CreateContestRequest, WeeklyContest},
};

/// Creates a weekly contest.
///
/// Contests are always activated at creation: any `active` value in the
/// request body is ignored. There is no time-based deactivation; the
/// flag only changes through explicit writes.
pub async fn create_contest(
    State(pool): State<PgPool>,
    Json(payload): Json<CreateContestRequest>,
) -> Result<impl IntoResponse, AppError> {
    let contest = sqlx::query_as::<_, WeeklyContest>(
        r#"
        INSERT INTO weekly_contests (title, description, start_time, end_time, active)
        VALUES ($1, $2, $3, $4, TRUE)
        RETURNING id, title, description, start_time, end_time, active
        "#,
    )
    .bind(&payload.title)
    .bind(&payload.description)
    .bind(payload.start_time)
    .bind(payload.end_time)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create contest: {:?}", e);
        AppError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(contest)))
}

/// Lists contests whose active flag is set.
pub async fn active_contests(State(pool): State<PgPool>) -> Result<impl IntoResponse, AppError> {
    let contests = sqlx::query_as::<_, WeeklyContest>(
        r#"
        SELECT id, title, description, start_time, end_time, active
        FROM weekly_contests
        WHERE active = TRUE
        "#,
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(contests))
}

/// Retrieves a single contest by ID.
pub async fn get_contest(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let contest = sqlx::query_as::<_, WeeklyContest>(
        r#"
        SELECT id, title, description, start_time, end_time, active
        FROM weekly_contests
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Contest not found".to_string()))?;

    Ok(Json(contest))
}
