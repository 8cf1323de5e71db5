// src/models/contest.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'weekly_contests' table in the database.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyContest {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_time: Option<chrono::NaiveDateTime>,
    pub end_time: Option<chrono::NaiveDateTime>,
    pub active: bool,
}

/// DTO for creating a contest. The submitted `active` value is accepted
/// by the deserializer but ignored: contests are always activated at
/// creation time.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContestRequest {
    pub title: String,
    pub description: Option<String>,
    pub start_time: Option<chrono::NaiveDateTime>,
    pub end_time: Option<chrono::NaiveDateTime>,
    #[serde(default)]
    pub active: bool,
}
