// src/models/leaderboard.rs

use serde::Serialize;
use sqlx::FromRow;

/// A row of the 'leaderboard' table. Rank is not a column: it is derived
/// from the score ordering on every read (see handlers::leaderboard).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    pub id: i64,
    pub contest_id: i64,
    pub user_id: i64,
    pub score: i32,
    pub submitted_at: Option<chrono::NaiveDateTime>,
}

/// A leaderboard row with its computed rank filled in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub id: i64,
    pub contest_id: i64,
    pub user_id: i64,
    pub score: i32,
    pub rank: i32,
    pub submitted_at: Option<chrono::NaiveDateTime>,
}
