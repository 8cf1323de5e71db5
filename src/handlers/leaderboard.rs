// src/handlers/leaderboard.rs

use axum::{Json, extract::{Path, State}, response::IntoResponse};
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::leaderboard::{LeaderboardRow, RankedEntry},
};

/// Returns a contest's leaderboard, ranked.
///
/// Rows come back from the store ordered by score descending (ties kept
/// in id order); ranks are assigned in memory on every read and never
/// written back. An unknown contest id yields an empty list.
pub async fn get_leaderboard(
    State(pool): State<PgPool>,
    Path(contest_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let rows = sqlx::query_as::<_, LeaderboardRow>(
        r#"
        SELECT id, contest_id, user_id, score, submitted_at
        FROM leaderboard
        WHERE contest_id = $1
        ORDER BY score DESC, id ASC
        "#,
    )
    .bind(contest_id)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch leaderboard: {:?}", e);
        AppError::from(e)
    })?;

    Ok(Json(assign_ranks(rows)))
}

/// Assigns rank 1, 2, 3, … down the score-descending list. Equal scores
/// receive distinct consecutive ranks in list order.
fn assign_ranks(rows: Vec<LeaderboardRow>) -> Vec<RankedEntry> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| RankedEntry {
            id: row.id,
            contest_id: row.contest_id,
            user_id: row.user_id,
            score: row.score,
            rank: i as i32 + 1,
            submitted_at: row.submitted_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, score: i32) -> LeaderboardRow {
        LeaderboardRow {
            id,
            contest_id: 1,
            user_id: id,
            score,
            submitted_at: None,
        }
    }

    #[test]
    fn ranks_are_dense_one_to_n() {
        let rows = vec![row(1, 90), row(2, 70), row(3, 50), row(4, 10)];

        let ranked = assign_ranks(rows);

        let ranks: Vec<i32> = ranked.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);

        let scores: Vec<i32> = ranked.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![90, 70, 50, 10]);
    }

    #[test]
    fn tied_scores_get_distinct_consecutive_ranks() {
        let rows = vec![row(1, 80), row(2, 80), row(3, 60)];

        let ranked = assign_ranks(rows);

        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 2);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn empty_leaderboard_stays_empty() {
        assert!(assign_ranks(Vec::new()).is_empty());
    }
}
