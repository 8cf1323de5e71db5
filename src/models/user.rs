// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    pub username: String,

    /// Unique email, the login identifier.
    pub email: String,

    /// Stored and compared as plaintext. Skipped during serialization
    /// so it never appears in a response body.
    #[serde(skip_serializing)]
    pub password: String,

    pub created_at: Option<chrono::NaiveDateTime>,
}

/// DTO for creating a new user (Signup).
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// DTO for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
