// src/handlers/mod.rs

pub mod auth;
pub mod contest;
pub mod leaderboard;
pub mod question;
pub mod quiz;
