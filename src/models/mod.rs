// src/models/mod.rs

pub mod contest;
pub mod leaderboard;
pub mod question;
pub mod quiz;
pub mod user;
