#![forbid(unsafe_code)]

pub mod high_scores;
pub mod repository;
pub mod sqlite;
