//! # Playoff Pool
//!
//! Scoreboard service for a fantasy football playoff pool: reconciles
//! hand-maintained picks and scores worksheets into a ranked leaderboard.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (rounds, positions, submissions,
//!   score records, lineups, leaderboard entries)
//! - **calculate**: Pure scoring engine (matching, resolution, totals,
//!   ranking, visibility gating)
//! - **ingest**: Tolerant parsing of raw worksheet rows
//! - **fetch**: Snapshot sources (HTTP with TTL cache, local fixtures)
//! - **config**: Configuration loading and validation
//! - **api**: REST API endpoints

pub mod api;
pub mod calculate;
pub mod config;
pub mod fetch;
pub mod ingest;
pub mod models;

pub use models::*;
