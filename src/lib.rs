//! TestTrack server library.
//!
//! Test management and bug tracking over PostgreSQL: entity repositories,
//! report and chart aggregations, and the actix-web API that exposes them.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
