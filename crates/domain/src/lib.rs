//! Domain models and services for the Staff Hub backend.
//!
//! This crate contains:
//! - Typed models for every stored collection
//! - Pure domain services (commission summaries, dashboard statistics,
//!   team performance rollups, identity merging)

pub mod models;
pub mod services;
