//! Shared utilities and common types for the Staff Hub backend.
//!
//! This crate provides common functionality used across all other crates:
//! - CSV rendering for exports
//! - Common validation logic (column identifiers, request fields)

pub mod csv;
pub mod validation;
