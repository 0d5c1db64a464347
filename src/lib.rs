//! Course records and GPA calculation.
//!
//! The [`data`] module holds everything with semantics: the course model,
//! the CSV store, the scoring engine, filters and input validation. The
//! desktop window lives in the binary and only calls into this crate.

pub mod config;
pub mod data;
