//! Core types and trait definitions for the FAQ catalog.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod input;
pub mod store;
pub mod subject;
pub mod topic;

pub use error::{Error, Result, StoreError};
