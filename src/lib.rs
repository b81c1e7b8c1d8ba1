//! Toolrec - an educational tool recommendation engine
//!
//! Toolrec ranks a catalog of classroom tools for a specific student and
//! lesson context: standards lookup, context and profile filtering, weighted
//! effectiveness scoring, and human-readable reasoning for each pick.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod error;

pub use error::{Result, ToolrecError};
