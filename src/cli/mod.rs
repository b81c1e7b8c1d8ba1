//! CLI module for toolrec - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for running the
//! recommendation pipeline and inspecting the catalog.

pub mod commands;

pub use commands::Cli;
