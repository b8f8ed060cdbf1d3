//! Core library for the `dedupdecl` cleanup tool.
//!
//! `dedupdecl` removes duplicate method-like declaration blocks from a single
//! generated source file. It locates repeated signatures by name, determines
//! each block's textual extent by brace-depth counting, deletes every
//! occurrence after the first, and writes the file back.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants.
pub mod constants;

/// Module containing the duplicate-block planning and application logic.
pub mod dedupe;

/// Module containing the in-memory document buffer.
pub mod document;

/// Module defining the entry point logic shared by the binary and tests.
pub mod entry_point;

/// Module for brace-depth block extent detection.
pub mod extent;

/// Module for signature pattern matching and marker location.
pub mod marker;

/// Module for rich CLI output formatting with colored text and tables.
pub mod output;
