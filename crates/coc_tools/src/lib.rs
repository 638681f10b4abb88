//! # CoC Tools
//!
//! File IO and command-line tooling around `coc_core`:
//! - Catalog loader (RON files)
//! - Player snapshot reader (JSON)
//! - Data validator
//! - Plain-text progress tables

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod loader;
pub mod report;
pub mod validate;
