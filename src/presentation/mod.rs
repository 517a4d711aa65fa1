//! Presentation Layer
//!
//! CLI argument parsing and output rendering.

pub mod cli;
pub mod output;
