//! CLI module
//!
//! Command-line interface for listing Projects V2 data.
//!
//! # Commands
//!
//! - `projects` - List the projects of a user or organization
//! - `items` - List the issue items of a project
//! - `fields` - List the field definitions of a project

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::{describe_error, Runner};
