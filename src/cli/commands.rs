//! CLI commands and argument parsing

use crate::output::OutputFormat;
use crate::types::OwnerType;
use clap::{Parser, Subcommand};

/// GitHub Projects V2 command-line client
#[derive(Parser, Debug)]
#[command(name = "projectctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "default")]
    pub output: OutputFormat,

    /// Records requested per page (1-100)
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Fail instead of fetching more than this many pages
    #[arg(long, global = true)]
    pub max_pages: Option<u32>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the projects of a user or organization
    Projects {
        /// Login of the owner
        #[arg(long)]
        owner: String,

        /// Kind of owner
        #[arg(long, value_enum, default_value = "user")]
        owner_type: OwnerType,
    },

    /// List the issue items of a project
    Items {
        /// Global node ID of the project
        #[arg(long)]
        project_id: String,
    },

    /// List the field definitions of a project
    Fields {
        /// Global node ID of the project
        #[arg(long)]
        project_id: String,
    },
}
