//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Job-board search client
#[derive(Parser, Debug)]
#[command(name = "jobboard-search")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (JSON or YAML)
    #[arg(short, long, global = true, default_value = "app.json")]
    pub settings: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search open jobs
    Jobs {
        /// Filter as a JSON object of field -> clause or list of clauses
        #[arg(long)]
        filter: Option<String>,

        /// Page size
        #[arg(long, default_value = "30")]
        count: u32,

        /// Offset of the first record
        #[arg(long)]
        start: Option<u64>,
    },

    /// Look up a single job by id
    Job {
        /// Job id
        id: u64,
    },

    /// List every job id matching the filter
    Ids {
        /// Filter as a JSON object
        #[arg(long)]
        filter: Option<String>,

        /// Filter keys to leave out (comma-separated)
        #[arg(long, value_delimiter = ',')]
        ignore: Vec<String>,
    },

    /// Count jobs per value of a field
    Options {
        /// Grouping field, e.g. "address(state)"
        #[arg(long)]
        field: String,

        /// Job ids to group (comma-separated)
        #[arg(long, value_delimiter = ',')]
        ids: Vec<u64>,
    },

    /// Print compiled query strings without sending requests
    Query {
        /// Filter as a JSON object
        #[arg(long)]
        filter: Option<String>,

        /// Filter keys to leave out of the id query (comma-separated)
        #[arg(long, value_delimiter = ',')]
        ignore: Vec<String>,
    },
}
