// fcra/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fcra")]
#[command(about = "FCRA remediation reporting: CSV import, statistics and exports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// YAML configuration file (default: fcra.yaml or fcra.yml in the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// DuckDB database file, overrides the configuration
    #[arg(long, global = true)]
    pub db_path: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📥 Replaces the stored records with the rows of a CSV file
    Import {
        /// CSV file (default: `csv_path` from the configuration)
        csv: Option<PathBuf>,
    },

    /// 🌱 Appends five demo records spread over several months
    Seed,

    /// 📊 Prints the summary table, or the summary cards with --json
    Summary {
        #[arg(long)]
        json: bool,
    },

    /// 📅 Prints the latest process date (YYYY-MM-DD)
    AsOf,

    /// 📈 Monthly counts per portfolio
    Trend {
        /// instances | exceptions | remediation | lob
        #[arg(long, default_value = "instances")]
        metric: String,

        #[arg(long)]
        json: bool,
    },

    /// 🗂️  Statistics of one portfolio
    Portfolio {
        /// Credit Cards | TDAF | Consumer
        name: String,

        #[arg(long)]
        json: bool,
    },

    /// 📋 Lists the records of one portfolio
    Records {
        name: String,

        /// Exact remediation status to keep
        #[arg(long)]
        status: Option<String>,

        /// Exact remediation category to keep
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// ✏️  Writes one field of one record
    Update {
        id: i64,
        field: String,
        value: String,
    },

    /// 🔎 Distinct statuses and categories of one portfolio
    Filters {
        name: String,

        #[arg(long)]
        json: bool,
    },

    /// 👤 Counts Incomplete and Unsolved records assigned to someone
    OpenTasks { assignee: String },

    /// 💾 Writes an .xlsx export of the summary or of one portfolio
    Export {
        /// `summary` or a portfolio label
        target: String,

        /// Output directory (default: `export_dir` from the configuration)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// 🌐 Serves the JSON API
    Serve {
        /// Listen address (default: `bind` from the configuration)
        #[arg(long)]
        bind: Option<String>,
    },
}
