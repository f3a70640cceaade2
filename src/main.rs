use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tally_cli::cli::{
    handle_add, handle_delete, handle_export, handle_list, handle_report_command, handle_years,
    KindArg, ReportCommands,
};
use tally_cli::config::TallyPaths;
use tally_cli::storage::JsonLedgerStore;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based personal finance ledger",
    long_about = "tally records income and expense transactions in a local \
                  JSON ledger and derives monthly, yearly, and per-category \
                  totals for display and CSV export."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a transaction
    Add {
        /// income or expense
        #[arg(value_enum)]
        kind: KindArg,

        /// Amount, e.g. 1250.00 (never negative; the kind carries the sign)
        amount: String,

        /// Transaction date (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Who the money came from or went to
        #[arg(short, long)]
        party: Option<String>,

        /// Free-text category for grouping
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List transactions for a year
    #[command(alias = "ls")]
    List {
        /// Year to list (default: most recent year in the ledger)
        #[arg(short, long)]
        year: Option<i32>,

        /// Restrict to one month (1-12)
        #[arg(short, long)]
        month: Option<u32>,
    },

    /// Delete a transaction by the id shown in `list`
    #[command(alias = "rm")]
    Delete {
        /// Entry id
        id: u64,
    },

    /// Totals reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export a year of transactions to CSV
    Export {
        /// Output file path
        output: PathBuf,

        /// Year to export (default: most recent year in the ledger)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// List the years present in the ledger
    Years,

    /// Show resolved paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    paths.ensure_directories()?;
    let store = JsonLedgerStore::new(paths.ledger_file());

    match cli.command {
        Commands::Add {
            kind,
            amount,
            date,
            party,
            category,
        } => {
            handle_add(
                &store,
                kind.into(),
                &amount,
                date.as_deref(),
                party.as_deref(),
                category.as_deref(),
            )?;
        }
        Commands::List { year, month } => {
            handle_list(&store, year, month)?;
        }
        Commands::Delete { id } => {
            handle_delete(&store, id)?;
        }
        Commands::Report(cmd) => {
            handle_report_command(&store, cmd)?;
        }
        Commands::Export { output, year } => {
            handle_export(&store, &output, year)?;
        }
        Commands::Years => {
            handle_years(&store)?;
        }
        Commands::Config => {
            println!("Data directory: {}", paths.data_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
        }
    }

    Ok(())
}
