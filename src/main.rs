use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::cli::{
    handle_add, handle_categories, handle_chart, handle_export, handle_list, handle_summary,
    ExportFormat,
};
use expense_ledger::config::LedgerPaths;
use expense_ledger::storage::json_file_valid;
use expense_ledger::Ledger;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Record expenses and see where the money goes",
    long_about = "A single-user expense ledger. Every expense has a description, \
                  a non-negative amount and a category. Expenses are kept in a \
                  JSON file and can be summarized, charted and exported."
)]
struct Cli {
    /// Path to the ledger file (default: data/expenses.json)
    #[arg(long, global = true, value_name = "PATH")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount spent, e.g. 12.50
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category, e.g. Food
        category: String,
    },
    /// List all recorded expenses
    #[command(alias = "ls")]
    List,
    /// Show totals per category
    Summary {
        /// Write the summary as CSV to this file instead
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the spending-by-category chart
    Chart,
    /// Export all expenses to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
    },
    /// List the suggested categories
    Categories,
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,
    /// Show where the ledger is stored
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal; log lines would corrupt the screen
    if !matches!(cli.command, Some(Commands::Tui)) {
        expense_ledger::init_tracing();
    }

    let paths = LedgerPaths::new(cli.data_file);

    match cli.command {
        Some(Commands::Add {
            description,
            amount,
            category,
        }) => {
            let mut ledger = Ledger::load(paths.data_file())?;
            handle_add(&mut ledger, &description, &amount, &category)?;
        }
        Some(Commands::List) => handle_list(&Ledger::load(paths.data_file())?)?,
        Some(Commands::Summary { output }) => {
            handle_summary(&Ledger::load(paths.data_file())?, output)?;
        }
        Some(Commands::Chart) => handle_chart(&Ledger::load(paths.data_file())?)?,
        Some(Commands::Export { output, format }) => {
            handle_export(&Ledger::load(paths.data_file())?, output, format)?;
        }
        Some(Commands::Categories) => handle_categories()?,
        Some(Commands::Tui) => {
            let mut ledger = Ledger::load(paths.data_file())?;
            expense_ledger::tui::run_tui(&mut ledger)?;
        }
        Some(Commands::Config) => {
            let data_file = paths.data_file();
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Data file: {}", data_file.display());
            println!(
                "Data dir:  {}",
                paths.data_dir().unwrap_or(Path::new(".")).display()
            );
            println!("Exists:    {}", paths.is_initialized());
            if paths.is_initialized() {
                println!("Valid:     {}", json_file_valid(data_file));
            }
        }
        None => {
            println!("Expense Ledger - record expenses and see where the money goes");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
