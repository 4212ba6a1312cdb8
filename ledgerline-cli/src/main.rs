use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ledgerline_ingest::parse_chase_debit_statements;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod export;
mod inputs;
mod pdf;
mod summary;

use export::ExportFormat;

#[derive(Parser, Debug)]
#[command(name = "ledgerline", version, about = "Extract transactions from bank statement text")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse statements and write the merged transactions
    Parse {
        /// Statement files (.pdf or extracted .txt) or directories of PDFs
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Layout file (TOML); defaults to the Chase checking layout
        #[arg(long)]
        layout: Option<PathBuf>,

        /// Output file (default: <input dir>/../processed/all_transactions.csv)
        #[arg(long)]
        out: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Print the summary only
        #[arg(long, conflicts_with = "out")]
        no_export: bool,

        /// Number of sample transactions to print
        #[arg(long, default_value_t = 10)]
        sample: usize,
    },

    /// Statement layout files
    Layout {
        #[command(subcommand)]
        command: LayoutCommand,
    },
}

#[derive(Subcommand, Debug)]
enum LayoutCommand {
    /// Write the default layout to a file for editing
    Init {
        #[arg(default_value = "layout.toml")]
        path: PathBuf,

        #[arg(long)]
        force: bool,
    },

    /// Print the effective layout
    Show {
        #[arg(long)]
        layout: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Parse {
            paths,
            layout,
            out,
            format,
            no_export,
            sample,
        } => {
            let layout = config::compile_layout(layout.as_deref())?;
            let docs = inputs::collect_documents(&paths)?;
            println!("Found {} statement files", docs.len());

            let outcome = parse_chase_debit_statements(&docs, &pdf::StatementSource, &layout);
            summary::print_summary(&outcome, sample);

            if !no_export && !outcome.records.is_empty() {
                let out = out.unwrap_or_else(|| inputs::default_output_path(&paths[0]));
                export::write_records(&out, &outcome.records, format)
                    .with_context(|| format!("exporting to {}", out.display()))?;
                println!("\nSaved to: {}", out.display());
            }
        }

        Command::Layout { command } => match command {
            LayoutCommand::Init { path, force } => {
                config::init_layout(&path, force)?;
            }
            LayoutCommand::Show { layout } => {
                let cfg = config::load_layout(layout.as_deref())?;
                print!("{}", config::render_layout(&cfg)?);
            }
        },
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
