mod calc;
mod cmd;
mod data;
mod error;
mod logging;
mod ui;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "wfo", about = "work from office day planner")]
struct Cli {
    /// Path to the data directory containing config.yaml (default: ./config)
    #[arg(long, default_value = "./config", global = true)]
    data_dir: PathBuf,

    /// Log debug output (stderr, or wfo.log during the interactive session)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default config.yaml
    Init,
    /// Print the office-day plan for the year
    Plan {
        /// Office target percentage, overrides config (0-100)
        #[arg(long, value_parser = data::app_settings::parse_percent)]
        percent: Option<f64>,
        /// Office days already present, overrides config
        #[arg(long)]
        present: Option<u32>,
        /// Single leave date (YYYY-MM-DD), may be repeated
        #[arg(long = "leave", value_name = "DATE")]
        leave: Vec<NaiveDate>,
        /// Inclusive leave range, may be repeated
        #[arg(long = "range", num_args = 2, value_names = ["START", "END"])]
        ranges: Vec<NaiveDate>,
        /// Month to plan from (1-12), defaults to the current month
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the holiday calendar
    Holidays,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Resolve data_dir to an absolute path so file I/O works regardless of
    // future directory changes within the process.
    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());

    if cli.command.is_none() {
        logging::init_file(cli.verbose, &data_dir)?;
    } else {
        logging::init_stderr(cli.verbose);
    }
    debug!(data_dir = %data_dir.display(), "starting");

    // Auto-init when the data directory is missing or empty and the user did not
    // explicitly invoke the `init` subcommand.
    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command && dir_needs_init(&data_dir) {
        eprintln!(
            "Data directory '{}' is missing or empty, running init...",
            data_dir.display()
        );
        cmd::init::run()?;
    }

    match cli.command {
        None => cmd::root::run(),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Plan {
            percent,
            present,
            leave,
            ranges,
            month,
            json,
        }) => cmd::plan::run(&cmd::plan::PlanOptions {
            percent,
            present,
            leave,
            ranges,
            month,
            json,
        }),
        Some(Commands::Holidays) => cmd::holidays::run(),
    }
}

/// Returns true when `dir` does not exist or has no config.yaml in it.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    !dir.join("config.yaml").exists()
}
