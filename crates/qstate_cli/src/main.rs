//! qstate Command-Line Interface
//!
//! Derives frequencies, grid adjacency and directed qubit pairs from a QuAM
//! state directory.
//!
//! ```text
//! qstate // CLI
//!     frequencies // 주파수 테이블
//!     grid // 그리드 위치
//!     pairs // 제어/타깃 쌍
//!     verify // 저장본 비교
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use std::path::PathBuf;

mod commands;

use commands::common::Session;
use commands::{frequencies, grid, pairs, verify};

/// qstate - QuAM state utilities
#[derive(Parser)]
#[command(name = "qstate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding state.json and wiring.json
    #[arg(long, env = "QUAM_STATE_PATH", global = true)]
    state_path: Option<PathBuf>,

    /// Wiring file (defaults to <state-path>/wiring.json)
    #[arg(long, global = true)]
    wiring_path: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the derived qubit frequency table
    Frequencies {
        /// Write the frequency table as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// IF magnitude above which values are highlighted (MHz)
        #[arg(short, long, default_value_t = qstate_core::display::DEFAULT_IF_THRESHOLD_MHZ)]
        threshold: f64,
    },

    /// Print or export qubit grid locations
    Grid {
        /// Also write the listing to a file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Listing format
        #[arg(short, long, value_enum, default_value_t = GridFormat::Python)]
        format: GridFormat,
    },

    /// Derive directed qubit pairs
    Pairs {
        /// Replace qubit_pairs in state.json with the derived pairs
        #[arg(long)]
        write_to_state: bool,

        /// Write the pair mapping as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare local documents with a stored copy
    Verify {
        /// Directory holding the stored state.json and wiring.json
        #[arg(long)]
        against: PathBuf,
    },
}

/// Grid listing format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GridFormat {
    /// `grid_locations = {...}` literal
    Python,
    /// Pretty JSON object
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_target(false)
        .init();

    let session = Session {
        state_path: cli.state_path,
        wiring_path: cli.wiring_path,
        color: !cli.no_color && console::colors_enabled(),
    };

    // Execute command
    let result = match cli.command {
        Commands::Frequencies { output, threshold } => {
            frequencies::execute(&session, output.as_deref(), threshold)
        }
        Commands::Grid { output, format } => grid::execute(&session, output.as_deref(), format),
        Commands::Pairs {
            write_to_state,
            output,
        } => pairs::execute(&session, write_to_state, output.as_deref()),
        Commands::Verify { against } => verify::execute(&session, &against),
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
