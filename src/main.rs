mod analytics;
mod cli_messages;
mod config;
mod consts;
mod data;
mod events;
mod logging;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::LOAD_REMEDIATION;
use crate::session::{run_summary, run_tui_mode, setup_session};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::{error::Error, path::PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Dashboard {
        /// Cleaned transaction table (CSV); overrides the saved config.
        #[arg(long, value_name = "PATH")]
        transactions: Option<PathBuf>,

        /// Customer RFM segmentation table (CSV); overrides the saved config.
        #[arg(long, value_name = "PATH")]
        rfm: Option<PathBuf>,

        /// Disable the dashboard background fill.
        #[arg(long)]
        no_background: bool,
    },
    /// Print the aggregate digest without the interactive screen
    Summary {
        /// Cleaned transaction table (CSV); overrides the saved config.
        #[arg(long, value_name = "PATH")]
        transactions: Option<PathBuf>,

        /// Customer RFM segmentation table (CSV); overrides the saved config.
        #[arg(long, value_name = "PATH")]
        rfm: Option<PathBuf>,

        /// Start of the inclusive date filter (YYYY-MM-DD).
        #[arg(long, value_name = "DATE")]
        from: Option<NaiveDate>,

        /// End of the inclusive date filter (YYYY-MM-DD).
        #[arg(long, value_name = "DATE")]
        to: Option<NaiveDate>,

        /// Restrict the transaction views to a single country.
        #[arg(long, value_name = "NAME")]
        country: Option<String>,
    },
    /// Save table locations so later runs need no flags
    SetData {
        /// Cleaned transaction table (CSV).
        #[arg(long, value_name = "PATH")]
        transactions: PathBuf,

        /// Customer RFM segmentation table (CSV).
        #[arg(long, value_name = "PATH")]
        rfm: PathBuf,
    },
    /// Delete the saved configuration
    ResetConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Dashboard {
            transactions,
            rfm,
            no_background,
        } => {
            let session = match setup_session(transactions, rfm).await {
                Ok(session) => session,
                Err(error) => exit_load_failure(error),
            };
            run_tui_mode(session, !no_background).await
        }
        Command::Summary {
            transactions,
            rfm,
            from,
            to,
            country,
        } => {
            logging::init_headless_logger();
            let session = match setup_session(transactions, rfm).await {
                Ok(session) => session,
                Err(error) => exit_load_failure(error),
            };
            run_summary(session, from, to, country)
        }
        Command::SetData { transactions, rfm } => {
            let config_path = get_config_path()?;
            if !transactions.exists() {
                print_cmd_warn!(
                    "Missing file",
                    "{} does not exist yet",
                    transactions.display()
                );
            }
            if !rfm.exists() {
                print_cmd_warn!("Missing file", "{} does not exist yet", rfm.display());
            }
            let config = Config::new(
                transactions.display().to_string(),
                rfm.display().to_string(),
            );
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!(
                "Configuration saved",
                "{} and {}",
                config.transactions_path,
                config.rfm_path
            );
            Ok(())
        }
        Command::ResetConfig => {
            let config_path = get_config_path()?;
            Config::clear(&config_path).map_err(|e| format!("Failed to clear config: {}", e))?;
            print_cmd_success!("Configuration reset", "removed {}", config_path.display());
            Ok(())
        }
    }
}

/// Reports a failed table load and exits before any terminal takeover.
fn exit_load_failure(error: Box<dyn Error>) -> ! {
    let details = error.to_string();
    print_cmd_error!("Failed to load the data tables", details.as_str());
    cli_messages::print_info("Hint", LOAD_REMEDIATION);
    std::process::exit(1);
}
