use clap::Parser;
use sba_core::models::AuctionInput;
use std::path::PathBuf;

mod io;
pub use io::*;

mod commands;
pub use commands::*;

mod config;
pub use config::AppConfig;

mod report;
pub use report::AuctionReport;

// The top-level arguments: an optional config file and the subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// TOML file with default auction settings
    #[arg(short, long, global = true, env = "SBA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Resolve { io } => {
                let AppConfig { auction } = AppConfig::load(self.config.as_deref())?;
                let input = serde_json::from_reader::<_, AuctionInput<String>>(io.read()?)?;
                let report = resolve_auction(input, auction)?;
                serde_json::to_writer_pretty(io.write()?, &report)?;
            }
            Commands::Schema { kind, output } => {
                serde_json::to_writer_pretty(output.writer()?, &kind.schema())?;
            }
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Config file {0} does not exist")]
    MissingConfig(PathBuf),
}
