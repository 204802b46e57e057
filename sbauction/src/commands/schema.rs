use crate::AuctionReport;
use clap::ValueEnum;
use sba_core::models::{AuctionConfig, AuctionInput};

// The documents this tool reads or writes
#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaKind {
    /// An auction to resolve
    Input,
    /// The `[auction]` section of the config file
    Config,
    /// The report written after resolving
    Report,
}

impl SchemaKind {
    pub fn schema(&self) -> schemars::Schema {
        match self {
            Self::Input => schemars::schema_for!(AuctionInput<String>),
            Self::Config => schemars::schema_for!(AuctionConfig),
            Self::Report => schemars::schema_for!(AuctionReport),
        }
    }
}
