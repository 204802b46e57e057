//! Layered defaults for the auction configuration.
//!
//! Each auction file may override any of these settings for itself.

use crate::CliError;
use sba_core::models::AuctionConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The application configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Defaults for every auction resolved by this process
    #[serde(default)]
    pub auction: AuctionConfig,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern
    /// `SBA_<SECTION>__<KEY>` to `<section>.<key>`, for example
    /// `SBA_AUCTION__RESERVE_PRICE=2.5` or `SBA_AUCTION__AUCTION_TYPE=first_price`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path));
            } else {
                return Err(CliError::MissingConfig(path.to_owned()))?;
            }
        }

        config = config.add_source(
            config::Environment::with_prefix("SBA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}
