mod auction_type;
mod config;
mod error;
mod input;
mod map;
mod outcome;

pub use auction_type::AuctionType;
pub use config::{AuctionConfig, PairingPolicy};
pub(crate) use config::is_valid_amount;
pub use error::ConfigurationError;
pub use input::AuctionInput;
pub use map::Map;
pub use outcome::{Award, NoWinner, ResolveReport, ResolveStatus, Resolution, Snapshot};
