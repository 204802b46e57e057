#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Domain models for sealed-bid auctions.
///
/// This module holds the configuration, input and outcome types that the
/// resolver consumes and produces. They are plain data with validation at
/// their boundaries and no resolution logic of their own.
pub mod models;

mod rank;
pub use rank::{first_argmax, kth_largest, second_largest};

mod resolver;
pub use resolver::AuctionResolver;
