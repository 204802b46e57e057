use sba_core::{
    AuctionResolver,
    models::{AuctionType, Award, NoWinner, Resolution, Snapshot},
};
use serde::Serialize;

/// The JSON document written for a resolved auction.
///
/// Exactly one of `winner` and `no_winner` is present once the auction is
/// resolved.
#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct AuctionReport {
    /// The payment rule that was applied
    pub auction_type: AuctionType,
    /// The reserve price that was applied
    pub reserve_price: f64,
    /// The bidders, in order
    pub bidders: Vec<String>,
    /// The bids, index-aligned with the bidders
    pub bids: Vec<f64>,
    /// `1` for the winner, `0` for everyone else
    pub allocation: Vec<u8>,
    /// The winner's price, `0` for everyone else
    pub payment: Vec<f64>,
    /// Whether the auction has been resolved
    pub resolved: bool,
    /// The award, if the good was allocated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Award<String>>,
    /// Why the good was not allocated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_winner: Option<NoWinner>,
}

impl AuctionReport {
    /// Take a snapshot of the auction's current state
    pub fn new(resolver: &AuctionResolver<String>) -> Self {
        let Snapshot {
            allocation,
            payment,
            resolution,
        } = resolver.snapshot();
        let resolved = resolution.is_some();

        let (winner, no_winner) = match resolution {
            Some(Resolution::Winner(award)) => (Some(award), None),
            Some(Resolution::NoWinner(reason)) => (None, Some(reason)),
            None => (None, None),
        };

        Self {
            auction_type: resolver.auction_type(),
            reserve_price: resolver.reserve_price(),
            bidders: resolver.bidders().to_vec(),
            bids: resolver.bids().to_vec(),
            allocation,
            payment,
            resolved,
            winner,
            no_winner,
        }
    }
}
