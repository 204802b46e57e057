use crate::AuctionReport;
use sba_core::models::{AuctionConfig, AuctionInput, Resolution};
use tracing::{Level, event};

/// Build the auction described by `input` on top of `base`, resolve it and
/// report the outcome.
pub fn resolve_auction(
    input: AuctionInput<String>,
    base: AuctionConfig,
) -> anyhow::Result<AuctionReport> {
    let resolver = input.into_resolver(base)?;

    match resolver.resolve().resolution {
        Resolution::Winner(award) => event!(
            Level::INFO,
            bidder = %award.bidder,
            price = award.price,
            "auction resolved"
        ),
        Resolution::NoWinner(reason) => {
            event!(Level::INFO, ?reason, "auction resolved without a winner")
        }
    }

    Ok(AuctionReport::new(&resolver))
}
