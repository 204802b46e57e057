use super::{AuctionConfig, AuctionType, ConfigurationError, Map, PairingPolicy};
use crate::AuctionResolver;
use std::hash::Hash;

/// A DTO describing a single auction, as supplied by an untrusted source.
///
/// The bids are given either as parallel `bidders`/`bids` sequences or as a
/// `bid_map`, never both. Any configuration field that is present overrides
/// the base configuration passed to [`AuctionInput::into_resolver`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct AuctionInput<BidderId: Eq + Hash> {
    /// The payment rule, if overriding the base configuration
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub auction_type: Option<AuctionType>,

    /// The reserve price, if overriding the base configuration
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub reserve_price: Option<f64>,

    /// The second-price increment, if overriding the base configuration
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub increment: Option<f64>,

    /// The pairing policy, if overriding the base configuration
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub pairing: Option<PairingPolicy>,

    /// The bidders, index-aligned with `bids`
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub bidders: Option<Vec<BidderId>>,

    /// The bids, index-aligned with `bidders`
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub bids: Option<Vec<f64>>,

    /// A pre-built mapping of bidder to bid
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub bid_map: Option<Map<BidderId>>,
}

impl<BidderId: Eq + Hash> Default for AuctionInput<BidderId> {
    fn default() -> Self {
        Self {
            auction_type: None,
            reserve_price: None,
            increment: None,
            pairing: None,
            bidders: None,
            bids: None,
            bid_map: None,
        }
    }
}

impl<BidderId: Eq + Hash> AuctionInput<BidderId> {
    /// Apply the configuration fields present in this input on top of `base`
    pub fn overlay(&self, base: AuctionConfig) -> AuctionConfig {
        AuctionConfig {
            auction_type: self.auction_type.unwrap_or(base.auction_type),
            reserve_price: self.reserve_price.unwrap_or(base.reserve_price),
            increment: self.increment.unwrap_or(base.increment),
            pairing: self.pairing.unwrap_or(base.pairing),
        }
    }
}

impl<BidderId: Eq + Hash + Clone> AuctionInput<BidderId> {
    /// Validate the input and construct an unresolved auction
    pub fn into_resolver(
        self,
        base: AuctionConfig,
    ) -> Result<AuctionResolver<BidderId>, ConfigurationError> {
        let config = self.overlay(base);

        match (self.bid_map, self.bidders, self.bids) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(ConfigurationError::AmbiguousBids),
            (Some(bid_map), None, None) => AuctionResolver::from_map(config, bid_map),
            (None, bidders, bids) => AuctionResolver::new(
                config,
                bidders.unwrap_or_default(),
                bids.unwrap_or_default(),
            ),
        }
    }
}
