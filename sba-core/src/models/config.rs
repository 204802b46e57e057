use super::{AuctionType, ConfigurationError};

/// The fixed parameters of a sealed-bid auction.
///
/// Every field has a default, so a configuration may be partially specified
/// when deserialized. Unrecognized fields are rejected rather than ignored.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct AuctionConfig {
    /// The payment rule for the winner
    pub auction_type: AuctionType,

    /// The minimum bid for which the good is allocated at all.
    ///
    /// A highest bid strictly below this value leaves the good unallocated.
    /// Under the second-price rule it is also the floor of the payment.
    pub reserve_price: f64,

    /// An amount added to the second-highest bid under the second-price rule.
    ///
    /// The resulting price is still capped at the winner's own bid.
    pub increment: f64,

    /// How to treat bidder and bid sequences of different lengths
    pub pairing: PairingPolicy,
}

impl Default for AuctionConfig {
    fn default() -> Self {
        Self {
            auction_type: AuctionType::default(),
            reserve_price: 0.0,
            increment: 0.0,
            pairing: PairingPolicy::default(),
        }
    }
}

impl AuctionConfig {
    /// A default configuration with the given payment rule
    pub fn new(auction_type: AuctionType) -> Self {
        Self {
            auction_type,
            ..Default::default()
        }
    }

    /// Replace the reserve price
    pub fn with_reserve_price(self, reserve_price: f64) -> Self {
        Self {
            reserve_price,
            ..self
        }
    }

    /// Replace the second-price increment
    pub fn with_increment(self, increment: f64) -> Self {
        Self { increment, ..self }
    }

    /// Replace the pairing policy
    pub fn with_pairing(self, pairing: PairingPolicy) -> Self {
        Self { pairing, ..self }
    }

    /// Check that the numeric parameters are finite and non-negative
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !is_valid_amount(self.reserve_price) {
            return Err(ConfigurationError::InvalidReservePrice(self.reserve_price));
        }
        if !is_valid_amount(self.increment) {
            return Err(ConfigurationError::InvalidIncrement(self.increment));
        }
        Ok(())
    }
}

/// Prices and bids share the same domain: finite and non-negative.
pub(crate) fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// The policy for pairing bidders with bids supplied as parallel sequences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PairingPolicy {
    /// Sequences of different lengths are a configuration error
    #[default]
    Strict,
    /// Both sequences are cut to the length of the shorter one
    Truncate,
}
