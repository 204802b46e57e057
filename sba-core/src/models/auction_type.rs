use super::ConfigurationError;
use std::{fmt, str::FromStr};

/// The payment rule applied to the winner of the auction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
// Parsing goes through `FromStr`, so serde and schemars name the variants separately.
#[cfg_attr(
    feature = "schemars",
    derive(schemars::JsonSchema),
    schemars(rename_all = "snake_case")
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum AuctionType {
    /// The winner pays their own bid
    FirstPrice,
    /// The winner pays the next-highest bid (Vickrey)
    #[default]
    SecondPrice,
}

impl AuctionType {
    /// The canonical name of the payment rule
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstPrice => "first_price",
            Self::SecondPrice => "second_price",
        }
    }
}

impl fmt::Display for AuctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuctionType {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_price" | "first-price" => Ok(Self::FirstPrice),
            "second_price" | "second-price" => Ok(Self::SecondPrice),
            other => Err(ConfigurationError::UnknownAuctionType(other.to_owned())),
        }
    }
}

impl TryFrom<String> for AuctionType {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AuctionType> for String {
    fn from(value: AuctionType) -> Self {
        value.as_str().to_owned()
    }
}
