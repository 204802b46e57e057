/// The ways in which the inputs to an auction can be malformed.
///
/// All of these are detected while the auction is being constructed, so a
/// successfully built resolver never fails to resolve.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// The auction type is not one of the supported payment rules
    #[error("unknown auction type: {0}")]
    UnknownAuctionType(String),
    /// The reserve price is negative, NaN or infinite
    #[error("reserve price must be finite and non-negative, got {0}")]
    InvalidReservePrice(f64),
    /// The second-price increment is negative, NaN or infinite
    #[error("price increment must be finite and non-negative, got {0}")]
    InvalidIncrement(f64),
    /// A bid is negative, NaN or infinite
    #[error("bid at position {index} must be finite and non-negative, got {value}")]
    InvalidBid {
        /// Position of the offending bid
        index: usize,
        /// The rejected value
        value: f64,
    },
    /// The bidder and bid sequences differ in length under strict pairing
    #[error("{bidders} bidders were provided for {bids} bids")]
    LengthMismatch {
        /// Number of bidders supplied
        bidders: usize,
        /// Number of bids supplied
        bids: usize,
    },
    /// The same bidder appears twice in the bidder sequence
    #[error("bidder at position {0} appears more than once")]
    DuplicateBidder(usize),
    /// A bid map was supplied alongside bidder or bid sequences
    #[error("a bid map cannot be combined with bidder and bid sequences")]
    AmbiguousBids,
}
