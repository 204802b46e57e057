/// The result of resolving an auction: either an award or no winner.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution<BidderId> {
    /// The good was allocated
    Winner(Award<BidderId>),
    /// The good was not allocated
    NoWinner(NoWinner),
}

impl<BidderId> Resolution<BidderId> {
    /// The award, if the good was allocated
    pub fn award(&self) -> Option<&Award<BidderId>> {
        match self {
            Self::Winner(award) => Some(award),
            Self::NoWinner(_) => None,
        }
    }

    /// Whether the good was allocated
    pub fn has_winner(&self) -> bool {
        matches!(self, Self::Winner(_))
    }
}

/// The allocation of the good to a single bidder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Award<BidderId> {
    /// Position of the winner in the bidder sequence
    pub index: usize,
    /// The winning bidder
    pub bidder: BidderId,
    /// The winner's own bid
    pub bid: f64,
    /// The amount the winner pays
    pub price: f64,
}

/// Why an auction ended without allocating the good.
///
/// Neither case is an error: both are legitimate outcomes of a well-formed
/// auction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "reason", rename_all = "snake_case")
)]
pub enum NoWinner {
    /// There were no bidders, or every bid was zero
    NoPositiveBids,
    /// The highest bid did not reach the reserve price
    BelowReserve {
        /// The highest bid received
        highest_bid: f64,
        /// The configured reserve price
        reserve_price: f64,
    },
}

/// Whether a call to resolve performed the computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveStatus {
    /// This call computed the allocation and payment
    Computed,
    /// An earlier call already resolved the auction; nothing changed
    AlreadyResolved,
}

/// What a call to resolve reports back to its caller.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolveReport<BidderId> {
    /// Whether this call did the work
    pub status: ResolveStatus,
    /// The (final) resolution of the auction
    pub resolution: Resolution<BidderId>,
}

/// A consistent view of an auction's outputs, read under a single lock.
///
/// Either the auction is unresolved (`resolution` is `None`, both vectors
/// all-zero) or it is resolved and the vectors match the resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<BidderId> {
    /// `1` at the winner, `0` elsewhere
    pub allocation: Vec<u8>,
    /// The winner's price at the winner, `0` elsewhere
    pub payment: Vec<f64>,
    /// The resolution, if the auction has been resolved
    pub resolution: Option<Resolution<BidderId>>,
}

impl<BidderId> Snapshot<BidderId> {
    /// Whether the auction had been resolved when the snapshot was taken
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }
}
