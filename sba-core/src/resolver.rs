use crate::{
    first_argmax,
    models::{
        AuctionConfig, AuctionType, Award, ConfigurationError, Map, NoWinner, PairingPolicy,
        ResolveReport, ResolveStatus, Resolution, Snapshot,
    },
    second_largest,
};
use std::{
    hash::Hash,
    sync::{Mutex, MutexGuard, PoisonError},
};
use tracing::{Level, event, span};

/// A sealed-bid auction for a single good.
///
/// The bids are fixed at construction. [`AuctionResolver::resolve`] computes
/// the allocation and payment vectors exactly once; the vectors are all-zero
/// before that and read-only afterwards. The resolver may be shared between
/// threads: a lock guards the outputs, so concurrent callers observe a single
/// resolution.
#[derive(Debug)]
pub struct AuctionResolver<BidderId: Eq + Hash> {
    config: AuctionConfig,
    bidders: Vec<BidderId>,
    bids: Vec<f64>,
    bid_map: Map<BidderId>,
    ledger: Mutex<Ledger<BidderId>>,
}

// The mutable half of the resolver. `resolution` doubles as the resolved flag.
#[derive(Debug)]
struct Ledger<BidderId> {
    allocation: Vec<u8>,
    payment: Vec<f64>,
    resolution: Option<Resolution<BidderId>>,
}

impl<BidderId: Eq + Hash + Clone> AuctionResolver<BidderId> {
    /// Creates an auction from index-aligned bidder and bid sequences.
    ///
    /// Under [`PairingPolicy::Strict`] the sequences must have the same length.
    /// Under [`PairingPolicy::Truncate`] the longer one is cut to the length of
    /// the shorter one, so that every bid keeps a bidder.
    ///
    /// Returns a [`ConfigurationError`] if the configuration is invalid, a bid
    /// is negative or non-finite, the lengths differ under strict pairing, or
    /// a bidder appears twice.
    pub fn new(
        config: AuctionConfig,
        bidders: impl IntoIterator<Item = BidderId>,
        bids: impl IntoIterator<Item = f64>,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;

        let mut bidders: Vec<BidderId> = bidders.into_iter().collect();
        let mut bids: Vec<f64> = bids.into_iter().collect();

        if bidders.len() != bids.len() {
            match config.pairing {
                PairingPolicy::Strict => {
                    return Err(ConfigurationError::LengthMismatch {
                        bidders: bidders.len(),
                        bids: bids.len(),
                    });
                }
                PairingPolicy::Truncate => {
                    let len = bidders.len().min(bids.len());
                    event!(
                        Level::WARN,
                        bidders = bidders.len(),
                        bids = bids.len(),
                        kept = len,
                        "truncating unpaired bidders and bids"
                    );
                    bidders.truncate(len);
                    bids.truncate(len);
                }
            }
        }

        validate_bids(&bids)?;

        let mut bid_map = Map::with_capacity(bids.len());
        for (index, (bidder, bid)) in bidders.iter().zip(&bids).enumerate() {
            if bid_map.insert(bidder.clone(), *bid).is_some() {
                return Err(ConfigurationError::DuplicateBidder(index));
            }
        }

        Ok(Self::assemble(config, bidders, bids, bid_map))
    }

    /// Creates an auction from a pre-built mapping of bidder to bid.
    ///
    /// Bidders take the order of the map, which is its insertion order.
    pub fn from_map(
        config: AuctionConfig,
        bid_map: Map<BidderId>,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;

        let bidders: Vec<BidderId> = bid_map.keys().cloned().collect();
        let bids: Vec<f64> = bid_map.values().copied().collect();
        validate_bids(&bids)?;

        Ok(Self::assemble(config, bidders, bids, bid_map))
    }

    fn assemble(
        config: AuctionConfig,
        bidders: Vec<BidderId>,
        bids: Vec<f64>,
        bid_map: Map<BidderId>,
    ) -> Self {
        let ledger = Ledger {
            allocation: vec![0; bids.len()],
            payment: vec![0.0; bids.len()],
            resolution: None,
        };

        Self {
            config,
            bidders,
            bids,
            bid_map,
            ledger: Mutex::new(ledger),
        }
    }

    /// Resolve the auction, computing the allocation and payment vectors.
    ///
    /// Only the first call does any work. Later calls, including concurrent
    /// ones, leave the vectors untouched and report
    /// [`ResolveStatus::AlreadyResolved`] along with the stored resolution.
    /// An auction without a positive bid, or whose highest bid is below the
    /// reserve price, resolves to [`Resolution::NoWinner`].
    pub fn resolve(&self) -> ResolveReport<BidderId> {
        let mut ledger = self.lock();

        if let Some(resolution) = &ledger.resolution {
            event!(Level::DEBUG, "auction already resolved, skipping");
            return ResolveReport {
                status: ResolveStatus::AlreadyResolved,
                resolution: resolution.clone(),
            };
        }

        let span = span!(
            Level::INFO,
            "resolving auction",
            auction_type = %self.config.auction_type,
            bidders = self.bids.len()
        );
        let _entered = span.enter();

        let resolution = self.compute();
        if let Resolution::Winner(award) = &resolution {
            ledger.allocation[award.index] = 1;
            ledger.payment[award.index] = award.price;
        }
        ledger.resolution = Some(resolution.clone());

        ResolveReport {
            status: ResolveStatus::Computed,
            resolution,
        }
    }

    fn compute(&self) -> Resolution<BidderId> {
        let Some(index) = first_argmax(&self.bids).filter(|&index| self.bids[index] > 0.0) else {
            event!(Level::INFO, "no positive bids, the good is not allocated");
            return Resolution::NoWinner(NoWinner::NoPositiveBids);
        };

        let bid = self.bids[index];
        let reserve_price = self.config.reserve_price;

        if bid < reserve_price {
            event!(
                Level::INFO,
                highest_bid = bid,
                reserve_price,
                "highest bid is below the reserve price, the good is not allocated"
            );
            return Resolution::NoWinner(NoWinner::BelowReserve {
                highest_bid: bid,
                reserve_price,
            });
        }

        let price = match self.config.auction_type {
            AuctionType::FirstPrice => bid,
            // With a single bidder there is no second bid, so the reserve sets the price
            AuctionType::SecondPrice => match second_largest(&self.bids) {
                Some(second) => (second + self.config.increment)
                    .max(reserve_price)
                    .min(bid),
                None => reserve_price,
            },
        };

        event!(Level::INFO, winner = index, bid, price, "awarded the good");

        Resolution::Winner(Award {
            index,
            bidder: self.bidders[index].clone(),
            bid,
            price,
        })
    }
}

impl<BidderId: Eq + Hash> AuctionResolver<BidderId> {
    /// The configuration the auction was built with
    pub fn config(&self) -> &AuctionConfig {
        &self.config
    }

    /// The payment rule
    pub fn auction_type(&self) -> AuctionType {
        self.config.auction_type
    }

    /// The reserve price
    pub fn reserve_price(&self) -> f64 {
        self.config.reserve_price
    }

    /// The bidders, index-aligned with [`AuctionResolver::bids`]
    pub fn bidders(&self) -> &[BidderId] {
        &self.bidders
    }

    /// The bids, index-aligned with [`AuctionResolver::bidders`]
    pub fn bids(&self) -> &[f64] {
        &self.bids
    }

    /// The mapping of bidder to bid
    pub fn bid_map(&self) -> &Map<BidderId> {
        &self.bid_map
    }

    /// The number of bidders
    pub fn len(&self) -> usize {
        self.bids.len()
    }

    /// Whether the auction has no bidders at all
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty()
    }

    /// Whether [`AuctionResolver::resolve`] has run
    pub fn is_resolved(&self) -> bool {
        self.lock().resolution.is_some()
    }

    /// A snapshot of the allocation vector: `1` at the winner, `0` elsewhere
    pub fn allocation(&self) -> Vec<u8> {
        self.lock().allocation.clone()
    }

    /// A snapshot of the payment vector: the price at the winner, `0` elsewhere
    pub fn payment(&self) -> Vec<f64> {
        self.lock().payment.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Ledger<BidderId>> {
        // The ledger is only written after the resolution is fully computed,
        // so a poisoned lock still guards consistent data.
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<BidderId: Eq + Hash + Clone> AuctionResolver<BidderId> {
    /// The allocation, payment and resolution, read together.
    ///
    /// Prefer this over the individual accessors when the resolver is shared
    /// between threads: each accessor takes the lock on its own, so a
    /// concurrent `resolve` may land between two of them.
    pub fn snapshot(&self) -> Snapshot<BidderId> {
        let ledger = self.lock();
        Snapshot {
            allocation: ledger.allocation.clone(),
            payment: ledger.payment.clone(),
            resolution: ledger.resolution.clone(),
        }
    }

    /// The resolution, if the auction has been resolved
    pub fn resolution(&self) -> Option<Resolution<BidderId>> {
        self.lock().resolution.clone()
    }

    /// The winning bidder, or `None` if unresolved or nobody won
    pub fn winner(&self) -> Option<BidderId> {
        self.lock()
            .resolution
            .as_ref()
            .and_then(Resolution::award)
            .map(|award| award.bidder.clone())
    }

    /// The price paid by the winner, or `None` if unresolved or nobody won
    pub fn winning_payment(&self) -> Option<f64> {
        self.lock()
            .resolution
            .as_ref()
            .and_then(Resolution::award)
            .map(|award| award.price)
    }
}

fn validate_bids(bids: &[f64]) -> Result<(), ConfigurationError> {
    match bids
        .iter()
        .position(|&bid| !crate::models::is_valid_amount(bid))
    {
        Some(index) => Err(ConfigurationError::InvalidBid {
            index,
            value: bids[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auction(auction_type: AuctionType, bids: &[f64]) -> AuctionResolver<usize> {
        AuctionResolver::new(
            AuctionConfig::new(auction_type),
            0..bids.len(),
            bids.iter().copied(),
        )
        .unwrap()
    }

    #[test]
    fn test_vectors_start_at_zero() {
        let resolver = auction(AuctionType::SecondPrice, &[10.0, 8.0, 3.0]);
        assert!(!resolver.is_resolved());
        assert_eq!(resolver.allocation(), vec![0, 0, 0]);
        assert_eq!(resolver.payment(), vec![0.0, 0.0, 0.0]);
        assert_eq!(resolver.winner(), None);
        assert_eq!(resolver.resolution(), None);
    }

    #[test]
    fn test_second_price_scenario() {
        let resolver = AuctionResolver::new(
            AuctionConfig::new(AuctionType::SecondPrice),
            ["A", "B", "C"],
            [10.0, 8.0, 3.0],
        )
        .unwrap();
        let report = resolver.resolve();

        assert_eq!(report.status, ResolveStatus::Computed);
        assert_eq!(resolver.allocation(), vec![1, 0, 0]);
        assert_eq!(resolver.payment(), vec![8.0, 0.0, 0.0]);
        assert_eq!(resolver.winner(), Some("A"));
        assert_eq!(resolver.winning_payment(), Some(8.0));
        assert!(resolver.is_resolved());
    }

    #[test]
    fn test_first_price_scenario() {
        let resolver = auction(AuctionType::FirstPrice, &[10.0, 8.0, 3.0]);
        resolver.resolve();
        assert_eq!(resolver.allocation(), vec![1, 0, 0]);
        assert_eq!(resolver.payment(), vec![10.0, 0.0, 0.0]);
    }

    #[test]
    fn test_second_resolve_is_a_noop() {
        let resolver = auction(AuctionType::SecondPrice, &[2.0, 6.0]);
        let first = resolver.resolve();
        let second = resolver.resolve();

        assert_eq!(second.status, ResolveStatus::AlreadyResolved);
        assert_eq!(first.resolution, second.resolution);
        assert_eq!(resolver.allocation(), vec![0, 1]);
        assert_eq!(resolver.payment(), vec![0.0, 2.0]);
    }

    #[test]
    fn test_all_zero_bids() {
        let resolver = auction(AuctionType::FirstPrice, &[0.0, 0.0, 0.0]);
        let report = resolver.resolve();

        assert_eq!(
            report.resolution,
            Resolution::NoWinner(NoWinner::NoPositiveBids)
        );
        assert!(resolver.is_resolved());
        assert_eq!(resolver.allocation(), vec![0, 0, 0]);
        assert_eq!(resolver.payment(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_no_bidders() {
        let resolver = auction(AuctionType::SecondPrice, &[]);
        let report = resolver.resolve();
        assert_eq!(
            report.resolution,
            Resolution::NoWinner(NoWinner::NoPositiveBids)
        );
        assert!(resolver.allocation().is_empty());
    }

    #[test]
    fn test_single_bidder_pays_reserve() {
        let resolver = AuctionResolver::new(
            AuctionConfig::new(AuctionType::SecondPrice).with_reserve_price(2.0),
            ["solo"],
            [7.0],
        )
        .unwrap();
        resolver.resolve();
        assert_eq!(resolver.payment(), vec![2.0]);
    }

    #[test]
    fn test_negative_bid_rejected() {
        let result = AuctionResolver::new(AuctionConfig::default(), [0, 1], [4.0, -0.5]);
        assert_eq!(
            result.err(),
            Some(ConfigurationError::InvalidBid {
                index: 1,
                value: -0.5
            })
        );
    }

    #[test]
    fn test_nan_bid_rejected() {
        let result = AuctionResolver::new(AuctionConfig::default(), [0], [f64::NAN]);
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidBid { index: 0, .. })
        ));
    }

    #[test]
    fn test_duplicate_bidder_rejected() {
        let result = AuctionResolver::new(AuctionConfig::default(), ["a", "b", "a"], [1.0, 2.0, 3.0]);
        assert_eq!(result.err(), Some(ConfigurationError::DuplicateBidder(2)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AuctionConfig::default().with_increment(-0.01);
        let result = AuctionResolver::new(config, [0], [1.0]);
        assert_eq!(result.err(), Some(ConfigurationError::InvalidIncrement(-0.01)));
    }
}
