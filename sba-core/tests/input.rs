use rstest::*;
use sba_core::models::{
    AuctionConfig, AuctionInput, AuctionType, Award, ConfigurationError, NoWinner, PairingPolicy,
    Resolution,
};
use serde_json::json;

fn parse(value: serde_json::Value) -> AuctionInput<String> {
    serde_json::from_value(value).unwrap()
}

#[rstest]
fn parallel_sequences() {
    let input = parse(json!({
        "auction_type": "second_price",
        "bidders": ["A", "B", "C"],
        "bids": [10.0, 8.0, 3.0]
    }));
    let resolver = input.into_resolver(AuctionConfig::default()).unwrap();
    let report = resolver.resolve();

    assert_eq!(
        report.resolution,
        Resolution::Winner(Award {
            index: 0,
            bidder: "A".to_owned(),
            bid: 10.0,
            price: 8.0,
        })
    );
}

#[rstest]
fn bid_map_input() {
    let input = parse(json!({
        "auction_type": "first_price",
        "bid_map": { "x": 1.5, "y": 4.0, "z": 4.0 }
    }));
    let resolver = input.into_resolver(AuctionConfig::default()).unwrap();
    resolver.resolve();

    assert_eq!(resolver.allocation(), vec![0, 1, 0]);
    assert_eq!(resolver.payment(), vec![0.0, 4.0, 0.0]);
    assert_eq!(resolver.winner().as_deref(), Some("y"));
}

#[rstest]
fn input_overrides_base_config() {
    let input = parse(json!({
        "reserve_price": 20.0,
        "bidders": ["A", "B"],
        "bids": [10.0, 8.0]
    }));
    let base = AuctionConfig::new(AuctionType::FirstPrice).with_reserve_price(1.0);
    let resolver = input.into_resolver(base).unwrap();

    assert_eq!(resolver.auction_type(), AuctionType::FirstPrice);
    assert_eq!(resolver.reserve_price(), 20.0);
    assert_eq!(
        resolver.resolve().resolution,
        Resolution::NoWinner(NoWinner::BelowReserve {
            highest_bid: 10.0,
            reserve_price: 20.0
        })
    );
}

#[rstest]
fn truncate_pairing_from_input() {
    let input = parse(json!({
        "pairing": "truncate",
        "bidders": ["A", "B", "C"],
        "bids": [1.0, 2.0]
    }));
    let resolver = input.into_resolver(AuctionConfig::default()).unwrap();
    assert_eq!(resolver.config().pairing, PairingPolicy::Truncate);
    assert_eq!(resolver.len(), 2);
}

#[rstest]
#[case::unknown_field(json!({ "bids": [1.0], "bidders": ["A"], "colour": "red" }))]
#[case::unknown_type(json!({ "auction_type": "dutch" }))]
#[case::unknown_pairing(json!({ "pairing": "zip" }))]
fn rejected_at_parse(#[case] value: serde_json::Value) {
    assert!(serde_json::from_value::<AuctionInput<String>>(value).is_err());
}

#[rstest]
fn unknown_type_reports_name() {
    let err = serde_json::from_value::<AuctionInput<String>>(json!({ "auction_type": "dutch" }))
        .unwrap_err();
    assert!(err.to_string().contains("unknown auction type: dutch"));
}

#[rstest]
fn map_and_sequences_conflict() {
    let input = parse(json!({
        "bids": [1.0],
        "bid_map": { "A": 1.0 }
    }));
    assert_eq!(
        input.into_resolver(AuctionConfig::default()).err(),
        Some(ConfigurationError::AmbiguousBids)
    );
}

#[rstest]
fn config_parses_partially() {
    let config: AuctionConfig = serde_json::from_value(json!({ "increment": 0.01 })).unwrap();
    assert_eq!(config, AuctionConfig::default().with_increment(0.01));
}

#[rstest]
fn no_winner_serializes_with_reason() {
    let value = serde_json::to_value(NoWinner::BelowReserve {
        highest_bid: 2.0,
        reserve_price: 3.0,
    })
    .unwrap();
    assert_eq!(
        value,
        json!({ "reason": "below_reserve", "highest_bid": 2.0, "reserve_price": 3.0 })
    );
    assert_eq!(
        serde_json::to_value(NoWinner::NoPositiveBids).unwrap(),
        json!({ "reason": "no_positive_bids" })
    );
}
