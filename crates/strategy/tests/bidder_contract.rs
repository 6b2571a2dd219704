//! Head-to-head checks of the bidders outside the engine

use auction_core::{AuctionConfig, Bidder, BidderLedger, Cash};
use auction_strategy::{AdaptiveBidder, AdaptiveBidderConfig, BidderKind};

/// Never bids
struct Silent;

impl Bidder for Silent {
    fn name(&self) -> &str {
        "silent"
    }

    fn init(&mut self, _config: &AuctionConfig) {}

    fn place_bid(&mut self) -> Cash {
        0
    }

    fn notify(&mut self, _own_bid: Cash, _opponent_bid: Cash) {}
}

fn init_logger() {
    let _ = env_logger::try_init();
}

/// Play a full auction, checking every bid against the bidder's ledger.
/// Returns each bidder's bids alongside the ledger it bid from.
fn play(
    a: &mut dyn Bidder,
    b: &mut dyn Bidder,
    config: &AuctionConfig,
) -> Vec<((Cash, BidderLedger), (Cash, BidderLedger))> {
    a.init(config);
    b.init(config);

    let mut ledger_a = BidderLedger::new(config.initial_cash());
    let mut ledger_b = BidderLedger::new(config.initial_cash());
    let mut rounds = Vec::new();

    for round in 0..config.rounds() {
        let bid_a = a.place_bid();
        let bid_b = b.place_bid();
        assert!(
            ledger_a.can_afford(bid_a),
            "{} bid {} with {} in round {}",
            a.name(),
            bid_a,
            ledger_a.cash_remaining,
            round
        );
        assert!(
            ledger_b.can_afford(bid_b),
            "{} bid {} with {} in round {}",
            b.name(),
            bid_b,
            ledger_b.cash_remaining,
            round
        );

        rounds.push(((bid_a, ledger_a), (bid_b, ledger_b)));
        ledger_a.apply_round(bid_a, bid_b);
        ledger_b.apply_round(bid_b, bid_a);
        a.notify(bid_a, bid_b);
        b.notify(bid_b, bid_a);
    }

    rounds
}

#[test]
fn test_every_bidder_stays_within_cash() {
    let configs = [
        AuctionConfig::new(2, 1).unwrap(),
        AuctionConfig::new(6, 5).unwrap(),
        AuctionConfig::default(),
        AuctionConfig::new(40, 1000).unwrap(),
    ];

    for config in &configs {
        for first in BidderKind::lineup() {
            for second in BidderKind::lineup() {
                for seed in 0..4 {
                    let mut a = first.build(first.label(), Some(seed));
                    let mut b = second.build(second.label(), Some(seed + 50));
                    play(a.as_mut(), b.as_mut(), config);
                }
            }
        }
    }
}

#[test]
fn test_adaptive_stops_bidding_once_win_is_secured() {
    init_logger();

    let config = AuctionConfig::default();
    let half = config.half_quantity();

    for kind in BidderKind::lineup() {
        for seed in 0..10 {
            let mut adaptive =
                AdaptiveBidder::new("adaptive", AdaptiveBidderConfig::default().with_seed(seed));
            let mut opponent = kind.build(kind.label(), Some(seed + 1));

            for ((bid, own), (_, theirs)) in play(&mut adaptive, opponent.as_mut(), &config) {
                let secured = own.quantity_won > half
                    || (own.quantity_won == half && own.cash_remaining > theirs.cash_remaining);
                if secured {
                    assert_eq!(bid, 0, "{} seed {}", kind.label(), seed);
                }
            }
        }
    }

    // Against a silent opponent the adaptive bidder never pays for a round it
    // cannot lose
    let mut adaptive = AdaptiveBidder::new("adaptive", AdaptiveBidderConfig::default().with_seed(1));
    for ((bid, own), _) in play(&mut adaptive, &mut Silent, &config) {
        if own.quantity_won > half {
            assert_eq!(bid, 0);
        }
    }
}

#[test]
fn test_seeded_adaptive_is_reproducible() {
    let config = AuctionConfig::default();
    let run = || {
        let mut adaptive = AdaptiveBidder::new("adaptive", AdaptiveBidderConfig::default().with_seed(3));
        let mut opponent = BidderKind::Random.build("random", Some(4));
        play(&mut adaptive, opponent.as_mut(), &config)
            .into_iter()
            .map(|((own, _), (opp, _))| (own, opp))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_adaptive_history_tracks_notifications() {
    init_logger();

    let config = AuctionConfig::new(10, 100).unwrap();
    let mut adaptive = AdaptiveBidder::new("adaptive", AdaptiveBidderConfig::default().with_seed(8));
    let mut reactive = BidderKind::Reactive.build("reactive", None);

    let rounds = play(&mut adaptive, reactive.as_mut(), &config);

    assert_eq!(adaptive.history().len(), 5);
    let own: Vec<Cash> = adaptive.history().own_bids().collect();
    let expected: Vec<Cash> = rounds.iter().map(|((bid, _), _)| *bid).collect();
    assert_eq!(own, expected);
    assert_eq!(adaptive.standing().rounds_played(), 5);
}
