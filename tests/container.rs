//! Card container tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use cardkit::{
    AddError, Capacity, CardComparer, CardContainer, CardLocation, CardValue, ChangeKind, DeckType,
    NoDuplicates, Rank, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::{EnvFilter, fmt};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map_or_else(|_| EnvFilter::new("warn"), EnvFilter::new);

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

const fn card(suit: Suit, rank: Rank) -> CardValue {
    CardValue::new(suit, rank)
}

/// Records every notification as (kind, count after change).
fn record<P: cardkit::AddPolicy>(
    container: &mut CardContainer<P>,
) -> Rc<RefCell<Vec<(ChangeKind, usize)>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    container.subscribe(move |change| sink.borrow_mut().push((change.kind, change.count())));
    log
}

#[test]
fn add_appends_and_notifies_once() {
    init_logging();
    let mut hand = CardContainer::new(CardLocation::Hand);
    let log = record(&mut hand);

    let ace = card(Suit::Spades, Rank::Ace);
    let two = card(Suit::Hearts, Rank::Two);
    hand.add(ace);
    assert_eq!(hand.len(), 1);
    assert_eq!(log.borrow().len(), 1);

    hand.add(two);
    assert_eq!(hand.cards(), [ace, two]);
    assert_eq!(
        *log.borrow(),
        [(ChangeKind::Added(ace), 1), (ChangeKind::Added(two), 2)]
    );
}

#[test]
fn location_is_fixed() {
    let pile = CardContainer::new(CardLocation::Discard);
    assert_eq!(pile.location(), CardLocation::Discard);
    assert!(pile.is_empty());
}

#[test]
fn subscribers_see_location_and_cards() {
    let mut board = CardContainer::new(CardLocation::Board);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    board.subscribe(move |change| {
        sink.borrow_mut()
            .push((change.location, change.cards.to_vec()));
    });

    let king = card(Suit::Clubs, Rank::King);
    board.add(king);
    assert_eq!(*seen.borrow(), [(CardLocation::Board, vec![king])]);
}

#[test]
fn remove_takes_first_equal_card() {
    let mut hand = CardContainer::new(CardLocation::Hand);
    let five = card(Suit::Diamonds, Rank::Five);
    let six = card(Suit::Diamonds, Rank::Six);
    hand.add(five);
    hand.add(six);
    hand.add(five);
    let log = record(&mut hand);

    assert!(hand.remove(&five));
    assert_eq!(hand.cards(), [six, five]);
    assert_eq!(*log.borrow(), [(ChangeKind::Removed(five), 2)]);
}

#[test]
fn remove_missing_card_is_silent() {
    let mut hand = CardContainer::new(CardLocation::Hand);
    hand.add(card(Suit::Hearts, Rank::Two));
    let log = record(&mut hand);

    assert!(!hand.remove(&card(Suit::Spades, Rank::Two)));
    assert!(!hand.remove(&CardValue::joker(true)));
    assert_eq!(hand.len(), 1);
    assert!(log.borrow().is_empty());
}

#[test]
fn remove_all_returns_independent_snapshot() {
    init_logging();
    let mut deck = CardContainer::from_deck(CardLocation::Deck, DeckType::Standard36);
    let before = deck.cards().to_vec();
    let log = record(&mut deck);

    let mut snapshot = deck.remove_all();
    assert_eq!(snapshot, before);
    assert_eq!(deck.len(), 0);
    assert_eq!(*log.borrow(), [(ChangeKind::RemovedAll, 0)]);

    snapshot.clear();
    deck.add(card(Suit::Hearts, Rank::Six));
    assert_eq!(deck.len(), 1);
}

#[test]
fn remove_all_transfers_between_containers() {
    let mut hand = CardContainer::new(CardLocation::Hand);
    let mut discard = CardContainer::new(CardLocation::Discard);
    hand.add(card(Suit::Hearts, Rank::Seven));
    hand.add(card(Suit::Clubs, Rank::Eight));

    for moved in hand.remove_all() {
        discard.add(moved);
    }

    assert!(hand.is_empty());
    assert_eq!(
        discard.cards(),
        [card(Suit::Hearts, Rank::Seven), card(Suit::Clubs, Rank::Eight)]
    );
}

#[test]
fn clear_notifies_once_even_when_empty() {
    let mut pool = CardContainer::new(CardLocation::Pool);
    pool.add(card(Suit::Hearts, Rank::Nine));
    let log = record(&mut pool);

    pool.clear();
    pool.clear();
    assert!(pool.is_empty());
    assert_eq!(
        *log.borrow(),
        [(ChangeKind::Cleared, 0), (ChangeKind::Cleared, 0)]
    );
}

#[test]
fn add_ignores_policy_but_try_add_enforces_it() {
    let mut slot = CardContainer::with_policy(CardLocation::Board, Capacity(1));
    let log = record(&mut slot);
    let queen = card(Suit::Hearts, Rank::Queen);
    let jack = card(Suit::Hearts, Rank::Jack);

    assert!(slot.can_add(&queen));
    assert_eq!(slot.try_add(queen), Ok(()));
    assert!(!slot.can_add(&jack));
    assert_eq!(slot.try_add(jack), Err(AddError::Rejected));
    assert_eq!(slot.len(), 1);
    assert_eq!(log.borrow().len(), 1);

    // The unchecked path still appends past the policy's limit.
    slot.add(jack);
    assert_eq!(slot.len(), 2);
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn no_duplicates_policy() {
    let mut board = CardContainer::with_policy(CardLocation::Board, NoDuplicates);
    let joker = CardValue::joker(false);

    assert_eq!(board.try_add(joker), Ok(()));
    assert_eq!(board.try_add(joker), Err(AddError::Rejected));
    assert_eq!(board.try_add(CardValue::joker(true)), Ok(()));
    assert_eq!(board.len(), 2);
}

#[test]
fn draw_takes_tail_card() {
    let mut deck = CardContainer::from_deck(CardLocation::Deck, DeckType::Standard54);
    let log = record(&mut deck);

    assert_eq!(deck.draw(), Some(CardValue::joker(false)));
    assert_eq!(deck.len(), 53);
    assert_eq!(*log.borrow(), [(ChangeKind::Drawn(CardValue::joker(false)), 53)]);

    let mut empty = CardContainer::new(CardLocation::Deck);
    let empty_log = record(&mut empty);
    assert_eq!(empty.draw(), None);
    assert!(empty_log.borrow().is_empty());
}

#[test]
fn shuffle_keeps_cards_and_is_reproducible() {
    let mut a = CardContainer::from_deck(CardLocation::Deck, DeckType::Standard52);
    let mut b = CardContainer::from_deck(CardLocation::Deck, DeckType::Standard52);
    let log = record(&mut a);

    a.shuffle(&mut ChaCha8Rng::seed_from_u64(11));
    b.shuffle(&mut ChaCha8Rng::seed_from_u64(11));
    assert_eq!(a.cards(), b.cards());
    assert_eq!(*log.borrow(), [(ChangeKind::Shuffled, 52)]);

    let mut sorted = a.cards().to_vec();
    CardComparer::SuitThenRankAscending.sort(&mut sorted);
    assert_eq!(sorted, DeckType::Standard52.cards());
}

#[test]
fn sort_by_arranges_hand() {
    let mut hand = CardContainer::new(CardLocation::Hand);
    hand.add(card(Suit::Spades, Rank::King));
    hand.add(CardValue::joker(true));
    hand.add(card(Suit::Hearts, Rank::Three));
    let log = record(&mut hand);

    hand.sort_by(&CardComparer::RankAscending);
    assert_eq!(
        hand.cards(),
        [
            card(Suit::Hearts, Rank::Three),
            card(Suit::Spades, Rank::King),
            CardValue::joker(true),
        ]
    );
    assert_eq!(*log.borrow(), [(ChangeKind::Sorted, 3)]);
}

#[test]
fn unsubscribe_stops_notifications() {
    let mut hand = CardContainer::new(CardLocation::Hand);
    let first = record(&mut hand);
    let second = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&second);
    let id = hand.subscribe(move |_| *counter.borrow_mut() += 1);
    assert_eq!(hand.subscriber_count(), 2);

    hand.add(card(Suit::Clubs, Rank::Four));
    assert!(hand.unsubscribe(id));
    assert!(!hand.unsubscribe(id));
    hand.add(card(Suit::Clubs, Rank::Five));

    assert_eq!(*second.borrow(), 1);
    assert_eq!(first.borrow().len(), 2);
    assert_eq!(hand.subscriber_count(), 1);
}

#[test]
fn contains_uses_value_equality() {
    let mut hand = CardContainer::new(CardLocation::Hand);
    hand.add(card(Suit::Hearts, Rank::Ace));
    assert!(hand.contains(&card(Suit::Hearts, Rank::Ace)));
    assert!(!hand.contains(&card(Suit::Spades, Rank::Ace)));
}
