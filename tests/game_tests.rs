//! Game state machine integration tests.
//!
//! Most tests deal from a fixed deck so the table layout is known:
//!
//! - positions 0, 1, 2 hold `0000`, `0001`, `0002`, the only match
//! - positions 3..12 hold cards whose codes are all 0 or 1; no three of
//!   those ever match
//! - the next cards in the deck are also 0/1 cards, so a replaced match
//!   leaves a table with no match on it

use std::time::Duration;

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use set_engine::cards::{Card, Deck, DECK_SIZE};
use set_engine::core::{GameConfig, ManualClock};
use set_engine::game::{GameBuilder, GameState};
use set_engine::rules::MatchOutcome;
use set_engine::zones::{Evaluation, Zone};

fn card(codes: [u8; 4]) -> Card {
    Card::from_codes(codes)
}

/// The 16 cards with every code in {0, 1}, in canonical order.
fn binary_cards() -> Vec<Card> {
    Card::all()
        .filter(|c| c.codes().iter().all(|&v| v < 2))
        .collect()
}

/// Opening table with exactly one match, at positions 0, 1, 2.
fn one_match_table() -> Vec<Card> {
    let mut table = vec![card([0, 0, 0, 0]), card([0, 0, 0, 1]), card([0, 0, 0, 2])];
    table.extend_from_slice(&binary_cards()[2..11]);
    table
}

/// Full 81-card deck starting with `one_match_table`, then the remaining
/// 0/1 cards, then everything else.
fn fixture_deck() -> Vec<Card> {
    let mut deck = one_match_table();
    for c in binary_cards().into_iter().chain(Card::all()) {
        if !deck.contains(&c) {
            deck.push(c);
        }
    }
    deck
}

fn game_with(deck: Vec<Card>, config: GameConfig) -> (GameState, ManualClock) {
    let clock = ManualClock::new();
    let state = GameBuilder::new()
        .config(config)
        .seed(42)
        .clock(clock.clone())
        .deck(Deck::from_cards(deck))
        .build();
    (state, clock)
}

fn fixture_game() -> (GameState, ManualClock) {
    game_with(fixture_deck(), GameConfig::default())
}

fn select_all(state: &mut GameState, indices: &[usize]) {
    for &i in indices {
        state.select_card(i);
    }
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_new_game_initial_state() {
    let state = GameState::new();

    assert_eq!(state.visible_cards().len(), 12);
    assert_eq!(state.score(), 0);
    assert!(state.removed_cards().is_empty());
    assert!(state.selected_cards().is_empty());
    assert_eq!(state.deck_len(), DECK_SIZE - 12);
}

#[test]
fn test_fixture_layout() {
    let (state, _) = fixture_game();

    assert_eq!(state.hints(), vec![[0, 1, 2]]);
    assert_eq!(state.deck_len(), DECK_SIZE - 12);
}

#[test]
fn test_custom_initial_visible() {
    let (state, _) = game_with(fixture_deck(), GameConfig::new().with_initial_visible(15));

    assert_eq!(state.visible_cards().len(), 15);
    assert_eq!(state.deck_len(), DECK_SIZE - 15);
}

#[test]
fn test_new_game_resets_everything() {
    let (mut state, clock) = fixture_game();
    clock.advance(Duration::from_secs(1));
    select_all(&mut state, &[0, 1, 2, 3]);
    state.deal_three_more();
    assert!(state.score() > 0);

    state.new_game();

    assert_eq!(state.visible_cards().len(), 12);
    assert_eq!(state.score(), 0);
    assert_eq!(state.deal_requests(), 0);
    assert!(state.removed_cards().is_empty());
    assert!(state.selected_cards().is_empty());
    assert_eq!(*state.pending(), Evaluation::Idle);
    assert_eq!(state.deck_len(), DECK_SIZE - 12);
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn test_select_and_deselect() {
    let (mut state, _) = fixture_game();
    let before = state.snapshot();

    state.select_card(3);
    assert_eq!(state.selected_cards(), &[state.visible_cards()[3]]);

    state.select_card(3);
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_out_of_range_ignored() {
    let (mut state, _) = fixture_game();
    state.select_card(3);
    let before = state.snapshot();

    state.select_card(12);
    state.select_card(100);

    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_third_selection_evaluates_immediately() {
    let (mut state, _) = fixture_game();
    let triple = [
        state.visible_cards()[0],
        state.visible_cards()[1],
        state.visible_cards()[2],
    ];

    select_all(&mut state, &[0, 1]);
    assert_eq!(state.selected_cards().len(), 2);
    assert_eq!(*state.pending(), Evaluation::Idle);

    state.select_card(2);

    assert!(state.selected_cards().is_empty());
    assert_eq!(
        *state.pending(),
        Evaluation::Evaluated {
            outcome: MatchOutcome::Match,
            cards: triple,
        }
    );
    // Still on the table until the next selection
    assert_eq!(state.visible_cards().len(), 12);
    assert_eq!(state.zone_of(&triple[0]), Some(Zone::PendingMatch));
}

#[test]
fn test_pending_cards_not_selectable() {
    let (mut state, _) = fixture_game();
    select_all(&mut state, &[3, 4, 5]);
    let before = state.snapshot();

    state.select_card(4);

    assert_eq!(state.snapshot(), before);
}

// =============================================================================
// Match Resolution
// =============================================================================

#[test]
fn test_match_replaced_at_capacity() {
    let (mut state, clock) = fixture_game();
    let matched: Vec<Card> = state.visible_cards().iter().take(3).copied().collect();
    let clicked = state.visible_cards()[5];

    clock.advance(Duration::from_secs(3));
    select_all(&mut state, &[0, 1, 2]);
    assert_eq!(state.score(), 5);

    state.select_card(5);

    assert_eq!(state.visible_cards().len(), 12);
    let replacements: Vec<Card> = state.visible_cards().iter().take(3).copied().collect();
    assert_eq!(
        replacements,
        vec![card([1, 0, 1, 1]), card([1, 1, 0, 0]), card([1, 1, 0, 1])]
    );
    assert_eq!(state.removed_cards().iter().copied().collect::<Vec<_>>(), matched);
    assert_eq!(state.selected_cards(), &[clicked]);
    assert_eq!(*state.pending(), Evaluation::Idle);
    assert_eq!(state.deck_len(), DECK_SIZE - 15);
    assert_eq!(state.score(), 5);
}

#[test]
fn test_slow_match_scores_less() {
    let (mut state, clock) = fixture_game();

    clock.advance(Duration::from_secs(8));
    select_all(&mut state, &[0, 1, 2]);

    assert_eq!(state.score(), 3);
}

#[test]
fn test_match_removed_above_capacity() {
    let (mut state, _) = fixture_game();
    assert!(state.deal_three_more());
    assert_eq!(state.visible_cards().len(), 15);
    let clicked = state.visible_cards()[3];

    select_all(&mut state, &[0, 1, 2]);
    state.select_card(3);

    assert_eq!(state.visible_cards().len(), 12);
    assert_eq!(state.removed_cards().len(), 3);
    assert_eq!(state.visible_cards()[0], clicked);
    assert_eq!(state.selected_cards(), &[clicked]);
}

#[test]
fn test_match_removed_when_deck_exhausted() {
    let (mut state, _) = game_with(one_match_table(), GameConfig::default());
    assert_eq!(state.deck_len(), 0);

    select_all(&mut state, &[0, 1, 2, 3]);

    assert_eq!(state.visible_cards().len(), 9);
    assert_eq!(state.removed_cards().len(), 3);
    assert!(state.is_over());
}

#[test]
fn test_match_removed_when_deck_short() {
    let deck: Vec<Card> = fixture_deck().into_iter().take(14).collect();
    let (mut state, _) = game_with(deck, GameConfig::default());

    select_all(&mut state, &[0, 1, 2, 3]);

    assert_eq!(state.visible_cards().len(), 9);
    assert_eq!(state.deck_len(), 2);
}

#[test]
fn test_mismatch_stays_on_table() {
    let config = GameConfig::new().with_match_bonus(20, 20);
    let (mut state, clock) = game_with(fixture_deck(), config);
    select_all(&mut state, &[0, 1, 2]);
    state.select_card(3);
    let before: Vec<Card> = state.visible_cards().iter().copied().collect();

    clock.advance(Duration::from_secs(2));
    select_all(&mut state, &[4, 5]);
    assert_eq!(state.pending().outcome(), Some(MatchOutcome::Mismatch));
    assert_eq!(state.score(), 15);

    state.select_card(6);

    let after: Vec<Card> = state.visible_cards().iter().copied().collect();
    assert_eq!(after, before);
    assert_eq!(state.removed_cards().len(), 3);
    assert_eq!(*state.pending(), Evaluation::Idle);
    assert_eq!(state.selected_cards(), &[state.visible_cards()[6]]);
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_mismatch_clamps_at_zero() {
    let (mut state, _) = fixture_game();

    select_all(&mut state, &[3, 4, 5]);

    assert_eq!(state.pending().outcome(), Some(MatchOutcome::Mismatch));
    assert_eq!(state.score(), 0);
}

#[test]
fn test_mismatch_penalty_scales_with_deal_requests() {
    let config = GameConfig::new().with_match_bonus(20, 20);
    let (mut state, clock) = game_with(fixture_deck(), config);

    state.deal_three_more();
    assert_eq!(state.deal_requests(), 1);

    select_all(&mut state, &[0, 1, 2]);
    assert_eq!(state.score(), 20);

    // Resolution removes the match and shifts 0010 to position 0
    state.select_card(3);
    clock.advance(Duration::from_secs(20));
    select_all(&mut state, &[1, 2]);

    assert_eq!(state.pending().outcome(), Some(MatchOutcome::Mismatch));
    assert_eq!(state.score(), 14);
}

#[test]
fn test_slow_mismatch_flat_penalty() {
    let config = GameConfig::new().with_match_bonus(20, 20);
    let (mut state, clock) = game_with(fixture_deck(), config);
    state.deal_three_more();
    state.deal_three_more();
    select_all(&mut state, &[0, 1, 2]);
    state.select_card(3);

    clock.advance(Duration::from_secs(21));
    select_all(&mut state, &[1, 2]);

    assert_eq!(state.score(), 12);
}

// =============================================================================
// Dealing
// =============================================================================

#[test]
fn test_deal_with_two_cards_left_is_noop() {
    let deck: Vec<Card> = fixture_deck().into_iter().take(14).collect();
    let (mut state, _) = game_with(deck, GameConfig::default());
    let visible = state.visible_cards().clone();

    assert!(!state.deal_three_more());

    assert_eq!(*state.visible_cards(), visible);
    assert_eq!(state.deck_len(), 2);
    // Still counted: a match was showing
    assert_eq!(state.deal_requests(), 1);
}

#[test]
fn test_deal_without_match_not_counted() {
    let mut deck = binary_cards();
    deck.extend(Card::all().filter(|c| !c.codes().iter().all(|&v| v < 2)));
    let (mut state, _) = game_with(deck, GameConfig::default());
    assert!(!state.is_match_available());

    assert!(state.deal_three_more());

    assert_eq!(state.visible_cards().len(), 15);
    assert_eq!(state.deal_requests(), 0);
}

#[test]
fn test_deal_has_no_cap() {
    let (mut state, _) = fixture_game();

    for _ in 0..3 {
        assert!(state.deal_three_more());
    }

    assert_eq!(state.visible_cards().len(), 21);
    assert_eq!(state.deal_requests(), 3);
}

// =============================================================================
// Hints
// =============================================================================

#[test]
fn test_hint_finds_match() {
    let (state, _) = fixture_game();

    assert_eq!(state.request_hint(), Some([0, 1, 2]));
    assert!(state.is_match_available());
}

#[test]
fn test_hint_excludes_confirmed_match() {
    let (mut state, _) = fixture_game();

    select_all(&mut state, &[0, 1, 2]);

    assert_eq!(state.request_hint(), None);
    assert!(state.hints().is_empty());
    // The raw availability check still sees the pending triple
    assert!(state.is_match_available());
}

#[test]
fn test_hint_kept_after_mismatch() {
    let (mut state, _) = fixture_game();

    select_all(&mut state, &[3, 4, 5]);

    assert_eq!(state.request_hint(), Some([0, 1, 2]));
}

#[test]
fn test_hint_is_read_only() {
    let (mut state, _) = fixture_game();
    state.select_card(7);
    let before = state.snapshot();

    let _ = state.request_hint();
    let _ = state.hints();

    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_no_hint_after_replacement() {
    let (mut state, _) = fixture_game();

    select_all(&mut state, &[0, 1, 2, 3]);

    assert_eq!(state.request_hint(), None);
    assert!(!state.is_match_available());
    assert!(!state.is_over());
}

// =============================================================================
// Shuffle
// =============================================================================

#[test]
fn test_shuffle_keeps_pending_triple() {
    let (mut state, _) = fixture_game();
    select_all(&mut state, &[0, 1, 2]);
    let matched = state.pending_cards().to_vec();

    state.shuffle_visible();
    let index = state
        .visible_cards()
        .iter()
        .position(|c| !matched.contains(c))
        .unwrap();
    state.select_card(index);

    let mut removed: Vec<Card> = state.removed_cards().iter().copied().collect();
    let mut expected = matched.clone();
    removed.sort();
    expected.sort();
    assert_eq!(state.visible_cards().len(), 12);
    assert_eq!(removed, expected);
    for c in &matched {
        assert!(!state.visible_cards().contains(c));
    }
}

#[test]
fn test_snapshot_matches_projections() {
    let (mut state, _) = fixture_game();
    select_all(&mut state, &[3, 4]);

    let snap = state.snapshot();

    assert_eq!(snap.visible, *state.visible_cards());
    assert_eq!(snap.selected, state.selected_cards());
    assert_eq!(snap.selected_positions(), vec![3, 4]);
    assert_eq!(snap.score, state.score());
    assert_eq!(snap.deck_remaining, state.deck_len());
}

// =============================================================================
// Invariants Under Random Play
// =============================================================================

#[derive(Clone, Debug)]
enum Op {
    Select(usize),
    Deal,
    Hint,
    Shuffle,
    Wait(u64),
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0usize..22).prop_map(Op::Select),
        1 => Just(Op::Deal),
        1 => Just(Op::Hint),
        1 => Just(Op::Shuffle),
        1 => (0u64..30).prop_map(Op::Wait),
    ]
}

fn check_invariants(state: &GameState) -> Result<(), TestCaseError> {
    let visible: FxHashSet<Card> = state.visible_cards().iter().copied().collect();
    let removed: FxHashSet<Card> = state.removed_cards().iter().copied().collect();

    prop_assert_eq!(visible.len(), state.visible_cards().len());
    prop_assert_eq!(removed.len(), state.removed_cards().len());
    prop_assert!(visible.is_disjoint(&removed));
    prop_assert_eq!(visible.len() + removed.len() + state.deck_len(), DECK_SIZE);

    prop_assert!(state.selected_cards().len() < 3);
    for c in state.selected_cards() {
        prop_assert!(visible.contains(c));
        prop_assert!(!state.pending_cards().contains(c));
    }
    for c in state.pending_cards() {
        prop_assert!(visible.contains(c));
        prop_assert!(!removed.contains(c));
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_zones_stay_consistent(seed in any::<u64>(), ops in prop::collection::vec(any_op(), 1..120)) {
        let clock = ManualClock::new();
        let mut state = GameBuilder::new().seed(seed).clock(clock.clone()).build();

        for op in ops {
            let before = state.score();
            match op {
                Op::Select(i) => state.select_card(i),
                Op::Deal => {
                    state.deal_three_more();
                }
                Op::Hint => {
                    if let Some([i, j, k]) = state.request_hint() {
                        prop_assert!(i < j && j < k);
                    }
                }
                Op::Shuffle => state.shuffle_visible(),
                Op::Wait(secs) => clock.advance(Duration::from_secs(secs)),
            }
            if state.pending().is_confirmed_match() {
                prop_assert!(state.score() >= before);
            }
            check_invariants(&state)?;
        }
    }
}
