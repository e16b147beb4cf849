//! Game integration tests.

use std::io;
use std::sync::{Arc, Mutex};

use blackjack_table::{
    Action, ActionError, BetError, Card, DECK_SIZE, DealError, DealerError, DealerStep, Game,
    Intent, IntentError, Outcome, Phase, Rank, ResetError, ResetKind, Shoe, Suit, TableOptions,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn stack(game: &mut Game, draws: &[Card]) {
    game.set_shoe(Shoe::stacked(draws.to_vec()));
}

fn new_game() -> Game {
    Game::new(TableOptions::default(), 42)
}

#[test]
fn fresh_game_opens_betting_with_starting_stake() {
    let game = new_game();

    assert_eq!(game.phase(), Phase::Betting);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.ledger().player_chips(), 10);
    assert_eq!(game.ledger().dealer_chips(), 10);
    assert_eq!(game.ledger().bet(), 0);
    assert!(game.player_hand().is_empty());
    assert!(game.dealer_hand().is_empty());
    assert_eq!(game.message(), "");
    assert_eq!(
        game.available_actions(),
        vec![Action::PlaceBet, Action::DealCards]
    );
}

#[test]
fn bets_accumulate_until_dealt() {
    let mut game = new_game();

    game.place_bet(1).unwrap();
    game.place_bet(1).unwrap();
    game.place_bet(1).unwrap();
    assert_eq!(game.ledger().bet(), 3);
    assert_eq!(game.ledger().player_chips(), 7);

    game.deal_cards().unwrap();
    assert_eq!(game.place_bet(1).unwrap_err(), BetError::InvalidState);
    assert_eq!(game.ledger().bet(), 3);
    assert_eq!(game.ledger().player_chips(), 7);
}

#[test]
fn bet_errors_leave_ledger_untouched() {
    let mut game = new_game();
    let before = *game.ledger();

    assert_eq!(game.place_bet(11).unwrap_err(), BetError::InsufficientFunds);
    assert_eq!(game.place_bet(0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(*game.ledger(), before);

    game.place_bet(10).unwrap();
    assert_eq!(game.place_bet(1).unwrap_err(), BetError::InsufficientFunds);
    assert_eq!(game.available_actions(), vec![Action::DealCards]);
}

#[test]
fn deal_draws_player_cards_then_dealer_cards() {
    let mut game = new_game();
    stack(
        &mut game,
        &[
            card(Rank::Two, Suit::Hearts),   // player
            card(Rank::Three, Suit::Hearts), // player
            card(Rank::Four, Suit::Clubs),   // dealer up
            card(Rank::Five, Suit::Clubs),   // dealer hole
        ],
    );

    game.deal_cards().unwrap();

    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(
        game.player_hand().cards(),
        &[card(Rank::Two, Suit::Hearts), card(Rank::Three, Suit::Hearts)]
    );
    assert_eq!(
        game.dealer_hand().cards(),
        &[card(Rank::Four, Suit::Clubs), card(Rank::Five, Suit::Clubs)]
    );
    assert!(!game.dealer_hand().is_hole_revealed());
    assert_eq!(game.dealer_hand().visible_value(), 4);
    assert_eq!(game.available_actions(), vec![Action::Hit, Action::Stand]);
    assert_eq!(game.deal_cards().unwrap_err(), DealError::InvalidState);
}

#[test]
fn zero_bet_round_can_be_dealt() {
    let mut game = new_game();
    game.deal_cards().unwrap();

    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 4);
}

#[test]
fn hit_and_stand_need_a_hand() {
    let mut game = new_game();

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_step().unwrap_err(), DealerError::InvalidState);
    assert_eq!(game.finish_round().unwrap_err(), ResetError::InvalidState);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.phase(), Phase::Betting);
}

#[test]
fn hit_below_21_keeps_the_turn() {
    let mut game = new_game();
    stack(
        &mut game,
        &[
            card(Rank::Two, Suit::Hearts),
            card(Rank::Three, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Seven, Suit::Clubs),
            card(Rank::Ace, Suit::Spades), // hit: 2 + 3 + 11
        ],
    );

    game.deal_cards().unwrap();
    let hit = game.hit().unwrap();

    assert_eq!(hit, card(Rank::Ace, Suit::Spades));
    assert_eq!(game.player_hand().value(), 16);
    assert_eq!(game.phase(), Phase::PlayerTurn);
}

#[test]
fn bust_on_hit_settles_without_dealer_draws() {
    let mut game = new_game();
    game.place_bet(4).unwrap();
    stack(
        &mut game,
        &[
            card(Rank::King, Suit::Hearts),
            card(Rank::Six, Suit::Hearts),
            card(Rank::Five, Suit::Clubs),
            card(Rank::Six, Suit::Clubs), // dealer 11, would draw
            card(Rank::Queen, Suit::Spades),
        ],
    );

    game.deal_cards().unwrap();
    game.hit().unwrap();

    assert_eq!(game.phase(), Phase::Settled);
    assert_eq!(game.dealer_hand().len(), 2);
    assert!(!game.dealer_hand().is_hole_revealed());
    assert_eq!(game.message(), "You went over! Dealer wins.");

    let result = game.last_result().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerBust);
    assert_eq!(result.player_value, 26);
    assert_eq!(result.payout, 0);
    assert_eq!(game.ledger().player_chips(), 6);
    assert_eq!(game.ledger().bet(), 4);
    assert!(game.available_actions().is_empty());
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn hitting_21_settles_against_hidden_dealer_total() {
    let mut game = new_game();
    game.place_bet(2).unwrap();
    stack(
        &mut game,
        &[
            card(Rank::Nine, Suit::Hearts),
            card(Rank::Two, Suit::Hearts),
            card(Rank::Four, Suit::Clubs), // dealer shows 4
            card(Rank::King, Suit::Clubs), // hole makes 14
            card(Rank::Ten, Suit::Spades), // player 21
        ],
    );

    game.deal_cards().unwrap();
    game.hit().unwrap();

    let result = game.last_result().unwrap();
    assert_eq!(game.phase(), Phase::Settled);
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(result.dealer_value, 14);
    assert_eq!(game.dealer_hand().visible_value(), 4);
    assert_eq!(game.ledger().player_chips(), 8 + 4);
}

#[test]
fn hitting_21_against_dealer_21_is_a_push() {
    let mut game = new_game();
    game.place_bet(5).unwrap();
    stack(
        &mut game,
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Five, Suit::Hearts),
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Queen, Suit::Clubs),
            card(Rank::Six, Suit::Spades),
        ],
    );

    game.deal_cards().unwrap();
    game.hit().unwrap();

    assert_eq!(game.last_result().unwrap().outcome, Outcome::Push);
    assert_eq!(game.message(), "Push!");
    assert_eq!(game.ledger().player_chips(), 10);
}

#[test]
fn end_to_end_dealer_bust_pays_double() {
    let mut game = new_game();
    game.place_bet(3).unwrap();
    stack(
        &mut game,
        &[
            card(Rank::King, Suit::Hearts),
            card(Rank::Queen, Suit::Hearts), // player 20
            card(Rank::Six, Suit::Clubs),
            card(Rank::Nine, Suit::Clubs),   // dealer 15
            card(Rank::King, Suit::Spades),  // dealer draws to 25
        ],
    );

    game.deal_cards().unwrap();
    assert_eq!(game.player_hand().value(), 20);

    game.stand().unwrap();
    assert_eq!(game.phase(), Phase::DealerTurn);
    assert!(game.dealer_hand().is_hole_revealed());
    assert_eq!(game.dealer_hand().visible_value(), 15);
    assert!(game.dealer_must_draw());

    assert_eq!(
        game.dealer_step().unwrap(),
        DealerStep::Drew(card(Rank::King, Suit::Spades))
    );
    assert_eq!(game.dealer_hand().value(), 25);
    assert!(!game.dealer_must_draw());

    let DealerStep::Settled(result) = game.dealer_step().unwrap() else {
        panic!("dealer should settle at 25");
    };
    assert_eq!(result.outcome, Outcome::DealerBust);
    assert_eq!(result.payout, 6);
    assert_eq!(game.message(), "You win!");
    assert_eq!(game.ledger().player_chips(), 13);

    assert_eq!(game.finish_round().unwrap(), ResetKind::Round);
    assert_eq!(game.phase(), Phase::Betting);
    assert_eq!(game.ledger().player_chips(), 13);
    assert_eq!(game.ledger().bet(), 0);
    assert!(game.player_hand().is_empty());
    assert!(game.dealer_hand().is_empty());
    assert!(!game.dealer_hand().is_hole_revealed());
    assert_eq!(game.message(), "");
    assert!(game.last_result().is_none());
}

#[test]
fn dealer_stands_on_17_without_drawing() {
    let mut game = new_game();
    game.place_bet(2).unwrap();
    stack(
        &mut game,
        &[
            card(Rank::King, Suit::Hearts),
            card(Rank::Eight, Suit::Hearts), // player 18
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Six, Suit::Clubs), // soft 17
        ],
    );

    game.deal_cards().unwrap();
    game.stand().unwrap();
    let result = game.play_dealer().unwrap();

    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(game.ledger().player_chips(), 12);
}

#[test]
fn dealer_draws_several_cards_to_reach_17() {
    let mut game = new_game();
    game.place_bet(1).unwrap();
    stack(
        &mut game,
        &[
            card(Rank::King, Suit::Hearts),
            card(Rank::Seven, Suit::Hearts), // player 17
            card(Rank::Two, Suit::Clubs),
            card(Rank::Three, Suit::Clubs), // dealer 5
            card(Rank::Two, Suit::Spades),  // 7
            card(Rank::Ace, Suit::Spades),  // soft 18
        ],
    );

    game.deal_cards().unwrap();
    game.stand().unwrap();

    let mut draws = 0;
    while let DealerStep::Drew(_) = game.dealer_step().unwrap() {
        draws += 1;
    }

    assert_eq!(draws, 2);
    let result = game.last_result().unwrap();
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(game.message(), "Dealer wins!");
    assert_eq!(game.ledger().player_chips(), 9);
}

#[test]
fn losing_the_last_chip_resets_the_game() {
    let mut game = new_game();
    game.place_bet(10).unwrap();
    stack(
        &mut game,
        &[
            card(Rank::King, Suit::Hearts),
            card(Rank::Two, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::King, Suit::Spades), // player busts
        ],
    );

    game.deal_cards().unwrap();
    game.hit().unwrap();
    assert_eq!(game.ledger().player_chips(), 0);

    assert_eq!(game.finish_round().unwrap(), ResetKind::Game);
    assert_eq!(game.phase(), Phase::Betting);
    assert_eq!(game.ledger().player_chips(), 10);
    assert_eq!(game.ledger().dealer_chips(), 10);
    assert_eq!(game.ledger().bet(), 0);
    assert_eq!(game.cards_remaining(), DECK_SIZE);
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn new_game_opens_betting_with_restored_stake() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut game = new_game();
        game.place_bet(10).unwrap();
        stack(
            &mut game,
            &[
                card(Rank::King, Suit::Hearts),
                card(Rank::Two, Suit::Hearts),
                card(Rank::Ten, Suit::Clubs),
                card(Rank::Nine, Suit::Clubs),
                card(Rank::King, Suit::Spades),
            ],
        );
        game.deal_cards().unwrap();
        game.hit().unwrap();
        assert_eq!(game.finish_round().unwrap(), ResetKind::Game);
    });

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    let opened = output
        .lines()
        .rfind(|line| line.contains("betting open"))
        .unwrap();
    assert!(opened.contains("chips=10"), "{opened}");
    assert!(opened.contains("shoe=52"), "{opened}");
}

#[test]
fn low_shoe_is_rebuilt_before_next_deal() {
    let mut game = new_game();
    game.place_bet(1).unwrap();
    let mut draws = vec![card(Rank::Ten, Suit::Hearts); 4];
    draws.extend(vec![card(Rank::Two, Suit::Clubs); 11]);
    stack(&mut game, &draws);

    game.deal_cards().unwrap();
    game.stand().unwrap();
    game.play_dealer().unwrap();
    assert!(game.cards_remaining() <= 15);

    game.finish_round().unwrap();
    assert_eq!(game.cards_remaining(), DECK_SIZE);
}

#[test]
fn shoe_above_threshold_is_kept() {
    let mut game = new_game();
    game.deal_cards().unwrap();
    game.stand().unwrap();
    game.play_dealer().unwrap();

    let remaining = game.cards_remaining();
    assert!(remaining > 15);
    game.finish_round().unwrap();
    assert_eq!(game.cards_remaining(), remaining);
}

#[test]
fn empty_shoe_is_rebuilt_mid_round() {
    let mut game = new_game();
    stack(
        &mut game,
        &[card(Rank::Ten, Suit::Hearts), card(Rank::Nine, Suit::Hearts)],
    );

    game.deal_cards().unwrap();

    assert_eq!(game.player_hand().value(), 19);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 2);
}

#[test]
fn apply_routes_intents_and_reports_rejections() {
    let mut game = new_game();

    game.apply(Intent::PlaceBet(2)).unwrap();
    assert_eq!(
        game.apply(Intent::PlaceBet(20)).unwrap_err(),
        IntentError::Bet(BetError::InsufficientFunds)
    );
    assert_eq!(
        game.apply(Intent::Hit).unwrap_err(),
        IntentError::Action(ActionError::InvalidState)
    );

    game.apply(Intent::DealCards).unwrap();
    assert_eq!(
        game.apply(Intent::DealCards).unwrap_err(),
        IntentError::Deal(DealError::InvalidState)
    );

    game.apply(Intent::Stand).unwrap();
    assert_eq!(game.phase(), Phase::DealerTurn);
    assert!(game.available_actions().is_empty());
}

#[test]
fn snapshot_hides_hole_value_until_stand() {
    let mut game = new_game();
    game.place_bet(2).unwrap();
    stack(
        &mut game,
        &[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Nine, Suit::Hearts),
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Seven, Suit::Clubs),
        ],
    );
    game.deal_cards().unwrap();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, Phase::PlayerTurn);
    assert_eq!(snapshot.shoe_size, game.cards_remaining());
    assert_eq!(snapshot.player_value, 19);
    assert_eq!(snapshot.dealer_hand.len(), 2);
    assert!(!snapshot.dealer_visible);
    assert_eq!(snapshot.dealer_display_value, 11);
    assert_eq!(snapshot.visible_dealer_cards(), &[card(Rank::Ace, Suit::Clubs)]);
    assert_eq!(snapshot.player_chips, 8);
    assert_eq!(snapshot.dealer_chips, 10);
    assert_eq!(snapshot.bet, 2);
    assert!(snapshot.allows(Action::Hit));
    assert!(!snapshot.allows(Action::PlaceBet));

    game.stand().unwrap();
    let snapshot = game.snapshot();
    assert!(snapshot.dealer_visible);
    assert_eq!(snapshot.dealer_display_value, 18);
    assert_eq!(snapshot.visible_dealer_cards().len(), 2);

    game.play_dealer().unwrap();
    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, Phase::Settled);
    assert_eq!(snapshot.message, "You win!");
    assert_eq!(snapshot.player_chips, 12);
    assert_eq!(snapshot.bet, 2);
}

#[test]
fn chips_are_conserved_across_many_rounds() {
    let mut game = Game::new(TableOptions::default(), 2024);

    for _ in 0..200 {
        let before = game.ledger().player_chips();
        let stake = before.min(3);
        if stake > 0 {
            game.place_bet(stake).unwrap();
        }
        assert_eq!(game.ledger().player_chips() + game.ledger().bet(), before);

        game.deal_cards().unwrap();
        while game.phase() == Phase::PlayerTurn && game.player_hand().value() < 15 {
            game.hit().unwrap();
        }
        if game.phase() == Phase::PlayerTurn {
            game.stand().unwrap();
            game.play_dealer().unwrap();
        }

        let result = game.last_result().unwrap();
        assert_eq!(result.payout, stake * result.outcome.payout_multiplier());
        assert_eq!(game.ledger().player_chips(), before - stake + result.payout);
        assert_eq!(game.ledger().dealer_chips(), 10);

        game.finish_round().unwrap();
        assert_eq!(game.phase(), Phase::Betting);
        assert!(game.cards_remaining() > 15);
    }
}

#[test]
fn same_seed_replays_the_same_rounds() {
    let mut a = Game::new(TableOptions::default(), 99);
    let mut b = Game::new(TableOptions::default(), 99);

    for game in [&mut a, &mut b] {
        game.place_bet(1).unwrap();
        game.deal_cards().unwrap();
    }

    assert_eq!(a.player_hand(), b.player_hand());
    assert_eq!(a.dealer_hand(), b.dealer_hand());
}
