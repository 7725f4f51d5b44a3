//! Game integration tests.

use std::collections::HashMap;

use shoejack::{
    Action, ActionError, BetError, Card, DealError, Game, GameState, Hand, HandSummary, Outcome,
    RANKS, Rank, SHOE_SIZE, Shoe, ShoeError, ShowdownError,
};

const fn card(rank: Rank) -> Card {
    Card::new(rank)
}

fn hand(ranks: &[Rank]) -> Hand {
    ranks.iter().copied().map(Card::new).collect()
}

fn summary(total: u8, blackjack: bool, busted: bool) -> HandSummary {
    HandSummary {
        total,
        blackjack,
        busted,
    }
}

#[test]
fn card_values_follow_fixed_ace_rule() {
    let values: Vec<u8> = RANKS.iter().map(|rank| rank.value()).collect();
    assert_eq!(values, [2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, 11]);
    assert_eq!(Rank::Two.ordinal(), 2);
    assert_eq!(Rank::Ace.ordinal(), 14);
}

#[test]
fn hand_total_tracks_every_card() {
    let mut running = Hand::new();
    let mut expected = 0u8;
    for rank in RANKS {
        running.add_card(card(rank));
        expected += rank.value();
        assert_eq!(running.total_points(), expected);
    }
    assert_eq!(running.len(), RANKS.len());
}

#[test]
fn blackjack_needs_exactly_two_cards() {
    assert!(hand(&[Rank::King, Rank::Ace]).has_blackjack());
    assert!(hand(&[Rank::Ace, Rank::Ten]).has_blackjack());

    let three_card_21 = hand(&[Rank::Seven, Rank::Seven, Rank::Seven]);
    assert_eq!(three_card_21.total_points(), 21);
    assert!(!three_card_21.has_blackjack());

    assert!(!hand(&[Rank::King, Rank::Nine]).has_blackjack());
    assert!(!hand(&[Rank::Ace]).has_blackjack());
}

#[test]
fn bust_threshold_is_above_21() {
    for rank in [Rank::Two, Rank::Five, Rank::Nine, Rank::Ten, Rank::Ace] {
        let mut h = hand(&[Rank::Ten]);
        while h.total_points() <= 30 {
            assert_eq!(h.is_busted(), h.total_points() > 21);
            h.add_card(card(rank));
        }
    }
}

#[test]
fn aces_are_never_revalued() {
    let pair = hand(&[Rank::Ace, Rank::Ace]);
    assert_eq!(pair.total_points(), 22);
    assert!(pair.is_busted());
    assert!(!pair.has_blackjack());
}

#[test]
fn clear_resets_cards_and_total() {
    let mut h = hand(&[Rank::Queen, Rank::Six]);
    h.clear();
    assert!(h.is_empty());
    assert_eq!(h.total_points(), 0);
    assert_eq!(h.render(true), "");
}

#[test]
fn render_conceals_all_but_first_card() {
    let h = hand(&[Rank::Ace, Rank::Jack, Rank::Three]);
    assert_eq!(h.render(true), "11 10 3");
    assert_eq!(h.render(false), "11 X X");
}

#[test]
fn shoe_holds_six_of_each_rank() {
    let mut shoe = Shoe::with_seed(3);
    assert_eq!(shoe.cards_remaining(), 78);
    assert_eq!(SHOE_SIZE, 78);

    shoe.shuffle();
    let mut counts: HashMap<Rank, usize> = HashMap::new();
    for c in shoe.cards() {
        *counts.entry(c.rank()).or_default() += 1;
    }
    assert_eq!(counts.len(), 13);
    assert!(counts.values().all(|&count| count == 6));
}

#[test]
fn shoe_deals_down_to_empty() {
    let mut shoe = Shoe::with_seed(11);
    shoe.shuffle();
    for remaining in (0..SHOE_SIZE).rev() {
        assert!(shoe.deal_card().is_ok());
        assert_eq!(shoe.cards_remaining(), remaining);
    }
    assert!(shoe.is_empty());
    assert_eq!(shoe.deal_card(), Err(ShoeError::Empty));
    assert_eq!(shoe.cards_remaining(), 0);
}

#[test]
fn shuffle_keeps_remaining_cards_only() {
    let mut shoe = Shoe::with_seed(5);
    for _ in 0..10 {
        shoe.deal_card().unwrap();
    }
    shoe.shuffle();
    assert_eq!(shoe.cards_remaining(), SHOE_SIZE - 10);
}

#[test]
fn settlement_precedence() {
    let cases = [
        // Player blackjack beats everything the dealer can do without one.
        (summary(21, true, false), summary(26, false, true), Outcome::Blackjack),
        (summary(21, true, false), summary(21, false, false), Outcome::Blackjack),
        // Dealer blackjack beats any non-blackjack player hand.
        (summary(21, false, false), summary(21, true, false), Outcome::DealerBlackjack),
        (summary(25, false, true), summary(21, true, false), Outcome::DealerBlackjack),
        // Both blackjack falls through to a push.
        (summary(21, true, false), summary(21, true, false), Outcome::Push),
        // Player bust loses even if the dealer busted too.
        (summary(24, false, true), summary(23, false, true), Outcome::Bust),
        (summary(15, false, false), summary(22, false, true), Outcome::Win),
        (summary(19, false, false), summary(18, false, false), Outcome::Win),
        (summary(18, false, false), summary(19, false, false), Outcome::Lose),
        (summary(17, false, false), summary(17, false, false), Outcome::Push),
    ];

    for (player, dealer, expected) in cases {
        assert_eq!(
            Outcome::resolve(player, dealer),
            expected,
            "player {player:?} vs dealer {dealer:?}"
        );
    }
}

#[test]
fn outcome_net_is_even_money() {
    assert_eq!(Outcome::Blackjack.net(100), 100);
    assert_eq!(Outcome::Win.net(100), 100);
    assert_eq!(Outcome::Lose.net(100), -100);
    assert_eq!(Outcome::Bust.net(100), -100);
    assert_eq!(Outcome::DealerBlackjack.net(100), -100);
    assert_eq!(Outcome::Push.net(100), 0);
}

#[test]
fn bet_errors() {
    let mut game = Game::new(Shoe::with_seed(1), 50);

    assert_eq!(game.bet(0), Err(BetError::ZeroBet));
    assert_eq!(game.bet(51), Err(BetError::InsufficientFunds));
    assert_eq!(game.state(), GameState::AwaitingBet);

    game.bet(50).unwrap();
    assert_eq!(game.bet_amount(), Some(50));
    assert_eq!(game.bet(1), Err(BetError::InvalidState));
    assert_eq!(game.credits(), 50);
}

#[test]
fn operations_out_of_turn_are_rejected() {
    let mut game = Game::new(Shoe::with_seed(1), 100);

    assert_eq!(game.deal(), Err(DealError::InvalidState));
    assert_eq!(game.hit(), Err(ActionError::InvalidState));
    assert_eq!(game.stand(), Err(ActionError::InvalidState));
    assert_eq!(game.dealer_step(), Err(ShowdownError::InvalidState));
    assert_eq!(game.settle(), Err(ShowdownError::InvalidState));
    assert_eq!(game.state(), GameState::AwaitingBet);
}

#[test]
fn deal_order_is_player_then_dealer() {
    let shoe = Shoe::stacked(&[
        card(Rank::Two),
        card(Rank::Three),
        card(Rank::Four),
        card(Rank::Five),
    ]);
    let mut game = Game::new(shoe, 10);
    game.bet(5).unwrap();
    game.deal().unwrap();

    assert_eq!(game.player_hand().cards(), [card(Rank::Two), card(Rank::Three)]);
    assert_eq!(game.dealer_hand().cards(), [card(Rank::Four), card(Rank::Five)]);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.cards_remaining(), 0);
}

#[test]
fn blackjack_round_pays_even_money_and_dealer_still_draws() {
    let shoe = Shoe::stacked(&[
        card(Rank::King),
        card(Rank::Ace),
        card(Rank::Nine),
        card(Rank::Seven),
        card(Rank::Three),
    ]);
    let mut game = Game::new(shoe, 1000);
    game.bet(100).unwrap();
    game.deal().unwrap();
    assert!(game.player_hand().has_blackjack());

    game.stand().unwrap();
    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, [card(Rank::Three)]);

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, Outcome::Blackjack);
    assert_eq!(result.net, 100);
    assert_eq!(game.credits(), 1100);
    assert_eq!(game.state(), GameState::AwaitingBet);
}

#[test]
fn bust_skips_the_dealer_turn() {
    let shoe = Shoe::stacked(&[
        card(Rank::Ten),
        card(Rank::Nine),
        card(Rank::Six),
        card(Rank::Five),
        card(Rank::Five),
        card(Rank::King),
    ]);
    let mut game = Game::new(shoe, 1000);
    game.bet(200).unwrap();
    game.deal().unwrap();

    let drawn = game.hit().unwrap();
    assert_eq!(drawn, card(Rank::Five));
    assert_eq!(game.player_hand().total_points(), 24);
    assert!(game.player_hand().is_busted());
    assert_eq!(game.state(), GameState::Settlement);
    assert_eq!(game.dealer_step(), Err(ShowdownError::InvalidState));

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, Outcome::Bust);
    assert_eq!(game.credits(), 800);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn dealer_draws_to_seventeen_and_wins() {
    let shoe = Shoe::stacked(&[
        card(Rank::Ten),
        card(Rank::Eight),
        card(Rank::Six),
        card(Rank::Four),
        card(Rank::Two),
        card(Rank::Seven),
        card(Rank::Queen),
    ]);
    let mut game = Game::new(shoe, 500);
    game.bet(50).unwrap();
    game.deal().unwrap();
    game.stand().unwrap();

    assert_eq!(game.dealer_step(), Ok(Some(card(Rank::Two))));
    assert_eq!(game.dealer_step(), Ok(Some(card(Rank::Seven))));
    assert_eq!(game.dealer_hand().total_points(), 19);
    assert_eq!(game.dealer_step(), Ok(None));
    assert_eq!(game.state(), GameState::Settlement);

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, Outcome::Lose);
    assert_eq!(result.player_value, 18);
    assert_eq!(result.dealer_value, 19);
    assert_eq!(game.credits(), 450);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn push_leaves_balance_unchanged() {
    let shoe = Shoe::stacked(&[
        card(Rank::Ten),
        card(Rank::Seven),
        card(Rank::Jack),
        card(Rank::Seven),
    ]);
    let mut game = Game::new(shoe, 300);
    game.bet(300).unwrap();
    game.deal().unwrap();
    game.stand().unwrap();
    assert!(game.dealer_play().unwrap().is_empty());

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(game.credits(), 300);
}

#[test]
fn double_down_is_a_no_op_and_pass_ends_the_turn() {
    let shoe = Shoe::stacked(&[
        card(Rank::Five),
        card(Rank::Six),
        card(Rank::Ten),
        card(Rank::Eight),
    ]);
    let mut game = Game::new(shoe, 100);
    game.bet(10).unwrap();
    game.deal().unwrap();

    assert_eq!(game.act(Action::DoubleDown), Ok(None));
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.bet_amount(), Some(10));
    assert_eq!(game.player_hand().len(), 2);

    assert_eq!(game.act(Action::Pass), Ok(None));
    assert_eq!(game.state(), GameState::DealerTurn);
}

#[test]
fn pair_of_aces_busts_on_the_deal() {
    let shoe = Shoe::stacked(&[
        card(Rank::Ace),
        card(Rank::Ace),
        card(Rank::Ten),
        card(Rank::Two),
    ]);
    let mut game = Game::new(shoe, 100);
    game.bet(10).unwrap();
    game.deal().unwrap();

    assert_eq!(game.state(), GameState::Settlement);
    assert_eq!(game.settle().unwrap().outcome, Outcome::Bust);
    assert_eq!(game.credits(), 90);
}

#[test]
fn losing_everything_ends_the_session() {
    let shoe = Shoe::stacked(&[
        card(Rank::Ten),
        card(Rank::Six),
        card(Rank::Ten),
        card(Rank::Nine),
    ]);
    let mut game = Game::new(shoe, 40);
    game.bet(40).unwrap();
    game.deal().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, Outcome::Lose);
    assert_eq!(result.credits, 0);
    assert!(game.is_over());
    assert_eq!(game.bet(1), Err(BetError::InvalidState));
}

#[test]
fn empty_shoe_ends_the_session_without_touching_credits() {
    let shoe = Shoe::stacked(&[card(Rank::Ten), card(Rank::Six), card(Rank::Ten)]);
    let mut game = Game::new(shoe, 100);
    game.bet(25).unwrap();

    assert_eq!(game.deal(), Err(DealError::Shoe(ShoeError::Empty)));
    assert!(game.is_over());
    assert_eq!(game.credits(), 100);
}

#[test]
fn empty_shoe_on_hit_is_an_error() {
    let shoe = Shoe::stacked(&[
        card(Rank::Two),
        card(Rank::Three),
        card(Rank::Ten),
        card(Rank::Nine),
    ]);
    let mut game = Game::new(shoe, 100);
    game.bet(25).unwrap();
    game.deal().unwrap();

    assert_eq!(game.hit(), Err(ActionError::Shoe(ShoeError::Empty)));
    assert!(game.is_over());
    assert_eq!(game.credits(), 100);
}

#[test]
fn empty_shoe_on_dealer_draw_is_an_error() {
    let shoe = Shoe::stacked(&[
        card(Rank::Ten),
        card(Rank::Nine),
        card(Rank::Two),
        card(Rank::Three),
    ]);
    let mut game = Game::new(shoe, 100);
    game.bet(25).unwrap();
    game.deal().unwrap();
    game.stand().unwrap();

    assert_eq!(game.dealer_play(), Err(ShowdownError::Shoe(ShoeError::Empty)));
    assert!(game.is_over());
    assert_eq!(game.credits(), 100);
}

#[test]
fn rounds_reuse_the_shoe_until_exhausted() {
    let mut game = Game::new(Shoe::with_seed(99), 1_000_000);
    let mut rounds = 0;

    while !game.is_over() {
        game.bet(1).unwrap();
        if game.deal().is_err() {
            break;
        }
        while game.state() == GameState::PlayerTurn {
            if game.player_hand().total_points() < 15 {
                if game.hit().is_err() {
                    break;
                }
            } else {
                game.stand().unwrap();
            }
        }
        if game.state() == GameState::DealerTurn && game.dealer_play().is_err() {
            break;
        }
        if game.state() == GameState::Settlement {
            game.settle().unwrap();
            rounds += 1;
        }
    }

    assert!(game.is_over());
    assert!(rounds > 5);
    assert!(game.cards_remaining() < 4);
}
