//! End-to-end game scenarios exercised through the public API only.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use yatzy_game::category::{calculate_category_score, Category};
use yatzy_game::game_session::{GameConfig, GameSession};

/// Hand [1,1,1,2,2]: Ones = 3, Twos = 4, Chance = 7.
#[test]
fn scenario_mixed_hand_scoring() {
    let hand = [1, 1, 1, 2, 2];
    assert_eq!(calculate_category_score(Category::Ones, &hand), 3);
    assert_eq!(calculate_category_score(Category::Twos, &hand), 4);
    assert_eq!(calculate_category_score(Category::Chance, &hand), 7);
}

/// Hand [6,6,6,6,6]: Yatzy = 50, Four of a Kind = 30 (sum of dice).
#[test]
fn scenario_five_sixes_scoring() {
    let hand = [6, 6, 6, 6, 6];
    assert_eq!(calculate_category_score(Category::Yatzy, &hand), 50);
    assert_eq!(calculate_category_score(Category::FourOfAKind, &hand), 30);
}

/// Feed each turn's dice through the external-roll path, score the given
/// category, end the turn.
fn play_scripted_turn(
    session: &mut GameSession,
    rng: &mut SmallRng,
    dice: [i32; 5],
    category: Category,
) -> i32 {
    session.apply_external_roll(&dice, rng);
    let pts = session.score_selection(category);
    session.end_turn();
    pts
}

/// A single-player 13-round game where the upper section sums to exactly
/// 63 earns the 35-point bonus.
#[test]
fn scenario_upper_bonus_at_threshold() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut session = GameSession::new(GameConfig::default());
    session.start_new_game();

    // Upper: three of each face = 3+6+9+12+15+18 = 63.
    play_scripted_turn(&mut session, &mut rng, [1, 1, 1, 2, 3], Category::Ones);
    play_scripted_turn(&mut session, &mut rng, [2, 2, 2, 1, 3], Category::Twos);
    play_scripted_turn(&mut session, &mut rng, [3, 3, 3, 1, 2], Category::Threes);
    play_scripted_turn(&mut session, &mut rng, [4, 4, 4, 1, 2], Category::Fours);
    play_scripted_turn(&mut session, &mut rng, [5, 5, 5, 1, 2], Category::Fives);
    play_scripted_turn(&mut session, &mut rng, [6, 6, 6, 1, 2], Category::Sixes);

    let engine = session.players()[0].engine();
    assert_eq!(engine.upper_subtotal(), 63);
    assert_eq!(engine.upper_bonus(), 35);
}

/// The same game with the upper section one point short earns no bonus.
#[test]
fn scenario_upper_bonus_one_short() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut session = GameSession::new(GameConfig::default());
    session.start_new_game();

    play_scripted_turn(&mut session, &mut rng, [1, 1, 2, 3, 4], Category::Ones); // 2
    play_scripted_turn(&mut session, &mut rng, [2, 2, 2, 1, 3], Category::Twos);
    play_scripted_turn(&mut session, &mut rng, [3, 3, 3, 1, 2], Category::Threes);
    play_scripted_turn(&mut session, &mut rng, [4, 4, 4, 1, 2], Category::Fours);
    play_scripted_turn(&mut session, &mut rng, [5, 5, 5, 1, 2], Category::Fives);
    play_scripted_turn(&mut session, &mut rng, [6, 6, 6, 1, 2], Category::Sixes);

    let engine = session.players()[0].engine();
    assert_eq!(engine.upper_subtotal(), 62);
    assert_eq!(engine.upper_bonus(), 0);
}

/// After the 13th category is scored for the only player, end_turn flips
/// game-over and the winner is that player with their computed total.
#[test]
fn scenario_full_game_to_completion() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut session = GameSession::new(GameConfig::default());
    session.start_new_game();

    let dice = [2, 3, 4, 5, 6];
    let mut expected_total = 0;
    for (i, cat) in Category::ALL.into_iter().enumerate() {
        assert!(!session.is_game_over(), "game ended early at turn {}", i);
        expected_total += play_scripted_turn(&mut session, &mut rng, dice, cat);
    }

    assert!(session.is_game_over());
    let winner = session.winner().expect("winner after final round");
    assert_eq!(winner.name, "Player 1");
    assert_eq!(winner.total, expected_total);
    assert_eq!(winner.total, session.players()[0].total_score());
    // Upper never reaches 63 with a single straight hand — no bonus.
    assert_eq!(session.players()[0].engine().upper_bonus(), 0);
}

/// Holds survive rolls within a turn and are cleared between turns.
#[test]
fn scenario_holds_across_turn_boundary() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut session = GameSession::new(GameConfig::default());
    session.start_new_game();

    session.apply_external_roll(&[6, 6, 1, 1, 1], &mut rng);
    session.toggle_hold(0);
    session.toggle_hold(1);
    session.apply_external_roll(&[2, 2, 2, 2, 2], &mut rng);
    assert_eq!(session.dice_values(), vec![6, 6, 2, 2, 2]);

    session.score_selection(Category::Sixes);
    session.end_turn();
    assert_eq!(session.held_flags(), vec![false; 5]);
    assert_eq!(session.rolls_this_turn(), 0);
}

/// A two-player game alternates engines and produces a stable winner.
#[test]
fn scenario_two_player_game() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut session = GameSession::new(GameConfig {
        num_players: 2,
        num_rounds: 13,
        ..GameConfig::default()
    });
    session.start_new_game();

    for cat in Category::ALL {
        // Player 1 always rolls sixes, player 2 always ones.
        play_scripted_turn(&mut session, &mut rng, [6; 5], cat);
        play_scripted_turn(&mut session, &mut rng, [1; 5], cat);
    }

    assert!(session.is_game_over());
    let winner = session.winner().expect("game over");
    assert_eq!(winner.name, "Player 1");
    assert!(winner.total > session.players()[1].total_score());
}
