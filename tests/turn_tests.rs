//! Turn scheduling and auto-play integration tests.

use ludo_engine::rules::{LudoEngine, RuleSet, SixWithoutMoves, TurnDecision};
use ludo_engine::{Cell, Color, MatchState, PieceId, PieceRef, PieceState, ScriptedDice};

fn finish_color(state: &mut MatchState, color: Color) {
    for id in PieceId::ALL {
        state.place_piece(PieceRef::new(color, id), PieceState::Finished);
    }
}

#[test]
fn test_ordinary_move_passes_turn() {
    let engine = LudoEngine::standard();
    let mut state = engine.new_match();
    let red = PieceRef::new(Color::Red, PieceId::new(1));
    state.place_piece(red, PieceState::on_main(Cell::new(2)));

    engine.roll_dice(&mut state, &mut ScriptedDice::new([3]));
    let record = engine.play(&mut state, PieceId::new(1)).unwrap();

    assert!(!record.bonus_turn);
    assert_eq!(state.current_color(), Color::Green);
    assert!(!state.is_dice_rolled());
    assert_eq!(state.dice_value(), 1);
}

#[test]
fn test_ordinary_move_skips_finished_colors() {
    let engine = LudoEngine::standard();
    let mut state = engine.new_match();
    finish_color(&mut state, Color::Green);
    let red = PieceRef::new(Color::Red, PieceId::new(1));
    state.place_piece(red, PieceState::on_main(Cell::new(2)));

    engine.move_piece(&mut state, red, 2);

    assert_eq!(state.current_color(), Color::Yellow);
}

#[test]
fn test_rolled_six_keeps_turn_on_ring_move() {
    let engine = LudoEngine::standard();
    let mut state = engine.new_match();
    let red = PieceRef::new(Color::Red, PieceId::new(1));
    state.place_piece(red, PieceState::on_main(Cell::new(2)));

    let record = engine.move_piece(&mut state, red, 6).unwrap();

    assert!(record.bonus_turn);
    assert!(record.captured.is_empty());
    assert_eq!(state.current_turn_index(), 0);
}

#[test]
fn test_no_movable_piece_passes_turn() {
    let engine = LudoEngine::standard();
    let mut state = engine.new_match();
    let mut dice = ScriptedDice::new([2]);

    engine.roll_dice(&mut state, &mut dice);
    assert_eq!(engine.decide(&state), TurnDecision::Pass);

    engine.pass(&mut state);
    assert_eq!(state.current_color(), Color::Green);
    assert_eq!(engine.decide(&state), TurnDecision::AwaitRoll);
}

#[test]
fn test_unusable_six_roll_again_policy() {
    let rules = RuleSet::default().with_six_without_moves(SixWithoutMoves::RollAgain);
    let engine = LudoEngine::new(rules).unwrap();
    let mut state = engine.new_match();
    // Red's only piece left is deep in the lane, a 6 overshoots.
    for id in 1..=3 {
        state.place_piece(PieceRef::new(Color::Red, PieceId::new(id)), PieceState::Finished);
    }
    state.place_piece(PieceRef::new(Color::Red, PieceId::new(4)), PieceState::in_lane(2));

    engine.roll_dice(&mut state, &mut ScriptedDice::new([6]));
    assert_eq!(engine.decide(&state), TurnDecision::Pass);

    engine.pass(&mut state);
    assert_eq!(state.current_color(), Color::Red);
    assert_eq!(engine.decide(&state), TurnDecision::AwaitRoll);
}

#[test]
fn test_finished_color_never_rerolls() {
    let rules = RuleSet::default().with_six_without_moves(SixWithoutMoves::RollAgain);
    let engine = LudoEngine::new(rules).unwrap();
    let mut state = engine.new_match();
    finish_color(&mut state, Color::Red);

    engine.roll_dice(&mut state, &mut ScriptedDice::new([6]));
    engine.pass(&mut state);

    assert_eq!(state.current_color(), Color::Green);
}

#[test]
fn test_match_ends_at_threshold() {
    let engine = LudoEngine::standard();
    let mut state = engine.new_match();
    finish_color(&mut state, Color::Green);
    finish_color(&mut state, Color::Blue);
    assert!(!engine.is_over(&state));

    for id in 1..=3 {
        state.place_piece(PieceRef::new(Color::Red, PieceId::new(id)), PieceState::Finished);
    }
    let last = PieceRef::new(Color::Red, PieceId::new(4));
    state.place_piece(last, PieceState::in_lane(3));
    engine.roll_dice(&mut state, &mut ScriptedDice::new([2]));
    engine.play(&mut state, PieceId::new(4)).unwrap();

    assert!(engine.is_over(&state));
    assert_eq!(engine.decide(&state), TurnDecision::MatchOver);
    assert_eq!(engine.roll_dice(&mut state, &mut ScriptedDice::new([6])), None);

    let result = engine.result(&state).unwrap();
    assert_eq!(
        result.standings,
        vec![Color::Green, Color::Blue, Color::Red, Color::Yellow]
    );
}

#[test]
fn test_advance_with_everyone_finished_moves_one_seat() {
    let engine = LudoEngine::new(RuleSet::default().with_finish_threshold(4)).unwrap();
    let mut state = engine.new_match();
    for color in Color::ALL {
        finish_color(&mut state, color);
    }
    assert!(engine.is_over(&state));

    let before = state.current_turn_index();
    engine.advance_turn(&mut state);

    assert_eq!(state.current_turn_index(), (before + 1) % 4);
    assert_eq!(state.current_color(), Color::Green);
}

#[test]
fn test_custom_threshold_ends_on_first_finisher() {
    let engine = LudoEngine::new(RuleSet::default().with_finish_threshold(1)).unwrap();
    let mut state = engine.new_match();

    finish_color(&mut state, Color::Yellow);

    assert!(engine.is_over(&state));
    assert_eq!(engine.result(&state).unwrap().winner(), Color::Yellow);
}

#[test]
fn test_scripted_turn_sequence() {
    let engine = LudoEngine::standard();
    let mut state = engine.new_match();
    // Red: 6 unlocks, 4 moves. Green: 3, nothing to move.
    let mut dice = ScriptedDice::new([6, 4, 3]);

    engine.roll_dice(&mut state, &mut dice);
    assert_eq!(engine.movable_pieces(&state).len(), 4);
    engine.play(&mut state, PieceId::new(1)).unwrap();
    assert_eq!(state.current_color(), Color::Red);

    engine.roll_dice(&mut state, &mut dice);
    assert_eq!(engine.decide(&state), TurnDecision::AutoMove(PieceId::new(1)));
    engine.play(&mut state, PieceId::new(1)).unwrap();
    assert_eq!(state.current_color(), Color::Green);

    engine.roll_dice(&mut state, &mut dice);
    assert_eq!(engine.decide(&state), TurnDecision::Pass);
    engine.pass(&mut state);
    assert_eq!(state.current_color(), Color::Yellow);

    assert_eq!(
        state.piece(PieceRef::new(Color::Red, PieceId::new(1))).main_cell(),
        Some(Cell::new(5))
    );
    assert_eq!(state.history().len(), 2);
}
