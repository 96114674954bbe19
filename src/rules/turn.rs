//! Turn scheduling.
//!
//! The turn passes to the next color in turn order that still has pieces
//! to bring home. A bonus turn is handled by the caller simply not
//! advancing.

use tracing::debug;

use super::config::RuleSet;
use crate::core::Color;
use crate::game::MatchState;

/// Pass the turn to the next unfinished color.
///
/// Always moves at least one seat, then skips colors whose pieces are all
/// finished. Once every color is ranked there is nothing to skip to and
/// the pointer stays one past the current seat. Always clears the rolled
/// flag.
pub fn advance(rules: &RuleSet, state: &mut MatchState) {
    let order = *state.turn_order();
    let mut next = (state.current_turn_index() + 1) % order.len();

    if state.ranking().len() < Color::COUNT {
        for _ in 1..order.len() {
            if !state.player(order[next]).has_finished() {
                break;
            }
            next = (next + 1) % order.len();
        }
    }

    state.set_current_turn(next);
    state.clear_roll();
    if rules.reset_dice_on_advance {
        state.reset_dice_value();
    }

    debug!(color = %state.current_color(), turn = state.turn_number(), "turn advanced");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{PieceId, PieceRef, PieceState};

    fn finish_color(state: &mut MatchState, color: Color) {
        for id in PieceId::ALL {
            state.place_piece(PieceRef::new(color, id), PieceState::Finished);
        }
    }

    #[test]
    fn test_advance_goes_round_in_order() {
        let rules = RuleSet::default();
        let mut state = MatchState::new();

        let mut seen = vec![state.current_color()];
        for _ in 0..4 {
            advance(&rules, &mut state);
            seen.push(state.current_color());
        }

        assert_eq!(
            seen,
            vec![Color::Red, Color::Green, Color::Yellow, Color::Blue, Color::Red]
        );
        assert_eq!(state.turn_number(), 5);
    }

    #[test]
    fn test_advance_skips_finished_colors() {
        let rules = RuleSet::default();
        let mut state = MatchState::new();
        finish_color(&mut state, Color::Green);
        finish_color(&mut state, Color::Yellow);

        advance(&rules, &mut state);
        assert_eq!(state.current_color(), Color::Blue);

        advance(&rules, &mut state);
        assert_eq!(state.current_color(), Color::Red);
    }

    #[test]
    fn test_advance_terminates_when_everyone_finished() {
        let rules = RuleSet::default();
        let mut state = MatchState::new();
        for color in Color::ALL {
            finish_color(&mut state, color);
        }

        advance(&rules, &mut state);
        assert_eq!(state.ranking().len(), 4);
        assert_eq!(state.current_color(), Color::Green);

        advance(&rules, &mut state);
        assert_eq!(state.current_color(), Color::Yellow);
    }

    #[test]
    fn test_advance_from_last_seat_wraps_past_finished() {
        let rules = RuleSet::default();
        let mut state = MatchState::new();
        finish_color(&mut state, Color::Red);
        for _ in 0..3 {
            advance(&rules, &mut state);
        }
        assert_eq!(state.current_color(), Color::Blue);

        advance(&rules, &mut state);

        assert_eq!(state.current_color(), Color::Green);
    }

    #[test]
    fn test_advance_resets_dice() {
        let rules = RuleSet::default();
        let mut state = MatchState::new();
        state.set_roll(4);

        advance(&rules, &mut state);

        assert!(!state.is_dice_rolled());
        assert_eq!(state.dice_value(), 1);
    }

    #[test]
    fn test_advance_can_keep_dice_face() {
        let rules = RuleSet {
            reset_dice_on_advance: false,
            ..RuleSet::default()
        };
        let mut state = MatchState::new();
        state.set_roll(4);

        advance(&rules, &mut state);

        assert!(!state.is_dice_rolled());
        assert_eq!(state.dice_value(), 4);
    }
}
