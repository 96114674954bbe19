//! Movement resolution.
//!
//! `is_movable` answers whether a piece may use a die value, and
//! `apply_move` resolves the move against a match:
//!
//! 1. Compute the destination (unlock, ring step, lane step or finish).
//! 2. Capture every opposing active piece on a non-safe landing cell.
//! 3. Rank the mover's color if all its pieces are now finished.
//! 4. Keep the turn on a 6, a capture or a finish; otherwise advance it.
//!
//! Illegal moves are no-ops: `apply_move` returns `None` and leaves the
//! match untouched.

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::config::RuleSet;
use super::turn;
use crate::board::{
    entry_cell, main_index, main_path, Cell, LaneSlot, FINISH_INDEX, HOME_LANE_LEN, MAIN_PATH_LEN,
};
use crate::core::{Color, DIE_FACES};
use crate::game::{MatchState, MoveRecord, Piece, PieceRef, PieceState, Position};

/// Die value that unlocks a piece and always grants a bonus turn.
pub const UNLOCK_ROLL: u8 = 6;

/// Steps left before an active piece reaches the center.
///
/// From ring index `i` that is `(52 - i - 1) + 5 + 1`; from lane slot `j`
/// it is `5 - j`. `None` for pieces at home or finished.
#[must_use]
pub fn steps_to_finish(piece: &Piece) -> Option<usize> {
    match piece.state() {
        PieceState::Active(Position::Main(cell)) => {
            let index = main_index(piece.color(), cell);
            Some((MAIN_PATH_LEN - index - 1) + HOME_LANE_LEN + 1)
        }
        PieceState::Active(Position::Lane(slot)) => Some(HOME_LANE_LEN - slot.index()),
        PieceState::AtHome | PieceState::Finished => None,
    }
}

/// Steps a ring move actually covers once the landing bonus is applied.
///
/// A piece that would land exactly on its color's bonus cell is carried
/// one extra step. Lane moves never get the bonus.
#[must_use]
pub fn effective_steps(rules: &RuleSet, piece: &Piece, dice: u8) -> usize {
    let dice = dice as usize;
    let (Some(cell), Some(bonus)) =
        (piece.main_cell(), rules.landing_bonus.for_color(piece.color()))
    else {
        return dice;
    };

    let target = main_index(piece.color(), cell) + dice;
    if target < MAIN_PATH_LEN && main_path(piece.color())[target] == bonus {
        dice + 1
    } else {
        dice
    }
}

/// Whether `piece` may move with `dice`.
///
/// - Finished pieces never move.
/// - Pieces at home move only on a 6.
/// - Active pieces move if the roll does not overshoot the center.
#[must_use]
pub fn is_movable(rules: &RuleSet, piece: &Piece, dice: u8) -> bool {
    destination(rules, piece, dice).is_some()
}

/// State the piece would end in after moving `dice` steps.
///
/// `None` if the move is illegal.
#[must_use]
pub fn destination(rules: &RuleSet, piece: &Piece, dice: u8) -> Option<PieceState> {
    if !(1..=DIE_FACES).contains(&dice) {
        return None;
    }

    match piece.state() {
        PieceState::Finished => None,
        PieceState::AtHome => {
            (dice == UNLOCK_ROLL).then(|| PieceState::on_main(entry_cell(piece.color())))
        }
        PieceState::Active(Position::Main(cell)) => {
            let steps = effective_steps(rules, piece, dice);
            let target = main_index(piece.color(), cell) + steps;
            advance_from_ring(piece.color(), target)
        }
        PieceState::Active(Position::Lane(slot)) => lane_state(slot.index() + dice as usize),
    }
}

/// Resolve a ring index that may run past the end of the main path.
fn advance_from_ring(color: Color, target: usize) -> Option<PieceState> {
    if target < MAIN_PATH_LEN {
        Some(PieceState::on_main(main_path(color)[target]))
    } else {
        lane_state(target - MAIN_PATH_LEN)
    }
}

/// Lane index to state: inside the lane, exactly at the finish, or overshoot.
fn lane_state(index: usize) -> Option<PieceState> {
    if index == FINISH_INDEX {
        return Some(PieceState::Finished);
    }
    let slot = LaneSlot::try_new(u8::try_from(index).ok()?)?;
    Some(PieceState::Active(Position::Lane(slot)))
}

/// Move a piece and resolve captures, ranking and the turn.
///
/// Returns the record of the move, or `None` (state unchanged) if the
/// piece cannot move with `dice`.
pub fn apply_move(
    rules: &RuleSet,
    state: &mut MatchState,
    piece: PieceRef,
    dice: u8,
) -> Option<MoveRecord> {
    let from = state.piece(piece).state();
    let Some(to) = destination(rules, state.piece(piece), dice) else {
        trace!(%piece, dice, ?from, "move rejected");
        return None;
    };

    state.piece_mut(piece).set_state(to);

    let captured = match to {
        PieceState::Active(Position::Main(cell)) if !rules.is_safe(cell) => {
            capture_at(state, piece.color, cell)
        }
        _ => SmallVec::new(),
    };

    let ranked = state.player(piece.color).has_finished() && state.rank(piece.color);
    if ranked {
        debug!(color = %piece.color, place = state.ranking().len(), "color finished");
    }

    let finished = matches!(to, PieceState::Finished);
    let bonus_turn = dice == UNLOCK_ROLL || !captured.is_empty() || finished;

    let record = MoveRecord {
        color: piece.color,
        piece: piece.id,
        dice,
        from,
        to,
        captured,
        ranked,
        bonus_turn,
        sequence: state.next_sequence(),
    };
    debug!(%piece, dice, ?from, ?to, bonus_turn, "move resolved");
    state.record_move(record.clone());

    if bonus_turn {
        state.clear_roll();
    } else {
        turn::advance(rules, state);
    }

    Some(record)
}

/// Send every opposing active piece on `cell` back home.
///
/// Pieces of `mover` on the same cell are left alone.
fn capture_at(state: &mut MatchState, mover: Color, cell: Cell) -> SmallVec<[PieceRef; 4]> {
    let victims: SmallVec<[PieceRef; 4]> = Color::ALL
        .into_iter()
        .filter(|&color| color != mover)
        .flat_map(|color| {
            state
                .player(color)
                .pieces_on(cell)
                .map(Piece::reference)
                .collect::<SmallVec<[PieceRef; 4]>>()
        })
        .collect();

    for &victim in &victims {
        state.piece_mut(victim).set_state(PieceState::AtHome);
        debug!(%victim, %cell, "piece captured");
    }

    victims
}
