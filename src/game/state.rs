//! Match state: the single aggregate the rules read and mutate.
//!
//! ## MatchState
//!
//! - Players and their pieces, per color
//! - Turn order and the current-turn pointer
//! - Dice value and whether it has been rolled this turn
//! - Ranking of colors in the order they finished
//! - Move history
//!
//! Only the movement resolver and the turn scheduler mutate a match in
//! play. Both take `&mut MatchState`, so every mutation site is a call
//! into `rules`.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::piece::{Piece, PieceId, PieceRef, PieceState};
use super::player::Player;
use super::record::MoveRecord;
use crate::core::{Color, ColorMap};
use crate::error::StateError;

/// Complete state of one match.
///
/// Uses `im` persistent data structures for the history so that cloning a
/// long match stays cheap. Deserialized snapshots are checked (ring
/// cells, turn pointer and order, player placement, ranking) before a
/// `MatchState` is built from them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatchSnapshot")]
pub struct MatchState {
    players: ColorMap<Player>,

    turn_order: [Color; 4],

    /// Index into `turn_order` of the color to act.
    current_turn: usize,

    /// Turn number (starts at 1, bumped on every turn advance).
    turn_number: u32,

    dice_value: u8,

    dice_rolled: bool,

    /// Colors in the order they finished all four pieces.
    ranking: SmallVec<[Color; 4]>,

    history: Vector<MoveRecord>,
}

/// Unchecked wire form of `MatchState`.
#[derive(Deserialize)]
struct MatchSnapshot {
    players: ColorMap<Player>,
    turn_order: [Color; 4],
    current_turn: usize,
    turn_number: u32,
    dice_value: u8,
    dice_rolled: bool,
    ranking: SmallVec<[Color; 4]>,
    history: Vector<MoveRecord>,
}

impl TryFrom<MatchSnapshot> for MatchState {
    type Error = StateError;

    fn try_from(raw: MatchSnapshot) -> Result<Self, StateError> {
        if raw.current_turn >= raw.turn_order.len() {
            return Err(StateError::TurnIndex(raw.current_turn));
        }
        if !Color::ALL.iter().all(|c| raw.turn_order.contains(c)) {
            return Err(StateError::TurnOrder);
        }

        for (color, player) in raw.players.iter() {
            if player.color() != color {
                return Err(StateError::Misplaced(player.color()));
            }
            for (piece, id) in player.pieces().iter().zip(PieceId::ALL) {
                if piece.color() != color || piece.id() != id {
                    return Err(StateError::Misplaced(piece.color()));
                }
                if let Some(cell) = piece.main_cell().filter(|c| !c.is_valid()) {
                    return Err(StateError::Cell(cell.number()));
                }
            }
        }

        let finished = raw.players.values().filter(|p| p.has_finished()).count();
        let consistent = raw.ranking.len() == finished
            && raw.ranking.iter().all(|&c| raw.players[c].has_finished())
            && raw
                .ranking
                .iter()
                .enumerate()
                .all(|(i, c)| !raw.ranking[..i].contains(c));
        if !consistent {
            return Err(StateError::Ranking);
        }

        Ok(Self {
            players: raw.players,
            turn_order: raw.turn_order,
            current_turn: raw.current_turn,
            turn_number: raw.turn_number,
            dice_value: raw.dice_value,
            dice_rolled: raw.dice_rolled,
            ranking: raw.ranking,
            history: raw.history,
        })
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Create a fresh match.
    ///
    /// ## Defaults
    ///
    /// - Turn order: Red, Green, Yellow, Blue; Red acts first
    /// - Dice value 1, not rolled
    /// - All pieces at home
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: ColorMap::new(Player::new),
            turn_order: Color::ALL,
            current_turn: 0,
            turn_number: 1,
            dice_value: 1,
            dice_rolled: false,
            ranking: SmallVec::new(),
            history: Vector::new(),
        }
    }

    // === Players and Pieces ===

    #[must_use]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color]
    }

    /// Iterate over all players in color order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    #[must_use]
    pub fn piece(&self, piece: PieceRef) -> &Piece {
        self.players[piece.color].piece(piece.id)
    }

    pub(crate) fn piece_mut(&mut self, piece: PieceRef) -> &mut Piece {
        self.players[piece.color].piece_mut(piece.id)
    }

    /// Put a piece into an arbitrary state, bypassing the movement rules.
    ///
    /// For setting up positions (tests, puzzles, resumed matches). The
    /// ranking is kept consistent with which colors have finished: a color
    /// that stops being finished is removed from it. This is the only way
    /// ranking can shrink, so do not call it on a match in play.
    pub fn place_piece(&mut self, piece: PieceRef, state: PieceState) {
        self.piece_mut(piece).set_state(state);

        let color = piece.color;
        let finished = self.players[color].has_finished();
        if finished && !self.is_ranked(color) {
            self.ranking.push(color);
        } else if !finished {
            self.ranking.retain(|c| *c != color);
        }
    }

    // === Turn ===

    #[must_use]
    pub fn turn_order(&self) -> &[Color; 4] {
        &self.turn_order
    }

    #[must_use]
    pub fn current_turn_index(&self) -> usize {
        self.current_turn
    }

    /// Color whose turn it is.
    #[must_use]
    pub fn current_color(&self) -> Color {
        self.turn_order[self.current_turn]
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.player(self.current_color())
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub(crate) fn set_current_turn(&mut self, index: usize) {
        self.current_turn = index;
        self.turn_number += 1;
    }

    // === Dice ===

    #[must_use]
    pub fn dice_value(&self) -> u8 {
        self.dice_value
    }

    #[must_use]
    pub fn is_dice_rolled(&self) -> bool {
        self.dice_rolled
    }

    pub(crate) fn set_roll(&mut self, value: u8) {
        self.dice_value = value;
        self.dice_rolled = true;
    }

    /// Let the current color roll again.
    pub(crate) fn clear_roll(&mut self) {
        self.dice_rolled = false;
    }

    pub(crate) fn reset_dice_value(&mut self) {
        self.dice_value = 1;
    }

    // === Ranking ===

    /// Colors that have finished, in finishing order.
    #[must_use]
    pub fn ranking(&self) -> &[Color] {
        &self.ranking
    }

    #[must_use]
    pub fn is_ranked(&self, color: Color) -> bool {
        self.ranking.contains(&color)
    }

    /// Append a color to the ranking. Returns false if it was already ranked.
    pub(crate) fn rank(&mut self, color: Color) -> bool {
        if self.is_ranked(color) {
            return false;
        }
        self.ranking.push(color);
        true
    }

    // === History ===

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Sequence number the next record will carry.
    #[must_use]
    pub fn next_sequence(&self) -> u32 {
        self.history.len() as u32
    }

    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }
}
