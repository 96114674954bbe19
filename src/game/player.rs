//! A color's four pieces.

use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceId};
use crate::board::Cell;
use crate::core::Color;

/// A seat at the table: one color and its four pieces.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    color: Color,
    pieces: [Piece; 4],
}

impl Player {
    /// Create a player with all four pieces at home.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            pieces: PieceId::ALL.map(|id| Piece::new(color, id)),
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn pieces(&self) -> &[Piece; 4] {
        &self.pieces
    }

    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    /// All four pieces have reached the center.
    #[must_use]
    pub fn has_finished(&self) -> bool {
        self.pieces.iter().all(Piece::is_finished)
    }

    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.is_finished()).count()
    }

    /// Active pieces standing on a ring cell.
    pub fn pieces_on(&self, cell: Cell) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.main_cell() == Some(cell))
    }
}
