use crate::chess::{Delta, BISHOP_DELTAS, KING_DELTAS, KNIGHT_DELTAS, QUEEN_DELTAS, ROOK_DELTAS};
use crate::util::Integer;
use derive_more::Display;

/// The type of a chess [`Piece`][`crate::chess::Piece`].
///
/// Unoccupied squares hold a piece of the role [`Role::Empty`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Role {
    #[display(fmt = "empty")]
    Empty,
    #[display(fmt = "pawn")]
    Pawn,
    #[display(fmt = "rook")]
    Rook,
    #[display(fmt = "knight")]
    Knight,
    #[display(fmt = "bishop")]
    Bishop,
    #[display(fmt = "queen")]
    Queen,
    #[display(fmt = "king")]
    King,
}

impl Role {
    /// The fixed set of moves available to this role.
    ///
    /// Pawns depend on their circumstances, so their set is empty here.
    #[inline(always)]
    pub fn deltas(&self) -> &'static [Delta] {
        match self {
            Role::Empty | Role::Pawn => &[],
            Role::Rook => &ROOK_DELTAS,
            Role::Knight => &KNIGHT_DELTAS,
            Role::Bishop => &BISHOP_DELTAS,
            Role::Queen => &QUEEN_DELTAS,
            Role::King => &KING_DELTAS,
        }
    }
}

unsafe impl Integer for Role {
    type Repr = u8;
    const MIN: Self::Repr = Role::Empty as _;
    const MAX: Self::Repr = Role::King as _;
}
