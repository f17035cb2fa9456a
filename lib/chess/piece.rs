use crate::chess::{Color, Delta, Role, Square};
use arrayvec::ArrayVec;
use std::fmt::{self, Display, Formatter};

/// A chess [piece][`Role`] of a certain [`Color`] standing on a [`Square`].
///
/// Every square of a [`Board`][`crate::chess::Board`] holds a piece, unoccupied squares
/// hold one of the role [`Role::Empty`], which is the only role that belongs to no side.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    role: Role,
    color: Option<Color>,
    origin: Square,
    square: Square,
    deltas: &'static [Delta],
}

impl Piece {
    /// Constructs the placeholder for an unoccupied [`Square`].
    #[inline(always)]
    pub fn empty(sq: Square) -> Self {
        Piece {
            role: Role::Empty,
            color: None,
            origin: sq,
            square: sq,
            deltas: Role::Empty.deltas(),
        }
    }

    /// Constructs [`Piece`] from a pair of [`Role`] and [`Color`] starting on a [`Square`].
    ///
    /// Constructing a piece of [`Role::Empty`] is equivalent to [`Piece::empty`].
    #[inline(always)]
    pub fn new(role: Role, color: Color, sq: Square) -> Self {
        match role {
            Role::Empty => Piece::empty(sq),
            _ => Piece {
                role,
                color: Some(color),
                origin: sq,
                square: sq,
                deltas: role.deltas(),
            },
        }
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.role
    }

    /// This piece's [`Color`], unless it's [empty](`Self::is_empty`).
    #[inline(always)]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// The [`Square`] this piece currently stands on.
    #[inline(always)]
    pub fn square(&self) -> Square {
        self.square
    }

    /// The [`Square`] this piece started from.
    #[inline(always)]
    pub fn origin(&self) -> Square {
        self.origin
    }

    /// Whether this piece is the placeholder of an unoccupied square.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.role == Role::Empty
    }

    /// Relocates this piece to another [`Square`].
    #[inline(always)]
    pub(crate) fn relocate(&mut self, sq: Square) {
        self.square = sq;
    }

    /// The moves available to this piece, from the point of view of its own side.
    ///
    /// Pawns may always step forward once, twice from their starting square, and diagonally
    /// forward only when capturing.
    pub fn deltas(&self, capture: bool) -> ArrayVec<Delta, 56> {
        match self.role {
            Role::Pawn => {
                let mut deltas = ArrayVec::new();
                deltas.push(Delta::new(0, 1));

                if self.square == self.origin {
                    deltas.push(Delta::new(0, 2));
                }

                if capture {
                    deltas.push(Delta::new(-1, 1));
                    deltas.push(Delta::new(1, 1));
                }

                deltas
            }

            _ => self.deltas.iter().copied().collect(),
        }
    }

    /// Whether this piece's geometry allows it to move to `whither`, ignoring obstructions.
    pub fn is_shape_legal(&self, whither: Square, capture: bool) -> bool {
        let Some(side) = self.color else {
            return false;
        };

        let delta = (whither - self.square).relative_to(side);
        self.deltas(capture).contains(&delta)
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.color {
            None => Ok(()),
            Some(c) => write!(f, "{}_{}", c, self.role),
        }
    }
}
