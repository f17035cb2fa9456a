use crate::chess::{is_diagonal, path, Color, File, Piece, Rank, Role, Square};
use crate::util::Integer;
use derive_more::{Display, Error};
use std::fmt;
use std::{mem::replace, ops::Index};
use tracing::{debug, instrument, warn};

/// The reason why a [`Piece`] may not move to a given [`Square`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum IllegalMove {
    #[display(fmt = "your piece is there")]
    Occupied,
    #[display(fmt = "pawns cannot capture straight ahead")]
    PawnBlocked,
    #[display(fmt = "that move wasn't legal")]
    Unreachable,
    #[display(fmt = "there is another piece in the way")]
    Obstructed,
}

/// The reason why a [`Square`] may not be selected to move from.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum IllegalSelection {
    #[display(fmt = "that wasn't your piece")]
    NotYours,
    #[display(fmt = "no possible moves for that piece")]
    Immobile,
}

/// The chess board.
///
/// Every [`Square`] always holds exactly one [`Piece`], possibly [empty](`Piece::is_empty`).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board([Piece; 64]);

/// The standard starting layout.
impl Default for Board {
    fn default() -> Self {
        use Role::*;
        const BACK: [Role; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = Board::empty();
        for (f, &role) in File::iter().zip(&BACK) {
            board.place(role, Color::White, Square::new(f, Rank::First));
            board.place(Pawn, Color::White, Square::new(f, Rank::Second));
            board.place(Pawn, Color::Black, Square::new(f, Rank::Seventh));
            board.place(role, Color::Black, Square::new(f, Rank::Eighth));
        }

        board
    }
}

impl Board {
    /// A board where every [`Square`] is unoccupied.
    pub fn empty() -> Self {
        Board(std::array::from_fn(|i| Piece::empty(<Square as Integer>::new(i as _))))
    }

    /// Places a new [`Piece`] on a [`Square`], replacing whatever was there.
    pub fn place(&mut self, role: Role, color: Color, sq: Square) {
        self.0[sq.index()] = Piece::new(role, color, sq);
    }

    /// The [`Piece`] on the given [`Square`].
    #[inline(always)]
    pub fn piece_at(&self, sq: Square) -> &Piece {
        &self.0[sq.index()]
    }

    /// Whether the [`Piece`] on the given [`Square`] belongs to a side.
    #[inline(always)]
    pub fn is_occupied_by(&self, side: Color, sq: Square) -> bool {
        self[sq].color() == Some(side)
    }

    /// Whether `side` may move the [`Piece`] on `whence` to `whither`.
    ///
    /// Checks are made in order, the first to fail determines the [`IllegalMove`].
    /// Paths along diagonals are never traced, so pieces moving diagonally are never
    /// obstructed. Neither is the safety of either king ever considered.
    pub fn can_move(
        &self,
        side: Color,
        whence: Square,
        whither: Square,
    ) -> Result<(), IllegalMove> {
        let piece = &self[whence];
        let capture = !self[whither].is_empty();

        if self.is_occupied_by(side, whither) {
            Err(IllegalMove::Occupied)
        } else if self.is_pawn_blocked(whence, whither) {
            Err(IllegalMove::PawnBlocked)
        } else if !piece.is_shape_legal(whither, capture) {
            Err(IllegalMove::Unreachable)
        } else if self.is_obstructed(whence, whither) {
            Err(IllegalMove::Obstructed)
        } else {
            Ok(())
        }
    }

    /// Whether a pawn on `whence` would step straight onto an opposing piece on `whither`.
    fn is_pawn_blocked(&self, whence: Square, whither: Square) -> bool {
        let pawn = &self[whence];
        match (pawn.role(), pawn.color()) {
            (Role::Pawn, Some(side)) if whence.file() == whither.file() => {
                self.is_occupied_by(!side, whither)
            }
            _ => false,
        }
    }

    /// Whether any [`Square`] strictly between `whence` and `whither` is occupied.
    fn is_obstructed(&self, whence: Square, whither: Square) -> bool {
        if self[whence].role() == Role::Knight || is_diagonal(whence, whither) {
            return false;
        }

        match path(whence, whither) {
            Ok(p) => p.iter().skip(1).any(|&sq| !self[sq].is_empty()),
            Err(e) => {
                warn!(%e, "obstruction not checked");
                false
            }
        }
    }

    /// The [`Square`]s `side` may move the [`Piece`] on `whence` to.
    ///
    /// Nothing is yielded unless the piece on `whence` belongs to `side`.
    pub fn destinations(
        &self,
        side: Color,
        whence: Square,
    ) -> impl Iterator<Item = Square> + '_ {
        let owned = self.is_occupied_by(side, whence);
        Square::iter().filter(move |&whither| {
            owned && self.can_move(side, whence, whither).is_ok()
        })
    }

    /// Whether `side` may select the [`Piece`] on `whence` to move.
    pub fn can_select(&self, side: Color, whence: Square) -> Result<(), IllegalSelection> {
        if !self.is_occupied_by(side, whence) {
            Err(IllegalSelection::NotYours)
        } else if self.destinations(side, whence).next().is_none() {
            Err(IllegalSelection::Immobile)
        } else {
            Ok(())
        }
    }

    /// Moves the [`Piece`] on `whence` to `whither`, leaving `whence` unoccupied.
    ///
    /// Legality is not verified, see [`Board::can_move`].
    /// Returns the piece previously on `whither`, which is thereby captured.
    #[instrument(level = "trace", skip_all, fields(%whence, %whither))]
    pub fn apply_move(&mut self, whence: Square, whither: Square) -> Piece {
        let mut piece = replace(&mut self.0[whence.index()], Piece::empty(whence));
        piece.relocate(whither);

        debug!(%piece, %whence, %whither, "moving piece");
        let captured = replace(&mut self.0[whither.index()], piece);
        if !captured.is_empty() {
            debug!(%captured, "capturing piece");
        }

        captured
    }
}

/// Retrieves the [`Piece`] at a given [`Square`].
impl Index<Square> for Board {
    type Output = Piece;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        self.piece_at(sq)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = format!("  +{}", "--------------+".repeat(8));

        writeln!(f, "{rule}")?;
        for rank in Rank::iter().rev() {
            write!(f, "{rank} |")?;
            for file in File::iter() {
                let cell = self[Square::new(file, rank)].to_string();
                write!(f, " {cell:<12} |")?;
            }

            writeln!(f)?;
            writeln!(f, "{rule}")?;
        }

        write!(f, "  ")?;
        for file in File::iter() {
            write!(f, "       {file}       ")?;
        }

        Ok(())
    }
}
