use crate::chess::{Delta, File, Rank};
use crate::util::Integer;
use derive_more::{Display, Error};
use std::{fmt, ops::Sub, str::FromStr};

/// A square on the chess board.
///
/// Besides its [`File`] and [`Rank`], a square is addressed by its board coordinates
/// `(x, y)`, where `x` counts files from `a` and `y` counts ranks downwards from the
/// eighth rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    #[inline(always)]
    pub fn new(f: File, r: Rank) -> Self {
        <Self as Integer>::new(f.get() | r.get() << 3)
    }

    /// Constructs [`Square`] from its board coordinates, if they lie within `[0, 8)`.
    #[inline(always)]
    pub fn from_coords(x: i8, y: i8) -> Option<Self> {
        let f = File::try_new(x)?;
        let r = Rank::try_new(Rank::MAX.checked_sub(y)?)?;
        Some(Square::new(f, r))
    }

    /// This square's [`File`].
    #[inline(always)]
    pub fn file(&self) -> File {
        File::new(self.get() & 0b111)
    }

    /// This square's [`Rank`].
    #[inline(always)]
    pub fn rank(&self) -> Rank {
        Rank::new(self.get() >> 3)
    }

    /// This square's board coordinates `(x, y)`.
    #[inline(always)]
    pub fn coords(&self) -> (i8, i8) {
        (self.file().get(), self.rank().flip().get())
    }

    /// This square's index into an array of 64 elements.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.get() as usize
    }
}

unsafe impl Integer for Square {
    type Repr = i8;
    const MIN: Self::Repr = Square::A1 as _;
    const MAX: Self::Repr = Square::H8 as _;
}

/// The [`Delta`] that leads from `rhs` to `self`, in board coordinates.
impl Sub for Square {
    type Output = Delta;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        let (x, y) = self.coords();
        let (u, v) = rhs.coords();
        Delta::new(x - u, y - v)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.file(), f)?;
        fmt::Display::fmt(&self.rank(), f)?;
        Ok(())
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "`{}` is not the name of a square", _0)]
pub struct InvalidSquareName(#[error(not(source))] pub String);

impl FromStr for Square {
    type Err = InvalidSquareName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let i = name.char_indices().nth(1).map_or(name.len(), |(i, _)| i);
        match (name[..i].parse(), name[i..].parse()) {
            (Ok(f), Ok(r)) => Ok(Square::new(f, r)),
            _ => Err(InvalidSquareName(s.to_string())),
        }
    }
}
