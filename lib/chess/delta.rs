use crate::chess::Color;
use derive_more::Display;

/// A displacement between two [`Square`][`crate::chess::Square`]s.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "({}, {})", dx, dy)]
pub struct Delta {
    pub dx: i8,
    pub dy: i8,
}

impl Delta {
    /// Constructs [`Delta`] from its components.
    #[inline(always)]
    pub const fn new(dx: i8, dy: i8) -> Self {
        Delta { dx, dy }
    }

    /// This delta as seen by the given side, so that moving forward is always `+dy`.
    #[inline(always)]
    pub fn relative_to(self, side: Color) -> Self {
        Delta::new(self.dx, self.dy * side.forward())
    }

    /// Whether this delta moves along a file or a rank.
    #[inline(always)]
    pub fn is_straight(&self) -> bool {
        (self.dx == 0) != (self.dy == 0)
    }

    /// Whether this delta moves along a diagonal.
    #[inline(always)]
    pub fn is_diagonal(&self) -> bool {
        self.dx != 0 && self.dx.abs() == self.dy.abs()
    }
}

const fn rays(directions: [Delta; 4]) -> [Delta; 28] {
    let mut deltas = [Delta::new(0, 0); 28];

    let mut i = 0;
    while i < 28 {
        let d = directions[i / 7];
        let n = (i % 7) as i8 + 1;
        deltas[i] = Delta::new(d.dx * n, d.dy * n);
        i += 1;
    }

    deltas
}

const fn union(a: [Delta; 28], b: [Delta; 28]) -> [Delta; 56] {
    let mut deltas = [Delta::new(0, 0); 56];

    let mut i = 0;
    while i < 28 {
        deltas[i] = a[i];
        deltas[28 + i] = b[i];
        i += 1;
    }

    deltas
}

const fn adjacent(deltas: [Delta; 56]) -> [Delta; 8] {
    let mut adjacent = [Delta::new(0, 0); 8];

    let (mut i, mut j) = (0, 0);
    while i < 56 {
        let d = deltas[i];
        if d.dx.abs() <= 1 && d.dy.abs() <= 1 {
            adjacent[j] = d;
            j += 1;
        }

        i += 1;
    }

    adjacent
}

/// Every straight move up to the edge of the board.
pub const ROOK_DELTAS: [Delta; 28] = rays([
    Delta::new(0, 1),
    Delta::new(0, -1),
    Delta::new(1, 0),
    Delta::new(-1, 0),
]);

/// Every diagonal move up to the edge of the board.
pub const BISHOP_DELTAS: [Delta; 28] = rays([
    Delta::new(1, 1),
    Delta::new(1, -1),
    Delta::new(-1, 1),
    Delta::new(-1, -1),
]);

/// The union of [`ROOK_DELTAS`] and [`BISHOP_DELTAS`].
pub const QUEEN_DELTAS: [Delta; 56] = union(BISHOP_DELTAS, ROOK_DELTAS);

/// The subset of [`QUEEN_DELTAS`] one step away.
pub const KING_DELTAS: [Delta; 8] = adjacent(QUEEN_DELTAS);

/// The L-shaped jumps, two squares one way and one square the other.
pub const KNIGHT_DELTAS: [Delta; 8] = [
    Delta::new(-1, 2),
    Delta::new(1, 2),
    Delta::new(-1, -2),
    Delta::new(1, -2),
    Delta::new(-2, 1),
    Delta::new(2, 1),
    Delta::new(-2, -1),
    Delta::new(2, -1),
];
