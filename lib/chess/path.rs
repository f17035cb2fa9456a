use crate::chess::Square;
use arrayvec::ArrayVec;
use derive_more::{Display, Error};

/// The [`Square`]s visited on the way from one square to another.
pub type Path = ArrayVec<Square, 8>;

/// The reason why tracing a [`Path`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "no straight path from `{}` to `{}`", _0, _1)]
pub struct UnsupportedPath(pub Square, pub Square);

/// Whether two squares share a file or a rank.
#[inline(always)]
pub fn is_straight(whence: Square, whither: Square) -> bool {
    (whither - whence).is_straight()
}

/// Whether two squares share a diagonal.
#[inline(always)]
pub fn is_diagonal(whence: Square, whither: Square) -> bool {
    (whither - whence).is_diagonal()
}

/// Traces the straight line from `whence` up to, but excluding, `whither`.
///
/// The path starts at `whence` itself and advances one square at a time.
/// Only files and ranks are traced, diagonals are rejected like any other pair.
pub fn path(whence: Square, whither: Square) -> Result<Path, UnsupportedPath> {
    let d = whither - whence;
    if d.dx != 0 && d.dy != 0 {
        return Err(UnsupportedPath(whence, whither));
    }

    let (x, y) = whence.coords();
    let (sx, sy) = (d.dx.signum(), d.dy.signum());
    let steps = d.dx.abs().max(d.dy.abs());

    Ok((0..steps)
        .filter_map(|n| Square::from_coords(x + n * sx, y + n * sy))
        .collect())
}
