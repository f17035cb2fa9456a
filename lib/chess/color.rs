use derive_more::{Display, Error};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::{ops::Not, str::FromStr};

/// The side a chess [`Piece`][`crate::chess::Piece`] plays for.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Color {
    /// The step along the y-axis of [`Square::coords`][`crate::chess::Square::coords`]
    /// that moves a piece of this color forward.
    #[inline(always)]
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl Not for Color {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Either side with equal probability.
impl Distribution<Color> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        if rng.gen() {
            Color::White
        } else {
            Color::Black
        }
    }
}

/// The reason why parsing [`Color`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse color, expected either `white` or `black`")]
pub struct ParseColorError;

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &*s.to_ascii_lowercase() {
            "white" => Ok(Color::White),
            "black" => Ok(Color::Black),
            _ => Err(ParseColorError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use test_strategy::proptest;

    #[proptest]
    fn color_implements_not_operator(c: Color) {
        assert_eq!(!!c, c);
        assert_ne!(!c, c);
    }

    #[proptest]
    fn opposite_colors_move_in_opposite_directions(c: Color) {
        assert_eq!(c.forward(), -(!c).forward());
    }

    #[test]
    fn white_moves_towards_the_eighth_rank() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
    }

    #[proptest]
    fn parsing_printed_color_is_an_identity(c: Color) {
        assert_eq!(c.to_string().parse(), Ok(c));
        assert_eq!(c.to_string().to_uppercase().parse(), Ok(c));
    }

    #[proptest]
    fn parsing_color_fails_if_neither_white_nor_black(
        #[filter(!["white", "black"].contains(&&*#s.to_ascii_lowercase()))] s: String,
    ) {
        assert_eq!(s.parse::<Color>(), Err(ParseColorError));
    }

    #[proptest]
    fn sampling_color_is_reproducible(seed: u64) {
        let a: Color = StdRng::seed_from_u64(seed).gen();
        let b: Color = StdRng::seed_from_u64(seed).gen();
        assert_eq!(a, b);
    }

    #[test]
    fn sampling_color_yields_both_sides() {
        let mut rng = StdRng::seed_from_u64(0);
        let colors: Vec<Color> = (0..64).map(|_| rng.gen()).collect();
        assert!(colors.contains(&Color::White));
        assert!(colors.contains(&Color::Black));
    }
}
