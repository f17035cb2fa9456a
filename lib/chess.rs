mod board;
mod color;
mod delta;
mod file;
mod path;
mod piece;
mod rank;
mod role;
mod square;

pub use board::*;
pub use color::*;
pub use delta::*;
pub use file::*;
pub use path::*;
pub use piece::*;
pub use rank::*;
pub use role::*;
pub use square::*;
