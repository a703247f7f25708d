//! Klotski core crate - fundamental types for sliding-block puzzles.

mod board;
mod geometry;
mod moves;
mod piece;

pub use board::Board;
pub use geometry::{Coord, Footprint, Rect};
pub use moves::{Axis, Slide};
pub use piece::{Piece, PieceId};
