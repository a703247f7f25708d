//! Slide and axis definitions.

use serde::{Deserialize, Serialize};

use crate::{Coord, PieceId};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// An accepted straight-line move of one piece.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Slide {
    pub piece: PieceId,
    pub from: Coord,
    pub to: Coord,
}

impl Slide {
    pub fn new(piece: PieceId, from: Coord, to: Coord) -> Self {
        Self { piece, from, to }
    }

    /// Axis of travel. Only meaningful for single-axis slides.
    pub fn axis(&self) -> Axis {
        if self.from.row == self.to.row {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Cells travelled.
    pub fn distance(&self) -> u8 {
        let d = self.to - self.from;
        (d.col.unsigned_abs()).max(d.row.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_axis_and_distance() {
        let s = Slide::new(PieceId(0), Coord::new(1, 0), Coord::new(1, 3));
        assert_eq!(s.axis(), Axis::Vertical);
        assert_eq!(s.distance(), 3);

        let s = Slide::new(PieceId(4), Coord::new(3, 4), Coord::new(1, 4));
        assert_eq!(s.axis(), Axis::Horizontal);
        assert_eq!(s.distance(), 2);
    }
}
