//! Piece identity and per-piece board entries.

use serde::{Deserialize, Serialize};

use crate::{Coord, Footprint, Rect};

/// Dense index of a piece on its board, assigned in insertion order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece as stored on the board: name and footprint are fixed, position moves.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    pub name: String,
    pub footprint: Footprint,
    pub position: Coord,
}

impl Piece {
    pub fn new(name: impl Into<String>, footprint: Footprint, position: Coord) -> Self {
        Self {
            name: name.into(),
            footprint,
            position,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.footprint.at(self.position)
    }

    /// Glyph used by the board's text rendering.
    pub fn glyph(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_follows_position() {
        let mut p = Piece::new("bantou", Footprint::new(2, 1), Coord::new(1, 2));
        assert_eq!(p.rect().right(), 3);
        p.position = Coord::new(2, 4);
        assert_eq!(p.rect().left(), 2);
        assert_eq!(p.rect().bottom(), 5);
    }

    #[test]
    fn test_glyph() {
        let p = Piece::new("daughter", Footprint::new(2, 2), Coord::ORIGIN);
        assert_eq!(p.glyph(), 'D');
        assert_eq!(PieceId(3).to_string(), "#3");
    }
}
