//! board model - fixed grid dimensions plus the current position of every piece
//! pure store: no legality checks here, callers validate before `set_position`

use rustc_hash::FxHashMap;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::{Coord, Footprint, Piece, PieceId, Rect};

/// Sliding-block board. Pieces are indexed densely by [`PieceId`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    width: i8,
    height: i8,
    pieces: Vec<Piece>,
    by_name: FxHashMap<String, PieceId>,
}

impl Board {
    /// Classic Hakoiri Musume grid.
    pub const CLASSIC_WIDTH: i8 = 4;
    pub const CLASSIC_HEIGHT: i8 = 5;

    pub fn new(width: i8, height: i8) -> Self {
        Self {
            width,
            height,
            pieces: Vec::new(),
            by_name: FxHashMap::default(),
        }
    }

    /// Place a new piece. Construction-time only; nothing is checked.
    pub fn add_piece(
        &mut self,
        name: impl Into<String>,
        footprint: Footprint,
        position: Coord,
    ) -> PieceId {
        let id = PieceId(self.pieces.len() as u8);
        let piece = Piece::new(name, footprint, position);
        self.by_name.insert(piece.name.clone(), id);
        self.pieces.push(piece);
        id
    }

    #[inline(always)]
    pub fn width(&self) -> i8 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> i8 {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: PieceId) -> bool {
        id.index() < self.pieces.len()
    }

    /// All piece ids in ascending order.
    pub fn pieces(&self) -> impl Iterator<Item = PieceId> + '_ {
        (0..self.pieces.len()).map(|i| PieceId(i as u8))
    }

    /// Id-taking accessors panic for an id this board did not issue; check
    /// with [`Board::contains`] first when the id comes from outside.
    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    #[inline]
    pub fn position_of(&self, id: PieceId) -> Coord {
        self.pieces[id.index()].position
    }

    #[inline]
    pub fn footprint_of(&self, id: PieceId) -> Footprint {
        self.pieces[id.index()].footprint
    }

    #[inline]
    pub fn rect_of(&self, id: PieceId) -> Rect {
        self.pieces[id.index()].rect()
    }

    pub fn name_of(&self, id: PieceId) -> &str {
        &self.pieces[id.index()].name
    }

    pub fn id_of(&self, name: &str) -> Option<PieceId> {
        self.by_name.get(name).copied()
    }

    /// Unconditional write. Only the session calls this, after validation.
    #[inline]
    pub fn set_position(&mut self, id: PieceId, position: Coord) {
        self.pieces[id.index()].position = position;
    }

    /// Piece covering `cell`, if any. Lowest id wins on (invalid) overlap.
    pub fn occupant(&self, cell: Coord) -> Option<PieceId> {
        self.pieces().find(|&id| self.rect_of(id).contains(cell))
    }

    /// Positions of every piece, in id order.
    pub fn positions(&self) -> Vec<Coord> {
        self.pieces.iter().map(|p| p.position).collect()
    }
}

#[derive(Serialize)]
struct PieceView<'a> {
    name: &'a str,
    col: i8,
    row: i8,
    width: i8,
    height: i8,
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.pieces.len()))?;
        for p in &self.pieces {
            seq.serialize_element(&PieceView {
                name: &p.name,
                col: p.position.col,
                row: p.position.row,
                width: p.footprint.width,
                height: p.footprint.height,
            })?;
        }
        seq.end()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let glyph = match self.occupant(Coord::new(col, row)) {
                    Some(id) => self.piece(id).glyph(),
                    None => '.',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
