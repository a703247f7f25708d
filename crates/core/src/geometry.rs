//! Grid geometry - cell coordinates, footprints and half-open rectangles.
//! Origin is top-left; columns grow rightward, rows grow downward.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A grid cell. Signed so that off-board candidates stay representable.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub struct Coord {
    pub col: i8,
    pub row: i8,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { col: 0, row: 0 };

    #[inline]
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.col + rhs.col, self.row + rhs.row)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.col - rhs.col, self.row - rhs.row)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Size of a piece in whole cells. Fixed for the lifetime of a piece.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Footprint {
    pub width: i8,
    pub height: i8,
}

impl Footprint {
    pub const UNIT: Footprint = Footprint {
        width: 1,
        height: 1,
    };

    #[inline]
    pub const fn new(width: i8, height: i8) -> Self {
        Self { width, height }
    }

    /// Number of cells covered.
    pub fn area(self) -> i32 {
        self.width as i32 * self.height as i32
    }

    /// Rectangle covered when the top-left corner sits at `origin`.
    #[inline]
    pub fn at(self, origin: Coord) -> Rect {
        Rect {
            origin,
            footprint: self,
        }
    }
}

/// Half-open rectangle `[col, col+width) x [row, row+height)`.
///
/// Edges are widened to `i16` so a rectangle anchored anywhere in the `i8`
/// range has a representable far edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Rect {
    pub origin: Coord,
    pub footprint: Footprint,
}

impl Rect {
    #[inline]
    pub fn left(&self) -> i16 {
        i16::from(self.origin.col)
    }

    #[inline]
    pub fn top(&self) -> i16 {
        i16::from(self.origin.row)
    }

    #[inline]
    pub fn right(&self) -> i16 {
        self.left() + i16::from(self.footprint.width)
    }

    #[inline]
    pub fn bottom(&self) -> i16 {
        self.top() + i16::from(self.footprint.height)
    }

    /// Two rectangles overlap iff they overlap on both axes at once.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    #[inline]
    pub fn contains(&self, cell: Coord) -> bool {
        (self.left()..self.right()).contains(&i16::from(cell.col))
            && (self.top()..self.bottom()).contains(&i16::from(cell.row))
    }

    /// Lies entirely inside a `width x height` grid.
    #[inline]
    pub fn fits_within(&self, width: i8, height: i8) -> bool {
        self.left() >= 0
            && self.top() >= 0
            && self.right() <= i16::from(width)
            && self.bottom() <= i16::from(height)
    }

    /// Every covered cell, row-major. Cells past the `i8` range are skipped.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (self.top()..self.bottom()).flat_map(move |row| {
            (self.left()..self.right()).filter_map(move |col| {
                Some(Coord::new(i8::try_from(col).ok()?, i8::try_from(row).ok()?))
            })
        })
    }
}
