//! Pointer drag -> grid cell translation for the browser front end.
//!
//! The session only ever sees whole cells. While the pointer moves, the piece
//! follows the dominant axis and the other axis stays frozen at its start;
//! on release the locked pixel offset snaps to the nearest cell.

use klotski_core::Coord;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragConfig {
    /// Edge length of one grid cell in CSS pixels.
    pub cell_size_px: f64,
    /// Horizontal wins when `|dx| > dominance * |dy|`; 1.0 means plain "larger wins".
    pub dominance: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            cell_size_px: 80.0,
            dominance: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Grab {
    pointer: (f64, f64),
    origin_px: (f64, f64),
}

#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    config: DragConfig,
    grab: Option<Grab>,
}

impl DragTracker {
    pub fn new(config: DragConfig) -> Self {
        Self { config, grab: None }
    }

    pub fn config(&self) -> DragConfig {
        self.config
    }

    pub fn is_active(&self) -> bool {
        self.grab.is_some()
    }

    /// Pointer went down on a piece whose top-left is at `origin_px`.
    pub fn begin(&mut self, pointer: (f64, f64), origin_px: (f64, f64)) {
        self.grab = Some(Grab { pointer, origin_px });
    }

    /// Where to draw the piece for the current pointer, axis-locked.
    /// `None` when no drag is active.
    pub fn offset(&self, pointer: (f64, f64)) -> Option<(f64, f64)> {
        let grab = self.grab?;
        let dx = pointer.0 - grab.pointer.0;
        let dy = pointer.1 - grab.pointer.1;
        let (ox, oy) = grab.origin_px;
        if dx.abs() > self.config.dominance * dy.abs() {
            Some((ox + dx, oy))
        } else {
            Some((ox, oy + dy))
        }
    }

    /// Pointer released: end the drag and return the nearest cell for the
    /// locked position.
    pub fn release(&mut self, pointer: (f64, f64)) -> Option<Coord> {
        let (left, top) = self.offset(pointer)?;
        self.grab = None;
        Some(Coord::new(self.snap(left), self.snap(top)))
    }

    /// Abandon the drag without producing a target.
    pub fn cancel(&mut self) {
        self.grab = None;
    }

    /// Top-left pixel position of a cell.
    pub fn cell_origin_px(&self, cell: Coord) -> (f64, f64) {
        (
            cell.col as f64 * self.config.cell_size_px,
            cell.row as f64 * self.config.cell_size_px,
        )
    }

    fn snap(&self, px: f64) -> i8 {
        let cell = (px / self.config.cell_size_px).round();
        cell.clamp(i8::MIN as f64, i8::MAX as f64) as i8
    }
}
