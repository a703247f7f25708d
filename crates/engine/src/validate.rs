//! Move validation: bounds, no-op, axis lock, then a cell-by-cell path scan.

use std::cmp::Ordering;

use klotski_core::{Board, Coord, PieceId, Slide};
use thiserror::Error;

use crate::collision::blocker;

/// Why a proposed move was turned down. The caller's response is the same for
/// every variant: the piece goes back to where it started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("target {target} puts the piece outside the board")]
    OutOfBounds { target: Coord },
    #[error("target equals the start cell")]
    NoDisplacement,
    #[error("move from {from} to {to} is not along a single axis")]
    InvalidAxis { from: Coord, to: Coord },
    #[error("path blocked at {at} by piece {by}")]
    PathBlocked { at: Coord, by: PieceId },
}

impl RejectReason {
    /// Short tag for logs and the wasm bridge.
    pub fn tag(&self) -> &'static str {
        match self {
            RejectReason::OutOfBounds { .. } => "out_of_bounds",
            RejectReason::NoDisplacement => "no_displacement",
            RejectReason::InvalidAxis { .. } => "invalid_axis",
            RejectReason::PathBlocked { .. } => "path_blocked",
        }
    }
}

/// Decide whether `piece` may slide from `start` to `target`.
///
/// `start` is the cell the move began from; every other piece is read from
/// `board`. Each intermediate step, and the target itself, is tested with the
/// piece's full footprint, so nothing can be jumped over.
///
/// `piece` must belong to `board`; a foreign id panics on lookup.
pub fn validate(
    board: &Board,
    piece: PieceId,
    start: Coord,
    target: Coord,
) -> Result<Slide, RejectReason> {
    debug_assert!(board.contains(piece), "piece {piece} is not on the board");
    let footprint = board.footprint_of(piece);

    if !footprint
        .at(target)
        .fits_within(board.width(), board.height())
    {
        return Err(RejectReason::OutOfBounds { target });
    }

    if target == start {
        return Err(RejectReason::NoDisplacement);
    }

    if target.col != start.col && target.row != start.row {
        return Err(RejectReason::InvalidAxis {
            from: start,
            to: target,
        });
    }

    // unit step toward the target, computed without subtraction
    let step = Coord::new(toward(start.col, target.col), toward(start.row, target.row));
    let mut at = start;
    while at != target {
        at = at + step;
        if let Some(by) = blocker(board, piece, at, footprint) {
            return Err(RejectReason::PathBlocked { at, by });
        }
    }

    Ok(Slide::new(piece, start, target))
}

#[inline]
fn toward(from: i8, to: i8) -> i8 {
    match to.cmp(&from) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
