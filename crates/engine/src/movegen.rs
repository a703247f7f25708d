//! Legal destination listing for a single piece (drop hints, state exploration).

use klotski_core::{Board, Coord, PieceId, Slide};

use crate::validate::validate;

/// Unit steps in scan order: left, right, up, down.
pub const DIRECTIONS: [Coord; 4] = [
    Coord { col: -1, row: 0 },
    Coord { col: 1, row: 0 },
    Coord { col: 0, row: -1 },
    Coord { col: 0, row: 1 },
];

/// Every target the validator accepts from the piece's current cell.
/// Per direction, nearest first; a direction stops at its first rejection
/// since everything beyond it shares the blocked prefix.
pub fn legal_destinations(board: &Board, piece: PieceId) -> Vec<Coord> {
    generate_slides(board, piece)
        .into_iter()
        .map(|slide| slide.to)
        .collect()
}

/// Same as [`legal_destinations`] but returns full slides.
pub fn generate_slides(board: &Board, piece: PieceId) -> Vec<Slide> {
    let start = board.position_of(piece);
    let mut slides = Vec::new();

    for step in DIRECTIONS {
        let mut target = start + step;
        while let Ok(slide) = validate(board, piece, start, target) {
            slides.push(slide);
            target = target + step;
        }
    }

    slides
}

/// Slides for every piece on the board, in id order.
pub fn generate_all_slides(board: &Board) -> Vec<Slide> {
    board
        .pieces()
        .flat_map(|piece| generate_slides(board, piece))
        .collect()
}
