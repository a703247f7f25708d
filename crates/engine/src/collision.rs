//! collision detection - candidate footprint against every other piece

use klotski_core::{Board, Coord, Footprint, PieceId};

/// First piece (in id order) whose footprint overlaps the candidate.
/// `moving` is skipped so a piece never collides with its own old position.
#[inline]
pub fn blocker(
    board: &Board,
    moving: PieceId,
    candidate: Coord,
    footprint: Footprint,
) -> Option<PieceId> {
    let rect = footprint.at(candidate);
    board
        .pieces()
        .filter(|&other| other != moving)
        .find(|&other| rect.overlaps(&board.rect_of(other)))
}

/// does the candidate footprint overlap any other piece?
#[inline(always)]
pub fn is_blocked(board: &Board, moving: PieceId, candidate: Coord, footprint: Footprint) -> bool {
    blocker(board, moving, candidate, footprint).is_some()
}

/// can the piece sit here? in bounds and unobstructed
pub fn can_place(board: &Board, piece: PieceId, candidate: Coord) -> bool {
    let footprint = board.footprint_of(piece);
    footprint
        .at(candidate)
        .fits_within(board.width(), board.height())
        && !is_blocked(board, piece, candidate, footprint)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(pieces: &[(Footprint, Coord)]) -> Board {
        let mut board = Board::new(4, 5);
        for (i, &(fp, at)) in pieces.iter().enumerate() {
            board.add_piece(format!("p{i}"), fp, at);
        }
        board
    }

    #[test]
    fn test_empty_neighbourhood() {
        let board = board_with(&[(Footprint::UNIT, Coord::new(0, 0))]);
        assert!(!is_blocked(&board, PieceId(0), Coord::new(3, 4), Footprint::UNIT));
    }

    #[test]
    fn test_own_position_is_not_an_obstacle() {
        let board = board_with(&[(Footprint::new(2, 2), Coord::new(1, 0))]);
        assert!(!is_blocked(&board, PieceId(0), Coord::new(1, 1), Footprint::new(2, 2)));
    }

    #[test]
    fn test_partial_overlap_blocks() {
        let board = board_with(&[
            (Footprint::new(2, 2), Coord::new(1, 0)),
            (Footprint::UNIT, Coord::new(2, 3)),
        ]);
        // 2x2 at (1,2) covers (2,3) in its bottom-right cell
        assert_eq!(
            blocker(&board, PieceId(0), Coord::new(1, 2), Footprint::new(2, 2)),
            Some(PieceId(1))
        );
    }

    #[test]
    fn test_first_blocker_in_id_order() {
        let board = board_with(&[
            (Footprint::UNIT, Coord::new(0, 4)),
            (Footprint::UNIT, Coord::new(1, 0)),
            (Footprint::UNIT, Coord::new(2, 0)),
        ]);
        assert_eq!(
            blocker(&board, PieceId(0), Coord::new(1, 0), Footprint::new(2, 1)),
            Some(PieceId(1))
        );
    }

    #[test]
    fn test_can_place_checks_bounds() {
        let board = board_with(&[(Footprint::new(1, 2), Coord::new(3, 0))]);
        assert!(can_place(&board, PieceId(0), Coord::new(3, 3)));
        assert!(!can_place(&board, PieceId(0), Coord::new(3, 4)));
        assert!(!can_place(&board, PieceId(0), Coord::new(-1, 0)));
    }
}
