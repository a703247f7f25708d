use std::collections::VecDeque;

use klotski_core::{Board, Coord, Footprint, PieceId};
use klotski_engine::{
    generate_all_slides, legal_destinations, validate, GameSession, RejectReason, SessionEvent,
};
use rustc_hash::FxHashSet;

/// Breadth-first walk of every state reachable from the classic layout in at
/// most `depth` accepted moves, driving each move through the session.
fn explore(depth: usize, mut visit: impl FnMut(&GameSession)) -> usize {
    let root = GameSession::classic();
    let mut seen: FxHashSet<Vec<Coord>> = FxHashSet::default();
    let mut queue = VecDeque::new();
    seen.insert(root.board().positions());
    queue.push_back((root, 0));

    while let Some((session, d)) = queue.pop_front() {
        visit(&session);
        if d == depth {
            continue;
        }
        for slide in generate_all_slides(session.board()) {
            let mut next = session.clone();
            assert!(next.on_move_begin(slide.piece));
            let events = next.on_move_end(slide.to);
            assert!(
                !events
                    .iter()
                    .any(|e| matches!(e, SessionEvent::Reverted { .. })),
                "generated slide {slide:?} was rejected on\n{}",
                session.board()
            );
            if seen.insert(next.board().positions()) {
                queue.push_back((next, d + 1));
            }
        }
    }
    seen.len()
}

fn assert_board_invariants(board: &Board) {
    let ids: Vec<PieceId> = board.pieces().collect();
    for &a in &ids {
        assert!(
            board.rect_of(a).fits_within(board.width(), board.height()),
            "{} out of bounds on\n{board}",
            board.name_of(a)
        );
        for &b in &ids {
            if a < b {
                assert!(
                    !board.rect_of(a).overlaps(&board.rect_of(b)),
                    "{} overlaps {} on\n{board}",
                    board.name_of(a),
                    board.name_of(b)
                );
            }
        }
    }
}

#[test]
fn test_reachable_states_keep_bounds_and_disjointness() {
    let initial = GameSession::classic().board().clone();
    let mut visited = 0;
    let states = explore(8, |session| {
        visited += 1;
        let board = session.board();
        assert_board_invariants(board);
        assert_eq!(board.len(), initial.len());
        for id in board.pieces() {
            assert_eq!(board.footprint_of(id), initial.footprint_of(id));
        }
        let covered: i32 = board.pieces().map(|id| board.footprint_of(id).area()).sum();
        assert_eq!(covered, 18);
    });
    assert_eq!(visited, states);
    assert!(states > 10, "exploration too shallow: {states}");
}

#[test]
fn test_move_count_equals_depth_along_any_path() {
    let mut session = GameSession::classic();
    // walk a fixed pseudo-random path, always taking an available slide
    for step in 0..40u32 {
        let slides = generate_all_slides(session.board());
        assert!(!slides.is_empty());
        let slide = slides[(step as usize * 7 + 3) % slides.len()];
        session.on_move_begin(slide.piece);
        session.on_move_end(slide.to);
        assert_eq!(session.move_count(), step + 1);
        assert_board_invariants(session.board());
    }
}

#[test]
fn test_every_representable_target_keeps_pieces_on_the_board() {
    let mut session = GameSession::classic();
    let guard4 = session.board().id_of("guard4").unwrap();
    let legal = legal_destinations(session.board(), guard4);
    let mut accepted = 0;

    for col in i8::MIN..=i8::MAX {
        for row in i8::MIN..=i8::MAX {
            let target = Coord::new(col, row);
            assert!(session.on_move_begin(guard4));
            let events = session.on_move_end(target);
            match events.first() {
                Some(SessionEvent::Reverted { reason, .. }) => {
                    assert!(!legal.contains(&target), "{target} refused: {reason}");
                    if !(0..4).contains(&col) || !(0..5).contains(&row) {
                        assert_eq!(*reason, RejectReason::OutOfBounds { target });
                    }
                }
                _ => {
                    accepted += 1;
                    assert!(legal.contains(&target), "{target} accepted");
                    assert_board_invariants(session.board());
                    session.on_reset();
                }
            }
        }
    }
    assert_eq!(accepted, legal.len());
    assert_eq!(session.move_count(), 0);
}

#[test]
fn test_legal_destinations_agree_with_validator() {
    let session = GameSession::classic();
    let board = session.board();
    for piece in board.pieces() {
        let start = board.position_of(piece);
        let legal = legal_destinations(board, piece);
        for col in -1..=board.width() {
            for row in -1..=board.height() {
                let target = Coord::new(col, row);
                let accepted = validate(board, piece, start, target).is_ok();
                assert_eq!(
                    accepted,
                    legal.contains(&target),
                    "{} to {target}",
                    board.name_of(piece)
                );
            }
        }
    }
}

#[test]
fn test_no_op_rejected_for_every_piece_and_fitting_cell() {
    let mut board = GameSession::classic().board().clone();
    for piece in board.pieces().collect::<Vec<_>>() {
        let Footprint { width, height } = board.footprint_of(piece);
        for col in 0..=board.width() - width {
            for row in 0..=board.height() - height {
                let cell = Coord::new(col, row);
                board.set_position(piece, cell);
                assert_eq!(
                    validate(&board, piece, cell, cell),
                    Err(RejectReason::NoDisplacement)
                );
            }
        }
    }
}

#[test]
fn test_diagonal_from_two_two() {
    // footprints that still fit at (3,3), so bounds do not answer first
    for fp in [Footprint::UNIT, Footprint::new(1, 2)] {
        let mut board = Board::new(4, 5);
        let p = board.add_piece("p", fp, Coord::new(2, 2));
        assert_eq!(
            validate(&board, p, Coord::new(2, 2), Coord::new(3, 3)).map_err(|e| e.tag()),
            Err("invalid_axis")
        );
    }
}

#[test]
fn test_jump_over_single_obstacle_is_blocked() {
    let mut board = Board::new(4, 5);
    let piece = board.add_piece("piece", Footprint::UNIT, Coord::new(0, 0));
    let obstacle = board.add_piece("obstacle", Footprint::UNIT, Coord::new(1, 0));
    assert_eq!(board.occupant(Coord::new(2, 0)), None);
    assert_eq!(
        validate(&board, piece, Coord::new(0, 0), Coord::new(2, 0)),
        Err(RejectReason::PathBlocked {
            at: Coord::new(1, 0),
            by: obstacle,
        })
    );
}
