//! Board tests - placement, queries and row clearing through the public API

use blockfall::core::{Board, BoardError};
use blockfall::types::{Block, ShapeType, BOARD_COLS, BOARD_HEIGHT, BOARD_ROWS, BOARD_WIDTH};

fn block(kind: ShapeType) -> Block {
    Block::from(kind)
}

/// Fill row `y` except the listed columns.
fn fill_row(board: &mut Board, y: i8, gaps: &[i8]) {
    for x in 0..BOARD_WIDTH as i8 {
        if !gaps.contains(&x) {
            board.place(&[(x, y)], block(ShapeType::O)).unwrap();
        }
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_inside((x, y)), "({}, {}) should be inside", x, y);
            assert_eq!(board.is_occupied((x, y)), Ok(false));
        }
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_is_inside_edges() {
    let board = Board::new();
    assert!(board.is_inside((0, 0)));
    assert!(board.is_inside((9, 19)));
    assert!(!board.is_inside((-1, 0)));
    assert!(!board.is_inside((0, -1)));
    assert!(!board.is_inside((10, 0)));
    assert!(!board.is_inside((0, 20)));
}

#[test]
fn test_is_occupied_out_of_bounds() {
    let board = Board::new();
    assert_eq!(
        board.is_occupied((10, 3)),
        Err(BoardError::OutOfBounds { x: 10, y: 3 })
    );
    assert!(board.is_occupied((0, -1)).is_err());
}

#[test]
fn test_place_and_query() {
    let mut board = Board::new();
    let cells = [(4, 18), (5, 18), (4, 19), (5, 19)];

    assert!(board.can_place(&cells));
    board.place(&cells, block(ShapeType::O)).unwrap();

    for pos in cells {
        assert_eq!(board.is_occupied(pos), Ok(true));
        assert_eq!(board.get(pos), Some(Some(block(ShapeType::O))));
    }
    assert!(!board.can_place(&cells));
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_place_is_all_or_nothing() {
    let mut board = Board::new();
    board.place(&[(0, 19)], block(ShapeType::T)).unwrap();

    let err = board
        .place(&[(1, 19), (0, 19)], block(ShapeType::L))
        .unwrap_err();
    assert_eq!(err, BoardError::Occupied { x: 0, y: 19 });
    assert_eq!(board.is_occupied((1, 19)), Ok(false));

    assert!(board.place(&[(2, 19), (2, 20)], block(ShapeType::L)).is_err());
    assert_eq!(board.is_occupied((2, 19)), Ok(false));
}

#[test]
fn test_can_place_rejects_outside() {
    let board = Board::new();
    assert!(!board.can_place(&[(0, 0), (-1, 0)]));
    assert!(!board.can_place(&[(9, 20)]));
}

#[test]
fn test_full_rows_detection() {
    let mut board = Board::new();
    fill_row(&mut board, 19, &[]);
    fill_row(&mut board, 17, &[]);
    fill_row(&mut board, 18, &[4]);

    assert_eq!(board.full_rows().as_slice(), &[17, 19]);
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(18));
    assert!(!board.is_row_full(BOARD_ROWS));
}

#[test]
fn test_clear_rows_shifts_down() {
    let mut board = Board::new();
    fill_row(&mut board, 19, &[]);
    board.place(&[(3, 18)], block(ShapeType::S)).unwrap();
    board.place(&[(7, 10)], block(ShapeType::Z)).unwrap();

    let full = board.full_rows();
    board.clear_rows(&full);

    assert_eq!(board.get((3, 19)), Some(Some(block(ShapeType::S))));
    assert_eq!(board.get((7, 11)), Some(Some(block(ShapeType::Z))));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_non_contiguous_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 19, &[]);
    fill_row(&mut board, 18, &[0]);
    fill_row(&mut board, 17, &[]);
    board.place(&[(5, 16)], block(ShapeType::J)).unwrap();

    let full = board.full_rows();
    assert_eq!(full.as_slice(), &[17, 19]);
    board.clear_rows(&full);

    // The gapped row drops by one, the marker above it by two.
    assert_eq!(board.full_rows().len(), 0);
    assert_eq!(board.is_occupied((0, 19)), Ok(false));
    assert_eq!(board.is_occupied((1, 19)), Ok(true));
    assert_eq!(board.get((5, 18)), Some(Some(block(ShapeType::J))));
    for y in 0..=18 {
        for x in 0..BOARD_WIDTH as i8 {
            if (x, y) != (5, 18) {
                assert_eq!(board.is_occupied((x, y)), Ok(false), "({}, {})", x, y);
            }
        }
    }
}

#[test]
fn test_clearing_preserves_other_cells() {
    // Deterministic pseudo-random boards: after clearing, no full rows remain
    // and exactly the cleared rows' cells are gone.
    let mut seed = 0x1234_5678u32;
    let mut next = || {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seed >> 16
    };

    for _ in 0..50 {
        let mut board = Board::new();
        for y in 0..BOARD_ROWS as i8 {
            let full = next() % 3 == 0;
            for x in 0..BOARD_COLS as i8 {
                if full || next() % 2 == 0 {
                    board.place(&[(x, y)], block(ShapeType::I)).unwrap();
                }
            }
        }

        let before = board.occupied_count();
        let full = board.full_rows();
        board.clear_rows(&full);

        assert!(board.full_rows().is_empty());
        assert_eq!(board.occupied_count(), before - full.len() * BOARD_COLS);
    }
}

#[test]
fn test_clear_ignores_out_of_range() {
    let mut board = Board::new();
    board.place(&[(2, 19)], block(ShapeType::T)).unwrap();
    board.clear_rows(&[BOARD_ROWS, 99]);
    assert_eq!(board.is_occupied((2, 19)), Ok(true));
}
