use warships::{fits, heatmap, hottest, shapes, Board, CellState, Fleet, Point, BOARD_SIZE};

fn p(row: usize, col: usize) -> Point {
    Point::new(row, col).unwrap()
}

#[test]
fn test_heatmap_empty_board_symmetric() {
    let map = heatmap(&Board::new(), &Fleet::full());
    // the catalog is closed under rotation and reflection, so the map on an
    // empty board must be symmetric under transposition
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            assert_eq!(map[row][col], map[col][row]);
            assert_eq!(map[row][col], map[BOARD_SIZE - 1 - row][BOARD_SIZE - 1 - col]);
        }
    }
    // corners admit fewer placements than the center
    assert!(map[0][0] < map[4][4]);
    assert!(map[0][0] > 0);
}

#[test]
fn test_heatmap_zero_on_non_empty_cells() {
    let mut board = Board::new();
    board.set(p(3, 3), CellState::Miss);
    board.set(p(6, 6), CellState::Hit);
    let map = heatmap(&board, &Fleet::full());
    assert_eq!(map[3][3], 0);
    assert_eq!(map[6][6], 0);
}

#[test]
fn test_heatmap_counts_single_cell_ship() {
    // only single-cell ships left: every empty cell hosts exactly one
    // placement, so every counter is 1
    let mut board = Board::new();
    board.set(p(0, 0), CellState::Miss);
    let map = heatmap(&board, &Fleet::single(1, 4));
    assert_eq!(map[0][0], 0);
    for point in Board::points().skip(1) {
        assert_eq!(map[point.row][point.col], 1);
    }
}

#[test]
fn test_heatmap_hand_computed_corner() {
    // length-2 ships only: a corner cell is covered by one horizontal and
    // one vertical placement
    let map = heatmap(&Board::new(), &Fleet::single(2, 3));
    assert_eq!(map[0][0], 2);
    // an interior cell is covered by two horizontal and two vertical ones
    assert_eq!(map[4][4], 4);
}

#[test]
fn test_heatmap_ignores_count_beyond_first() {
    // the independent-sum approximation only asks whether a length remains
    let board = Board::new();
    assert_eq!(
        heatmap(&board, &Fleet::single(2, 3)),
        heatmap(&board, &Fleet::single(2, 1))
    );
}

#[test]
fn test_heatmap_additive_over_lengths() {
    let mut board = Board::new();
    board.set(p(2, 2), CellState::Miss);
    board.set(p(5, 1), CellState::Miss);
    board.set(p(7, 8), CellState::Hit);

    let combined = heatmap(&board, &Fleet::full());
    let mut summed = [[0u32; BOARD_SIZE]; BOARD_SIZE];
    for length in 1..=4 {
        let single = heatmap(&board, &Fleet::single(length, 1));
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                summed[row][col] += single[row][col];
            }
        }
    }
    assert_eq!(combined, summed);
}

#[test]
fn test_hottest_prefers_scan_order_on_ties() {
    // no ships fit anywhere: all weights zero, argmax falls back to the
    // first empty cell in row-major order
    let mut board = Board::new();
    for point in Board::points() {
        board.set(point, CellState::Miss);
    }
    board.set(p(3, 7), CellState::Empty);
    board.set(p(5, 2), CellState::Empty);

    let map = heatmap(&board, &Fleet::single(4, 1));
    assert_eq!(hottest(&board, &map), Some(p(3, 7)));
}

#[test]
fn test_hottest_none_on_exhausted_board() {
    let mut board = Board::new();
    for point in Board::points() {
        board.set(point, CellState::Miss);
    }
    let map = heatmap(&board, &Fleet::full());
    assert_eq!(hottest(&board, &map), None);
}

#[test]
fn test_fits_respects_bounds_and_occupancy() {
    let mut board = Board::new();
    board.set(p(0, 2), CellState::Miss);
    let horizontal3 = shapes(3)[1];
    assert_eq!(horizontal3, &[(0, 0), (0, 1), (0, 2)]);

    assert!(!fits(horizontal3, &board, p(0, 0)), "covers a miss");
    assert!(fits(horizontal3, &board, p(1, 0)));
    assert!(!fits(horizontal3, &board, p(1, 8)), "leaves the grid");
    assert!(fits(horizontal3, &board, p(1, 7)));
}
