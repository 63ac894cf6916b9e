use warships::{
    heatmap, hottest, Board, Bot, CellState, EngineError, Fleet, HuntTargeter, Point, ShotResult,
    TargeterMode,
};

fn p(row: usize, col: usize) -> Point {
    Point::new(row, col).unwrap()
}

#[test]
fn test_initial_mode_is_hunting() {
    let targeter = HuntTargeter::new();
    assert_eq!(targeter.mode(), TargeterMode::Hunting);
}

#[test]
fn test_hunting_recommend_is_heatmap_argmax() {
    let board = Board::new();
    let fleet = Fleet::full();
    let mut targeter = HuntTargeter::new();
    let expected = hottest(&board, &heatmap(&board, &fleet)).unwrap();
    assert_eq!(targeter.recommend(&board, &fleet).unwrap(), expected);
}

#[test]
fn test_corner_hit_enqueues_in_range_neighbors() {
    // scenario: empty board, full fleet, firing (0,0) reports a hit on a
    // 2-cell ship lying at (0,0)-(0,1)
    let mut board = Board::new();
    let fleet = Fleet::full();
    let mut targeter = HuntTargeter::new();

    board.set(p(0, 0), CellState::Hit);
    targeter.on_hit(&board, p(0, 0));
    assert_eq!(targeter.mode(), TargeterMode::Targeting);

    let follow_up = targeter.recommend(&board, &fleet).unwrap();
    assert!(
        follow_up == p(0, 1) || follow_up == p(1, 0),
        "expected a queued neighbor, got {follow_up:?}"
    );
    assert_eq!(targeter.mode(), TargeterMode::Targeting);
}

#[test]
fn test_queue_skips_cells_no_longer_empty() {
    let mut board = Board::new();
    let fleet = Fleet::full();
    let mut targeter = HuntTargeter::new();

    board.set(p(4, 4), CellState::Hit);
    targeter.on_hit(&board, p(4, 4));
    // everything queued around the hit gets excluded before the next turn
    for n in [p(3, 4), p(5, 4), p(4, 3), p(4, 5)] {
        board.set(n, CellState::Miss);
    }

    let rec = targeter.recommend(&board, &fleet).unwrap();
    assert_eq!(targeter.mode(), TargeterMode::Hunting);
    assert_eq!(board.cell(rec), CellState::Empty);
}

#[test]
fn test_on_sunk_clears_queue() {
    let mut board = Board::new();
    let fleet = Fleet::full();
    let mut targeter = HuntTargeter::new();

    board.set(p(4, 4), CellState::Hit);
    targeter.on_hit(&board, p(4, 4));
    targeter.on_sunk();
    assert_eq!(targeter.mode(), TargeterMode::Hunting);

    let expected = hottest(&board, &heatmap(&board, &fleet)).unwrap();
    assert_eq!(targeter.recommend(&board, &fleet).unwrap(), expected);
}

#[test]
fn test_recommend_on_exhausted_board_errors() {
    let mut board = Board::new();
    for point in Board::points() {
        board.set(point, CellState::Miss);
    }
    let mut targeter = HuntTargeter::new();
    assert_eq!(
        targeter.recommend(&board, &Fleet::full()).unwrap_err(),
        EngineError::ExhaustedBoard
    );
}

#[test]
fn test_bot_two_shot_sink_scenario() {
    // full walk-through: hit (0,0), follow up, sink the 2-ship at (0,1)
    let mut bot = Bot::new();

    bot.apply_shot(p(0, 0), ShotResult::Hit);
    assert_eq!(bot.mode(), TargeterMode::Targeting);
    let follow_up = bot.recommend().unwrap();
    assert!(follow_up == p(0, 1) || follow_up == p(1, 0));

    bot.apply_shot(p(0, 1), ShotResult::Sunk);
    assert_eq!(bot.mode(), TargeterMode::Hunting);

    // the resolved 2-ship is excluded and struck off the fleet
    assert_eq!(bot.fleet().remaining(2), 2);
    for n in [p(1, 0), p(1, 1), p(0, 2), p(1, 2)] {
        assert_eq!(bot.board().cell(n), CellState::Miss);
    }
    assert_eq!(bot.board().cell(p(0, 0)), CellState::Hit);
    assert_eq!(bot.board().cell(p(0, 1)), CellState::Hit);

    // back to hunting over the updated board and fleet
    let expected = hottest(bot.board(), &heatmap(bot.board(), bot.fleet())).unwrap();
    assert_eq!(bot.recommend().unwrap(), expected);
}

#[test]
fn test_bot_accuracy_tracking() {
    let mut bot = Bot::new();
    assert_eq!(bot.accuracy(), 0.0);
    bot.apply_shot(p(0, 0), ShotResult::Hit);
    bot.apply_shot(p(5, 5), ShotResult::Miss);
    assert_eq!(bot.shots(), 2);
    assert_eq!(bot.accuracy(), 50.0);
}

#[test]
fn test_bot_single_cell_sunk() {
    let mut bot = Bot::new();
    bot.apply_shot(p(9, 9), ShotResult::Sunk);
    assert_eq!(bot.fleet().remaining(1), 3);
    assert_eq!(bot.board().cell(p(8, 8)), CellState::Miss);
    assert_eq!(bot.board().cell(p(8, 9)), CellState::Miss);
    assert_eq!(bot.board().cell(p(9, 8)), CellState::Miss);
    assert_eq!(bot.mode(), TargeterMode::Hunting);
}
