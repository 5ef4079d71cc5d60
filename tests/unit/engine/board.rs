use super::*;

fn board(width: u32, height: u32) -> CellBoard {
    CellBoard::with_size(ComputeContext::new(), width, height).unwrap()
}

fn cell_data(width: u32, height: u32, alive: &[(u32, u32)]) -> Vec<u8> {
    let mut data = vec![0u8; (width * height) as usize * CELL_CHANNELS];
    for &(x, y) in alive {
        data[(y * width + x) as usize * CELL_CHANNELS] = 255;
    }
    data
}

fn alive_cells(board: &CellBoard) -> Vec<(u32, u32)> {
    let rgba = board.read_cells_rgba().unwrap();
    let mut alive = Vec::new();
    for y in 0..board.height() {
        for x in 0..board.width() {
            if rgba[((y * board.width() + x) as usize) * 4] > 128 {
                alive.push((x, y));
            }
        }
    }
    alive
}

#[test]
fn resize_rejects_zero_dimensions() {
    let mut board = board(4, 4);
    assert!(matches!(
        board.resize(0, 5),
        Err(BoardError::InvalidDimension(_))
    ));
    assert!(matches!(
        board.resize(5, 0),
        Err(BoardError::InvalidDimension(_))
    ));
    // The failed resize did not touch the board.
    assert_eq!((board.width(), board.height()), (4, 4));
}

#[test]
fn operations_on_a_zero_sized_board_fail_with_empty_grid() {
    let mut board = CellBoard::new(ComputeContext::new()).unwrap();
    assert!(matches!(board.step(), Err(BoardError::EmptyGrid(_))));
    assert!(matches!(
        board.set_cells(&[], true),
        Err(BoardError::EmptyGrid(_))
    ));
    assert!(matches!(
        board.read_cells_rgba(),
        Err(BoardError::EmptyGrid(_))
    ));
}

#[test]
fn upload_length_is_validated() {
    let mut board = board(3, 3);
    let err = board.set_cells(&[0u8; 5], true).unwrap_err();
    assert!(matches!(
        err,
        BoardError::SizeMismatch {
            expected: 27,
            actual: 5
        }
    ));
}

#[test]
fn uploads_round_trip_through_readback() {
    let mut board = board(4, 3);
    let alive = [(0, 0), (3, 2), (1, 1)];
    board.set_cells(&cell_data(4, 3, &alive), true).unwrap();

    assert_eq!(alive_cells(&board), vec![(0, 0), (1, 1), (3, 2)]);

    let mut rgb = vec![0u8; 4 * 3 * CELL_CHANNELS];
    board.read_cells_into(&mut rgb).unwrap();
    assert_eq!(rgb[0], 255);
    assert_eq!(rgb[(1 * 4 + 1) * CELL_CHANNELS], 255);
    assert_eq!(rgb[CELL_CHANNELS], 0);
}

#[test]
fn resize_discards_content_and_resets_the_generation() {
    let mut board = board(5, 5);
    board
        .set_cells(&cell_data(5, 5, &[(1, 1), (2, 2)]), true)
        .unwrap();
    board.step().unwrap();
    assert_eq!(board.generation(), 1);

    board.resize(6, 4).unwrap();
    assert_eq!(board.generation(), 0);
    assert!(alive_cells(&board).is_empty());
}

#[test]
fn resize_to_the_same_size_is_a_no_op() {
    let mut board = board(5, 5);
    board.set_cells(&cell_data(5, 5, &[(2, 2)]), true).unwrap();
    board.resize(5, 5).unwrap();
    assert_eq!(alive_cells(&board), vec![(2, 2)]);
}

#[test]
fn neighbour_channel_stays_stale_when_update_is_skipped() {
    let mut board = board(5, 5);

    // Plant a sentinel in the neighbour channel of (1, 2).
    let mut data = cell_data(5, 5, &[(2, 2)]);
    data[(2 * 5 + 1) * CELL_CHANNELS + 1] = 7;

    board.set_cells(&data, false).unwrap();
    let rgba = board.read_cells_rgba().unwrap();
    assert_eq!(rgba[(2 * 5 + 1) * 4 + 1], 7, "upload must land untouched");

    board.update_neighbour_count().unwrap();
    let rgba = board.read_cells_rgba().unwrap();
    let expected = (255.0f32 / 8.0).round() as u8;
    assert_eq!(rgba[(2 * 5 + 1) * 4 + 1], expected);
}

#[test]
fn generation_counts_steps_and_resets_on_upload() {
    let mut board = board(4, 4);
    board.set_cells(&cell_data(4, 4, &[(1, 1)]), true).unwrap();
    assert_eq!(board.generation(), 0);

    board.step().unwrap();
    board.step().unwrap();
    board.step().unwrap();
    assert_eq!(board.generation(), 3);

    board.set_cells(&cell_data(4, 4, &[]), true).unwrap();
    assert_eq!(board.generation(), 0);
}

#[test]
fn replacing_a_rule_changes_the_next_step_only() {
    let mut board = board(6, 6);
    // A 2x2 block is stable under classic rules.
    let block = [(2, 2), (3, 2), (2, 3), (3, 3)];
    board.set_cells(&cell_data(6, 6, &block), true).unwrap();
    board.step().unwrap();
    assert_eq!(alive_cells(&board).len(), 4);

    // Forbid all survival and birth; the next step wipes the board.
    board
        .set_rule(RuleKind::Survive, RuleTable::new([false; 9]))
        .unwrap();
    board
        .set_rule(RuleKind::Revive, RuleTable::new([false; 9]))
        .unwrap();
    assert_eq!(board.survive_rule(), RuleTable::new([false; 9]));
    // Installing a rule does not touch the current state.
    assert_eq!(alive_cells(&board).len(), 4);

    board.step().unwrap();
    assert!(alive_cells(&board).is_empty());
}
