use super::*;
use crate::{
    compute::context::ComputeContext,
    engine::board::CellBoard,
    paint::painter::CellPainter,
};

fn painted_board() -> (CellBoard, CellPainter) {
    let mut board = CellBoard::with_size(ComputeContext::new(), 4, 3).unwrap();
    let mut painter = CellPainter::with_seed(&board, 1);
    painter
        .load_snapshot(&mut board, "0 15 33")
        .unwrap();
    (board, painter)
}

#[test]
fn export_embeds_dimensions_and_the_raw_snapshot() {
    let (board, _painter) = painted_board();
    let svg = board_to_svg(&board, &SvgExportOptions::default()).unwrap();

    assert!(svg.contains("boardWidth=\"4\""));
    assert!(svg.contains("boardHeight=\"3\""));
    assert!(svg.contains("rawGameOfLifeData=\"0 15 33\""));
    assert!(svg.contains("viewBox=\"0 0 4 3\""));
}

#[test]
fn alive_cells_draw_flipped_to_svg_coordinates() {
    let (board, _painter) = painted_board();
    let svg = board_to_svg(&board, &SvgExportOptions::default()).unwrap();

    // Cell (0, 0) draws at the bottom row; parity picks the plain symbol.
    assert!(svg.contains("<use x=\"0\" y=\"2\" href=\"#light\"/>"));
    // Cell (1, 1) has odd/odd parity, also the plain symbol; (3, 2) is mixed.
    assert!(svg.contains("<use x=\"1\" y=\"1\" href=\"#light\"/>"));
    assert!(svg.contains("<use x=\"3\" y=\"0\" href=\"#dark\"/>"));
}

#[test]
fn import_reads_the_session_back_out() {
    let (mut board, mut painter) = painted_board();
    let svg = board_to_svg(&board, &SvgExportOptions::default()).unwrap();

    let session = svg_to_session(&svg).unwrap();
    assert_eq!(session, painter.session(&mut board).unwrap());
}

#[test]
fn import_rejects_documents_without_board_attributes() {
    let err = svg_to_session("<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap_err();
    assert!(matches!(err, BoardError::MalformedSnapshot(_)));

    let err = svg_to_session(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" id=\"game-data-element\" boardWidth=\"2\"/>",
    )
    .unwrap_err();
    assert!(matches!(err, BoardError::MalformedSnapshot(_)));
}

#[test]
fn import_rejects_garbage() {
    assert!(matches!(
        svg_to_session("this is not markup"),
        Err(BoardError::MalformedSnapshot(_))
    ));
}
