//! Portable board documents.
//!
//! A board exports as a standalone SVG: one unit-square reference per alive
//! cell in board units (y flipped so row 0 sits at the bottom), plus the
//! board dimensions and the raw snapshot string stored as attributes on the
//! document root. The drawing is for humans; re-import reads only the
//! attributes, so the round-trip is lossless regardless of how the cells
//! were styled.

use std::fmt::Write as _;

use crate::{
    engine::board::{CELL_CHANNELS, CellBoard},
    foundation::error::{BoardError, BoardResult},
    paint::snapshot::BoardSession,
};

/// Identifier of the root element carrying the board attributes.
const DATA_ELEMENT_ID: &str = "game-data-element";

/// Styling knobs for the exported drawing.
#[derive(Clone, Debug)]
pub struct SvgExportOptions {
    /// Background fill.
    pub dead_color: String,
    /// Cell fill.
    pub alive_color: String,
    /// Rendered size of one cell in document pixels.
    pub cell_px: u32,
}

impl Default for SvgExportOptions {
    fn default() -> Self {
        Self {
            dead_color: "#224".to_string(),
            alive_color: "#f86".to_string(),
            cell_px: 20,
        }
    }
}

/// Render the board's current generation as an SVG document string.
#[tracing::instrument(skip(board, opts))]
pub fn board_to_svg(board: &CellBoard, opts: &SvgExportOptions) -> BoardResult<String> {
    let width = board.width();
    let height = board.height();
    let rgba = board.read_cells_rgba()?;

    let alive =
        |x: u32, y: u32| rgba[((y as usize * width as usize) + x as usize) * 4] > 128;

    let mut raw_offsets = Vec::new();
    for cell in 0..width as usize * height as usize {
        if rgba[cell * 4] > 128 {
            raw_offsets.push((cell * CELL_CHANNELS).to_string());
        }
    }
    let raw_data = raw_offsets.join(" ");

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {width} {height}\" \
         width=\"{}\" height=\"{}\" id=\"{DATA_ELEMENT_ID}\" boardWidth=\"{width}\" \
         boardHeight=\"{height}\" rawGameOfLifeData=\"{raw_data}\">",
        width * opts.cell_px,
        height * opts.cell_px,
    );
    let _ = writeln!(
        svg,
        "<symbol id=\"light\"><rect x=\"0\" y=\"0\" width=\"1\" height=\"1\" \
         style=\"fill:{};stroke:none;\"/></symbol>",
        opts.alive_color
    );
    let _ = writeln!(
        svg,
        "<symbol id=\"dark\"><rect x=\"0\" y=\"0\" width=\"1\" height=\"1\" \
         style=\"fill:{};opacity:0.9;stroke:none;\"/></symbol>",
        opts.alive_color
    );
    let _ = writeln!(
        svg,
        "<rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" style=\"fill:{};stroke:none;\"/>",
        opts.dead_color
    );

    let _ = writeln!(svg, "<g>");
    for y in 0..height {
        for x in 0..width {
            if !alive(x, y) {
                continue;
            }
            // Checkerboard shading so adjacent cells stay distinguishable.
            let href = if x % 2 != y % 2 { "#dark" } else { "#light" };
            let _ = writeln!(
                svg,
                "<use x=\"{x}\" y=\"{}\" href=\"{href}\"/>",
                height - 1 - y
            );
        }
    }
    let _ = writeln!(svg, "</g>");
    let _ = writeln!(svg, "</svg>");

    Ok(svg)
}

/// Read a board session back out of an exported SVG document.
///
/// Locates the element carrying the board attributes and returns its
/// dimensions and raw cell data; applying the session is the painter's job.
#[tracing::instrument(skip(svg))]
pub fn svg_to_session(svg: &str) -> BoardResult<BoardSession> {
    let doc = roxmltree::Document::parse(svg)
        .map_err(|err| BoardError::malformed_snapshot(format!("not a well-formed document: {err}")))?;

    let element = doc
        .descendants()
        .find(|node| node.attribute("id") == Some(DATA_ELEMENT_ID))
        .ok_or_else(|| {
            BoardError::malformed_snapshot(format!("no element with id '{DATA_ELEMENT_ID}'"))
        })?;

    let dimension = |name: &str| -> BoardResult<u32> {
        element
            .attribute(name)
            .ok_or_else(|| BoardError::malformed_snapshot(format!("missing attribute '{name}'")))?
            .parse::<u32>()
            .map_err(|_| BoardError::malformed_snapshot(format!("attribute '{name}' is not a dimension")))
    };

    let width = dimension("boardWidth")?;
    let height = dimension("boardHeight")?;
    let cells = element
        .attribute("rawGameOfLifeData")
        .ok_or_else(|| BoardError::malformed_snapshot("missing attribute 'rawGameOfLifeData'"))?
        .to_string();

    Ok(BoardSession {
        width,
        height,
        cells,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/export/svg.rs"]
mod tests;
