use kurbo::Point;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    engine::board::CellBoard,
    foundation::error::BoardResult,
    paint::{
        brush::{Brush, PaintMode},
        buffer::PaintBuffer,
        snapshot::BoardSession,
    },
};

/// Brush compositor over the CPU paint mirror.
///
/// Every operation that touches the pattern takes the board explicitly and
/// brackets itself with a sync-from-engine before and a commit after, so a
/// paint operation is atomic with respect to engine state: it can never
/// composite onto a snapshot the engine has silently stepped past.
pub struct CellPainter {
    buffer: PaintBuffer,
    brush: Brush,
    mode: PaintMode,
    rng: StdRng,
}

impl CellPainter {
    /// Create a painter for `board` with the single-cell brush and
    /// [`PaintMode::Invert`].
    pub fn new(board: &CellBoard) -> Self {
        Self::with_rng(board, StdRng::from_entropy())
    }

    /// Create a painter with a deterministic random stream.
    pub fn with_seed(board: &CellBoard, seed: u64) -> Self {
        Self::with_rng(board, StdRng::seed_from_u64(seed))
    }

    fn with_rng(board: &CellBoard, rng: StdRng) -> Self {
        Self {
            buffer: PaintBuffer::for_board(board),
            brush: Brush::dot(),
            mode: PaintMode::Invert,
            rng,
        }
    }

    /// The active brush.
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Replace the active brush.
    pub fn set_brush(&mut self, brush: Brush) {
        self.brush = brush;
    }

    /// The active compositing mode.
    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    /// Replace the active compositing mode.
    pub fn set_mode(&mut self, mode: PaintMode) {
        self.mode = mode;
    }

    /// The CPU mirror.
    pub fn buffer(&self) -> &PaintBuffer {
        &self.buffer
    }

    /// See [`PaintBuffer::sync_from_board`].
    pub fn sync_from_board(&mut self, board: &mut CellBoard) -> BoardResult<()> {
        self.buffer.sync_from_board(board)
    }

    /// See [`PaintBuffer::commit`].
    pub fn commit(&self, board: &mut CellBoard, update_neighbours: bool) -> BoardResult<()> {
        self.buffer.commit(board, update_neighbours)
    }

    /// Stamp the active brush at `at` with the active mode.
    pub fn stamp(&mut self, board: &mut CellBoard, at: Point) -> BoardResult<bool> {
        let brush = self.brush.clone();
        let mode = self.mode;
        self.stamp_with(board, &brush, at, mode)
    }

    /// Stamp `brush` onto the board around the anchor cell `at`.
    ///
    /// Every set bit lands on `floor(at + bit - center + 0.5)` per axis;
    /// bits falling outside the board are skipped. Returns whether any
    /// in-bounds cell was touched.
    #[tracing::instrument(skip(self, board, brush))]
    pub fn stamp_with(
        &mut self,
        board: &mut CellBoard,
        brush: &Brush,
        at: Point,
        mode: PaintMode,
    ) -> BoardResult<bool> {
        self.sync_from_board(board)?;

        let center = brush.center();
        let mut touched = false;
        for y in 0..brush.height {
            for x in 0..brush.width {
                if !brush.get(x, y) {
                    continue;
                }
                let target_x = (at.x + f64::from(x) - center.x + 0.5).floor();
                let target_y = (at.y + f64::from(y) - center.y + 0.5).floor();
                if self.paint_cell(target_x, target_y, mode) {
                    touched = true;
                }
            }
        }

        self.commit(board, true)?;
        Ok(touched)
    }

    fn paint_cell(&mut self, x: f64, y: f64, mode: PaintMode) -> bool {
        if x < 0.0 || y < 0.0 || x >= f64::from(self.buffer.width()) || y >= f64::from(self.buffer.height()) {
            return false;
        }
        let (x, y) = (x as u32, y as u32);
        let next = mode.apply(self.buffer.alive(x, y), &mut self.rng);
        self.buffer.set_alive(x, y, next);
        true
    }

    /// Kill every cell and commit.
    pub fn clear(&mut self, board: &mut CellBoard) -> BoardResult<()> {
        self.buffer.clear();
        self.commit(board, true)
    }

    /// Fill the board with radially biased noise and burn it in.
    ///
    /// Each cell comes up alive with probability
    /// `0.4 * (1 - d²/d²max)^8` where `d` is its distance from the board
    /// center, denser in the middle and fading to the edges. The pattern is
    /// committed, advanced two generations to clear out isolated specks,
    /// and read back, which leaves the result as the new authored state.
    #[tracing::instrument(skip(self, board))]
    pub fn randomize(&mut self, board: &mut CellBoard) -> BoardResult<()> {
        let width = self.buffer.width();
        let height = self.buffer.height();
        let center_x = f64::from(width) / 2.0;
        let center_y = f64::from(height) / 2.0;
        let max_square = center_x * center_x + center_y * center_y;

        for y in 0..height {
            for x in 0..width {
                let dx = f64::from(x) - center_x;
                let dy = f64::from(y) - center_y;
                let centered = 1.0 - (dx * dx + dy * dy) / max_square;
                let life = centered.powi(8);
                let alive = self.rng.gen_bool(life * 0.4);
                self.buffer.set_alive(x, y, alive);
            }
        }
        self.commit(board, true)?;

        board.step()?;
        board.step()?;
        self.sync_from_board(board)
    }

    /// Resize the board while keeping the painted content centered.
    ///
    /// The only content-preserving resize path: the current pattern is
    /// synced, re-centered into the new bounds (`round((new - old) / 2)`
    /// offset per axis, overflow dies) and committed. Plain
    /// [`CellBoard::resize`] discards content instead.
    pub fn resize_keeping_content(
        &mut self,
        board: &mut CellBoard,
        width: u32,
        height: u32,
    ) -> BoardResult<()> {
        self.sync_from_board(board)?;
        board.resize(width, height)?;
        self.buffer.rebind_centered(width, height);
        self.commit(board, true)
    }

    /// Replace the pattern from a snapshot string (best-effort) and commit.
    /// Returns how many bytes were set.
    pub fn load_snapshot(&mut self, board: &mut CellBoard, text: &str) -> BoardResult<usize> {
        let applied = self.buffer.apply_snapshot(text);
        self.commit(board, true)?;
        Ok(applied)
    }

    /// Snapshot the current pattern, syncing from the engine first.
    pub fn save_snapshot(&mut self, board: &mut CellBoard) -> BoardResult<String> {
        self.sync_from_board(board)?;
        Ok(self.buffer.serialize())
    }

    /// Capture a self-contained session of the current pattern.
    pub fn session(&mut self, board: &mut CellBoard) -> BoardResult<BoardSession> {
        self.sync_from_board(board)?;
        Ok(self.buffer.session())
    }

    /// Restore a session: resize the board, load the cells, commit.
    pub fn restore_session(
        &mut self,
        board: &mut CellBoard,
        session: &BoardSession,
    ) -> BoardResult<usize> {
        board.resize(session.width, session.height)?;
        self.buffer.rebind(session.width, session.height);
        self.load_snapshot(board, &session.cells)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/painter.rs"]
mod tests;
