use crate::{
    compute::{
        buffer::{Buffer2D, ChannelFormat, FilterMode},
        context::ComputeContext,
        kernel::{Kernel, PassInputs},
        target::RenderTarget,
    },
    engine::kernels::{NeighbourCountProgram, PIXEL_SCALING, TransitionProgram},
    engine::rules::{RULE_ENTRIES, RuleKind, RuleTable},
    foundation::error::{BoardError, BoardResult},
};

/// Channels per cell in the board's state buffers and in every upload:
/// R = alive, G = cached neighbour count, B = previous alive.
pub const CELL_CHANNELS: usize = 3;

/// The double-buffered automaton core.
///
/// A board owns the authoritative cell state of the current generation as a
/// pair of 3-channel buffers (current + scratch) together with the rule
/// tables and the two compute kernels. Per cell, channel R holds the alive
/// state (0 or 255), channel G the cached neighbour count (count/8,
/// quantized to 9 levels) and channel B the previous generation's alive
/// state, kept only so a renderer can blend between generations.
///
/// G is only the true toroidal 8-neighbour count of R *as of the last
/// neighbour pass*; any direct write to R leaves it stale until
/// [`CellBoard::update_neighbour_count`] runs again. [`CellBoard::step`]
/// maintains this internally.
///
/// Buffer handles never leave the board: external code cannot cache a
/// reference across the swap that follows each pass. Exclusive `&mut self`
/// on every mutating operation is the concurrency contract; two steps are
/// strictly ordered and a pass is never observed half-done.
pub struct CellBoard {
    ctx: ComputeContext,
    width: u32,
    height: u32,
    generation: u64,
    /// Two-buffer arena; `current` indexes the authoritative generation.
    cells: [Buffer2D; 2],
    current: usize,
    survive: RuleTable,
    revive: RuleTable,
    survive_buf: Buffer2D,
    revive_buf: Buffer2D,
    transition: Kernel,
    neighbour: Kernel,
}

impl CellBoard {
    /// Create a zero-sized board with classic Life rules (survive on 2 or
    /// 3 neighbours, born on exactly 3). Size it with [`CellBoard::resize`].
    pub fn new(ctx: ComputeContext) -> BoardResult<Self> {
        let cells = [
            Buffer2D::new(&ctx, ChannelFormat::Rgb8, FilterMode::Nearest),
            Buffer2D::new(&ctx, ChannelFormat::Rgb8, FilterMode::Nearest),
        ];
        let survive_buf = Buffer2D::new(&ctx, ChannelFormat::R8, FilterMode::Nearest);
        let revive_buf = Buffer2D::new(&ctx, ChannelFormat::R8, FilterMode::Nearest);

        let mut transition = Kernel::new(&ctx, TransitionProgram);
        let mut neighbour = Kernel::new(&ctx, NeighbourCountProgram);
        transition.params.set_vec2(PIXEL_SCALING, [0.01, 0.01]);
        neighbour.params.set_vec2(PIXEL_SCALING, [0.01, 0.01]);

        let mut board = Self {
            ctx,
            width: 0,
            height: 0,
            generation: 0,
            cells,
            current: 0,
            survive: RuleTable::classic_survive(),
            revive: RuleTable::classic_revive(),
            survive_buf,
            revive_buf,
            transition,
            neighbour,
        };
        board.set_rule(RuleKind::Survive, RuleTable::classic_survive())?;
        board.set_rule(RuleKind::Revive, RuleTable::classic_revive())?;
        Ok(board)
    }

    /// Create a board and size it immediately.
    pub fn with_size(ctx: ComputeContext, width: u32, height: u32) -> BoardResult<Self> {
        let mut board = Self::new(ctx)?;
        board.resize(width, height)?;
        Ok(board)
    }

    /// Board width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Steps taken since the last externally authored state.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The context this board dispatches through.
    pub fn context(&self) -> &ComputeContext {
        &self.ctx
    }

    /// The installed survive table.
    pub fn survive_rule(&self) -> RuleTable {
        self.survive
    }

    /// The installed revive table.
    pub fn revive_rule(&self) -> RuleTable {
        self.revive
    }

    fn ensure_sized(&self, op: &str) -> BoardResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(BoardError::empty_grid(format!(
                "{op} requires a non-empty board"
            )));
        }
        Ok(())
    }

    /// Resize the board, discarding all content.
    ///
    /// A no-op when the dimensions are unchanged. Otherwise both buffers are
    /// reallocated dead, the kernels' per-cell step size becomes
    /// `(1/width, 1/height)` and the generation counter resets. Content is
    /// *not* preserved, repainting is the caller's job (the paint layer's
    /// resize is the content-preserving path).
    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self, width: u32, height: u32) -> BoardResult<()> {
        if width == 0 || height == 0 {
            return Err(BoardError::invalid_dimension(format!(
                "board dimensions must be positive, got {width}x{height}"
            )));
        }
        if width == self.width && height == self.height {
            return Ok(());
        }

        let scaling = [1.0 / width as f32, 1.0 / height as f32];
        self.transition.params.set_vec2(PIXEL_SCALING, scaling);
        self.neighbour.params.set_vec2(PIXEL_SCALING, scaling);

        for buffer in &mut self.cells {
            buffer.set_data(width, height, None)?;
        }

        self.width = width;
        self.height = height;
        self.generation = 0;
        Ok(())
    }

    /// Upload a full generation into the current buffer.
    ///
    /// `data` is `width * height * 3` bytes in the cell layout; only channel
    /// R is meaningful on upload, G and B land as written. With
    /// `update_neighbours` the neighbour pass runs immediately afterwards,
    /// recommended before any [`CellBoard::step`] since a stale G channel
    /// feeds the rules garbage. The generation counter resets: an upload
    /// *is* the new authored state.
    #[tracing::instrument(skip(self, data))]
    pub fn set_cells(&mut self, data: &[u8], update_neighbours: bool) -> BoardResult<()> {
        self.ensure_sized("set_cells")?;
        self.cells[self.current].update_data(data)?;
        self.generation = 0;
        if update_neighbours {
            self.update_neighbour_count()?;
        }
        Ok(())
    }

    /// Read the current generation back as `width * height * 4` RGBA bytes.
    pub fn read_cells_rgba(&self) -> BoardResult<Vec<u8>> {
        self.ensure_sized("read_cells_rgba")?;
        let mut out = vec![0u8; self.width as usize * self.height as usize * 4];
        RenderTarget::read_rgba(&self.cells[self.current], &mut out)?;
        Ok(out)
    }

    /// Read the current generation's alive channel into a cell-layout array.
    ///
    /// `data` must be `width * height * 3` bytes; only byte `3*i` of each
    /// cell is written, the other two are left as they are.
    pub fn read_cells_into(&self, data: &mut [u8]) -> BoardResult<()> {
        self.ensure_sized("read_cells_into")?;
        let expected = self.width as usize * self.height as usize * CELL_CHANNELS;
        if data.len() != expected {
            return Err(BoardError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        let rgba = self.read_cells_rgba()?;
        for cell in 0..self.width as usize * self.height as usize {
            data[cell * CELL_CHANNELS] = rgba[cell * 4];
        }
        Ok(())
    }

    /// Replace one of the two transition tables.
    ///
    /// A constant-time upload of the 9-entry lookup row; current cell state
    /// is not recomputed, the next transition pass simply consults the new
    /// table.
    pub fn set_rule(&mut self, kind: RuleKind, table: RuleTable) -> BoardResult<()> {
        let bytes = table.to_bytes();
        let buffer = match kind {
            RuleKind::Survive => &mut self.survive_buf,
            RuleKind::Revive => &mut self.revive_buf,
        };
        buffer.set_data(RULE_ENTRIES as u32, 1, Some(&bytes))?;
        match kind {
            RuleKind::Survive => self.survive = table,
            RuleKind::Revive => self.revive = table,
        }
        Ok(())
    }

    /// Advance exactly one generation.
    ///
    /// Two passes ping-pong through the arena: the transition kernel writes
    /// the next generation (new alive in R, old alive in B, G undefined)
    /// into the scratch buffer, then the neighbour kernel reads it back out
    /// and writes the fully updated cell (R and B passed through, G
    /// recounted) into the buffer that was current before. The extra
    /// full-grid pass buys a cached neighbour count that the next
    /// transition (and any renderer) reuses instead of fetching all 8
    /// neighbours again per cell.
    pub fn step(&mut self) -> BoardResult<()> {
        self.ensure_sized("step")?;

        let [a, b] = &mut self.cells;
        let (cur, scratch) = if self.current == 0 { (a, b) } else { (b, a) };

        {
            let mut target = RenderTarget::bind(&mut *scratch)?;
            // Slot order matches SLOT_CELLS / SLOT_REVIVE / SLOT_SURVIVE.
            let inputs = PassInputs::bind(&[&*cur, &self.revive_buf, &self.survive_buf]);
            self.transition.dispatch(&self.ctx, &inputs, &mut target);
        }
        {
            let mut target = RenderTarget::bind(&mut *cur)?;
            let inputs = PassInputs::bind(&[&*scratch]);
            self.neighbour.dispatch(&self.ctx, &inputs, &mut target);
        }

        self.generation += 1;
        Ok(())
    }

    /// Recount neighbours for the current generation.
    ///
    /// Runs the neighbour kernel from the current buffer into the scratch
    /// buffer, which then becomes current. Required after any upload that
    /// skipped it, before the G channel may be trusted again.
    pub fn update_neighbour_count(&mut self) -> BoardResult<()> {
        self.ensure_sized("update_neighbour_count")?;

        let [a, b] = &mut self.cells;
        let (cur, scratch) = if self.current == 0 { (a, b) } else { (b, a) };

        let mut target = RenderTarget::bind(&mut *scratch)?;
        let inputs = PassInputs::bind(&[&*cur]);
        self.neighbour.dispatch(&self.ctx, &inputs, &mut target);

        self.current ^= 1;
        Ok(())
    }

    /// Declare the current state externally authored, resetting the
    /// generation counter. The paint layer calls this after reading state
    /// back, which makes its CPU mirror authoritative.
    pub(crate) fn rebase_generation(&mut self) {
        self.generation = 0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/board.rs"]
mod tests;
