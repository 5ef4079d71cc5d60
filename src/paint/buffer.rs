use crate::{
    engine::board::{CELL_CHANNELS, CellBoard},
    foundation::error::BoardResult,
    paint::snapshot::{self, BoardSession},
};

/// Which side currently holds the authoritative copy of the pattern.
///
/// `generation == 0` on the board is the single source of truth: as long as
/// the board has not stepped past the last authored state, the CPU mirror is
/// authoritative; once it has, the mirror is stale until the next
/// [`PaintBuffer::sync_from_board`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Authority {
    /// The CPU mirror is the pattern of record.
    Cpu,
    /// The engine has advanced past the mirror; read back before painting.
    Engine,
}

/// CPU-resident mirror of one generation of alive/dead cells.
///
/// Bytes are kept in the same 3-bytes-per-cell layout the engine uploads,
/// so a commit is a straight upload with no conversion; only byte `3*i` of
/// cell `i` carries meaning here, and "alive" is a value above 128. The
/// mirror and the engine are synchronized only through the explicit
/// [`PaintBuffer::sync_from_board`] / [`PaintBuffer::commit`] pair, never
/// implicitly.
#[derive(Clone, Debug, Default)]
pub struct PaintBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PaintBuffer {
    /// Create an empty mirror.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mirror sized for `board`, all cells dead.
    pub fn for_board(board: &CellBoard) -> Self {
        let mut buffer = Self::new();
        buffer.rebind(board.width(), board.height());
        buffer
    }

    /// Mirror width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mirror height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CELL_CHANNELS
    }

    /// Whether the cell at `(x, y)` is alive. Out-of-bounds reads are dead.
    pub fn alive(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[self.index(x, y)] > 128
    }

    /// Set the cell at `(x, y)`; out-of-bounds writes are ignored.
    pub fn set_alive(&mut self, x: u32, y: u32, alive: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = self.index(x, y);
        self.data[index] = if alive { 255 } else { 0 };
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.data.chunks(CELL_CHANNELS).filter(|c| c[0] > 128).count()
    }

    /// Who owns the pattern of record right now.
    pub fn authority(&self, board: &CellBoard) -> Authority {
        if board.generation() == 0 {
            Authority::Cpu
        } else {
            Authority::Engine
        }
    }

    /// Reallocate to the given size, all cells dead.
    pub fn rebind(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.data.clear();
        self.data
            .resize(width as usize * height as usize * CELL_CHANNELS, 0);
    }

    /// Reallocate to the given size, keeping the old content centered.
    ///
    /// The overlapping region is copied with a `round((new - old) / 2)`
    /// offset per axis; cells that fall outside the old bounds come up dead.
    pub fn rebind_centered(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        let old_width = self.width as i64;
        let old_height = self.height as i64;
        let old_data = std::mem::take(&mut self.data);

        self.rebind(width, height);

        let offset_x = centering_offset(width as i64, old_width);
        let offset_y = centering_offset(height as i64, old_height);

        for y in 0..self.height as i64 {
            for x in 0..self.width as i64 {
                let old_x = x - offset_x;
                let old_y = y - offset_y;
                if old_x >= 0 && old_x < old_width && old_y >= 0 && old_y < old_height {
                    let old_index = ((old_y * old_width + old_x) as usize) * CELL_CHANNELS;
                    let new_index = self.index(x as u32, y as u32);
                    self.data[new_index] = old_data[old_index];
                }
            }
        }
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Read the engine state back if the engine is authoritative.
    ///
    /// No-op while `generation == 0`. Afterwards the board's counter is
    /// rebased to zero: this CPU snapshot is now the authored state.
    pub fn sync_from_board(&mut self, board: &mut CellBoard) -> BoardResult<()> {
        if self.authority(board) == Authority::Engine {
            board.read_cells_into(&mut self.data)?;
            board.rebase_generation();
        }
        Ok(())
    }

    /// Upload the mirror to the engine, making it the authored state.
    pub fn commit(&self, board: &mut CellBoard, update_neighbours: bool) -> BoardResult<()> {
        board.set_cells(&self.data, update_neighbours)
    }

    /// Render the mirror as a snapshot string.
    pub fn serialize(&self) -> String {
        snapshot::serialize_cells(&self.data)
    }

    /// Replace the mirror content from a snapshot string (best-effort).
    /// Returns how many bytes were set.
    pub fn apply_snapshot(&mut self, text: &str) -> usize {
        snapshot::deserialize_cells(text, &mut self.data)
    }

    /// Capture the mirror as a self-contained session value.
    pub fn session(&self) -> BoardSession {
        BoardSession {
            width: self.width,
            height: self.height,
            cells: self.serialize(),
        }
    }

}

/// Round-half-up of `(new - old) / 2`.
fn centering_offset(new: i64, old: i64) -> i64 {
    let d = new - old;
    d.div_euclid(2) + d.rem_euclid(2)
}

#[cfg(test)]
#[path = "../../tests/unit/paint/buffer.rs"]
mod tests;
