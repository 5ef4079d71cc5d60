//! The two per-cell programs of the simulation pipeline.
//!
//! A generation advance is two passes over the full grid. The transition
//! program consumes the cached neighbour count and applies the rule tables;
//! the neighbour program rebuilds that cache for the freshly written
//! generation. Splitting the work this way means a cell's new state is
//! always derived from its neighbours' *old* state (no partially-updated
//! reads within a pass), and the cached count saves the renderer and the
//! next transition pass from re-fetching all 8 neighbours per cell.

use crate::compute::{
    buffer::BufferView,
    kernel::{CellProgram, KernelParams, PassInputs},
};

/// Name of the per-cell step parameter, `(1/width, 1/height)` in normalized
/// coordinate space.
pub(crate) const PIXEL_SCALING: &str = "pixelScaling";

/// Input slot of the cell-state buffer for both programs.
pub(crate) const SLOT_CELLS: usize = 0;
/// Input slot of the revive rule table (transition program only).
pub(crate) const SLOT_REVIVE: usize = 1;
/// Input slot of the survive rule table (transition program only).
pub(crate) const SLOT_SURVIVE: usize = 2;

/// Sample with the coordinate reduced mod 1, joining the grid edges.
///
/// The buffers themselves address clamp-to-edge, so toroidal wrap has to
/// happen here before the lookup.
fn wrapped_sample(cells: &BufferView<'_>, x: f32, y: f32) -> [f32; 4] {
    let mut x = x - x.trunc();
    let mut y = y - y.trunc();
    if x < 0.0 {
        x += 1.0;
    }
    if y < 0.0 {
        y += 1.0;
    }
    cells.sample(x, y)
}

/// Rebuilds the cached neighbour count.
///
/// R and B pass through unchanged; G becomes the 8-neighbour toroidal sum
/// of R divided by 8, quantized to the 9 levels the rule lookup expects.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct NeighbourCountProgram;

impl CellProgram for NeighbourCountProgram {
    fn shade(&self, params: &KernelParams, inputs: &PassInputs<'_>, coord: [f32; 2]) -> [f32; 4] {
        let cells = inputs.input(SLOT_CELLS);
        let [sx, sy] = params.vec2(PIXEL_SCALING);
        let [cx, cy] = coord;

        let alive = |dx: f32, dy: f32| wrapped_sample(cells, cx + dx, cy + dy)[0];
        let count = alive(sx, 0.0)
            + alive(-sx, 0.0)
            + alive(0.0, sy)
            + alive(0.0, -sy)
            + alive(sx, -sy)
            + alive(-sx, sy)
            + alive(sx, sy)
            + alive(-sx, -sy);

        let mut out = cells.sample(cx, cy);
        out[1] = count / 8.0;
        out
    }
}

/// Applies the transition rules to produce the next generation.
///
/// Reads `alive` from R and the cached count from G, looks the count up in
/// the survive table for live cells or the revive table for dead ones, and
/// writes the result into R. The old alive state is preserved in B so a
/// renderer can blend between generations; G is left at zero and is only
/// valid again after the neighbour pass runs over this output.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct TransitionProgram;

impl TransitionProgram {
    /// Look up a normalized neighbour count in a 9×1 rule table.
    ///
    /// The table is sampled at `x = count/8` with nearest filtering over 9
    /// texels, which maps each of the 9 quantized counts onto its own entry.
    fn rule(table: &BufferView<'_>, neighbours: f32) -> f32 {
        table.sample(neighbours, 0.5)[0]
    }
}

impl CellProgram for TransitionProgram {
    fn shade(&self, _params: &KernelParams, inputs: &PassInputs<'_>, coord: [f32; 2]) -> [f32; 4] {
        let cells = inputs.input(SLOT_CELLS);
        let [cx, cy] = coord;

        let state = cells.sample(cx, cy);
        let alive = state[0];
        let neighbours = state[1];

        let will_live = if alive > 0.5 {
            Self::rule(inputs.input(SLOT_SURVIVE), neighbours)
        } else {
            Self::rule(inputs.input(SLOT_REVIVE), neighbours)
        };

        [will_live, 0.0, alive, 1.0]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/kernels.rs"]
mod tests;
