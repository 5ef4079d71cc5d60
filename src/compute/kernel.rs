use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::compute::{
    buffer::{Buffer2D, BufferView},
    context::ComputeContext,
    target::{RenderTarget, TargetFrame},
};

/// A per-cell program evaluated once for every element of the bound target.
///
/// Programs are logically pure: the value for a cell depends only on the
/// bound inputs, the pushed parameters and the cell's own coordinate, which
/// is what makes a dispatch embarrassingly parallel. `coord` is the
/// normalized center of the output cell (`(x + 0.5) / width`,
/// `(y + 0.5) / height`).
pub trait CellProgram: Send + Sync {
    /// Compute one output element as normalized RGBA in `[0, 1]`.
    fn shade(&self, params: &KernelParams, inputs: &PassInputs<'_>, coord: [f32; 2]) -> [f32; 4];
}

/// Typed parameter block pushed to the device right before each dispatch.
#[derive(Clone, Debug, Default)]
pub struct KernelParams {
    scalars: BTreeMap<&'static str, f32>,
    vec2s: BTreeMap<&'static str, [f32; 2]>,
}

impl KernelParams {
    /// Set a named scalar parameter.
    pub fn set_scalar(&mut self, name: &'static str, value: f32) {
        self.scalars.insert(name, value);
    }

    /// Read a named scalar parameter; unset parameters read as zero.
    pub fn scalar(&self, name: &str) -> f32 {
        self.scalars.get(name).copied().unwrap_or(0.0)
    }

    /// Set a named 2-vector parameter.
    pub fn set_vec2(&mut self, name: &'static str, value: [f32; 2]) {
        self.vec2s.insert(name, value);
    }

    /// Read a named 2-vector parameter; unset parameters read as zero.
    pub fn vec2(&self, name: &str) -> [f32; 2] {
        self.vec2s.get(name).copied().unwrap_or([0.0, 0.0])
    }
}

/// Input buffers bound for a single dispatch, in slot order.
pub struct PassInputs<'a> {
    slots: Vec<BufferView<'a>>,
}

impl<'a> PassInputs<'a> {
    /// Bind the given buffers to consecutive input slots.
    pub fn bind(buffers: &[&'a Buffer2D]) -> Self {
        Self {
            slots: buffers.iter().map(|b| b.view()).collect(),
        }
    }

    /// The view bound at `slot`.
    ///
    /// # Panics
    /// Panics when no buffer was bound at `slot`; a kernel's slot layout is
    /// fixed at the call site that dispatches it.
    pub fn input(&self, slot: usize) -> &BufferView<'a> {
        &self.slots[slot]
    }
}

/// A compiled compute pass: one per-cell program plus the full-grid quad it
/// is dispatched over.
///
/// The quad is implicit: a dispatch always covers every element of the
/// bound target exactly once. Parameters live on the kernel and are pushed
/// with each dispatch, mirroring how a program object keeps its uniform
/// state between executions.
pub struct Kernel {
    program: Box<dyn CellProgram>,
    /// Parameter state pushed on every dispatch.
    pub params: KernelParams,
}

impl Kernel {
    /// Wrap a compiled program into a dispatchable kernel.
    pub fn new(_ctx: &ComputeContext, program: impl CellProgram + 'static) -> Self {
        Self {
            program: Box::new(program),
            params: KernelParams::default(),
        }
    }

    /// Execute the program once per target element.
    ///
    /// Within a pass there are no cross-cell write hazards: every element is
    /// produced independently from the bound inputs, so rows are evaluated
    /// in parallel once the target crosses the context's threshold. The
    /// caller observes the pass as synchronous: when this returns, every
    /// element of the target has been written.
    pub fn dispatch(&self, ctx: &ComputeContext, inputs: &PassInputs<'_>, target: &mut RenderTarget<'_>) {
        let mut frame = target.frame();
        let cells = frame.width as usize * frame.height as usize;
        if cells >= ctx.parallel_threshold() {
            self.dispatch_rows_parallel(inputs, &mut frame);
        } else {
            self.dispatch_rows_serial(inputs, &mut frame);
        }
    }

    fn dispatch_rows_serial(&self, inputs: &PassInputs<'_>, frame: &mut TargetFrame<'_>) {
        let row_bytes = frame.width as usize * frame.channels;
        let (width, height, channels) = (frame.width, frame.height, frame.channels);
        for (y, row) in frame.data.chunks_mut(row_bytes).enumerate() {
            self.shade_row(inputs, width, height, channels, y as u32, row);
        }
    }

    fn dispatch_rows_parallel(&self, inputs: &PassInputs<'_>, frame: &mut TargetFrame<'_>) {
        let row_bytes = frame.width as usize * frame.channels;
        let (width, height, channels) = (frame.width, frame.height, frame.channels);
        frame
            .data
            .par_chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| {
                self.shade_row(inputs, width, height, channels, y as u32, row);
            });
    }

    fn shade_row(
        &self,
        inputs: &PassInputs<'_>,
        width: u32,
        height: u32,
        channels: usize,
        y: u32,
        row: &mut [u8],
    ) {
        let v = (y as f32 + 0.5) / height as f32;
        for x in 0..width {
            let u = (x as f32 + 0.5) / width as f32;
            let rgba = self.program.shade(&self.params, inputs, [u, v]);
            let base = x as usize * channels;
            for ch in 0..channels {
                row[base + ch] = quantize(rgba[ch]);
            }
        }
    }
}

/// Convert a normalized channel value to fixed-point u8.
fn quantize(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/compute/kernel.rs"]
mod tests;
