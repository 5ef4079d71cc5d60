//! Cellboard is a generalized Game-of-Life engine built on a parallel
//! per-cell compute backend, with a brush-based paint layer and portable
//! SVG board documents.
//!
//! # Pipeline overview
//!
//! 1. **Paint**: compose a pattern on the CPU mirror (`CellPainter` +
//!    `PaintBuffer`), then `commit` it into the engine.
//! 2. **Simulate**: `CellBoard::step` advances one generation with two
//!    full-grid passes (transition rules, then a neighbour recount),
//!    ping-ponging between a pair of device buffers.
//! 3. **Read/export**: read generations back, snapshot them as text, or
//!    export/import standalone SVG board documents.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No hidden device state**: buffers, kernels and dispatches all go
//!   through an explicit [`ComputeContext`].
//! - **Explicit CPU/engine synchronization**: the paint mirror and the
//!   engine never sync behind the caller's back; `generation == 0` is the
//!   single source of truth for who owns the pattern.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compute;
mod engine;
mod export;
mod foundation;
mod paint;
mod view;

pub use kurbo::{Point, Vec2};

pub use compute::buffer::{Buffer2D, BufferView, ChannelFormat, FilterMode};
pub use compute::context::ComputeContext;
pub use compute::kernel::{CellProgram, Kernel, KernelParams, PassInputs};
pub use compute::target::RenderTarget;
pub use engine::board::{CELL_CHANNELS, CellBoard};
pub use engine::rules::{RULE_ENTRIES, RuleKind, RuleTable};
pub use export::svg::{SvgExportOptions, board_to_svg, svg_to_session};
pub use foundation::error::{BoardError, BoardResult};
pub use paint::brush::{Brush, PaintMode, builtin_brush, builtin_brushes};
pub use paint::buffer::{Authority, PaintBuffer};
pub use paint::painter::CellPainter;
pub use paint::snapshot::{BoardSession, deserialize_cells, serialize_cells};
pub use view::camera::{ViewCamera, ViewTransform};
pub use view::ticker::GenerationTimer;
