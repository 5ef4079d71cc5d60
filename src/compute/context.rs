use std::sync::Arc;

/// Explicit handle to the compute device.
///
/// Buffers and kernels are created through a context, and every dispatch
/// takes one; there is no process-global device state, so the backend's
/// lifetime is exactly the lifetime of the engine that owns the context.
/// Clones share the same device configuration.
///
/// The device executes per-cell programs data-parallel across target rows
/// (rayon) once a target is large enough for the fan-out to pay off; below
/// the threshold it runs the rows inline.
#[derive(Clone, Debug)]
pub struct ComputeContext {
    config: Arc<DeviceConfig>,
}

#[derive(Debug)]
struct DeviceConfig {
    parallel_threshold: usize,
}

/// Default minimum number of target cells before a dispatch goes wide.
const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

impl ComputeContext {
    /// Create a context with the default dispatch policy.
    pub fn new() -> Self {
        Self::with_parallel_threshold(DEFAULT_PARALLEL_THRESHOLD)
    }

    /// Create a context that goes row-parallel once a target has at least
    /// `cells` cells. A threshold of 0 parallelizes every dispatch.
    pub fn with_parallel_threshold(cells: usize) -> Self {
        Self {
            config: Arc::new(DeviceConfig {
                parallel_threshold: cells,
            }),
        }
    }

    pub(crate) fn parallel_threshold(&self) -> usize {
        self.config.parallel_threshold
    }
}

impl Default for ComputeContext {
    fn default() -> Self {
        Self::new()
    }
}
