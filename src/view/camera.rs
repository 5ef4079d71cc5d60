use kurbo::{Point, Vec2};

/// Smallest scale the camera will reach by zooming out.
const MIN_SCALE: f64 = 0.01;
/// Largest scale the camera will reach by zooming in.
const MAX_SCALE: f64 = 100.0;

/// View state emitted to consumers: pan offset plus zoom factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Pan offset in normalized device units.
    pub offset: Vec2,
    /// Zoom factor, 1 showing the whole board.
    pub scale: f64,
}

/// Pan/zoom accumulator.
///
/// A pure coordinate utility: callers translate their pointer events into
/// scroll ticks and drag deltas in normalized device coordinates (x right,
/// y up, `[-1, 1]` across the viewport) and read the resulting transform
/// back out. Zoom is exponential in the accumulated scroll distance, so
/// zooming feels uniform at every magnification, and is clamped to
/// `(0.01, 100)`.
#[derive(Clone, Debug)]
pub struct ViewCamera {
    offset: Vec2,
    scale: f64,
    scroll: f64,
    sensitivity: f64,
}

impl ViewCamera {
    /// Camera at the origin, unzoomed.
    pub fn new() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            scroll: 0.0,
            sensitivity: 0.3,
        }
    }

    /// Scale response per scroll tick.
    pub fn set_scale_sensitivity(&mut self, sensitivity: f64) {
        self.sensitivity = sensitivity;
    }

    /// Reset pan and zoom to the initial full-board view.
    pub fn reset(&mut self) -> ViewTransform {
        self.offset = Vec2::ZERO;
        self.scroll = 0.0;
        self.scale = 1.0;
        self.transform()
    }

    /// Apply scroll ticks, optionally zooming toward a focus point.
    ///
    /// With a focus, the offset is corrected so the focused point stays
    /// fixed on screen while everything scales around it. Ticks that would
    /// push the scale outside its clamp range are ignored.
    pub fn zoom(&mut self, ticks: f64, focus: Option<Point>) -> ViewTransform {
        let scroll = self.scroll + ticks * self.sensitivity;
        let scale = scroll.exp();

        if scale > MIN_SCALE && scale < MAX_SCALE {
            if let Some(target) = focus {
                let delta_scale = scale / self.scale;
                self.offset.x = (self.offset.x - target.x) * delta_scale + target.x;
                self.offset.y = (self.offset.y - target.y) * delta_scale + target.y;
            }
            self.scroll = scroll;
            self.scale = scale;
        }
        self.transform()
    }

    /// Accumulate a drag delta in normalized device units.
    pub fn pan(&mut self, delta: Vec2) -> ViewTransform {
        self.offset += delta;
        self.transform()
    }

    /// The current view transform.
    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            offset: self.offset,
            scale: self.scale,
        }
    }
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/camera.rs"]
mod tests;
