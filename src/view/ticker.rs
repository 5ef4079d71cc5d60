/// Fixed-rate accumulator driving repeated actions from arbitrary ticks.
///
/// Callers feed monotonically increasing timestamps from whatever clock
/// drives their loop; [`GenerationTimer::advance`] answers how many whole
/// actions are due to keep the configured rate, independent of how often it
/// is called (catch-up semantics: a late tick yields several actions). The
/// timer imposes no rate limit of its own; throttling how much catch-up to
/// honor is the caller's policy.
#[derive(Clone, Copy, Debug)]
pub struct GenerationTimer {
    period: f64,
    last_action: f64,
}

impl GenerationTimer {
    /// Timer firing `rate_hz` actions per second, anchored at `now` seconds.
    ///
    /// A non-positive or non-finite rate never fires (a paused timer).
    pub fn new(rate_hz: f64, now: f64) -> Self {
        let mut timer = Self {
            period: f64::INFINITY,
            last_action: now,
        };
        timer.set_actions_per_second(rate_hz);
        timer
    }

    /// Change the firing rate without re-anchoring.
    pub fn set_actions_per_second(&mut self, rate_hz: f64) {
        self.period = if rate_hz.is_finite() && rate_hz > 0.0 {
            1.0 / rate_hz
        } else {
            f64::INFINITY
        };
    }

    /// Re-anchor at `now`, dropping any accumulated backlog.
    pub fn reset(&mut self, now: f64) {
        self.last_action = now;
    }

    /// Actions due by `now`, plus the phase in `[0, 1]` toward the next one.
    pub fn advance(&mut self, now: f64) -> (u64, f64) {
        if !self.period.is_finite() {
            return (0, 0.0);
        }

        let mut due = 0u64;
        if now > self.last_action {
            let elapsed = now - self.last_action;
            due = (elapsed / self.period).ceil() as u64;
            self.last_action += due as f64 * self.period;
        }

        let until_next = self.last_action - now;
        let phase = (1.0 - until_next / self.period).clamp(0.0, 1.0);
        (due, phase)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/ticker.rs"]
mod tests;
