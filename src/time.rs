//! Fixed-step animation clock using an accumulator pattern.
//!
//! `draw_web()` runs at display rate with a variable delta. FrameClock
//! turns `performance.now()` timestamps into a whole number of fixed
//! animation steps, so the springs integrate the same way on every device.

/// Animation steps per second.
pub const STEPS_PER_SEC: u32 = 120;

/// Longest gap (ms) credited in one frame, e.g. after the tab was hidden.
const MAX_FRAME_GAP_MS: f64 = 500.0;

pub struct FrameClock {
    /// Milliseconds per step
    ms_per_step: f64,
    /// Accumulated milliseconds not yet consumed as steps
    accumulator: f64,
    /// Total steps since creation
    pub total_steps: u64,
    /// Timestamp of the last update (ms), None before the first frame
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new(steps_per_sec: u32) -> Self {
        Self {
            ms_per_step: 1000.0 / steps_per_sec.max(1) as f64,
            accumulator: 0.0,
            total_steps: 0,
            last_timestamp: None,
        }
    }

    /// Length of one step in seconds.
    pub fn step_seconds(&self) -> f32 {
        (self.ms_per_step / 1000.0) as f32
    }

    /// Feed the frame timestamp; returns how many steps to integrate.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_GAP_MS),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let steps = (self.accumulator / self.ms_per_step) as u32;
        self.accumulator -= steps as f64 * self.ms_per_step;
        self.total_steps += steps as u64;
        steps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(STEPS_PER_SEC)
    }
}
