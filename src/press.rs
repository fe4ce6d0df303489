//! Press feedback: a per-button scale that springs toward 0.95 while held
//! and back to 1.0 on release.
//!
//! Each [`PressAnimator`] owns its own value and velocity. Nothing is shared
//! between buttons, and nothing here gates the logical action; the screen
//! dispatches on the gesture event regardless of where the spring is.

/// Scale while the button is held down.
pub const PRESSED_SCALE: f32 = 0.95;
/// Resting scale.
pub const RESTING_SCALE: f32 = 1.0;

/// The spring snaps to its target once both speed and displacement fall
/// below this.
pub const REST_THRESHOLD: f32 = 0.001;

/// Origami-style spring parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub tension: f32,
    pub friction: f32,
}

impl SpringConfig {
    /// Parameters used when none are given.
    pub const DEFAULT: SpringConfig = SpringConfig { tension: 40.0, friction: 7.0 };

    /// Bouncier spring used on release.
    pub const RELEASE: SpringConfig = SpringConfig { tension: 40.0, friction: 3.0 };

    /// Stiffness of the equivalent unit-mass oscillator.
    pub fn stiffness(&self) -> f32 {
        (self.tension - 30.0) * 3.62 + 194.0
    }

    /// Damping coefficient of the equivalent unit-mass oscillator.
    pub fn damping(&self) -> f32 {
        (self.friction - 8.0) * 3.0 + 25.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PressAnimator {
    value: f32,
    velocity: f32,
    target: f32,
    spring: SpringConfig,
}

impl Default for PressAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl PressAnimator {
    pub fn new() -> Self {
        Self {
            value: RESTING_SCALE,
            velocity: 0.0,
            target: RESTING_SCALE,
            spring: SpringConfig::DEFAULT,
        }
    }

    /// Current visual scale.
    pub fn scale(&self) -> f32 {
        self.value
    }

    /// Where the spring is heading.
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    pub fn press_down(&mut self) {
        self.retarget(PRESSED_SCALE, SpringConfig::DEFAULT);
    }

    pub fn press_up(&mut self) {
        self.retarget(RESTING_SCALE, SpringConfig::RELEASE);
    }

    /// A gesture that ends without activation springs back the same way.
    pub fn press_cancel(&mut self) {
        self.press_up();
    }

    /// Supersede the running animation; value and velocity carry over.
    fn retarget(&mut self, target: f32, spring: SpringConfig) {
        self.target = target;
        self.spring = spring;
    }

    /// Integrate one step of `dt` seconds (semi-implicit Euler).
    pub fn step(&mut self, dt: f32) {
        if self.is_at_rest() || dt <= 0.0 {
            return;
        }

        let displacement = self.value - self.target;
        let accel = -self.spring.stiffness() * displacement - self.spring.damping() * self.velocity;
        self.velocity += accel * dt;
        self.value += self.velocity * dt;

        if self.velocity.abs() < REST_THRESHOLD && (self.value - self.target).abs() < REST_THRESHOLD {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    /// Advance `steps` fixed steps.
    pub fn advance(&mut self, steps: u32, dt: f32) {
        for _ in 0..steps {
            if self.is_at_rest() {
                break;
            }
            self.step(dt);
        }
    }
}
