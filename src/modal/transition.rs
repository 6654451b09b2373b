//! Keyframe interpolation for modal enter/exit animations.
//!
//! The engine is a small state machine fed with a boolean `on` flag. Every
//! call to [`TransitionEngine::advance`] moves the interpolated style one
//! tick closer to the current target and reports the phase it is in.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Style snapshot used as an interpolation endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub opacity: f64,
    /// Vertical offset in pixels. Negative values sit above the resting spot.
    pub offset_y: f64,
}

impl Keyframe {
    pub const fn new(opacity: f64, offset_y: f64) -> Self {
        Self { opacity, offset_y }
    }

    fn lerp(self, to: Keyframe, t: f64) -> Keyframe {
        Keyframe {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            offset_y: self.offset_y + (to.offset_y - self.offset_y) * t,
        }
    }
}

/// The three named keyframes of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    pub from: Keyframe,
    pub enter: Keyframe,
    pub leave: Keyframe,
}

/// Drop in from slightly above, fall away slightly below.
pub const BASE_TRANSITION: TransitionSpec = TransitionSpec {
    from: Keyframe::new(0.0, -10.0),
    enter: Keyframe::new(1.0, 0.0),
    leave: Keyframe::new(0.0, 10.0),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Timing applied to every enter/exit segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(250),
            easing: Easing::EaseOut,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Entered,
    Exiting,
    Exited,
}

impl Phase {
    pub fn is_animating(self) -> bool {
        matches!(self, Phase::Entering | Phase::Exiting)
    }
}

/// Interpolated style for one render tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    pub opacity: f64,
    pub offset_y: f64,
    pub phase: Phase,
}

impl TransitionFrame {
    pub fn is_rendered(&self) -> bool {
        self.phase != Phase::Exited
    }
}

#[derive(Debug, Clone)]
pub struct TransitionEngine {
    spec: TransitionSpec,
    config: TransitionConfig,
    on: bool,
    phase: Phase,
    start: Keyframe,
    target: Keyframe,
    current: Keyframe,
    elapsed: Duration,
}

impl TransitionEngine {
    pub fn new(spec: TransitionSpec, config: TransitionConfig) -> Self {
        Self {
            spec,
            config,
            on: false,
            phase: Phase::Exited,
            start: spec.from,
            target: spec.from,
            current: spec.from,
            elapsed: Duration::ZERO,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Retarget the animation. Returns `false` when `on` did not change.
    ///
    /// A segment interrupted midway continues from the value it had reached,
    /// so reversing direction never jumps.
    pub fn set_on(&mut self, on: bool) -> bool {
        if on == self.on {
            return false;
        }
        self.on = on;
        self.elapsed = Duration::ZERO;

        if on {
            if self.phase == Phase::Exited {
                self.current = self.spec.from;
            }
            self.start = self.current;
            self.target = self.spec.enter;
            self.phase = Phase::Entering;
        } else if self.phase != Phase::Exited {
            self.start = self.current;
            self.target = self.spec.leave;
            self.phase = Phase::Exiting;
        }
        true
    }

    /// Advance the running segment by `dt` and return the resulting frame.
    pub fn advance(&mut self, dt: Duration) -> TransitionFrame {
        if self.phase.is_animating() {
            self.elapsed = self.elapsed.saturating_add(dt);
            let progress = if self.config.duration.is_zero() {
                1.0
            } else {
                self.elapsed.as_secs_f64() / self.config.duration.as_secs_f64()
            };

            if progress >= 1.0 {
                self.current = self.target;
                self.phase = match self.phase {
                    Phase::Entering => Phase::Entered,
                    _ => Phase::Exited,
                };
            } else {
                let eased = self.config.easing.apply(progress);
                self.current = self.start.lerp(self.target, eased);
            }
        }
        self.frame()
    }

    pub fn frame(&self) -> TransitionFrame {
        TransitionFrame {
            opacity: self.current.opacity,
            offset_y: self.current.offset_y,
            phase: self.phase,
        }
    }
}
