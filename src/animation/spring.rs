use crate::foundation::error::{FolioError, FolioResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Integration sub-step length in seconds.
const MAX_STEP_SECS: f64 = 1.0 / 240.0;

/// Elapsed time per tick beyond this is dropped.
const MAX_TICK_SECS: f64 = 0.1;

/// Tunable constants of the smoothing spring (unit mass).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SmoothingConfig {
    /// Spring stiffness `k`.
    pub stiffness: f64,
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Distance (and speed) below which the filter snaps to its target.
    pub rest_delta: f64,
}

impl SmoothingConfig {
    /// Scroll-progress smoothing used by the hero view.
    pub const SCROLL: Self = Self {
        stiffness: 100.0,
        damping: 30.0,
        rest_delta: 0.001,
    };

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        let cfg: Self =
            serde_json::from_reader(r).map_err(|e| FolioError::json("smoothing config", e))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| FolioError::io(path, e))?;
        Self::from_reader(BufReader::new(f))
    }

    /// All three constants must be finite and strictly positive.
    pub fn validate(&self) -> FolioResult<()> {
        for (name, v) in [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("restDelta", self.rest_delta),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(FolioError::validation(format!(
                    "smoothing {name} must be finite and > 0, got {v}"
                )));
            }
        }
        Ok(())
    }

    /// `c / (2·√k)`; `>= 1` means the spring never overshoots its target.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * self.stiffness.sqrt())
    }

    /// `true` when the spring is critically damped or overdamped.
    pub fn is_non_oscillating(&self) -> bool {
        self.damping_ratio() >= 1.0
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self::SCROLL
    }
}

/// Second-order smoothing filter with spring dynamics.
///
/// Output depends only on the previous `(position, velocity)` state, the target and the
/// elapsed time passed to [`SmoothingFilter::tick`]; there is no clock.
#[derive(Clone, Debug)]
pub struct SmoothingFilter {
    config: SmoothingConfig,
    position: f64,
    velocity: f64,
}

impl SmoothingFilter {
    /// Create a filter resting at `initial`.
    pub fn new(config: SmoothingConfig, initial: f64) -> FolioResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            position: initial,
            velocity: 0.0,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> SmoothingConfig {
        self.config
    }

    /// Current output.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current velocity in units per second.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Drop all motion and rest at `value`.
    pub fn reset(&mut self, value: f64) {
        self.position = value;
        self.velocity = 0.0;
    }

    /// `true` when the filter sits exactly at `target` with no motion.
    pub fn is_settled(&self, target: f64) -> bool {
        self.position == target && self.velocity == 0.0
    }

    /// Advance the spring toward `target` by `dt_secs` and return the new output.
    ///
    /// Uses semi-implicit Euler over fixed sub-steps with `a = k·(target − x) − c·v`.
    /// Once both the distance to target and the speed fall under `rest_delta` the state snaps
    /// exactly onto the target.
    pub fn tick(&mut self, target: f64, dt_secs: f64) -> f64 {
        if !target.is_finite() {
            return self.position;
        }
        if self.within_rest(target) {
            self.reset(target);
            return self.position;
        }

        let mut remaining = if dt_secs.is_finite() {
            dt_secs.clamp(0.0, MAX_TICK_SECS)
        } else {
            0.0
        };
        let SmoothingConfig {
            stiffness,
            damping,
            ..
        } = self.config;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let accel = stiffness * (target - self.position) - damping * self.velocity;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.within_rest(target) {
            self.reset(target);
        }
        self.position
    }

    fn within_rest(&self, target: f64) -> bool {
        (target - self.position).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_delta
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
