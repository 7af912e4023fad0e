use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};

/// Cumulative random walk layered over a slow cosine.
///
/// Point `i` is `cos(i / period) + walk_i`, where the walk advances by
/// `(u - 0.5) * step_scale` for `u` uniform in `[0, 1)` before each point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RandomWalkCosine {
    #[serde(default = "default_len")]
    pub len: usize,
    #[serde(default = "default_step_scale")]
    pub step_scale: f64,
    #[serde(default = "default_period")]
    pub period: f64,
}

impl Default for RandomWalkCosine {
    fn default() -> Self {
        Self {
            len: default_len(),
            step_scale: default_step_scale(),
            period: default_period(),
        }
    }
}

impl RandomWalkCosine {
    #[must_use]
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    pub fn validate(self) -> WidgetResult<()> {
        if !self.step_scale.is_finite() || self.step_scale < 0.0 {
            return Err(WidgetError::InvalidConfig(
                "demo series step scale must be finite and >= 0".to_owned(),
            ));
        }
        if !self.period.is_finite() || self.period <= 0.0 {
            return Err(WidgetError::InvalidConfig(
                "demo series period must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Largest distance a point can drift from the cosine baseline.
    #[must_use]
    pub fn max_drift_at(self, index: usize) -> f64 {
        (index + 1) as f64 * self.step_scale * 0.5
    }

    pub fn synthesize<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<f64> {
        let mut series = Vec::with_capacity(self.len);
        let mut walk = 0.0;
        for i in 0..self.len {
            walk += (rng.gen_range(0.0..1.0) - 0.5) * self.step_scale;
            series.push((i as f64 / self.period).cos() + walk);
        }
        series
    }
}

fn default_len() -> usize {
    1500
}

fn default_step_scale() -> f64 {
    0.1
}

fn default_period() -> f64 {
    100.0
}
