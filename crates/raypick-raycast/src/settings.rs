//! Query settings.

use raypick_math::Tolerance;
use serde::{Deserialize, Serialize};

use crate::error::{RaycastError, Result};
use crate::{Hit, Ray};

/// Ray cast parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaycastSettings {
    /// Slack on bounding box bounds in the broad phase.
    pub box_epsilon: f64,
    /// Drop hits behind the ray origin. Off by default: plane and triangle
    /// tests treat the ray as a line.
    pub forward_only: bool,
    /// Drop hits farther than this world-space distance.
    pub max_distance: Option<f64>,
}

impl Default for RaycastSettings {
    fn default() -> Self {
        Self {
            box_epsilon: Tolerance::DEFAULT.slab,
            forward_only: false,
            max_distance: None,
        }
    }
}

impl RaycastSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !self.box_epsilon.is_finite() || self.box_epsilon < 0.0 {
            return Err(RaycastError::InvalidSettings(format!(
                "box_epsilon must be finite and non-negative, got {}",
                self.box_epsilon
            )));
        }
        if let Some(max) = self.max_distance {
            if !(max > 0.0) {
                return Err(RaycastError::InvalidSettings(format!(
                    "max_distance must be positive, got {max}"
                )));
            }
        }
        Ok(())
    }

    /// Whether a world-space hit survives the distance filters.
    pub fn accepts(&self, ray: &Ray, hit: &Hit) -> bool {
        if self.forward_only && (hit.origin - ray.origin).dot(&ray.direction) < 0.0 {
            return false;
        }
        self.max_distance.map_or(true, |max| hit.distance <= max)
    }
}
