use crate::constants::DEFAULT_CONFIDENCE_SPREAD;
use crate::errors::{Error, Result};

use super::prediction_model::ConfidenceRange;

/// Symmetric percentage band around a point estimate.
///
/// This is a fixed spread, not a statistical confidence interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceBand {
    spread: f64,
}

impl Default for ConfidenceBand {
    fn default() -> Self {
        Self {
            spread: DEFAULT_CONFIDENCE_SPREAD,
        }
    }
}

impl ConfidenceBand {
    /// `spread` is a fraction of the estimate and must lie in `[0, 1)`.
    pub fn new(spread: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&spread) {
            return Err(Error::InvalidConfigValue(format!(
                "confidence spread must be in [0, 1), got {}",
                spread
            )));
        }
        Ok(Self { spread })
    }

    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// `point * (1 - spread)` and `point * (1 + spread)`, ordered so that
    /// `lower <= point <= upper` holds for any finite point.
    pub fn band(&self, point: f64) -> ConfidenceRange {
        let a = point * (1.0 - self.spread);
        let b = point * (1.0 + self.spread);
        ConfidenceRange {
            lower: a.min(b),
            upper: a.max(b),
        }
    }
}
