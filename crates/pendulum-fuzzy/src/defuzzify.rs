//! Centroid defuzzification over a fixed sample grid.
//!
//! Each class's output shape is clipped at its rule-derived strength, the
//! clipped shapes are combined pointwise by maximum, and the centroid of the
//! sampled result is the crisp force.

use serde::Serialize;

use crate::error::{EngineError, Result};
use crate::rules::ClassStrengths;
use crate::variable::{ForceClass, LinguisticVariable};

/// Upper bound on the number of samples a grid may hold.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Evenly spaced sample points `start, start + step, ...` strictly below `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleGrid {
    start: f64,
    end: f64,
    step: f64,
    len: usize,
}

impl SampleGrid {
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self> {
        if !(start.is_finite() && end.is_finite() && step.is_finite()) {
            return Err(EngineError::InvalidGrid {
                detail: format!("bounds must be finite, got start={start}, end={end}, step={step}"),
            });
        }
        if step <= 0.0 {
            return Err(EngineError::InvalidGrid {
                detail: format!("step must be > 0, got {step}"),
            });
        }
        if end <= start {
            return Err(EngineError::InvalidGrid {
                detail: format!("end ({end}) must be greater than start ({start})"),
            });
        }

        let count = ((end - start) / step).ceil();
        if count < 1.0 {
            return Err(EngineError::InvalidGrid {
                detail: format!("step {step} leaves no sample between {start} and {end}"),
            });
        }
        if count > MAX_SAMPLES as f64 {
            return Err(EngineError::InvalidGrid {
                detail: format!("{count} samples exceeds the limit of {MAX_SAMPLES}"),
            });
        }

        Ok(Self {
            start,
            end,
            step,
            len: count as usize,
        })
    }

    /// 4000 samples at 0.05 over [-100, 100).
    pub fn standard() -> Self {
        Self {
            start: -100.0,
            end: 100.0,
            step: 0.05,
            len: 4000,
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The i-th sample. Computed by multiplication so error does not accumulate.
    pub fn x(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }

    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |i| self.x(i))
    }

    /// The same span sampled at half the step.
    ///
    /// Fails when the halved step would exceed [`MAX_SAMPLES`].
    pub fn refined(&self) -> Result<Self> {
        Self::new(self.start, self.end, self.step / 2.0)
    }
}

/// Height at `x` of the clipped, max-combined output set.
pub fn aggregate(
    force: &LinguisticVariable<ForceClass>,
    strengths: &ClassStrengths,
    x: f64,
) -> f64 {
    force
        .terms
        .iter()
        .map(|(class, shape)| shape.evaluate(x).min(strengths.get(*class)))
        .fold(0.0, f64::max)
}

/// Weighted centre `Σ(x·y) / Σy` of sampled points; 0 when `Σy` is 0.
pub fn centroid(xs: &[f64], ys: &[f64]) -> f64 {
    weighted_mean(xs.iter().copied().zip(ys.iter().copied()))
}

fn weighted_mean(samples: impl Iterator<Item = (f64, f64)>) -> f64 {
    let (moment, mass) = samples.fold((0.0, 0.0), |(m, w), (x, y)| (m + x * y, w + y));
    if mass == 0.0 {
        0.0
    } else {
        moment / mass
    }
}

/// Reconstructs the output set on a grid and returns its centroid.
#[derive(Debug, Clone)]
pub struct Defuzzifier {
    pub force: LinguisticVariable<ForceClass>,
    pub grid: SampleGrid,
}

impl Default for Defuzzifier {
    fn default() -> Self {
        Self::new(SampleGrid::standard())
    }
}

impl Defuzzifier {
    pub fn new(grid: SampleGrid) -> Self {
        Self {
            force: LinguisticVariable::force(),
            grid,
        }
    }

    pub fn defuzzify(&self, strengths: &ClassStrengths) -> f64 {
        if strengths.is_zero() {
            return 0.0;
        }
        weighted_mean(
            self.grid
                .points()
                .map(|x| (x, aggregate(&self.force, strengths, x))),
        )
    }
}
