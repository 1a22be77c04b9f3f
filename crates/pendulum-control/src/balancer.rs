//! The controller seam and its fuzzy implementation.

use pendulum_fuzzy::{Decision, EngineConfig, FuzzyEngine, InputVector};

use crate::reading::Reading;

/// Anything that can turn a reading into a force for the simulation.
pub trait ForceController {
    /// Force to apply to the cart for this step.
    fn decide(&self, reading: &Reading) -> f64;
}

/// Balances the pole with the fuzzy engine.
///
/// Holds no state between decisions.
#[derive(Debug, Clone, Default)]
pub struct FuzzyBalancer {
    engine: FuzzyEngine,
}

impl FuzzyBalancer {
    pub fn new(engine: FuzzyEngine) -> Self {
        Self { engine }
    }

    pub fn from_config(config: &EngineConfig) -> pendulum_fuzzy::Result<Self> {
        Ok(Self::new(FuzzyEngine::new(config)?))
    }

    pub fn engine(&self) -> &FuzzyEngine {
        &self.engine
    }

    /// Decide and keep the full inference trace.
    pub fn trace(&self, reading: &Reading) -> Decision {
        self.engine.evaluate(&self.input_for(reading))
    }

    fn input_for(&self, reading: &Reading) -> InputVector {
        if !reading.is_finite() {
            log::warn!("non-finite reading {reading:?}; unmatched inputs contribute no force");
        }
        reading.to_input()
    }
}

impl ForceController for FuzzyBalancer {
    fn decide(&self, reading: &Reading) -> f64 {
        self.engine.decide(&self.input_for(reading))
    }
}
