//! The assembled inference pipeline.

use serde::Serialize;

use crate::config::EngineConfig;
use crate::defuzzify::{Defuzzifier, SampleGrid};
use crate::error::Result;
use crate::fuzzify::{Fuzzified, Fuzzifier, InputVector};
use crate::rules::{ClassStrengths, RuleBase};
use crate::variable::{AngleLabel, DegreeMap, VelocityLabel};

/// Full trace of one decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub input: InputVector,
    /// The angle actually fed to the label table.
    pub folded_angle: f64,
    pub angle: DegreeMap<AngleLabel>,
    pub velocity: DegreeMap<VelocityLabel>,
    pub strengths: ClassStrengths,
    pub force: f64,
}

/// Fuzzifier, rule base and defuzzifier, built once and shared read-only.
#[derive(Debug, Clone)]
pub struct FuzzyEngine {
    fuzzifier: Fuzzifier,
    rules: RuleBase,
    defuzzifier: Defuzzifier,
}

impl Default for FuzzyEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl FuzzyEngine {
    /// Engine with the standard tables and the given sample grid.
    pub fn with_grid(grid: SampleGrid) -> Self {
        log::debug!(
            "fuzzy engine: {} samples from {} step {}",
            grid.len(),
            grid.start(),
            grid.step()
        );
        Self {
            fuzzifier: Fuzzifier::standard(),
            rules: RuleBase::standard(),
            defuzzifier: Defuzzifier::new(grid),
        }
    }

    pub fn standard() -> Self {
        Self::with_grid(SampleGrid::standard())
    }

    pub fn new(config: &EngineConfig) -> Result<Self> {
        Ok(Self::with_grid(config.sampling.grid()?))
    }

    pub fn fuzzifier(&self) -> &Fuzzifier {
        &self.fuzzifier
    }

    pub fn rules(&self) -> &RuleBase {
        &self.rules
    }

    pub fn defuzzifier(&self) -> &Defuzzifier {
        &self.defuzzifier
    }

    pub fn grid(&self) -> &SampleGrid {
        &self.defuzzifier.grid
    }

    /// Run the whole pipeline and keep every intermediate result.
    pub fn evaluate(&self, input: &InputVector) -> Decision {
        let (fuzzified, strengths, force) = self.infer(input);
        Decision {
            input: *input,
            folded_angle: input.folded_angle(),
            angle: fuzzified.angle,
            velocity: fuzzified.velocity,
            strengths,
            force,
        }
    }

    /// The crisp force for one reading.
    pub fn decide(&self, input: &InputVector) -> f64 {
        self.infer(input).2
    }

    fn infer(&self, input: &InputVector) -> (Fuzzified, ClassStrengths, f64) {
        let fuzzified = self.fuzzifier.fuzzify(input);
        let strengths = self.rules.evaluate(&fuzzified);
        let force = self.defuzzifier.defuzzify(&strengths);
        log::trace!("strengths {strengths:?} -> force {force:.4}");
        (fuzzified, strengths, force)
    }

    /// Force at `steps` evenly spaced angles from `from` to `to` inclusive.
    ///
    /// A single step evaluates `from` only.
    pub fn sweep_angle(
        &self,
        angular_velocity: f64,
        from: f64,
        to: f64,
        steps: usize,
    ) -> Vec<(f64, f64)> {
        let span = if steps > 1 {
            (to - from) / (steps - 1) as f64
        } else {
            0.0
        };
        (0..steps)
            .map(|i| {
                let angle = from + i as f64 * span;
                (angle, self.decide(&InputVector::new(angle, angular_velocity)))
            })
            .collect()
    }
}
