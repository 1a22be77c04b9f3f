//! Mamdani rule evaluation.
//!
//! Every rule pairs one pole-angle label with one pole-velocity label and
//! names the force class it drives. A rule fires with the minimum of its two
//! antecedent degrees; rules sharing a class are combined by maximum. A class
//! no rule mentions stays at 0.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fuzzify::Fuzzified;
use crate::variable::{AngleLabel, DegreeMap, ForceClass, VelocityLabel};

/// Activation strength of each force class, used as its clip limit.
pub type ClassStrengths = DegreeMap<ForceClass>;

/// One `(angle, velocity) => class` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub angle: AngleLabel,
    pub velocity: VelocityLabel,
    pub class: ForceClass,
}

impl Rule {
    pub const fn new(angle: AngleLabel, velocity: VelocityLabel, class: ForceClass) -> Self {
        Self {
            angle,
            velocity,
            class,
        }
    }

    /// Fuzzy AND of the two antecedents.
    pub fn firing_strength(&self, inputs: &Fuzzified) -> f64 {
        inputs
            .angle
            .get(self.angle)
            .min(inputs.velocity.get(self.velocity))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IF angle IS {} AND velocity IS {} THEN force IS {}",
            self.angle, self.velocity, self.class
        )
    }
}

/// The fixed rule table.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl Default for RuleBase {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleBase {
    /// Build a rule base from an arbitrary table.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The balancing rule table.
    pub fn standard() -> Self {
        use AngleLabel as A;
        use ForceClass as F;
        use VelocityLabel as V;

        let table = [
            (A::UpMoreRight, V::CcwSlow, F::RightFast),
            (A::UpMoreRight, V::CwSlow, F::RightFast),
            (A::UpMoreRight, V::CwFast, F::RightFast),
            (A::DownMoreRight, V::CcwSlow, F::RightFast),
            (A::DownRight, V::CcwSlow, F::RightFast),
            (A::DownRight, V::CwSlow, F::RightFast),
            (A::UpRight, V::CwSlow, F::RightFast),
            (A::UpRight, V::Stop, F::RightFast),
            (A::UpRight, V::CwFast, F::RightFast),
            (A::UpLeft, V::CwFast, F::RightFast),
            (A::Down, V::Stop, F::RightFast),
            (A::Up, V::CwFast, F::RightFast),
            //
            (A::DownMoreRight, V::CwSlow, F::Stop),
            (A::DownMoreLeft, V::CcwSlow, F::Stop),
            (A::DownMoreRight, V::CwFast, F::Stop),
            (A::DownMoreRight, V::CcwFast, F::Stop),
            (A::DownMoreLeft, V::CcwFast, F::Stop),
            (A::DownMoreLeft, V::CwFast, F::Stop),
            (A::DownRight, V::CcwFast, F::Stop),
            (A::DownLeft, V::CwFast, F::Stop),
            (A::Down, V::CwFast, F::Stop),
            (A::Up, V::Stop, F::Stop),
            (A::Down, V::CcwFast, F::Stop),
            //
            (A::UpMoreLeft, V::CwSlow, F::LeftFast),
            (A::UpMoreLeft, V::CcwSlow, F::LeftFast),
            (A::UpMoreLeft, V::CcwFast, F::LeftFast),
            (A::DownMoreLeft, V::CwSlow, F::LeftFast),
            (A::DownLeft, V::CwSlow, F::LeftFast),
            (A::DownLeft, V::CcwSlow, F::LeftFast),
            (A::UpLeft, V::CcwSlow, F::LeftFast),
            (A::UpLeft, V::Stop, F::LeftFast),
            (A::UpRight, V::CcwFast, F::LeftFast),
            (A::UpLeft, V::CcwFast, F::LeftFast),
            (A::Up, V::CcwFast, F::LeftFast),
            //
            (A::UpMoreLeft, V::CwFast, F::RightSlow),
            (A::DownRight, V::CwFast, F::RightSlow),
            (A::UpRight, V::CcwSlow, F::RightSlow),
            (A::Up, V::CwSlow, F::RightSlow),
            //
            (A::UpMoreRight, V::CcwFast, F::LeftSlow),
            (A::DownLeft, V::CcwFast, F::LeftSlow),
            (A::UpLeft, V::CwSlow, F::LeftSlow),
            (A::Up, V::CcwSlow, F::LeftSlow),
        ];

        Self::new(
            table
                .iter()
                .map(|&(angle, velocity, class)| Rule::new(angle, velocity, class))
                .collect(),
        )
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Clauses that drive `class`, in table order.
    pub fn rules_for(&self, class: ForceClass) -> impl Iterator<Item = &Rule> + '_ {
        self.rules.iter().filter(move |r| r.class == class)
    }

    /// Fold every rule into its class with a running maximum.
    pub fn evaluate(&self, inputs: &Fuzzified) -> ClassStrengths {
        let mut strengths = ClassStrengths::zeros();
        for rule in &self.rules {
            let fired = rule.firing_strength(inputs);
            if fired > strengths.get(rule.class) {
                strengths.set(rule.class, fired);
            }
        }
        strengths
    }
}
