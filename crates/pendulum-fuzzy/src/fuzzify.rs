//! Fuzzification of the two driving inputs.

use serde::{Deserialize, Serialize};

use crate::variable::{AngleLabel, DegreeMap, LinguisticVariable, VelocityLabel};

/// Crisp inputs to the engine, in degrees and degrees per second.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputVector {
    pub angle: f64,
    pub angular_velocity: f64,
}

impl InputVector {
    pub fn new(angle: f64, angular_velocity: f64) -> Self {
        Self {
            angle,
            angular_velocity,
        }
    }

    /// The angle as the label table sees it.
    ///
    /// The table covers only non-negative angles, so the sign is dropped and
    /// never re-applied downstream.
    pub fn folded_angle(&self) -> f64 {
        self.angle.abs()
    }
}

/// Label degrees for both inputs of one decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fuzzified {
    pub angle: DegreeMap<AngleLabel>,
    pub velocity: DegreeMap<VelocityLabel>,
}

/// Evaluates every pole-angle and pole-velocity label against a reading.
#[derive(Debug, Clone)]
pub struct Fuzzifier {
    pub angle: LinguisticVariable<AngleLabel>,
    pub velocity: LinguisticVariable<VelocityLabel>,
}

impl Default for Fuzzifier {
    fn default() -> Self {
        Self::standard()
    }
}

impl Fuzzifier {
    pub fn standard() -> Self {
        Self {
            angle: LinguisticVariable::pole_angle(),
            velocity: LinguisticVariable::pole_velocity(),
        }
    }

    pub fn fuzzify(&self, input: &InputVector) -> Fuzzified {
        Fuzzified {
            angle: self.angle.fuzzify(input.folded_angle()),
            velocity: self.velocity.fuzzify(input.angular_velocity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upright_and_still() {
        let f = Fuzzifier::standard().fuzzify(&InputVector::new(90.0, 0.0));
        assert_eq!(f.angle.get(AngleLabel::Up), 1.0);
        assert_eq!(f.velocity.get(VelocityLabel::Stop), 1.0);
        let others = f.angle.iter().filter(|(l, _)| *l != AngleLabel::Up);
        assert!(others.map(|(_, d)| d).all(|d| d == 0.0));
    }

    #[test]
    fn negative_angle_is_folded() {
        let fuzzifier = Fuzzifier::standard();
        let pos = fuzzifier.fuzzify(&InputVector::new(100.0, 30.0));
        let neg = fuzzifier.fuzzify(&InputVector::new(-100.0, 30.0));
        assert_eq!(pos, neg);
    }

    #[test]
    fn velocity_sign_is_kept() {
        let fuzzifier = Fuzzifier::standard();
        let cw = fuzzifier.fuzzify(&InputVector::new(90.0, -150.0));
        let ccw = fuzzifier.fuzzify(&InputVector::new(90.0, 150.0));
        assert_eq!(cw.velocity.get(VelocityLabel::CwFast), 0.5);
        assert_eq!(cw.velocity.get(VelocityLabel::CcwFast), 0.0);
        assert_eq!(ccw.velocity.get(VelocityLabel::CcwFast), 0.5);
    }

    #[test]
    fn every_degree_in_unit_range() {
        let fuzzifier = Fuzzifier::standard();
        for i in -80..=80 {
            let input = InputVector::new(f64::from(i) * 7.3, f64::from(i) * 5.1);
            let f = fuzzifier.fuzzify(&input);
            for (_, d) in f.angle.iter() {
                assert!((0.0..=1.0).contains(&d));
            }
            for (_, d) in f.velocity.iter() {
                assert!((0.0..=1.0).contains(&d));
            }
        }
    }

    #[test]
    fn non_finite_inputs_degrade_to_zero_or_shoulders() {
        let fuzzifier = Fuzzifier::standard();
        let f = fuzzifier.fuzzify(&InputVector::new(f64::NAN, f64::NAN));
        assert!(f.angle.iter().all(|(_, d)| d == 0.0));
        assert!(f.velocity.iter().all(|(_, d)| d == 0.0));

        let f = fuzzifier.fuzzify(&InputVector::new(f64::INFINITY, f64::NEG_INFINITY));
        assert!(f.angle.iter().all(|(_, d)| d == 0.0));
        assert_eq!(f.velocity.get(VelocityLabel::CwFast), 1.0);
    }
}
