//! Raw world state as supplied by the simulation.

use serde::{Deserialize, Serialize};

use pendulum_fuzzy::InputVector;

/// One simulation step's view of the cart and pole.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Reading {
    /// Cart position (length units).
    pub position: f64,
    /// Cart velocity.
    pub velocity: f64,
    /// Pole angle in radians.
    pub angle: f64,
    /// Pole angular velocity in radians per second.
    pub angular_velocity: f64,
}

impl Reading {
    pub fn new(position: f64, velocity: f64, angle: f64, angular_velocity: f64) -> Self {
        Self {
            position,
            velocity,
            angle,
            angular_velocity,
        }
    }

    /// A reading with the cart at rest at the origin.
    pub fn pole(angle: f64, angular_velocity: f64) -> Self {
        Self::new(0.0, 0.0, angle, angular_velocity)
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.velocity.is_finite()
            && self.angle.is_finite()
            && self.angular_velocity.is_finite()
    }

    /// Engine inputs in degrees and degrees per second.
    pub fn to_input(&self) -> InputVector {
        InputVector::new(self.angle.to_degrees(), self.angular_velocity.to_degrees())
    }
}
