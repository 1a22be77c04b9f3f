//! Glue between a cart-pole simulation and the fuzzy engine.
//!
//! The simulation hands over one [`Reading`] per step in SI units and applies
//! the returned force. Cart position and velocity are carried through but do
//! not influence the decision; only the pole angle and angular velocity do.

pub mod balancer;
pub mod reading;

pub use balancer::{ForceController, FuzzyBalancer};
pub use reading::Reading;
