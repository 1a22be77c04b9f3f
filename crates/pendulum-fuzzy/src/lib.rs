//! Mamdani fuzzy inference engine for balancing an inverted pendulum on a cart.
//!
//! The pipeline turns one crisp reading into one crisp force:
//! - **Membership:** piecewise-linear triangle and shoulder functions
//! - **Fuzzify:** pole angle and angular velocity into label degrees
//! - **Rules:** min/max evaluation of the fixed rule table into five class strengths
//! - **Defuzzify:** clipped output sets sampled on a fixed grid, reduced to their centroid
//!
//! Every table is immutable after construction, so a single [`FuzzyEngine`]
//! can serve concurrent decisions without locking.

pub mod config;
pub mod defuzzify;
pub mod engine;
pub mod error;
pub mod fuzzify;
pub mod membership;
pub mod rules;
pub mod variable;

pub use config::{EngineConfig, SamplingConfig};
pub use defuzzify::{aggregate, centroid, SampleGrid};
pub use engine::{Decision, FuzzyEngine};
pub use error::{EngineError, Result};
pub use fuzzify::{Fuzzified, Fuzzifier, InputVector};
pub use membership::{MembershipShape, Point};
pub use rules::{ClassStrengths, Rule, RuleBase};
pub use variable::{AngleLabel, DegreeMap, ForceClass, Label, LinguisticVariable, VelocityLabel};
