//! Linguistic labels, their membership tables, and per-decision degree maps.
//!
//! Each label enum carries its own static [`MembershipShape`]; a
//! [`LinguisticVariable`] is the ordered table of those shapes over a domain.
//!
//! Pole angle uses 0° as the pole lying to the right, 90° as upright, 180°
//! lying to the left and 270° hanging straight down.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{EngineError, Result};
use crate::membership::MembershipShape;

/// A label of a linguistic variable, backed by a static membership shape.
pub trait Label: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Name of the linguistic variable these labels belong to.
    const VARIABLE: &'static str;
    /// Every label in table order. `ALL[l.index()] == l`.
    const ALL: &'static [Self];

    fn index(self) -> usize;
    fn name(self) -> &'static str;
    fn shape(self) -> MembershipShape;
}

fn parse_label<L: Label>(s: &str) -> Result<L> {
    L::ALL
        .iter()
        .copied()
        .find(|l| l.name() == s)
        .ok_or_else(|| EngineError::UnknownLabel {
            variable: L::VARIABLE,
            name: s.to_string(),
        })
}

/// Pole angle labels, 30°-wide overlapping triangles over [0, 360].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleLabel {
    UpMoreRight,
    UpRight,
    Up,
    UpLeft,
    UpMoreLeft,
    DownMoreLeft,
    DownLeft,
    Down,
    DownRight,
    DownMoreRight,
}

impl Label for AngleLabel {
    const VARIABLE: &'static str = "pole_angle";
    const ALL: &'static [Self] = &[
        AngleLabel::UpMoreRight,
        AngleLabel::UpRight,
        AngleLabel::Up,
        AngleLabel::UpLeft,
        AngleLabel::UpMoreLeft,
        AngleLabel::DownMoreLeft,
        AngleLabel::DownLeft,
        AngleLabel::Down,
        AngleLabel::DownRight,
        AngleLabel::DownMoreRight,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            AngleLabel::UpMoreRight => "up_more_right",
            AngleLabel::UpRight => "up_right",
            AngleLabel::Up => "up",
            AngleLabel::UpLeft => "up_left",
            AngleLabel::UpMoreLeft => "up_more_left",
            AngleLabel::DownMoreLeft => "down_more_left",
            AngleLabel::DownLeft => "down_left",
            AngleLabel::Down => "down",
            AngleLabel::DownRight => "down_right",
            AngleLabel::DownMoreRight => "down_more_right",
        }
    }

    fn shape(self) -> MembershipShape {
        // No label is nonzero at exactly 180°.
        match self {
            AngleLabel::UpMoreRight => MembershipShape::triangle(0.0, 30.0, 60.0),
            AngleLabel::UpRight => MembershipShape::triangle(30.0, 60.0, 90.0),
            AngleLabel::Up => MembershipShape::triangle(60.0, 90.0, 120.0),
            AngleLabel::UpLeft => MembershipShape::triangle(90.0, 120.0, 150.0),
            AngleLabel::UpMoreLeft => MembershipShape::triangle(120.0, 150.0, 180.0),
            AngleLabel::DownMoreLeft => MembershipShape::triangle(180.0, 210.0, 240.0),
            AngleLabel::DownLeft => MembershipShape::triangle(210.0, 240.0, 270.0),
            AngleLabel::Down => MembershipShape::triangle(240.0, 270.0, 300.0),
            AngleLabel::DownRight => MembershipShape::triangle(270.0, 300.0, 330.0),
            AngleLabel::DownMoreRight => MembershipShape::triangle(300.0, 330.0, 360.0),
        }
    }
}

/// Pole angular velocity labels over [-200, 200] °/s.
///
/// Clockwise is negative. The two fast labels are shoulders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocityLabel {
    CwFast,
    CwSlow,
    Stop,
    CcwSlow,
    CcwFast,
}

impl Label for VelocityLabel {
    const VARIABLE: &'static str = "pole_velocity";
    const ALL: &'static [Self] = &[
        VelocityLabel::CwFast,
        VelocityLabel::CwSlow,
        VelocityLabel::Stop,
        VelocityLabel::CcwSlow,
        VelocityLabel::CcwFast,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            VelocityLabel::CwFast => "cw_fast",
            VelocityLabel::CwSlow => "cw_slow",
            VelocityLabel::Stop => "stop",
            VelocityLabel::CcwSlow => "ccw_slow",
            VelocityLabel::CcwFast => "ccw_fast",
        }
    }

    fn shape(self) -> MembershipShape {
        match self {
            VelocityLabel::CwFast => MembershipShape::left_shoulder(-200.0, -100.0),
            VelocityLabel::CwSlow => MembershipShape::triangle(-200.0, -100.0, 0.0),
            VelocityLabel::Stop => MembershipShape::triangle(-100.0, 0.0, 100.0),
            VelocityLabel::CcwSlow => MembershipShape::triangle(0.0, 100.0, 200.0),
            VelocityLabel::CcwFast => MembershipShape::right_shoulder(100.0, 200.0),
        }
    }
}

/// Output force classes. Negative force pushes the cart left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForceClass {
    LeftFast,
    LeftSlow,
    Stop,
    RightSlow,
    RightFast,
}

impl Label for ForceClass {
    const VARIABLE: &'static str = "force";
    const ALL: &'static [Self] = &[
        ForceClass::LeftFast,
        ForceClass::LeftSlow,
        ForceClass::Stop,
        ForceClass::RightSlow,
        ForceClass::RightFast,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            ForceClass::LeftFast => "left_fast",
            ForceClass::LeftSlow => "left_slow",
            ForceClass::Stop => "stop",
            ForceClass::RightSlow => "right_slow",
            ForceClass::RightFast => "right_fast",
        }
    }

    fn shape(self) -> MembershipShape {
        match self {
            ForceClass::LeftFast => MembershipShape::triangle(-100.0, -80.0, -60.0),
            ForceClass::LeftSlow => MembershipShape::triangle(-80.0, -60.0, 0.0),
            ForceClass::Stop => MembershipShape::triangle(-60.0, 0.0, 60.0),
            ForceClass::RightSlow => MembershipShape::triangle(0.0, 60.0, 80.0),
            ForceClass::RightFast => MembershipShape::triangle(60.0, 80.0, 100.0),
        }
    }
}

impl fmt::Display for AngleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for VelocityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ForceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AngleLabel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        parse_label(s)
    }
}

impl FromStr for VelocityLabel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        parse_label(s)
    }
}

impl FromStr for ForceClass {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        parse_label(s)
    }
}

/// Degree of every label of one variable, produced fresh per decision.
#[derive(Clone, PartialEq)]
pub struct DegreeMap<L> {
    degrees: Vec<f64>,
    _label: PhantomData<L>,
}

impl<L: Label> DegreeMap<L> {
    /// A map with every label at degree 0.
    pub fn zeros() -> Self {
        Self {
            degrees: vec![0.0; L::ALL.len()],
            _label: PhantomData,
        }
    }

    /// Degree of `label`. A label missing from the map reads as 0.
    pub fn get(&self, label: L) -> f64 {
        self.degrees.get(label.index()).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, label: L, degree: f64) {
        if let Some(slot) = self.degrees.get_mut(label.index()) {
            *slot = degree;
        }
    }

    /// Labels paired with their degrees, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (L, f64)> + '_ {
        L::ALL.iter().map(move |&l| (l, self.get(l)))
    }

    /// True when every label sits at degree 0.
    pub fn is_zero(&self) -> bool {
        self.degrees.iter().all(|&d| d == 0.0)
    }

    /// The label with the highest degree; the earliest label wins a tie.
    pub fn dominant(&self) -> Option<(L, f64)> {
        self.iter()
            .filter(|(_, d)| *d > 0.0)
            .fold(None, |best, (l, d)| match best {
                Some((_, bd)) if bd >= d => best,
                _ => Some((l, d)),
            })
    }
}

impl<L: Label> fmt::Debug for DegreeMap<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(l, d)| (l.name(), d)))
            .finish()
    }
}

impl<L: Label> Serialize for DegreeMap<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(L::ALL.len()))?;
        for (label, degree) in self.iter() {
            map.serialize_entry(label.name(), &degree)?;
        }
        map.end()
    }
}

/// A named quantity with a domain and an ordered table of labelled shapes.
#[derive(Debug, Clone, Serialize)]
pub struct LinguisticVariable<L> {
    pub name: &'static str,
    pub domain: (f64, f64),
    pub terms: Vec<(L, MembershipShape)>,
}

impl<L: Label> LinguisticVariable<L> {
    /// Build the variable from the labels' static shapes.
    pub fn from_labels(domain: (f64, f64)) -> Self {
        Self {
            name: L::VARIABLE,
            domain,
            terms: L::ALL.iter().map(|&l| (l, l.shape())).collect(),
        }
    }

    /// Evaluate every label against `x`.
    pub fn fuzzify(&self, x: f64) -> DegreeMap<L> {
        let mut map = DegreeMap::zeros();
        for (label, shape) in &self.terms {
            map.set(*label, shape.evaluate(x));
        }
        map
    }

    /// Degree of a single label, or 0 if the label is not in this table.
    pub fn degree(&self, label: L, x: f64) -> f64 {
        self.terms
            .iter()
            .find(|(l, _)| *l == label)
            .map_or(0.0, |(_, shape)| shape.evaluate(x))
    }
}

impl LinguisticVariable<AngleLabel> {
    pub fn pole_angle() -> Self {
        Self::from_labels((0.0, 360.0))
    }
}

impl LinguisticVariable<VelocityLabel> {
    pub fn pole_velocity() -> Self {
        Self::from_labels((-200.0, 200.0))
    }
}

impl LinguisticVariable<ForceClass> {
    pub fn force() -> Self {
        Self::from_labels((-100.0, 100.0))
    }
}
