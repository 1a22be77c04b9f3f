//! `pendulum sweep`: force curve over a range of angles.

use std::fmt::Write as _;

use anyhow::{bail, Result};
use serde_json::json;

use pendulum_fuzzy::FuzzyEngine;

use super::Output;

/// Sweep parameters, all in degrees.
#[derive(Debug, Clone, Copy)]
pub struct SweepRange {
    pub angular_velocity: f64,
    pub from: f64,
    pub to: f64,
    pub steps: usize,
}

pub fn run(engine: &FuzzyEngine, range: &SweepRange, out: &Output) -> Result<()> {
    println!("{}", render(engine, range, out)?);
    Ok(())
}

pub fn render(engine: &FuzzyEngine, range: &SweepRange, out: &Output) -> Result<String> {
    if range.steps == 0 {
        bail!("--steps must be at least 1");
    }
    let curve = engine.sweep_angle(range.angular_velocity, range.from, range.to, range.steps);

    if out.is_json() {
        let points: Vec<_> = curve
            .iter()
            .map(|(angle, force)| json!({ "angle": angle, "force": force }))
            .collect();
        let value = json!({ "angular_velocity": range.angular_velocity, "points": points });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut s = String::new();
    writeln!(s, "angular velocity {}°/s", out.num(range.angular_velocity))?;
    writeln!(s, "{:>12}  {:>12}", "angle (°)", "force")?;
    for (angle, force) in &curve {
        writeln!(s, "{:>12}  {:>12}", out.num(*angle), out.num(*force))?;
    }
    Ok(s.trim_end().to_string())
}
