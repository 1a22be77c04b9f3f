//! `pendulum trace`: every stage of one decision.

use std::fmt::Write as _;

use anyhow::Result;
use serde_json::json;

use pendulum_control::{FuzzyBalancer, Reading};
use pendulum_fuzzy::{DegreeMap, Label};

use super::Output;

pub fn run(balancer: &FuzzyBalancer, reading: &Reading, out: &Output) -> Result<()> {
    println!("{}", render(balancer, reading, out)?);
    Ok(())
}

pub fn render(balancer: &FuzzyBalancer, reading: &Reading, out: &Output) -> Result<String> {
    let decision = balancer.trace(reading);
    if out.is_json() {
        let value = json!({ "reading": reading, "decision": decision });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut s = String::new();
    writeln!(
        s,
        "input: angle {}° (folded {}°), angular velocity {}°/s",
        out.num(decision.input.angle),
        out.num(decision.folded_angle),
        out.num(decision.input.angular_velocity)
    )?;
    write_map(&mut s, "pole angle", &decision.angle, out)?;
    write_map(&mut s, "pole velocity", &decision.velocity, out)?;
    write_map(&mut s, "class strengths", &decision.strengths, out)?;
    match decision.strengths.dominant() {
        Some((class, degree)) => writeln!(s, "dominant class: {class} ({})", out.num(degree))?,
        None => writeln!(s, "dominant class: none (no rule fired)")?,
    }
    write!(s, "force: {}", out.num(decision.force))?;
    Ok(s)
}

fn write_map<L: Label>(
    s: &mut String,
    title: &str,
    map: &DegreeMap<L>,
    out: &Output,
) -> std::fmt::Result {
    writeln!(s, "{title}:")?;
    for (label, degree) in map.iter() {
        let marker = if degree > 0.0 { "*" } else { " " };
        writeln!(s, "  {marker} {:<16} {}", label.name(), out.num(degree))?;
    }
    Ok(())
}
