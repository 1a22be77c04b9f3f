//! `pendulum labels`: membership tables of every linguistic variable.

use std::fmt::Write as _;

use anyhow::Result;
use serde_json::json;

use pendulum_fuzzy::{FuzzyEngine, Label, LinguisticVariable};

use super::Output;

pub fn run(engine: &FuzzyEngine, out: &Output) -> Result<()> {
    println!("{}", render(engine, out)?);
    Ok(())
}

pub fn render(engine: &FuzzyEngine, out: &Output) -> Result<String> {
    let fuzzifier = engine.fuzzifier();
    let force = &engine.defuzzifier().force;

    if out.is_json() {
        let value = json!([fuzzifier.angle, fuzzifier.velocity, force]);
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut s = String::new();
    write_variable(&mut s, &fuzzifier.angle, out)?;
    write_variable(&mut s, &fuzzifier.velocity, out)?;
    write_variable(&mut s, force, out)?;
    Ok(s.trim_end().to_string())
}

fn write_variable<L: Label>(
    s: &mut String,
    variable: &LinguisticVariable<L>,
    out: &Output,
) -> std::fmt::Result {
    let (lo, hi) = variable.domain;
    writeln!(s, "{} [{}, {}]:", variable.name, out.num(lo), out.num(hi))?;
    for (label, shape) in &variable.terms {
        let points: Vec<String> = shape
            .points
            .iter()
            .map(|p| format!("({}, {})", out.num(p.x), out.num(p.y)))
            .collect();
        let open = match (shape.left_open, shape.right_open) {
            (true, true) => " open both sides",
            (true, false) => " open left",
            (false, true) => " open right",
            (false, false) => "",
        };
        writeln!(s, "  {:<16} {}{open}", label.name(), points.join(" "))?;
    }
    writeln!(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::OutputFormat;

    #[test]
    fn text_shows_every_variable() {
        let out = Output {
            precision: 0,
            format: OutputFormat::Text,
        };
        let text = render(&FuzzyEngine::standard(), &out).unwrap();
        assert!(text.contains("pole_angle [0, 360]:"));
        assert!(text.contains("pole_velocity [-200, 200]:"));
        assert!(text.contains("force [-100, 100]:"));
        assert!(text.contains("cw_fast          (-200, 0) (-200, 1) (-100, 0) open left"));
        assert!(text.contains("ccw_fast         (100, 0) (200, 1) (200, 0) open right"));
    }

    #[test]
    fn json_lists_three_variables() {
        let out = Output {
            precision: 4,
            format: OutputFormat::Json,
        };
        let text = render(&FuzzyEngine::standard(), &out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let vars = value.as_array().unwrap();
        assert_eq!(vars.len(), 3);
        assert_eq!(vars[0]["terms"].as_array().unwrap().len(), 10);
    }
}
