//! `pendulum decide`: one force for one reading.

use anyhow::Result;
use serde_json::json;

use pendulum_control::{ForceController, FuzzyBalancer, Reading};

use super::Output;

pub fn run(balancer: &FuzzyBalancer, reading: &Reading, out: &Output) -> Result<()> {
    println!("{}", render(balancer, reading, out)?);
    Ok(())
}

pub fn render(balancer: &FuzzyBalancer, reading: &Reading, out: &Output) -> Result<String> {
    let force = balancer.decide(reading);
    if out.is_json() {
        let value = json!({ "reading": reading, "force": force });
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    Ok(out.num(force))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::project::OutputFormat;

    #[test]
    fn text_is_just_the_force() {
        let out = Output {
            precision: 2,
            format: OutputFormat::Text,
        };
        let text = render(&FuzzyBalancer::default(), &Reading::pole(3.0 * FRAC_PI_2, 0.0), &out)
            .unwrap();
        assert_eq!(text, "80.00");
    }

    #[test]
    fn json_carries_reading_and_force() {
        let out = Output {
            precision: 4,
            format: OutputFormat::Json,
        };
        let text = render(&FuzzyBalancer::default(), &Reading::pole(FRAC_PI_2, 0.0), &out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["reading"]["angle"], FRAC_PI_2);
        assert!(value["force"].as_f64().unwrap().abs() < 1e-6);
    }
}
