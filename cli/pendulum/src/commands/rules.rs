//! `pendulum rules`: print the rule table.

use std::fmt::Write as _;

use anyhow::Result;

use pendulum_fuzzy::{ForceClass, Label, RuleBase};

use super::Output;

pub fn run(rules: &RuleBase, class: Option<&str>, out: &Output) -> Result<()> {
    println!("{}", render(rules, class, out)?);
    Ok(())
}

pub fn render(rules: &RuleBase, class: Option<&str>, out: &Output) -> Result<String> {
    let classes: Vec<ForceClass> = match class {
        Some(name) => vec![name.parse()?],
        None => ForceClass::ALL.to_vec(),
    };

    if out.is_json() {
        let selected: Vec<_> = rules
            .rules()
            .iter()
            .filter(|r| classes.contains(&r.class))
            .collect();
        return Ok(serde_json::to_string_pretty(&selected)?);
    }

    let mut s = String::new();
    for class in classes {
        writeln!(s, "{class} ({} rules):", rules.rules_for(class).count())?;
        for rule in rules.rules_for(class) {
            writeln!(s, "  {rule}")?;
        }
    }
    Ok(s.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::OutputFormat;

    #[test]
    fn all_classes_listed() {
        let text = render(&RuleBase::standard(), None, &Output::default()).unwrap();
        for class in ForceClass::ALL {
            assert!(text.contains(&format!("{class} (")));
        }
        assert_eq!(text.lines().filter(|l| l.starts_with("  IF")).count(), 42);
    }

    #[test]
    fn single_class() {
        let text = render(&RuleBase::standard(), Some("left_slow"), &Output::default()).unwrap();
        assert!(text.starts_with("left_slow (4 rules):"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn unknown_class_is_an_error() {
        let err = render(&RuleBase::standard(), Some("brake"), &Output::default()).unwrap_err();
        assert!(err.to_string().contains("brake"));
    }

    #[test]
    fn json_rules() {
        let out = Output {
            precision: 4,
            format: OutputFormat::Json,
        };
        let text = render(&RuleBase::standard(), Some("stop"), &out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let rules = value.as_array().unwrap();
        assert_eq!(rules.len(), 11);
        assert!(rules.iter().all(|r| r["class"] == "stop"));
    }
}
