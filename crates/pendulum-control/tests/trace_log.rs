//! The controller seam reaches the engine's per-decision trace.

use std::f64::consts::FRAC_PI_2;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

use pendulum_control::{ForceController, FuzzyBalancer, Reading};

struct Capture(Mutex<Vec<(Level, String)>>);

impl Log for Capture {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut records) = self.0.lock() {
            records.push((record.level(), record.target().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

#[test]
fn controller_decide_is_traced() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let balancer = FuzzyBalancer::default();
    balancer.decide(&Reading::pole(3.0 * FRAC_PI_2, 0.0));

    let records = CAPTURE.0.lock().unwrap();
    assert!(records
        .iter()
        .any(|(level, target)| *level == Level::Trace && target == "pendulum_fuzzy::engine"));
}
