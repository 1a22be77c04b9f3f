//! Pendulum CLI: query the fuzzy cart-pole controller from the command line.

mod commands;
mod logger;
mod project;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};

use commands::sweep::SweepRange;
use commands::Output;
use pendulum_control::{FuzzyBalancer, Reading};
use project::ProjectConfig;

#[derive(Parser)]
#[command(name = "pendulum", version, about = "Fuzzy controller for the inverted pendulum")]
struct Cli {
    /// Project file (default: nearest pendulum.toml, else built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the force for one sensor reading
    Decide {
        #[command(flatten)]
        reading: ReadingArgs,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every inference stage for one sensor reading
    Trace {
        #[command(flatten)]
        reading: ReadingArgs,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the force over a range of pole angles
    Sweep {
        /// Angular velocity in degrees per second
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        angular_velocity: f64,
        /// First angle in degrees
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        from: f64,
        /// Last angle in degrees
        #[arg(long, default_value_t = 360.0, allow_hyphen_values = true)]
        to: f64,
        /// Number of samples, endpoints included
        #[arg(long, default_value_t = 37)]
        steps: usize,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the rule table
    Rules {
        /// Only rules concluding this force class (e.g. left_fast, stop)
        #[arg(long)]
        class: Option<String>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the membership breakpoints of every label
    Labels {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a default pendulum.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Cart-pole state as handed over by a simulation.
#[derive(Args)]
struct ReadingArgs {
    /// Pole angle (radians unless --degrees)
    #[arg(long, allow_hyphen_values = true)]
    angle: f64,
    /// Pole angular velocity (radians/s unless --degrees)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    angular_velocity: f64,
    /// Cart position (ignored by the controller)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    position: f64,
    /// Cart velocity (ignored by the controller)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    velocity: f64,
    /// Read --angle and --angular-velocity in degrees
    #[arg(long)]
    degrees: bool,
}

impl ReadingArgs {
    fn to_reading(&self) -> Reading {
        let (angle, angular_velocity) = if self.degrees {
            (self.angle.to_radians(), self.angular_velocity.to_radians())
        } else {
            (self.angle, self.angular_velocity)
        };
        Reading::new(self.position, self.velocity, angle, angular_velocity)
    }
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    logger::init(cli.verbose);
    let cwd = std::env::current_dir()?;
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Decide { reading, json } => {
            let (config, balancer) = load_balancer(config_path, &cwd)?;
            let out = Output::new(&config.output, json);
            commands::decide::run(&balancer, &reading.to_reading(), &out)
        }

        Commands::Trace { reading, json } => {
            let (config, balancer) = load_balancer(config_path, &cwd)?;
            let out = Output::new(&config.output, json);
            commands::trace::run(&balancer, &reading.to_reading(), &out)
        }

        Commands::Sweep {
            angular_velocity,
            from,
            to,
            steps,
            json,
        } => {
            let (config, balancer) = load_balancer(config_path, &cwd)?;
            let range = SweepRange {
                angular_velocity,
                from,
                to,
                steps,
            };
            let out = Output::new(&config.output, json);
            commands::sweep::run(balancer.engine(), &range, &out)
        }

        Commands::Rules { class, json } => {
            let (config, balancer) = load_balancer(config_path, &cwd)?;
            let out = Output::new(&config.output, json);
            commands::rules::run(balancer.engine().rules(), class.as_deref(), &out)
        }

        Commands::Labels { json } => {
            let (config, balancer) = load_balancer(config_path, &cwd)?;
            commands::labels::run(balancer.engine(), &Output::new(&config.output, json))
        }

        Commands::Init { force } => commands::init::run(&cwd, force),
    }
}

fn load_balancer(
    config_path: Option<&Path>,
    cwd: &Path,
) -> anyhow::Result<(ProjectConfig, FuzzyBalancer)> {
    let config = ProjectConfig::resolve(config_path, cwd)?;
    let balancer = FuzzyBalancer::from_config(&config.engine_config())
        .context("building the fuzzy engine")?;
    Ok((config, balancer))
}
