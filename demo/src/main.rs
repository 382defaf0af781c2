//! navstack demo runner
//!
//! Replays a navigation scenario against a fresh runtime and prints the
//! stack after every step.
//!
//! Usage:
//!   navstack-demo                         # built-in scenario
//!   navstack-demo scenarios/rewind.toml --config navstack.toml --json

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use navstack_demo::{Scenario, StepReport};
use navstack_resolver::{FlagResolver, NavigationRuntime, ResolverConfig};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "navstack-demo")]
#[command(about = "Replay navigation scenarios against a navstack runtime")]
struct Args {
    /// Scenario file (TOML). Runs the built-in scenario when omitted.
    scenario: Option<PathBuf>,

    /// Resolver config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = match &args.config {
        Some(path) => ResolverConfig::try_load_from(path)
            .with_context(|| format!("loading resolver config {}", path.display()))?,
        None => ResolverConfig::default(),
    };

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => Scenario::builtin(),
    };
    info!(
        scenario = %scenario.name,
        steps = scenario.steps.len(),
        match_policy = ?config.match_policy,
        "Running scenario"
    );

    let mut runtime = NavigationRuntime::with_resolver(FlagResolver::with_config(config));
    let reports = scenario.run(&mut runtime).context("running scenario")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_reports(&reports);
    }
    Ok(())
}

fn print_reports(reports: &[StepReport]) {
    let width = reports.iter().map(|r| r.step.len()).max().unwrap_or(0);
    for report in reports {
        let stack = format!("[{}]", report.stack.join(", "));
        match &report.plan {
            Some(plan) => println!("{:<width$}  {stack}  <- {plan}", report.step),
            None => println!("{:<width$}  {stack}", report.step),
        }
    }
}
