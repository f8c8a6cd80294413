use anyhow::{Context, Result};
use colored::Colorize;
use real_world_validator::{Outcome, Validator, ValidatorConfig, Value};
use std::io::Write;
use std::path::Path;

use super::read_input;

/// Parse a JSON rule batch and validate it
pub fn run(content: &str, config: ValidatorConfig) -> Result<Vec<Outcome>> {
    let raw: Value = serde_json::from_str(content).context("Rules are not valid JSON")?;
    let validator = Validator::new().with_config(config);
    let outcomes = validator.validate_value(&raw)?;
    Ok(outcomes)
}

pub fn all_ok(outcomes: &[Outcome]) -> bool {
    outcomes.iter().all(|o| o.ok)
}

/// Returns whether every outcome was ok
pub fn execute(file: Option<&Path>, config: ValidatorConfig, pretty: bool) -> Result<bool> {
    let content = read_input(file)?;
    let outcomes = run(&content, config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, &outcomes)?;
    } else {
        serde_json::to_writer(&mut out, &outcomes)?;
    }
    writeln!(out)?;

    let failed = outcomes.iter().filter(|o| !o.ok).count();
    tracing::info!("Validated {} rules, {} failed", outcomes.len(), failed);
    if failed > 0 {
        eprintln!(
            "{}",
            format!("{} of {} rules failed", failed, outcomes.len()).yellow()
        );
    }

    Ok(all_ok(&outcomes))
}
