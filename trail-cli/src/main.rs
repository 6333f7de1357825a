mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use terminal::TerminalConsole;
use trail_game::{JourneyConfig, JourneyRunner, JourneyState, JourneySummary, RunOptions};

#[derive(Debug, Parser)]
#[command(name = "oregon-trail", version)]
#[command(about = "Travel the Oregon Trail from Independence, Missouri in 1847")]
struct Args {
    /// JSON file overriding the journey constants (start date, turns, budget)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reject shopping amounts that are not whole numbers or break the budget
    #[arg(long)]
    strict_amounts: bool,

    /// Summary printed once the journey ends
    #[arg(long, default_value = "none")]
    #[arg(value_parser = ["none", "json"])]
    report: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let options = RunOptions {
        strict_amounts: args.strict_amounts,
    };

    let mut console = TerminalConsole::new(io::stdin().lock(), io::stdout().lock());
    let state = JourneyRunner::new(&mut console, config, options)
        .run()
        .context("journey aborted")?;

    let mut out = console.into_writer();
    write_report(&mut out, &args.report, &state)?;
    out.flush()?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<JourneyConfig> {
    let Some(path) = path else {
        return Ok(JourneyConfig::default());
    };
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let config = JourneyConfig::from_json(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid settings in {}", path.display()))?;
    log::info!("loaded journey config from {}", path.display());
    Ok(config)
}

fn write_report(out: &mut impl Write, report: &str, state: &JourneyState) -> Result<()> {
    if report == "json" {
        let summary = JourneySummary::from_state(state);
        serde_json::to_writer_pretty(&mut *out, &summary)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trail_game::ShoppingAllocation;

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "oregon-trail-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    fn finished_state() -> JourneyState {
        let mut state = JourneyState::from_config(&JourneyConfig::default()).unwrap();
        state.record_shopping(ShoppingAllocation::new(200, 150, 50, 100, 50));
        while !state.is_game_over() {
            state.advance_turn();
        }
        state
    }

    #[test]
    fn load_config_defaults_without_path() {
        assert_eq!(load_config(None).unwrap(), JourneyConfig::default());
    }

    #[test]
    fn load_config_reads_partial_json() {
        let path = temp_path("config.json");
        fs::write(&path, r#"{ "turn_amount": 3, "days_in_turn": 7 }"#).unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.turn_amount, 3);
        assert_eq!(config.days_in_turn, 7);
        assert_eq!(config.start_date, "1847-04-12 12:00:00");
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let path = temp_path("bad-config.json");
        fs::write(&path, r#"{ "turn_amount": -2 }"#).unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("turn_amount must be at least 0"));
    }

    #[test]
    fn load_config_rejects_calendar_and_budget_overflow() {
        let path = temp_path("huge-config.json");
        fs::write(&path, r#"{ "turn_amount": 200000000, "days_in_turn": 1 }"#).unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().starts_with("invalid settings in"));
        assert!(format!("{err:#}").contains("turn_amount must be at most 10000"));

        let path = temp_path("budget-config.json");
        fs::write(&path, r#"{ "budget": { "wagon_cost": -1 } }"#).unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("budget wagon_cost must be at least 0 (got -1)"));
    }

    #[test]
    fn load_config_reports_missing_file() {
        let path = temp_path("missing.json");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn json_report_contains_summary_fields() {
        let mut out = Vec::new();
        write_report(&mut out, "json", &finished_state()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["final_date"], "November 22");
        assert_eq!(value["final_turn_counter"], 17);
        assert_eq!(value["shopping"]["animals"], "200");
    }

    #[test]
    fn none_report_writes_nothing() {
        let mut out = Vec::new();
        write_report(&mut out, "none", &finished_state()).unwrap();
        assert!(out.is_empty());
    }
}
