use std::env;
use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use consecutive_ones::{Outcome, ScenarioFile, Verdict};
use log::{Level, LevelFilter, Log, Metadata, Record};

// =============================================================================
// Logging
// =============================================================================

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = match record.level() {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".green(),
            Level::Debug => "DEBUG".blue(),
            Level::Trace => "TRACE".dimmed(),
        };
        eprintln!("{tag} {}: {}", record.target(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

fn init_logging() {
    let level = log_level(env::var("LONGEST_ONES_LOG").ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

// =============================================================================
// Report
// =============================================================================

fn render(outcome: &Outcome) -> String {
    let mark = match &outcome.verdict {
        Verdict::Pass(_) => "✓".green(),
        Verdict::Mismatch { .. } => "✗".red(),
        Verdict::Rejected(_) => "!".yellow(),
    };
    format!("{mark} {}: {}", outcome.name.bold(), outcome.verdict)
}

fn main() -> Result<()> {
    init_logging();

    let file = match env::args().nth(1) {
        Some(path) => ScenarioFile::load(Path::new(&path))
            .with_context(|| format!("loading scenarios from {path}"))?,
        None => ScenarioFile::builtin(),
    };

    let outcomes = file.evaluate();
    for outcome in &outcomes {
        println!("{}", render(outcome));
    }

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    if failed > 0 {
        bail!("{failed} of {} scenarios failed", outcomes.len());
    }
    println!("{}", format!("All {} scenarios passed", outcomes.len()).green());
    Ok(())
}
