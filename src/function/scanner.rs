// scanner.rs
use super::invoker::ScanInvoker;
use super::naming::report_path;
use super::report::ReportFile;
use super::violation::{count_instances, filter_violations, ViolationDetail};
use super::{Config, ScanError, ScanRequest};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::time::Duration;

/// How a completed scan ended. Both variants exit successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    NoViolations,
    Found { count: usize },
}

/// Runs the scanner against `request.url`, loads and deletes its report,
/// then writes the summary (and detail, when verbose) to `out`.
pub async fn run_scan<I, W>(
    config: &Config,
    request: &ScanRequest,
    invoker: &I,
    out: &mut W,
) -> Result<ScanOutcome, ScanError>
where
    I: ScanInvoker,
    W: Write,
{
    let url = &request.url;

    fs::create_dir_all(&config.output_dir).map_err(|e| {
        ScanError::IOError(format!("cannot create {}: {}", config.output_dir.display(), e))
    })?;
    let report = ReportFile::new(report_path(&config.output_dir, url));
    debug!("report for {} goes to {}", url, report.path().display());

    let pb = spinner(url);
    let output = invoker.invoke(url, report.path()).await;
    pb.finish_and_clear();
    output?.check(url)?;

    // Recovered errors go straight to stderr so a log filter cannot hide them.
    let loaded = report.load();
    if let Err(e) = &loaded {
        eprintln!("{}", e);
    }
    if config.debug {
        dump(out, "axeCliResult", &loaded.as_ref().ok())?;
    }
    if let Err(e) = report.remove() {
        eprintln!("{}", e);
    }
    let result = loaded.map_err(|_| ScanError::NoResult { url: url.clone() })?;

    info!("{} violation types in report", result.violations.len());
    let violations = filter_violations(result.violations, config.extraneous);
    if config.debug {
        dump(out, "filteredViolationTypes", &violations)?;
    }

    if violations.is_empty() {
        writeln!(out, "No violations found for: {}", url)?;
        return Ok(ScanOutcome::NoViolations);
    }

    let count = count_instances(&violations);
    writeln!(out, "Found {} violations for: {}", count, url)?;

    if config.verbose {
        for violation in &violations {
            let detail = ViolationDetail::from(violation);
            writeln!(out, "{}", serde_json::to_string_pretty(&detail)?)?;
        }
    }

    Ok(ScanOutcome::Found { count })
}

fn dump<W: Write, T: Serialize + ?Sized>(out: &mut W, label: &str, value: &T) -> Result<(), ScanError> {
    writeln!(out, "{}: {}", label, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

// Drawn on stderr; hidden when stderr is not a terminal.
fn spinner(url: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Scanning {}", url));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
