// invoker.rs
use super::{Config, ScanError};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Everything the scanner printed, collected after it exited.
#[derive(Debug, Clone, Default)]
pub struct ScanOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ScanOutput {
    /// Any stderr text counts as failure, regardless of exit status.
    /// Otherwise an empty stdout means no report was produced.
    pub fn check(&self, url: &str) -> Result<(), ScanError> {
        if !self.stderr.is_empty() {
            return Err(ScanError::Invocation(self.stderr.trim().to_string()));
        }
        if self.stdout.is_empty() {
            return Err(ScanError::EmptyOutput { url: url.to_string() });
        }
        Ok(())
    }
}

/// Runs an accessibility scan that saves its JSON report to `report_path`.
#[allow(async_fn_in_trait)]
pub trait ScanInvoker {
    async fn invoke(&self, url: &str, report_path: &Path) -> Result<ScanOutput, ScanError>;
}

/// The `axe` command-line scanner.
#[derive(Debug, Clone)]
pub struct AxeCli {
    pub axe_path: PathBuf,
    pub driver_path: PathBuf,
}

impl AxeCli {
    pub fn new(config: &Config) -> Self {
        AxeCli {
            axe_path: config.axe_path.clone(),
            driver_path: config.driver_path.clone(),
        }
    }

    fn args(&self, url: &str, report_path: &Path) -> Vec<String> {
        vec![
            format!("--chromedriver-path={}", self.driver_path.display()),
            "--save".to_string(),
            report_path.display().to_string(),
            url.to_string(),
        ]
    }
}

impl ScanInvoker for AxeCli {
    async fn invoke(&self, url: &str, report_path: &Path) -> Result<ScanOutput, ScanError> {
        let args = self.args(url, report_path);
        debug!("running {} {}", self.axe_path.display(), args.join(" "));

        let output = Command::new(&self.axe_path)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                ScanError::Invocation(format!("failed to run {}: {}", self.axe_path.display(), e))
            })?;

        debug!("{} exited with {}", self.axe_path.display(), output.status);

        Ok(ScanOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
