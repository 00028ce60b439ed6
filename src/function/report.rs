// report.rs
use super::ScanError;
use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A selector for one node. Elements inside iframes or shadow roots are
/// addressed by a nested list of selectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Target {
    Selector(String),
    Nested(Vec<String>),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Selector(selector) => f.write_str(selector),
            Target::Nested(path) => f.write_str(&path.join(",")),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViolationInstance {
    pub impact: Option<String>,
    pub html: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub target: Vec<Target>,
    pub failure_summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViolationType {
    pub id: String,
    pub impact: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    pub description: String,
    pub help: String,
    pub help_url: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub nodes: Vec<ViolationInstance>,
}

/// One page result from the axe report. Fields other than `violations`
/// are kept as-is so the debug dump shows the whole result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxeCliResult {
    #[serde(deserialize_with = "null_as_empty")]
    pub violations: Vec<ViolationType>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// axe leaves some lists as `null`; read them as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses an axe report: a JSON array whose first element is the result.
/// Later elements are ignored.
pub fn parse_report(text: &str) -> Result<AxeCliResult, ScanError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ScanError::ReportParse(e.to_string()))?;

    let Value::Array(mut results) = value else {
        return Err(ScanError::ReportParse("expected a JSON array of results".into()));
    };
    if results.is_empty() {
        return Err(ScanError::ReportParse("report contains no results".into()));
    }
    if results.len() > 1 {
        warn!(
            "report contains {} results; only the first is used, {} ignored",
            results.len(),
            results.len() - 1
        );
    }

    serde_json::from_value(results.swap_remove(0)).map_err(|e| ScanError::ReportParse(e.to_string()))
}

/// The temporary report written by the scanner. The file is deleted by
/// `remove`, or on drop if `remove` was never called.
#[derive(Debug)]
pub struct ReportFile {
    path: PathBuf,
    removed: bool,
}

impl ReportFile {
    pub fn new(path: PathBuf) -> Self {
        ReportFile { path, removed: false }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<AxeCliResult, ScanError> {
        let text = fs::read_to_string(&self.path)
            .map_err(|e| ScanError::ReportParse(format!("{}: {}", self.path.display(), e)))?;
        parse_report(&text)
    }

    pub fn remove(mut self) -> Result<(), ScanError> {
        self.removed = true;
        fs::remove_file(&self.path)
            .map_err(|e| ScanError::Cleanup(format!("{}: {}", self.path.display(), e)))?;
        debug!("removed {}", self.path.display());
        Ok(())
    }
}

impl Drop for ReportFile {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => {
                warn!("could not remove {}: {}", self.path.display(), e);
            }
            _ => {}
        }
    }
}
