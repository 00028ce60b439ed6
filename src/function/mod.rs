pub mod config;
pub mod naming;
pub mod invoker;
pub mod scanner;
pub mod violation;
pub mod report;
pub mod error;

pub use self::config::{Cli, Config, ScanRequest};
pub use self::invoker::{AxeCli, ScanInvoker, ScanOutput};
pub use self::scanner::{run_scan, ScanOutcome};
pub use self::report::AxeCliResult;
pub use self::error::ScanError;
