// config.rs
use structopt::StructOpt;
use std::path::PathBuf;
use super::ScanError;

pub const DEFAULT_AXE_PATH: &str = "axe";
pub const DEFAULT_DRIVER_PATH: &str = "/usr/local/bin/chromedriver";
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "tmp";

/// Command-line arguments. Every option falls back to its environment
/// variable, then to the built-in default.
#[derive(Debug, Default, StructOpt)]
#[structopt(name = "axe_scan", about = "Run axe against a URL and summarize accessibility violations")]
pub struct Cli {
    /// URL to test (put it after `--` if it starts with `-`)
    pub url: Option<String>,

    /// chromedriver binary passed to axe [env: CHROMEDRIVER_PATH]
    #[structopt(long)]
    pub chromedriver_path: Option<PathBuf>,

    /// Directory for the temporary report file [env: OUTPUT_DIRECTORY]
    #[structopt(long)]
    pub output_directory: Option<PathBuf>,

    /// axe CLI binary [env: AXE_PATH]
    #[structopt(long)]
    pub axe_path: Option<PathBuf>,

    /// Dump the raw and filtered results [env: DEBUG=true]
    #[structopt(long)]
    pub debug: bool,

    /// Keep best-practice violations [env: EXTRANEOUS=true]
    #[structopt(long)]
    pub extraneous: bool,

    /// Print every violation with its instances [env: VERBOSE=true]
    #[structopt(long)]
    pub verbose: bool,
}

/// The URL under test, read once from the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub url: String,
}

impl Cli {
    pub fn request(&self) -> Result<ScanRequest, ScanError> {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() => Ok(ScanRequest { url: url.to_string() }),
            _ => Err(ScanError::Usage),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub axe_path: PathBuf,
    pub driver_path: PathBuf,
    pub output_dir: PathBuf,
    pub debug: bool,
    pub extraneous: bool,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            axe_path: PathBuf::from(DEFAULT_AXE_PATH),
            driver_path: PathBuf::from(DEFAULT_DRIVER_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
            debug: false,
            extraneous: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Resolves the effective settings: CLI > environment > default.
    ///
    /// `env` looks up a variable by name; the binary passes `std::env::var`.
    pub fn resolve<F>(cli: &Cli, env: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |flag: &Option<PathBuf>, key: &str, default: &str| {
            flag.clone()
                .or_else(|| env(key).filter(|v| !v.is_empty()).map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(default))
        };
        let toggle = |flag: bool, key: &str| flag || env(key).as_deref() == Some("true");

        Config {
            axe_path: path(&cli.axe_path, "AXE_PATH", DEFAULT_AXE_PATH),
            driver_path: path(&cli.chromedriver_path, "CHROMEDRIVER_PATH", DEFAULT_DRIVER_PATH),
            output_dir: path(&cli.output_directory, "OUTPUT_DIRECTORY", DEFAULT_OUTPUT_DIRECTORY),
            debug: toggle(cli.debug, "DEBUG"),
            extraneous: toggle(cli.extraneous, "EXTRANEOUS"),
            verbose: toggle(cli.verbose, "VERBOSE"),
        }
    }
}
