use anyhow::Result;
use structopt::StructOpt;
use axe_scan::function::config::{Cli, Config};
use axe_scan::function::invoker::AxeCli;
use axe_scan::function::scanner::run_scan;
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Arguments and environment
    let cli = Cli::from_args();
    let config = Config::resolve(&cli, |key| std::env::var(key).ok());
    init_logger(config.debug)?;

    let request = match cli.request() {
        Ok(request) => request,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    // 2. Scan and report
    let mut stdout = io::stdout().lock();
    let result = run_scan(&config, &request, &AxeCli::new(&config), &mut stdout).await;
    stdout.flush()?;

    if let Err(err) = result {
        eprintln!("{}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn init_logger(debug: bool) -> Result<()> {
    let level = if debug { "warn,axe_scan=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init()?;
    Ok(())
}
