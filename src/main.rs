// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Gather URLs from the arguments and the optional input file
// 3. Check every URL, sequentially or concurrently
// 4. Print results and exit with a proper code
//    (0 = all online, 1 = some offline, 2 = error)
// =============================================================================

mod checker;
mod cli;
mod display;
mod input;

use anyhow::Result;
use checker::{CheckRequest, CheckResult, Checker, ExecutionMode};
use clap::Parser;
use cli::{CheckConfig, Cli};
use tracing_subscriber::EnvFilter;

const EXIT_ALL_ONLINE: i32 = 0;
const EXIT_SOME_OFFLINE: i32 = 1;
const EXIT_ERROR: i32 = 2;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let exit_code = match run(CheckConfig::from(cli)).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so stdout only carries results (useful with --json).
// RUST_LOG wins over the -v/-q flags when it is set.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            match verbose {
                0 => EnvFilter::new("site_checker=warn"),
                1 => EnvFilter::new("site_checker=info,warn"),
                2 => EnvFilter::new("site_checker=debug,info"),
                _ => EnvFilter::new("trace"),
            }
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(config: CheckConfig) -> Result<i32> {
    let mode = ExecutionMode::from_asynchronous(config.asynchronous);
    let json = config.json;

    let request = match CheckRequest::new(collect_urls(config), mode) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {} ❗", e);
            return Ok(EXIT_ERROR);
        }
    };

    let checker = Checker::new()?;

    let results = if json {
        let results = checker.run_batch(request, |_| {}).await;
        display::print_json(&results)?;
        results
    } else {
        let results = checker.run_batch(request, display::print_result).await;
        display::print_summary(&results);
        results
    };

    Ok(exit_code(&results))
}

// Direct URLs first, then the ones from the input file. A bad input file is
// reported but does not stop the URLs given on the command line.
fn collect_urls(config: CheckConfig) -> Vec<String> {
    let mut urls = config.urls;

    if let Some(path) = config.input_file {
        match input::read_urls_from_file(&path) {
            Ok(from_file) => urls.extend(from_file),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    urls
}

fn exit_code(results: &[CheckResult]) -> i32 {
    if results.iter().all(CheckResult::is_online) {
        EXIT_ALL_ONLINE
    } else {
        EXIT_SOME_OFFLINE
    }
}
