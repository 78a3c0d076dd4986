// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The parsed arguments are turned into a plain `CheckConfig` value that is
// passed down explicitly - there is no global parser or app object.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to generate the parsing code, --help and
// --version included.
#[derive(Parser, Debug)]
#[command(
    name = "site-checker",
    version,
    about = "Check the availability of websites",
    long_about = "site-checker sends one lightweight HEAD request to each URL and reports \
                  whether the site is online. URLs come from the command line, a file, or both."
)]
pub struct Cli {
    /// Enter one or more website URLs
    ///
    /// Example: site-checker -u https://python.org https://rust-lang.org
    #[arg(short = 'u', long = "urls", value_name = "URLs", num_args = 1..)]
    pub urls: Vec<String>,

    /// Read URLs from a file, one per line
    #[arg(short = 'f', long = "input-file", value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Run the connectivity checks concurrently
    #[arg(short = 'a', long)]
    pub asynchronous: bool,

    /// Output results in JSON format instead of status lines
    #[arg(long)]
    pub json: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Everything one invocation needs, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub urls: Vec<String>,
    pub input_file: Option<PathBuf>,
    pub asynchronous: bool,
    pub json: bool,
}

impl From<Cli> for CheckConfig {
    fn from(cli: Cli) -> Self {
        Self {
            urls: cli.urls,
            input_file: cli.input_file,
            asynchronous: cli.asynchronous,
            json: cli.json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_urls_and_async_flag() {
        let cli = Cli::try_parse_from([
            "site-checker",
            "-u",
            "https://python.org",
            "https://rust-lang.org",
            "-a",
        ])
        .unwrap();

        let config = CheckConfig::from(cli);
        assert_eq!(config.urls, vec!["https://python.org", "https://rust-lang.org"]);
        assert!(config.asynchronous);
        assert!(!config.json);
        assert_eq!(config.input_file, None);
    }

    #[test]
    fn test_parse_input_file_long_flags() {
        let cli = Cli::try_parse_from([
            "site-checker",
            "--input-file",
            "sites.txt",
            "--json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let config = CheckConfig::from(cli);
        assert_eq!(config.input_file, Some(PathBuf::from("sites.txt")));
        assert!(config.urls.is_empty());
        assert!(config.json);
        assert!(!config.asynchronous);
    }

    #[test]
    fn test_no_arguments_parses_to_empty_config() {
        // Rejecting an empty URL list is done after the input file is read
        let cli = Cli::try_parse_from(["site-checker"]).unwrap();
        assert!(cli.urls.is_empty());
    }

    #[test]
    fn test_urls_flag_requires_a_value() {
        assert!(Cli::try_parse_from(["site-checker", "-u"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["site-checker", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
