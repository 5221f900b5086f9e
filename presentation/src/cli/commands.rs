//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human readable output
    Text,
    /// Pretty-printed JSON
    Json,
}

impl From<OutputFormat> for transkey_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => transkey_domain::OutputFormat::Text,
            OutputFormat::Json => transkey_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for transkey
#[derive(Parser, Debug)]
#[command(name = "transkey")]
#[command(author, version, about = "Extract string literals into translation keys")]
#[command(long_about = r#"
transkey picks the translation files a new key should be written to.

Candidate files are the translation resources of the chosen domain, ranked
by relevance:
  +2  the file lives in the same package (bundle) as the context file
  +1  the file lives under a source root (src/, app/)

Configuration files are loaded from (in priority order):
1. --config <path>                    Explicit config file
2. ./transkey.toml or ./.transkey.toml Project-level config
3. ~/.config/transkey/config.toml     Global config

Example:
  transkey extract --context src/AppBundle/Controller/HomeController.php --domain messages
  transkey candidates --context src/AppBundle/Controller/HomeController.php --domain messages -o json
  transkey domains
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Project root that translation patterns are relative to
    #[arg(short, long, value_name = "DIR", default_value = ".", global = true)]
    pub project: PathBuf,

    /// Output format (defaults to the [output] config, then text)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the interactive extract-key dialog
    Extract {
        /// File the string literal was found in
        #[arg(long, value_name = "FILE")]
        context: PathBuf,

        /// Translation domain to list files for
        #[arg(long, value_name = "DOMAIN")]
        domain: String,

        /// Pre-filled key
        #[arg(long, value_name = "KEY")]
        key: Option<String>,
    },

    /// Print the ranked candidate files without prompting
    Candidates {
        /// File the string literal was found in
        #[arg(long, value_name = "FILE")]
        context: PathBuf,

        /// Translation domain to list files for
        #[arg(long, value_name = "DOMAIN")]
        domain: String,
    },

    /// List the translation domains found in the project
    Domains,
}
