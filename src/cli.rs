use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "taiji-multinet",
    version,
    about = "Resolve the target network for a release tag"
)]
pub struct Cli {
    #[arg(help = "Release tag, e.g. v1.2.3-rc.1")]
    pub tag: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Shell, help = "Output format")]
    pub format: OutputFormat,
    #[arg(long, help = "Append NAME=value lines to this file (e.g. $GITHUB_ENV)")]
    pub env_file: Option<PathBuf>,
    #[arg(long, env = "TAIJI_MULTINET_CONFIG", help = "Settings file")]
    pub config: Option<PathBuf>,
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[arg(
        last = true,
        help = "Command to run with the network variables set"
    )]
    pub command: Vec<String>,
}
