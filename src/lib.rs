pub mod app;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod network;
pub mod output;
pub mod publish;

use cli::Cli;
use error::AppResult;

pub use network::{Network, NetworkDir, NetworkProfile, classify, resolve};

pub fn run(cli: Cli) -> AppResult<()> {
    app::run(cli)
}
