use crate::cli::Cli;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::network;
use crate::publish::{self, child, env_file};

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        tag,
        format,
        env_file: env_path,
        config,
        verbose: _,
        command,
    } = cli;

    // An absent tag is refused; an explicit "" is a tag like any other.
    let tag = tag.ok_or(AppError::MissingArgument("TAG"))?;
    let ctx = AppContext::bootstrap(config, format)?;

    let resolution = network::classify(&tag);
    tracing::info!(
        "resolved tag {:?} as {}: network={} dir={}",
        resolution.tag,
        resolution.channel,
        resolution.profile.network,
        resolution.profile.network_dir
    );

    let vars = publish::env_vars(&ctx.settings, &resolution.profile);

    if let Some(path) = env_path.as_deref() {
        env_file::append(path, &vars)?;
    }

    if !command.is_empty() {
        return child::run(&command, &vars);
    }

    ctx.output.emit(&resolution, &vars)
}
