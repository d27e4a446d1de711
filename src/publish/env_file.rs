use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::AppResult;
use crate::output::dotenv;

use super::EnvVar;

/// Appends the variables to `path` in `NAME=value` form, the format GitHub
/// Actions reads back from `$GITHUB_ENV`.
pub fn append(path: &Path, vars: &[EnvVar<'_>]) -> AppResult<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(dotenv::render(vars).as_bytes())?;
    tracing::debug!("appended {} variables to {}", vars.len(), path.display());
    Ok(())
}
