use crate::publish::EnvVar;

/// Renders `export` lines for `eval "$(taiji-multinet "$TAG")"`. Names are
/// validated identifiers and values come from a closed set, so no quoting.
pub fn render(vars: &[EnvVar<'_>]) -> String {
    vars.iter()
        .map(|var| format!("export {}={}\n", var.name, var.value))
        .collect()
}
