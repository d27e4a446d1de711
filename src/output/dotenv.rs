use crate::publish::EnvVar;

pub fn render(vars: &[EnvVar<'_>]) -> String {
    vars.iter()
        .map(|var| format!("{}={}\n", var.name, var.value))
        .collect()
}
