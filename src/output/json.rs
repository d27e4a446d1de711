use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::AppResult;
use crate::network::Resolution;
use crate::publish::EnvVar;

#[derive(Debug, Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    resolution: &'a Resolution<'a>,
    variables: BTreeMap<&'a str, &'static str>,
}

pub fn render(resolution: &Resolution<'_>, vars: &[EnvVar<'_>]) -> AppResult<String> {
    let report = Report {
        resolution,
        variables: vars.iter().map(|var| (var.name, var.value)).collect(),
    };
    let mut payload = serde_json::to_string_pretty(&report)?;
    payload.push('\n');
    Ok(payload)
}
