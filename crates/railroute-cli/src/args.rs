use anyhow::{Context, Result};
use railroute::Params;
use serde_json::Value;

/// Builds params from `--json` and `KEY=VALUE` arguments; pairs win over JSON keys.
pub fn collect_params(json: Option<&str>, pairs: &[String]) -> Result<Params> {
    let mut params = match json {
        Some(raw) => {
            let value: Value = serde_json::from_str(raw).context("--json is not valid JSON")?;
            Params::from(value)
        }
        None => Params::new(),
    };

    for pair in pairs {
        let (key, value) = parse_pair(pair)?;
        params.insert(key, value);
    }

    Ok(params)
}

/// `id=5` → (`id`, 5); `name=bob` → (`name`, "bob")
fn parse_pair(pair: &str) -> Result<(String, Value)> {
    let (key, raw) = pair
        .split_once('=')
        .with_context(|| format!("expected KEY=VALUE, got '{}'", pair))?;

    if key.is_empty() {
        anyhow::bail!("empty parameter name in '{}'", pair);
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}
