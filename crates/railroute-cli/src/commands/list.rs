use anyhow::Result;
use colored::Colorize;
use railroute::{ParamInfo, RouteTemplate};

use crate::config::Settings;

pub fn execute(settings: &Settings) -> Result<()> {
    let routes = settings.load_routes()?;

    if routes.is_empty() {
        println!("{}", "No routes registered".yellow());
        return Ok(());
    }

    let width = routes.names().iter().map(|n| n.len()).max().unwrap_or(0);
    for (name, template) in routes.iter() {
        println!("{}  {}", format!("{:width$}", name).bold(), describe(template));
    }

    Ok(())
}

/// `/foo/:bar(/:fizz)  [bar, (fizz)]`
fn describe(template: &RouteTemplate) -> String {
    let params = template.params();
    if params.is_empty() {
        return template.to_string();
    }

    let params: Vec<String> = params.iter().map(param_label).collect();
    format!("{}  [{}]", template, params.join(", "))
}

fn param_label(param: &ParamInfo) -> String {
    let name = if param.blob {
        format!("*{}", param.name)
    } else {
        param.name.clone()
    };

    if param.optional {
        format!("({})", name)
    } else {
        name
    }
}
