use anyhow::Result;
use colored::Colorize;
use railroute::RouteTable;
use std::collections::HashSet;

use crate::config::Settings;

pub fn execute(settings: &Settings) -> Result<()> {
    let routes = settings.load_routes()?;
    let warnings = audit(&routes);

    for warning in &warnings {
        println!("  {} {}", "⚠".yellow(), warning);
    }

    let dynamic = routes.iter().filter(|(_, t)| !t.is_static()).count();
    println!(
        "  {} {} routes ({} static, {} with parameters)",
        "✓".green(),
        routes.len(),
        routes.len() - dynamic,
        dynamic
    );

    if let Some(host) = routes.host() {
        println!("  {} host {}", "✓".green(), host.cyan());
    }

    Ok(())
}

/// Templates that format, but probably not the way their authors meant
fn audit(routes: &RouteTable) -> Vec<String> {
    let mut warnings = Vec::new();

    for (name, template) in routes.iter() {
        let mut seen = HashSet::new();
        for param in template.params() {
            if param.name.is_empty() {
                warnings.push(format!("{}: parameter with an empty name", name));
            } else if !seen.insert(param.name.clone()) {
                warnings.push(format!(
                    "{}: parameter '{}' appears more than once",
                    name, param.name
                ));
            }
        }
    }

    warnings
}
