use anyhow::Result;
use railroute::Params;
use tracing::debug;

use crate::config::Settings;

pub fn path(settings: &Settings, name: &str, params: Params) -> Result<()> {
    let routes = settings.load_routes()?;
    debug!(route = name, params = params.len(), "formatting path");
    println!("{}", routes.path(name, params)?);
    Ok(())
}

pub fn url(settings: &Settings, name: &str, params: Params) -> Result<()> {
    let routes = settings.load_routes()?;
    debug!(route = name, params = params.len(), "formatting url");
    println!("{}", routes.url(name, params)?);
    Ok(())
}
