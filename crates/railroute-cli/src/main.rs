mod args;
mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "railroute")]
#[command(version, about = "Render paths and URLs from an exported route table", long_about = None)]
struct Cli {
    /// Route table JSON (overrides `routes` in the config file)
    #[arg(short, long, global = true)]
    routes: Option<PathBuf>,

    /// Config file (defaults to ./railroute.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the path for a named route
    Path {
        /// Route name, e.g. `foo_bar`
        name: String,

        /// Parameters as KEY=VALUE; values are read as JSON when they parse
        params: Vec<String>,

        /// Parameters as a JSON object or a bare id
        #[arg(short, long)]
        json: Option<String>,
    },

    /// Print the absolute URL for a named route
    Url {
        /// Route name, e.g. `foo_bar`
        name: String,

        /// Parameters as KEY=VALUE; values are read as JSON when they parse
        params: Vec<String>,

        /// Parameters as a JSON object or a bare id
        #[arg(short, long)]
        json: Option<String>,

        /// Host to prefix (overrides `host` in the config file)
        #[arg(long)]
        host: Option<String>,
    },

    /// List every route with its template
    List,

    /// Validate the route table
    Check,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init_logging(cli.verbose);

    let settings = config::Settings::load(cli.config.as_deref())?.with_routes(cli.routes);

    match cli.command {
        Commands::Path { name, params, json } => {
            let params = args::collect_params(json.as_deref(), &params)?;
            commands::format::path(&settings, &name, params)?;
        }
        Commands::Url {
            name,
            params,
            json,
            host,
        } => {
            let params = args::collect_params(json.as_deref(), &params)?;
            commands::format::url(&settings.with_host(host), &name, params)?;
        }
        Commands::List => {
            commands::list::execute(&settings)?;
        }
        Commands::Check => {
            commands::check::execute(&settings)?;
        }
    }

    Ok(())
}
