use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr so stdout only carries rendered output.
///
/// `RUST_LOG` takes precedence; otherwise warnings only, or debug output for
/// this tool and the library with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "warn,railroute=debug,railroute_cli=debug"
    } else {
        "warn"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
