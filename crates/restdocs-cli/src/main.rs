//! CLI entry point - the composition root.
//!
//! Settings are resolved once via bootstrap; command dispatch routes to
//! handlers. Errors are mapped to exit codes through `CliError`.

use clap::Parser;

use restdocs_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

/// Initialize tracing on stderr so command output on stdout stays clean.
///
/// Log level is controlled by RUST_LOG (default: warn, or debug with --verbose).
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = bootstrap(&CliConfig::from_cli(&cli))?;

    match cli.command {
        Commands::Verify {
            operation,
            manifest,
        } => handlers::verify::execute(&ctx, &operation, &manifest),
        Commands::Document {
            operation,
            manifest,
        } => handlers::document::execute(&ctx, &operation, &manifest),
        Commands::Templates => {
            handlers::templates::execute(&ctx);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
