use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vault_opener::cli::{Cli, Commands};
use vault_opener::cli::commands;

/// Diagnostics go to stderr so stdout stays clean for tables and
/// completion scripts. `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .compact(),
        )
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Open {
            vault,
            mask,
            no_save_prompt,
        } => commands::open::execute(&cli, vault.as_deref(), *mask, *no_save_prompt),
        Commands::Export {
            vault,
            output,
            yes,
            force,
        } => commands::export::execute(&cli, vault.as_deref(), output.as_deref(), *yes, *force),
        Commands::Inspect { vault } => commands::inspect::execute(vault.as_deref()),
        Commands::Version => commands::version::execute(),
        Commands::Completions { shell } => commands::completions::execute(*shell),
    };

    if let Err(e) = result {
        tracing::debug!(kind = %e.kind(), "command failed");
        vault_opener::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
