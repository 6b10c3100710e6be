use clap::Parser;
use quill_cli::{resolve_config, run, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let result = resolve_config(&cli)
        .and_then(|config| run(&cli, &config, &mut std::io::stdout().lock()));
    if let Err(e) = result {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
