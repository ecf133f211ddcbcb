//! Ongkir CLI - Command-line interface for the delivery fee resolver.

use clap::Parser;
use ongkir_cli::cli::CliFormat;
use ongkir_cli::commands;
use ongkir_cli::config::OutputFormat;
use ongkir_cli::{Cli, Command, Config, Formatter};
use ongkir_resolver::DeliveryFeeResolver;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();
    let no_color = cli.no_color;

    if let Err(e) = run(cli) {
        let formatter = Formatter::new(OutputFormat::Table, !no_color);
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> ongkir_cli::Result<()> {
    init_tracing(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);
    let config_path = config_path.as_deref();
    let (format, no_color) = (cli.format, cli.no_color);

    // Loaded per command so init-config works even when the file is broken
    let session = || load_session(config_path, format, no_color);

    match cli.command {
        Command::Resolve(args) => {
            let (resolver, formatter) = session()?;
            commands::execute_resolve(args, &resolver, &formatter)
        }
        Command::Distance(args) => {
            let (resolver, formatter) = session()?;
            commands::execute_distance(args, &resolver, &formatter)
        }
        Command::Suggest(args) => {
            let (resolver, formatter) = session()?;
            commands::execute_suggest(args, &resolver, &formatter)
        }
        Command::Validate(args) => {
            let (resolver, formatter) = session()?;
            commands::execute_validate(args, &resolver, &formatter)
        }
        Command::Areas(args) => {
            let (resolver, formatter) = session()?;
            commands::execute_areas(args, &resolver, &formatter)
        }
        Command::Check(args) => {
            let (resolver, formatter) = session()?;
            commands::execute_check(args, &resolver, &formatter)
        }
        Command::InitConfig(args) => {
            let path = Config::resolve_path(config_path)?;
            let formatter = Formatter::new(OutputFormat::Table, !no_color);
            commands::execute_init_config(args, &path, &formatter)
        }
    }
}

/// Load the config file and build the resolver and formatter from it.
fn load_session(
    config_path: Option<&Path>,
    format: Option<CliFormat>,
    no_color: bool,
) -> ongkir_cli::Result<(DeliveryFeeResolver, Formatter)> {
    let config = Config::load(config_path)?;

    // Determine output format
    let format = format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !no_color && config.settings.color;

    let resolver = DeliveryFeeResolver::new(config.resolver)?;
    Ok((resolver, Formatter::new(format, color_enabled)))
}

/// Log to stderr; RUST_LOG overrides the verbosity flag.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
