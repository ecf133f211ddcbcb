//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use ongkir_domain::TierId;
use ongkir_resolver::ResolverConfig;

/// Ongkir CLI - Estimate catering delivery fees from addresses and distances.
#[derive(Debug, Parser)]
#[command(name = "ongkir")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ONGKIR_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (fees or keywords only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Calculate the delivery fee for an address or measured distance
    Resolve(ResolveArgs),

    /// Calculate the delivery fee for a measured distance in km
    Distance(DistanceArgs),

    /// Suggest known area names for a partial input
    Suggest(SuggestArgs),

    /// Validate an address and show customer feedback
    Validate(ValidateArgs),

    /// List delivery areas and their fees
    Areas(AreasArgs),

    /// Cross-check a client-quoted fee as checkout would
    Check(CheckArgs),

    /// Write a default configuration file
    InitConfig(InitConfigArgs),
}

/// Arguments for the resolve command.
#[derive(Debug, Parser)]
pub struct ResolveArgs {
    /// Delivery address (multiple words are joined with spaces)
    pub address: Vec<String>,

    /// Manually measured distance in km; takes precedence over the address
    #[arg(short, long)]
    pub distance: Option<f64>,
}

/// Arguments for the distance command.
#[derive(Debug, Parser)]
pub struct DistanceArgs {
    /// Distance in km
    #[arg(allow_hyphen_values = true)]
    pub km: String,
}

/// Arguments for the suggest command.
#[derive(Debug, Parser)]
pub struct SuggestArgs {
    /// Partial area name (at least 2 characters)
    pub query: String,
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Delivery address (multiple words are joined with spaces)
    #[arg(required = true)]
    pub address: Vec<String>,
}

/// Arguments for the areas command.
#[derive(Debug, Parser)]
pub struct AreasArgs {
    /// Only show one tier (free/gratis, tier1..tier6, out_of_range)
    #[arg(short, long)]
    pub tier: Option<TierId>,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Delivery address (multiple words are joined with spaces)
    #[arg(required = true)]
    pub address: Vec<String>,

    /// Fee quoted by the client, in rupiah
    #[arg(long)]
    pub fee: Option<u64>,

    /// Override the configured tolerance, in rupiah
    #[arg(short, long)]
    pub tolerance: Option<u64>,

    /// Use a preset tolerance instead of the configured one
    #[arg(long, value_enum, conflicts_with = "tolerance")]
    pub preset: Option<CheckPreset>,
}

/// Checkout tolerance presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CheckPreset {
    /// Client fee must equal the computed fee
    Strict,
    /// Accept client fees within Rp 5.000
    Permissive,
}

impl CheckPreset {
    /// Resolver configuration for this preset
    pub fn config(self) -> ResolverConfig {
        match self {
            CheckPreset::Strict => ResolverConfig::strict(),
            CheckPreset::Permissive => ResolverConfig::permissive(),
        }
    }
}

/// Arguments for the init-config command.
#[derive(Debug, Parser)]
pub struct InitConfigArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

/// Join address words given as separate arguments
pub fn join_address(words: &[String]) -> String {
    words.join(" ")
}
