//! Suggest command implementation.

use crate::cli::SuggestArgs;
use crate::error::Result;
use crate::output::Formatter;
use ongkir_resolver::DeliveryFeeResolver;

/// Execute the suggest command.
pub fn execute_suggest(
    args: SuggestArgs,
    resolver: &DeliveryFeeResolver,
    formatter: &Formatter,
) -> Result<()> {
    let suggestions = resolver.suggestions(&args.query);
    tracing::debug!(query = %args.query, found = suggestions.len(), "Suggestions");
    println!("{}", formatter.format_suggestions(&suggestions)?);
    Ok(())
}
