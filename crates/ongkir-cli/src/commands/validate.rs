//! Validate command implementation.

use crate::cli::{join_address, ValidateArgs};
use crate::error::Result;
use crate::output::Formatter;
use ongkir_resolver::DeliveryFeeResolver;

/// Execute the validate command.
pub fn execute_validate(
    args: ValidateArgs,
    resolver: &DeliveryFeeResolver,
    formatter: &Formatter,
) -> Result<()> {
    let address = join_address(&args.address);
    let report = resolver.validate_address(&address);
    println!("{}", formatter.format_report(&report)?);
    Ok(())
}
