//! Distance command implementation.

use crate::cli::DistanceArgs;
use crate::error::Result;
use crate::output::Formatter;
use ongkir_resolver::DeliveryFeeResolver;

/// Execute the distance command.
pub fn execute_distance(
    args: DistanceArgs,
    resolver: &DeliveryFeeResolver,
    formatter: &Formatter,
) -> Result<()> {
    // Unparseable text resolves to the invalid-distance result rather than an error
    let result = resolver.resolve_from_distance_input(&args.km);
    println!("{}", formatter.format_resolution(&result)?);
    Ok(())
}
