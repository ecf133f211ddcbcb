//! Resolve command implementation.

use crate::cli::{join_address, ResolveArgs};
use crate::error::Result;
use crate::output::Formatter;
use ongkir_resolver::{DeliveryFeeResolver, DeliveryRequest};

/// Execute the resolve command.
pub fn execute_resolve(
    args: ResolveArgs,
    resolver: &DeliveryFeeResolver,
    formatter: &Formatter,
) -> Result<()> {
    let request = build_request(&args);
    let quote = resolver.quote(&request)?;

    println!("{}", formatter.format_quote(&quote)?);

    Ok(())
}

/// Build a request; blank addresses count as absent.
fn build_request(args: &ResolveArgs) -> DeliveryRequest {
    let address = join_address(&args.address);
    let address = address.trim();

    DeliveryRequest {
        address: (!address.is_empty()).then(|| address.to_string()),
        manual_distance: args.distance,
    }
}
