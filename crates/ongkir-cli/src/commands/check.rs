//! Check command implementation.

use crate::cli::{join_address, CheckArgs};
use crate::error::Result;
use crate::output::Formatter;
use ongkir_resolver::{settle_checkout_fee, DeliveryFeeResolver, SettledFee};

/// Execute the check command.
pub fn execute_check(
    args: CheckArgs,
    resolver: &DeliveryFeeResolver,
    formatter: &Formatter,
) -> Result<()> {
    let settled = settle(&args, resolver)?;
    println!("{}", formatter.format_settled(&settled)?);
    Ok(())
}

fn settle(args: &CheckArgs, resolver: &DeliveryFeeResolver) -> Result<SettledFee> {
    let address = join_address(&args.address);
    let tolerance = args
        .tolerance
        .or_else(|| args.preset.map(|p| p.config().checkout_tolerance))
        .unwrap_or(resolver.config().checkout_tolerance);

    Ok(settle_checkout_fee(resolver, &address, args.fee, tolerance)?)
}
