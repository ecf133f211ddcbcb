//! Areas command implementation.

use crate::cli::AreasArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use ongkir_domain::{AreaInfo, TierId};
use ongkir_resolver::DeliveryFeeResolver;

/// Execute the areas command.
pub fn execute_areas(
    args: AreasArgs,
    resolver: &DeliveryFeeResolver,
    formatter: &Formatter,
) -> Result<()> {
    let store = resolver.store_info();
    let areas = select_areas(resolver.list_areas(), args.tier)?;
    println!("{}", formatter.format_areas(&store, &areas)?);
    Ok(())
}

/// Keep only the requested tier, if any.
fn select_areas(areas: Vec<AreaInfo>, tier: Option<TierId>) -> Result<Vec<AreaInfo>> {
    let Some(tier) = tier else {
        return Ok(areas);
    };

    let selected: Vec<AreaInfo> = areas.into_iter().filter(|a| a.tier == tier).collect();
    if selected.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "No delivery area is listed for tier {}",
            tier
        )));
    }
    Ok(selected)
}
