use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::ComputedHolding;

/// One sector group: its member holdings in original relative order plus the
/// sector-level totals derived from them.
#[derive(Clone, Debug, Getters, new)]
pub struct SectorAggregate {
    sector: String,
    holdings: Vec<ComputedHolding>,
    total_investment: Decimal,
    total_value: Decimal,
    sector_gain: Decimal,
    sector_return: Decimal,
}
