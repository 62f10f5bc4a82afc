use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::Holding;

/// A holding extended with its derived metrics. Recomputed after every
/// refresh, never persisted. Percentages are rounded to two decimal places
/// and stay numeric; sign prefixes and currency symbols are applied by the
/// presentation layer.
#[derive(Clone, Debug, Getters, new)]
pub struct ComputedHolding {
    holding: Holding,
    investment: Decimal,
    present_value: Decimal,
    gain_loss: Decimal,
    return_percent: Decimal,
    portfolio_percent: Decimal,
}
