use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

/// One live-quote record from the portfolio endpoint. Any of the market
/// fields may be absent; absent fields leave the holding's prior value in
/// place during the merge.
#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct LiveQuoteDto {
    symbol: String,
    cmp: Option<Decimal>,
    pe_ratio: Option<Decimal>,
    earnings: Option<String>,
}
