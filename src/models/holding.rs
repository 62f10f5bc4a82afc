use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// A single stock position: purchase data from the seed list plus the
/// live-market fields refreshed from the quote endpoint.
#[derive(Clone, Debug, Getters, new)]
pub struct Holding {
    symbol: String,
    name: String,
    sector: String,
    exchange: String,
    purchase_price: Decimal,
    quantity: Decimal,
    cmp: Decimal,
    pe_ratio: Decimal,
    earnings: String,
}

impl Holding {
    /// Overwrites the live-market fields with the given values. Absent
    /// values keep their prior state.
    pub fn update_quote(
        &mut self,
        cmp: Option<Decimal>,
        pe_ratio: Option<Decimal>,
        earnings: Option<String>,
    ) {
        if let Some(cmp) = cmp {
            self.cmp = cmp;
        }
        if let Some(pe_ratio) = pe_ratio {
            self.pe_ratio = pe_ratio;
        }
        if let Some(earnings) = earnings {
            self.earnings = earnings;
        }
    }
}
