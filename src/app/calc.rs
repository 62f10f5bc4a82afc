use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{ComputedHolding, Holding, SectorAggregate};

/// part / whole * 100, rounded to two decimal places. A zero denominator
/// resolves to zero instead of panicking the Decimal division.
pub fn percent_of(part: &Decimal, whole: &Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }

    (part / whole * Decimal::from(100)).round_dp(2)
}

/// Derives the per-holding metrics in a single pass. Output order equals
/// input order. The grand total investment is computed once up front and
/// serves as the portfolio-percent denominator.
pub fn compute_holdings(holdings: &[Holding]) -> Vec<ComputedHolding> {
    let total_investment: Decimal = holdings
        .iter()
        .map(|holding| holding.purchase_price() * holding.quantity())
        .sum();

    holdings
        .iter()
        .map(|holding| {
            let investment = holding.purchase_price() * holding.quantity();
            let present_value = holding.cmp() * holding.quantity();
            let gain_loss = present_value - investment;
            let return_percent = percent_of(&gain_loss, &investment);
            let portfolio_percent = percent_of(&investment, &total_investment);

            ComputedHolding::new(
                holding.clone(),
                investment,
                present_value,
                gain_loss,
                return_percent,
                portfolio_percent,
            )
        })
        .collect()
}

/// Groups computed holdings by sector label. The output order is the
/// first-seen order of the labels, tracked explicitly rather than through
/// map iteration order; members keep their original relative order.
pub fn group_by_sector(computed: Vec<ComputedHolding>) -> Vec<SectorAggregate> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<ComputedHolding>> = HashMap::new();

    for holding in computed {
        let sector = holding.holding().sector().clone();
        if !groups.contains_key(&sector) {
            order.push(sector.clone());
        }
        groups.entry(sector).or_default().push(holding);
    }

    order
        .into_iter()
        .filter_map(|sector| {
            groups.remove(&sector).map(|members| {
                let total_investment: Decimal =
                    members.iter().map(|member| *member.investment()).sum();
                let total_value: Decimal =
                    members.iter().map(|member| *member.present_value()).sum();
                let sector_gain = total_value - total_investment;
                let sector_return = percent_of(&sector_gain, &total_investment);

                SectorAggregate::new(
                    sector,
                    members,
                    total_investment,
                    total_value,
                    sector_gain,
                    sector_return,
                )
            })
        })
        .collect()
}
