#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{
        app::calc::{compute_holdings, group_by_sector, percent_of},
        models::Holding,
    };

    fn sample_holding(
        symbol: &str,
        sector: &str,
        purchase_price: Decimal,
        quantity: Decimal,
        cmp: Decimal,
    ) -> Holding {
        Holding::new(
            symbol.to_string(),
            format!("{} Ltd", symbol),
            sector.to_string(),
            "NSE".to_string(),
            purchase_price,
            quantity,
            cmp,
            dec!(20.0),
            "Q1 FY26".to_string(),
        )
    }

    #[test]
    fn computes_holding_metrics() {
        let holdings = vec![sample_holding("X", "Tech", dec!(100), dec!(10), dec!(120))];

        let computed = compute_holdings(&holdings);

        assert_eq!(*computed[0].investment(), dec!(1000));
        assert_eq!(*computed[0].present_value(), dec!(1200));
        assert_eq!(*computed[0].gain_loss(), dec!(200));
        assert_eq!(*computed[0].return_percent(), dec!(20.00));
        assert_eq!(*computed[0].portfolio_percent(), dec!(100.00));
    }

    #[test]
    fn gain_loss_equals_present_value_minus_investment() {
        let holdings = vec![
            sample_holding("A", "Tech", dec!(100), dec!(10), dec!(120)),
            sample_holding("B", "Energy", dec!(250), dec!(4), dec!(210)),
            sample_holding("C", "Tech", dec!(75.50), dec!(8), dec!(91.25)),
        ];

        for computed in compute_holdings(&holdings) {
            assert_eq!(
                *computed.gain_loss(),
                computed.present_value() - computed.investment()
            );
        }
    }

    #[test]
    fn investments_sum_to_grand_total_across_holdings_and_sectors() {
        let holdings = vec![
            sample_holding("A", "Tech", dec!(100), dec!(10), dec!(120)),
            sample_holding("B", "Energy", dec!(250), dec!(4), dec!(210)),
            sample_holding("C", "Tech", dec!(300), dec!(10), dec!(270)),
            sample_holding("D", "Financials", dec!(80), dec!(50), dec!(95)),
        ];
        let grand_total: Decimal = holdings
            .iter()
            .map(|holding| holding.purchase_price() * holding.quantity())
            .sum();

        let computed = compute_holdings(&holdings);
        let computed_total: Decimal = computed.iter().map(|c| *c.investment()).sum();
        assert_eq!(computed_total, grand_total);

        let sectors = group_by_sector(computed);
        let sector_total: Decimal = sectors.iter().map(|s| *s.total_investment()).sum();
        assert_eq!(sector_total, grand_total);
    }

    #[test]
    fn grouping_is_a_partition() {
        let holdings = vec![
            sample_holding("A", "Tech", dec!(100), dec!(10), dec!(120)),
            sample_holding("B", "Energy", dec!(250), dec!(4), dec!(210)),
            sample_holding("C", "Tech", dec!(300), dec!(10), dec!(270)),
        ];

        let sectors = group_by_sector(compute_holdings(&holdings));

        let mut grouped_symbols: Vec<String> = sectors
            .iter()
            .flat_map(|sector| sector.holdings())
            .map(|computed| computed.holding().symbol().clone())
            .collect();
        grouped_symbols.sort();

        assert_eq!(grouped_symbols, vec!["A", "B", "C"]);
    }

    #[test]
    fn sectors_keep_first_seen_order_and_member_order() {
        let holdings = vec![
            sample_holding("A", "Tech", dec!(100), dec!(10), dec!(120)),
            sample_holding("B", "Energy", dec!(250), dec!(4), dec!(210)),
            sample_holding("C", "Tech", dec!(300), dec!(10), dec!(270)),
            sample_holding("D", "Financials", dec!(80), dec!(50), dec!(95)),
        ];

        let sectors = group_by_sector(compute_holdings(&holdings));

        let order: Vec<&str> = sectors.iter().map(|s| s.sector().as_str()).collect();
        assert_eq!(order, vec!["Tech", "Energy", "Financials"]);

        let tech_members: Vec<&str> = sectors[0]
            .holdings()
            .iter()
            .map(|c| c.holding().symbol().as_str())
            .collect();
        assert_eq!(tech_members, vec!["A", "C"]);
    }

    #[test]
    fn aggregates_sector_totals() {
        let holdings = vec![
            sample_holding("A", "Tech", dec!(100), dec!(10), dec!(120)),
            sample_holding("B", "Tech", dec!(300), dec!(10), dec!(270)),
        ];

        let sectors = group_by_sector(compute_holdings(&holdings));

        assert_eq!(sectors.len(), 1);
        assert_eq!(*sectors[0].total_investment(), dec!(4000));
        assert_eq!(*sectors[0].total_value(), dec!(3900));
        assert_eq!(*sectors[0].sector_gain(), dec!(-100));
        assert_eq!(*sectors[0].sector_return(), dec!(-2.50));
    }

    #[test]
    fn zero_investment_yields_zero_sentinels() {
        let holdings = vec![
            sample_holding("A", "Tech", dec!(100), dec!(0), dec!(120)),
            sample_holding("B", "Tech", dec!(0), dec!(10), dec!(120)),
        ];

        let computed = compute_holdings(&holdings);

        for c in &computed {
            assert_eq!(*c.investment(), Decimal::ZERO);
            assert_eq!(*c.return_percent(), Decimal::ZERO);
            // Grand total is zero too, so the portfolio percent falls back as well.
            assert_eq!(*c.portfolio_percent(), Decimal::ZERO);
        }

        let sectors = group_by_sector(computed);
        assert_eq!(*sectors[0].sector_return(), Decimal::ZERO);
    }

    #[test]
    fn empty_holding_list_computes_to_nothing() {
        let computed = compute_holdings(&[]);
        assert!(computed.is_empty());
        assert!(group_by_sector(computed).is_empty());
    }

    #[test]
    fn percent_of_rounds_to_two_decimals() {
        assert_eq!(percent_of(&dec!(1), &dec!(3)), dec!(33.33));
        assert_eq!(percent_of(&dec!(-1), &dec!(3)), dec!(-33.33));
        assert_eq!(percent_of(&dec!(5), &dec!(0)), Decimal::ZERO);
    }
}
