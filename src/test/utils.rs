#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{
        app::{
            calc::{compute_holdings, group_by_sector},
            utils::{abs_rupees, holding_count, rupees, signed_percent, visual_row_index},
        },
        models::{Holding, SectorAggregate},
    };

    fn sample_sectors() -> Vec<SectorAggregate> {
        let holdings = vec![
            Holding::new(
                "A".to_string(),
                "A Ltd".to_string(),
                "Tech".to_string(),
                "NSE".to_string(),
                dec!(100),
                dec!(10),
                dec!(120),
                dec!(20.0),
                "Q1 FY26".to_string(),
            ),
            Holding::new(
                "B".to_string(),
                "B Ltd".to_string(),
                "Tech".to_string(),
                "NSE".to_string(),
                dec!(200),
                dec!(5),
                dec!(210),
                dec!(18.0),
                "Q1 FY26".to_string(),
            ),
            Holding::new(
                "C".to_string(),
                "C Ltd".to_string(),
                "Energy".to_string(),
                "BSE".to_string(),
                dec!(50),
                dec!(20),
                dec!(55),
                dec!(12.0),
                "Q1 FY26".to_string(),
            ),
        ];

        group_by_sector(compute_holdings(&holdings))
    }

    #[test]
    fn maps_flat_indices_past_sector_headers() {
        let sectors = sample_sectors();

        // Layout: Tech header, A, B, Energy header, C.
        assert_eq!(visual_row_index(&sectors, 0), 1);
        assert_eq!(visual_row_index(&sectors, 1), 2);
        assert_eq!(visual_row_index(&sectors, 2), 4);
    }

    #[test]
    fn counts_holdings_across_sectors() {
        assert_eq!(holding_count(&sample_sectors()), 3);
        assert_eq!(holding_count(&[]), 0);
    }

    #[test]
    fn formats_currency_and_percent() {
        assert_eq!(rupees(&dec!(1000)), "₹1000.00");
        assert_eq!(rupees(&dec!(-100)), "₹-100.00");
        assert_eq!(abs_rupees(&dec!(-100)), "₹100.00");
        assert_eq!(signed_percent(&dec!(2.5)), "+2.50%");
        assert_eq!(signed_percent(&dec!(-2.5)), "-2.50%");
        assert_eq!(signed_percent(&Decimal::ZERO), "+0.00%");
    }
}
