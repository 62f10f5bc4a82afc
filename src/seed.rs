use rust_decimal_macros::dec;

use crate::models::Holding;

/// The compiled-in holdings list. Purchase data is fixed; cmp, P/E and the
/// earnings label are starting values that the quote endpoint overwrites on
/// the first successful refresh.
pub fn seed_holdings() -> Vec<Holding> {
    vec![
        Holding::new(
            "RELIANCE".to_string(),
            "Reliance Industries".to_string(),
            "Energy".to_string(),
            "NSE".to_string(),
            dec!(2450.00),
            dec!(10),
            dec!(2890.00),
            dec!(28.5),
            "Q1 FY26".to_string(),
        ),
        Holding::new(
            "TCS".to_string(),
            "Tata Consultancy Services".to_string(),
            "Technology".to_string(),
            "NSE".to_string(),
            dec!(3200.00),
            dec!(12),
            dec!(3850.00),
            dec!(30.2),
            "Q1 FY26".to_string(),
        ),
        Holding::new(
            "INFY".to_string(),
            "Infosys".to_string(),
            "Technology".to_string(),
            "NSE".to_string(),
            dec!(1380.00),
            dec!(25),
            dec!(1520.00),
            dec!(24.1),
            "Q1 FY26".to_string(),
        ),
        Holding::new(
            "HDFCBANK".to_string(),
            "HDFC Bank".to_string(),
            "Financials".to_string(),
            "NSE".to_string(),
            dec!(1450.00),
            dec!(30),
            dec!(1680.00),
            dec!(19.8),
            "Q1 FY26".to_string(),
        ),
        Holding::new(
            "ICICIBANK".to_string(),
            "ICICI Bank".to_string(),
            "Financials".to_string(),
            "NSE".to_string(),
            dec!(920.00),
            dec!(40),
            dec!(1195.00),
            dec!(18.2),
            "Q1 FY26".to_string(),
        ),
        Holding::new(
            "BAJFINANCE".to_string(),
            "Bajaj Finance".to_string(),
            "Financials".to_string(),
            "NSE".to_string(),
            dec!(6800.00),
            dec!(5),
            dec!(7350.00),
            dec!(32.6),
            "Q4 FY25".to_string(),
        ),
        Holding::new(
            "ASIANPAINT".to_string(),
            "Asian Paints".to_string(),
            "Consumer".to_string(),
            "NSE".to_string(),
            dec!(3100.00),
            dec!(8),
            dec!(2870.00),
            dec!(55.4),
            "Q4 FY25".to_string(),
        ),
        Holding::new(
            "ITC".to_string(),
            "ITC".to_string(),
            "Consumer".to_string(),
            "NSE".to_string(),
            dec!(410.00),
            dec!(60),
            dec!(465.00),
            dec!(27.3),
            "Q1 FY26".to_string(),
        ),
        Holding::new(
            "SUNPHARMA".to_string(),
            "Sun Pharmaceutical".to_string(),
            "Healthcare".to_string(),
            "NSE".to_string(),
            dec!(1080.00),
            dec!(15),
            dec!(1245.00),
            dec!(35.8),
            "Q4 FY25".to_string(),
        ),
        Holding::new(
            "DRREDDY".to_string(),
            "Dr. Reddy's Laboratories".to_string(),
            "Healthcare".to_string(),
            "BSE".to_string(),
            dec!(5450.00),
            dec!(3),
            dec!(6120.00),
            dec!(21.4),
            "Q1 FY26".to_string(),
        ),
        Holding::new(
            "TATAMOTORS".to_string(),
            "Tata Motors".to_string(),
            "Automobile".to_string(),
            "BSE".to_string(),
            dec!(620.00),
            dec!(20),
            dec!(745.00),
            dec!(14.9),
            "Q1 FY26".to_string(),
        ),
        Holding::new(
            "MARUTI".to_string(),
            "Maruti Suzuki".to_string(),
            "Automobile".to_string(),
            "NSE".to_string(),
            dec!(10250.00),
            dec!(2),
            dec!(11480.00),
            dec!(29.7),
            "Q4 FY25".to_string(),
        ),
    ]
}
