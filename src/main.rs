use std::time::Duration;

use clap::Parser;
use dotenv::dotenv;
use sector_portfolio_tui::{
    app::{App, Portfolio},
    seed,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_ENDPOINT: &str = "https://stock-portfolio-backend-xqnz.onrender.com/api/portfolio";

#[derive(Debug, Parser)]
#[command(about = "A terminal-based portfolio viewer grouped by sector")]
struct Cli {
    /// Quote endpoint URL; overrides PORTFOLIO_API_URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Seconds between quote refreshes
    #[arg(long, default_value_t = 60)]
    refresh_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let cli = Cli::parse();

    // File-only logging; writing to the terminal would corrupt the TUI.
    let log_file = std::fs::File::create("sector-portfolio.log")?;
    let (writer, _guard) = tracing_appender::non_blocking(log_file);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let endpoint = cli
        .endpoint
        .or_else(|| std::env::var("PORTFOLIO_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let portfolio = Portfolio::new(seed::seed_holdings(), endpoint);

    let mut app = App::new(portfolio, Duration::from_secs(cli.refresh_secs));
    app.run().await?;

    Ok(())
}
