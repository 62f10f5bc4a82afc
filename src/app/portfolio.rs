use chrono::{DateTime, Local};
use reqwest::Client;

use crate::{api::LiveQuoteDto, models::Holding};

/// Owner of the holdings state. The app event loop holds the only mutable
/// reference; fetch tasks never touch it directly.
#[derive(Clone, Debug)]
pub struct Portfolio {
    holdings: Vec<Holding>,
    loading: bool,
    last_refreshed: Option<DateTime<Local>>,
    client: Client,
    endpoint: String,
}

impl Portfolio {
    pub fn new(holdings: Vec<Holding>, endpoint: String) -> Self {
        Self {
            holdings,
            loading: false,
            last_refreshed: None,
            client: Client::new(),
            endpoint,
        }
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn symbols(&self) -> Vec<String> {
        self.holdings
            .iter()
            .map(|holding| holding.symbol().clone())
            .collect()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn last_refreshed(&self) -> Option<&DateTime<Local>> {
        self.last_refreshed.as_ref()
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Merges live quotes into the holdings by symbol. Order and cardinality
    /// are untouched; unmatched live entries are ignored. Clears the loading
    /// flag and stamps the refresh time.
    pub fn apply_quotes(&mut self, quotes: &[LiveQuoteDto]) {
        for holding in &mut self.holdings {
            if let Some(live) = quotes.iter().find(|quote| quote.symbol() == holding.symbol()) {
                holding.update_quote(*live.cmp(), *live.pe_ratio(), live.earnings().clone());
            }
        }

        self.loading = false;
        self.last_refreshed = Some(Local::now());
    }
}
