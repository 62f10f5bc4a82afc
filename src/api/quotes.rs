use anyhow::Result;
use reqwest::Client;
use serde::Serialize;

use crate::api::{
    quote_dto::LiveQuoteDto,
    utils::{parse_response_array, post_request},
};

#[derive(Debug, Serialize)]
struct QuoteRequest {
    stocks: Vec<SymbolEntry>,
}

#[derive(Debug, Serialize)]
struct SymbolEntry {
    symbol: String,
}

/// Requests live quotes for the given symbols in a single call. The endpoint
/// answers with an array of quote records; entries for unknown symbols are
/// simply missing from it.
pub async fn fetch_quotes(
    symbols: &[String],
    client: &Client,
    endpoint: &str,
) -> Result<Vec<LiveQuoteDto>> {
    let payload = QuoteRequest {
        stocks: symbols
            .iter()
            .map(|symbol| SymbolEntry {
                symbol: symbol.clone(),
            })
            .collect(),
    };

    let res = post_request(client, endpoint, &payload).await?;

    parse_response_array::<LiveQuoteDto>(res, "Failed to parse live quote response").await
}
