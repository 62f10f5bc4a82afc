use anyhow::{Error, Result};
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

pub async fn post_request<B>(client: &Client, url: &str, body: &B) -> Result<Value>
where
    B: Serialize,
{
    let res = client.post(url).json(body).send().await?;

    if !res.status().is_success() {
        return Err(Error::msg(format!("Request failed: {}", res.status())));
    }

    let text = res.text().await?;
    let data = serde_json::from_str::<Value>(&text)?;

    Ok(data)
}

pub async fn parse_response_array<T>(data: Value, error_msg: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    match data {
        Value::Array(items) => {
            let result: Vec<T> = items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect();

            if result.is_empty() {
                Err(Error::msg(error_msg.to_string()))
            } else {
                Ok(result)
            }
        }
        _ => Err(Error::msg("Unexpected API response format: not an array")),
    }
}
