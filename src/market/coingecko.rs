use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::app_error::AppError;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Raw market_chart payload. CoinGecko returns each price point as a
/// `[timestamp_ms, price]` pair, oldest first.
#[derive(Debug, Serialize, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<[f64; 2]>,
}

pub struct CoinGeckoClient {
    client: Client,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: BASE_URL.to_string(),
        }
    }

    async fn send_request<T: for<'a> Deserialize<'a>>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("coingecko request: {}", url);

        let response = self.client.get(&url).send().await?;
        let status_code = response.status();
        let response_body = response.text().await?;
        debug!("path:{}, coingecko_response: {}", path, response_body);

        if status_code == StatusCode::OK {
            let result: T = serde_json::from_str(&response_body)
                .map_err(|e| AppError::FetchError(format!("bad payload: {}", e)))?;
            Ok(result)
        } else {
            Err(AppError::FetchError(format!("status {}: {}", status_code, response_body)).into())
        }
    }

    /// USD closing prices covering the last `days` days, oldest first.
    pub async fn get_market_chart(&self, symbol: &str, days: u32) -> Result<Vec<f64>> {
        let path = format!(
            "/coins/{}/market_chart?vs_currency=usd&days={}",
            symbol, days
        );
        let res: MarketChartResponse = self.send_request(&path).await?;

        let prices: Vec<f64> = res.prices.iter().map(|point| point[1]).collect();
        info!("fetched {} price points for {}", prices.len(), symbol);
        Ok(prices)
    }
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_chart_deserialization() {
        let body = r#"{
            "prices": [[1700000000000, 35000.5], [1700086400000, 35820.25]],
            "market_caps": [[1700000000000, 1.0]],
            "total_volumes": [[1700000000000, 2.0]]
        }"#;

        let res: MarketChartResponse = serde_json::from_str(body).unwrap();
        let prices: Vec<f64> = res.prices.iter().map(|p| p[1]).collect();
        assert_eq!(prices, vec![35000.5, 35820.25]);
    }

    #[test]
    fn test_market_chart_rejects_malformed_payload() {
        let body = r#"{"error": "coin not found"}"#;
        assert!(serde_json::from_str::<MarketChartResponse>(body).is_err());
    }
}
