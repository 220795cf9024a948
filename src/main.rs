use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use tracing::{error, info};

use crypto_levels::app_config::log::setup_logging;
use crypto_levels::chart::renderer::{ChartConfig, ChartRenderer};
use crypto_levels::indicator::support_resistance::calculate_multiple_support_resistance;
use crypto_levels::market::coingecko::CoinGeckoClient;

/// Fixed analysis window, in days.
const ANALYSIS_DAYS: u32 = 90;
const CHART_PATH: &str = "support_resistance.png";

fn read_symbol() -> Result<String> {
    println!("Enter the cryptocurrency symbol (e.g. 'bitcoin', 'ethereum'):");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging().await?;

    let symbol = read_symbol()?;
    println!("Analyzing cryptocurrency: {}", symbol);
    println!("Analyzing the last {} days.", ANALYSIS_DAYS);

    let client = CoinGeckoClient::new();
    let prices = match client.get_market_chart(&symbol, ANALYSIS_DAYS).await {
        Ok(prices) => prices,
        Err(err) => {
            error!("failed to fetch market data for {}: {}", symbol, err);
            return Err(err);
        }
    };
    info!("analyzing {} price points", prices.len());

    let levels = calculate_multiple_support_resistance(&prices);
    println!("Identified supports: {:?}", levels.supports);
    println!("Identified resistances: {:?}", levels.resistances);

    let renderer = ChartRenderer::new(ChartConfig::default());
    let img = renderer.render(&prices, &levels, ANALYSIS_DAYS as usize)?;
    renderer.save(&img, Path::new(CHART_PATH))?;

    println!("Analysis saved to '{}'", CHART_PATH);
    Ok(())
}
