use std::path::Path;

use anyhow::Result;
use image::{Rgb, RgbImage};
use tracing::info;

use crate::chart::{colors, draw_horizontal_line, draw_segment};
use crate::error::app_error::AppError;
use crate::indicator::support_resistance::{calculate_support_resistance, LevelSet};

#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub background: Rgb<u8>,
    pub price_color: Rgb<u8>,
    pub support_color: Rgb<u8>,
    pub resistance_color: Rgb<u8>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            margin: 40,
            background: colors::WHITE,
            price_color: colors::BLACK,
            support_color: colors::BLUE,
            resistance_color: colors::RED,
        }
    }
}

/// Rasterizes the price series as a connected polyline with each support
/// drawn as a blue horizontal line and each resistance as a red one, both
/// spanning the full X range. The X axis covers day indices `0..days-1`.
pub struct ChartRenderer {
    config: ChartConfig,
}

impl ChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, prices: &[f64], levels: &LevelSet, days: usize) -> Result<RgbImage> {
        let cfg = &self.config;
        if cfg.width <= cfg.margin * 2 || cfg.height <= cfg.margin * 2 {
            return Err(AppError::ChartError(format!(
                "margin {} does not fit into {}x{}",
                cfg.margin, cfg.width, cfg.height
            ))
            .into());
        }
        let (mut y_min, mut y_max) = calculate_support_resistance(prices)
            .ok_or_else(|| AppError::ChartError("empty price series".to_string()))?;

        // Levels always sit inside the price range, but widen defensively so
        // a level row is never clipped off the canvas.
        for &level in levels.supports.iter().chain(levels.resistances.iter()) {
            y_min = y_min.min(level);
            y_max = y_max.max(level);
        }
        let padding = if y_max > y_min {
            (y_max - y_min) * 0.02
        } else {
            1.0
        };
        y_min -= padding;
        y_max += padding;

        let plot_w = (cfg.width - cfg.margin * 2) as f64;
        let plot_h = (cfg.height - cfg.margin * 2) as f64;
        let x_span = days.saturating_sub(1).max(1) as f64;

        let to_x = |day: f64| cfg.margin as i64 + (day / x_span * plot_w) as i64;
        let to_y =
            |price: f64| cfg.margin as i64 + ((y_max - price) / (y_max - y_min) * plot_h) as i64;

        let mut img = RgbImage::from_pixel(cfg.width, cfg.height, cfg.background);

        // Level lines first, price polyline on top.
        let x_left = cfg.margin;
        let x_right = cfg.width - cfg.margin;
        for &support in &levels.supports {
            draw_horizontal_line(&mut img, to_y(support) as u32, x_left, x_right, cfg.support_color);
        }
        for &resistance in &levels.resistances {
            draw_horizontal_line(
                &mut img,
                to_y(resistance) as u32,
                x_left,
                x_right,
                cfg.resistance_color,
            );
        }

        for i in 0..prices.len().saturating_sub(1) {
            draw_segment(
                &mut img,
                (to_x(i as f64), to_y(prices[i])),
                (to_x((i + 1) as f64), to_y(prices[i + 1])),
                cfg.price_color,
            );
        }

        Ok(img)
    }

    pub fn save(&self, img: &RgbImage, path: &Path) -> Result<()> {
        img.save(path).map_err(AppError::from)?;
        info!("chart saved to {}", path.display());
        Ok(())
    }
}
