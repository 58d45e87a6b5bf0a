use crate::error::{AdvisorError, Result};
use crate::models::{DayAdvice, LandInfo, MarketPrice};
use serde::Serialize;

const TITLE: &str = "Agricultural Recommendations";

fn heading(out: &mut String, text: &str, underline: char) {
    out.push_str(text);
    out.push('\n');
    out.extend(std::iter::repeat(underline).take(text.chars().count()));
    out.push('\n');
}

/// Plain-text report: a heading, then per day each category title over its advice
pub fn render_text(days: &[DayAdvice]) -> String {
    let mut out = String::new();
    heading(&mut out, TITLE, '=');

    for day in days {
        if let Some(date) = day.date {
            out.push('\n');
            heading(&mut out, &date.format("%A %Y-%m-%d").to_string(), '-');
        }

        for rec in &day.recommendations {
            out.push('\n');
            out.push_str(rec.category.as_str());
            out.push('\n');
            out.push_str(&rec.text);
            out.push('\n');
        }
    }

    out
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn render_prices(prices: &[MarketPrice]) -> String {
    if prices.is_empty() {
        return "No market prices available.\n".to_string();
    }

    let mut out = format!(
        "{:<24} {:>10} {:>10}  {:<6} {:<10}  {}\n",
        "Product", "Price", "Predicted", "Unit", "Date", "Location"
    );
    for price in prices {
        let predicted = match (price.predicted_price, price.predicted_change()) {
            (Some(p), Some(change)) => format!("{:.2}{}", p, trend(change)),
            _ => "-".to_string(),
        };
        out.push_str(&format!(
            "{:<24} {:>10.2} {:>10}  {:<6} {:<10}  {}\n",
            price.product_name,
            price.price,
            predicted,
            price.unit,
            price.date.format("%Y-%m-%d"),
            price.location.as_deref().unwrap_or("-"),
        ));
    }
    out
}

fn trend(change: f64) -> char {
    if change > 0.0 {
        '+'
    } else if change < 0.0 {
        '-'
    } else {
        '='
    }
}

pub fn render_land(lands: &[LandInfo]) -> String {
    if lands.is_empty() {
        return "No land registered.\n".to_string();
    }

    let mut out = format!(
        "{:<26} {:>9}  {:<12} {:>10} {:>11}\n",
        "Id", "Area (ha)", "Soil", "Latitude", "Longitude"
    );
    for land in lands {
        out.push_str(&format!(
            "{:<26} {:>9.2}  {:<12} {:>10.5} {:>11.5}\n",
            land.id.as_deref().unwrap_or("-"),
            land.area,
            land.soil_type,
            land.latitude,
            land.longitude,
        ));
    }
    out
}

/// What the user sees in place of a report when evaluation failed
pub fn render_error(error: &AdvisorError) -> String {
    match error {
        AdvisorError::NoForecastAvailable => error.to_string(),
        AdvisorError::Unauthorized => {
            "Not authorized. Run `agriadvice login` to store an access token.".to_string()
        }
        AdvisorError::UnknownRule(_) => {
            format!("Error: {}. Run `agriadvice rules` to list them.", error)
        }
        other => format!("Error: {}", other),
    }
}
