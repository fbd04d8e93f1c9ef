//! Offline dataset checks and JSON dumps of panels and charts.

use anyhow::{anyhow, Context};
use cssi_core::indicator::{COVID_METRICS, SSI_INDICATORS, WELLBEING_SCORES};
use cssi_core::{Dataset, Indicator, COUNTRY_COLUMN};
use cssi_view::{build_chart, ChartId, Panel, Selection};
use log::info;
use std::path::Path;

/// Load `path`, or the embedded dataset when no path is given.
pub fn load_dataset(path: Option<&Path>) -> anyhow::Result<Dataset> {
    match path {
        Some(path) => Dataset::from_path(path)
            .with_context(|| format!("Failed to load dataset from {}", path.display())),
        None => Dataset::embedded().context("Embedded dataset is invalid"),
    }
}

/// Summary of a validated dataset.
pub fn summarize(dataset: &Dataset) -> String {
    let extra: Vec<&str> = dataset
        .table()
        .headers()
        .iter()
        .map(String::as_str)
        .filter(|h| *h != COUNTRY_COLUMN && Indicator::from_column(h).is_none())
        .collect();

    let mut out = format!(
        "{} countries, {} columns\n  COVID-19 metrics: {}\n  SSI indicators: {}\n  Wellbeing scores: {}\n",
        dataset.row_count(),
        dataset.table().headers().len(),
        COVID_METRICS.len(),
        SSI_INDICATORS.len(),
        WELLBEING_SCORES.len(),
    );
    if !extra.is_empty() {
        out.push_str(&format!("  Unused columns: {}\n", extra.join(", ")));
    }
    out
}

pub fn run_validate(path: Option<&Path>) -> anyhow::Result<()> {
    let dataset = load_dataset(path)?;
    info!("Dataset is valid");
    print!("{}", summarize(&dataset));
    Ok(())
}

/// Split `CONTROL=VALUE` arguments. The value may be empty (clears a dropdown).
pub fn parse_selections(raw: &[String]) -> anyhow::Result<Vec<(String, String)>> {
    raw.iter()
        .map(|s| {
            s.split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.to_string()))
                .ok_or_else(|| anyhow!("Expected CONTROL=VALUE, got '{}'", s))
        })
        .collect()
}

pub fn chart_json(dataset: &Dataset, chart: &str, selections: &[String]) -> anyhow::Result<String> {
    let chart = ChartId::parse_id(chart)?;
    let pairs = parse_selections(selections)?;
    let selection = Selection::from_pairs(chart, &pairs, dataset)?;
    let spec = build_chart(chart, &selection, dataset);
    Ok(serde_json::to_string_pretty(&spec)?)
}

pub fn run_chart(path: Option<&Path>, chart: &str, selections: &[String]) -> anyhow::Result<()> {
    let dataset = load_dataset(path)?;
    println!("{}", chart_json(&dataset, chart, selections)?);
    Ok(())
}

pub fn run_panel(path: &str) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&Panel::for_path(path))?);
    Ok(())
}
