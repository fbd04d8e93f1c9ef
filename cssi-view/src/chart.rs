//! Declarative chart specifications built from the dataset.
//!
//! Builders are pure: the same dataset and selection always yield the same
//! [`ChartSpec`]. Drawing is left to the D3.js layer, which receives the
//! spec as JSON.

use cssi_core::{Dataset, Indicator, COUNTRY_COLUMN};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Scatter,
}

/// What the x axis is drawn from: a column, or an explicit list of countries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum XAxis {
    Column(String),
    Countries(Vec<String>),
}

/// A category (bar charts) or a numeric position (scatter charts).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum XValue {
    Category(String),
    Number(Option<f64>),
}

/// One bar or marker. `label` is the hover text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: XValue,
    pub y: Option<f64>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x: XAxis,
    pub x_label: String,
    /// Column plotted on y; `None` when nothing is selected.
    pub y: Option<String>,
    pub y_label: String,
    pub hover_label: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Bar of `metric` for every country in table order.
///
/// With no metric selected the chart has no bars.
pub fn bar_by_country(dataset: &Dataset, metric: Option<Indicator>) -> ChartSpec {
    let points = match metric {
        Some(metric) => dataset
            .rows()
            .iter()
            .map(|row| ChartPoint {
                x: XValue::Category(row.country.clone()),
                y: dataset.value(row, metric),
                label: row.country.clone(),
            })
            .collect(),
        None => Vec::new(),
    };

    ChartSpec {
        kind: ChartKind::Bar,
        title: match metric {
            Some(m) => format!("{} by Country", m.label()),
            None => "Country".to_string(),
        },
        x: XAxis::Column(COUNTRY_COLUMN.to_string()),
        x_label: COUNTRY_COLUMN.to_string(),
        y: metric.map(|m| m.column().to_string()),
        y_label: metric.map(|m| m.label().to_string()).unwrap_or_default(),
        hover_label: COUNTRY_COLUMN.to_string(),
        points,
    }
}

/// Bar of `metric` for the chosen countries only, or for every country when
/// none are chosen. Bars keep table order regardless of selection order.
pub fn compare_countries(
    dataset: &Dataset,
    countries: &[String],
    metric: Option<Indicator>,
) -> ChartSpec {
    let points = match metric {
        Some(metric) => dataset
            .rows()
            .iter()
            .filter(|row| countries.is_empty() || countries.contains(&row.country))
            .map(|row| ChartPoint {
                x: XValue::Category(row.country.clone()),
                y: dataset.value(row, metric),
                label: row.country.clone(),
            })
            .collect(),
        None => Vec::new(),
    };

    ChartSpec {
        kind: ChartKind::Bar,
        title: match metric {
            Some(m) => format!("{}: Country Compare", m.label()),
            None => "Country Compare".to_string(),
        },
        x: XAxis::Countries(countries.to_vec()),
        x_label: COUNTRY_COLUMN.to_string(),
        y: metric.map(|m| m.column().to_string()),
        y_label: metric.map(|m| m.label().to_string()).unwrap_or_default(),
        hover_label: COUNTRY_COLUMN.to_string(),
        points,
    }
}

/// One marker per country at (`x` value, `y` value), labelled with the
/// country name. Empty unless both axes are selected.
pub fn scatter_pair(dataset: &Dataset, x: Option<Indicator>, y: Option<Indicator>) -> ChartSpec {
    let points = match (x, y) {
        (Some(x), Some(y)) => dataset
            .rows()
            .iter()
            .map(|row| ChartPoint {
                x: XValue::Number(dataset.value(row, x)),
                y: dataset.value(row, y),
                label: row.country.clone(),
            })
            .collect(),
        _ => Vec::new(),
    };

    let x_label = x.map(|i| i.label().to_string()).unwrap_or_default();
    let y_label = y.map(|i| i.label().to_string()).unwrap_or_default();
    ChartSpec {
        kind: ChartKind::Scatter,
        title: format!("{} vs {}", y_label, x_label),
        x: XAxis::Column(x.map(|i| i.column().to_string()).unwrap_or_default()),
        x_label,
        y: y.map(|i| i.column().to_string()),
        y_label,
        hover_label: COUNTRY_COLUMN.to_string(),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{brazil_dataset, sample_dataset};
    use cssi_core::indicator::{COVID_METRICS, SSI_AND_WELLBEING, SSI_INDICATORS};

    #[test]
    fn bar_picks_selected_metric_for_each_country() {
        let ds = brazil_dataset();
        let spec = bar_by_country(&ds, Some(Indicator::Deaths));
        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.y.as_deref(), Some("Deaths"));
        assert_eq!(spec.points.len(), ds.row_count());
        let brazil = spec
            .points
            .iter()
            .find(|p| p.label == "Brazil")
            .expect("Brazil bar");
        assert_eq!(brazil.x, XValue::Category("Brazil".to_string()));
        assert_eq!(brazil.y, Some(10.0));
    }

    #[test]
    fn bar_without_metric_is_empty() {
        let spec = bar_by_country(&sample_dataset(), None);
        assert!(spec.is_empty());
        assert_eq!(spec.y, None);
    }

    #[test]
    fn recovered_uses_recoveries_label() {
        let spec = bar_by_country(&sample_dataset(), Some(Indicator::Recovered));
        assert_eq!(spec.y.as_deref(), Some("Recovered"));
        assert_eq!(spec.y_label, "Recoveries");
    }

    #[test]
    fn compare_with_no_countries_shows_all_rows() {
        let ds = sample_dataset();
        let spec = compare_countries(&ds, &[], Some(Indicator::Cases));
        assert_eq!(spec.points.len(), ds.row_count());
        assert_eq!(spec.x, XAxis::Countries(Vec::new()));
    }

    #[test]
    fn compare_restricts_to_every_subset() {
        let ds = sample_dataset();
        let all: Vec<String> = ds.countries().map(str::to_string).collect();
        // Every subset of the sample countries, including the empty one.
        for mask in 0u32..(1 << all.len()) {
            let subset: Vec<String> = all
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, c)| c.clone())
                .collect();
            let spec = compare_countries(&ds, &subset, Some(Indicator::Deaths));
            let shown: Vec<&str> = spec.points.iter().map(|p| p.label.as_str()).collect();
            if subset.is_empty() {
                assert_eq!(shown.len(), all.len());
            } else {
                let expected: Vec<&str> = subset.iter().map(String::as_str).collect();
                assert_eq!(shown, expected);
            }
        }
    }

    #[test]
    fn compare_keeps_table_order() {
        let ds = sample_dataset();
        let spec = compare_countries(
            &ds,
            &["Chile".to_string(), "Brazil".to_string()],
            Some(Indicator::Cases),
        );
        let shown: Vec<&str> = spec.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(shown, vec!["Brazil", "Chile"]);
    }

    #[test]
    fn scatter_has_one_point_per_row_for_every_pair() {
        let ds = sample_dataset();
        for x in SSI_INDICATORS {
            for y in SSI_AND_WELLBEING.iter().chain(COVID_METRICS.iter()) {
                let spec = scatter_pair(&ds, Some(x), Some(*y));
                assert_eq!(spec.points.len(), ds.row_count(), "{x:?} x {y:?}");
            }
        }
    }

    #[test]
    fn scatter_places_countries_at_indicator_values() {
        let ds = sample_dataset();
        let spec = scatter_pair(&ds, Some(Indicator::Gdp), Some(Indicator::Education));
        assert_eq!(spec.kind, ChartKind::Scatter);
        assert_eq!(spec.hover_label, "Country");
        for (row, point) in ds.rows().iter().zip(&spec.points) {
            assert_eq!(point.label, row.country);
            assert_eq!(point.x, XValue::Number(ds.value(row, Indicator::Gdp)));
            assert_eq!(point.y, ds.value(row, Indicator::Education));
        }
    }

    #[test]
    fn scatter_missing_axis_is_empty() {
        let ds = sample_dataset();
        assert!(scatter_pair(&ds, Some(Indicator::Gdp), None).is_empty());
        assert!(scatter_pair(&ds, None, Some(Indicator::Cases)).is_empty());
    }

    #[test]
    fn builders_are_idempotent() {
        let ds = sample_dataset();
        let countries = vec!["Peru".to_string()];
        assert_eq!(
            bar_by_country(&ds, Some(Indicator::HumanWellbeing)),
            bar_by_country(&ds, Some(Indicator::HumanWellbeing))
        );
        assert_eq!(
            compare_countries(&ds, &countries, Some(Indicator::Cases)),
            compare_countries(&ds, &countries, Some(Indicator::Cases))
        );
        assert_eq!(
            scatter_pair(&ds, Some(Indicator::Economy), Some(Indicator::Deaths)),
            scatter_pair(&ds, Some(Indicator::Economy), Some(Indicator::Deaths))
        );
    }

    #[test]
    fn serializes_for_d3() {
        let ds = brazil_dataset();
        let spec = compare_countries(&ds, &["Brazil".to_string()], Some(Indicator::Deaths));
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["kind"], "bar");
        assert_eq!(json["x"], serde_json::json!(["Brazil"]));
        assert_eq!(json["y"], "Deaths");
        assert_eq!(json["hoverLabel"], "Country");
        assert_eq!(json["points"][0]["x"], "Brazil");
        assert_eq!(json["points"][0]["y"], 10.0);
    }

    #[test]
    fn missing_values_serialize_as_null() {
        let ds = crate::test_support::dataset_from_rows(&[("Peru", "7", "", "3")]);
        let spec = scatter_pair(&ds, Some(Indicator::Deaths), Some(Indicator::Cases));
        let json = serde_json::to_value(&spec).unwrap();
        assert!(json["points"][0]["x"].is_null());
        assert_eq!(json["points"][0]["y"], 7.0);
    }
}
