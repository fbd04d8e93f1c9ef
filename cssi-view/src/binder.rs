//! Explicit wiring from controls to charts.
//!
//! [`BINDINGS`] lists, for every chart, the controls it reads. The
//! [`Binder`] holds the selection state of the mounted panel and, on each
//! control change, recomputes only the charts that list that control.

use crate::chart::{self, ChartSpec};
use crate::control::{ControlId, ControlValue};
use crate::error::{Result, ViewError};
use crate::panel::Route;
use cssi_core::{Dataset, Indicator};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartId {
    CovidBar,
    CountryCompareBar,
    WellbeingBar,
    SsiScatter,
    CovidSsiScatter,
}

/// A chart and the controls feeding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub output: ChartId,
    pub inputs: &'static [ControlId],
}

pub static BINDINGS: [Binding; 5] = [
    Binding {
        output: ChartId::CovidBar,
        inputs: &[ControlId::CovidMetric],
    },
    Binding {
        output: ChartId::CountryCompareBar,
        inputs: &[ControlId::CompareCountries, ControlId::CompareMetric],
    },
    Binding {
        output: ChartId::WellbeingBar,
        inputs: &[ControlId::WellbeingScore],
    },
    Binding {
        output: ChartId::SsiScatter,
        inputs: &[ControlId::SsiX, ControlId::SsiY],
    },
    Binding {
        output: ChartId::CovidSsiScatter,
        inputs: &[ControlId::CombinedSsi, ControlId::CombinedCovid],
    },
];

impl ChartId {
    pub const ALL: [ChartId; 5] = [
        ChartId::CovidBar,
        ChartId::CountryCompareBar,
        ChartId::WellbeingBar,
        ChartId::SsiScatter,
        ChartId::CovidSsiScatter,
    ];

    /// DOM id of the chart container and URL segment of the chart API.
    pub fn id(self) -> &'static str {
        match self {
            ChartId::CovidBar => "covid-bar",
            ChartId::CountryCompareBar => "country-compare-bar",
            ChartId::WellbeingBar => "wellbeing-bar",
            ChartId::SsiScatter => "ssi-scatter",
            ChartId::CovidSsiScatter => "covid-ssi-scatter",
        }
    }

    pub fn from_id(id: &str) -> Option<ChartId> {
        Self::ALL.iter().copied().find(|c| c.id() == id)
    }

    pub fn parse_id(id: &str) -> Result<ChartId> {
        Self::from_id(id).ok_or_else(|| ViewError::UnknownChart(id.to_string()))
    }

    pub fn inputs(self) -> &'static [ControlId] {
        BINDINGS
            .iter()
            .find(|b| b.output == self)
            .map(|b| b.inputs)
            .unwrap_or(&[])
    }
}

/// Charts that read `control`, in [`BINDINGS`] order.
pub fn dependents(control: ControlId) -> Vec<ChartId> {
    BINDINGS
        .iter()
        .filter(|b| b.inputs.contains(&control))
        .map(|b| b.output)
        .collect()
}

/// Control values; controls without an entry read as their default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    values: BTreeMap<ControlId, ControlValue>,
}

impl Selection {
    /// Every control in `controls` set to its default.
    pub fn defaults(controls: &[ControlId]) -> Self {
        Self {
            values: controls.iter().map(|&c| (c, c.default_value())).collect(),
        }
    }

    /// Selection for `chart` from `(control id, raw value)` pairs, as found in
    /// a query string. Repeated ids accumulate (country lists); controls not
    /// mentioned keep their defaults.
    pub fn from_pairs<K: AsRef<str>, V: AsRef<str>>(
        chart: ChartId,
        pairs: &[(K, V)],
        dataset: &Dataset,
    ) -> Result<Self> {
        let mut raw: BTreeMap<ControlId, Vec<&str>> = BTreeMap::new();
        for (key, value) in pairs {
            let control = ControlId::parse_id(key.as_ref())?;
            if !chart.inputs().contains(&control) {
                return Err(ViewError::NotAnInput {
                    control: control.id(),
                    chart: chart.id(),
                });
            }
            raw.entry(control).or_default().push(value.as_ref());
        }

        let mut selection = Self::defaults(chart.inputs());
        for (control, values) in raw {
            selection.set(control, control.parse(&values, dataset)?);
        }
        Ok(selection)
    }

    pub fn set(&mut self, control: ControlId, value: ControlValue) {
        self.values.insert(control, value);
    }

    pub fn get(&self, control: ControlId) -> ControlValue {
        self.values
            .get(&control)
            .cloned()
            .unwrap_or_else(|| control.default_value())
    }

    pub fn indicator(&self, control: ControlId) -> Option<Indicator> {
        match self.values.get(&control) {
            Some(value) => value.indicator(),
            None => control.default_value().indicator(),
        }
    }

    pub fn countries(&self, control: ControlId) -> &[String] {
        self.values
            .get(&control)
            .map(ControlValue::countries)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ControlId, &ControlValue)> {
        self.values.iter()
    }
}

/// Compute chart `id` from the current selection. Stateless.
pub fn build_chart(id: ChartId, selection: &Selection, dataset: &Dataset) -> ChartSpec {
    use ControlId::*;
    match id {
        ChartId::CovidBar => chart::bar_by_country(dataset, selection.indicator(CovidMetric)),
        ChartId::CountryCompareBar => chart::compare_countries(
            dataset,
            selection.countries(CompareCountries),
            selection.indicator(CompareMetric),
        ),
        ChartId::WellbeingBar => chart::bar_by_country(dataset, selection.indicator(WellbeingScore)),
        ChartId::SsiScatter => {
            chart::scatter_pair(dataset, selection.indicator(SsiX), selection.indicator(SsiY))
        }
        ChartId::CovidSsiScatter => chart::scatter_pair(
            dataset,
            selection.indicator(CombinedSsi),
            selection.indicator(CombinedCovid),
        ),
    }
}

/// A freshly computed chart, ready to hand to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedChart {
    pub chart: ChartId,
    pub spec: ChartSpec,
}

/// Selection state of the mounted panel.
///
/// Created by [`Binder::mount`]; dropping it discards the selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Binder {
    route: Route,
    selection: Selection,
}

impl Binder {
    /// Mount `route`: every control takes its default and every chart on the
    /// panel is computed once.
    pub fn mount(route: Route, dataset: &Dataset) -> (Self, Vec<RenderedChart>) {
        let binder = Self {
            selection: Selection::defaults(&route.controls()),
            route,
        };
        let charts = binder.render(binder.route.charts(), dataset);
        log::debug!(
            "[CSSI] binder: Mounted {} with {} charts",
            binder.route.path(),
            charts.len()
        );
        (binder, charts)
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn value(&self, control: ControlId) -> ControlValue {
        self.selection.get(control)
    }

    /// Set `control` to `value` and recompute the charts that depend on it,
    /// using the latest value of each of their inputs. Charts not fed by
    /// `control` are not returned.
    pub fn update(
        &mut self,
        control: ControlId,
        value: ControlValue,
        dataset: &Dataset,
    ) -> Result<Vec<RenderedChart>> {
        if !self.route.controls().contains(&control) {
            return Err(ViewError::ControlNotMounted {
                control: control.id(),
                path: self.route.path().to_string(),
            });
        }
        control.validate(&value, dataset)?;
        self.selection.set(control, value);

        let affected = dependents(control);
        log::debug!(
            "[CSSI] binder: {} changed, recomputing {:?}",
            control.id(),
            affected
        );
        Ok(self.render(&affected, dataset))
    }

    /// Parse raw UI values for `control`, then [`update`](Self::update).
    pub fn update_raw<S: AsRef<str>>(
        &mut self,
        control: ControlId,
        raw: &[S],
        dataset: &Dataset,
    ) -> Result<Vec<RenderedChart>> {
        let value = control.parse(raw, dataset)?;
        self.update(control, value, dataset)
    }

    fn render(&self, charts: &[ChartId], dataset: &Dataset) -> Vec<RenderedChart> {
        charts
            .iter()
            .map(|&chart| RenderedChart {
                chart,
                spec: build_chart(chart, &self.selection, dataset),
            })
            .collect()
    }
}
