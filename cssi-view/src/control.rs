//! Dropdown controls and their validated values.
//!
//! Option lists are drawn from the fixed indicator groups in
//! [`cssi_core::indicator`] (or from the dataset's countries), never from
//! free-form strings, so a control can only ever select an existing column.

use crate::error::{Result, ViewError};
use cssi_core::indicator::{COVID_METRICS, SSI_AND_WELLBEING, SSI_INDICATORS, WELLBEING_SCORES};
use cssi_core::{Dataset, Indicator};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlId {
    CovidMetric,
    CompareCountries,
    CompareMetric,
    WellbeingScore,
    SsiX,
    SsiY,
    CombinedSsi,
    CombinedCovid,
}

/// Where a control's options come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlKind {
    /// Single choice among a fixed indicator group.
    Indicator {
        options: &'static [Indicator],
        default: Indicator,
    },
    /// Any number of countries from the dataset; nothing chosen by default.
    Countries,
}

/// Current value of a control.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ControlValue {
    /// `None` when the dropdown has been cleared.
    Indicator(Option<Indicator>),
    Countries(Vec<String>),
}

impl ControlValue {
    pub fn indicator(&self) -> Option<Indicator> {
        match self {
            ControlValue::Indicator(i) => *i,
            ControlValue::Countries(_) => None,
        }
    }

    pub fn countries(&self) -> &[String] {
        match self {
            ControlValue::Countries(c) => c,
            ControlValue::Indicator(_) => &[],
        }
    }
}

/// A `(value, label)` pair as rendered in a dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlOption {
    pub value: String,
    pub label: String,
}

/// Everything a UI needs to draw a control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlDescriptor {
    pub id: ControlId,
    pub prompt: &'static str,
    pub multi: bool,
    pub options: Vec<ControlOption>,
    pub default: ControlValue,
}

impl ControlId {
    pub const ALL: [ControlId; 8] = [
        ControlId::CovidMetric,
        ControlId::CompareCountries,
        ControlId::CompareMetric,
        ControlId::WellbeingScore,
        ControlId::SsiX,
        ControlId::SsiY,
        ControlId::CombinedSsi,
        ControlId::CombinedCovid,
    ];

    /// DOM id and query-parameter name.
    pub fn id(self) -> &'static str {
        match self {
            ControlId::CovidMetric => "covid-metric",
            ControlId::CompareCountries => "compare-countries",
            ControlId::CompareMetric => "compare-metric",
            ControlId::WellbeingScore => "wellbeing-score",
            ControlId::SsiX => "ssi-x",
            ControlId::SsiY => "ssi-y",
            ControlId::CombinedSsi => "combined-ssi",
            ControlId::CombinedCovid => "combined-covid",
        }
    }

    pub fn from_id(id: &str) -> Option<ControlId> {
        Self::ALL.iter().copied().find(|c| c.id() == id)
    }

    pub fn parse_id(id: &str) -> Result<ControlId> {
        Self::from_id(id).ok_or_else(|| ViewError::UnknownControl(id.to_string()))
    }

    pub fn prompt(self) -> &'static str {
        match self {
            ControlId::CovidMetric => "Select what to view on the graph:",
            ControlId::CompareCountries => "Select a Country from the X Axis:",
            ControlId::CompareMetric => "Select COVID data from the Y Axis:",
            ControlId::WellbeingScore => "Select an option for the Y axis:",
            ControlId::SsiX => "Select an option for the X axis:",
            ControlId::SsiY => "Select an option for the Y axis:",
            ControlId::CombinedSsi => "Select an SSI Indicator:",
            ControlId::CombinedCovid => "Select a COVID-19 indicator:",
        }
    }

    pub fn kind(self) -> ControlKind {
        use ControlKind::Indicator as Pick;
        match self {
            ControlId::CovidMetric | ControlId::CompareMetric | ControlId::CombinedCovid => Pick {
                options: &COVID_METRICS,
                default: Indicator::Cases,
            },
            ControlId::CompareCountries => ControlKind::Countries,
            ControlId::WellbeingScore => Pick {
                options: &WELLBEING_SCORES,
                default: Indicator::HumanWellbeing,
            },
            ControlId::SsiX => Pick {
                options: &SSI_INDICATORS,
                default: Indicator::Gdp,
            },
            ControlId::SsiY => Pick {
                options: &SSI_INDICATORS,
                default: Indicator::SafeSanitation,
            },
            ControlId::CombinedSsi => Pick {
                options: &SSI_AND_WELLBEING,
                default: Indicator::Economy,
            },
        }
    }

    pub fn is_multi(self) -> bool {
        matches!(self.kind(), ControlKind::Countries)
    }

    /// Value the control takes when its panel is mounted.
    pub fn default_value(self) -> ControlValue {
        match self.kind() {
            ControlKind::Indicator { default, .. } => ControlValue::Indicator(Some(default)),
            ControlKind::Countries => ControlValue::Countries(Vec::new()),
        }
    }

    pub fn options(self, dataset: &Dataset) -> Vec<ControlOption> {
        match self.kind() {
            ControlKind::Indicator { options, .. } => options
                .iter()
                .map(|i| ControlOption {
                    value: i.column().to_string(),
                    label: i.label().to_string(),
                })
                .collect(),
            ControlKind::Countries => dataset
                .countries()
                .map(|c| ControlOption {
                    value: c.to_string(),
                    label: c.to_string(),
                })
                .collect(),
        }
    }

    pub fn describe(self, dataset: &Dataset) -> ControlDescriptor {
        ControlDescriptor {
            id: self,
            prompt: self.prompt(),
            multi: self.is_multi(),
            options: self.options(dataset),
            default: self.default_value(),
        }
    }

    /// Check that `value` is one this control could produce.
    pub fn validate(self, value: &ControlValue, dataset: &Dataset) -> Result<()> {
        match (self.kind(), value) {
            (ControlKind::Indicator { .. }, ControlValue::Indicator(None)) => Ok(()),
            (ControlKind::Indicator { options, .. }, ControlValue::Indicator(Some(i))) => {
                if options.contains(i) {
                    Ok(())
                } else {
                    Err(ViewError::InvalidOption {
                        control: self.id(),
                        value: i.column().to_string(),
                    })
                }
            }
            (ControlKind::Countries, ControlValue::Countries(countries)) => {
                match countries.iter().find(|c| !dataset.contains_country(c)) {
                    Some(unknown) => Err(ViewError::InvalidOption {
                        control: self.id(),
                        value: unknown.clone(),
                    }),
                    None => Ok(()),
                }
            }
            _ => Err(ViewError::KindMismatch(self.id())),
        }
    }

    /// Parse raw values as sent by a `<select>` or a query string.
    ///
    /// Single-select controls take at most one value; an empty string or no
    /// value at all clears them. Country lists drop blanks and repeats.
    pub fn parse<S: AsRef<str>>(self, raw: &[S], dataset: &Dataset) -> Result<ControlValue> {
        let values: Vec<&str> = raw
            .iter()
            .map(|s| s.as_ref().trim())
            .filter(|s| !s.is_empty())
            .collect();

        let value = match self.kind() {
            ControlKind::Indicator { .. } => match values.as_slice() {
                [] => ControlValue::Indicator(None),
                [one] => {
                    let indicator =
                        Indicator::from_column(one).ok_or_else(|| ViewError::InvalidOption {
                            control: self.id(),
                            value: one.to_string(),
                        })?;
                    ControlValue::Indicator(Some(indicator))
                }
                _ => return Err(ViewError::MultipleValues(self.id())),
            },
            ControlKind::Countries => {
                let mut countries: Vec<String> = Vec::with_capacity(values.len());
                for v in values {
                    if !countries.iter().any(|c| c == v) {
                        countries.push(v.to_string());
                    }
                }
                ControlValue::Countries(countries)
            }
        };
        self.validate(&value, dataset)?;
        Ok(value)
    }
}
