//! A [`Table`] checked against the indicator vocabulary.
//!
//! Validation happens once, when the dataset is built. After that every
//! [`Indicator`] lookup is guaranteed to hit an existing numeric column, so
//! chart builders never see a missing-column error.

use crate::error::{CoreError, Result};
use crate::indicator::Indicator;
use crate::table::{Cell, Row, Table};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Dataset compiled into the binary: one row per country with COVID-19
/// totals (Worldometers) and SSI scores.
pub static EMBEDDED_CSV: &str = include_str!("../../fixtures/dataset.csv");

/// Validated, immutable dataset shared by every chart builder.
///
/// Cheaply cloneable (via `Arc`), so the web app and the HTTP server can
/// hand the same table to every reader.
#[derive(Debug, Clone)]
pub struct Dataset {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    table: Table,
    columns: HashMap<Indicator, usize>,
}

impl Dataset {
    /// Validate `table` against [`Indicator::ALL`].
    ///
    /// Fails listing every absent column at once, or on the first indicator
    /// cell that is neither a number nor missing.
    pub fn from_table(table: Table) -> Result<Self> {
        let missing: Vec<String> = Indicator::ALL
            .iter()
            .filter(|i| !table.has_column(i.column()))
            .map(|i| i.column().to_string())
            .collect();
        if !missing.is_empty() {
            return Err(CoreError::MissingColumns(missing));
        }

        let mut columns = HashMap::with_capacity(Indicator::ALL.len());
        for indicator in Indicator::ALL {
            let Some(idx) = table.column_index(indicator.column()) else {
                continue;
            };
            for row in table.rows() {
                if let Some(Cell::Text(value)) = row.cell(idx) {
                    return Err(CoreError::NonNumeric {
                        country: row.country.clone(),
                        column: indicator.column().to_string(),
                        value: value.clone(),
                    });
                }
            }
            columns.insert(indicator, idx);
        }

        log::info!(
            "[CSSI] dataset: Validated {} indicators over {} countries",
            columns.len(),
            table.row_count()
        );
        Ok(Self {
            inner: Arc::new(Inner { table, columns }),
        })
    }

    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_table(Table::from_csv_str(csv_data)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("[CSSI] dataset: Loading {}", path.display());
        Self::from_table(Table::from_path(path)?)
    }

    /// The dataset shipped in [`EMBEDDED_CSV`].
    pub fn embedded() -> Result<Self> {
        Self::from_csv_str(EMBEDDED_CSV)
    }

    pub fn table(&self) -> &Table {
        &self.inner.table
    }

    pub fn rows(&self) -> &[Row] {
        self.inner.table.rows()
    }

    pub fn row_count(&self) -> usize {
        self.inner.table.row_count()
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.inner.table.countries()
    }

    pub fn contains_country(&self, country: &str) -> bool {
        self.countries().any(|c| c == country)
    }

    /// Numeric value of `indicator` in `row`; `None` when the cell is blank.
    pub fn value(&self, row: &Row, indicator: Indicator) -> Option<f64> {
        self.inner
            .columns
            .get(&indicator)
            .and_then(|&idx| row.cell(idx))
            .and_then(Cell::as_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Header with every indicator column, and a row builder filling the
    /// COVID metrics and a constant for everything else.
    fn csv_with_rows(rows: &[(&str, &str, &str, &str)]) -> String {
        let mut out = String::from("Country");
        for i in Indicator::ALL {
            out.push(',');
            out.push('"');
            out.push_str(i.column());
            out.push('"');
        }
        out.push('\n');
        for (country, cases, deaths, recovered) in rows {
            out.push_str(&format!("{},{},{},{}", country, cases, deaths, recovered));
            for _ in 3..Indicator::ALL.len() {
                out.push_str(",5.0");
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn embedded_dataset_is_valid() {
        let ds = Dataset::embedded().unwrap();
        assert!(ds.row_count() > 0);
        assert!(ds.contains_country("Brazil"));
    }

    #[test]
    fn value_lookup_by_indicator() {
        let ds = Dataset::from_csv_str(&csv_with_rows(&[("Brazil", "500", "10", "400")])).unwrap();
        let row = &ds.rows()[0];
        assert_eq!(ds.value(row, Indicator::Deaths), Some(10.0));
        assert_eq!(ds.value(row, Indicator::Gdp), Some(5.0));
    }

    #[test]
    fn blank_indicator_cells_are_allowed() {
        let ds = Dataset::from_csv_str(&csv_with_rows(&[("Peru", "7", "", "N/A")])).unwrap();
        let row = &ds.rows()[0];
        assert_eq!(ds.value(row, Indicator::Cases), Some(7.0));
        assert_eq!(ds.value(row, Indicator::Deaths), None);
        assert_eq!(ds.value(row, Indicator::Recovered), None);
    }

    #[test]
    fn rejects_text_in_indicator_column() {
        let err = Dataset::from_csv_str(&csv_with_rows(&[("Peru", "lots", "1", "1")])).unwrap_err();
        match err {
            CoreError::NonNumeric { country, column, value } => {
                assert_eq!(country, "Peru");
                assert_eq!(column, "Cases");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn lists_all_missing_columns() {
        let err = Dataset::from_csv_str("Country,Cases,Deaths\nPeru,1,2\n").unwrap_err();
        match err {
            CoreError::MissingColumns(cols) => {
                assert_eq!(cols.len(), Indicator::ALL.len() - 2);
                assert!(cols.contains(&"Recovered".to_string()));
                assert!(cols.contains(&"Transistion".to_string()));
                assert!(!cols.contains(&"Cases".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn clones_share_the_table() {
        let ds = Dataset::embedded().unwrap();
        let other = ds.clone();
        assert!(std::ptr::eq(ds.table(), other.table()));
    }
}
