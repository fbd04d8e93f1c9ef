//! CSV loading into an immutable, row-per-country table.
//!
//! The file has one header row and one row per country. Cells are parsed
//! once at load time into [`Cell`]s; nothing in the table changes afterwards.
//!
//! # Example CSV
//! ```text
//! Country,Cases,Deaths,Recovered
//! Brazil,500,10,400
//! ```

use crate::error::{CoreError, Result};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

/// Header of the key column.
pub const COUNTRY_COLUMN: &str = "Country";

/// A single parsed value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl Cell {
    /// Parse a raw CSV field. Thousands separators are accepted in numbers;
    /// blanks and the usual "not available" markers become [`Cell::Missing`].
    pub fn parse(raw: &str) -> Cell {
        let trimmed = raw.trim();
        if trimmed.is_empty() || matches!(trimmed, "N/A" | "NA" | "-" | "---") {
            return Cell::Missing;
        }
        match trimmed.replace(',', "").parse::<f64>() {
            Ok(v) if v.is_finite() => Cell::Number(v),
            _ => Cell::Text(trimmed.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }
}

/// One country and its cells, indexed like [`Table::headers`].
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub country: String,
    cells: Vec<Cell>,
}

impl Row {
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }
}

/// Ordered rows loaded from one CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Row>,
}

impl Table {
    /// Parse a table from CSV text (typically the embedded dataset).
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Read and parse a CSV file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let index: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), i))
            .collect();
        let country_idx = *index
            .get(COUNTRY_COLUMN)
            .ok_or(CoreError::MissingCountryColumn(COUNTRY_COLUMN))?;

        let mut rows = Vec::new();
        let mut seen = HashSet::new();
        for (line, result) in rdr.records().enumerate() {
            let record = result?;
            let country = record.get(country_idx).unwrap_or("").trim().to_string();
            if country.is_empty() {
                // Header is line 1, first record is row 2.
                return Err(CoreError::EmptyCountry(line + 2));
            }
            if !seen.insert(country.clone()) {
                return Err(CoreError::DuplicateCountry(country));
            }
            let cells = (0..headers.len())
                .map(|i| {
                    if i == country_idx {
                        Cell::Text(country.clone())
                    } else {
                        Cell::parse(record.get(i).unwrap_or(""))
                    }
                })
                .collect();
            rows.push(Row { country, cells });
        }

        log::info!(
            "[CSSI] table: Loaded {} rows x {} columns",
            rows.len(),
            headers.len()
        );
        Ok(Self {
            headers,
            index,
            rows,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Country names in file order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.country.as_str())
    }

    /// Cell at `column` for the given country, if both exist.
    pub fn get(&self, country: &str, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column)?;
        self.rows
            .iter()
            .find(|r| r.country == country)
            .and_then(|r| r.cell(idx))
    }
}
