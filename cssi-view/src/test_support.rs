//! Small in-memory datasets for unit tests.

use cssi_core::{Dataset, Indicator};

/// Build a dataset from `(country, cases, deaths, recovered)` rows. Every
/// other indicator gets a value derived from its position so that columns
/// differ from each other and from row to row.
pub fn dataset_from_rows(rows: &[(&str, &str, &str, &str)]) -> Dataset {
    let mut csv = String::from("Country");
    for indicator in Indicator::ALL {
        csv.push_str(&format!(",\"{}\"", indicator.column()));
    }
    csv.push('\n');
    for (r, (country, cases, deaths, recovered)) in rows.iter().enumerate() {
        csv.push_str(&format!("{},{},{},{}", country, cases, deaths, recovered));
        for c in 3..Indicator::ALL.len() {
            let score = ((r * 7 + c * 3) % 100) as f64 / 10.0;
            csv.push_str(&format!(",{}", score));
        }
        csv.push('\n');
    }
    Dataset::from_csv_str(&csv).expect("test dataset")
}

/// Four countries, Brazil first.
pub fn sample_dataset() -> Dataset {
    dataset_from_rows(&[
        ("Brazil", "500", "10", "400"),
        ("Chile", "300", "6", "250"),
        ("Peru", "200", "9", "150"),
        ("India", "900", "20", "800"),
    ])
}

/// Brazil with the figures used in the documentation examples, plus one
/// neighbour so the bar series has more than a single bar.
pub fn brazil_dataset() -> Dataset {
    dataset_from_rows(&[("Brazil", "500", "10", "400"), ("Argentina", "120", "3", "90")])
}
