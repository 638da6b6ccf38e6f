//! The static diamonds reference table.

use crate::error::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Sample of the classic diamonds table shipped with the binary.
const BUNDLED_CSV: &str = include_str!("../data/diamonds.csv");

/// Cut quality grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cut {
    Fair,
    Good,
    #[serde(rename = "Very Good")]
    VeryGood,
    Premium,
    Ideal,
}

impl Cut {
    /// Every grade, in the order the sidebar lists them.
    pub const ALL: [Cut; 5] = [Cut::Premium, Cut::Ideal, Cut::VeryGood, Cut::Good, Cut::Fair];

    pub fn label(self) -> &'static str {
        match self {
            Cut::Fair     => "Fair",
            Cut::Good     => "Good",
            Cut::VeryGood => "Very Good",
            Cut::Premium  => "Premium",
            Cut::Ideal    => "Ideal",
        }
    }
}

impl fmt::Display for Cut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Cut {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        Cut::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashError::Dataset(format!("unknown cut '{s}'")))
    }
}

/// One row of the reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diamond {
    pub carat:   f64,
    pub cut:     Cut,
    pub color:   String,
    pub clarity: String,
    pub depth:   f64,
    pub table:   f64,
    /// Price in US dollars.
    pub price:   u32,
    pub x:       f64,
    pub y:       f64,
    pub z:       f64,
}

/// Read-only reference dataset, loaded once at startup.
///
/// Cloning is cheap; all clones share the same rows.
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    rows: Arc<[Diamond]>,
}

impl ReferenceDataset {
    pub const COLUMNS: [&'static str; 10] = [
        "carat", "cut", "color", "clarity", "depth", "table", "price", "x", "y", "z",
    ];

    pub fn from_rows(rows: Vec<Diamond>) -> Self {
        Self { rows: rows.into() }
    }

    /// The sample compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_reader(BUNDLED_CSV.as_bytes())
    }

    /// Load a headed CSV file with the standard diamonds columns.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(file)?;
        tracing::info!("Loaded {} diamonds from '{}'", dataset.len(), path.display());
        Ok(dataset)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut csv = csv::Reader::from_reader(reader);
        let rows = csv
            .deserialize::<Diamond>()
            .enumerate()
            .map(|(i, row)| {
                // +2: one for the header, one for 1-based line numbers.
                row.map_err(|e| DashError::Dataset(format!("line {}: {e}", i + 2)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_rows(rows))
    }

    pub fn rows(&self) -> &[Diamond] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cut_labels_round_trip() {
        for cut in Cut::ALL {
            assert_eq!(cut.label().parse::<Cut>().unwrap(), cut);
        }
        assert_eq!("very good".parse::<Cut>().unwrap(), Cut::VeryGood);
        assert!("Excellent".parse::<Cut>().is_err());
    }

    #[test]
    fn bundled_sample_loads() {
        let ds = ReferenceDataset::bundled().unwrap();
        assert!(!ds.is_empty());
        for cut in Cut::ALL {
            assert!(ds.rows().iter().any(|d| d.cut == cut), "no {cut} rows bundled");
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ReferenceDataset::from_path("/nonexistent/diamonds.csv").unwrap_err();
        assert!(matches!(err, DashError::Io { .. }), "{err}");
    }

    #[test]
    fn parses_standard_columns() {
        let csv = "carat,cut,color,clarity,depth,table,price,x,y,z\n\
                   0.23,Ideal,E,SI2,61.5,55,326,3.95,3.98,2.43\n\
                   0.24,Very Good,J,VVS2,62.8,57,336,3.94,3.96,2.48\n";
        let ds = ReferenceDataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows()[1].cut, Cut::VeryGood);
        assert_eq!(ds.rows()[0].price, 326);
    }

    #[test]
    fn malformed_row_reports_line() {
        let csv = "carat,cut,color,clarity,depth,table,price,x,y,z\n\
                   0.23,Ideal,E,SI2,61.5,55,326,3.95,3.98,2.43\n\
                   0.21,Superb,E,SI1,59.8,61,326,3.89,3.84,2.31\n";
        let err = ReferenceDataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 3"), "{err}");
    }
}
