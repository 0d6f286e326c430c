use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the shipment table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common Pandas dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// `Null`, or a float NaN, which Pandas also counts as missing.
    pub fn is_null(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Float(v) => v.is_nan(),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Column access errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("dataset has no column '{column}'")]
    UnknownColumn { column: String },

    #[error("row {row} has no value for column '{column}'")]
    MissingColumn { column: String, row: usize },

    #[error("row {row}, column '{column}': '{value}' is not numeric")]
    NotNumeric {
        column: String,
        row: usize,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Record – one row of the table
// ---------------------------------------------------------------------------

/// A single shipment record: column_name → value.
#[derive(Debug, Clone, Default)]
pub struct Record {
    pub fields: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields.get(column)
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, CellValue)>>(iter: I) -> Self {
        Record {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Read-only once the loader has built it.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All records (rows), in file order.
    pub records: Vec<Record>,
    /// Column names in header order.
    pub column_names: Vec<String>,
}

impl Dataset {
    /// Build a dataset from records when no header row is available (JSON).
    /// Columns are collected across all records; a record contributes its
    /// keys in sorted order.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut column_names: Vec<String> = Vec::new();
        for record in &records {
            for col in record.fields.keys() {
                if !column_names.contains(col) {
                    column_names.push(col.clone());
                }
            }
        }
        Dataset {
            records,
            column_names,
        }
    }

    /// Build a dataset whose column order is fixed by a header row.
    pub fn with_header(column_names: Vec<String>, records: Vec<Record>) -> Self {
        Dataset {
            records,
            column_names,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_names.iter().any(|c| c == column)
    }

    /// Categorical view of a column. Numbers and booleans are rendered as
    /// text; null cells come back as `None`.
    pub fn text_column(&self, column: &str) -> Result<Vec<Option<String>>, DatasetError> {
        self.cells(column)?
            .map(|cell| {
                cell.map(|value| match value {
                    v if v.is_null() => None,
                    CellValue::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                })
            })
            .collect()
    }

    /// Numeric view of a column. Null cells (including NaN) come back as
    /// `None`; any other non-numeric cell is an error.
    pub fn numeric_column(&self, column: &str) -> Result<Vec<Option<f64>>, DatasetError> {
        self.cells(column)?
            .enumerate()
            .map(|(row, cell)| {
                let value = cell?;
                if value.is_null() {
                    return Ok(None);
                }
                value
                    .as_f64()
                    .map(Some)
                    .ok_or_else(|| DatasetError::NotNumeric {
                        column: column.to_string(),
                        row,
                        value: value.to_string(),
                    })
            })
            .collect()
    }

    fn cells<'a>(
        &'a self,
        column: &'a str,
    ) -> Result<impl Iterator<Item = Result<&'a CellValue, DatasetError>> + 'a, DatasetError> {
        if !self.has_column(column) {
            return Err(DatasetError::UnknownColumn {
                column: column.to_string(),
            });
        }
        Ok(self.records.iter().enumerate().map(move |(row, record)| {
            record.get(column).ok_or_else(|| DatasetError::MissingColumn {
                column: column.to_string(),
                row,
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            Record::from_iter([
                ("Mode_of_Shipment", CellValue::String("Ship".into())),
                ("Customer_rating", CellValue::Integer(4)),
            ]),
            Record::from_iter([
                ("Mode_of_Shipment", CellValue::Null),
                ("Customer_rating", CellValue::Float(2.5)),
            ]),
            Record::from_iter([
                ("Mode_of_Shipment", CellValue::Integer(7)),
                ("Customer_rating", CellValue::Null),
            ]),
        ])
    }

    #[test]
    fn text_column_renders_scalars_and_skips_nulls() {
        let ds = sample();
        assert_eq!(
            ds.text_column("Mode_of_Shipment").unwrap(),
            vec![Some("Ship".to_string()), None, Some("7".to_string())]
        );
    }

    #[test]
    fn numeric_column_accepts_integers_and_floats() {
        let ds = sample();
        assert_eq!(
            ds.numeric_column("Customer_rating").unwrap(),
            vec![Some(4.0), Some(2.5), None]
        );
    }

    #[test]
    fn numeric_column_rejects_text() {
        let ds = sample();
        let err = ds.numeric_column("Mode_of_Shipment").unwrap_err();
        assert_eq!(
            err,
            DatasetError::NotNumeric {
                column: "Mode_of_Shipment".into(),
                row: 0,
                value: "Ship".into(),
            }
        );
    }

    #[test]
    fn unknown_column_is_reported() {
        let ds = sample();
        assert!(matches!(
            ds.text_column("Weight_in_gms"),
            Err(DatasetError::UnknownColumn { .. })
        ));
    }

    #[test]
    fn row_without_column_is_reported() {
        let ds = Dataset::with_header(
            vec!["Warehouse_block".into()],
            vec![
                Record::from_iter([("Warehouse_block", CellValue::String("A".into()))]),
                Record::default(),
            ],
        );
        assert_eq!(
            ds.text_column("Warehouse_block").unwrap_err(),
            DatasetError::MissingColumn {
                column: "Warehouse_block".into(),
                row: 1,
            }
        );
    }

    #[test]
    fn nan_counts_as_missing() {
        let ds = Dataset::from_records(vec![
            Record::from_iter([("Weight_in_gms", CellValue::Float(f64::NAN))]),
            Record::from_iter([("Weight_in_gms", CellValue::Float(1500.0))]),
        ]);
        assert!(CellValue::Float(f64::NAN).is_null());
        assert_eq!(ds.numeric_column("Weight_in_gms").unwrap(), vec![None, Some(1500.0)]);
        assert_eq!(
            ds.text_column("Weight_in_gms").unwrap(),
            vec![None, Some("1500".to_string())]
        );
    }

    #[test]
    fn from_records_collects_every_column() {
        let ds = sample();
        assert_eq!(ds.len(), 3);
        assert!(ds.has_column("Customer_rating"));
        assert_eq!(ds.column_names.len(), 2);
    }
}
