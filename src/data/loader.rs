use std::path::Path;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use log::debug;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{CellValue, Dataset, Record};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a shipment dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – comma-delimited text with a header row (also the fallback
///                when the file has no extension)
/// * `.tsv`     – tab-delimited text with a header row
/// * `.json`    – `[{ "Warehouse_block": "A", ... }, ...]`
/// * `.parquet` – one row per record, scalar columns only
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" | "" => load_delimited(path, b',')?,
        "tsv" => load_delimited(path, b'\t')?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    debug!(
        "loaded {} rows × {} columns from {}",
        dataset.len(),
        dataset.column_names.len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Delimited text loader
// ---------------------------------------------------------------------------

/// Header row with column names, one record per line. Every row must have as
/// many fields as the header.
fn load_delimited(path: &Path, delimiter: u8) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading header row")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("reading row {row_no}"))?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(col, value)| (col.clone(), guess_cell_type(value)))
            .collect();
        records.push(record);
    }

    Ok(Dataset::with_header(headers, records))
}

/// Markers Pandas reads as missing by default (`read_csv` `na_values`).
const NA_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn guess_cell_type(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() || NA_MARKERS.contains(&s) {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return float_cell(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::String(s.to_string())
}

fn float_cell(v: f64) -> CellValue {
    if v.is_nan() {
        CellValue::Null
    } else {
        CellValue::Float(v)
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Warehouse_block": "D", "Mode_of_Shipment": "Flight", "Customer_rating": 2, ... },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root
        .as_array()
        .context("Expected top-level JSON array")?;

    let mut records: Vec<Record> = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        records.push(
            obj.iter()
                .map(|(key, val)| (key.clone(), json_to_cell(val)))
                .collect(),
        );
    }

    Ok(Dataset::from_records(records))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                float_cell(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file, one record per row.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`). Nested columns are not supported and are
/// carried as their type name.
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let column_names: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        for row in 0..batch.num_rows() {
            let record: Record = column_names
                .iter()
                .zip(batch.columns())
                .map(|(name, col)| (name.clone(), extract_cell(col, row)))
                .collect();
            records.push(record);
        }
    }

    Ok(Dataset::with_header(column_names, records))
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell(col: &ArrayRef, row: usize) -> CellValue {
    if col.is_null(row) {
        return CellValue::Null;
    }
    match col.data_type() {
        DataType::Utf8 => CellValue::String(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => CellValue::String(col.as_string::<i64>().value(row).to_string()),
        DataType::Int32 => CellValue::Integer(col.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Int64 => CellValue::Integer(col.as_primitive::<Int64Type>().value(row)),
        DataType::Float32 => float_cell(col.as_primitive::<Float32Type>().value(row) as f64),
        DataType::Float64 => float_cell(col.as_primitive::<Float64Type>().value(row)),
        DataType::Boolean => CellValue::Bool(col.as_boolean().value(row)),
        other => CellValue::String(format!("{other:?}")),
    }
}
