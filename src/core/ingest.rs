//! Tabular ingestion: one row per entity, one column per four-digit year.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{EntitySeries, SeriesStore, YearValue};
use crate::error::{ChartError, ChartResult};

/// Column names and delimiter used to read a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    pub name_column: String,
    pub code_column: String,
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            name_column: "Country Name".to_owned(),
            code_column: "Country Code".to_owned(),
            delimiter: b',',
        }
    }
}

pub fn load_series_from_path(
    path: impl AsRef<Path>,
    options: &IngestOptions,
) -> ChartResult<SeriesStore> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading dataset");
    let file = File::open(path)?;
    load_series_from_reader(file, options)
}

/// Parses a delimited table into a [`SeriesStore`].
///
/// Empty, non-numeric and non-finite cells are holes. Rows with an empty name
/// or without any valid value are discarded; a table with no year column or
/// no surviving row is an [`ChartError::EmptyDataset`].
pub fn load_series_from_reader<R: Read>(
    reader: R,
    options: &IngestOptions,
) -> ChartResult<SeriesStore> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let name_index = column_index(&headers, &options.name_column)?;
    let code_index = column_index(&headers, &options.code_column)?;
    let year_columns: Vec<(usize, i32)> = headers
        .iter()
        .enumerate()
        .filter_map(|(index, header)| parse_year_column(header).map(|year| (index, year)))
        .collect();
    if year_columns.is_empty() {
        return Err(ChartError::EmptyDataset(
            "table has no four-digit year columns".to_owned(),
        ));
    }

    let mut series = Vec::new();
    let mut row_count = 0_usize;
    let mut discarded_count = 0_usize;
    for record in csv_reader.records() {
        let record = record?;
        row_count += 1;

        let name = record.get(name_index).unwrap_or_default();
        let code = record.get(code_index).unwrap_or_default();
        let points: Vec<YearValue> = year_columns
            .iter()
            .filter_map(|(index, year)| {
                record
                    .get(*index)
                    .and_then(parse_value)
                    .map(|value| YearValue::new(*year, value))
            })
            .collect();

        if name.is_empty() {
            trace!(row = row_count, values = points.len(), "discarding row without a name");
            discarded_count += 1;
            continue;
        }
        if points.is_empty() {
            trace!(row = row_count, name, "discarding row without valid values");
            discarded_count += 1;
            continue;
        }
        series.push(EntitySeries::new(name, code, points)?);
    }

    if row_count == 0 {
        return Err(ChartError::EmptyDataset("table has no data rows".to_owned()));
    }

    debug!(
        row_count,
        discarded_count,
        year_column_count = year_columns.len(),
        "parsed dataset"
    );
    SeriesStore::new(
        year_columns.into_iter().map(|(_, year)| year).collect(),
        series,
    )
}

/// Returns the year for headers made of exactly four ASCII digits.
#[must_use]
pub fn parse_year_column(header: &str) -> Option<i32> {
    if header.len() == 4 && header.bytes().all(|byte| byte.is_ascii_digit()) {
        header.parse().ok()
    } else {
        None
    }
}

fn parse_value(cell: &str) -> Option<f64> {
    if cell.is_empty() {
        return None;
    }
    cell.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn column_index(headers: &csv::StringRecord, column: &str) -> ChartResult<usize> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| ChartError::InvalidData(format!("missing required column `{column}`")))
}
