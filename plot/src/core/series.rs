//! Column selection, X cutoff filtering and stride thinning.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::error::PlotError;
use super::table::{numeric_cell, Table};

/// One requested column that exists in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub name: String,
    pub index: usize,
}

/// A borrowed data row.
pub type Row<'a> = &'a [String];

/// A data-space point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Series {
    /// Points of this series in row order. Rows where either cell is
    /// missing or not a finite number contribute nothing.
    pub fn points(&self, rows: &[Row<'_>], x_index: usize) -> Vec<Point> {
        rows.iter()
            .filter_map(|row| {
                let x = numeric_cell(row, x_index)?;
                let y = numeric_cell(row, self.index)?;
                Some(Point { x, y })
            })
            .collect()
    }
}

/// Resolve requested column names against the header, in request order.
///
/// Duplicate header names resolve to their last occurrence. Names that do
/// not exist are logged and skipped.
pub fn resolve_series(table: &Table, columns: &[String]) -> Result<Vec<Series>, PlotError> {
    let lookup: HashMap<&str, usize> = table
        .header
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.as_str(), idx))
        .collect();

    let mut series = Vec::with_capacity(columns.len());
    for name in columns {
        match lookup.get(name.as_str()) {
            Some(&index) => series.push(Series {
                name: name.clone(),
                index,
            }),
            None => warn!(column = %name, "column not found in CSV header, skipping"),
        }
    }

    if series.is_empty() {
        return Err(PlotError::NoColumnsFound);
    }
    Ok(series)
}

/// Keep rows whose X is `<= max_x`. Without a positive cutoff every row is
/// kept; with one, rows lacking a numeric X are dropped too.
pub fn filter_rows<'a>(
    rows: &'a [Vec<String>],
    x_index: usize,
    max_x: Option<f64>,
) -> Result<Vec<Row<'a>>, PlotError> {
    let filtered: Vec<Row<'a>> = match max_x.filter(|limit| *limit > 0.0) {
        Some(limit) => rows
            .iter()
            .filter(|row| numeric_cell(row, x_index).is_some_and(|x| x <= limit))
            .map(Vec::as_slice)
            .collect(),
        None => rows.iter().map(Vec::as_slice).collect(),
    };

    if filtered.is_empty() {
        return Err(PlotError::EmptyData(
            "no data points remain after filtering by range",
        ));
    }

    debug!(kept = filtered.len(), total = rows.len(), "filtered rows");
    Ok(filtered)
}

/// Every `skip`-th row, starting with the first.
pub fn thin_rows<'a>(rows: &[Row<'a>], skip: usize) -> Result<Vec<Row<'a>>, PlotError> {
    let thinned: Vec<Row<'a>> = rows.iter().step_by(skip.max(1)).copied().collect();

    if thinned.is_empty() {
        return Err(PlotError::EmptyData("no data points remain after thinning"));
    }
    Ok(thinned)
}
