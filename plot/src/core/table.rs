//! CSV text → header plus string rows.

use tracing::debug;

use super::error::PlotError;

/// Header label used for the row-number column when the CSV carries no X.
pub const GENERATED_X_HEADER: &str = "_generated_x_";

/// A parsed CSV document. Cells stay as text; numeric parsing happens per
/// use so that a bad cell only drops the point it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Column holding X. Always 0: either the caller's first column or the
    /// synthesized row numbers.
    pub x_index: usize,
}

impl Table {
    pub fn parse(csv_data: &str, x_in_first_column: bool) -> Result<Self, PlotError> {
        check_quotes(csv_data)?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record?;
            records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        if records.len() < 2 {
            return Err(PlotError::Parse("no data rows found in CSV".into()));
        }

        let mut rows = records.split_off(1);
        let mut header = records.pop().unwrap_or_default();

        if x_in_first_column {
            let first_row_empty = rows.first().map_or(true, Vec::is_empty);
            if header.is_empty() || first_row_empty {
                return Err(PlotError::Parse(
                    "csv requires at least one column when xdata is true".into(),
                ));
            }
        } else {
            header.insert(0, GENERATED_X_HEADER.to_string());
            for (idx, row) in rows.iter_mut().enumerate() {
                row.insert(0, (idx + 1).to_string());
            }
        }

        debug!(
            columns = header.len(),
            rows = rows.len(),
            synthesized_x = !x_in_first_column,
            "parsed csv"
        );

        Ok(Self {
            header,
            rows,
            x_index: 0,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    /// Just saw a `"` inside a quoted field: either an escape or the close.
    QuoteInQuoted,
}

/// Strict RFC 4180 quoting. The reader silently absorbs a `"` inside an
/// unquoted field, text after a closing quote and an unterminated quoted
/// field; all three are grammar errors here.
fn check_quotes(csv_data: &str) -> Result<(), PlotError> {
    use QuoteState::*;

    let mut state = FieldStart;
    let (mut line, mut column) = (1usize, 0usize);
    let fail = |line: usize, column: usize, what: &str| {
        PlotError::Parse(format!(
            "csv read error: parse error on line {line}, column {column}: {what}"
        ))
    };

    for ch in csv_data.chars() {
        column += 1;
        state = match (state, ch) {
            (FieldStart, '"') => Quoted,
            (FieldStart | Unquoted | QuoteInQuoted, ',' | '\r') => FieldStart,
            (FieldStart | Unquoted | QuoteInQuoted, '\n') => {
                line += 1;
                column = 0;
                FieldStart
            }
            (Unquoted, '"') => return Err(fail(line, column, "bare \" in non-quoted field")),
            (FieldStart | Unquoted, _) => Unquoted,
            (Quoted, '"') => QuoteInQuoted,
            (Quoted, '\n') => {
                line += 1;
                column = 0;
                Quoted
            }
            (Quoted, _) => Quoted,
            (QuoteInQuoted, '"') => Quoted,
            (QuoteInQuoted, _) => {
                return Err(fail(line, column, "extraneous or missing \" in quoted field"))
            }
        };
    }

    if state == Quoted {
        return Err(fail(line, column, "extraneous or missing \" in quoted field"));
    }
    Ok(())
}

/// Parse a cell as a finite number. Missing, non-numeric, `inf` and `NaN`
/// cells all count as absent.
pub fn numeric_cell(row: &[String], index: usize) -> Option<f64> {
    row.get(index)?
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
