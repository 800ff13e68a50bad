//! CSV loading

use crate::Result;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Cell texts read as missing in addition to empty fields
///
/// The common spellings spreadsheet and dataframe tools write for an absent
/// value. Matching is exact and case-sensitive.
pub const NULL_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Read a CSV file with a header row into a `DataFrame`
///
/// The file is opened up front so that a missing file surfaces as
/// [`crate::Error::Io`] with `ErrorKind::NotFound`. Empty fields and any of
/// [`NULL_MARKERS`] load as nulls. Column types are inferred from every row,
/// so a single other non-numeric cell turns the column into strings.
pub fn read_csv(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let null_values = NullValues::AllColumns(NULL_MARKERS.iter().map(|&m| m.into()).collect());
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(CsvParseOptions::default().with_null_values(Some(null_values)))
        .into_reader_with_file_handle(file)
        .finish()?;

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded csv"
    );
    Ok(df)
}
