/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Semicolon separated CSV export
//!
//! Every cell is wrapped in double quotes, cells are joined with `;` and lines
//! end with CRLF. Quotes inside a value are doubled. Columns missing from a
//! record produce an empty cell (`""`).

use crate::error::AppError;
use crate::model::responses::Asset;
use crate::model::utils::value_to_cell;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Writes a header line with `columns` followed by one line per record
///
/// # Returns
/// * `Ok(usize)` - Number of records written, header excluded
pub fn write_csv<'a, W, I>(writer: W, records: I, columns: &[&str]) -> Result<usize, AppError>
where
    W: Write,
    I: IntoIterator<Item = &'a Asset>,
{
    let mut wtr = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    wtr.write_record(columns)?;

    let mut written = 0;
    for record in records {
        wtr.write_record(columns.iter().map(|column| {
            record.get(*column).map(value_to_cell).unwrap_or_default()
        }))?;
        written += 1;
    }

    wtr.flush()?;
    Ok(written)
}

/// Creates (or truncates) `path` and writes the CSV into it
pub fn write_csv_file<'a, I>(path: &Path, records: I, columns: &[&str]) -> Result<usize, AppError>
where
    I: IntoIterator<Item = &'a Asset>,
{
    let file = File::create(path)?;
    let written = write_csv(BufWriter::new(file), records, columns)?;
    debug!("Wrote {} records to {}", written, path.display());
    Ok(written)
}
