//! CSV row source.
//!
//! Rows are kept as plain string fields; no schema is imposed here; later
//! stages index fields positionally through [`RawRecord`].

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::ReaderBuilder;

use crate::error::Result;
use crate::error::util::safe_open_file;
use crate::utils::logging::{
    FileStage, create_spinner, finish_and_clear, log_stage_complete, log_stage_start,
};

/// One delimited row as an ordered sequence of string fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRecord(Vec<String>);

impl RawRecord {
    /// Create a record from its fields
    #[must_use]
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    /// Field at `index`, if the row is long enough
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Number of fields in the row
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row has no fields at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All fields in order
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for RawRecord {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<&csv::StringRecord> for RawRecord {
    fn from(record: &csv::StringRecord) -> Self {
        record.iter().collect()
    }
}

/// Read every record from a CSV reader
///
/// Rows may have differing field counts. When `has_headers` is set the first
/// line is consumed as a header and not returned.
///
/// # Errors
/// Returns an error on IO failure or malformed CSV syntax
pub fn read_records_from_reader<R: Read>(reader: R, has_headers: bool) -> Result<Vec<RawRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut row = csv::StringRecord::new();
    while rdr.read_record(&mut row)? {
        records.push(RawRecord::from(&row));
    }

    Ok(records)
}

/// Read every record from a CSV file
///
/// # Errors
/// Returns an error if the file cannot be opened or parsed
pub fn read_records(path: &Path, has_headers: bool) -> Result<Vec<RawRecord>> {
    log_stage_start(FileStage::ReadSource, path);
    let start = Instant::now();

    let file = safe_open_file(path, "population source CSV")?;
    let spinner = create_spinner(Some("Reading population rows"));
    let records = read_records_from_reader(spinner.wrap_read(file), has_headers);
    finish_and_clear(&spinner);
    let records = records?;

    log_stage_complete(FileStage::ReadSource, path, records.len(), start.elapsed());
    Ok(records)
}
