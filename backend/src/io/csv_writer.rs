//! CSV writing
//!
//! Writers always emit a header row. Counts returned are data rows only.

use crate::core::numeric::parse_number;
use crate::core::LabError;
use crate::dataset::SampleGenerator;
use crate::models::{CsvTable, Record, SAMPLE_HEADERS};
use crate::rng::RngManager;
use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::{debug, info};

/// Write a header and rows to `path`, replacing any existing file
fn write_rows<H, R, I>(path: &Path, header: &[H], rows: I) -> Result<usize, LabError>
where
    H: AsRef<str>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
    I: IntoIterator<Item = R>,
{
    let mut writer = csv::Writer::from_path(path).map_err(|e| LabError::csv(path, e))?;
    writer
        .write_record(header.iter().map(AsRef::<str>::as_ref))
        .map_err(|e| LabError::csv(path, e))?;

    let mut count = 0;
    for row in rows {
        writer.write_record(row).map_err(|e| LabError::csv(path, e))?;
        count += 1;
    }
    writer.flush().map_err(|e| LabError::io(path, e))?;

    debug!(path = %path.display(), rows = count, "wrote csv");
    Ok(count)
}

/// Write a header row and list rows
///
/// Every row must have as many values as the header.
pub fn write_samples_from_list<H, V>(path: &Path, header: &[H], rows: &[Vec<V>]) -> Result<usize, LabError>
where
    H: AsRef<str>,
    V: AsRef<str>,
{
    for row in rows {
        if row.len() != header.len() {
            return Err(LabError::RowLength {
                expected: header.len(),
                found: row.len(),
            });
        }
    }
    write_rows(path, header, rows.iter().map(|row| row.iter().map(AsRef::<str>::as_ref)))
}

/// Write records under `fieldnames`
///
/// Keys missing from a record are written empty; keys outside `fieldnames`
/// are rejected.
pub fn write_samples_from_dict<H: AsRef<str>>(
    path: &Path,
    fieldnames: &[H],
    records: &[Record],
) -> Result<usize, LabError> {
    let fields: Vec<&str> = fieldnames.iter().map(AsRef::<str>::as_ref).collect();
    for record in records {
        check_known_fields(record, &fields)?;
    }
    write_rows(path, fields.as_slice(), records.iter().map(|r| values_in_order(r, &fields)))
}

/// Copy rows whose numeric `column` is at least `threshold`
///
/// Rows with a non-numeric value are skipped. Returns rows kept.
pub fn filter_and_save(input: &Path, output: &Path, column: &str, threshold: f64) -> Result<usize, LabError> {
    let table = CsvTable::load(input)?;
    table.require_column(column, input)?;

    let kept: Vec<Vec<String>> = table
        .rows
        .iter()
        .filter(|row| {
            row.get(column)
                .and_then(|v| parse_number(v))
                .is_some_and(|v| v >= threshold)
        })
        .map(|row| table.row_values(row))
        .collect();

    let count = write_rows(output, table.headers.as_slice(), kept)?;
    info!(input = %input.display(), output = %output.display(), column, threshold, kept = count, "filtered csv");
    Ok(count)
}

/// Append one record to a CSV file
///
/// Values follow the existing header order. A missing or empty file gets a
/// header row first: [`SAMPLE_HEADERS`] columns in their usual order, then any
/// other keys alphabetically.
pub fn append_row_to_csv(path: &Path, record: &Record) -> Result<(), LabError> {
    let existing = match fs::metadata(path) {
        Ok(meta) if meta.len() > 0 => Some(CsvTable::load(path)?.headers),
        _ => None,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)
        .map_err(|e| LabError::io(path, e))?;

    let write_header = existing.is_none();
    let headers = match existing {
        Some(headers) => {
            let fields: Vec<&str> = headers.iter().map(String::as_str).collect();
            check_known_fields(record, &fields)?;
            ensure_trailing_newline(&mut file).map_err(|e| LabError::io(path, e))?;
            headers
        }
        None => new_file_headers(record),
    };

    let mut writer = csv::WriterBuilder::new().from_writer(file);
    if write_header {
        writer.write_record(&headers).map_err(|e| LabError::csv(path, e))?;
    }
    let fields: Vec<&str> = headers.iter().map(String::as_str).collect();
    writer
        .write_record(values_in_order(record, &fields))
        .map_err(|e| LabError::csv(path, e))?;
    writer.flush().map_err(|e| LabError::io(path, e))?;

    debug!(path = %path.display(), "appended csv row");
    Ok(())
}

/// Concatenate the data rows of several CSV files
///
/// The output header is the union of the input headers in first-seen order;
/// values missing from a file are written empty. Returns total data rows.
pub fn merge_csv_files<P: AsRef<Path>>(inputs: &[P], output: &Path) -> Result<usize, LabError> {
    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<Record> = Vec::new();

    for input in inputs {
        let table = CsvTable::load(input.as_ref())?;
        for header in &table.headers {
            if !headers.contains(header) {
                headers.push(header.clone());
            }
        }
        rows.extend(table.rows);
    }

    let fields: Vec<&str> = headers.iter().map(String::as_str).collect();
    let count = write_rows(output, fields.as_slice(), rows.iter().map(|r| values_in_order(r, &fields)))?;
    info!(files = inputs.len(), output = %output.display(), rows = count, "merged csv files");
    Ok(count)
}

/// Write `num_rows` generated samples in `samples.csv` format
pub fn create_sample_csv(path: &Path, num_rows: usize, rng: &mut RngManager) -> Result<usize, LabError> {
    let mut generator = SampleGenerator::with_defaults(rng);
    let samples: Vec<Vec<String>> = (1..=num_rows).map(|i| generator.next_sample(i).to_row()).collect();
    write_rows(path, SAMPLE_HEADERS.as_slice(), samples)
}

fn new_file_headers(record: &Record) -> Vec<String> {
    let mut headers: Vec<String> = SAMPLE_HEADERS
        .iter()
        .filter(|h| record.contains_key(**h))
        .map(|h| h.to_string())
        .collect();
    headers.extend(
        record
            .keys()
            .filter(|key| !SAMPLE_HEADERS.contains(&key.as_str()))
            .cloned(),
    );
    headers
}

fn check_known_fields(record: &Record, fields: &[&str]) -> Result<(), LabError> {
    match record.keys().find(|key| !fields.contains(&key.as_str())) {
        Some(key) => Err(LabError::UnknownField { field: key.clone() }),
        None => Ok(()),
    }
}

fn values_in_order<'a>(record: &'a Record, fields: &[&str]) -> Vec<&'a str> {
    fields
        .iter()
        .map(|f| record.get(*f).map(String::as_str).unwrap_or(""))
        .collect()
}

fn ensure_trailing_newline(file: &mut fs::File) -> std::io::Result<()> {
    let len = file.seek(SeekFrom::End(0))?;
    if len == 0 {
        return Ok(());
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    if last[0] != b'\n' {
        file.write_all(b"\n")?;
    }
    Ok(())
}
