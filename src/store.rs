// src/store.rs
//
// Delimited files in and out.
// - save_records: the collector's dataset (fixed header order).
// - load_dataset: the dashboard's input, validated up front.
// - write_table / table_string: generic header + rows, used by export and copy.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{debug, info};

use crate::{
    config::consts::CATEGORY_COLUMN,
    config::options::ExportFormat,
    core::sanitize::label_from_file_stem,
    data::Dataset,
    error::{CollectError, DataFormatError},
    file::write_atomic,
    record::{parse_price, BookRecord, Rating},
};

pub const HEADERS: [&str; 4] = ["Title", "Price", "Availability", "Rating"];

/// Columns of a filtered listing as copied or exported from the dashboard.
pub const LISTING_HEADERS: [&str; 5] = ["Title", "Price", "Availability", "Rating", CATEGORY_COLUMN];

/* ---------------- Writing ---------------- */

fn record_row(r: &BookRecord, with_category: bool) -> Vec<String> {
    let mut row = vec![
        r.title.clone(),
        format!("{:.2}", r.price),
        r.availability.clone(),
        s!(r.rating.label()),
    ];
    if with_category {
        row.push(r.category.clone().unwrap_or_default());
    }
    row
}

/// Dataset rows `row_ix`, in that order, with their category appended.
pub fn listing_rows(ds: &Dataset, row_ix: &[usize]) -> Vec<Vec<String>> {
    row_ix
        .iter()
        .filter_map(|&i| ds.records().get(i))
        .map(|r| record_row(r, true))
        .collect()
}

/// Serialize header + rows into one buffer.
pub fn table_bytes<I, R>(headers: Option<&[&str]>, rows: I, format: ExportFormat) -> Result<Vec<u8>, csv::Error>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[String]>,
{
    let mut w = WriterBuilder::new()
        .delimiter(format.delim())
        .flexible(false)
        .from_writer(Vec::new());
    if let Some(h) = headers {
        w.write_record(h)?;
    }
    for row in rows {
        w.write_record(row.as_ref())?;
    }
    w.into_inner().map_err(|e| csv::Error::from(e.into_error()))
}

/// Clipboard-friendly text of a table.
pub fn table_string<I, R>(headers: Option<&[&str]>, rows: I, format: ExportFormat) -> Result<String, csv::Error>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[String]>,
{
    let bytes = table_bytes(headers, rows, format)?;
    Ok(String::from_utf8(bytes).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

/// Write a table atomically to `path`.
pub fn write_table<I, R>(path: &Path, headers: Option<&[&str]>, rows: I, format: ExportFormat) -> Result<(), CollectError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[String]>,
{
    let bytes = table_bytes(headers, rows, format)?;
    write_atomic(path, &bytes).map_err(|e| CollectError::io(path, e))
}

/// Write the collector's dataset: `Title,Price,Availability,Rating`, plus
/// `Genre` when `with_category`. Overwrites `path` only after the whole
/// buffer is ready.
pub fn save_records(
    path: &Path,
    records: &[BookRecord],
    format: ExportFormat,
    with_category: bool,
) -> Result<(), CollectError> {
    let mut headers: Vec<&str> = HEADERS.to_vec();
    if with_category {
        headers.push(CATEGORY_COLUMN);
    }
    write_table(path, Some(headers.as_slice()), records.iter().map(|r| record_row(r, with_category)), format)?;
    debug!(path = %path.display(), rows = records.len(), "records saved");
    Ok(())
}

/* ---------------- Loading ---------------- */

struct Columns {
    title: usize,
    price: usize,
    availability: usize,
    rating: usize,
    category: Option<usize>,
}

fn find_col(headers: &StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, DataFormatError> {
        let need = |name: &'static str| find_col(headers, &[name]).ok_or(DataFormatError::MissingColumn(name));
        Ok(Self {
            title: need("Title")?,
            price: need("Price")?,
            availability: need("Availability")?,
            rating: need("Rating")?,
            category: find_col(headers, &["Genre", "Category"]),
        })
    }
}

/// Ratings are stored as labels; a bare 1..5 is accepted too.
fn parse_rating(s: &str) -> Option<Rating> {
    s.parse::<Rating>()
        .ok()
        .or_else(|| s.trim().parse::<u8>().ok().and_then(Rating::from_value))
}

/// Parse and validate a delimited dataset from any reader.
pub fn read_dataset<R: Read>(reader: R, format: ExportFormat, fallback_category: &str) -> Result<Dataset, DataFormatError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(format.delim())
        .has_headers(true)
        .from_reader(reader);

    let cols = Columns::resolve(rdr.headers()?)?;

    let mut records = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row?;
        let n = i + 1;
        let field = |ix: usize| row.get(ix).unwrap_or("");

        let price_text = field(cols.price);
        let price = parse_price(price_text)
            .ok_or_else(|| DataFormatError::BadPrice { row: n, value: s!(price_text) })?;

        let rating_text = field(cols.rating);
        let rating = parse_rating(rating_text)
            .ok_or_else(|| DataFormatError::BadRating { row: n, value: s!(rating_text) })?;

        let mut rec = BookRecord::new(field(cols.title).trim(), price, field(cols.availability).trim(), rating);
        if let Some(c) = cols.category {
            let cat = field(c).trim();
            if !cat.is_empty() {
                rec.category = Some(s!(cat));
            }
        }
        records.push(rec);
    }

    Dataset::new(records, fallback_category)
}

/// Load the dashboard dataset at `path`. Delimiter follows the extension;
/// rows without a category are grouped under the file's stem.
pub fn load_dataset(path: &Path) -> Result<Dataset, DataFormatError> {
    let file = File::open(path).map_err(|source| DataFormatError::Io { path: path.to_path_buf(), source })?;
    let fallback = label_from_file_stem(path);
    let ds = read_dataset(io::BufReader::new(file), ExportFormat::from_path(path), &fallback)?;
    info!(path = %path.display(), rows = ds.len(), categories = ds.categories().len(), "dataset loaded");
    Ok(ds)
}
