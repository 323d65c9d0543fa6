use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ByteRecord, ReaderBuilder};
use log::{debug, info, warn};

use super::model::{Dataset, LoadStats, Record, Schema};
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Something the engine can read a resource sheet from.
pub trait ResourceSource {
    /// Read and parse the whole sheet. Called once per request.
    fn load(&self) -> Result<Dataset, LoadError>;

    /// Human-readable origin for logs.
    fn origin(&self) -> &Path;
}

impl<T: ResourceSource + ?Sized> ResourceSource for Box<T> {
    fn load(&self) -> Result<Dataset, LoadError> {
        (**self).load()
    }

    fn origin(&self) -> &Path {
        (**self).origin()
    }
}

/// A CSV file on disk, reopened on every load.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvFileSource { path: path.into() }
    }
}

impl ResourceSource for CsvFileSource {
    fn load(&self) -> Result<Dataset, LoadError> {
        let file = File::open(&self.path).map_err(|source| LoadError::SourceUnavailable {
            path: self.path.clone(),
            source,
        })?;
        // `file` is dropped when `load_csv` returns, on success or failure.
        load_csv(BufReader::new(file), self.origin())
    }

    fn origin(&self) -> &Path {
        &self.path
    }
}

/// CSV text held in memory.
#[derive(Debug, Clone)]
pub struct CsvTextSource {
    text: String,
    origin: PathBuf,
}

impl CsvTextSource {
    pub fn new(text: impl Into<String>) -> Self {
        CsvTextSource {
            text: text.into(),
            origin: PathBuf::from("<memory>"),
        }
    }
}

impl ResourceSource for CsvTextSource {
    fn load(&self) -> Result<Dataset, LoadError> {
        load_csv(self.text.as_bytes(), self.origin())
    }

    fn origin(&self) -> &Path {
        &self.origin
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse a resource sheet.
///
/// The first row is the header. A data row is dropped when its first cell
/// starts with `#` (comment) or when its cell count differs from the
/// header's. Both kinds of drop are counted in [`LoadStats`] and logged at
/// debug level only.
pub fn load_csv<R: Read>(reader: R, origin: &Path) -> Result<Dataset, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = reader.byte_records();

    let header = match rows.next() {
        Some(row) => row.map_err(|e| classify(e, origin))?,
        None => return Err(LoadError::MalformedHeader),
    };
    let schema = parse_header(&header)?;

    for dup in schema.duplicate_columns() {
        warn!("{}: duplicate column '{dup}', using the first one", origin.display());
    }
    let missing = schema.missing_conventional();
    if !missing.is_empty() {
        debug!("{}: no {missing:?} column(s), reading them as empty", origin.display());
    }

    let mut records = Vec::new();
    let mut stats = LoadStats::default();

    for row in rows {
        let row = row.map_err(|e| classify(e, origin))?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        if is_comment(&row) {
            stats.comment_rows += 1;
            debug!("{}:{line}: skipping comment row", origin.display());
            continue;
        }
        if row.len() != schema.len() {
            stats.mismatched_rows += 1;
            debug!(
                "{}:{line}: skipping row with {} cells, header has {}",
                origin.display(),
                row.len(),
                schema.len()
            );
            continue;
        }

        records.push(Record::new(row.iter().map(|c| lossy(c).into_owned()).collect()));
    }

    if stats.comment_rows + stats.mismatched_rows > 0 {
        debug!(
            "{}: skipped {} comment row(s) and {} malformed row(s)",
            origin.display(),
            stats.comment_rows,
            stats.mismatched_rows
        );
    }
    info!(
        "Loaded {} resources from {} with columns {:?}",
        records.len(),
        origin.display(),
        schema.columns()
    );

    Ok(Dataset {
        schema,
        records,
        stats,
    })
}

fn parse_header(header: &ByteRecord) -> Result<Schema, LoadError> {
    let columns: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let name = lossy(cell);
            let name = if i == 0 {
                name.trim_start_matches('\u{feff}')
            } else {
                name.as_ref()
            };
            name.trim().to_string()
        })
        .collect();

    if columns.iter().all(|c| c.is_empty()) {
        return Err(LoadError::MalformedHeader);
    }
    Ok(Schema::new(columns))
}

fn is_comment(row: &ByteRecord) -> bool {
    row.get(0).is_some_and(|cell| cell.starts_with(b"#"))
}

fn lossy(cell: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(cell)
}

fn classify(err: csv::Error, origin: &Path) -> LoadError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::SourceUnavailable {
            path: origin.to_path_buf(),
            source,
        },
        _ => LoadError::Parse(message),
    }
}
