use std::collections::HashMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Conventional column names of a resource sheet.
pub const COL_RESOURCE: &str = "Resource";
pub const COL_PHONE: &str = "PhoneNumber";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_KEYWORDS: &str = "Keywords";
pub const COL_WEBSITE: &str = "Website";

pub const CONVENTIONAL_COLUMNS: [&str; 5] = [
    COL_RESOURCE,
    COL_PHONE,
    COL_DESCRIPTION,
    COL_KEYWORDS,
    COL_WEBSITE,
];

// ---------------------------------------------------------------------------
// Schema – the header row, fixed once at load time
// ---------------------------------------------------------------------------

/// Ordered column names plus a name → index lookup.
///
/// Duplicate names keep their position in `columns`, but lookups by name
/// resolve to the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
    index: HashMap<String, usize>,
}

impl Schema {
    pub fn new(columns: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            index.entry(name.clone()).or_insert(i);
        }
        Schema { columns, index }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Names that appear more than once in the header.
    pub fn duplicate_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(i, name)| self.index.get(name.as_str()) != Some(i))
            .map(|(_, name)| name.as_str())
            .collect()
    }

    /// Conventional columns this header lacks.
    pub fn missing_conventional(&self) -> Vec<&'static str> {
        CONVENTIONAL_COLUMNS
            .iter()
            .copied()
            .filter(|c| self.index_of(c).is_none())
            .collect()
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.columns.serialize(serializer)
    }
}

// ---------------------------------------------------------------------------
// Record – one data row
// ---------------------------------------------------------------------------

/// A single data row. `values` lines up with the schema columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Vec<String>,
    /// Tags split from the tag column, in source order (may repeat).
    tags: Vec<String>,
}

impl Record {
    pub fn new(values: Vec<String>) -> Self {
        Record {
            values,
            tags: Vec::new(),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub(crate) fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = tags;
    }

    /// Value of `column`, or `""` when the schema has no such column.
    pub fn get<'a>(&'a self, schema: &Schema, column: &str) -> &'a str {
        schema
            .index_of(column)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// All values joined by a single space, in header order.
    pub fn haystack(&self) -> String {
        self.values.join(" ")
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Pair this record with its schema for keyed serialization.
    pub fn keyed<'a>(&'a self, schema: &'a Schema) -> KeyedRecord<'a> {
        KeyedRecord {
            schema,
            record: self,
        }
    }
}

/// Serializes a record as `{ column: value, ..., "tags": [...] }`.
pub struct KeyedRecord<'a> {
    schema: &'a Schema,
    record: &'a Record,
}

impl Serialize for KeyedRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.schema.len() + 1))?;
        for (i, name) in self.schema.columns().iter().enumerate() {
            // Later duplicates would overwrite the first in most JSON readers.
            if self.schema.index_of(name) != Some(i) {
                continue;
            }
            let value = self.record.values.get(i).map(String::as_str).unwrap_or("");
            map.serialize_entry(name, value)?;
        }
        map.serialize_entry("tags", &self.record.tags)?;
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded sheet
// ---------------------------------------------------------------------------

/// Rows the loader dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub comment_rows: usize,
    pub mismatched_rows: usize,
}

/// The parsed sheet: header, surviving rows, and skip counters.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub schema: Schema,
    pub records: Vec<Record>,
    pub stats: LoadStats,
}

impl Dataset {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
