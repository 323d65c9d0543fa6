use std::collections::BTreeSet;

use super::model::Dataset;

/// Split a keyword cell into tags: comma-delimited, trimmed, empties dropped.
///
/// This is the only place tags are split; both vocabulary building and
/// per-record matching go through it.
pub fn split_tags(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Attach each record's tags and return the sorted, de-duplicated vocabulary.
///
/// When the schema has no `tag_column`, every record gets an empty tag list
/// and the vocabulary is empty.
pub fn extract_tags(dataset: &mut Dataset, tag_column: &str) -> Vec<String> {
    let Some(col) = dataset.schema.index_of(tag_column) else {
        for record in &mut dataset.records {
            record.set_tags(Vec::new());
        }
        return Vec::new();
    };

    let mut vocabulary: BTreeSet<String> = BTreeSet::new();
    for record in &mut dataset.records {
        let tags = split_tags(record.values().get(col).map(String::as_str).unwrap_or(""));
        vocabulary.extend(tags.iter().cloned());
        record.set_tags(tags);
    }
    // BTreeSet<String> iterates in byte order, which is case-sensitive.
    vocabulary.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{CsvTextSource, ResourceSource};

    #[test]
    fn split_trims_and_drops_empties() {
        assert_eq!(split_tags(" a ,b,, ,c "), vec!["a", "b", "c"]);
        assert!(split_tags("").is_empty());
        assert_eq!(split_tags("x, x"), vec!["x", "x"]);
    }

    #[test]
    fn vocabulary_is_sorted_case_sensitive() {
        let mut ds = CsvTextSource::new("Keywords\n\"b, a\"\n\"B, a\"\n")
            .load()
            .unwrap();
        let vocab = extract_tags(&mut ds, "Keywords");
        assert_eq!(vocab, vec!["B", "a", "b"]);
        assert_eq!(ds.records[0].tags(), ["b", "a"]);
    }

    #[test]
    fn missing_tag_column_yields_nothing() {
        let mut ds = CsvTextSource::new("Resource\nA\n").load().unwrap();
        assert!(extract_tags(&mut ds, "Keywords").is_empty());
        assert!(ds.records[0].tags().is_empty());
    }
}
