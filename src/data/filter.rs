use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::model::Record;

// ---------------------------------------------------------------------------
// Query – free text plus selected tags
// ---------------------------------------------------------------------------

/// What the caller is looking for. An empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub search_text: String,
    pub selected_tags: BTreeSet<String>,
}

impl Query {
    pub fn new(search_text: impl Into<String>) -> Self {
        Query {
            search_text: search_text.into(),
            selected_tags: BTreeSet::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Lower-cased, whitespace-separated search terms.
    pub fn terms(&self) -> Vec<String> {
        self.search_text
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Every term occurs, case-insensitively, in the record's joined values.
/// `terms` must already be lower-cased.
pub fn matches_text(record: &Record, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }
    let haystack = record.haystack().to_lowercase();
    terms.iter().all(|t| haystack.contains(t.as_str()))
}

/// The record carries every selected tag.
pub fn matches_tags(record: &Record, selected: &BTreeSet<String>) -> bool {
    if selected.is_empty() {
        return true;
    }
    let present = selected.iter().filter(|t| record.has_tag(t)).count();
    present == selected.len()
}

/// Return the records passing both predicates, in their original order.
pub fn filter<'a>(records: &'a [Record], query: &Query) -> Vec<&'a Record> {
    let terms = query.terms();
    records
        .iter()
        .filter(|r| matches_text(r, &terms) && matches_tags(r, &query.selected_tags))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(values: &[&str], tags: &[&str]) -> Record {
        let mut r = Record::new(values.iter().map(|s| s.to_string()).collect());
        r.set_tags(tags.iter().map(|s| s.to_string()).collect());
        r
    }

    #[test]
    fn text_terms_are_anded_and_case_insensitive() {
        let r = rec(&["Food Bank", "555", "Free MEALS daily"], &[]);
        assert!(matches_text(&r, &Query::new("meals food").terms()));
        assert!(!matches_text(&r, &Query::new("meals shelter").terms()));
        assert!(matches_text(&r, &Query::new("   ").terms()));
    }

    #[test]
    fn text_searches_every_column() {
        let r = rec(&["Hotline", "555-2222", "desc"], &[]);
        assert!(matches_text(&r, &Query::new("2222").terms()));
        assert!(!matches_text(&r, &Query::new("3333").terms()));
    }

    #[test]
    fn tags_require_superset() {
        let r = rec(&["x"], &["food", "shelter", "food"]);
        assert!(matches_tags(&r, &Query::default().selected_tags));
        assert!(matches_tags(&r, &Query::default().with_tags(["food"]).selected_tags));
        assert!(matches_tags(
            &r,
            &Query::default().with_tags(["food", "shelter"]).selected_tags
        ));
        assert!(!matches_tags(
            &r,
            &Query::default().with_tags(["food", "crisis"]).selected_tags
        ));
    }

    #[test]
    fn filter_preserves_order() {
        let records = vec![
            rec(&["b shelter"], &[]),
            rec(&["a"], &[]),
            rec(&["c shelter"], &[]),
        ];
        let out = filter(&records, &Query::new("shelter"));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].values()[0], "b shelter");
        assert_eq!(out[1].values()[0], "c shelter");
    }
}
