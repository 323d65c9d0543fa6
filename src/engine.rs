use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::config::EngineConfig;
use crate::data::filter::filter;
use crate::data::loader::{CsvFileSource, ResourceSource};
use crate::data::model::{Dataset, Record, Schema};
use crate::data::paginate::{paginate, Page, PageLinks, DEFAULT_LINK_WINDOW};
use crate::data::params::QueryParams;
use crate::data::tags::extract_tags;
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// QueryResult – everything a renderer needs for one request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct QueryResult {
    pub schema: Schema,
    pub page: Page<Record>,
    /// Vocabulary of the whole dataset, not just the matches.
    pub all_tags: Vec<String>,
    pub total_before_filter: usize,
    pub total_after_filter: usize,
}

impl QueryResult {
    pub fn is_filtered(&self) -> bool {
        self.total_after_filter != self.total_before_filter
    }

    /// One-line result count for display.
    pub fn summary(&self) -> String {
        if self.is_filtered() {
            format!("Showing {} filtered resources", self.total_after_filter)
        } else {
            format!("Showing all {} resources", self.total_after_filter)
        }
    }

    pub fn links(&self) -> PageLinks {
        self.page.links(DEFAULT_LINK_WINDOW)
    }
}

impl Serialize for QueryResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let items: Vec<_> = self.page.items.iter().map(|r| r.keyed(&self.schema)).collect();
        let mut s = serializer.serialize_struct("QueryResult", 10)?;
        s.serialize_field("columns", &self.schema)?;
        s.serialize_field("items", &items)?;
        s.serialize_field("page_number", &self.page.page_number)?;
        s.serialize_field("page_size", &self.page.page_size)?;
        s.serialize_field("total_pages", &self.page.total_pages)?;
        s.serialize_field("all_tags", &self.all_tags)?;
        s.serialize_field("total_before_filter", &self.total_before_filter)?;
        s.serialize_field("total_after_filter", &self.total_after_filter)?;
        s.serialize_field("summary", &self.summary())?;
        s.serialize_field("links", &self.links())?;
        s.end()
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Runs load → tag → filter → paginate for one request.
///
/// Holds no dataset between calls; every [`run`](Self::run) re-reads the
/// source.
pub struct ResourceQueryEngine<S = CsvFileSource> {
    config: EngineConfig,
    source: S,
}

impl ResourceQueryEngine<CsvFileSource> {
    /// Engine reading the CSV file named in `config.source`.
    pub fn from_config(config: EngineConfig) -> Self {
        let source = CsvFileSource::new(config.source.clone());
        Self::new(config, source)
    }
}

impl<S: ResourceSource> ResourceQueryEngine<S> {
    pub fn new(config: EngineConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Vocabulary only, for callers that just draw the tag picker.
    pub fn tags(&self) -> Result<Vec<String>, LoadError> {
        let mut dataset = self.load()?;
        Ok(extract_tags(&mut dataset, &self.config.tag_column))
    }

    fn load(&self) -> Result<Dataset, LoadError> {
        self.source
            .load()
            .inspect_err(|e| log::warn!("{}: {e}", self.source.origin().display()))
    }

    pub fn run(&self, params: &QueryParams) -> Result<QueryResult, LoadError> {
        let mut dataset = self.load()?;
        let all_tags = extract_tags(&mut dataset, &self.config.tag_column);

        let query = params.query();
        let matches = filter(&dataset.records, &query);
        let total_after_filter = matches.len();

        let page = paginate(&matches, params.page(), self.config.page_size).map(Record::clone);
        log::debug!(
            "{}: query {:?}: {} of {} resources match, page {}/{}",
            self.source.origin().display(),
            params.to_query_string(),
            total_after_filter,
            dataset.len(),
            page.page_number,
            page.total_pages
        );

        Ok(QueryResult {
            schema: dataset.schema,
            page,
            all_tags,
            total_before_filter: dataset.records.len(),
            total_after_filter,
        })
    }
}
