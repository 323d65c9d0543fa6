use std::path::PathBuf;

use resource_db::data::params::sanitize_text;
use resource_db::{
    CsvFileSource, EngineConfig, QueryParams, QueryResult, ResourceQueryEngine, ResourceSource,
};

use crate::color::TagColors;

pub type DynEngine = ResourceQueryEngine<Box<dyn ResourceSource>>;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Engine for the current source; re-reads the file on every query.
    pub engine: DynEngine,

    /// The query currently shown.
    pub params: QueryParams,

    /// Text in the search box, applied on submit.
    pub search_input: String,

    /// Output of the last successful run (None after a load error).
    pub result: Option<QueryResult>,

    /// Colour per tag, rebuilt when the vocabulary changes.
    pub tag_colors: TagColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: EngineConfig) -> Self {
        let source: Box<dyn ResourceSource> =
            Box::new(CsvFileSource::new(config.source.clone()));
        Self::with_engine(ResourceQueryEngine::new(config, source))
    }

    pub fn with_engine(engine: DynEngine) -> Self {
        let mut state = Self {
            engine,
            params: QueryParams::default(),
            search_input: String::new(),
            result: None,
            tag_colors: TagColors::default(),
            status_message: None,
        };
        state.refresh();
        state
    }

    /// Switch to another CSV file and start from an empty query.
    pub fn open_source(&mut self, path: PathBuf) {
        let mut config = self.engine.config().clone();
        config.source = path.clone();
        let source: Box<dyn ResourceSource> = Box::new(CsvFileSource::new(path));
        self.engine = ResourceQueryEngine::new(config, source);
        self.reset();
    }

    /// Run the current query against a fresh read of the source.
    pub fn refresh(&mut self) {
        match self.engine.run(&self.params) {
            Ok(result) => {
                if !self.tag_colors.covers(&result.all_tags) {
                    self.tag_colors = TagColors::new(&result.all_tags);
                }
                // Keep the URL-style page in step with the clamped one.
                self.params.pg = Some(result.page.page_number as i64);
                self.result = Some(result);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load resources: {e}");
                self.result = None;
                self.status_message = Some(e.to_string());
            }
        }
    }

    pub fn submit_search(&mut self) {
        self.search_input = sanitize_text(&self.search_input);
        self.params.kw = self.search_input.clone();
        self.params.pg = None;
        self.refresh();
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.params = self.params.toggle_tag(tag);
        self.refresh();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.params = self.params.with_page(page);
        self.refresh();
    }

    /// Clear text and tags, back to page 1.
    pub fn reset(&mut self) {
        self.params = QueryParams::reset();
        self.search_input.clear();
        self.tag_colors = TagColors::default();
        self.refresh();
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.params.tags.iter().any(|t| t == tag)
    }
}
