use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use url::form_urlencoded;

use super::filter::Query;

pub const PARAM_KEYWORDS: &str = "kw";
pub const PARAM_TAGS: &str = "tags";
pub const PARAM_PAGE: &str = "pg";

// ---------------------------------------------------------------------------
// QueryParams – the URL-facing form of a query
// ---------------------------------------------------------------------------

/// Request parameters as they arrive from a page URL.
///
/// `kw` is free text, `tags` / `tags[]` may repeat, `pg` is the 1-based page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryParams {
    pub kw: String,
    pub tags: Vec<String>,
    pub pg: Option<i64>,
}

impl QueryParams {
    /// Decode and sanitize a query string such as `kw=food&tags[]=crisis&pg=2`.
    /// A leading `?` is ignored, as are unknown keys.
    pub fn from_query_string(qs: &str) -> Self {
        let qs = qs.strip_prefix('?').unwrap_or(qs);
        let mut params = QueryParams::default();

        for (key, value) in form_urlencoded::parse(qs.as_bytes()) {
            match key.as_ref() {
                PARAM_KEYWORDS => params.kw = sanitize_text(&value),
                k if k == PARAM_TAGS || k == "tags[]" => {
                    let tag = sanitize_text(&value);
                    if !tag.is_empty() && !params.tags.contains(&tag) {
                        params.tags.push(tag);
                    }
                }
                PARAM_PAGE => params.pg = value.trim().parse().ok(),
                _ => {}
            }
        }
        params
    }

    /// Encode back into a query string. Empty values are left out.
    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        if !self.kw.is_empty() {
            out.append_pair(PARAM_KEYWORDS, &self.kw);
        }
        for tag in &self.tags {
            out.append_pair("tags[]", tag);
        }
        if let Some(pg) = self.pg {
            out.append_pair(PARAM_PAGE, &pg.to_string());
        }
        out.finish()
    }

    /// Requested page, defaulting to the first.
    pub fn page(&self) -> i64 {
        self.pg.unwrap_or(1)
    }

    pub fn query(&self) -> Query {
        Query::new(self.kw.clone()).with_tags(self.tags.iter().cloned())
    }

    /// Same filters, different page.
    pub fn with_page(&self, page: usize) -> Self {
        QueryParams {
            pg: Some(i64::try_from(page).unwrap_or(i64::MAX)),
            ..self.clone()
        }
    }

    /// Add `tag` if absent, remove it otherwise. Goes back to page 1.
    pub fn toggle_tag(&self, tag: &str) -> Self {
        let mut next = self.clone();
        if let Some(pos) = next.tags.iter().position(|t| t == tag) {
            next.tags.remove(pos);
        } else {
            next.tags.push(tag.to_string());
        }
        next.pg = None;
        next
    }

    /// No text, no tags, first page.
    pub fn reset() -> Self {
        QueryParams::default()
    }
}

// ---------------------------------------------------------------------------
// Sanitizing
// ---------------------------------------------------------------------------

fn html_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)</?[A-Za-z!][^>]*>").expect("valid regex"))
}

fn stray_octet() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"%[0-9A-Fa-f]{2}").expect("valid regex"))
}

/// Reduce user input to a single line of plain text: markup tags and
/// leftover percent-encoded octets are removed (a `<` that opens no tag is
/// kept), whitespace runs collapse to one
/// space, and the ends are trimmed.
pub fn sanitize_text(input: &str) -> String {
    let text = html_tag().replace_all(input, "");
    let text = stray_octet().replace_all(&text, "");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
