//! Data layer: core types, loading, tagging, filtering, paging.
//!
//! Architecture:
//! ```text
//!  resources.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Dataset (Schema + Vec<Record>)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │   tags    │  split Keywords → per-record tags + vocabulary
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  text terms AND selected tags → matching records
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ paginate  │  clamp page, slice → Page
//!   └──────────┘
//! ```
//!
//! `params` turns a URL query string into the filter/page inputs.

pub mod filter;
pub mod loader;
pub mod model;
pub mod paginate;
pub mod params;
pub mod tags;
