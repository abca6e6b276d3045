// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory course catalog search: facet filters, tiered keyword relevance,
//! match highlighting, and multi-criterion ordering.
//!
//! The catalog (a few thousand course records) is normalized once at startup
//! and read-only from then on. Each query runs the same four-stage pipeline
//! to completion and returns a full, ordered result list.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐      ┌─────────────┐      ┌────────────────────────────┐
//! │ catalog.rs │─────▶│  engine.rs  │─────▶│         worker.rs          │
//! │ (normalize │      │ (Engine::   │      │ (SearchWorker/SearchClient │
//! │  snapshot) │      │  execute)   │      │  request/reply channels)   │
//! └────────────┘      └─────────────┘      └────────────────────────────┘
//!                            │
//!              ┌─────────────┼──────────────┬─────────────┐
//!              ▼             ▼              ▼             ▼
//!        ┌──────────┐ ┌────────────┐ ┌──────────────┐ ┌─────────┐
//!        │filter.rs │ │ scoring/   │ │ highlight.rs │ │utils.rs │
//!        │ (facets) │ │(tiers+sort)│ │  (<mark>)    │ │(numbers)│
//!        └──────────┘ └────────────┘ └──────────────┘ └─────────┘
//! ```
//!
//! # Pipeline
//!
//! 1. Facet filter: every present constraint must pass (AND).
//! 2. Keyword score: tiered per-field matching; zero-score courses drop out
//!    when the query carries keywords.
//! 3. Highlight: every matched keyword and the first matching number prefix
//!    get `<mark>` markers.
//! 4. Order: relevance first for keyword queries, then any explicit sort
//!    criterion, all with stable sorts.
//!
//! # Usage
//!
//! ```
//! use coursepick::{Catalog, Engine, Query};
//!
//! # fn main() -> Result<(), coursepick::CatalogError> {
//! let catalog = Catalog::from_json_str(r#"{
//!     "lastUpdated": "2025-08-20T04:00:00Z",
//!     "classes": {
//!         "6.002": {"name": "Circuits", "number": "6.002", "terms": ["FA"]}
//!     }
//! }"#)?;
//!
//! let engine = Engine::new(catalog);
//! let response = engine.execute(&Query {
//!     keywords: Some("circuit".to_string()),
//!     ..Query::default()
//! });
//! assert_eq!(response.results[0].course.id, "6.002");
//! assert_eq!(response.results[0].highlights.title, "<mark>Circuit</mark>s");
//! # Ok(())
//! # }
//! ```
//!
//! To run queries off the caller's thread, spawn a [`SearchWorker`]; every
//! request carries its own reply channel and gets exactly one reply.

// Module declarations
pub mod catalog;
pub mod engine;
pub mod filter;
pub mod highlight;
mod scoring;
pub mod testing;
pub mod types;
mod utils;
pub mod worker;

// Re-exports for the public API
pub use catalog::{Catalog, CatalogError, RawCatalog, RawCourse};
pub use engine::Engine;
pub use filter::Filter;
pub use highlight::Highlighter;
pub use scoring::ranking::order_results;
pub use scoring::{
    match_score, score_course, DESCRIPTION_WEIGHT, EXACT_SCORE, INSTRUCTOR_WEIGHT,
    MULTI_TERM_BASE, PREFIX_SCORE, SUBSTRING_SCORE, TITLE_WEIGHT, WORD_PREFIX_SCORE,
};
pub use types::{
    Course, Highlights, Level, Query, SearchResponse, SearchResult, SortDirection, SortKey, Term,
};
pub use utils::normalize_course_number;
pub use worker::{SearchClient, SearchRequest, SearchWorker, WorkerError};
