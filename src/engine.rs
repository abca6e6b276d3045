// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query pipeline: filter, score, annotate, sort, reply.
//!
//! An [`Engine`] owns one normalized [`Catalog`] and executes queries against
//! it, one at a time, each to completion. The pipeline is strictly
//! sequential with no partial output:
//!
//! 1. Compile the query's filter and highlight patterns.
//! 2. Walk the catalog in its deterministic order, keeping courses that pass
//!    every constraint.
//! 3. With keywords present, score each survivor and drop the zero-scorers.
//! 4. Attach `<mark>` annotations for every kept course.
//! 5. Order the list (relevance, then any explicit criterion).
//!
//! The reply carries the full ordered list plus the catalog's freshness
//! timestamp. The engine holds no other state, so executing the same query
//! twice yields identical responses.

use tracing::debug;

use crate::catalog::Catalog;
use crate::filter::Filter;
use crate::highlight::Highlighter;
use crate::scoring::ranking::order_results;
use crate::scoring::score_course;
use crate::types::{Query, SearchResponse, SearchResult};

/// A catalog plus the means to query it.
///
/// Construct one per catalog snapshot and share it read-only; there is no
/// global instance.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Catalog,
}

impl Engine {
    pub fn new(catalog: Catalog) -> Engine {
        Engine { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run one query to completion and build its reply.
    pub fn execute(&self, query: &Query) -> SearchResponse {
        let filter = Filter::compile(query);
        let highlighter = Highlighter::compile(query);
        let terms = query.keyword_terms();
        let keyword_query = !terms.is_empty();

        let mut results = Vec::new();
        for course in self.catalog.courses() {
            if !filter.matches(course) {
                continue;
            }
            let score = if keyword_query {
                let score = score_course(course, &terms);
                if score == 0.0 {
                    continue;
                }
                score
            } else {
                0.0
            };
            results.push(SearchResult {
                course: course.clone(),
                score,
                highlights: highlighter.annotate(course),
            });
        }

        order_results(&mut results, query);
        debug!(matched = results.len(), "query executed");

        SearchResponse {
            results,
            last_updated: self.catalog.last_updated().to_string(),
        }
    }
}
