// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match highlighting: wrap matched text in `<mark>` markers for display.
//!
//! Keyword terms are applied one at a time, in the order given, each wrapping
//! every case-insensitive occurrence in the field. A later term can match
//! inside text an earlier term already wrapped (including inside the marker
//! tags themselves); the resulting nested markers are accepted behavior and
//! are not deduplicated.
//!
//! Course-number prefixes behave differently: only the first prefix in list
//! order that the id starts with gets wrapped, anchored to the start, and the
//! rest of the list is never tried.
//!
//! Terms are regex-escaped before matching, so `c++` or `6.00(1)` match as
//! literal text. The match keeps the field's original casing; only markers
//! are inserted.

use std::borrow::Cow;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::types::{Course, Highlights, Query};

const MARK: &str = "<mark>${0}</mark>";

/// A query's highlight patterns, compiled once and applied per course.
#[derive(Debug, Clone)]
pub struct Highlighter {
    keyword_patterns: Vec<Regex>,
    prefix_patterns: Vec<Regex>,
}

impl Highlighter {
    /// Compile patterns for a query's keyword terms and number prefixes.
    ///
    /// Escaped literals compile for any sane input; a term that still fails
    /// (pathological length) is skipped with a log line rather than failing
    /// the query.
    pub fn compile(query: &Query) -> Highlighter {
        let keyword_patterns = query
            .keyword_terms()
            .into_iter()
            .filter_map(|term| build_pattern(&regex::escape(term), term))
            .collect();
        let prefix_patterns = query
            .number_prefixes()
            .into_iter()
            .filter_map(|prefix| build_pattern(&format!("^{}", regex::escape(prefix)), prefix))
            .collect();
        Highlighter {
            keyword_patterns,
            prefix_patterns,
        }
    }

    /// Annotate every text field of a course.
    pub fn annotate(&self, course: &Course) -> Highlights {
        Highlights {
            id: self.annotate_id(&course.id),
            title: self.annotate_text(&course.title),
            description: self.annotate_text(&course.description),
            instructor: self.annotate_text(&course.instructor),
        }
    }

    /// Wrap every occurrence of every keyword term, sequentially per term.
    pub fn annotate_text(&self, text: &str) -> String {
        let mut marked = text.to_string();
        for pattern in &self.keyword_patterns {
            if let Cow::Owned(next) = pattern.replace_all(&marked, MARK) {
                marked = next;
            }
        }
        marked
    }

    /// Wrap the first number prefix the id starts with, if any.
    pub fn annotate_id(&self, id: &str) -> String {
        for pattern in &self.prefix_patterns {
            // Anchored pattern: a match is a match at the start.
            if let Cow::Owned(marked) = pattern.replace(id, MARK) {
                return marked;
            }
        }
        id.to_string()
    }
}

fn build_pattern(pattern: &str, term: &str) -> Option<Regex> {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(regex) => Some(regex),
        Err(error) => {
            debug!(term, %error, "skipping unmatchable highlight term");
            None
        }
    }
}
