// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: the single authority on how result lists get sorted.
//!
//! Ordering is layered with stable sorts, so each pass only rearranges where
//! it has an opinion and ties keep the previous pass's order:
//!
//! 1. Results start in catalog order (normalized course number).
//! 2. A keyword query sorts by relevance, highest score first.
//! 3. An explicit sort criterion sorts by that key; equal keys keep the
//!    relevance (or catalog) order underneath.
//!
//! Each criterion has a fixed default direction and exactly one token that
//! reverses it: rating is high-first (reversed by `low`), hours short-first
//! (reversed by `long`), size small-first (reversed by `large`), number
//! low-first (reversed by `high`). Tokens restating the default, or aimed at
//! a different criterion, are accepted no-ops. Relevance is always
//! highest-first regardless of token.

use std::cmp::Reverse;

use crate::types::{Query, SearchResult, SortDirection, SortKey};
use crate::utils::normalize_course_number;

/// Apply a query's ordering to a result list built in catalog order.
pub fn order_results(results: &mut [SearchResult], query: &Query) {
    if query.has_keywords() {
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
    }

    let Some(key) = query.sort else {
        return;
    };
    let reversed = reverses_default(key, query.sort_direction);

    match key {
        SortKey::Relevance => {
            results.sort_by(|a, b| b.score.total_cmp(&a.score));
        }
        SortKey::Rating => {
            // Default: best-rated first.
            if reversed {
                results.sort_by(|a, b| a.course.rating.total_cmp(&b.course.rating));
            } else {
                results.sort_by(|a, b| b.course.rating.total_cmp(&a.course.rating));
            }
        }
        SortKey::Hours => {
            // Default: lightest workload first.
            if reversed {
                results.sort_by(|a, b| b.course.hours.total_cmp(&a.course.hours));
            } else {
                results.sort_by(|a, b| a.course.hours.total_cmp(&b.course.hours));
            }
        }
        SortKey::Size => {
            // Default: smallest class first.
            if reversed {
                results.sort_by(|a, b| b.course.size.total_cmp(&a.course.size));
            } else {
                results.sort_by(|a, b| a.course.size.total_cmp(&b.course.size));
            }
        }
        SortKey::Number => {
            // Default: catalog order, lowest number first.
            if reversed {
                results.sort_by_cached_key(|r| Reverse(normalize_course_number(&r.course.id)));
            } else {
                results.sort_by_cached_key(|r| normalize_course_number(&r.course.id));
            }
        }
    }
}

/// Whether this direction token reverses this criterion's default order.
fn reverses_default(key: SortKey, direction: Option<SortDirection>) -> bool {
    let Some(direction) = direction else {
        return false;
    };
    matches!(
        (key, direction),
        (SortKey::Rating, SortDirection::Low)
            | (SortKey::Hours, SortDirection::Long)
            | (SortKey::Size, SortDirection::Large)
            | (SortKey::Number, SortDirection::High)
    )
}
