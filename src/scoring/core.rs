// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind keyword relevance.
//!
//! One term against one text field goes through four tiers, tried in order,
//! first hit wins:
//!
//! | Tier        | Score     | Trigger                                        |
//! |-------------|-----------|------------------------------------------------|
//! | Exact       | 1000      | field equals the term                          |
//! | Prefix      | 100       | field starts with the term                     |
//! | Word prefix | 10 / word | a whitespace-delimited word starts with the term |
//! | Substring   | 15        | term appears anywhere in the field             |
//!
//! All comparisons are case-insensitive. Tier dominance is procedural, not
//! numeric: a field that starts with the term returns 100 before the word
//! tier ever runs, so the word tier summing past 100 (11+ matching words)
//! can only happen for fields that did not start with the term.
//!
//! Matching stops at whitespace boundaries. A term never matches across
//! punctuation-split word parts ("c" scores "c++" via the word tier because
//! "c++" is one whitespace-delimited word starting with "c", but "script"
//! inside "javascript" is only ever a substring).
//!
//! # Per-course combination
//!
//! A query's comma-separated terms are scored per field and summed, then the
//! field totals are weighted and combined:
//!
//! | Field       | Weight | Why this value                                  |
//! |-------------|--------|-------------------------------------------------|
//! | Title       | 1.00   | the field people actually search for            |
//! | Instructor  | 0.90   | names are high-signal but rarely the whole query |
//! | Description | 0.75   | long prose, prone to incidental matches         |
//!
//! The weighted sum is multiplied by `10^(matching_terms - 1)`, so a course
//! matching two of the query's terms outranks any course matching one.

use crate::types::Course;

// =============================================================================
// TIER AND COMBINATION CONSTANTS
// =============================================================================

/// Tier 1: the whole field equals the term.
pub const EXACT_SCORE: u32 = 1000;

/// Tier 2: the field starts with the term.
pub const PREFIX_SCORE: u32 = 100;

/// Tier 3: per whitespace-delimited word that starts with the term.
pub const WORD_PREFIX_SCORE: u32 = 10;

/// Tier 4: the term appears somewhere inside the field.
pub const SUBSTRING_SCORE: u32 = 15;

/// Weight of the title field in the combined score.
pub const TITLE_WEIGHT: f64 = 1.0;

/// Weight of the description field in the combined score.
pub const DESCRIPTION_WEIGHT: f64 = 0.75;

/// Weight of the instructor field in the combined score.
pub const INSTRUCTOR_WEIGHT: f64 = 0.9;

/// Each additional matching term multiplies the combined score by this.
pub const MULTI_TERM_BASE: f64 = 10.0;

/// Score one term against one text field.
///
/// Tiers are tried top-down; the first that applies decides the score. A term
/// that matches nothing scores 0.
pub fn match_score(needle: &str, haystack: &str) -> u32 {
    let needle = needle.to_lowercase();
    let haystack = haystack.to_lowercase();

    if needle == haystack {
        return EXACT_SCORE;
    }

    if haystack.starts_with(&needle) {
        return PREFIX_SCORE;
    }

    let word_starts = haystack
        .split_whitespace()
        .filter(|word| word.starts_with(&needle))
        .count() as u32;
    if word_starts > 0 {
        return word_starts * WORD_PREFIX_SCORE;
    }

    if haystack.contains(&needle) {
        return SUBSTRING_SCORE;
    }

    0
}

/// Combine a query's terms into one relevance score for a course.
///
/// Per-field tier scores are summed across terms, weighted, then boosted by
/// `10^(matching_terms - 1)` where a term "matches" if it scored anywhere.
/// Returns 0 when no term matches any field, which the pipeline uses to drop
/// the course from keyword queries.
pub fn score_course(course: &Course, terms: &[&str]) -> f64 {
    let mut title_total = 0u32;
    let mut description_total = 0u32;
    let mut instructor_total = 0u32;
    let mut matching_terms = 0u32;

    for term in terms {
        let title = match_score(term, &course.title);
        let description = match_score(term, &course.description);
        let instructor = match_score(term, &course.instructor);
        if title > 0 || description > 0 || instructor > 0 {
            matching_terms += 1;
        }
        title_total += title;
        description_total += description;
        instructor_total += instructor;
    }

    if matching_terms == 0 {
        return 0.0;
    }

    let weighted = f64::from(title_total) * TITLE_WEIGHT
        + f64::from(description_total) * DESCRIPTION_WEIGHT
        + f64::from(instructor_total) * INSTRUCTOR_WEIGHT;
    weighted * MULTI_TERM_BASE.powi(matching_terms as i32 - 1)
}
