// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test fixtures to avoid duplication.

#![doc(hidden)]

use crate::catalog::Catalog;
use crate::types::{Course, Highlights, SearchResult, Term};

/// Freshness timestamp used by every fixture catalog.
pub const FIXTURE_TIMESTAMP: &str = "2025-08-20T04:00:00Z";

/// Create a minimal course offered in the fall, with no prerequisite, no
/// evaluation data, and no units.
///
/// This is the canonical fixture used across all tests; override fields as
/// needed.
pub fn make_course(id: &str, title: &str) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        instructor: String::new(),
        terms: vec![Term::Fall],
        level: None,
        prereq: String::new(),
        units: [0.0, 0.0, 0.0],
        hours: 0.0,
        rating: 0.0,
        size: 0.0,
        half_term: false,
        final_exam: false,
    }
}

/// Create a catalog from fixture courses with the fixture timestamp.
pub fn make_catalog(courses: Vec<Course>) -> Catalog {
    Catalog::new(courses, FIXTURE_TIMESTAMP)
}

/// Create a search result with pass-through highlights, for ordering tests.
pub fn make_result(id: &str, score: f64) -> SearchResult {
    let course = make_course(id, &format!("Course {id}"));
    let highlights = Highlights {
        id: course.id.clone(),
        title: course.title.clone(),
        description: course.description.clone(),
        instructor: course.instructor.clone(),
    };
    SearchResult {
        course,
        score,
        highlights,
    }
}
