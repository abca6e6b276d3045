// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog loading and normalization.
//!
//! A catalog snapshot arrives as one JSON object: a `classes` map keyed by
//! course number plus a `lastUpdated` timestamp. This module decodes the
//! snapshot, normalizes each record into a [`Course`], and freezes the result
//! into a [`Catalog`] ordered by normalized course number so every downstream
//! stage sees the same deterministic sequence.
//!
//! Decoding is tolerant: only `name` and `number` are required per record.
//! Records without a usable course number are dropped (with a log line), not
//! fatal; unknown term tokens are dropped the same way. A snapshot that
//! decodes to zero courses is a valid, empty catalog.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{Course, Level, Term};
use crate::utils::normalize_course_number;

/// Errors from loading a catalog snapshot.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON")]
    Parse(#[from] serde_json::Error),
}

/// Wire shape of a catalog snapshot. `termInfo` and other extra fields are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCatalog {
    #[serde(default)]
    pub last_updated: String,
    pub classes: HashMap<String, RawCourse>,
}

/// Wire shape of one catalog record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCourse {
    pub name: String,
    pub number: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub terms: Vec<String>,
    #[serde(default)]
    pub prereqs: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub in_charge: String,
    #[serde(default)]
    pub lecture_units: f32,
    #[serde(default)]
    pub lab_units: f32,
    #[serde(default)]
    pub preparation_units: f32,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub hours: f32,
    #[serde(default)]
    pub size: f32,
    #[serde(default)]
    pub half: bool,
    #[serde(rename = "final", default)]
    pub final_exam: bool,
}

/// An immutable, normalized course catalog.
///
/// Courses are held sorted by normalized course number. That order is the
/// "default order" of every query without keywords or an explicit sort.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    last_updated: String,
}

impl Catalog {
    /// Build a catalog from already-normalized courses. Sorts by normalized
    /// course number, raw id breaking ties, and drops duplicate ids, keeping
    /// the first record.
    pub fn new(mut courses: Vec<Course>, last_updated: impl Into<String>) -> Self {
        // Distinct ids can normalize identically ("6.12" and "6.012" both
        // pad to "0006.0012"), so the raw id is part of the key; otherwise
        // tie order would track snapshot map iteration order.
        courses
            .sort_by_cached_key(|course| (normalize_course_number(&course.id), course.id.clone()));
        courses.dedup_by(|dropped, kept| {
            let duplicate = kept.id.eq_ignore_ascii_case(&dropped.id);
            if duplicate {
                warn!(id = %dropped.id, "duplicate course id in catalog, keeping first record");
            }
            duplicate
        });
        Catalog {
            courses,
            last_updated: last_updated.into(),
        }
    }

    /// Normalize a decoded snapshot into a catalog.
    pub fn from_raw(raw: RawCatalog) -> Self {
        let mut courses = Vec::with_capacity(raw.classes.len());
        let mut dropped = 0usize;
        for (key, record) in raw.classes {
            match normalize_record(&key, record) {
                Some(course) => courses.push(course),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            warn!(dropped, "dropped catalog records with no course number");
        }
        debug!(count = courses.len(), "catalog normalized");
        Self::new(courses, raw.last_updated)
    }

    /// Decode and normalize a snapshot from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Read, decode, and normalize a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// All courses, in normalized-course-number order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Look up a course by its number, case-insensitively.
    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses
            .iter()
            .find(|course| course.id.eq_ignore_ascii_case(id))
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// The snapshot's freshness timestamp, passed through unmodified.
    pub fn last_updated(&self) -> &str {
        &self.last_updated
    }
}

fn normalize_record(key: &str, record: RawCourse) -> Option<Course> {
    let id = record.number.trim();
    if id.is_empty() {
        debug!(key, "catalog record has no course number");
        return None;
    }

    let mut terms = Vec::with_capacity(record.terms.len());
    for token in &record.terms {
        match Term::parse_token(token) {
            Some(term) => terms.push(term),
            None => debug!(id, token, "unknown term token in catalog record"),
        }
    }

    Some(Course {
        id: id.to_string(),
        title: record.name.trim().to_string(),
        description: record.description.trim().to_string(),
        instructor: record.in_charge.trim().to_string(),
        terms,
        level: Level::parse_token(&record.level),
        prereq: record.prereqs.trim().to_string(),
        units: [
            record.lecture_units.max(0.0),
            record.lab_units.max(0.0),
            record.preparation_units.max(0.0),
        ],
        hours: record.hours.max(0.0),
        rating: record.rating.max(0.0),
        size: record.size.max(0.0),
        half_term: record.half,
        final_exam: record.final_exam,
    })
}
