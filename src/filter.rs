// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facet filtering: which courses survive a query's constraints.
//!
//! Every constraint is conjunctive. A course must pass the term intersection,
//! the level check, the boolean flags, every numeric range, and the
//! course-number prefix check to stay in the running. Absent fields never
//! reject anything, so the empty query passes the whole catalog through.
//!
//! A [`Filter`] is compiled once per query and then applied per course, so the
//! per-course path allocates only when a prefix constraint needs a lowercased
//! course id.

use crate::types::{Course, Level, Query, Term};

/// Inclusive numeric bounds. Absent min behaves as 0, absent max as +∞.
#[derive(Debug, Clone, Copy, Default)]
struct Bounds {
    min: Option<f32>,
    max: Option<f32>,
}

impl Bounds {
    fn new(min: Option<f32>, max: Option<f32>) -> Bounds {
        Bounds { min, max }
    }

    fn contains(self, value: f32) -> bool {
        value >= self.min.unwrap_or(0.0) && self.max.is_none_or(|max| value <= max)
    }

    /// Range check for a unit component. `max == 0` is the "none of this
    /// component" request and degenerates to an exact-zero test; the min is
    /// ignored in that case because any positive min would make the range
    /// unsatisfiable.
    fn contains_component(self, value: f32) -> bool {
        if self.max == Some(0.0) {
            return value == 0.0;
        }
        self.contains(value)
    }
}

/// A query's constraints, compiled for repeated per-course evaluation.
#[derive(Debug, Clone)]
pub struct Filter {
    terms: Option<Vec<Term>>,
    level: Option<Level>,
    half_term: bool,
    no_prereq: bool,
    no_final: bool,
    require_eval: bool,
    units: Bounds,
    lecture_units: Bounds,
    lab_units: Bounds,
    prep_units: Bounds,
    hours: Bounds,
    size: Bounds,
    rating: Bounds,
    prefixes: Vec<String>,
}

impl Filter {
    /// Compile a query's constraints. An empty term list or blank prefix
    /// string is treated as "constraint absent".
    pub fn compile(query: &Query) -> Filter {
        Filter {
            terms: query
                .terms
                .as_ref()
                .filter(|terms| !terms.is_empty())
                .cloned(),
            level: query.level,
            half_term: query.half_term,
            no_prereq: query.no_prereq,
            no_final: query.no_final,
            require_eval: query.require_eval,
            units: Bounds::new(query.min_units, query.max_units),
            lecture_units: Bounds::new(query.min_lecture_units, query.max_lecture_units),
            lab_units: Bounds::new(query.min_lab_units, query.max_lab_units),
            prep_units: Bounds::new(query.min_prep_units, query.max_prep_units),
            hours: Bounds::new(query.min_hours, query.max_hours),
            size: Bounds::new(query.min_size, query.max_size),
            rating: Bounds::new(query.min_rating, query.max_rating),
            prefixes: query
                .number_prefixes()
                .iter()
                .map(|prefix| prefix.to_lowercase())
                .collect(),
        }
    }

    /// Does this course satisfy every active constraint?
    pub fn matches(&self, course: &Course) -> bool {
        if let Some(terms) = &self.terms {
            if !course.terms.iter().any(|term| terms.contains(term)) {
                return false;
            }
        }
        if let Some(level) = self.level {
            if course.level != Some(level) {
                return false;
            }
        }
        if self.no_prereq && course.has_prereq() {
            return false;
        }
        if self.half_term && !course.half_term {
            return false;
        }
        if self.no_final && course.final_exam {
            return false;
        }
        if self.require_eval && !course.has_evaluation() {
            return false;
        }
        if !self.units.contains(course.total_units()) {
            return false;
        }
        if !self.lecture_units.contains_component(course.lecture_units()) {
            return false;
        }
        if !self.lab_units.contains_component(course.lab_units()) {
            return false;
        }
        if !self.prep_units.contains_component(course.prep_units()) {
            return false;
        }
        if !self.hours.contains(course.hours) {
            return false;
        }
        if !self.size.contains(course.size) {
            return false;
        }
        if !self.rating.contains(course.rating) {
            return false;
        }
        if !self.prefixes.is_empty() {
            let id = course.id.to_lowercase();
            if !self
                .prefixes
                .iter()
                .any(|prefix| id.starts_with(prefix.as_str()))
            {
                return false;
            }
        }
        true
    }
}
