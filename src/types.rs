// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog query.
//!
//! These types define the normalized course record, the query shape the host
//! sends, and the scored/annotated results the engine sends back. Wire names
//! are camelCase to match the catalog source and the query producer.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Course**: `id` is unique across the catalog; `units` always holds
//!   exactly (lecture, lab, preparation); zero in any of hours/rating/size is
//!   the no-evaluation-data sentinel, never a measured zero.
//! - **Query**: every absent field means "no constraint". `Query::default()`
//!   matches the whole catalog in default order.
//! - **SearchResult**: owns a copy of its course, never a view into the
//!   catalog, so the catalog stays immutable for the life of the engine.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Academic term a course is offered in.
///
/// Wire tokens are the catalog source's two-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Term {
    #[serde(rename = "FA")]
    #[value(name = "fa", alias = "fall")]
    Fall,
    #[serde(rename = "JA")]
    #[value(name = "ja", alias = "iap")]
    January,
    #[serde(rename = "SP")]
    #[value(name = "sp", alias = "spring")]
    Spring,
    #[serde(rename = "SU")]
    #[value(name = "su", alias = "summer")]
    Summer,
}

impl Term {
    /// The catalog source's token for this term.
    pub fn token(self) -> &'static str {
        match self {
            Term::Fall => "FA",
            Term::January => "JA",
            Term::Spring => "SP",
            Term::Summer => "SU",
        }
    }

    /// Parse a raw catalog token, case-insensitively. Unknown tokens are
    /// `None` so the normalizer can drop them instead of failing the load.
    pub fn parse_token(raw: &str) -> Option<Term> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "FA" => Some(Term::Fall),
            "JA" => Some(Term::January),
            "SP" => Some(Term::Spring),
            "SU" => Some(Term::Summer),
            _ => None,
        }
    }
}

/// Course level classifier. Catalogs leave this blank for some listings, so
/// courses carry `Option<Level>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Level {
    #[serde(rename = "U")]
    #[value(name = "u", alias = "undergrad")]
    Undergraduate,
    #[serde(rename = "G")]
    #[value(name = "g", alias = "grad")]
    Graduate,
}

impl Level {
    /// Parse a raw level token, case-insensitively. Blank or unknown → `None`.
    pub fn parse_token(raw: &str) -> Option<Level> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "U" => Some(Level::Undergraduate),
            "G" => Some(Level::Graduate),
            _ => None,
        }
    }
}

/// Sort criterion for the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Relevance,
    Rating,
    Hours,
    Size,
    Number,
}

/// Direction modifier for a sort criterion.
///
/// Each criterion has its own default (rating high-first, hours short-first,
/// size small-first, number low-first); only the token naming the non-default
/// end reverses it. Tokens restating the default are accepted no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    High,
    Low,
    Long,
    Short,
    Large,
    Small,
}

/// One normalized catalog entry. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Catalog course number, e.g. `6.001` or `21W.225`. Unique.
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub terms: Vec<Term>,
    pub level: Option<Level>,
    /// Free prerequisite text. Blank or `"none"` (any case) means no
    /// prerequisite.
    pub prereq: String,
    /// (lecture, lab, preparation) unit components, all non-negative.
    pub units: [f32; 3],
    /// Average weekly hours from evaluations; 0 = no evaluation data.
    pub hours: f32,
    /// Average rating from evaluations; 0 = no evaluation data.
    pub rating: f32,
    /// Average enrollment from evaluations; 0 = no evaluation data.
    pub size: f32,
    pub half_term: bool,
    pub final_exam: bool,
}

impl Course {
    pub fn lecture_units(&self) -> f32 {
        self.units[0]
    }

    pub fn lab_units(&self) -> f32 {
        self.units[1]
    }

    pub fn prep_units(&self) -> f32 {
        self.units[2]
    }

    /// Total units: lecture + lab + preparation.
    pub fn total_units(&self) -> f32 {
        self.units.iter().sum()
    }

    /// Whether evaluation data exists. A zero in any of hours/rating/size is
    /// the no-data sentinel, so all three must be positive.
    pub fn has_evaluation(&self) -> bool {
        self.hours > 0.0 && self.rating > 0.0 && self.size > 0.0
    }

    /// Whether the course lists a real prerequisite.
    pub fn has_prereq(&self) -> bool {
        let text = self.prereq.trim();
        !text.is_empty() && !text.eq_ignore_ascii_case("none")
    }
}

/// A structured filter/search/sort request. One per search interaction;
/// every field defaults to "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Query {
    /// Comma-separated free-text keywords, OR'd against each other.
    pub keywords: Option<String>,
    /// Comma-separated course-number prefixes, OR'd against each other.
    pub numbers: Option<String>,
    pub terms: Option<Vec<Term>>,
    pub level: Option<Level>,
    pub half_term: bool,
    pub no_prereq: bool,
    pub no_final: bool,
    pub require_eval: bool,
    pub min_units: Option<f32>,
    pub max_units: Option<f32>,
    pub min_lecture_units: Option<f32>,
    pub max_lecture_units: Option<f32>,
    pub min_lab_units: Option<f32>,
    pub max_lab_units: Option<f32>,
    pub min_prep_units: Option<f32>,
    pub max_prep_units: Option<f32>,
    pub min_hours: Option<f32>,
    pub max_hours: Option<f32>,
    pub min_size: Option<f32>,
    pub max_size: Option<f32>,
    pub min_rating: Option<f32>,
    pub max_rating: Option<f32>,
    pub sort: Option<SortKey>,
    pub sort_direction: Option<SortDirection>,
}

impl Query {
    /// Keyword terms: split on commas, trimmed, empties dropped. An empty
    /// result means the keyword constraint is absent.
    pub fn keyword_terms(&self) -> Vec<&str> {
        split_terms(self.keywords.as_deref())
    }

    /// Course-number prefixes: split on commas, trimmed, empties dropped.
    pub fn number_prefixes(&self) -> Vec<&str> {
        split_terms(self.numbers.as_deref())
    }

    /// Whether this query carries any keyword terms.
    pub fn has_keywords(&self) -> bool {
        !self.keyword_terms().is_empty()
    }
}

fn split_terms(raw: Option<&str>) -> Vec<&str> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Marked-up variants of a result's text fields, with every keyword match
/// wrapped in `<mark>` tags (and the matched number prefix for the id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlights {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
}

/// One scored, annotated course. Built fresh per query and handed to the
/// consumer; discarding it never touches the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub course: Course,
    /// Keyword relevance. 0 when the query had no keywords; all surviving
    /// courses are then equally matched and score plays no ordering role.
    pub score: f64,
    pub highlights: Highlights,
}

/// The engine's reply: the full ordered result list plus the catalog's
/// freshness timestamp, passed through from the source unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub last_updated: String,
}
