// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the coursepick command-line interface.
//!
//! Two subcommands: `search` to query a catalog snapshot and `inspect` to
//! summarize one. Every facet the engine understands gets a flag; the parsed
//! arguments convert into one [`Query`] via [`SearchArgs::to_query`].

pub mod display;

use clap::{ArgAction, Args, Parser, Subcommand};

use coursepick::types::{Level, Query, SortDirection, SortKey, Term};

#[derive(Parser)]
#[command(
    name = "coursepick",
    about = "Course catalog search: facet filters, keyword relevance, ordering",
    version
)]
pub struct Cli {
    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query a catalog snapshot and display matching courses
    Search(SearchArgs),

    /// Summarize a catalog snapshot
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct SearchArgs {
    /// Path to the catalog snapshot JSON
    pub catalog: String,

    /// Comma-separated keywords, matched against title, description, and
    /// instructor
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Comma-separated course-number prefixes, e.g. "6.,18.06"
    #[arg(short, long)]
    pub numbers: Option<String>,

    /// Offered term (repeatable)
    #[arg(short, long, value_enum)]
    pub term: Vec<Term>,

    /// Course level
    #[arg(short, long, value_enum)]
    pub level: Option<Level>,

    /// Only half-term courses
    #[arg(long)]
    pub half_term: bool,

    /// Only courses without prerequisites
    #[arg(long)]
    pub no_prereq: bool,

    /// Only courses without a final exam
    #[arg(long)]
    pub no_final: bool,

    /// Only courses with evaluation data (rating, hours, and size)
    #[arg(long)]
    pub require_eval: bool,

    /// Minimum total units
    #[arg(long, value_name = "UNITS")]
    pub min_units: Option<f32>,

    /// Maximum total units
    #[arg(long, value_name = "UNITS")]
    pub max_units: Option<f32>,

    /// Minimum lecture units
    #[arg(long, value_name = "UNITS")]
    pub min_lecture_units: Option<f32>,

    /// Maximum lecture units (0 matches only lecture-free courses)
    #[arg(long, value_name = "UNITS")]
    pub max_lecture_units: Option<f32>,

    /// Minimum lab units
    #[arg(long, value_name = "UNITS")]
    pub min_lab_units: Option<f32>,

    /// Maximum lab units (0 matches only lab-free courses)
    #[arg(long, value_name = "UNITS")]
    pub max_lab_units: Option<f32>,

    /// Minimum preparation units
    #[arg(long, value_name = "UNITS")]
    pub min_prep_units: Option<f32>,

    /// Maximum preparation units (0 matches only prep-free courses)
    #[arg(long, value_name = "UNITS")]
    pub max_prep_units: Option<f32>,

    /// Minimum weekly hours from evaluations
    #[arg(long, value_name = "HOURS")]
    pub min_hours: Option<f32>,

    /// Maximum weekly hours from evaluations
    #[arg(long, value_name = "HOURS")]
    pub max_hours: Option<f32>,

    /// Minimum enrollment from evaluations
    #[arg(long, value_name = "N")]
    pub min_size: Option<f32>,

    /// Maximum enrollment from evaluations
    #[arg(long, value_name = "N")]
    pub max_size: Option<f32>,

    /// Minimum rating from evaluations
    #[arg(long, value_name = "RATING")]
    pub min_rating: Option<f32>,

    /// Maximum rating from evaluations
    #[arg(long, value_name = "RATING")]
    pub max_rating: Option<f32>,

    /// Sort criterion (keyword queries rank by relevance first)
    #[arg(short, long, value_enum)]
    pub sort: Option<SortKey>,

    /// Sort direction; each criterion has its own default
    #[arg(short = 'd', long, value_enum)]
    pub direction: Option<SortDirection>,

    /// Maximum number of results to display
    #[arg(long, default_value = "20")]
    pub limit: usize,

    /// Emit the full response as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    /// Build the engine query from the parsed flags.
    pub fn to_query(&self) -> Query {
        Query {
            keywords: self.keywords.clone(),
            numbers: self.numbers.clone(),
            terms: (!self.term.is_empty()).then(|| self.term.clone()),
            level: self.level,
            half_term: self.half_term,
            no_prereq: self.no_prereq,
            no_final: self.no_final,
            require_eval: self.require_eval,
            min_units: self.min_units,
            max_units: self.max_units,
            min_lecture_units: self.min_lecture_units,
            max_lecture_units: self.max_lecture_units,
            min_lab_units: self.min_lab_units,
            max_lab_units: self.max_lab_units,
            min_prep_units: self.min_prep_units,
            max_prep_units: self.max_prep_units,
            min_hours: self.min_hours,
            max_hours: self.max_hours,
            min_size: self.min_size,
            max_size: self.max_size,
            min_rating: self.min_rating,
            max_rating: self.max_rating,
            sort: self.sort,
            sort_direction: self.direction,
        }
    }
}

#[derive(Args)]
pub struct InspectArgs {
    /// Path to the catalog snapshot JSON
    pub catalog: String,
}
