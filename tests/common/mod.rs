//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use coursepick::types::{Course, Level, Query, SearchResponse, Term};
use coursepick::{Catalog, Engine};

// Re-export canonical test utilities from coursepick::testing
pub use coursepick::testing::{make_catalog, make_course, FIXTURE_TIMESTAMP};

/// A catalog with enough variety to exercise every facet: both levels, all
/// four terms, spread-out units and evaluation data, prereq spellings,
/// half-term subjects, and courses with and without finals.
///
/// Normalized catalog order:
/// `6.001, 6.002, 6.824, 6.S977, 8.370, 18.06, 21W.225, STS.095`
pub fn sample_catalog() -> Catalog {
    make_catalog(sample_courses())
}

/// The sample catalog's courses, before normalization ordering.
pub fn sample_courses() -> Vec<Course> {
    let mut structure = make_course("6.001", "Structure and Interpretation of Computer Programs");
    structure.description = "Abstraction, recursion, and the structure of programs.".to_string();
    structure.instructor = "H. Abelson".to_string();
    structure.terms = vec![Term::Fall, Term::Spring];
    structure.level = Some(Level::Undergraduate);
    structure.units = [5.0, 0.0, 7.0];
    structure.hours = 14.5;
    structure.rating = 6.2;
    structure.size = 120.0;
    structure.final_exam = true;

    let mut circuits = make_course("6.002", "Circuits and Electronics");
    circuits.description = "Analysis of linear circuits.".to_string();
    circuits.instructor = "A. Agarwal".to_string();
    circuits.terms = vec![Term::Fall];
    circuits.level = Some(Level::Undergraduate);
    circuits.prereq = "8.02".to_string();
    circuits.units = [5.0, 2.0, 5.0];
    circuits.hours = 12.0;
    circuits.rating = 5.1;
    circuits.size = 95.0;
    circuits.final_exam = true;

    let mut distributed = make_course("6.824", "Distributed Systems");
    distributed.description = "Fault-tolerant distributed systems engineering.".to_string();
    distributed.instructor = "R. Morris".to_string();
    distributed.terms = vec![Term::Spring];
    distributed.level = Some(Level::Graduate);
    distributed.prereq = "6.033".to_string();
    distributed.units = [3.0, 0.0, 9.0];
    distributed.hours = 18.3;
    distributed.rating = 6.4;
    distributed.size = 80.0;

    let mut seminar = make_course("6.S977", "Seminar in Deep Learning");
    seminar.description = "Readings in deep learning theory.".to_string();
    seminar.instructor = "S. Jegelka".to_string();
    seminar.terms = vec![Term::Spring];
    seminar.level = Some(Level::Graduate);
    seminar.prereq = "none".to_string();
    seminar.units = [2.0, 0.0, 1.0];
    seminar.half_term = true;

    let mut quantum = make_course("8.370", "Quantum Computation");
    quantum.description = "Quantum circuits and algorithms.".to_string();
    quantum.instructor = "I. Chuang".to_string();
    quantum.terms = vec![Term::Fall];
    quantum.level = Some(Level::Graduate);
    quantum.prereq = "18.06".to_string();
    quantum.units = [4.0, 0.0, 8.0];
    quantum.hours = 11.2;
    quantum.rating = 5.9;
    quantum.size = 45.0;

    let mut linear = make_course("18.06", "Linear Algebra");
    linear.description = "Matrix theory and linear algebra.".to_string();
    linear.instructor = "G. Strang".to_string();
    linear.terms = vec![Term::Fall, Term::Spring];
    linear.level = Some(Level::Undergraduate);
    linear.prereq = "18.02".to_string();
    linear.units = [4.0, 0.0, 8.0];
    linear.hours = 9.8;
    linear.rating = 6.7;
    linear.size = 300.0;
    linear.final_exam = true;

    let mut writing = make_course("21W.225", "Academic Writing Workshop");
    writing.description = "Workshop practice in academic writing.".to_string();
    writing.instructor = "K. Boiko".to_string();
    writing.terms = vec![Term::January];
    writing.level = Some(Level::Undergraduate);
    writing.units = [2.0, 0.0, 4.0];
    writing.half_term = true;

    let mut sts = make_course("STS.095", "Science in the Making");
    sts.description = "Case studies in the history of science.".to_string();
    sts.instructor = "D. Kaiser".to_string();
    sts.terms = vec![Term::Summer];
    sts.level = Some(Level::Undergraduate);
    sts.units = [3.0, 0.0, 6.0];
    sts.hours = 5.5;
    sts.rating = 4.2;
    sts.size = 25.0;

    vec![
        structure,
        circuits,
        distributed,
        seminar,
        quantum,
        linear,
        writing,
        sts,
    ]
}

/// Run one query against a fresh engine over the sample catalog.
pub fn run(query: Query) -> SearchResponse {
    Engine::new(sample_catalog()).execute(&query)
}

/// Query with only keywords set.
pub fn keyword_query(keywords: &str) -> Query {
    Query {
        keywords: Some(keywords.to_string()),
        ..Query::default()
    }
}

/// Course ids of a response, in result order.
pub fn ids(response: &SearchResponse) -> Vec<&str> {
    response
        .results
        .iter()
        .map(|result| result.course.id.as_str())
        .collect()
}
