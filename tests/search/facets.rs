//! Facet filtering through the whole engine.
//!
//! Tests that:
//! - Every facet rejects and admits the right sample courses
//! - List facets (terms, number prefixes) are any-of within the list
//! - Numeric ranges are inclusive, with absent bounds open
//! - A unit-component max of zero selects courses with none of that component
//! - Facets compose conjunctively

use coursepick::types::{Level, Query, SortDirection, SortKey, Term};

use super::common::{ids, run};

#[test]
fn test_term_facet_keeps_offered_courses() {
    let response = run(Query {
        terms: Some(vec![Term::Fall]),
        ..Query::default()
    });
    assert_eq!(ids(&response), vec!["6.001", "6.002", "8.370", "18.06"]);
}

#[test]
fn test_term_list_is_any_of() {
    let response = run(Query {
        terms: Some(vec![Term::January, Term::Summer]),
        ..Query::default()
    });
    assert_eq!(ids(&response), vec!["21W.225", "STS.095"]);
}

#[test]
fn test_level_facet() {
    let response = run(Query {
        level: Some(Level::Graduate),
        ..Query::default()
    });
    assert_eq!(ids(&response), vec!["6.824", "6.S977", "8.370"]);
}

#[test]
fn test_half_term_flag() {
    let response = run(Query {
        half_term: true,
        ..Query::default()
    });
    assert_eq!(ids(&response), vec!["6.S977", "21W.225"]);
}

#[test]
fn test_no_prereq_accepts_blank_and_none() {
    // 6.001, 21W.225, and STS.095 have blank prereqs; 6.S977 spells "none".
    let response = run(Query {
        no_prereq: true,
        ..Query::default()
    });
    assert_eq!(ids(&response), vec!["6.001", "6.S977", "21W.225", "STS.095"]);
}

#[test]
fn test_no_final_flag() {
    let response = run(Query {
        no_final: true,
        ..Query::default()
    });
    assert_eq!(
        ids(&response),
        vec!["6.824", "6.S977", "8.370", "21W.225", "STS.095"]
    );
}

#[test]
fn test_require_eval_drops_unevaluated_courses() {
    let response = run(Query {
        require_eval: true,
        ..Query::default()
    });
    assert_eq!(
        ids(&response),
        vec!["6.001", "6.002", "6.824", "8.370", "18.06", "STS.095"]
    );
}

#[test]
fn test_total_unit_bounds_are_inclusive() {
    let response = run(Query {
        min_units: Some(12.0),
        ..Query::default()
    });
    assert_eq!(
        ids(&response),
        vec!["6.001", "6.002", "6.824", "8.370", "18.06"]
    );

    let response = run(Query {
        max_units: Some(9.0),
        ..Query::default()
    });
    // STS.095 sits exactly on the bound.
    assert_eq!(ids(&response), vec!["6.S977", "21W.225", "STS.095"]);
}

#[test]
fn test_lab_units_max_zero_selects_lab_free_courses() {
    let response = run(Query {
        max_lab_units: Some(0.0),
        ..Query::default()
    });
    assert_eq!(response.results.len(), 7);
    assert!(!ids(&response).contains(&"6.002"));

    // A contradictory min is ignored once max == 0 asks for "no labs".
    let response = run(Query {
        min_lab_units: Some(5.0),
        max_lab_units: Some(0.0),
        ..Query::default()
    });
    assert_eq!(response.results.len(), 7);
}

#[test]
fn test_hours_bounds_treat_missing_data_as_zero() {
    // A pure max admits unevaluated courses: their zero hours pass any cap.
    let response = run(Query {
        max_hours: Some(10.0),
        ..Query::default()
    });
    assert_eq!(
        ids(&response),
        vec!["6.S977", "18.06", "21W.225", "STS.095"]
    );

    let response = run(Query {
        min_hours: Some(12.0),
        ..Query::default()
    });
    assert_eq!(ids(&response), vec!["6.001", "6.002", "6.824"]);
}

#[test]
fn test_rating_bounds() {
    let response = run(Query {
        min_rating: Some(6.0),
        ..Query::default()
    });
    assert_eq!(ids(&response), vec!["6.001", "6.824", "18.06"]);

    let response = run(Query {
        max_rating: Some(5.0),
        ..Query::default()
    });
    assert_eq!(ids(&response), vec!["6.S977", "21W.225", "STS.095"]);
}

#[test]
fn test_size_bounds() {
    let response = run(Query {
        min_size: Some(100.0),
        ..Query::default()
    });
    assert_eq!(ids(&response), vec!["6.001", "18.06"]);
}

#[test]
fn test_number_prefixes_are_any_of_and_case_insensitive() {
    let response = run(Query {
        numbers: Some("6.".to_string()),
        ..Query::default()
    });
    assert_eq!(ids(&response), vec!["6.001", "6.002", "6.824", "6.S977"]);

    let response = run(Query {
        numbers: Some("6., 18".to_string()),
        ..Query::default()
    });
    assert_eq!(
        ids(&response),
        vec!["6.001", "6.002", "6.824", "6.S977", "18.06"]
    );

    let response = run(Query {
        numbers: Some("sts".to_string()),
        ..Query::default()
    });
    assert_eq!(ids(&response), vec!["STS.095"]);
}

#[test]
fn test_facets_compose_conjunctively() {
    let response = run(Query {
        terms: Some(vec![Term::Fall]),
        level: Some(Level::Undergraduate),
        max_hours: Some(13.0),
        ..Query::default()
    });
    // 6.001 is fall undergraduate but takes 14.5 hours.
    assert_eq!(ids(&response), vec!["6.002", "18.06"]);
}

#[test]
fn test_facets_apply_before_sorting() {
    let response = run(Query {
        level: Some(Level::Graduate),
        sort: Some(SortKey::Hours),
        sort_direction: Some(SortDirection::Long),
        ..Query::default()
    });
    assert_eq!(ids(&response), vec!["6.824", "8.370", "6.S977"]);
}
