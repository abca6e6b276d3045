//! Match annotation on engine results.
//!
//! Tests that:
//! - Every keyword occurrence in every text field gets wrapped, keeping the
//!   field's original casing
//! - Terms apply sequentially, so later terms may nest inside earlier marks
//! - Course-number prefixes mark only the first matching prefix, anchored
//! - Keyword marks never touch ids, and prefix marks never touch text fields

use coursepick::types::Query;
use coursepick::Engine;

use super::common::{ids, keyword_query, make_catalog, make_course, run};

#[test]
fn test_adjacent_terms_mark_sequentially() {
    let catalog = make_catalog(vec![make_course("9.001", "JavaScript Programming")]);
    let response = Engine::new(catalog).execute(&keyword_query("java,script"));

    assert_eq!(
        response.results[0].highlights.title,
        "<mark>Java</mark><mark>Script</mark> Programming"
    );
}

#[test]
fn test_later_terms_nest_inside_earlier_marks() {
    let catalog = make_catalog(vec![make_course("9.002", "Hello Robotics")]);
    let response = Engine::new(catalog).execute(&keyword_query("hello,ell"));

    assert_eq!(
        response.results[0].highlights.title,
        "<mark>H<mark>ell</mark>o</mark> Robotics"
    );
}

#[test]
fn test_every_field_is_annotated_with_original_casing() {
    let response = run(keyword_query("writing"));
    assert_eq!(ids(&response), vec!["21W.225"]);

    let highlights = &response.results[0].highlights;
    assert_eq!(highlights.title, "Academic <mark>Writing</mark> Workshop");
    assert_eq!(
        highlights.description,
        "Workshop practice in academic <mark>writing</mark>."
    );
    assert_eq!(highlights.instructor, "K. Boiko");
    // Keyword marks never touch the id.
    assert_eq!(highlights.id, "21W.225");
}

#[test]
fn test_first_matching_prefix_wins() {
    let response = run(Query {
        numbers: Some("6.,6.0".to_string()),
        ..Query::default()
    });

    // "6." already matches, so "6.0" is never tried.
    assert_eq!(response.results[0].course.id, "6.001");
    assert_eq!(response.results[0].highlights.id, "<mark>6.</mark>001");
}

#[test]
fn test_prefix_marks_are_anchored_and_case_insensitive() {
    let response = run(Query {
        numbers: Some("21w,225".to_string()),
        ..Query::default()
    });
    assert_eq!(ids(&response), vec!["21W.225"]);

    // "21w" matches at the start with the id's casing kept; the "225" inside
    // the id is never marked mid-string.
    assert_eq!(response.results[0].highlights.id, "<mark>21W</mark>.225");
    // Prefix marks never touch the text fields.
    assert_eq!(
        response.results[0].highlights.title,
        "Academic Writing Workshop"
    );
}

#[test]
fn test_regex_metacharacters_highlight_literally() {
    let mut course = make_course("9.003", "Intro to C++ Programming");
    course.description = "Covers c++ templates.".to_string();
    let catalog = make_catalog(vec![course]);
    let response = Engine::new(catalog).execute(&keyword_query("c++"));

    let highlights = &response.results[0].highlights;
    assert_eq!(highlights.title, "Intro to <mark>C++</mark> Programming");
    assert_eq!(highlights.description, "Covers <mark>c++</mark> templates.");
}

#[test]
fn test_unmarked_fields_pass_through_unchanged() {
    let response = run(keyword_query("circuit"));
    let top = &response.results[0];
    assert_eq!(top.course.id, "6.002");
    assert_eq!(top.highlights.instructor, "A. Agarwal");
    assert_eq!(top.course.title, "Circuits and Electronics");
}
