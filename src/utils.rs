// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for course-number handling.

/// Normalize a course number into a fixed-width collation key.
///
/// Plain string comparison gets catalog numbers wrong ("10.01" sorts before
/// "6.001", "6.s081" sorts after "6.S899"). The key fixes both:
///
/// 1. Split on `.` into segments
/// 2. Decompose each segment as leading digits, letters, trailing digits,
///    with anything after that kept raw
/// 3. Zero-pad each non-empty digit run to width 4
/// 4. Uppercase the letters
/// 5. Rejoin with `.`
///
/// Byte comparison of the keys then orders numerically within departments and
/// keeps numeric departments ahead of lettered ones:
/// `6.001` < `11.S197` < `21W.225` < `STS.095`.
pub fn normalize_course_number(raw: &str) -> String {
    let segments: Vec<String> = raw.split('.').map(normalize_segment).collect();
    segments.join(".")
}

fn normalize_segment(segment: &str) -> String {
    // ASCII scanning: a non-ASCII byte matches neither class, so it and
    // everything after it land in the raw tail at a valid char boundary.
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut j = i;
    while j < bytes.len() && bytes[j].is_ascii_alphabetic() {
        j += 1;
    }
    let mut k = j;
    while k < bytes.len() && bytes[k].is_ascii_digit() {
        k += 1;
    }

    let mut key = String::with_capacity(segment.len() + 8);
    push_padded(&mut key, &segment[..i]);
    key.push_str(&segment[i..j].to_ascii_uppercase());
    push_padded(&mut key, &segment[j..k]);
    key.push_str(&segment[k..]);
    key
}

fn push_padded(out: &mut String, digits: &str) {
    if digits.is_empty() {
        return;
    }
    for _ in digits.len()..4 {
        out.push('0');
    }
    out.push_str(digits);
}
