//! Projection of a parsed object onto the match record.
//!
//! Only the top-level members of an object participate; keys are matched
//! ASCII case-insensitively and the first occurrence of a duplicate key
//! wins. Every projection is total: an absent key or a value of the
//! wrong kind resolves to the field type's zero value, silently. The
//! upstream producer omits fields as a matter of course, so defaulting
//! is expected behavior here, not a reportable condition.

use super::record::OcrMatch;
use super::value::Value;

/// Builds one fully-populated record from an object's member list.
pub(crate) fn project_match(members: &[(String, Value)]) -> OcrMatch {
    OcrMatch {
        text: text_field(members, "Text"),
        left: int_field(members, "Left"),
        top: int_field(members, "Top"),
        width: int_field(members, "Width"),
        height: int_field(members, "Height"),
        center_x: int_field(members, "CenterX"),
        center_y: int_field(members, "CenterY"),
        confidence: float_field(members, "Confidence"),
        kind: text_field(members, "Type"),
        word_count: int_field(members, "WordCount"),
    }
}

fn lookup<'a>(members: &'a [(String, Value)], name: &str) -> Option<&'a Value> {
    members
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}

/// A quoted string value, or `""` for anything else.
fn text_field(members: &[(String, Value)], name: &str) -> String {
    match lookup(members, name) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// A numeric value truncated toward zero, or `0` for anything else.
///
/// Values beyond the `i32` range saturate at the range limits.
fn int_field(members: &[(String, Value)], name: &str) -> i32 {
    match lookup(members, name) {
        Some(Value::Number(n)) if n.is_finite() => *n as i32,
        _ => 0,
    }
}

/// A numeric value, or `0.0` for anything else.
fn float_field(members: &[(String, Value)], name: &str) -> f64 {
    match lookup(members, name) {
        Some(Value::Number(n)) if n.is_finite() => *n,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::value::parse_object_span;

    fn project(span: &str) -> OcrMatch {
        let members = parse_object_span(span).expect("parse failed");
        project_match(&members)
    }

    #[test]
    fn test_all_fields_projected() {
        let m = project(
            r#"{"Text":"Login","Left":10,"Top":20,"Width":100,"Height":30,
                "CenterX":60,"CenterY":35,"Confidence":0.93,"Type":"Word","WordCount":1}"#,
        );
        assert_eq!(m.text, "Login");
        assert_eq!(m.left, 10);
        assert_eq!(m.top, 20);
        assert_eq!(m.width, 100);
        assert_eq!(m.height, 30);
        assert_eq!(m.center_x, 60);
        assert_eq!(m.center_y, 35);
        assert_eq!(m.confidence, 0.93);
        assert_eq!(m.kind, "Word");
        assert_eq!(m.word_count, 1);
    }

    #[test]
    fn test_absent_fields_default() {
        let m = project(r#"{"Text":"x"}"#);
        assert_eq!(m.text, "x");
        assert_eq!(m.left, 0);
        assert_eq!(m.confidence, 0.0);
        assert_eq!(m.kind, "");
        assert_eq!(m.word_count, 0);
    }

    #[test]
    fn test_empty_object_is_fully_defaulted() {
        assert_eq!(project("{}"), OcrMatch::default());
    }

    #[test]
    fn test_keys_match_case_insensitively() {
        let m = project(r#"{"text":"a","LEFT":5,"centerx":9,"wordcount":2}"#);
        assert_eq!(m.text, "a");
        assert_eq!(m.left, 5);
        assert_eq!(m.center_x, 9);
        assert_eq!(m.word_count, 2);
    }

    #[test]
    fn test_kind_mismatch_defaults() {
        // Number where text is expected, string where numbers are
        // expected, boolean where a float is expected.
        let m = project(r#"{"Text":42,"Left":"10","Confidence":true,"Type":null}"#);
        assert_eq!(m.text, "");
        assert_eq!(m.left, 0);
        assert_eq!(m.confidence, 0.0);
        assert_eq!(m.kind, "");
    }

    #[test]
    fn test_fractional_integer_truncates_toward_zero() {
        let m = project(r#"{"Left":12.9,"Top":-3.7}"#);
        assert_eq!(m.left, 12);
        assert_eq!(m.top, -3);
    }

    #[test]
    fn test_negative_box_values_pass_through() {
        let m = project(r#"{"Left":-4,"Top":-2}"#);
        assert_eq!(m.left, -4);
        assert_eq!(m.top, -2);
    }

    #[test]
    fn test_duplicate_key_first_occurrence_wins() {
        let m = project(r#"{"Text":"first","Text":"second","Left":1,"left":2}"#);
        assert_eq!(m.text, "first");
        assert_eq!(m.left, 1);
    }

    #[test]
    fn test_nested_key_does_not_leak_to_top_level() {
        let m = project(r#"{"Text":"x","Box":{"Left":99,"Top":88}}"#);
        assert_eq!(m.left, 0);
        assert_eq!(m.top, 0);
    }

    #[test]
    fn test_key_inside_string_value_does_not_match() {
        let m = project(r#"{"Text":"\"Left\": 99","Left":5}"#);
        assert_eq!(m.text, "\"Left\": 99");
        assert_eq!(m.left, 5);
    }

    #[test]
    fn test_out_of_range_integer_saturates() {
        let m = project(r#"{"Left":4000000000,"Top":-4000000000}"#);
        assert_eq!(m.left, i32::MAX);
        assert_eq!(m.top, i32::MIN);
    }
}
