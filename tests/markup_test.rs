//! Tests for the message formatter: exact layout, color wrappers, no escaping.

use panel_markup::markup::{Status, format, format_error, format_test};

// ── format ──────────────────────────────────────────────────────────────────

#[test]
fn format_exact_layout() {
    assert_eq!(
        format("hello", "blue"),
        "<p style='color: blue;' >hello</p>"
    );
}

#[test]
fn format_empty_inputs() {
    assert_eq!(format("", ""), "<p style='color: ;' ></p>");
}

#[test]
fn format_matches_concatenation() {
    let cases = [
        ("plain", "red"),
        ("", "#00ff00"),
        ("multi\nline", "rgb(1, 2, 3)"),
        ("юникод ✓", "not a color"),
    ];
    for (m, c) in cases {
        let expected = "<p style='color: ".to_string() + c + ";' >" + m + "</p>";
        assert_eq!(format(m, c), expected);
    }
}

#[test]
fn format_does_not_escape_markup() {
    assert_eq!(
        format("<b>bold</b> & 'quoted'", "red' onclick='x"),
        "<p style='color: red' onclick='x;' ><b>bold</b> & 'quoted'</p>"
    );
}

#[test]
fn format_is_deterministic() {
    assert_eq!(format("same", "teal"), format("same", "teal"));
}

// ── wrappers ────────────────────────────────────────────────────────────────

#[test]
fn format_error_is_red() {
    assert_eq!(
        format_error("File not found"),
        "<p style='color: red;' >File not found</p>"
    );
}

#[test]
fn format_test_is_green() {
    assert_eq!(
        format_test("All checks passed"),
        "<p style='color: green;' >All checks passed</p>"
    );
}

#[test]
fn wrappers_delegate_to_format() {
    for m in ["", "x", "<i>raw</i>"] {
        assert_eq!(format_error(m), format(m, "red"));
        assert_eq!(format_test(m), format(m, "green"));
    }
}

// ── Status ──────────────────────────────────────────────────────────────────

#[test]
fn status_render_matches_wrappers() {
    assert_eq!(Status::Error.render("boom"), format_error("boom"));
    assert_eq!(Status::Test.render("ok"), format_test("ok"));
}

#[test]
fn status_parses_case_insensitively() {
    assert_eq!("error".parse::<Status>().unwrap(), Status::Error);
    assert_eq!("ERROR".parse::<Status>().unwrap(), Status::Error);
    assert_eq!("Test".parse::<Status>().unwrap(), Status::Test);
    assert_eq!("success".parse::<Status>().unwrap(), Status::Test);
}

#[test]
fn status_rejects_unknown() {
    assert!("warning".parse::<Status>().is_err());
    assert!("".parse::<Status>().is_err());
}

#[test]
fn status_deserializes_success_alias() {
    let status: Status = serde_json::from_str("\"success\"").unwrap();
    assert_eq!(status, Status::Test);
}
