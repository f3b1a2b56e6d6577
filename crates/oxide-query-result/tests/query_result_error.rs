//! Tests for the rendering and field contract of `QueryResultError`.

use oxide_query_result::{
    QueryResult, QueryResultError, QueryResultErrorCode, QueryResultMask, LINE_ENDING,
};
use serde_json::json;

// =============================================================================
// Scenario: no rows where one was required
// =============================================================================

#[test]
fn test_no_data_without_values() {
    let err = QueryResultError::new(
        QueryResultErrorCode::NoData,
        QueryResult::from_rows(vec![]),
        "SELECT * FROM t WHERE id=1",
        None,
    );

    assert_eq!(err.message(), "No data returned from the query.");
    assert_eq!(err.received(), 0);
    assert!(err.values().is_none());

    let rendered = err.to_string();
    assert!(!rendered.contains("values"));
    assert_eq!(
        rendered,
        format!(
            "QueryResultError {{{e}    code: queryResultErrorCode.noData{e}    \
             message: \"No data returned from the query.\"{e}    received: 0{e}    \
             query: \"SELECT * FROM t WHERE id=1\"{e}}}",
            e = LINE_ENDING
        )
    );
}

// =============================================================================
// Scenario: several rows where at most one was expected
// =============================================================================

#[test]
fn test_multiple_with_empty_values() {
    let err = QueryResultError::new(
        QueryResultErrorCode::Multiple,
        QueryResult::from_json_rows("SELECT", vec![json!({"id": 1}), json!({"id": 2})]).unwrap(),
        "SELECT * FROM t",
        Some(json!([])),
    );

    assert_eq!(err.message(), "Multiple rows were not expected.");
    assert_eq!(err.received(), 2);

    let rendered = err.to_string();
    let lines: Vec<&str> = rendered.split(LINE_ENDING).collect();
    assert_eq!(
        lines,
        vec![
            "QueryResultError {",
            "    code: queryResultErrorCode.multiple",
            "    message: \"Multiple rows were not expected.\"",
            "    received: 2",
            "    query: \"SELECT * FROM t\"",
            "    values: []",
            "}",
        ]
    );
}

// =============================================================================
// Scenario: rows where none were expected
// =============================================================================

#[test]
fn test_not_empty() {
    let err = QueryResultError::new(
        QueryResultErrorCode::NotEmpty,
        QueryResult::from_json_rows("DELETE", vec![json!({"id": 1})]).unwrap(),
        "DELETE FROM t",
        None,
    );

    assert_eq!(err.message(), "No return data was expected.");
    assert_eq!(err.received(), 1);
    assert_eq!(err.code(), QueryResultErrorCode::NotEmpty);
    assert!(err
        .to_string()
        .contains("code: queryResultErrorCode.notEmpty"));
}

// =============================================================================
// Rendering contract
// =============================================================================

#[test]
fn test_rendering_is_idempotent_and_inspect_matches() {
    let err = QueryResultMask::NONE
        .check(
            QueryResult::from_json_rows("SELECT", vec![json!({"id": 1})]).unwrap(),
            "SELECT id FROM t WHERE name = ?",
            Some(json!(["alice"])),
        )
        .unwrap_err();

    let first = err.to_string();
    let second = err.to_string();
    assert_eq!(first, second);
    assert_eq!(err.inspect(), first);
    assert_eq!(format!("{err:?}"), first);
    assert!(first.contains(r#"    values: ["alice"]"#));
}

#[test]
fn test_values_line_present_iff_values_given() {
    for values in [None, Some(json!(null)), Some(json!({"id": 3}))] {
        let present = values.is_some();
        let err = QueryResultError::new(
            QueryResultErrorCode::NoData,
            QueryResult::default(),
            "SELECT 1",
            values,
        );
        assert_eq!(err.to_string().contains("values:"), present);
    }
}

#[test]
fn test_query_is_not_escaped() {
    let err = QueryResultError::new(
        QueryResultErrorCode::NoData,
        QueryResult::default(),
        r#"SELECT * FROM t WHERE name = "x""#,
        None,
    );
    assert!(err
        .to_string()
        .contains(r#"    query: "SELECT * FROM t WHERE name = "x"""#));
}

// =============================================================================
// Code registry
// =============================================================================

#[test]
fn test_invalid_code_fails() {
    let err = QueryResultErrorCode::try_from(3_u8).unwrap_err();
    assert_eq!(err.to_string(), "invalid query result error code: 3");
}

#[test]
fn test_error_as_dyn_error() {
    let err: Box<dyn std::error::Error + Send + Sync> = Box::new(QueryResultError::new(
        QueryResultErrorCode::Multiple,
        QueryResult::default(),
        "SELECT 1",
        None,
    ));
    assert!(err.to_string().starts_with("QueryResultError {"));
    assert!(err.downcast_ref::<QueryResultError>().is_some());
}
