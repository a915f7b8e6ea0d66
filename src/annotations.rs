//! Checks on resource annotations

use std::collections::BTreeMap;

use regex::Regex;

use crate::error::CheckError;
use crate::report::{check_eq, check_that, ReportSink};

/// Checks that the annotation with the given name has the expected value.
///
/// A missing annotation compares as an empty string, so the check passes
/// for a missing annotation only if the expected value is empty as well.
pub fn annotation_equals(
    sink: &dyn ReportSink,
    annotations: &BTreeMap<String, String>,
    name: &str,
    expected_value: &str,
) {
    let value = annotations.get(name).map(String::as_str).unwrap_or("");

    check_eq(
        sink,
        &format!("Annotation [{}] has its expected value.", name),
        &format!("Annotation [{}] does not have its expected value.", name),
        expected_value,
        value,
    );
}

/// Checks that the annotation with the given name matches the expected
/// pattern.
///
/// An invalid pattern is not an assertion failure but returned as
/// [`CheckError::InvalidPattern`].
pub fn annotation_matches_pattern(
    sink: &dyn ReportSink,
    annotations: &BTreeMap<String, String>,
    name: &str,
    expected_pattern: &str,
) -> Result<(), CheckError> {
    let pattern = Regex::new(expected_pattern).map_err(|source| CheckError::InvalidPattern {
        pattern: expected_pattern.to_owned(),
        source,
    })?;

    let value = annotations.get(name).map(String::as_str).unwrap_or("");

    check_that(
        sink,
        pattern.is_match(value),
        format!(
            "Annotation [{}] matches its expected pattern. Expected {}, got {}.",
            name, expected_pattern, value
        ),
        format!(
            "Annotation [{}] does not match its expected pattern. Expected {}, got {}.",
            name, expected_pattern, value
        ),
    );

    Ok(())
}
