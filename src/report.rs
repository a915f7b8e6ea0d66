//! Report sink for assertion outcomes
//!
//! Every check writes exactly one line into a [`ReportSink`]: a log line
//! when the observed value is as expected, a failure line otherwise. The
//! enclosing test run inspects the sink to determine its overall result.

use std::fmt::Display;
use std::sync::Mutex;

/// Receives the outcome of every check
///
/// Implementations must be safe to share between parallel test cases if
/// the caller intends to do so; the checks themselves never synchronize.
pub trait ReportSink {
    /// Records an informational message for a passed check.
    fn log(&self, message: String);

    /// Records an assertion failure.
    fn fail(&self, message: String);
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Entry {
    Passed(String),
    Failed(String),
}

/// A [`ReportSink`] which accumulates all outcomes of a test run
///
/// Failures do not interrupt the run; call [`assert_success`] at the end
/// of the test to fail it if any check failed.
///
/// [`assert_success`]: TestReport::assert_success
#[derive(Debug, Default)]
pub struct TestReport {
    entries: Mutex<Vec<Entry>>,
}

impl TestReport {
    pub fn new() -> TestReport {
        TestReport::default()
    }

    /// Returns the messages of all passed checks in the order they were
    /// reported.
    pub fn passes(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::Passed(message) => Some(message),
                Entry::Failed(_) => None,
            })
            .collect()
    }

    /// Returns the messages of all failed checks in the order they were
    /// reported.
    pub fn failures(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::Failed(message) => Some(message),
                Entry::Passed(_) => None,
            })
            .collect()
    }

    /// Returns `true` if no check failed so far.
    pub fn is_success(&self) -> bool {
        self.failures().is_empty()
    }

    /// Panics with all failure messages if any check failed.
    pub fn assert_success(&self) {
        let failures = self.failures();
        if !failures.is_empty() {
            panic!(
                "{} check(s) failed:\n{}",
                failures.len(),
                failures.join("\n")
            );
        }
    }

    fn entries(&self) -> Vec<Entry> {
        self.entries
            .lock()
            .expect("report entries could not be locked")
            .clone()
    }

    fn push(&self, entry: Entry) {
        self.entries
            .lock()
            .expect("report entries could not be locked")
            .push(entry);
    }
}

impl ReportSink for TestReport {
    fn log(&self, message: String) {
        tracing::info!("{}", message);
        self.push(Entry::Passed(message));
    }

    fn fail(&self, message: String) {
        tracing::warn!("{}", message);
        self.push(Entry::Failed(message));
    }
}

/// Reports the given outcome with one of the given messages.
pub fn check_that(sink: &dyn ReportSink, passed: bool, success: String, failure: String) {
    if passed {
        sink.log(success);
    } else {
        sink.fail(failure);
    }
}

/// Compares an observed value with the expected one and reports the
/// outcome. Both values are appended to the chosen message.
pub fn check_eq<T>(sink: &dyn ReportSink, success: &str, failure: &str, expected: &T, actual: &T)
where
    T: Display + PartialEq + ?Sized,
{
    check_that(
        sink,
        expected == actual,
        format!("{} Expected {}, got {}.", success, expected, actual),
        format!("{} Expected {}, got {}.", failure, expected, actual),
    );
}

/// Compares the length of a listing against the expected object count.
pub fn check_count(
    sink: &dyn ReportSink,
    kind: &str,
    namespace: &str,
    expected_count: usize,
    actual_count: usize,
) {
    check_eq(
        sink,
        &format!(
            "The expected number of {} objects exist in the [{}] namespace.",
            kind, namespace
        ),
        &format!(
            "An unexpected number of {} objects exist in the [{}] namespace.",
            kind, namespace
        ),
        &expected_count,
        &actual_count,
    );
}
