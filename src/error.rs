//! Error type shared by the assertion helpers
//!
//! Failures to reach the cluster and invalid check parameters are kept
//! apart from ordinary assertion failures: the former are returned as
//! [`CheckError`] values so the calling test can decide whether to abort
//! or continue, the latter are reported through the
//! [`ReportSink`][crate::report::ReportSink].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    /// A single resource could not be fetched from the cluster.
    #[error("{kind} [{name}]{} could not be fetched: {source}", in_namespace(.namespace))]
    Fetch {
        kind: String,
        name: String,
        /// `None` for cluster-scoped resources
        namespace: Option<String>,
        #[source]
        source: kube::Error,
    },

    /// The resources of a namespace could not be listed.
    #[error("{kind} objects in the [{namespace}] namespace could not be listed: {source}")]
    List {
        kind: String,
        namespace: String,
        #[source]
        source: kube::Error,
    },

    /// A caller-supplied annotation pattern is not a valid regular expression.
    #[error("pattern [{pattern}] could not be compiled: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

fn in_namespace(namespace: &Option<String>) -> String {
    match namespace {
        Some(namespace) => format!(" in the [{}] namespace", namespace),
        None => String::new(),
    }
}
