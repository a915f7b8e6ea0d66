//! Assertion helpers for Kubernetes integration tests
//!
//! Each helper fetches one or more resources from the cluster, compares
//! the observed fields with the caller-supplied expected values and
//! reports the outcome through a [`ReportSink`][report::ReportSink].
//! An accumulating sink, [`TestReport`][report::TestReport], is provided
//! for use in test cases:
//!
//! ```no_run
//! use kube_test_assertions::prelude::*;
//!
//! # fn main() -> Result<(), CheckError> {
//! let client = TestKubeClient::new();
//! let report = TestReport::new();
//!
//! namespace_is_active(&report, &client, "production")?;
//! deployment_count(&report, &client, "production", 2)?;
//! deployment_status_check(
//!     &report,
//!     &client,
//!     "web",
//!     "production",
//!     &DeploymentStatusExpectation {
//!         available: true,
//!         progressing: false,
//!         total_replicas: 3,
//!         available_replicas: 3,
//!         ready_replicas: 3,
//!         unavailable_replicas: 0,
//!     },
//! )?;
//!
//! report.assert_success();
//! # Ok(())
//! # }
//! ```
//!
//! Failures to reach the cluster are returned as
//! [`CheckError`][error::CheckError] values instead of being reported
//! through the sink, so a broken test environment is distinguishable
//! from a failing assertion.

pub mod annotations;
pub mod client;
pub mod deployment;
pub mod error;
pub mod ingress;
pub mod namespace;
pub mod prelude;
pub mod rbac;
pub mod report;
pub mod service;

pub use client::{KubeClient, TestKubeClient};
pub use error::CheckError;
pub use report::{ReportSink, TestReport};
