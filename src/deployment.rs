//! Checks on Deployments and their rollout status

use k8s_openapi::api::apps::v1::{Deployment, DeploymentCondition};

use crate::client::TestKubeClient;
use crate::error::CheckError;
use crate::report::{check_count, check_eq, ReportSink};

/// The expected rollout status of a Deployment
///
/// `available` and `progressing` map to the status of the conditions
/// with the according types, `true` meaning "True" and `false` meaning
/// "False".
#[derive(Clone, Debug)]
pub struct DeploymentStatusExpectation {
    pub available: bool,
    pub progressing: bool,
    pub total_replicas: i32,
    pub available_replicas: i32,
    pub ready_replicas: i32,
    pub unavailable_replicas: i32,
}

/// Checks that a Deployment with the given name exists in the namespace.
pub fn deployment_exists(
    sink: &dyn ReportSink,
    client: &TestKubeClient,
    name: &str,
    namespace: &str,
) -> Result<(), CheckError> {
    let deployment: Deployment = client.get(name, namespace)?;
    let actual_name = deployment.metadata.name.unwrap_or_default();

    check_eq(
        sink,
        "Deployment exists with the expected name.",
        "Deployment does not exist with the expected name.",
        name,
        actual_name.as_str(),
    );

    Ok(())
}

/// Checks that the namespace contains the expected number of Deployments.
pub fn deployment_count(
    sink: &dyn ReportSink,
    client: &TestKubeClient,
    namespace: &str,
    expected_count: usize,
) -> Result<(), CheckError> {
    let deployments = client.list::<Deployment>(namespace)?;
    check_count(
        sink,
        "Deployment",
        namespace,
        expected_count,
        deployments.items.len(),
    );
    Ok(())
}

/// Checks that a Deployment is rolled out as expected.
///
/// The sub-checks are reported in a fixed order: the Available condition,
/// the Progressing condition, then the total, available, ready and
/// unavailable replica counts. Each sub-check reports independently, so
/// a single mismatch still leaves the other five outcomes in the sink.
pub fn deployment_status_check(
    sink: &dyn ReportSink,
    client: &TestKubeClient,
    name: &str,
    namespace: &str,
    expected: &DeploymentStatusExpectation,
) -> Result<(), CheckError> {
    let deployment: Deployment = client.get(name, namespace)?;
    check_deployment_status(sink, &deployment, expected);
    Ok(())
}

/// Checks the rollout status of an already fetched Deployment.
pub fn check_deployment_status(
    sink: &dyn ReportSink,
    deployment: &Deployment,
    expected: &DeploymentStatusExpectation,
) {
    let conditions = get_deployment_conditions(deployment);

    condition_status_met(sink, &conditions, "Available", status_text(expected.available));
    condition_status_met(
        sink,
        &conditions,
        "Progressing",
        status_text(expected.progressing),
    );

    let status = deployment.status.as_ref();

    // Absent replica counts denote zero replicas.
    let total_replicas = status.and_then(|status| status.replicas).unwrap_or(0);
    replica_count_as_expected(
        sink,
        expected.total_replicas,
        total_replicas,
        "total number of replicas",
    );

    let available_replicas = status
        .and_then(|status| status.available_replicas)
        .unwrap_or(0);
    replica_count_as_expected(
        sink,
        expected.available_replicas,
        available_replicas,
        "number of available replicas",
    );

    let ready_replicas = status.and_then(|status| status.ready_replicas).unwrap_or(0);
    replica_count_as_expected(
        sink,
        expected.ready_replicas,
        ready_replicas,
        "number of ready replicas",
    );

    let unavailable_replicas = status
        .and_then(|status| status.unavailable_replicas)
        .unwrap_or(0);
    replica_count_as_expected(
        sink,
        expected.unavailable_replicas,
        unavailable_replicas,
        "number of unavailable replicas",
    );
}

/// Checks that the condition with the given type has the expected status.
///
/// A missing condition is reported as an assertion failure.
pub fn condition_status_met(
    sink: &dyn ReportSink,
    conditions: &[DeploymentCondition],
    condition_type: &str,
    expected_status: &str,
) {
    let condition = conditions
        .iter()
        .find(|condition| condition.type_ == condition_type);

    match condition {
        Some(condition) => check_eq(
            sink,
            &format!(
                "Deployment condition type [{}] has its expected status.",
                condition_type
            ),
            &format!(
                "Deployment condition type [{}] does not have its expected status.",
                condition_type
            ),
            expected_status,
            condition.status.as_str(),
        ),
        None => sink.fail(format!(
            "Deployment has no condition of type [{}].",
            condition_type
        )),
    }
}

/// Compares a replica count of a Deployment with its expected value.
pub fn replica_count_as_expected(
    sink: &dyn ReportSink,
    expected_replicas: i32,
    actual_replicas: i32,
    description: &str,
) {
    check_eq(
        sink,
        &format!("Deployment has the expected {}.", description),
        &format!("Deployment has an unexpected {}.", description),
        &expected_replicas,
        &actual_replicas,
    );
}

/// Returns the conditions of the given Deployment.
pub fn get_deployment_conditions(deployment: &Deployment) -> Vec<DeploymentCondition> {
    deployment
        .status
        .as_ref()
        .and_then(|status| status.conditions.clone())
        .unwrap_or_default()
}

fn status_text(status: bool) -> &'static str {
    if status {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::from_value;
    use crate::report::TestReport;
    use serde_json::json;

    fn deployment(unavailable_replicas: i32) -> Deployment {
        from_value(json!({
            "apiVersion": "apps/v1",
            "kind": "Deployment",
            "metadata": {
                "name": "web",
                "namespace": "default"
            },
            "status": {
                "conditions": [
                    { "type": "Available", "status": "True" },
                    { "type": "Progressing", "status": "False" }
                ],
                "replicas": 3,
                "availableReplicas": 3,
                "readyReplicas": 3,
                "unavailableReplicas": unavailable_replicas
            }
        }))
    }

    fn expectation() -> DeploymentStatusExpectation {
        DeploymentStatusExpectation {
            available: true,
            progressing: false,
            total_replicas: 3,
            available_replicas: 3,
            ready_replicas: 3,
            unavailable_replicas: 0,
        }
    }

    #[test]
    fn matching_status_should_emit_six_passes() {
        let report = TestReport::new();

        check_deployment_status(&report, &deployment(0), &expectation());

        assert_eq!(report.passes().len(), 6);
        assert_eq!(report.failures().len(), 0);
    }

    #[test]
    fn mismatched_unavailable_replicas_should_emit_one_failure() {
        let report = TestReport::new();

        check_deployment_status(&report, &deployment(1), &expectation());

        assert_eq!(report.passes().len(), 5);
        assert_eq!(
            report.failures(),
            vec![
                "Deployment has an unexpected number of unavailable replicas. \
                 Expected 0, got 1."
            ]
        );
    }

    #[test]
    fn absent_status_should_compare_as_zero_replicas() {
        let deployment: Deployment = from_value(json!({
            "apiVersion": "apps/v1",
            "kind": "Deployment",
            "metadata": { "name": "web" }
        }));

        let report = TestReport::new();
        replica_count_as_expected(
            &report,
            0,
            deployment
                .status
                .as_ref()
                .and_then(|status| status.replicas)
                .unwrap_or(0),
            "total number of replicas",
        );

        assert!(report.is_success());
    }

    #[test]
    fn matching_condition_status_should_pass() {
        let report = TestReport::new();

        condition_status_met(
            &report,
            &get_deployment_conditions(&deployment(0)),
            "Available",
            "True",
        );

        assert_eq!(
            report.passes(),
            vec![
                "Deployment condition type [Available] has its expected status. \
                 Expected True, got True."
            ]
        );
    }

    #[test]
    fn mismatched_condition_status_should_fail() {
        let report = TestReport::new();

        condition_status_met(
            &report,
            &get_deployment_conditions(&deployment(0)),
            "Progressing",
            "True",
        );

        assert_eq!(report.failures().len(), 1);
    }

    #[test]
    fn missing_condition_should_be_reported_as_failure() {
        let report = TestReport::new();

        condition_status_met(&report, &[], "Available", "True");

        assert_eq!(
            report.failures(),
            vec!["Deployment has no condition of type [Available]."]
        );
    }
}
