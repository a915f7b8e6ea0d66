//! Checks which can be exercised without a running cluster

use kube_test_assertions::prelude::*;

fn web_deployment() -> Deployment {
    from_value(json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": {
            "name": "web",
            "namespace": "production",
            "annotations": {
                "app.kubernetes.io/managed-by": "helm",
                "app.kubernetes.io/version": "1.2.3"
            }
        },
        "status": {
            "conditions": [
                { "type": "Available", "status": "True" },
                { "type": "Progressing", "status": "False" }
            ],
            "replicas": 3,
            "availableReplicas": 3,
            "readyReplicas": 3,
            "unavailableReplicas": 0
        }
    }))
}

#[test]
fn deployment_status_checks_should_be_reported_in_a_fixed_order() {
    let report = TestReport::new();

    check_deployment_status(
        &report,
        &web_deployment(),
        &DeploymentStatusExpectation {
            available: true,
            progressing: false,
            total_replicas: 3,
            available_replicas: 3,
            ready_replicas: 3,
            unavailable_replicas: 0,
        },
    );

    let passes = report.passes();
    assert_eq!(passes.len(), 6);
    assert!(passes[0].contains("condition type [Available]"));
    assert!(passes[1].contains("condition type [Progressing]"));
    assert!(passes[2].contains("total number of replicas"));
    assert!(passes[3].contains("number of available replicas"));
    assert!(passes[4].contains("number of ready replicas"));
    assert!(passes[5].contains("number of unavailable replicas"));

    report.assert_success();
}

#[test]
#[should_panic(expected = "number of unavailable replicas")]
fn mismatched_deployment_status_should_fail_the_test() {
    let report = TestReport::new();

    check_deployment_status(
        &report,
        &web_deployment(),
        &DeploymentStatusExpectation {
            available: true,
            progressing: false,
            total_replicas: 3,
            available_replicas: 3,
            ready_replicas: 3,
            unavailable_replicas: 1,
        },
    );

    assert_eq!(report.passes().len(), 5);
    assert_eq!(report.failures().len(), 1);

    report.assert_success();
}

#[test]
fn annotations_of_a_fetched_resource_can_be_checked() {
    let deployment = web_deployment();
    let annotations = deployment.metadata.annotations.unwrap_or_default();

    let report = TestReport::new();

    annotation_equals(
        &report,
        &annotations,
        "app.kubernetes.io/managed-by",
        "helm",
    );
    annotation_matches_pattern(
        &report,
        &annotations,
        "app.kubernetes.io/version",
        r"^\d+\.\d+\.\d+$",
    )
    .expect("pattern should be valid");

    assert_eq!(report.passes().len(), 2);
    report.assert_success();
}

#[test]
fn namespace_phase_other_than_active_should_fail() {
    let namespace: Namespace = from_value(json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": { "name": "staging" },
        "status": { "phase": "Terminating" }
    }));

    let report = TestReport::new();
    check_namespace_active(&report, &namespace, "staging");

    assert!(!report.is_success());
}
