//! Checks on Services

use k8s_openapi::api::core::v1::Service;

use crate::client::TestKubeClient;
use crate::error::CheckError;
use crate::report::{check_count, check_eq, ReportSink};

/// Checks that the namespace contains the expected number of Services.
pub fn service_count(
    sink: &dyn ReportSink,
    client: &TestKubeClient,
    namespace: &str,
    expected_count: usize,
) -> Result<(), CheckError> {
    let services = client.list::<Service>(namespace)?;
    check_count(
        sink,
        "Service",
        namespace,
        expected_count,
        services.items.len(),
    );
    Ok(())
}

/// Checks that the Service with the given name has the expected type,
/// e.g. `ClusterIP`, `NodePort` or `LoadBalancer`.
pub fn service_has_type(
    sink: &dyn ReportSink,
    client: &TestKubeClient,
    name: &str,
    namespace: &str,
    expected_type: &str,
) -> Result<(), CheckError> {
    let service: Service = client.get(name, namespace)?;
    check_service_type(sink, &service, name, expected_type);
    Ok(())
}

/// Checks the declared type of an already fetched Service.
pub fn check_service_type(
    sink: &dyn ReportSink,
    service: &Service,
    name: &str,
    expected_type: &str,
) {
    let actual_type = service
        .spec
        .as_ref()
        .and_then(|spec| spec.type_.as_deref())
        .unwrap_or("");

    check_eq(
        sink,
        &format!("Service [{}] exists with the expected type.", name),
        &format!("Service [{}] does not exist with the expected type.", name),
        expected_type,
        actual_type,
    );
}
