//! Checks on Ingresses

use k8s_openapi::api::networking::v1::Ingress;

use crate::client::TestKubeClient;
use crate::error::CheckError;
use crate::report::{check_count, check_eq, ReportSink};

/// Checks that the namespace contains the expected number of Ingresses.
pub fn ingress_count(
    sink: &dyn ReportSink,
    client: &TestKubeClient,
    namespace: &str,
    expected_count: usize,
) -> Result<(), CheckError> {
    let ingresses = client.list::<Ingress>(namespace)?;
    check_count(
        sink,
        "Ingress",
        namespace,
        expected_count,
        ingresses.items.len(),
    );
    Ok(())
}

/// Checks that an Ingress with the given name exists in the namespace.
pub fn ingress_exists(
    sink: &dyn ReportSink,
    client: &TestKubeClient,
    name: &str,
    namespace: &str,
) -> Result<(), CheckError> {
    let ingress: Ingress = client.get(name, namespace)?;
    let actual_name = ingress.metadata.name.unwrap_or_default();

    check_eq(
        sink,
        "Ingress exists with the expected name.",
        "Ingress does not exist with the expected name.",
        name,
        actual_name.as_str(),
    );

    Ok(())
}
