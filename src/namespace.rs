//! Checks on Namespaces

use k8s_openapi::api::core::v1::Namespace;

use crate::client::TestKubeClient;
use crate::error::CheckError;
use crate::report::{check_that, ReportSink};

/// Checks that the cluster has an active Namespace with the given name.
pub fn namespace_is_active(
    sink: &dyn ReportSink,
    client: &TestKubeClient,
    name: &str,
) -> Result<(), CheckError> {
    let namespace: Namespace = client.get_cluster_scoped(name)?;
    check_namespace_active(sink, &namespace, name);
    Ok(())
}

/// Checks the lifecycle phase of an already fetched Namespace.
pub fn check_namespace_active(sink: &dyn ReportSink, namespace: &Namespace, name: &str) {
    let phase = namespace
        .status
        .as_ref()
        .and_then(|status| status.phase.as_deref())
        .unwrap_or("");

    check_that(
        sink,
        phase == "Active",
        format!("Cluster has an active namespace named [{}].", name),
        format!("Cluster does not have an active namespace named [{}].", name),
    );
}
