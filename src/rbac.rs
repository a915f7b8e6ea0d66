//! Existence checks on access-control objects
//!
//! ServiceAccounts, Roles and RoleBindings are namespaced; ClusterRoles
//! and ClusterRoleBindings are cluster-scoped. All of them are considered
//! existent if their creation timestamp precedes the current instant.

use std::fmt::Debug;

use k8s_openapi::api::core::v1::ServiceAccount;
use k8s_openapi::api::rbac::v1::{ClusterRole, ClusterRoleBinding, Role, RoleBinding};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::jiff::Timestamp;
use kube::core::NamespaceResourceScope;
use kube::Resource;
use serde::de::DeserializeOwned;

use crate::client::{kind, TestKubeClient};
use crate::error::CheckError;
use crate::report::{check_that, ReportSink};

/// Checks that a ServiceAccount with the given name exists in the namespace.
pub fn service_account_exists(
    sink: &dyn ReportSink,
    client: &TestKubeClient,
    name: &str,
    namespace: &str,
) -> Result<(), CheckError> {
    namespaced_object_exists::<ServiceAccount>(sink, client, name, namespace)
}

/// Checks that a Role with the given name exists in the namespace.
pub fn role_exists(
    sink: &dyn ReportSink,
    client: &TestKubeClient,
    name: &str,
    namespace: &str,
) -> Result<(), CheckError> {
    namespaced_object_exists::<Role>(sink, client, name, namespace)
}

/// Checks that a RoleBinding with the given name exists in the namespace.
pub fn role_binding_exists(
    sink: &dyn ReportSink,
    client: &TestKubeClient,
    name: &str,
    namespace: &str,
) -> Result<(), CheckError> {
    namespaced_object_exists::<RoleBinding>(sink, client, name, namespace)
}

/// Checks that a ClusterRole with the given name exists.
pub fn cluster_role_exists(
    sink: &dyn ReportSink,
    client: &TestKubeClient,
    name: &str,
) -> Result<(), CheckError> {
    cluster_scoped_object_exists::<ClusterRole>(sink, client, name)
}

/// Checks that a ClusterRoleBinding with the given name exists.
pub fn cluster_role_binding_exists(
    sink: &dyn ReportSink,
    client: &TestKubeClient,
    name: &str,
) -> Result<(), CheckError> {
    cluster_scoped_object_exists::<ClusterRoleBinding>(sink, client, name)
}

fn namespaced_object_exists<K>(
    sink: &dyn ReportSink,
    client: &TestKubeClient,
    name: &str,
    namespace: &str,
) -> Result<(), CheckError>
where
    K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
    K::DynamicType: Default,
{
    let resource: K = client.get(name, namespace)?;

    check_that(
        sink,
        created_before_now(resource.meta()),
        format!(
            "A {} named [{}] exists in the [{}] namespace.",
            kind::<K>(),
            name,
            namespace
        ),
        format!(
            "A {} named [{}] does not exist in the [{}] namespace.",
            kind::<K>(),
            name,
            namespace
        ),
    );

    Ok(())
}

fn cluster_scoped_object_exists<K>(
    sink: &dyn ReportSink,
    client: &TestKubeClient,
    name: &str,
) -> Result<(), CheckError>
where
    K: Resource + Clone + DeserializeOwned + Debug,
    K::DynamicType: Default,
{
    let resource: K = client.get_cluster_scoped(name)?;

    check_that(
        sink,
        created_before_now(resource.meta()),
        format!("A {} named [{}] exists.", kind::<K>(), name),
        format!("A {} named [{}] does not exist.", kind::<K>(), name),
    );

    Ok(())
}

fn created_before_now(meta: &ObjectMeta) -> bool {
    meta.creation_timestamp
        .as_ref()
        .map(|timestamp| timestamp.0 < Timestamp::now())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
    use k8s_openapi::jiff::ToSpan;

    fn metadata_created_at(timestamp: Option<Time>) -> ObjectMeta {
        ObjectMeta {
            name: Some(String::from("test-account")),
            creation_timestamp: timestamp,
            ..ObjectMeta::default()
        }
    }

    #[test]
    fn past_creation_timestamp_should_count_as_existent() {
        let meta = metadata_created_at(Some(Time(Timestamp::now() - 5.minutes())));
        assert!(created_before_now(&meta));
    }

    #[test]
    fn future_creation_timestamp_should_not_count_as_existent() {
        let meta = metadata_created_at(Some(Time(Timestamp::now() + 1.hour())));
        assert!(!created_before_now(&meta));
    }

    #[test]
    fn missing_creation_timestamp_should_not_count_as_existent() {
        let meta = metadata_created_at(None);
        assert!(!created_before_now(&meta));
    }
}
