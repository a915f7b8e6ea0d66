pub use crate::annotations::*;
pub use crate::client::{from_value, from_yaml, KubeClient, TestKubeClient};
pub use crate::deployment::*;
pub use crate::error::CheckError;
pub use crate::ingress::*;
pub use crate::namespace::*;
pub use crate::rbac::*;
pub use crate::report::{check_count, check_eq, check_that, ReportSink, TestReport};
pub use crate::service::*;

pub use k8s_openapi::api::apps::v1::{Deployment, DeploymentCondition};
pub use k8s_openapi::api::core::v1::{Namespace, Service, ServiceAccount};
pub use k8s_openapi::api::networking::v1::Ingress;
pub use k8s_openapi::api::rbac::v1::{ClusterRole, ClusterRoleBinding, Role, RoleBinding};
pub use serde_json::json;
