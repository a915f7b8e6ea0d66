//! Clients for interacting with the Kubernetes API
//!
//! These clients simplify testing.

use std::fmt::Debug;

use anyhow::Result;
use kube::api::{Api, ListParams, ObjectList};
use kube::core::NamespaceResourceScope;
use kube::{Client, Resource};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::runtime::Runtime;

use crate::error::CheckError;

/// A client for interacting with the Kubernetes API
///
/// [`TestKubeClient`] is a synchronous version of [`KubeClient`] which
/// reduces the verbosity of test cases. Fetch errors are returned as
/// [`CheckError`] values so that the calling test can decide whether to
/// abort or continue.
pub struct TestKubeClient {
    runtime: Runtime,
    kube_client: KubeClient,
}

impl TestKubeClient {
    /// Creates a [`TestKubeClient`].
    pub fn new() -> TestKubeClient {
        let runtime = Runtime::new().expect("Tokio runtime could not be created");
        let kube_client = runtime.block_on(async {
            KubeClient::new()
                .await
                .expect("Kubernetes client could not be created")
        });
        TestKubeClient {
            runtime,
            kube_client,
        }
    }

    /// Fetches a namespaced resource by name.
    pub fn get<K>(&self, name: &str, namespace: &str) -> Result<K, CheckError>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        K::DynamicType: Default,
    {
        self.runtime
            .block_on(async { self.kube_client.get(name, namespace).await })
    }

    /// Fetches a cluster-scoped resource by name.
    pub fn get_cluster_scoped<K>(&self, name: &str) -> Result<K, CheckError>
    where
        K: Resource + Clone + DeserializeOwned + Debug,
        K::DynamicType: Default,
    {
        self.runtime
            .block_on(async { self.kube_client.get_cluster_scoped(name).await })
    }

    /// Lists all resources of the given kind in a namespace.
    pub fn list<K>(&self, namespace: &str) -> Result<ObjectList<K>, CheckError>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        K::DynamicType: Default,
    {
        self.runtime
            .block_on(async { self.kube_client.list(namespace).await })
    }
}

impl Default for TestKubeClient {
    fn default() -> Self {
        TestKubeClient::new()
    }
}

/// A client for interacting with the Kubernetes API
///
/// [`KubeClient`] wraps a [`Client`][kube::Client]. It provides get and
/// list operations over the resource kinds which the assertion helpers
/// inspect.
pub struct KubeClient {
    client: Client,
}

impl KubeClient {
    /// Creates a [`KubeClient`] from the default configuration.
    pub async fn new() -> Result<KubeClient> {
        let client = Client::try_default().await?;
        Ok(KubeClient { client })
    }

    /// Fetches a namespaced resource by name.
    pub async fn get<K>(&self, name: &str, namespace: &str) -> Result<K, CheckError>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        K::DynamicType: Default,
    {
        tracing::debug!("Fetching {} [{}] in namespace [{}]", kind::<K>(), name, namespace);

        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);
        api.get(name).await.map_err(|source| CheckError::Fetch {
            kind: kind::<K>(),
            name: name.to_owned(),
            namespace: Some(namespace.to_owned()),
            source,
        })
    }

    /// Fetches a cluster-scoped resource by name.
    pub async fn get_cluster_scoped<K>(&self, name: &str) -> Result<K, CheckError>
    where
        K: Resource + Clone + DeserializeOwned + Debug,
        K::DynamicType: Default,
    {
        tracing::debug!("Fetching {} [{}]", kind::<K>(), name);

        let api: Api<K> = Api::all(self.client.clone());
        api.get(name).await.map_err(|source| CheckError::Fetch {
            kind: kind::<K>(),
            name: name.to_owned(),
            namespace: None,
            source,
        })
    }

    /// Lists all resources of the given kind in a namespace.
    pub async fn list<K>(&self, namespace: &str) -> Result<ObjectList<K>, CheckError>
    where
        K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        K::DynamicType: Default,
    {
        tracing::debug!("Listing {} objects in namespace [{}]", kind::<K>(), namespace);

        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);
        api.list(&ListParams::default())
            .await
            .map_err(|source| CheckError::List {
                kind: kind::<K>(),
                namespace: namespace.to_owned(),
                source,
            })
    }
}

/// Returns the kind of the given resource type.
pub(crate) fn kind<K>() -> String
where
    K: Resource,
    K::DynamicType: Default,
{
    K::kind(&K::DynamicType::default()).into_owned()
}

/// Deserializes the given JSON value into the desired type.
pub fn from_value<T>(value: Value) -> T
where
    T: DeserializeOwned,
{
    T::deserialize(value).expect("Deserialization failed")
}

/// Deserializes the given YAML text into the desired type.
pub fn from_yaml<T>(yaml: &str) -> T
where
    T: DeserializeOwned,
{
    serde_yaml::from_str(yaml).expect("String is not a well-formed YAML")
}
