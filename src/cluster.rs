use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;
use kube::{api::ListParams, Api, Client};

/// The two read requests this tool issues against the control plane.
#[async_trait]
pub trait PodApi: Send + Sync {
    /// Lists every pod in `namespace`, in the order the server returns them.
    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>, kube::Error>;

    /// Fetches a single pod by name.
    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod, kube::Error>;
}

#[async_trait]
impl PodApi for Client {
    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>, kube::Error> {
        tracing::debug!(%namespace, "Listing pods");
        let pods = Api::<Pod>::namespaced(self.clone(), namespace);
        Ok(pods.list(&ListParams::default()).await?.items)
    }

    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod, kube::Error> {
        tracing::debug!(%namespace, %name, "Getting pod");
        Api::<Pod>::namespaced(self.clone(), namespace)
            .get(name)
            .await
    }
}
