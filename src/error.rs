use std::path::PathBuf;

use kube::config::KubeconfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing required flag: -pod")]
    MissingPod,

    #[error("Failed to read kubeconfig {}", .path.display())]
    ReadKubeconfig {
        path: PathBuf,
        #[source]
        source: KubeconfigError,
    },

    #[error("Failed to build client config")]
    Config(#[source] KubeconfigError),

    #[error("Failed to create cluster client")]
    Client(#[source] kube::Error),

    #[error("Failed to list pods in namespace {namespace}")]
    ListPods {
        namespace: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to write output")]
    Output(#[from] std::io::Error),
}
