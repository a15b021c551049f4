pub mod cli;
pub mod cluster;
pub mod error;
pub mod kubeconfig;
pub mod pods;

pub use cluster::PodApi;
pub use error::Error;
pub use kubeconfig::{connect, default_kubeconfig_path, resolve_kubeconfig};
pub use pods::{
    is_pod_running, list_pods, run, write_status, InvocationOptions, PodPhase, PodSummary,
    LIST_NAMESPACE,
};
