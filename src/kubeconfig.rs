use std::path::{Path, PathBuf};

use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Client, Config,
};

use crate::Error;

/// Used verbatim when no home directory can be determined.
pub const FALLBACK_KUBECONFIG: &str = "~/.kube/config";

/// Returns the kubeconfig path to load: the override when one was given,
/// otherwise the default under the user's home directory.
pub fn resolve_kubeconfig(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| default_kubeconfig_path(dirs::home_dir().as_deref()))
}

pub fn default_kubeconfig_path(home: Option<&Path>) -> PathBuf {
    match home {
        Some(home) if !home.as_os_str().is_empty() => home.join(".kube").join("config"),
        _ => PathBuf::from(FALLBACK_KUBECONFIG),
    }
}

/// Loads the kubeconfig at `path` and builds a client for its current
/// context.
pub async fn connect(path: &Path) -> Result<Client, Error> {
    tracing::info!(path = %path.display(), "Loading kubeconfig");
    let kubeconfig = Kubeconfig::read_from(path).map_err(|source| Error::ReadKubeconfig {
        path: path.to_path_buf(),
        source,
    })?;

    let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(Error::Config)?;
    tracing::debug!(cluster_url = %config.cluster_url, "Resolved cluster endpoint");

    Client::try_from(config).map_err(Error::Client)
}
