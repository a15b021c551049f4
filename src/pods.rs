use std::{fmt, io::Write};

use k8s_openapi::api::core::v1::Pod;
use kube::ResourceExt;

use crate::{cluster::PodApi, Error};

/// Namespace whose pods are always listed, regardless of `-namespace`.
pub const LIST_NAMESPACE: &str = "default";

pub const DEFAULT_NAMESPACE: &str = "default";

/// Lifecycle phase reported in a pod's status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PodPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown,
}

impl PodPhase {
    /// Phases are matched exactly; anything unrecognised, or no phase at all,
    /// is `Unknown`.
    pub fn from_status(pod: &Pod) -> Self {
        match pod.status.as_ref().and_then(|s| s.phase.as_deref()) {
            Some("Pending") => Self::Pending,
            Some("Running") => Self::Running,
            Some("Succeeded") => Self::Succeeded,
            Some("Failed") => Self::Failed,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Running => "Running",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PodPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PodSummary {
    pub name: String,
    pub phase: PodPhase,
}

impl From<&Pod> for PodSummary {
    fn from(pod: &Pod) -> Self {
        Self {
            name: pod.name_any(),
            phase: PodPhase::from_status(pod),
        }
    }
}

/// Which pod to check, and where.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvocationOptions {
    namespace: String,
    pod: String,
}

impl InvocationOptions {
    pub fn new(namespace: impl Into<String>, pod: impl Into<String>) -> Result<Self, Error> {
        let pod = pod.into();
        if pod.is_empty() {
            return Err(Error::MissingPod);
        }
        Ok(Self {
            namespace: namespace.into(),
            pod,
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn pod(&self) -> &str {
        &self.pod
    }
}

/// Lists the pods in `namespace` and writes one `<name> <phase>` line per pod
/// to `out`, in server order.
pub async fn list_pods<C, W>(
    client: &C,
    namespace: &str,
    out: &mut W,
) -> Result<Vec<PodSummary>, Error>
where
    C: PodApi + ?Sized,
    W: Write,
{
    let pods = client
        .list_pods(namespace)
        .await
        .map_err(|source| Error::ListPods {
            namespace: namespace.to_string(),
            source,
        })?;

    let summaries = pods.iter().map(PodSummary::from).collect::<Vec<_>>();
    for pod in &summaries {
        writeln!(out, "{} {}", pod.name, pod.phase)?;
    }
    Ok(summaries)
}

/// Returns whether the pod exists and is in the `Running` phase.
///
/// A failed lookup is not an error: a single diagnostic line is written to
/// `out` and the pod is reported as not running. `Err` is returned only when
/// `out` cannot be written.
pub async fn is_pod_running<C, W>(
    client: &C,
    opts: &InvocationOptions,
    out: &mut W,
) -> Result<bool, Error>
where
    C: PodApi + ?Sized,
    W: Write,
{
    match client.get_pod(opts.namespace(), opts.pod()).await {
        Ok(pod) => Ok(PodPhase::from_status(&pod) == PodPhase::Running),
        Err(error) => {
            tracing::debug!(
                %error,
                pod = %opts.pod(),
                namespace = %opts.namespace(),
                "Failed to get pod"
            );
            writeln!(
                out,
                "Pod {} not found in namespace {}, request failed:{}",
                opts.pod(),
                opts.namespace(),
                error
            )?;
            Ok(false)
        }
    }
}

/// Writes the final `Pod <name> is [not ]running in namespace <ns>` line.
pub fn write_status<W: Write>(
    out: &mut W,
    opts: &InvocationOptions,
    running: bool,
) -> Result<(), Error> {
    let state = if running { "is running" } else { "is not running" };
    writeln!(out, "Pod {} {state} in namespace {}", opts.pod(), opts.namespace())?;
    Ok(())
}

/// Lists [`LIST_NAMESPACE`], checks the requested pod and writes the status
/// line. Only a failed list is an error.
pub async fn run<C, W>(
    client: &C,
    opts: &InvocationOptions,
    out: &mut W,
) -> Result<(), Error>
where
    C: PodApi + ?Sized,
    W: Write,
{
    list_pods(client, LIST_NAMESPACE, &mut *out).await?;
    let running = is_pod_running(client, opts, &mut *out).await?;
    write_status(out, opts, running)
}
