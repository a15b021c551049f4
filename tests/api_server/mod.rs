//! Minimal stand-in for the Kubernetes API: serves the pod list and pod get
//! endpoints over plain HTTP and records every request path.

use std::{
    io::Write,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

struct Cluster {
    pods: Vec<(String, String, String)>,
    requests: Mutex<Vec<String>>,
}

impl Cluster {
    fn record(&self, uri: &Uri) {
        self.requests.lock().unwrap().push(uri.path().to_string());
    }

    fn pod(&self, namespace: &str, name: &str) -> Option<Value> {
        self.pods
            .iter()
            .find(|(ns, n, _)| ns == namespace && n == name)
            .map(pod_json)
    }
}

pub struct ApiServer {
    url: String,
    cluster: Arc<Cluster>,
}

impl ApiServer {
    /// Starts serving `(namespace, name, phase)` pods on an ephemeral port.
    pub async fn start(pods: &[(&str, &str, &str)]) -> ApiServer {
        let cluster = Arc::new(Cluster {
            pods: pods
                .iter()
                .map(|(ns, name, phase)| (ns.to_string(), name.to_string(), phase.to_string()))
                .collect(),
            requests: Mutex::new(vec![]),
        });

        let app = Router::new()
            .route("/api/v1/namespaces/:namespace/pods", get(list_pods))
            .route("/api/v1/namespaces/:namespace/pods/:name", get(get_pod))
            .with_state(cluster.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub api server");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve stub api server");
        });

        ApiServer {
            url: format!("http://{addr}"),
            cluster,
        }
    }

    /// Writes a kubeconfig whose current context points at this server.
    pub fn kubeconfig(&self) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp kubeconfig");
        write!(
            file,
            r#"apiVersion: v1
kind: Config
clusters:
- name: stub
  cluster:
    server: {}
users:
- name: stub
  user:
    token: stub-token
contexts:
- name: stub
  context:
    cluster: stub
    user: stub
current-context: stub
"#,
            self.url
        )
        .expect("write kubeconfig");
        file
    }

    /// Request paths in arrival order, without query strings.
    pub fn requests(&self) -> Vec<String> {
        self.cluster.requests.lock().unwrap().clone()
    }
}

fn pod_json((namespace, name, phase): &(String, String, String)) -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": { "name": name, "namespace": namespace },
        "status": { "phase": phase },
    })
}

async fn list_pods(
    State(cluster): State<Arc<Cluster>>,
    Path(namespace): Path<String>,
    uri: Uri,
) -> Json<Value> {
    cluster.record(&uri);
    let items = cluster
        .pods
        .iter()
        .filter(|(ns, _, _)| *ns == namespace)
        .map(pod_json)
        .collect::<Vec<_>>();
    Json(json!({
        "apiVersion": "v1",
        "kind": "PodList",
        "metadata": { "resourceVersion": "1" },
        "items": items,
    }))
}

async fn get_pod(
    State(cluster): State<Arc<Cluster>>,
    Path((namespace, name)): Path<(String, String)>,
    uri: Uri,
) -> Response {
    cluster.record(&uri);
    match cluster.pod(&namespace, &name) {
        Some(pod) => Json(pod).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "apiVersion": "v1",
                "kind": "Status",
                "metadata": {},
                "status": "Failure",
                "message": format!("pods \"{name}\" not found"),
                "reason": "NotFound",
                "details": { "name": name, "kind": "pods" },
                "code": 404,
            })),
        )
            .into_response(),
    }
}
