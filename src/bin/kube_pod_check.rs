/* KUBE POD CHECK
 *
 *  Connects to a cluster with an out-of-cluster kubeconfig, prints every pod
 *  in the default namespace, then reports whether the requested pod is
 *  running in the requested namespace.
 */

use kube_pod_check::{
    cli::{self, Args},
    connect, resolve_kubeconfig, run, Error,
};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_normalized();

    // Logs go to stderr; stdout is reserved for the report.
    // Can set log level through "RUST_LOG"
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = match args.invocation_options() {
        Ok(opts) => opts,
        Err(Error::MissingPod) => {
            eprintln!("{}", cli::MISSING_FLAGS_BANNER);
            eprint!("{}", cli::usage());
            std::process::exit(1);
        }
        Err(error) => return Err(error.into()),
    };

    let kubeconfig = resolve_kubeconfig(args.kubeconfig);
    let client = connect(&kubeconfig).await?;

    run(&client, &opts, &mut std::io::stdout()).await?;

    Ok(())
}
