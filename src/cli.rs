use std::{ffi::OsString, path::PathBuf};

use clap::{Command, CommandFactory, FromArgMatches, Parser};

use crate::{pods::DEFAULT_NAMESPACE, resolve_kubeconfig, Error, InvocationOptions};

pub const MISSING_FLAGS_BANNER: &str =
    "Fatal error,missing some variables with empty default values:";

/// Long flags that may also be spelled with a single dash (`-pod web`).
const SINGLE_DASH_FLAGS: &[&str] = &["kubeconfig", "namespace", "pod", "help"];

#[derive(Debug, Parser)]
#[clap(
    name = "kube-pod-check",
    about = "Lists pods in the default namespace and reports whether a pod is running",
    version
)]
pub struct Args {
    /// (optional) absolute path to the kubeconfig file
    #[clap(long, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// namespace of the pod
    #[clap(long, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// pod name(required)
    #[clap(long)]
    pub pod: Option<String>,
}

impl Args {
    /// Parses process arguments, accepting single-dash long flags.
    pub fn parse_normalized() -> Self {
        let matches = command().get_matches_from(normalize_args(std::env::args_os()));
        Self::from_arg_matches(&matches).unwrap_or_else(|error| error.exit())
    }

    pub fn invocation_options(&self) -> Result<InvocationOptions, Error> {
        InvocationOptions::new(
            self.namespace.clone(),
            self.pod.clone().unwrap_or_default(),
        )
    }
}

/// The clap command, with the kubeconfig help showing the path that will be
/// used when the flag is omitted.
pub fn command() -> Command {
    let default = resolve_kubeconfig(None);
    Args::command().mut_arg("kubeconfig", |arg| {
        arg.help(format!(
            "(optional) absolute path to the kubeconfig file [default: {}]",
            default.display()
        ))
    })
}

pub fn usage() -> String {
    command().render_help().to_string()
}

/// Rewrites `-pod`, `-pod=x` and friends to their `--` form. Flag values and
/// everything after a bare `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expect_value = false;
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        if std::mem::take(&mut expect_value) {
            normalized.push(arg);
            continue;
        }
        let Some(s) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };
        if s == "--" {
            normalized.push(arg);
            normalized.extend(args.by_ref());
            break;
        }

        let long = s
            .strip_prefix("--")
            .or_else(|| s.strip_prefix('-'))
            .filter(|_| s.len() > 1);
        match long {
            Some(rest) => {
                let (name, inline_value) = match rest.split_once('=') {
                    Some((name, _)) => (name, true),
                    None => (rest, false),
                };
                if SINGLE_DASH_FLAGS.contains(&name) {
                    expect_value = name != "help" && !inline_value;
                    normalized.push(format!("--{rest}").into());
                } else {
                    normalized.push(arg);
                }
            }
            None => normalized.push(arg),
        }
    }
    normalized
}
