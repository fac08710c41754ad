use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand, ValueHint};

use crate::artifacts::ArtifactPaths;
use crate::features::FeaturePolicy;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MODEL_DIR: &str = "model";

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Heart-disease risk prediction API"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the model artifacts and serve the HTTP API (default)
    Serve(ServeArgs),
    /// Inspect the model artifacts without serving
    Check(ModelArgs),
    /// Send the reference patient to a running server
    Probe(ProbeArgs),
    /// Print the JSON Schema of the /predict request and response
    Schema,
}

#[derive(Debug, Clone, Args)]
pub struct ModelArgs {
    /// Directory holding heart_best_model.json, scaler.json and selected_features.json
    #[arg(
        long,
        default_value = DEFAULT_MODEL_DIR,
        value_name = "DIR",
        value_hint = ValueHint::DirPath
    )]
    pub model_dir: PathBuf,

    /// Feature mapping the model was trained with (one-hot, raw-numeric)
    #[arg(long, default_value = "one-hot", value_name = "POLICY", value_parser = parse_policy)]
    pub policy: FeaturePolicy,
}

impl Default for ModelArgs {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from(DEFAULT_MODEL_DIR),
            policy: FeaturePolicy::default(),
        }
    }
}

impl ModelArgs {
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::in_dir(&self.model_dir)
    }
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED), value_name = "IP")]
    pub host: IpAddr,

    /// Port to bind
    #[arg(long, default_value_t = DEFAULT_PORT, value_name = "PORT")]
    pub port: u16,

    #[command(flatten)]
    pub model: ModelArgs,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            model: ModelArgs::default(),
        }
    }
}

impl ServeArgs {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Debug, Clone, Args)]
pub struct ProbeArgs {
    /// Base URL of a running server
    #[arg(long, default_value = "http://127.0.0.1:8000", value_name = "URL", value_hint = ValueHint::Url)]
    pub url: String,

    /// Give up after this many seconds
    #[arg(
        long,
        default_value_t = 10,
        value_name = "SECONDS",
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub timeout: u64,
}

fn parse_policy(input: &str) -> Result<FeaturePolicy> {
    let normalized = input.trim().to_lowercase().replace('_', "-");
    FeaturePolicy::from_str(&normalized).map_err(|_| anyhow!("unknown policy '{input}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_default_serve() {
        let cli = Cli::try_parse_from(["heartbeat"]).unwrap();
        assert!(cli.command.is_none());

        let serve = ServeArgs::default();
        assert_eq!(serve.socket_addr().to_string(), "0.0.0.0:8000");
        assert_eq!(serve.model.policy, FeaturePolicy::OneHot);
    }

    #[test]
    fn serve_flags_parse() {
        let cli = Cli::try_parse_from([
            "heartbeat",
            "serve",
            "--port",
            "9000",
            "--host",
            "127.0.0.1",
            "--model-dir",
            "/srv/model",
            "--policy",
            "raw_numeric",
        ])
        .unwrap();

        let Some(Command::Serve(args)) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.socket_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(args.model.policy, FeaturePolicy::RawNumeric);
        assert_eq!(
            args.model.artifact_paths().model,
            PathBuf::from("/srv/model/heart_best_model.json")
        );
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(Cli::try_parse_from(["heartbeat", "check", "--policy", "scaled"]).is_err());
    }

    #[test]
    fn probe_timeout_must_be_positive() {
        assert!(Cli::try_parse_from(["heartbeat", "probe", "--timeout", "0"]).is_err());
    }
}
