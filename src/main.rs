//! flwr-k8s: generate Docker and Kubernetes deployment files for Flower clients

use anyhow::Result;

fn main() -> Result<()> {
    flwr_k8s_deploy::cli::run()
}
