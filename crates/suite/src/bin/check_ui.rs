//! Acceptance check for the hosted Jupyter notebook environment: polls the
//! server, then walks the notebook UI from cluster-status link to shutdown.
//! Meant to run under docker compose; exits non-zero on any failure.

use hubcheck_suite::{logging, runner, scenarios, SuiteConfig};

#[tokio::main]
async fn main() {
    let _guard = logging::init();

    // This variant tolerates a missing token and polls the bare URL.
    let cfg = match SuiteConfig::from_env(false) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = runner::run(&cfg, &scenarios::jupyter_notebook()).await {
        tracing::error!(error = %e, "failed ui acceptance check");
        std::process::exit(1);
    }

    tracing::info!("ui checks all pass");
}
