//! Acceptance check for the RStudio variant: polls the notebook server,
//! launches RStudio from the tree, opens and knits the bundled Rmd file,
//! then shuts the server down. Exits non-zero on any failure.

use hubcheck_suite::{logging, runner, scenarios, SuiteConfig};

#[tokio::main]
async fn main() {
    let _guard = logging::init();

    // This variant refuses to run without JUPYTER_TOKEN.
    let cfg = match SuiteConfig::from_env(true) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = runner::run(&cfg, &scenarios::rstudio(cfg.wait_secs)).await {
        tracing::error!(error = %e, "failed rstudio acceptance check");
        std::process::exit(1);
    }

    tracing::info!("ui checks all pass");
}
