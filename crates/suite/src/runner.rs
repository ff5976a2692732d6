use hubcheck_browser::{BrowserFetcher, Page, Session};
use hubcheck_core::{CheckError, CheckStep, PagePosition};
use hubcheck_poller::ConnectivityPoller;
use std::time::Duration;
use tokio::time::sleep;

use crate::config::SuiteConfig;

/// Launches a browser, polls the server until it serves real content, then
/// walks the scenario steps on the connected tab. The browser is torn down
/// whether the walk succeeds or not.
pub async fn run(cfg: &SuiteConfig, steps: &[CheckStep]) -> Result<(), CheckError> {
    let session = Session::launch(&cfg.driver, cfg.waits()).await?;
    let result = connect_and_walk(cfg, &session, steps).await;
    session.close().await;
    result
}

async fn connect_and_walk(
    cfg: &SuiteConfig,
    session: &Session,
    steps: &[CheckStep],
) -> Result<(), CheckError> {
    let fetcher = BrowserFetcher::new(session).await?;
    let poller = ConnectivityPoller::new(cfg.poll.clone(), &fetcher)?;
    poller.run().await?;
    tracing::info!("connected to notebook server");

    walk(session, fetcher.page().clone(), steps).await
}

/// Executes the steps in order against the session, starting on `entry`.
/// `FocusPage` switches which tab subsequent clicks target.
pub async fn walk(
    session: &Session,
    entry: Page,
    steps: &[CheckStep],
) -> Result<(), CheckError> {
    let mut current = entry;

    for (idx, step) in steps.iter().enumerate() {
        match step {
            CheckStep::WaitAndClick { name, locator } => {
                tracing::info!(step = idx + 1, total = steps.len(), "checking {}", name);
                session.wait_and_click(&current, locator).await?;
                tracing::info!("{} ok", name);
            }
            CheckStep::ExpectPageCount { count } => {
                session.wait_for_page_count(*count).await?;
            }
            CheckStep::FocusPage { position } => {
                let pages = session.pages().await?;
                current = match position {
                    PagePosition::First => pages.first(),
                    PagePosition::Last => pages.last(),
                }
                .cloned()
                .ok_or_else(|| CheckError::browser("no open pages to focus"))?;
            }
            CheckStep::Pause { seconds } => {
                sleep(Duration::from_secs(*seconds)).await;
            }
        }
    }

    Ok(())
}
