use chromiumoxide::browser::{Browser, BrowserConfig as ChromeConfig, HeadlessMode};
use chromiumoxide::page::Page;
use futures::StreamExt;
use hubcheck_core::{CheckError, DriverConfig, Locator};
use serde_json::Value;
use std::time::Instant;
use tokio::time::sleep;

use crate::shared::{js, to_check_error, WaitConfig};

/// Flags the acceptance scripts have always launched Chromium with:
/// container hardening, direct (proxy-less) networking, and relaxed SSL
/// for the self-hosted environments the suite targets.
const LAUNCH_ARGS: &[&str] = &[
    "--disable-gpu",
    "--disable-extensions",
    "--proxy-server='direct://'",
    "--proxy-bypass-list=*",
    "--start-maximized",
    "--disable-infobars",
    "--ignore-ssl",
    "--disable-dev-shm-usage",
];

/// One launched Chromium instance plus the wait policy applied to every
/// element lookup made through it.
pub struct Session {
    browser: Browser,
    waits: WaitConfig,
}

impl Session {
    pub async fn launch(config: &DriverConfig, waits: WaitConfig) -> Result<Self, CheckError> {
        // Unique user-data dir per launch to avoid SingletonLock conflicts.
        let temp_dir = std::env::temp_dir().join(format!("chromium-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&temp_dir)
            .map_err(|e| CheckError::browser(format!("Failed to create temp dir: {}", e)))?;

        let chrome_cfg = ChromeConfig::builder()
            .headless_mode(if config.headless {
                HeadlessMode::True
            } else {
                HeadlessMode::False
            })
            .window_size(config.viewport_width, config.viewport_height)
            .user_data_dir(temp_dir)
            .no_sandbox()
            .args(LAUNCH_ARGS.to_vec())
            .build()
            .map_err(|e| CheckError::browser(format!("Config failed: {}", e)))?;

        let (browser, mut handler) = Browser::launch(chrome_cfg)
            .await
            .map_err(|e| CheckError::browser(format!("Launch failed: {}", e)))?;

        tokio::spawn(async move { while handler.next().await.is_some() {} });

        Ok(Self { browser, waits })
    }

    pub async fn blank_page(&self) -> Result<Page, CheckError> {
        self.browser
            .new_page("about:blank")
            .await
            .map_err(|e| CheckError::browser(format!("New page failed: {}", e)))
    }

    /// Open targets in creation order.
    pub async fn pages(&self) -> Result<Vec<Page>, CheckError> {
        self.browser
            .pages()
            .await
            .map_err(|e| CheckError::browser(format!("Page listing failed: {}", e)))
    }

    /// Waits until exactly `expected` tabs are open. New tabs take a moment
    /// to register as targets, so this polls instead of reading once.
    pub async fn wait_for_page_count(&self, expected: usize) -> Result<(), CheckError> {
        let start = Instant::now();
        loop {
            let found = self.pages().await?.len();
            if found == expected {
                return Ok(());
            }
            if start.elapsed() > self.waits.page_count_wait {
                return Err(CheckError::PageCount { expected, found });
            }
            sleep(self.waits.check_interval).await;
        }
    }

    /// Waits for the element to be present, visible and enabled, then clicks
    /// it through the in-page helper.
    pub async fn wait_and_click(&self, page: &Page, locator: &Locator) -> Result<(), CheckError> {
        self.wait_for_element(page, locator).await?;

        let click = js::locator_call(js::element::CLICK_ELEMENT, locator);
        let result = page
            .evaluate(click)
            .await
            .map_err(|e| to_check_error(e, "Click"))?;

        let clicked = result
            .value()
            .and_then(|v| v.get("success"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if !clicked {
            return Err(CheckError::element_not_found(format!(
                "{} vanished before click",
                locator
            )));
        }
        Ok(())
    }

    async fn wait_for_element(&self, page: &Page, locator: &Locator) -> Result<(), CheckError> {
        let timeout = self.waits.element_wait;
        let start = Instant::now();
        let mut last_state = String::new();

        loop {
            let check = js::locator_call(js::element::CHECK_ELEMENT_STATE, locator);

            let result = match page.evaluate(check).await {
                Ok(r) => r,
                Err(e) => {
                    let err_str = e.to_string();
                    if err_str.contains("Cannot find context")
                        || err_str.contains("Execution context was destroyed")
                    {
                        // Page is navigating, let it settle and retry.
                        sleep(self.waits.check_interval).await;
                        continue;
                    }
                    return Err(to_check_error(e, "WaitFor"));
                }
            };

            if let Some(state) = result.value().and_then(Value::as_object) {
                let exists = state.get("exists").and_then(Value::as_bool).unwrap_or(false);
                let visible = state.get("visible").and_then(Value::as_bool).unwrap_or(false);
                let disabled = state
                    .get("disabled")
                    .and_then(Value::as_bool)
                    .unwrap_or(false);

                let current = format!("exists:{} visible:{} disabled:{}", exists, visible, disabled);
                if current != last_state {
                    tracing::debug!(locator = %locator, state = %current, "element state");
                    last_state = current;
                }

                if exists && visible && !disabled {
                    return Ok(());
                }

                if start.elapsed() > timeout {
                    return Err(if !exists {
                        CheckError::element_not_found(format!(
                            "{} not found after {:?}",
                            locator, timeout
                        ))
                    } else if !visible {
                        CheckError::element_not_found(format!("{} exists but not visible", locator))
                    } else {
                        CheckError::element_not_found(format!("{} is disabled", locator))
                    });
                }
            } else if start.elapsed() > timeout {
                return Err(CheckError::timeout(format!("waiting for {}", locator)));
            }

            sleep(self.waits.check_interval).await;
        }
    }

    pub async fn close(mut self) {
        let _ = self.browser.close().await;
        let _ = self.browser.wait().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_args_carry_the_proxy_and_ssl_flags() {
        for flag in [
            "--proxy-server='direct://'",
            "--proxy-bypass-list=*",
            "--start-maximized",
            "--disable-infobars",
            "--ignore-ssl",
            "--disable-gpu",
            "--disable-dev-shm-usage",
        ] {
            assert!(LAUNCH_ARGS.contains(&flag), "missing launch flag {}", flag);
        }
    }
}
