use async_trait::async_trait;
use chromiumoxide::page::Page;
use hubcheck_core::{CheckError, PageFetcher, EMPTY_PAGE_SENTINEL};

use crate::session::Session;
use crate::shared::{is_unreachable, to_check_error};

/// Browser-backed page fetcher. Owns one tab and navigates it on every
/// fetch; the tab keeps the landing page loaded afterwards, so the
/// acceptance runner continues on it directly.
pub struct BrowserFetcher {
    page: Page,
}

impl BrowserFetcher {
    pub async fn new(session: &Session) -> Result<Self, CheckError> {
        Ok(Self {
            page: session.blank_page().await?,
        })
    }

    /// The tab this fetcher navigates.
    pub fn page(&self) -> &Page {
        &self.page
    }
}

#[async_trait]
impl PageFetcher for BrowserFetcher {
    async fn fetch(&self, url: &str) -> Result<String, CheckError> {
        if let Err(e) = self.page.goto(url).await {
            let message = e.to_string();
            // A server that is not listening yet leaves the tab on an empty
            // DOM in a real browser; report the sentinel so polling goes on.
            if is_unreachable(&message) {
                tracing::debug!(url = %url, error = %message, "server not reachable");
                return Ok(EMPTY_PAGE_SENTINEL.to_string());
            }
            return Err(to_check_error(message, "Goto"));
        }

        self.page
            .content()
            .await
            .map_err(|e| to_check_error(e, "PageSource"))
    }
}
