use hubcheck_core::{CheckError, PageFetcher, PollConfig, EMPTY_PAGE_SENTINEL};
use tokio::time::sleep;

/// Counter for one connectivity check. Created fresh per check, advanced in
/// place until the fetched page stops matching the sentinel or the budget
/// runs out, then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollAttempt {
    pub index: u32,
    pub max_attempts: u32,
}

impl PollAttempt {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            index: 0,
            max_attempts,
        }
    }

    pub fn advance(&mut self) {
        self.index += 1;
    }

    pub fn exhausted(&self) -> bool {
        self.index >= self.max_attempts
    }
}

/// Repeatedly loads the target URL through a [`PageFetcher`] until the
/// returned content differs from [`EMPTY_PAGE_SENTINEL`] or the attempt
/// budget is exhausted. One fetch at a time; the wait interval runs only
/// between a sentinel result and the next attempt.
///
/// Fetcher errors are not caught here. A hang in the fetcher hangs the
/// poller; callers wanting a hard deadline should wrap the fetcher with
/// their own timeout.
pub struct ConnectivityPoller<'a> {
    config: PollConfig,
    fetcher: &'a dyn PageFetcher,
}

impl<'a> ConnectivityPoller<'a> {
    pub fn new(config: PollConfig, fetcher: &'a dyn PageFetcher) -> Result<Self, CheckError> {
        config.validate()?;
        Ok(Self { config, fetcher })
    }

    /// URL each attempt loads: `base_url` unchanged, or with the access
    /// token appended as a query parameter when one is configured.
    pub fn request_url(&self) -> String {
        match &self.config.access_token {
            Some(token) => format!("{}?token={}", self.config.base_url, token),
            None => self.config.base_url.clone(),
        }
    }

    /// Runs the poll loop to completion, returning the first non-sentinel
    /// page source. The comparison is exact: a page that deviates from the
    /// sentinel in any byte counts as reachable, even if otherwise broken.
    pub async fn run(&self) -> Result<String, CheckError> {
        let url = self.request_url();
        let mut attempt = PollAttempt::new(self.config.max_attempts);

        loop {
            tracing::info!(url = %url, attempt = attempt.index + 1, "polling notebook server");
            let content = self.fetcher.fetch(&url).await?;

            if content != EMPTY_PAGE_SENTINEL {
                tracing::info!(url = %url, attempts = attempt.index + 1, "server is up");
                return Ok(content);
            }

            attempt.advance();
            if attempt.exhausted() {
                return Err(CheckError::RetryExhausted {
                    url,
                    attempts: attempt.index,
                });
            }

            tracing::info!(
                url = %url,
                retries = attempt.index,
                "could not connect to server yet"
            );
            tracing::debug!(
                content_len = content.len(),
                content = %content,
                "page source still matches the empty sentinel"
            );
            sleep(self.config.wait_interval).await;
        }
    }
}
