use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Page source Chromium serializes for a tab whose server never answered.
/// The poller compares fetched content against this byte-for-byte; any
/// deviation (whitespace, casing, partial content) counts as "reachable".
pub const EMPTY_PAGE_SENTINEL: &str = "<html><head></head><body></body></html>";

/// How to find an element on the page. Mirrors the lookup modes the
/// acceptance scripts actually use; `LinkText` matches the trimmed text
/// content of an anchor exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locator {
    Css(String),
    Id(String),
    LinkText(String),
    XPath(String),
}

impl Locator {
    pub fn css(s: impl Into<String>) -> Self {
        Self::Css(s.into())
    }

    pub fn id(s: impl Into<String>) -> Self {
        Self::Id(s.into())
    }

    pub fn link_text(s: impl Into<String>) -> Self {
        Self::LinkText(s.into())
    }

    pub fn xpath(s: impl Into<String>) -> Self {
        Self::XPath(s.into())
    }

    /// Lookup mode tag handed to the in-page JS helpers.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Css(_) => "css",
            Self::Id(_) => "id",
            Self::LinkText(_) => "link-text",
            Self::XPath(_) => "xpath",
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Css(s) | Self::Id(s) | Self::LinkText(s) | Self::XPath(s) => s,
        }
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Css(s) => write!(f, "css '{}'", s),
            Self::Id(s) => write!(f, "id '{}'", s),
            Self::LinkText(s) => write!(f, "link text '{}'", s),
            Self::XPath(s) => write!(f, "xpath '{}'", s),
        }
    }
}

/// Which open tab a `FocusPage` step selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PagePosition {
    First,
    Last,
}

/// One step of an acceptance scenario. Scenarios are flat lists of these,
/// executed in order; the first failure ends the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CheckStep {
    /// Wait for the element to be present, visible and enabled, then click it.
    WaitAndClick { name: String, locator: Locator },
    /// Wait until exactly `count` tabs are open.
    ExpectPageCount { count: usize },
    /// Switch the current tab.
    FocusPage { position: PagePosition },
    /// Unconditional settle delay, for UI that needs time after a click.
    Pause { seconds: u64 },
}

/// Connectivity poll configuration. `wait_interval` is applied only between
/// a failed attempt and the next one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    pub base_url: String,
    pub access_token: Option<String>,
    /// The two observed acceptance variants disagree on whether a missing
    /// token is fatal, so the caller chooses explicitly.
    pub token_required: bool,
    pub max_attempts: u32,
    pub wait_interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            base_url: "http://jupyter:8888".to_string(),
            access_token: None,
            token_required: false,
            max_attempts: 5,
            wait_interval: Duration::from_secs(15),
        }
    }
}

impl PollConfig {
    pub fn validate(&self) -> Result<(), CheckError> {
        if self.base_url.is_empty() {
            return Err(CheckError::configuration("base_url must not be empty"));
        }
        if self.max_attempts == 0 {
            return Err(CheckError::configuration("max_attempts must be at least 1"));
        }
        if self.token_required && self.access_token.is_none() {
            return Err(CheckError::configuration(
                "access token is required but not configured",
            ));
        }
        Ok(())
    }
}

/// Chromium launch options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    pub headless: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        // Window size taken from the environment the suite targets.
        Self {
            headless: true,
            viewport_width: 1920,
            viewport_height: 1480,
        }
    }
}

/// Everything that can go wrong during an acceptance run.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("could not connect to {url} after {attempts} attempts")]
    RetryExhausted { url: String, attempts: u32 },
    #[error("element not found: {0}")]
    ElementNotFound(String),
    #[error("timed out: {0}")]
    Timeout(String),
    #[error("navigation failed: {0}")]
    Navigation(String),
    #[error("script evaluation failed: {0}")]
    Script(String),
    #[error("browser error: {0}")]
    Browser(String),
    #[error("expected {expected} open page(s), found {found}")]
    PageCount { expected: usize, found: usize },
}

impl CheckError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn element_not_found(message: impl Into<String>) -> Self {
        Self::ElementNotFound(message.into())
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(message.into())
    }

    pub fn navigation(message: impl Into<String>) -> Self {
        Self::Navigation(message.into())
    }

    pub fn script(message: impl Into<String>) -> Self {
        Self::Script(message.into())
    }

    pub fn browser(message: impl Into<String>) -> Self {
        Self::Browser(message.into())
    }
}

/// External page-fetching capability the poller drives. Implementations are
/// expected to be synchronous from the poller's point of view: one call, one
/// page source. The poller neither retries nor times out a single fetch;
/// errors propagate to the caller unchanged.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, CheckError>;
}
