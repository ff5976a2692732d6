use std::time::Duration;

/// Timeouts for the element and page-count wait loops.
#[derive(Debug, Clone)]
pub struct WaitConfig {
    /// How long to wait for an element to become clickable.
    pub element_wait: Duration,
    /// How long to wait for the open-tab count to settle.
    pub page_count_wait: Duration,
    /// Delay between state checks inside a wait loop.
    pub check_interval: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            element_wait: Duration::from_secs(15),
            page_count_wait: Duration::from_secs(15),
            check_interval: Duration::from_millis(300),
        }
    }
}

impl WaitConfig {
    pub fn with_element_wait(mut self, wait: Duration) -> Self {
        self.element_wait = wait;
        self.page_count_wait = wait;
        self
    }
}
