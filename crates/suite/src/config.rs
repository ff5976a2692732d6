use hubcheck_browser::WaitConfig;
use hubcheck_core::{CheckError, DriverConfig, PollConfig};
use std::str::FromStr;
use std::time::Duration;

/// Everything a check binary needs, assembled from the environment.
///
/// `WAIT_TIME` doubles as the poll interval and the element-wait timeout,
/// matching how the suite has always been configured.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub poll: PollConfig,
    pub driver: DriverConfig,
    pub wait_secs: u64,
}

impl SuiteConfig {
    pub fn from_env(token_required: bool) -> Result<Self, CheckError> {
        Self::from_lookup(token_required, |key| std::env::var(key).ok())
    }

    /// Environment lookup is injected so tests can run without touching
    /// process-global state.
    pub fn from_lookup(
        token_required: bool,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CheckError> {
        let wait_secs: u64 = parse_or(&var, "WAIT_TIME", 15)?;
        let max_attempts: u32 = parse_or(&var, "MAX_RETRIES", 5)?;
        let service = var("SERVICE_NAME").unwrap_or_else(|| "jupyter".to_string());
        let access_token = var("JUPYTER_TOKEN").filter(|t| !t.is_empty());

        let poll = PollConfig {
            base_url: format!("http://{}:8888", service),
            access_token,
            token_required,
            max_attempts,
            wait_interval: Duration::from_secs(wait_secs),
        };
        poll.validate()?;

        Ok(Self {
            poll,
            driver: DriverConfig::default(),
            wait_secs,
        })
    }

    pub fn waits(&self) -> WaitConfig {
        WaitConfig::default().with_element_wait(Duration::from_secs(self.wait_secs))
    }
}

fn parse_or<T: FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, CheckError>
where
    T::Err: std::fmt::Display,
{
    match var(key) {
        Some(raw) => raw
            .parse()
            .map_err(|e| CheckError::configuration(format!("{}={:?}: {}", key, raw, e))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_match_the_suite_conventions() {
        let cfg = SuiteConfig::from_lookup(false, env(&[])).unwrap();
        assert_eq!(cfg.poll.base_url, "http://jupyter:8888");
        assert_eq!(cfg.poll.max_attempts, 5);
        assert_eq!(cfg.poll.wait_interval, Duration::from_secs(15));
        assert!(cfg.poll.access_token.is_none());
    }

    #[test]
    fn environment_overrides_apply() {
        let cfg = SuiteConfig::from_lookup(
            true,
            env(&[
                ("WAIT_TIME", "3"),
                ("MAX_RETRIES", "7"),
                ("SERVICE_NAME", "rstudio"),
                ("JUPYTER_TOKEN", "abc123"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.poll.base_url, "http://rstudio:8888");
        assert_eq!(cfg.poll.max_attempts, 7);
        assert_eq!(cfg.poll.wait_interval, Duration::from_secs(3));
        assert_eq!(cfg.poll.access_token.as_deref(), Some("abc123"));
    }

    #[test]
    fn required_token_missing_is_a_configuration_error() {
        let err = SuiteConfig::from_lookup(true, env(&[])).unwrap_err();
        assert!(matches!(err, CheckError::Configuration(_)));
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let err = SuiteConfig::from_lookup(true, env(&[("JUPYTER_TOKEN", "")])).unwrap_err();
        assert!(matches!(err, CheckError::Configuration(_)));
    }

    #[test]
    fn unparsable_numbers_are_configuration_errors() {
        let err =
            SuiteConfig::from_lookup(false, env(&[("WAIT_TIME", "soon")])).unwrap_err();
        assert!(matches!(err, CheckError::Configuration(_)));
    }
}
