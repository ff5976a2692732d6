use hubcheck_core::{CheckStep, Locator, PagePosition};

// RStudio renders into one deeply nested GWT table, so the file row and the
// knit toolbar button are only addressable by full path.
const RMARKDOWN_FILE_XPATH: &str = "//*[@id=\"rstudio_container\"]/div[2]/div/div[3]/div/div[2]/div/div/div[4]/div/div[6]/div/div[2]/div/div[3]/div/div[2]/div/div[2]/div/div/div[2]/div/div[3]/div/div/div[3]/div/div[4]/div/div[3]/div/div[2]/div/div/table/tbody/tr[1]/td[3]";
const KNIT_BUTTON_XPATH: &str = "//*[@id=\"rstudio_container\"]/div[2]/div/div[3]/div/div[4]/div/div/div[2]/div/div[6]/div/div[2]/div/div[2]/div/div[3]/div/div[2]/div/div[2]/div/table/tbody/tr/td[1]/table/tbody/tr/td[19]/button/table/tbody/tr/td[2]/div";

fn click(name: &str, locator: Locator) -> CheckStep {
    CheckStep::WaitAndClick {
        name: name.to_string(),
        locator,
    }
}

/// Walks the classic notebook tree: cluster status and nbgrader links, a
/// fresh Python 3 notebook, the nbresuse metrics toggle, then shutdown.
pub fn jupyter_notebook() -> Vec<CheckStep> {
    vec![
        CheckStep::ExpectPageCount { count: 1 },
        click(
            "DSMLP cluster status",
            Locator::link_text("DSMLP Cluster Status"),
        ),
        click("nbgrader courses", Locator::link_text("Courses")),
        click("files tab", Locator::link_text("Files")),
        click("new notebook dropdown", Locator::id("new-dropdown-button")),
        click("python 3 notebook", Locator::link_text("Python 3")),
        CheckStep::Pause { seconds: 2 },
        CheckStep::ExpectPageCount { count: 2 },
        CheckStep::FocusPage {
            position: PagePosition::Last,
        },
        click(
            "nbresuse metrics",
            Locator::xpath("//*[@id=\"collect_metrics\"]"),
        ),
        CheckStep::FocusPage {
            position: PagePosition::First,
        },
        click("shutdown button", Locator::id("shutdown")),
    ]
}

/// Launches RStudio from the notebook tree, opens the bundled Rmd file,
/// knits it, then shuts the server down. RStudio boots slowly, hence the
/// long settle pauses scaled from the configured wait time.
pub fn rstudio(wait_secs: u64) -> Vec<CheckStep> {
    vec![
        CheckStep::ExpectPageCount { count: 1 },
        click("new notebook dropdown", Locator::id("new-dropdown-button")),
        click("rstudio launcher", Locator::link_text("RStudio")),
        CheckStep::Pause {
            seconds: wait_secs + 15,
        },
        CheckStep::FocusPage {
            position: PagePosition::Last,
        },
        click("rmarkdown file", Locator::xpath(RMARKDOWN_FILE_XPATH)),
        CheckStep::Pause { seconds: wait_secs },
        click("knit button", Locator::xpath(KNIT_BUTTON_XPATH)),
        CheckStep::Pause {
            seconds: wait_secs + 15,
        },
        CheckStep::FocusPage {
            position: PagePosition::First,
        },
        click("shutdown button", Locator::id("shutdown")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clicks(steps: &[CheckStep]) -> Vec<&str> {
        steps
            .iter()
            .filter_map(|s| match s {
                CheckStep::WaitAndClick { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn jupyter_scenario_ends_with_shutdown() {
        let steps = jupyter_notebook();
        assert!(matches!(
            steps.first(),
            Some(CheckStep::ExpectPageCount { count: 1 })
        ));
        assert_eq!(clicks(&steps).last(), Some(&"shutdown button"));
        // Creating the notebook opens a second tab.
        assert!(steps
            .iter()
            .any(|s| matches!(s, CheckStep::ExpectPageCount { count: 2 })));
    }

    #[test]
    fn jupyter_scenario_checks_cluster_status_before_anything_else() {
        let steps = jupyter_notebook();
        assert_eq!(clicks(&steps).first(), Some(&"DSMLP cluster status"));
    }

    #[test]
    fn rstudio_scenario_scales_pauses_from_wait_time() {
        let steps = rstudio(10);
        let pauses: Vec<u64> = steps
            .iter()
            .filter_map(|s| match s {
                CheckStep::Pause { seconds } => Some(*seconds),
                _ => None,
            })
            .collect();
        assert_eq!(pauses, vec![25, 10, 25]);
        assert_eq!(clicks(&steps).last(), Some(&"shutdown button"));
    }

    #[test]
    fn rstudio_scenario_knits_after_opening_the_file() {
        let steps = rstudio(15);
        let names = clicks(&steps);
        let file = names.iter().position(|n| *n == "rmarkdown file").unwrap();
        let knit = names.iter().position(|n| *n == "knit button").unwrap();
        assert!(file < knit);
    }
}
