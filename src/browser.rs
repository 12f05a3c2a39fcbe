//! Rendered acquisition backend: a headless Chrome session driving the
//! search form and walking the result pages live.

use std::ffi::OsStr;
use std::time::Duration;

use headless_chrome::{Browser, Element, LaunchOptionsBuilder, Tab};
use rand::seq::SliceRandom;
use tracing::error;

use crate::challenge;
use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::extract::{extract_job, RenderedFragment, RENDERED_SPECS};
use crate::paginate::{self, PageSource};
use crate::record::JobRecord;
use crate::throttle::human_delay;

const LISTING_SELECTOR: &str = "div.job_seen_beacon";
const NEXT_PAGE_SELECTOR: &str = "a[aria-label='Next Page']";

const QUERY_INPUT_WAIT: Duration = Duration::from_secs(15);
const LISTING_WAIT: Duration = Duration::from_secs(20);
const NEXT_PAGE_WAIT: Duration = Duration::from_secs(10);

/// Scrapes through a real browser session so JavaScript-rendered listings
/// materialize before extraction.
pub struct BrowserBackend<'c> {
    config: &'c ScraperConfig,
}

impl<'c> BrowserBackend<'c> {
    pub fn new(config: &'c ScraperConfig) -> Self {
        Self { config }
    }

    /// Run one search and walk up to `max_pages` result pages.
    ///
    /// Setup failures (launch, navigation, form fill) are returned to the
    /// caller; everything after that terminates gracefully with partial
    /// results. The browser process is released on every exit path when the
    /// session drops.
    pub fn search(
        &self,
        query: &str,
        location: &str,
        max_pages: usize,
    ) -> Result<Vec<JobRecord>, ScrapeError> {
        let browser = self.launch()?;
        let tab = browser.new_tab()?;

        // Mask the automation flag before first navigation.
        tab.evaluate(
            "Object.defineProperty(navigator, 'webdriver', {get: () => undefined})",
            false,
        )?;

        tab.navigate_to(&self.config.base_url)?;
        human_delay(2.0, 4.0);

        if challenge::rendered_challenge(&tab) {
            error!("challenge detected, solve it manually or stop scraping");
            return Ok(Vec::new());
        }

        self.submit_search(&tab, query, location)?;
        human_delay(3.0, 6.0);

        if challenge::rendered_challenge(&tab) {
            error!("challenge detected after search");
            return Ok(Vec::new());
        }

        let mut pages = TabPages { tab: &tab };
        Ok(paginate::run(&mut pages, max_pages, (4.0, 8.0)))
    }

    fn launch(&self) -> Result<Browser, ScrapeError> {
        let mut rng = rand::thread_rng();
        let user_agent = self
            .config
            .user_agents
            .choose(&mut rng)
            .cloned()
            .unwrap_or_default();
        let ua_flag = format!("--user-agent={user_agent}");
        let window_size = self
            .config
            .window_sizes
            .choose(&mut rng)
            .copied()
            .unwrap_or((1920, 1080));

        let args: Vec<&OsStr> = vec![
            OsStr::new("--disable-dev-shm-usage"),
            OsStr::new("--disable-blink-features=AutomationControlled"),
            OsStr::new("--disable-gpu"),
            OsStr::new(ua_flag.as_str()),
        ];

        let options = LaunchOptionsBuilder::default()
            .headless(self.config.headless)
            .sandbox(false)
            .window_size(Some(window_size))
            .args(args)
            .build()
            .map_err(|e| ScrapeError::Launch(e.to_string()))?;

        Ok(Browser::new(options)?)
    }

    fn submit_search(&self, tab: &Tab, query: &str, location: &str) -> Result<(), ScrapeError> {
        let query_input =
            tab.wait_for_element_with_custom_timeout("#text-input-what", QUERY_INPUT_WAIT)?;
        let location_input =
            tab.wait_for_element_with_custom_timeout("#text-input-where", QUERY_INPUT_WAIT)?;

        clear_input(&query_input)?;
        query_input.type_into(query)?;
        human_delay(1.0, 2.0);

        clear_input(&location_input)?;
        location_input.type_into(location)?;
        human_delay(1.0, 2.0);

        tab.find_element("button[type='submit']")?.click()?;
        Ok(())
    }
}

fn clear_input(input: &Element) -> Result<(), ScrapeError> {
    input.call_js_fn("function() { this.value = ''; }", vec![], false)?;
    Ok(())
}

/// [`PageSource`] over a live tab.
struct TabPages<'a> {
    tab: &'a Tab,
}

impl PageSource for TabPages<'_> {
    fn collect_page(&mut self) -> Result<Vec<JobRecord>, ScrapeError> {
        self.tab
            .wait_for_element_with_custom_timeout(LISTING_SELECTOR, LISTING_WAIT)?;
        let fragments = self.tab.find_elements(LISTING_SELECTOR)?;
        Ok(fragments
            .iter()
            .map(|element| extract_job(&RenderedFragment::new(element), &RENDERED_SPECS))
            .collect())
    }

    fn challenge_present(&mut self) -> bool {
        challenge::rendered_challenge(self.tab)
    }

    fn advance(&mut self) -> bool {
        match self
            .tab
            .wait_for_element_with_custom_timeout(NEXT_PAGE_SELECTOR, NEXT_PAGE_WAIT)
        {
            Ok(next) => next.click().is_ok(),
            Err(_) => false,
        }
    }
}
