//! Direct-fetch acquisition backend.
//!
//! Fetches each results page as plain HTML and parses it statically. Less
//! reliable than the rendered backend on JavaScript-heavy pages, so it runs
//! only as a backup, with slower pacing and rotating request headers.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, error, info};
use url::Url;

use crate::challenge;
use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::extract::extract_listing_page;
use crate::record::JobRecord;
use crate::throttle::human_delay;

const JOBS_PER_PAGE: usize = 10;

/// Scrapes by fetching raw result pages over plain HTTP.
pub struct HttpBackend<'c> {
    config: &'c ScraperConfig,
    agent: ureq::Agent,
}

impl<'c> HttpBackend<'c> {
    pub fn new(config: &'c ScraperConfig) -> Self {
        let agent = ureq::Agent::new_with_config(
            ureq::Agent::config_builder()
                .timeout_global(Some(config.http_timeout))
                .build(),
        );
        Self { config, agent }
    }

    /// Fetch up to `max_pages` result pages for the query.
    ///
    /// A failed page is logged and skipped; a detected challenge ends the
    /// run with whatever was collected so far.
    pub fn search(
        &self,
        query: &str,
        location: &str,
        max_pages: usize,
    ) -> Result<Vec<JobRecord>, ScrapeError> {
        let base = Url::parse(&self.config.base_url)?;
        let search_url = format!("{}/jobs", self.config.base_url.trim_end_matches('/'));

        let mut records = Vec::new();
        for page in 0..max_pages {
            info!(page = page + 1, "fetching results page");

            let offset = page * JOBS_PER_PAGE;
            let mut request = self
                .agent
                .get(&search_url)
                .query("q", query)
                .query("l", location)
                .query("start", &offset.to_string());
            for (name, value) in random_headers(self.config, &mut rand::thread_rng()) {
                request = request.header(name, value.as_str());
            }

            let body = match request.call() {
                Ok(resp) if resp.status().is_success() => {
                    match resp.into_body().read_to_string() {
                        Ok(text) => text,
                        Err(e) => {
                            error!(page = page + 1, error = %e, "failed to read results page");
                            continue;
                        }
                    }
                }
                Ok(resp) => {
                    error!(page = page + 1, status = %resp.status(), "http error fetching results page");
                    continue;
                }
                Err(e) => {
                    error!(page = page + 1, error = %e, "error fetching results page");
                    continue;
                }
            };

            if challenge::body_has_challenge(&body) {
                error!("challenge detected in response body");
                return Ok(records);
            }

            let batch = extract_listing_page(&body, &base);
            debug!(page = page + 1, count = batch.len(), "extracted job fragments");
            records.extend(batch);

            if page + 1 < max_pages {
                human_delay(5.0, 12.0);
            }
        }

        Ok(records)
    }
}

/// Per-request header set: a user agent drawn from the pool, a do-not-track
/// signal, and sometimes a Referer.
pub fn random_headers<R: Rng>(config: &ScraperConfig, rng: &mut R) -> Vec<(&'static str, String)> {
    let user_agent = config
        .user_agents
        .choose(rng)
        .cloned()
        .unwrap_or_default();

    let mut headers = vec![
        ("User-Agent", user_agent),
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string(),
        ),
        ("Accept-Language", "en-US,en;q=0.5".to_string()),
        ("DNT", "1".to_string()),
    ];
    if rng.gen_bool(0.3) {
        headers.push(("Referer", "https://www.google.com/".to_string()));
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_headers_always_carry_dnt_and_a_pooled_user_agent() {
        let config = ScraperConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let headers = random_headers(&config, &mut rng);
            let dnt = headers.iter().find(|(name, _)| *name == "DNT");
            assert_eq!(dnt.map(|(_, value)| value.as_str()), Some("1"));

            let (_, user_agent) = headers
                .iter()
                .find(|(name, _)| *name == "User-Agent")
                .expect("user agent header");
            assert!(config.user_agents.contains(user_agent));
        }
    }

    #[test]
    fn test_referer_only_points_at_google() {
        let config = ScraperConfig::default();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let headers = random_headers(&config, &mut rng);
            if let Some((_, referer)) = headers.iter().find(|(name, _)| *name == "Referer") {
                assert_eq!(referer, "https://www.google.com/");
            }
        }
    }
}
