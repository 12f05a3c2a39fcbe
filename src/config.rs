//! Run-wide scraper settings.

use std::time::Duration;

/// Settings shared by both acquisition backends.
///
/// A run owns one of these and passes it explicitly wherever it is needed;
/// nothing here is global state.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Origin relative listing links resolve against.
    pub base_url: String,
    /// User-agent pool; each session or request draws one at random.
    pub user_agents: Vec<String>,
    /// Viewport pool for the rendered backend.
    pub window_sizes: Vec<(u32, u32)>,
    /// Run Chrome without a visible window.
    pub headless: bool,
    /// Per-request timeout for the direct-fetch backend.
    pub http_timeout: Duration,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.indeed.com".to_string(),
            user_agents: vec![
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                    .to_string(),
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36"
                    .to_string(),
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                    .to_string(),
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) \
                 Gecko/20100101 Firefox/121.0"
                    .to_string(),
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
                 (KHTML, like Gecko) Version/17.1 Safari/605.1.15"
                    .to_string(),
            ],
            window_sizes: vec![(1920, 1080), (1366, 768), (1440, 900), (1536, 864)],
            headless: true,
            http_timeout: Duration::from_secs(15),
        }
    }
}
