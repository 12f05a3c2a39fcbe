//! Page-at-a-time traversal of search results.
//!
//! The loop is generic over a [`PageSource`] so the rendered backend can
//! drive it with a live browser tab while tests drive it with a canned
//! source.

use tracing::{debug, error, info};

use crate::error::ScrapeError;
use crate::record::JobRecord;
use crate::throttle::human_delay;

/// One backend's view of the current results page.
pub trait PageSource {
    /// Block (bounded) until listing fragments are present, then extract
    /// them all. An error means the wait timed out.
    fn collect_page(&mut self) -> Result<Vec<JobRecord>, ScrapeError>;

    /// Whether the current document shows an anti-automation challenge.
    fn challenge_present(&mut self) -> bool;

    /// Move to the next results page. `false` when no next-page control can
    /// be found or activated within the bound.
    fn advance(&mut self) -> bool;
}

/// Walk up to `max_pages` result pages, accumulating records.
///
/// Every termination is graceful: timeout, challenge and exhaustion all
/// return whatever was collected so far. `pause_secs` bounds the randomized
/// pause after each page turn.
pub fn run<S: PageSource>(source: &mut S, max_pages: usize, pause_secs: (f64, f64)) -> Vec<JobRecord> {
    let mut records = Vec::new();

    for page in 0..max_pages {
        info!(page = page + 1, "scraping page");

        match source.collect_page() {
            Ok(batch) => {
                debug!(page = page + 1, count = batch.len(), "extracted job fragments");
                records.extend(batch);
            }
            Err(e) => {
                error!(page = page + 1, error = %e, "timed out waiting for job listings");
                break;
            }
        }

        if page + 1 == max_pages {
            break;
        }
        if source.challenge_present() {
            error!("challenge detected, stopping early");
            break;
        }
        if !source.advance() {
            info!("no more pages available");
            break;
        }
        human_delay(pause_secs.0, pause_secs.1);
        if source.challenge_present() {
            error!("challenge detected on page navigation");
            break;
        }
    }

    records
}
