//! Indeed job-listing scraper.
//!
//! Extracts structured job records from search result pages through two
//! interchangeable backends:
//! - a headless Chrome session for the JavaScript-rendered pages
//! - a plain blocking HTTP fetch-and-parse path as a backup
//!
//! Both feed the same field-extraction pipeline, challenge detection and
//! flat-file writers.

pub mod browser;
pub mod challenge;
pub mod config;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod paginate;
pub mod persist;
pub mod record;
pub mod throttle;

pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use record::JobRecord;
