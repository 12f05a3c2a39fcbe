use std::path::Path;

use tracing::error;

use indeed_scraper::browser::BrowserBackend;
use indeed_scraper::fallback::HttpBackend;
use indeed_scraper::persist::{save_csv, save_json};
use indeed_scraper::record::NOT_AVAILABLE;
use indeed_scraper::{JobRecord, ScraperConfig};

const JOB_TITLE: &str = "Python Developer";
const LOCATION: &str = "Delhi";
const NUM_PAGES: usize = 3;

const SUMMARY_PREVIEW_CHARS: usize = 150;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ScraperConfig::default();

    println!("Starting Indeed job scraping...");
    println!("Searching for: {JOB_TITLE} in {LOCATION}");
    println!("Pages to scrape: {NUM_PAGES}");

    let jobs = match BrowserBackend::new(&config).search(JOB_TITLE, LOCATION, NUM_PAGES) {
        Ok(jobs) => jobs,
        Err(e) => {
            error!(error = %e, "browser scraping failed");
            Vec::new()
        }
    };

    if !jobs.is_empty() {
        println!("\nFound {} jobs!", jobs.len());
        save_csv(&jobs, Path::new("indeed_jobs.csv"))?;
        save_json(&jobs, Path::new("indeed_jobs.json"))?;
        print_summary(&jobs);
        return Ok(());
    }

    println!("No jobs found with the browser! Trying the direct-fetch backup...");
    let jobs = HttpBackend::new(&config).search(JOB_TITLE, LOCATION, NUM_PAGES)?;
    if jobs.is_empty() {
        println!("No jobs found with the direct-fetch backup either!");
        return Ok(());
    }

    println!("Found {} jobs with the direct-fetch backup!", jobs.len());
    save_csv(&jobs, Path::new("indeed_jobs_backup.csv"))?;
    save_json(&jobs, Path::new("indeed_jobs_backup.json"))?;
    print_summary(&jobs);
    Ok(())
}

fn print_summary(jobs: &[JobRecord]) {
    println!("\nFirst 3 jobs found:");
    for (i, job) in jobs.iter().take(3).enumerate() {
        println!("\n{}. {}", i + 1, job.title);
        println!("   Company: {}", job.company);
        println!("   Location: {}", job.location);
        println!("   Salary: {}", job.salary);
        if job.summary != NOT_AVAILABLE {
            println!("   Summary: {}", preview(&job.summary));
        }
        println!("   URL: {}", job.url);
    }
}

/// Truncate long summaries for the console.
fn preview(summary: &str) -> String {
    if summary.chars().count() > SUMMARY_PREVIEW_CHARS {
        let head: String = summary.chars().take(SUMMARY_PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        summary.to_string()
    }
}
