//! Flat-file writers for scraped records.
//!
//! Both writers decline to touch the filesystem when there is nothing to
//! write, so a failed run leaves no empty output files behind.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::ScrapeError;
use crate::record::JobRecord;

/// Write records to a CSV file with columns
/// `title, company, location, salary, summary, url`.
pub fn save_csv(records: &[JobRecord], path: &Path) -> Result<(), ScrapeError> {
    if records.is_empty() {
        warn!("no job data to save to CSV");
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!(count = records.len(), path = %path.display(), "saved jobs to CSV");
    Ok(())
}

/// Write records to a pretty-printed JSON file.
pub fn save_json(records: &[JobRecord], path: &Path) -> Result<(), ScrapeError> {
    if records.is_empty() {
        warn!("no job data to save to JSON");
        return Ok(());
    }

    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;

    info!(count = records.len(), path = %path.display(), "saved jobs to JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> JobRecord {
        JobRecord {
            title: "Python Developer".to_string(),
            company: "Acme, Corp".to_string(),
            location: "Delhi".to_string(),
            salary: "₹12,00,000 a year".to_string(),
            summary: "Build pipelines.\nKeep them running.".to_string(),
            url: "https://www.indeed.com/viewjob?jk=abc".to_string(),
        }
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("jobs.csv");
        let json_path = dir.path().join("jobs.json");

        save_csv(&[], &csv_path).unwrap();
        save_json(&[], &json_path).unwrap();

        assert!(!csv_path.exists());
        assert!(!json_path.exists());
    }

    #[test]
    fn test_csv_header_order_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.csv");

        save_csv(&[sample()], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();
        assert_eq!(header, "title,company,location,salary,summary,url");
    }

    #[test]
    fn test_csv_quotes_free_text_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.csv");

        save_csv(&[sample()], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        // the embedded comma and newline must survive a round trip
        let mut reader = csv::Reader::from_reader(contents.as_bytes());
        let record: JobRecord = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(record, sample());
    }

    #[test]
    fn test_json_round_trips_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");

        save_json(&[sample()], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let records: Vec<JobRecord> = serde_json::from_str(&contents).unwrap();
        assert_eq!(records, vec![sample()]);
    }
}
