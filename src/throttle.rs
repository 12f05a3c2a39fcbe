//! Randomized human-scale pauses between page interactions.

use std::thread;
use std::time::Duration;

use rand::Rng;

/// Sleep for a random interval within `min_secs..max_secs`.
pub fn human_delay(min_secs: f64, max_secs: f64) {
    let secs = rand::thread_rng().gen_range(min_secs..max_secs);
    thread::sleep(Duration::from_secs_f64(secs));
}
