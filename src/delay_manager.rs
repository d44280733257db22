use std::time::Duration;
use std::thread;
use rand::Rng;

/// Short pause after every profile fetch so the site is not hammered.
/// Jittered around half a second; the exact magnitude is not load-bearing.
pub fn polite_delay() {
    let mut rng = rand::thread_rng();
    let delay_ms = rng.gen_range(400..=700);
    thread::sleep(Duration::from_millis(delay_ms));
}
