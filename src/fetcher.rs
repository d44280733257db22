use std::time::Duration;

use log::{error, info, warn};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

use crate::delay_manager;
use crate::ratings::{RatingExtractor, RatingRecord, Ratings};

/// Profile lookup endpoint; the percent-encoded player name is appended.
pub const BASE_URL: &str = "https://www.tennisrecord.com/adult/profile.aspx?playername=";

const FETCH_TIMEOUT_SECS: u64 = 30;

const USER_AGENTS: [&str; 4] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:121.0) Gecko/20100101 Firefox/121.0",
];

/// Anything that can turn a profile URL into page HTML, or report that no
/// page could be had. `None` covers every transport-level failure; fetch
/// problems never surface as errors to the pipeline.
pub trait PageSource {
    fn fetch_page(&self, url: &str) -> Option<String>;
}

pub struct RatingFetcher {
    client: Client,
}

impl RatingFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        RatingFetcher { client }
    }

    fn random_user_agent(&self) -> &'static str {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        USER_AGENTS[rng.gen_range(0..USER_AGENTS.len())]
    }
}

impl Default for RatingFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSource for RatingFetcher {
    fn fetch_page(&self, url: &str) -> Option<String> {
        let request = self
            .client
            .get(url)
            .header(USER_AGENT, self.random_user_agent());

        match request.send() {
            Ok(resp) => {
                if !resp.status().is_success() {
                    warn!("Fetch failed with status {}: {}", resp.status(), url);
                    return None;
                }
                // text() decodes with the charset the response advertises,
                // defaulting to UTF-8 and replacing undecodable sequences.
                match resp.text() {
                    Ok(t) => Some(t),
                    Err(e) => {
                        error!("Failed to read response body from {}: {}", url, e);
                        None
                    }
                }
            }
            Err(e) => {
                error!("Request to {} failed: {}", url, e);
                None
            }
        }
    }
}

/// Build the profile lookup URL for one player name.
pub fn profile_url(name: &str) -> String {
    format!("{}{}", BASE_URL, urlencoding::encode(name))
}

/// Sequentially fetch and parse every name, in the order given.
///
/// Always one record per name: a failed fetch yields the sentinel
/// quadruple and the loop moves on to the next name. No retries. A short
/// delay follows every attempt, success or failure.
pub fn collect_records(names: &[String], source: &dyn PageSource) -> Vec<RatingRecord> {
    let extractor = RatingExtractor::new();
    let total = names.len();
    let mut records = Vec::with_capacity(total);

    for (idx, name) in names.iter().enumerate() {
        let url = profile_url(name);
        info!("[{}/{}] Fetching '{}'", idx + 1, total, name);

        let ratings = match source.fetch_page(&url) {
            Some(page) => {
                let r = extractor.extract(&page);
                info!(
                    "Current={} ({}), Dynamic={} ({})",
                    r.current_rating, r.current_date, r.dynamic_rating, r.dynamic_date
                );
                r
            }
            None => {
                warn!("Page error for '{}'; using N/A", name);
                Ratings::unavailable()
            }
        };

        records.push(RatingRecord {
            name: name.clone(),
            profile_url: url,
            ratings,
        });

        delay_manager::polite_delay();
    }

    records
}
