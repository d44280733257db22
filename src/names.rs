use std::collections::BTreeSet;

use regex::Regex;

/// Pull every anchor's inner text out of the input page.
///
/// Captures are trimmed and deduplicated by exact string equality. The
/// result is ordered by surname (last whitespace-delimited token), with
/// ties falling back to full-name order.
pub fn extract_player_names(html: &str) -> Vec<String> {
    let anchor_re = Regex::new(r"(?i)<a [^>]*?>([^<]+)</a>").unwrap();

    let unique: BTreeSet<String> = anchor_re
        .captures_iter(html)
        .map(|cap| cap[1].trim().to_string())
        .collect();

    // BTreeSet iteration is already full-name order; the stable sort by
    // surname keeps that order for equal keys.
    let mut names: Vec<String> = unique.into_iter().collect();
    names.sort_by(|a, b| surname_key(a).cmp(surname_key(b)));
    names
}

/// Last whitespace-delimited token, or the whole (possibly empty) name
/// when there is none.
fn surname_key(name: &str) -> &str {
    name.split_whitespace().last().unwrap_or(name)
}
