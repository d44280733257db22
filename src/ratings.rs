use regex::Regex;

/// Sentinel for any rating or date that cannot be determined.
pub const NOT_AVAILABLE: &str = "N/A";

/// The two rating figures (with their as-of dates) published on a
/// profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ratings {
    pub current_rating: String,
    pub current_date: String,
    pub dynamic_rating: String,
    pub dynamic_date: String,
}

impl Ratings {
    /// All four fields set to the sentinel. Used when no page could be
    /// fetched at all.
    pub fn unavailable() -> Self {
        Ratings {
            current_rating: NOT_AVAILABLE.to_string(),
            current_date: NOT_AVAILABLE.to_string(),
            dynamic_rating: NOT_AVAILABLE.to_string(),
            dynamic_date: NOT_AVAILABLE.to_string(),
        }
    }
}

/// One finished row of the report: a player plus everything scraped
/// for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingRecord {
    pub name: String,
    pub profile_url: String,
    pub ratings: Ratings,
}

pub struct RatingExtractor {
    current_re: Regex,
    dynamic_re: Regex,
}

impl RatingExtractor {
    pub fn new() -> Self {
        RatingExtractor {
            // "Current Rating" cell: a bold span, a line break, then a
            // span holding a M/D/YYYY date.
            current_re: Regex::new(
                r"(?i)<td[^>]*>\s*<span[^>]*?font-weight:bold;?[^>]*>([^<]+)</span>\s*<br>\s*<span[^>]*?>(\d{1,2}/\d{1,2}/\d{4})</span>",
            )
            .unwrap(),
            // The "Estimated Dynamic Rating" label, then the next bold
            // span + date span anywhere after it. No right boundary: on a
            // page with several labeled blocks the first bold span after
            // the label wins, whichever cell it belongs to.
            dynamic_re: Regex::new(
                r"(?i)Estimated Dynamic Rating[\s\S]*?<span[^>]*?font-weight:bold;?[^>]*>\s*([^<]+?)\s*</span>\s*<br>\s*<span[^>]*?>(\d{1,2}/\d{1,2}/\d{4})</span>",
            )
            .unwrap(),
        }
    }

    /// Extract both rating blocks from one profile page.
    ///
    /// The two lookups are independent; a miss on either side yields the
    /// sentinel pair for that side only. Never fails.
    pub fn extract(&self, html: &str) -> Ratings {
        let (current_rating, current_date) =
            first_rating_pair(&self.current_re, html).unwrap_or_else(na_pair);
        let (dynamic_rating, dynamic_date) =
            first_rating_pair(&self.dynamic_re, html).unwrap_or_else(na_pair);

        Ratings {
            current_rating,
            current_date,
            dynamic_rating,
            dynamic_date,
        }
    }
}

impl Default for RatingExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// First match of `re` in document order, as a trimmed (value, date) pair.
fn first_rating_pair(re: &Regex, html: &str) -> Option<(String, String)> {
    re.captures(html)
        .map(|cap| (cap[1].trim().to_string(), cap[2].trim().to_string()))
}

fn na_pair() -> (String, String) {
    (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAGE: &str = r#"
        <html><body>
        <table><tr>
        <td align="center" class="ratingcell">
            <span style="font-size:24px; font-weight:bold;">4.5</span><br>
            <span style="font-size:11px;">1/15/2024</span>
        </td>
        </tr></table>
        <table><tr>
        <td>Estimated Dynamic Rating</td>
        <td>
            <span style="font-weight:bold;"> 4.38 </span><br>
            <span>2/1/2024</span>
        </td>
        </tr></table>
        </body></html>
    "#;

    #[test]
    fn extracts_both_rating_blocks() {
        let ratings = RatingExtractor::new().extract(FULL_PAGE);
        assert_eq!(ratings.current_rating, "4.5");
        assert_eq!(ratings.current_date, "1/15/2024");
        assert_eq!(ratings.dynamic_rating, "4.38");
        assert_eq!(ratings.dynamic_date, "2/1/2024");
    }

    #[test]
    fn missing_dynamic_label_leaves_current_untouched() {
        let page = r#"
            <td><span style="font-weight:bold;">3.0</span><br>
            <span>6/3/2023</span></td>
        "#;
        let ratings = RatingExtractor::new().extract(page);
        assert_eq!(ratings.current_rating, "3.0");
        assert_eq!(ratings.current_date, "6/3/2023");
        assert_eq!(ratings.dynamic_rating, NOT_AVAILABLE);
        assert_eq!(ratings.dynamic_date, NOT_AVAILABLE);
    }

    #[test]
    fn page_without_rating_blocks_yields_sentinels() {
        let ratings = RatingExtractor::new().extract("<html><body>No profile found</body></html>");
        assert_eq!(ratings, Ratings::unavailable());
    }

    #[test]
    fn tolerates_whitespace_and_case_between_tags() {
        let page = "<TD class=\"x\">\n  <SPAN style=\"FONT-WEIGHT:BOLD\">4.0</SPAN>\n  <BR>\n  <SPAN>12/31/2023</SPAN></TD>";
        let ratings = RatingExtractor::new().extract(page);
        assert_eq!(ratings.current_rating, "4.0");
        assert_eq!(ratings.current_date, "12/31/2023");
    }

    #[test]
    fn first_matching_block_wins() {
        let page = r#"
            <td><span style="font-weight:bold;">4.5</span><br><span>1/1/2024</span></td>
            <td><span style="font-weight:bold;">9.9</span><br><span>9/9/2029</span></td>
        "#;
        let ratings = RatingExtractor::new().extract(page);
        assert_eq!(ratings.current_rating, "4.5");
        assert_eq!(ratings.current_date, "1/1/2024");
    }

    #[test]
    fn dynamic_scan_runs_forward_from_the_label() {
        // A current-style block before the label must not satisfy the
        // dynamic lookup.
        let page = r#"
            <td><span style="font-weight:bold;">4.5</span><br><span>1/1/2024</span></td>
            Estimated Dynamic Rating
            <td><span style="font-weight:bold;">4.21</span><br><span>3/4/2024</span></td>
        "#;
        let ratings = RatingExtractor::new().extract(page);
        assert_eq!(ratings.dynamic_rating, "4.21");
        assert_eq!(ratings.dynamic_date, "3/4/2024");
    }

    #[test]
    fn rating_text_is_trimmed() {
        let page = "<td><span style=\"font-weight:bold;\">  4.5  </span><br><span>1/1/2024</span></td>";
        let ratings = RatingExtractor::new().extract(page);
        assert_eq!(ratings.current_rating, "4.5");
    }

    #[test]
    fn date_must_be_slash_separated_with_four_digit_year() {
        let page = "<td><span style=\"font-weight:bold;\">4.5</span><br><span>2024-01-15</span></td>";
        let ratings = RatingExtractor::new().extract(page);
        assert_eq!(ratings.current_rating, NOT_AVAILABLE);
        assert_eq!(ratings.current_date, NOT_AVAILABLE);
    }
}
