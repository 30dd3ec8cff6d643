pub(crate) mod player;
pub(crate) mod profile;
pub(crate) mod roster;
pub(crate) mod stats;
pub(crate) mod transfer;

pub(crate) use ::scraper::Html;
use ::scraper::ElementRef;
use tracing::debug;

use crate::error::{NpbError, Result};

pub(crate) const BASE_URL: &str = "https://npb.jp";

/// Fetch a URL and parse the response body as an HTML document.
pub(crate) async fn get_document(client: &reqwest::Client, url: &str) -> Result<Html> {
    debug!(url, "fetching page");

    let response = client.get(url).send().await.map_err(|e| NpbError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(NpbError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| NpbError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    Ok(Html::parse_document(&body))
}

/// All text inside `element`, concatenated and trimmed.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Convert a stat cell to a number.
///
/// Blank cells and the dash placeholders npb.jp prints for undefined rates
/// (`-`, `----`) read as zero, as does anything without a leading number.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed == "----" {
        return 0.0;
    }
    numeric_prefix(trimmed).parse().unwrap_or(0.0)
}

/// Longest prefix of the form `[+-]?digits[.digits]`.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let has_int = end > int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start {
            end = frac_end;
        } else if has_int {
            end += 1;
        }
    }
    &text[..end]
}

/// Leading ASCII digits of `text` as an integer, like a lenient `parseInt`.
pub(crate) fn parse_leading_int(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    let digits = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed, |end| &trimmed[..end]);
    digits.parse().ok()
}

/// True if `text` is exactly `n` ASCII digits.
pub(crate) fn is_digits(text: &str, n: usize) -> bool {
    text.len() == n && text.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_placeholders() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   "), 0.0);
        assert_eq!(parse_number("-"), 0.0);
        assert_eq!(parse_number("----"), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
    }

    #[test]
    fn test_parse_number_values() {
        assert_eq!(parse_number("3.48"), 3.48);
        assert_eq!(parse_number(" 26 "), 26.0);
        assert_eq!(parse_number(".600"), 0.6);
        assert_eq!(parse_number("147.1"), 147.1);
        assert_eq!(parse_number("-2"), -2.0);
        assert_eq!(parse_number("12回"), 12.0);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("170"), Some(170));
        assert_eq!(parse_leading_int(" 80kg"), Some(80));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("身長"), None);
    }

    #[test]
    fn test_is_digits() {
        assert!(is_digits("123", 3));
        assert!(is_digits("2018", 4));
        assert!(!is_digits("12", 3));
        assert!(!is_digits("1a3", 3));
    }
}
