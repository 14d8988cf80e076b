// Display formatting helpers.
// Dates, counts, repository titles, and URL clean-up for rendered text.

use chrono::{DateTime, Utc};

/// Placeholder for values with nothing to show.
pub const EMPTY_GLYPH: &str = "—";

/// Format a date as "Jan 25, 2011", or the empty glyph when unknown.
pub fn format_date(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => EMPTY_GLYPH.to_string(),
    }
}

/// Format a count with thousands separators.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Turn a repository slug into a title: "my-coolRepo" becomes "My Cool Repo".
pub fn format_repo_name(name: &str) -> String {
    let spaced = name.replace('-', " ");

    let mut split = String::with_capacity(spaced.len() + 4);
    let mut prev: Option<char> = None;
    for c in spaced.chars() {
        if prev.is_some_and(|p| p.is_ascii_lowercase()) && c.is_ascii_uppercase() {
            split.push(' ');
        }
        split.push(c);
        prev = Some(c);
    }

    split
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prefix a bare host with https://. Empty stays empty.
pub fn ensure_url(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    if value.starts_with("http://") || value.starts_with("https://") {
        return value.to_string();
    }
    format!("https://{}", value)
}

/// Strip the scheme and a trailing slash for display.
pub fn format_website(value: &str) -> String {
    let lower = value.to_ascii_lowercase();
    let without_scheme = if lower.starts_with("https://") {
        &value[8..]
    } else if lower.starts_with("http://") {
        &value[7..]
    } else {
        value
    };
    without_scheme
        .strip_suffix('/')
        .unwrap_or(without_scheme)
        .to_string()
}
