//! Calendar-date extraction from document text.
//!
//! Four pattern classes are matched case-insensitively; every raw match is
//! run through a lenient per-candidate parser that yields `Option<NaiveDate>`
//! and silently drops whatever does not parse. Results are normalized to
//! ISO `YYYY-MM-DD`, deduplicated, and returned most recent first.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Numeric day/month or month/day with 2- or 4-digit year: 3/4/2024, 03-04-24.
static RE_NUMERIC_DMY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})\b").unwrap());

/// ISO-ordered numeric: 2024/3/4, 2024-03-04.
static RE_NUMERIC_YMD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})[/-](\d{1,2})[/-](\d{1,2})\b").unwrap());

/// Month name or abbreviation first: "March 3, 2024", "Mar 3 2024", "Sept 3rd, 2024".
static RE_MONTH_NAME_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+(\d{1,2})(?:st|nd|rd|th)?(?:\s*,\s*|\s+)(\d{4})\b",
    )
    .unwrap()
});

/// Day first with a full month name: "3 March 2024", "21st December 2023".
static RE_DAY_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2})(?:st|nd|rd|th)?\s+(january|february|march|april|may|june|july|august|september|october|november|december)\s+(\d{4})\b",
    )
    .unwrap()
});

/// Extract unique ISO dates from `text`, most recent first.
///
/// `month_first` resolves the D/M vs M/D ambiguity of the numeric pattern;
/// either way the parser swaps the fields when the preferred reading is
/// impossible and the other one is valid.
pub fn extract_dates(text: &str, month_first: bool) -> Vec<String> {
    let mut found: BTreeSet<String> = BTreeSet::new();

    for caps in RE_NUMERIC_DMY.captures_iter(text) {
        let (a, b) = (field(&caps, 1), field(&caps, 2));
        let year = field(&caps, 3).and_then(normalize_year);
        let (month, day) = if month_first { (a, b) } else { (b, a) };
        if let Some(date) = lenient_ymd(year, month, day) {
            found.insert(date.format("%Y-%m-%d").to_string());
        }
    }

    for caps in RE_NUMERIC_YMD.captures_iter(text) {
        let year = field(&caps, 1).map(|y| y as i32);
        if let Some(date) = lenient_ymd(year, field(&caps, 2), field(&caps, 3)) {
            found.insert(date.format("%Y-%m-%d").to_string());
        }
    }

    for caps in RE_MONTH_NAME_FIRST.captures_iter(text) {
        let month = caps.get(1).and_then(|m| month_number(m.as_str()));
        let day = field(&caps, 2);
        let year = field(&caps, 3).map(|y| y as i32);
        if let Some(date) = checked_ymd(year, month, day) {
            found.insert(date.format("%Y-%m-%d").to_string());
        }
    }

    for caps in RE_DAY_FIRST.captures_iter(text) {
        let day = field(&caps, 1);
        let month = caps.get(2).and_then(|m| month_number(m.as_str()));
        let year = field(&caps, 3).map(|y| y as i32);
        if let Some(date) = checked_ymd(year, month, day) {
            found.insert(date.format("%Y-%m-%d").to_string());
        }
    }

    // ISO strings sort lexicographically == chronologically; reverse for
    // most-recent-first.
    found.into_iter().rev().collect()
}

/// Numeric capture group as u32.
fn field(caps: &regex::Captures, index: usize) -> Option<u32> {
    caps.get(index).and_then(|m| m.as_str().parse().ok())
}

/// Window a 2-digit year: <70 lands in the 2000s, the rest in the 1900s.
fn normalize_year(raw: u32) -> Option<i32> {
    let year = match raw {
        0..=69 => 2000 + raw as i32,
        70..=99 => 1900 + raw as i32,
        _ => raw as i32,
    };
    Some(year)
}

/// Build a date, swapping month and day when the preferred reading is
/// impossible but the swapped one works.
fn lenient_ymd(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Option<NaiveDate> {
    let (year, month, day) = (year?, month?, day?);
    checked_ymd(Some(year), Some(month), Some(day))
        .or_else(|| checked_ymd(Some(year), Some(day), Some(month)))
}

/// Build a date and reject years outside a plausible document window.
fn checked_ymd(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Option<NaiveDate> {
    let year = year?;
    if !(1900..=2099).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month?, day?)
}

/// Month number from a name or abbreviation.
fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    let month = match &lower[..3.min(lower.len())] {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}
