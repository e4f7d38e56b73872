// src/format/date.rs
//
// Release dates as printed on the info table: "Mar 05, 2024".

use crate::config::consts::UNKNOWN_DATE;
use crate::error::DateError;

const MONTHS: [(&str, &str); 12] = [
    ("Jan", "01"), ("Feb", "02"), ("Mar", "03"), ("Apr", "04"),
    ("May", "05"), ("Jun", "06"), ("Jul", "07"), ("Aug", "08"),
    ("Sep", "09"), ("Oct", "10"), ("Nov", "11"), ("Dec", "12"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawDate {
    pub month: String,
    pub day: String,
    pub year: String,
}

impl RawDate {
    /// Whitespace-split into `{month, day, year}`; extra tokens are ignored.
    /// Empty input is an absent date, not an error.
    pub fn parse(s: &str) -> Result<Option<RawDate>, DateError> {
        let mut tokens = s.split_whitespace();
        let Some(month) = tokens.next() else { return Ok(None) };
        let (Some(day), Some(year)) = (tokens.next(), tokens.next()) else {
            return Err(DateError::Malformed(s!(s.trim())));
        };
        if month_number(month).is_none() {
            return Err(DateError::UnknownMonth(s!(month)));
        }
        Ok(Some(RawDate { month: s!(month), day: s!(day), year: s!(year) }))
    }

    /// Two-digit month.
    pub fn month_number(&self) -> &'static str {
        // parse() rejects unknown months; a hand-built RawDate may not.
        month_number(&self.month).unwrap_or("00")
    }

    /// Day with its comma removed, zero-padded to two digits.
    ///
    /// `Mar 5, 2024` gives `2024/03/05` and `240305`; keep the padding, a bare
    /// `5` would print `2024/03/5`.
    pub fn day_padded(&self) -> String {
        let day = self.day.replacen(',', "", 1);
        if day.len() == 1 && day.chars().all(|c| c.is_ascii_digit()) {
            format!("0{day}")
        } else {
            day
        }
    }

    pub fn year_short(&self) -> &str {
        match self.year.char_indices().rev().nth(1) {
            Some((i, _)) => &self.year[i..],
            None => &self.year,
        }
    }
}

fn month_number(abbrev: &str) -> Option<&'static str> {
    MONTHS.iter().find(|(m, _)| *m == abbrev).map(|(_, n)| *n)
}

/// `"2024/03/05"`, or `"Unknown Date"`.
pub fn format_date(date: Option<&RawDate>) -> String {
    match date {
        Some(d) => format!("{}/{}/{}", d.year, d.month_number(), d.day_padded()),
        None => s!(UNKNOWN_DATE),
    }
}

/// `"240305"`, or `"Unknown Date"`.
pub fn format_date_for_clipboard(date: Option<&RawDate>) -> String {
    match date {
        Some(d) => format!("{}{}{}", d.year_short(), d.month_number(), d.day_padded()),
        None => s!(UNKNOWN_DATE),
    }
}

/// Convenience over raw info-table text.
pub fn format_date_str(s: &str) -> Result<String, DateError> {
    Ok(format_date(RawDate::parse(s)?.as_ref()))
}

pub fn format_date_for_clipboard_str(s: &str) -> Result<String, DateError> {
    Ok(format_date_for_clipboard(RawDate::parse(s)?.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_three_tokens() {
        let d = RawDate::parse("  Mar 5,  2024 ").unwrap().unwrap();
        assert_eq!(d, RawDate { month: s!("Mar"), day: s!("5,"), year: s!("2024") });
    }

    #[test]
    fn parse_rejects_short_and_unknown() {
        assert_eq!(RawDate::parse("2024"), Err(DateError::Malformed(s!("2024"))));
        assert_eq!(RawDate::parse("Mar 2024"), Err(DateError::Malformed(s!("Mar 2024"))));
        assert_eq!(RawDate::parse("Mär 5, 2024"), Err(DateError::UnknownMonth(s!("Mär"))));
        assert_eq!(RawDate::parse("   "), Ok(None));
    }

    #[test]
    fn year_short_takes_last_two() {
        let mut d = RawDate::parse("Jan 01, 1999").unwrap().unwrap();
        assert_eq!(d.year_short(), "99");
        d.year = s!("7");
        assert_eq!(d.year_short(), "7");
    }

    #[test]
    fn two_digit_days_are_kept() {
        assert_eq!(format_date_str("Dec 24, 2003").unwrap(), "2003/12/24");
        assert_eq!(format_date_for_clipboard_str("Dec 24, 2003").unwrap(), "031224");
    }
}
