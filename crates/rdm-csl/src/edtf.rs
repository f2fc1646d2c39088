//! EDTF date parser using nom
//!
//! Parses the subset of Extended Date/Time Format used for publication dates:
//! - calendar dates with year, month or day precision (`2020`, `2020-05`, `2020-05-12`)
//! - intervals of two such dates (`2020/2021`, `2019-12/2020-01-15`)
//!
//! Anything else (date-times, seasons, uncertain or approximate qualifiers,
//! open interval ends) is rejected, as are dates that do not exist in the
//! proleptic Gregorian calendar.

use chrono::NaiveDate;
use nom::{
    branch::alt,
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map, map_res, opt},
    sequence::{pair, preceded, separated_pair, tuple},
    IResult,
};
use std::fmt;

/// Error type for EDTF parsing failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EdtfParseError {
    #[error("Empty EDTF expression")]
    Empty,
    #[error("Invalid EDTF syntax: {0}")]
    Syntax(String),
    #[error("Not a calendar date: {0}")]
    InvalidDate(String),
}

/// A date with year, month or day precision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdtfDate {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl EdtfDate {
    pub fn year(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
        }
    }

    pub fn year_month(year: i32, month: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: None,
        }
    }

    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: Some(day),
        }
    }

    /// Present components in order: `[year]`, `[year, month]` or `[year, month, day]`
    pub fn date_parts(&self) -> Vec<i32> {
        let mut parts = vec![self.year];
        if let Some(month) = self.month {
            parts.push(month as i32);
            if let Some(day) = self.day {
                parts.push(day as i32);
            }
        }
        parts
    }

    fn validate(self) -> Result<Self, EdtfParseError> {
        let valid = match (self.month, self.day) {
            (None, _) => true,
            (Some(month), None) => (1..=12).contains(&month),
            (Some(month), Some(day)) => NaiveDate::from_ymd_opt(self.year, month, day).is_some(),
        };
        if valid {
            Ok(self)
        } else {
            Err(EdtfParseError::InvalidDate(self.to_string()))
        }
    }
}

impl fmt::Display for EdtfDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)?;
        if let Some(month) = self.month {
            write!(f, "-{:02}", month)?;
            if let Some(day) = self.day {
                write!(f, "-{:02}", day)?;
            }
        }
        Ok(())
    }
}

/// A parsed EDTF expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edtf {
    Date(EdtfDate),
    Interval(EdtfDate, EdtfDate),
}

impl Edtf {
    /// CSL `date-parts`: one entry for a date, two (lower, upper) for an interval
    pub fn date_parts(&self) -> Vec<Vec<i32>> {
        match self {
            Edtf::Date(date) => vec![date.date_parts()],
            Edtf::Interval(lower, upper) => vec![lower.date_parts(), upper.date_parts()],
        }
    }
}

impl fmt::Display for Edtf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edtf::Date(date) => write!(f, "{}", date),
            Edtf::Interval(lower, upper) => write!(f, "{}/{}", lower, upper),
        }
    }
}

/// Parse an EDTF date or interval
pub fn parse_edtf(input: &str) -> Result<Edtf, EdtfParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(EdtfParseError::Empty);
    }

    let (_, parsed) = all_consuming(edtf)(input)
        .map_err(|_| EdtfParseError::Syntax(input.to_string()))?;

    match parsed {
        Edtf::Date(date) => Ok(Edtf::Date(date.validate()?)),
        Edtf::Interval(lower, upper) => Ok(Edtf::Interval(lower.validate()?, upper.validate()?)),
    }
}

fn edtf(input: &str) -> IResult<&str, Edtf> {
    alt((
        map(separated_pair(date, char('/'), date), |(lower, upper)| {
            Edtf::Interval(lower, upper)
        }),
        map(date, Edtf::Date),
    ))(input)
}

/// `YYYY[-MM[-DD]]`, unvalidated
fn date(input: &str) -> IResult<&str, EdtfDate> {
    map(
        tuple((
            year,
            opt(pair(preceded(char('-'), two_digits), opt(preceded(char('-'), two_digits)))),
        )),
        |(year, rest)| match rest {
            None => EdtfDate::year(year),
            Some((month, None)) => EdtfDate::year_month(year, month),
            Some((month, Some(day))) => EdtfDate::ymd(year, month, day),
        },
    )(input)
}

fn year(input: &str) -> IResult<&str, i32> {
    map_res(take_while_m_n(4, 4, |c: char| c.is_ascii_digit()), str::parse)(input)
}

fn two_digits(input: &str) -> IResult<&str, u32> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_digit()), str::parse)(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_edtf("2020"), Ok(Edtf::Date(EdtfDate::year(2020))));
    }

    #[test]
    fn test_parse_year_month_day() {
        let parsed = parse_edtf("2020-05-12").unwrap();
        assert_eq!(parsed, Edtf::Date(EdtfDate::ymd(2020, 5, 12)));
        assert_eq!(parsed.date_parts(), vec![vec![2020, 5, 12]]);
    }

    #[test]
    fn test_parse_interval() {
        let parsed = parse_edtf("2020/2021").unwrap();
        assert_eq!(parsed.date_parts(), vec![vec![2020], vec![2021]]);

        let mixed = parse_edtf("2019-12/2020-01-15").unwrap();
        assert_eq!(mixed.date_parts(), vec![vec![2019, 12], vec![2020, 1, 15]]);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(
            parse_edtf("  2020-05 "),
            Ok(Edtf::Date(EdtfDate::year_month(2020, 5)))
        );
    }

    #[test]
    fn test_rejects_invalid_calendar_dates() {
        assert!(matches!(
            parse_edtf("2021-02-30"),
            Err(EdtfParseError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_edtf("2020-13"),
            Err(EdtfParseError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_edtf("2020-00"),
            Err(EdtfParseError::InvalidDate(_))
        ));
        // 2020 is a leap year, 2021 is not
        assert!(parse_edtf("2020-02-29").is_ok());
        assert!(parse_edtf("2021-02-29").is_err());
    }

    #[test]
    fn test_rejects_unsupported_syntax() {
        for input in [
            "not a date",
            "20",
            "2020-5",
            "2020?",
            "2020~",
            "2020-21",
            "2020-05-12T10:00:00",
            "2020/",
            "../2020",
            "2020/2021/2022",
        ] {
            assert!(parse_edtf(input).is_err(), "expected {input:?} to fail");
        }
        assert_eq!(parse_edtf("   "), Err(EdtfParseError::Empty));
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(parse_edtf("2019-12/2020-01-15").unwrap().to_string(), "2019-12/2020-01-15");
        assert_eq!(parse_edtf("0987").unwrap().to_string(), "0987");
    }
}
