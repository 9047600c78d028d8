use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/// First calendar day of every generated series.
pub const SERIES_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(date) => date,
    None => panic!("invalid series epoch"),
};

const MONTHS_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Language used for the short day/month axis labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelLocale {
    /// `id-ID`: "17 Agu"
    #[default]
    Indonesian,
    /// `en`: "17 Aug"
    English,
}

impl LabelLocale {
    fn months(self) -> &'static [&'static str; 12] {
        match self {
            LabelLocale::Indonesian => &MONTHS_ID,
            LabelLocale::English => &MONTHS_EN,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            LabelLocale::Indonesian => "id",
            LabelLocale::English => "en",
        }
    }
}

impl fmt::Display for LabelLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LabelLocale {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" | "id-id" | "indonesian" => Ok(LabelLocale::Indonesian),
            "en" | "en-us" | "en-gb" | "english" => Ok(LabelLocale::English),
            other => Err(ParseError::UnknownLocale(other.to_string())),
        }
    }
}

/// Short label for a calendar day: unpadded day number and abbreviated month.
pub fn day_label(date: NaiveDate, locale: LabelLocale) -> String {
    format!("{} {}", date.day(), locale.months()[date.month0() as usize])
}

/// Label for the `index`-th day after [`SERIES_EPOCH`].
pub fn series_day_label(index: usize, locale: LabelLocale) -> String {
    let date = SERIES_EPOCH + chrono::Duration::days(index as i64);
    day_label(date, locale)
}
