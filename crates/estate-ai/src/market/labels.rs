use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// How period labels are rendered for a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Month,
    Quarter,
}

impl Granularity {
    /// Windows of up to a year are labelled by month, longer ones by quarter.
    pub const fn for_point_count(point_count: usize) -> Self {
        if point_count <= 12 {
            Self::Month
        } else {
            Self::Quarter
        }
    }
}

/// A calendar month, `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
}

impl CalendarMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Shifts by `months`, carrying into the year in either direction.
    pub fn offset(self, months: i64) -> Self {
        let absolute = i64::from(self.year) * 12 + i64::from(self.month - 1) + months;
        Self {
            year: absolute.div_euclid(12) as i32,
            month: absolute.rem_euclid(12) as u32 + 1,
        }
    }

    pub const fn quarter(self) -> u32 {
        (self.month - 1) / 3 + 1
    }

    pub fn month_name(self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

/// A label decoded back into its calendar position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodLabel {
    Month(CalendarMonth),
    Quarter { year: i32, quarter: u32 },
}

impl PeriodLabel {
    pub fn new(month: CalendarMonth, granularity: Granularity) -> Self {
        match granularity {
            Granularity::Month => Self::Month(month),
            Granularity::Quarter => Self::Quarter {
                year: month.year,
                quarter: month.quarter(),
            },
        }
    }
}

impl fmt::Display for PeriodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodLabel::Month(month) => f.write_str(month.month_name()),
            PeriodLabel::Quarter { year, quarter } => write!(f, "Q{} {}", quarter, year),
        }
    }
}

/// Month offset of a point relative to the reference month. History ends the month
/// before the reference; forecasts start the month after it.
pub const fn month_offset(index: usize, total_historical: usize, is_future: bool) -> i64 {
    if is_future {
        index as i64 + 1
    } else {
        index as i64 - total_historical as i64
    }
}

pub fn period_for(
    index: usize,
    total_historical: usize,
    is_future: bool,
    reference: NaiveDate,
) -> CalendarMonth {
    CalendarMonth::of(reference).offset(month_offset(index, total_historical, is_future))
}

/// Label for one point. The reference month itself is never labelled: history stops the
/// month before it and the forecast resumes the month after.
pub fn label(
    index: usize,
    total_historical: usize,
    is_future: bool,
    granularity: Granularity,
    reference: NaiveDate,
) -> String {
    let month = period_for(index, total_historical, is_future, reference);
    PeriodLabel::new(month, granularity).to_string()
}
