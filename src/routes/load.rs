use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =========================================================
// Vacation-load types
// =========================================================

/// Population load for a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLoad {
    pub date: NaiveDate,
    pub school_holiday_population: i64,
    pub public_holiday_population: i64,
    /// Always `school_holiday_population + public_holiday_population`.
    pub total_population: i64,
}

/// Population load for one ISO calendar week.
///
/// `school_holiday_population` is the maximum over the week's days, so
/// concurrent regional breaks never inflate the weekly figure beyond the
/// single busiest day. `public_holiday_population` is the sum over the
/// week's days; distinct holiday-days are additive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyLoad {
    /// ISO week-of-year number (1..=53).
    pub week_number: u32,
    /// Monday of the first day folded into this week.
    pub week_start: NaiveDate,
    /// Sunday of the first day folded into this week.
    pub week_end: NaiveDate,
    pub school_holiday_population: i64,
    pub public_holiday_population: i64,
    pub total_population: i64,
    /// `"<region>: <name>"` labels, deduplicated, in first-seen date order.
    pub active_school_holidays: Vec<String>,
    /// Local holiday names, deduplicated, in first-seen date order.
    pub active_public_holidays: Vec<String>,
}

/// The dominant contiguous stretch of vacation-load weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakPeriod {
    pub start_week: u32,
    pub end_week: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// School-holiday population of the peak week.
    pub max_population: i64,
    /// Human-readable summary, e.g. "Week 27-35: 17.9M people on Sommerferien".
    pub description: String,
}

/// Complete vacation-load dataset for one country and year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationLoadData {
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_population: Option<i64>,
    pub weekly_loads: Vec<WeeklyLoad>,
    pub daily_loads: Vec<DailyLoad>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_period: Option<PeakPeriod>,
}
