//! Vacation-load aggregation and peak-period detection.
//!
//! The core of the analyzer: fold population-weighted holiday intervals
//! into a daily series for one calendar year, collapse the days into ISO
//! calendar weeks, and extract the dominant contiguous peak window.
//!
//! The whole pipeline is a pure synchronous fold with no I/O; all working
//! state is local to the call, so concurrent computations for different
//! country/year pairs need no coordination.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::db::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::routes::load::{DailyLoad, PeakPeriod, VacationLoadData, WeeklyLoad};

/// One named school break for one region, with the region's population
/// already resolved. Intervals whose population could not be resolved are
/// skipped entirely during the fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolHolidayInterval {
    pub name: String,
    pub region_name: String,
    pub region_population: Option<i64>,
    /// Inclusive.
    pub start_date: NaiveDate,
    /// Inclusive, `>= start_date` for well-formed input. A degenerate range
    /// contributes nothing.
    pub end_date: NaiveDate,
}

/// One public-holiday day with its effective population: the region's
/// population for regional holidays, the country's for national ones.
/// Events without an effective population are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicHolidayEvent {
    pub local_name: String,
    pub date: NaiveDate,
    pub effective_population: Option<i64>,
}

/// Peak-window expansion keeps weeks within this fraction of the peak.
const PEAK_THRESHOLD_RATIO: f64 = 0.8;

/// Known break names, tested in order against the free-text labels of the
/// peak window. First match wins, mirroring the source data's vocabulary.
const HOLIDAY_KINDS: [&str; 6] = [
    "Sommerferien",
    "Osterferien",
    "Herbstferien",
    "Weihnachtsferien",
    "Winterferien",
    "Pfingstferien",
];

/// Per-day accumulator used during the fold. Detail labels are kept as
/// ordered sets: each label at most once per day, in first-seen order.
#[derive(Debug, Clone)]
pub struct DayAccumulator {
    pub date: NaiveDate,
    pub school_holiday_population: i64,
    pub public_holiday_population: i64,
    pub school_holiday_details: Vec<String>,
    pub public_holiday_details: Vec<String>,
}

impl DayAccumulator {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            school_holiday_population: 0,
            public_holiday_population: 0,
            school_holiday_details: Vec::new(),
            public_holiday_details: Vec::new(),
        }
    }
}

fn push_unique(details: &mut Vec<String>, label: &str) {
    if !details.iter().any(|d| d == label) {
        details.push(label.to_string());
    }
}

/// Build the zero-initialized daily series for `year` and fold every
/// interval and event into it.
///
/// Output is one entry per calendar day from Jan 1 to Dec 31, in date
/// order. Dates outside the year find no slot and are silently excluded,
/// which clips breaks spanning the year boundary. Numeric populations are
/// accumulated additively (supplying the same interval twice double-counts
/// it); only the detail labels are deduplicated.
pub fn build_daily_series(
    school_holidays: &[SchoolHolidayInterval],
    public_holidays: &[PublicHolidayEvent],
    year: i32,
) -> Vec<DayAccumulator> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1).expect("Jan 1 exists for every year");
    let last = NaiveDate::from_ymd_opt(year, 12, 31).expect("Dec 31 exists for every year");
    let day_count = last.ordinal() as usize;

    // Fixed-capacity array indexed by day-of-year ordinal; no hashing in
    // the fold's hot loop.
    let mut days: Vec<DayAccumulator> = Vec::with_capacity(day_count);
    let mut date = first;
    while date <= last {
        days.push(DayAccumulator::new(date));
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    for interval in school_holidays {
        let population = match interval.region_population {
            Some(p) => p,
            None => continue,
        };
        let label = format!("{}: {}", interval.region_name, interval.name);

        let mut date = interval.start_date;
        while date <= interval.end_date {
            if date.year() == year {
                let day = &mut days[date.ordinal() as usize - 1];
                day.school_holiday_population += population;
                push_unique(&mut day.school_holiday_details, &label);
            }
            date = match date.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
    }

    for event in public_holidays {
        let population = match event.effective_population {
            Some(p) => p,
            None => continue,
        };
        if event.date.year() == year {
            let day = &mut days[event.date.ordinal() as usize - 1];
            day.public_holiday_population += population;
            push_unique(&mut day.public_holiday_details, &event.local_name);
        }
    }

    days
}

/// Flatten the accumulators into the daily DTO list. `total_population`
/// is computed here, once, after all folding.
pub fn to_daily_loads(days: &[DayAccumulator]) -> Vec<DailyLoad> {
    days.iter()
        .map(|day| DailyLoad {
            date: day.date,
            school_holiday_population: day.school_holiday_population,
            public_holiday_population: day.public_holiday_population,
            total_population: day.school_holiday_population + day.public_holiday_population,
        })
        .collect()
}

/// Collapse the daily series into one entry per ISO week number that
/// appears among the year's dates, in ascending week-number order.
///
/// Weeks are keyed by the plain week-of-year number. Late-December days
/// whose ISO week belongs to the following week-based year therefore merge
/// into the same-numbered entry created in January. `week_start`/`week_end`
/// come from the first day folded into each entry.
pub fn aggregate_by_week(days: &[DayAccumulator]) -> Vec<WeeklyLoad> {
    // Week numbers run 1..=53; slot 0 stays empty.
    let mut weeks: [Option<WeeklyLoad>; 54] = std::array::from_fn(|_| None);

    for day in days {
        let week_number = day.date.iso_week().week();
        let slot = &mut weeks[week_number as usize];

        let week = slot.get_or_insert_with(|| {
            let monday = day.date
                - Duration::days(day.date.weekday().num_days_from_monday() as i64);
            WeeklyLoad {
                week_number,
                week_start: monday,
                week_end: monday + Duration::days(6),
                school_holiday_population: 0,
                public_holiday_population: 0,
                total_population: 0,
                active_school_holidays: Vec::new(),
                active_public_holidays: Vec::new(),
            }
        });

        week.school_holiday_population = week
            .school_holiday_population
            .max(day.school_holiday_population);
        week.public_holiday_population += day.public_holiday_population;

        for detail in &day.school_holiday_details {
            push_unique(&mut week.active_school_holidays, detail);
        }
        for detail in &day.public_holiday_details {
            push_unique(&mut week.active_public_holidays, detail);
        }
    }

    let mut result: Vec<WeeklyLoad> = weeks.into_iter().flatten().collect();
    for week in &mut result {
        week.total_population = week.school_holiday_population + week.public_holiday_population;
    }
    result
}

/// Identify the single contiguous run of weeks constituting the dominant
/// vacation-load period. Returns `None` when no weekly data exists.
///
/// The peak week is the week with the maximum school-holiday population,
/// earliest week number winning ties. The window expands outward from it
/// while adjacent week numbers exist in the data and stay at or above 80%
/// of the peak; the first missing or below-threshold week stops the
/// expansion on that side for good.
pub fn find_peak_period(weekly_loads: &[WeeklyLoad]) -> Option<PeakPeriod> {
    let mut peak_week = weekly_loads.first()?;
    for week in &weekly_loads[1..] {
        if week.school_holiday_population > peak_week.school_holiday_population {
            peak_week = week;
        }
    }

    let threshold =
        (peak_week.school_holiday_population as f64 * PEAK_THRESHOLD_RATIO) as i64;
    let week_by_number =
        |n: u32| weekly_loads.iter().find(|w| w.week_number == n);

    let mut start_week = peak_week.week_number;
    for n in (1..peak_week.week_number).rev() {
        match week_by_number(n) {
            Some(w) if w.school_holiday_population >= threshold => start_week = n,
            _ => break,
        }
    }

    let mut end_week = peak_week.week_number;
    for n in peak_week.week_number + 1..=53 {
        match week_by_number(n) {
            Some(w) if w.school_holiday_population >= threshold => end_week = n,
            _ => break,
        }
    }

    let start_data = week_by_number(start_week).unwrap_or(peak_week);
    let end_data = week_by_number(end_week).unwrap_or(peak_week);

    // Classify the break kinds active inside the window. First-seen order,
    // each kind at most once.
    let mut kinds: Vec<&str> = Vec::new();
    for week in weekly_loads {
        if week.week_number < start_week || week.week_number > end_week {
            continue;
        }
        for detail in &week.active_school_holidays {
            if let Some(kind) = HOLIDAY_KINDS.iter().find(|k| detail.contains(*k)) {
                if !kinds.contains(kind) {
                    kinds.push(kind);
                }
            }
        }
    }

    let max_population = peak_week.school_holiday_population;
    let description = format!(
        "Week {}-{}: {:.1}M people on {}",
        start_week,
        end_week,
        max_population as f64 / 1_000_000.0,
        kinds.join(", ")
    );

    Some(PeakPeriod {
        start_week,
        end_week,
        start_date: start_data.week_start,
        end_date: end_data.week_end,
        max_population,
        description,
    })
}

/// Run the full pipeline over already-resolved inputs.
pub fn compute_vacation_load(
    school_holidays: &[SchoolHolidayInterval],
    public_holidays: &[PublicHolidayEvent],
    country_population: Option<i64>,
    year: i32,
) -> VacationLoadData {
    let days = build_daily_series(school_holidays, public_holidays, year);
    let weekly_loads = aggregate_by_week(&days);
    let daily_loads = to_daily_loads(&days);
    let peak_period = find_peak_period(&weekly_loads);

    VacationLoadData {
        year,
        country_population,
        weekly_loads,
        daily_loads,
        peak_period,
    }
}

/// Resolve the inputs for `country_code`/`year` from the store and compute
/// the vacation load.
///
/// The country must exist; anything else with an unresolved population is
/// tolerated and simply excluded from the fold.
pub async fn calculate_vacation_load(
    repository: &dyn FullRepository,
    country_code: &str,
    year: i32,
) -> RepositoryResult<VacationLoadData> {
    let country = repository
        .get_country_by_code(country_code)
        .await?
        .ok_or_else(|| {
            RepositoryError::not_found(format!("Country not found: {}", country_code))
        })?;

    let regions = repository.list_regions_by_country(country_code).await?;
    let regions_by_code: HashMap<&str, &crate::models::Region> =
        regions.iter().map(|r| (r.code.as_str(), r)).collect();

    let school_holidays = repository
        .school_holidays_by_country_and_year(country_code, year)
        .await?;
    let intervals: Vec<SchoolHolidayInterval> = school_holidays
        .iter()
        .map(|sh| {
            let region = regions_by_code.get(sh.region_code.as_str());
            SchoolHolidayInterval {
                name: sh.name.clone(),
                region_name: region.map(|r| r.name.clone()).unwrap_or_default(),
                region_population: region.and_then(|r| r.population),
                start_date: sh.start_date,
                end_date: sh.end_date,
            }
        })
        .collect();

    let public_holidays = repository.list_public_holidays(country_code, year).await?;
    let events: Vec<PublicHolidayEvent> = public_holidays
        .iter()
        .map(|h| {
            let effective_population = match &h.region_code {
                Some(code) => regions_by_code.get(code.as_str()).and_then(|r| r.population),
                None => country.population,
            };
            PublicHolidayEvent {
                local_name: h.local_name.clone(),
                date: h.date,
                effective_population,
            }
        })
        .collect();

    Ok(compute_vacation_load(
        &intervals,
        &events,
        country.population,
        year,
    ))
}
