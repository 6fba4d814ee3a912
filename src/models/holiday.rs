//! Holiday entities: public holidays and school-holiday intervals.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::api::{HolidayId, SchoolHolidayId};

/// A single-date public holiday.
///
/// National holidays carry `region_code: None` and apply to the whole
/// country; regional holidays are stored as one record per affected region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<HolidayId>,
    pub country_code: String,
    pub date: NaiveDate,
    pub local_name: String,
    pub english_name: String,
    /// True when the provider marks the holiday as country-wide.
    pub global: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    /// Comma-joined provider type labels (e.g. "Public,Bank").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    pub year: i32,
}

impl PublicHoliday {
    /// True when the holiday applies to the whole country.
    pub fn is_national(&self) -> bool {
        self.region_code.is_none()
    }
}

/// A named, region-scoped school break. Dates are inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolHoliday {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<SchoolHolidayId>,
    pub name: String,
    pub region_code: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// The school year the break is filed under. Breaks spanning the year
    /// boundary (Weihnachtsferien) keep the year they start in.
    pub year: i32,
}

impl SchoolHoliday {
    pub fn new(
        name: impl Into<String>,
        region_code: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        let year = start_date.year();
        Self {
            id: None,
            name: name.into(),
            region_code: region_code.into(),
            start_date,
            end_date,
            year,
        }
    }

    /// True when the break overlaps the inclusive `[start, end]` range.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.end_date >= start && self.start_date <= end
    }
}
