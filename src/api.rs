//! Public API surface for the holiday analyzer.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::analysis::VacationAnalysisData;
pub use crate::routes::load::DailyLoad;
pub use crate::routes::load::PeakPeriod;
pub use crate::routes::load::VacationLoadData;
pub use crate::routes::load::WeeklyLoad;

pub use crate::services::vacation_load::PublicHolidayEvent;
pub use crate::services::vacation_load::SchoolHolidayInterval;

use serde::{Deserialize, Serialize};

/// Country identifier (store primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CountryId(pub i64);

/// Region identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RegionId(pub i64);

/// Public-holiday identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HolidayId(pub i64);

/// School-holiday identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SchoolHolidayId(pub i64);

impl CountryId {
    pub fn new(value: i64) -> Self {
        CountryId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl RegionId {
    pub fn new(value: i64) -> Self {
        RegionId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl HolidayId {
    pub fn new(value: i64) -> Self {
        HolidayId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl SchoolHolidayId {
    pub fn new(value: i64) -> Self {
        SchoolHolidayId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CountryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for HolidayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for SchoolHolidayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CountryId> for i64 {
    fn from(id: CountryId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_newtypes() {
        let id = RegionId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(format!("{}", id), "42");
        assert_eq!(i64::from(CountryId::new(7)), 7);
    }
}
