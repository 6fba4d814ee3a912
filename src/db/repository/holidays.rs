//! Holiday repository trait for public holidays and school breaks.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use crate::api::{HolidayId, SchoolHolidayId};
use crate::models::{PublicHoliday, SchoolHoliday};

/// Repository trait for holiday records.
///
/// The load aggregator assumes the returned lists are already filtered to
/// the requested country and year; these queries do exactly that.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait HolidayRepository: Send + Sync {
    // ==================== Public holidays ====================

    /// Public holidays of one country and year.
    async fn list_public_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> RepositoryResult<Vec<PublicHoliday>>;

    /// Store a single public holiday.
    async fn save_public_holiday(&self, holiday: PublicHoliday)
        -> RepositoryResult<PublicHoliday>;

    /// Store a batch of public holidays, returning them with assigned ids.
    async fn save_public_holidays(
        &self,
        holidays: Vec<PublicHoliday>,
    ) -> RepositoryResult<Vec<PublicHoliday>>;

    /// Delete all public holidays of one country and year.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records removed
    async fn delete_public_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> RepositoryResult<usize>;

    /// Delete one public holiday by id.
    async fn delete_public_holiday(&self, id: HolidayId) -> RepositoryResult<()>;

    // ==================== School holidays ====================

    /// All school holidays in the store.
    async fn list_school_holidays(&self) -> RepositoryResult<Vec<SchoolHoliday>>;

    /// School holidays of one region filed under `year`.
    async fn school_holidays_by_region_and_year(
        &self,
        region_code: &str,
        year: i32,
    ) -> RepositoryResult<Vec<SchoolHoliday>>;

    /// School holidays of one region overlapping the inclusive date range.
    async fn school_holidays_by_region_in_range(
        &self,
        region_code: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> RepositoryResult<Vec<SchoolHoliday>>;

    /// School holidays of all regions of one country filed under `year`.
    async fn school_holidays_by_country_and_year(
        &self,
        country_code: &str,
        year: i32,
    ) -> RepositoryResult<Vec<SchoolHoliday>>;

    /// Store a single school holiday. The region must exist.
    async fn save_school_holiday(
        &self,
        school_holiday: SchoolHoliday,
    ) -> RepositoryResult<SchoolHoliday>;

    /// Store a batch of school holidays, returning them with assigned ids.
    async fn save_school_holidays(
        &self,
        school_holidays: Vec<SchoolHoliday>,
    ) -> RepositoryResult<Vec<SchoolHoliday>>;

    /// Delete the school holidays of one region and year.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records removed
    async fn delete_school_holidays_by_region_and_year(
        &self,
        region_code: &str,
        year: i32,
    ) -> RepositoryResult<usize>;

    /// Delete one school holiday by id.
    async fn delete_school_holiday(&self, id: SchoolHolidayId) -> RepositoryResult<()>;

    // ==================== Import bookkeeping ====================

    /// Checksum of the most recent provider payload imported for
    /// `(country_code, year)`, if any.
    async fn get_import_checksum(
        &self,
        country_code: &str,
        year: i32,
    ) -> RepositoryResult<Option<String>>;

    /// Record the checksum of a freshly imported provider payload.
    async fn put_import_checksum(
        &self,
        country_code: &str,
        year: i32,
        checksum: &str,
    ) -> RepositoryResult<()>;
}
