//! Data Transfer Objects for the HTTP API.
//!
//! Result-shaped DTOs (load series, analysis bundles) live in the routes
//! module and are re-exported here; this file adds the request bodies and
//! query parameter types that exist only at the HTTP boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    DailyLoad, PeakPeriod, VacationAnalysisData, VacationLoadData, WeeklyLoad,
};
pub use crate::models::{Country, PublicHoliday, Region, SchoolHoliday};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// Request body for login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response for a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub role: String,
}

/// Response for token validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Query parameters for the vacation load endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationLoadQuery {
    #[serde(default = "default_country_code")]
    pub country_code: String,
    pub year: i32,
}

fn default_country_code() -> String {
    "DE".to_string()
}

/// Query parameters for the vacation analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationAnalysisQuery {
    pub country: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub subdivision: Option<String>,
}

/// Query parameters for listing regions.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegionsQuery {
    #[serde(default)]
    pub country_code: Option<String>,
}

/// Query parameters for listing public holidays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidaysQuery {
    pub country: String,
    pub year: i32,
}

/// Query parameters for listing school holidays. The filters are applied
/// with fixed precedence: (region, year), then (region, date range), then
/// (country, year), then no filter.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SchoolHolidaysQuery {
    #[serde(default)]
    pub region_code: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Query parameters for a single-country import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportQuery {
    pub country: String,
    pub year: i32,
}

/// Query parameters for an all-countries import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportAllQuery {
    pub year: i32,
}

/// Response for a single-country import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    pub country: String,
    pub year: i32,
    pub imported: usize,
    pub holidays: Vec<PublicHoliday>,
}

/// Response for an all-countries import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportAllResponse {
    pub year: i32,
    pub results: Vec<ImportCountResult>,
}

/// Imported record count for one country.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportCountResult {
    pub country: String,
    pub imported: usize,
}

/// Request body for creating a country.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCountryRequest {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub population: Option<i64>,
}

/// Request body for updating a country or region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNamedRequest {
    pub name: String,
    #[serde(default)]
    pub population: Option<i64>,
}

/// Request body for creating a region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRegionRequest {
    pub code: String,
    pub name: String,
    pub country_code: String,
    #[serde(default)]
    pub population: Option<i64>,
}

/// Request body for creating a public holiday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHolidayRequest {
    pub country_code: String,
    pub date: NaiveDate,
    pub local_name: String,
    pub english_name: String,
    #[serde(default)]
    pub global: bool,
    #[serde(default)]
    pub region_code: Option<String>,
    #[serde(default)]
    pub types: Option<String>,
}

/// Request body for creating a school holiday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSchoolHolidayRequest {
    pub name: String,
    pub region_code: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Query parameters for deleting school holidays by region and year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSchoolHolidaysQuery {
    pub region_code: String,
    pub year: i32,
}

/// Response for bulk deletions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: usize,
}
