//! Reference-data repository trait for countries and regions.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{CountryId, RegionId};
use crate::models::{Country, Region};

/// Repository trait for reference data.
///
/// Supplies `(country code -> name, population)` and
/// `(region code -> name, population)` lookups for the load aggregator and
/// the CRUD surface of the admin endpoints.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ReferenceRepository: Send + Sync {
    // ==================== Countries ====================

    /// List all countries.
    async fn list_countries(&self) -> RepositoryResult<Vec<Country>>;

    /// Count stored countries. Used for the boot-seed skip check and the
    /// health endpoint.
    async fn count_countries(&self) -> RepositoryResult<usize>;

    /// Look up a country by its ISO 3166-1 alpha-2 code.
    ///
    /// # Returns
    /// * `Ok(None)` when no country with that code exists
    async fn get_country_by_code(&self, code: &str) -> RepositoryResult<Option<Country>>;

    /// Store a new country. The code must be unique.
    ///
    /// # Returns
    /// * `Ok(Country)` - The stored country with its assigned id
    /// * `Err(RepositoryError::Conflict)` - If the code is already taken
    async fn save_country(&self, country: Country) -> RepositoryResult<Country>;

    /// Update a country's name and (optionally) population.
    async fn update_country(
        &self,
        id: CountryId,
        name: &str,
        population: Option<i64>,
    ) -> RepositoryResult<Country>;

    /// Delete a country and all of its regions.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of regions removed alongside the country
    async fn delete_country(&self, id: CountryId) -> RepositoryResult<usize>;

    // ==================== Regions ====================

    /// List all regions.
    async fn list_regions(&self) -> RepositoryResult<Vec<Region>>;

    /// List the regions of one country.
    async fn list_regions_by_country(&self, country_code: &str) -> RepositoryResult<Vec<Region>>;

    /// Look up a region by its ISO 3166-2 code.
    async fn get_region_by_code(&self, code: &str) -> RepositoryResult<Option<Region>>;

    /// Store a new region. The code must be unique and the country must
    /// exist.
    async fn save_region(&self, region: Region) -> RepositoryResult<Region>;

    /// Update a region's name and (optionally) population.
    async fn update_region(
        &self,
        id: RegionId,
        name: &str,
        population: Option<i64>,
    ) -> RepositoryResult<Region>;

    /// Delete a region by id.
    async fn delete_region(&self, id: RegionId) -> RepositoryResult<()>;
}
