//! In-memory repository implementation.
//!
//! Backs the whole application: the store is embedded and reseeded at
//! boot, so no external database is involved. All collections live behind
//! a single `parking_lot::RwLock`; ids are assigned from one monotonic
//! counter.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;

use super::super::repository::{
    ErrorContext, HolidayRepository, ReferenceRepository, RepositoryError, RepositoryResult,
};
use crate::api::{CountryId, HolidayId, RegionId, SchoolHolidayId};
use crate::models::{Country, PublicHoliday, Region, SchoolHoliday};

#[derive(Default)]
struct Store {
    countries: Vec<Country>,
    regions: Vec<Region>,
    public_holidays: Vec<PublicHoliday>,
    school_holidays: Vec<SchoolHoliday>,
    import_checksums: HashMap<(String, i32), String>,
    next_id: i64,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory implementation of the repository traits.
pub struct LocalRepository {
    store: RwLock<Store>,
}

impl LocalRepository {
    /// Create a new, empty repository.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReferenceRepository for LocalRepository {
    async fn list_countries(&self) -> RepositoryResult<Vec<Country>> {
        Ok(self.store.read().countries.clone())
    }

    async fn count_countries(&self) -> RepositoryResult<usize> {
        Ok(self.store.read().countries.len())
    }

    async fn get_country_by_code(&self, code: &str) -> RepositoryResult<Option<Country>> {
        Ok(self
            .store
            .read()
            .countries
            .iter()
            .find(|c| c.code == code)
            .cloned())
    }

    async fn save_country(&self, mut country: Country) -> RepositoryResult<Country> {
        let mut store = self.store.write();
        if store.countries.iter().any(|c| c.code == country.code) {
            return Err(RepositoryError::conflict_with_context(
                format!("Country with code {} already exists", country.code),
                ErrorContext::new("save_country")
                    .with_entity("country")
                    .with_entity_id(&country.code),
            ));
        }
        country.id = Some(CountryId::new(store.next_id()));
        store.countries.push(country.clone());
        Ok(country)
    }

    async fn update_country(
        &self,
        id: CountryId,
        name: &str,
        population: Option<i64>,
    ) -> RepositoryResult<Country> {
        let mut store = self.store.write();
        let country = store
            .countries
            .iter_mut()
            .find(|c| c.id == Some(id))
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Country not found: {}", id),
                    ErrorContext::new("update_country").with_entity("country"),
                )
            })?;
        country.name = name.to_string();
        if population.is_some() {
            country.population = population;
        }
        Ok(country.clone())
    }

    async fn delete_country(&self, id: CountryId) -> RepositoryResult<usize> {
        let mut store = self.store.write();
        let position = store
            .countries
            .iter()
            .position(|c| c.id == Some(id))
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Country not found: {}", id),
                    ErrorContext::new("delete_country").with_entity("country"),
                )
            })?;
        let country = store.countries.remove(position);

        let before = store.regions.len();
        store.regions.retain(|r| r.country_code != country.code);
        Ok(before - store.regions.len())
    }

    async fn list_regions(&self) -> RepositoryResult<Vec<Region>> {
        Ok(self.store.read().regions.clone())
    }

    async fn list_regions_by_country(&self, country_code: &str) -> RepositoryResult<Vec<Region>> {
        Ok(self
            .store
            .read()
            .regions
            .iter()
            .filter(|r| r.country_code == country_code)
            .cloned()
            .collect())
    }

    async fn get_region_by_code(&self, code: &str) -> RepositoryResult<Option<Region>> {
        Ok(self
            .store
            .read()
            .regions
            .iter()
            .find(|r| r.code == code)
            .cloned())
    }

    async fn save_region(&self, mut region: Region) -> RepositoryResult<Region> {
        let mut store = self.store.write();
        if !store.countries.iter().any(|c| c.code == region.country_code) {
            return Err(RepositoryError::not_found_with_context(
                format!("Country not found: {}", region.country_code),
                ErrorContext::new("save_region").with_entity("country"),
            ));
        }
        if store.regions.iter().any(|r| r.code == region.code) {
            return Err(RepositoryError::conflict_with_context(
                format!("Region with code {} already exists", region.code),
                ErrorContext::new("save_region")
                    .with_entity("region")
                    .with_entity_id(&region.code),
            ));
        }
        region.id = Some(RegionId::new(store.next_id()));
        store.regions.push(region.clone());
        Ok(region)
    }

    async fn update_region(
        &self,
        id: RegionId,
        name: &str,
        population: Option<i64>,
    ) -> RepositoryResult<Region> {
        let mut store = self.store.write();
        let region = store
            .regions
            .iter_mut()
            .find(|r| r.id == Some(id))
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Region not found: {}", id),
                    ErrorContext::new("update_region").with_entity("region"),
                )
            })?;
        region.name = name.to_string();
        if population.is_some() {
            region.population = population;
        }
        Ok(region.clone())
    }

    async fn delete_region(&self, id: RegionId) -> RepositoryResult<()> {
        let mut store = self.store.write();
        let position = store
            .regions
            .iter()
            .position(|r| r.id == Some(id))
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Region not found: {}", id),
                    ErrorContext::new("delete_region").with_entity("region"),
                )
            })?;
        store.regions.remove(position);
        Ok(())
    }
}

#[async_trait]
impl HolidayRepository for LocalRepository {
    async fn list_public_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> RepositoryResult<Vec<PublicHoliday>> {
        Ok(self
            .store
            .read()
            .public_holidays
            .iter()
            .filter(|h| h.country_code == country_code && h.year == year)
            .cloned()
            .collect())
    }

    async fn save_public_holiday(
        &self,
        mut holiday: PublicHoliday,
    ) -> RepositoryResult<PublicHoliday> {
        let mut store = self.store.write();
        holiday.id = Some(HolidayId::new(store.next_id()));
        store.public_holidays.push(holiday.clone());
        Ok(holiday)
    }

    async fn save_public_holidays(
        &self,
        holidays: Vec<PublicHoliday>,
    ) -> RepositoryResult<Vec<PublicHoliday>> {
        let mut store = self.store.write();
        let mut saved = Vec::with_capacity(holidays.len());
        for mut holiday in holidays {
            holiday.id = Some(HolidayId::new(store.next_id()));
            store.public_holidays.push(holiday.clone());
            saved.push(holiday);
        }
        Ok(saved)
    }

    async fn delete_public_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> RepositoryResult<usize> {
        let mut store = self.store.write();
        let before = store.public_holidays.len();
        store
            .public_holidays
            .retain(|h| !(h.country_code == country_code && h.year == year));
        Ok(before - store.public_holidays.len())
    }

    async fn delete_public_holiday(&self, id: HolidayId) -> RepositoryResult<()> {
        let mut store = self.store.write();
        let position = store
            .public_holidays
            .iter()
            .position(|h| h.id == Some(id))
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Holiday not found: {}", id),
                    ErrorContext::new("delete_public_holiday").with_entity("public_holiday"),
                )
            })?;
        store.public_holidays.remove(position);
        Ok(())
    }

    async fn list_school_holidays(&self) -> RepositoryResult<Vec<SchoolHoliday>> {
        Ok(self.store.read().school_holidays.clone())
    }

    async fn school_holidays_by_region_and_year(
        &self,
        region_code: &str,
        year: i32,
    ) -> RepositoryResult<Vec<SchoolHoliday>> {
        Ok(self
            .store
            .read()
            .school_holidays
            .iter()
            .filter(|sh| sh.region_code == region_code && sh.year == year)
            .cloned()
            .collect())
    }

    async fn school_holidays_by_region_in_range(
        &self,
        region_code: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> RepositoryResult<Vec<SchoolHoliday>> {
        Ok(self
            .store
            .read()
            .school_holidays
            .iter()
            .filter(|sh| sh.region_code == region_code && sh.overlaps(start_date, end_date))
            .cloned()
            .collect())
    }

    async fn school_holidays_by_country_and_year(
        &self,
        country_code: &str,
        year: i32,
    ) -> RepositoryResult<Vec<SchoolHoliday>> {
        let store = self.store.read();
        let region_codes: Vec<&str> = store
            .regions
            .iter()
            .filter(|r| r.country_code == country_code)
            .map(|r| r.code.as_str())
            .collect();
        Ok(store
            .school_holidays
            .iter()
            .filter(|sh| sh.year == year && region_codes.contains(&sh.region_code.as_str()))
            .cloned()
            .collect())
    }

    async fn save_school_holiday(
        &self,
        mut school_holiday: SchoolHoliday,
    ) -> RepositoryResult<SchoolHoliday> {
        let mut store = self.store.write();
        if !store
            .regions
            .iter()
            .any(|r| r.code == school_holiday.region_code)
        {
            return Err(RepositoryError::not_found_with_context(
                format!("Region not found: {}", school_holiday.region_code),
                ErrorContext::new("save_school_holiday").with_entity("region"),
            ));
        }
        school_holiday.id = Some(SchoolHolidayId::new(store.next_id()));
        store.school_holidays.push(school_holiday.clone());
        Ok(school_holiday)
    }

    async fn save_school_holidays(
        &self,
        school_holidays: Vec<SchoolHoliday>,
    ) -> RepositoryResult<Vec<SchoolHoliday>> {
        let mut saved = Vec::with_capacity(school_holidays.len());
        for school_holiday in school_holidays {
            saved.push(self.save_school_holiday(school_holiday).await?);
        }
        Ok(saved)
    }

    async fn delete_school_holidays_by_region_and_year(
        &self,
        region_code: &str,
        year: i32,
    ) -> RepositoryResult<usize> {
        let mut store = self.store.write();
        let before = store.school_holidays.len();
        store
            .school_holidays
            .retain(|sh| !(sh.region_code == region_code && sh.year == year));
        Ok(before - store.school_holidays.len())
    }

    async fn delete_school_holiday(&self, id: SchoolHolidayId) -> RepositoryResult<()> {
        let mut store = self.store.write();
        let position = store
            .school_holidays
            .iter()
            .position(|sh| sh.id == Some(id))
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("School holiday not found: {}", id),
                    ErrorContext::new("delete_school_holiday").with_entity("school_holiday"),
                )
            })?;
        store.school_holidays.remove(position);
        Ok(())
    }

    async fn get_import_checksum(
        &self,
        country_code: &str,
        year: i32,
    ) -> RepositoryResult<Option<String>> {
        Ok(self
            .store
            .read()
            .import_checksums
            .get(&(country_code.to_string(), year))
            .cloned())
    }

    async fn put_import_checksum(
        &self,
        country_code: &str,
        year: i32,
        checksum: &str,
    ) -> RepositoryResult<()> {
        self.store
            .write()
            .import_checksums
            .insert((country_code.to_string(), year), checksum.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_country_code_is_unique() {
        let repo = LocalRepository::new();
        repo.save_country(Country::new("DE", "Germany", Some(83_240_000)))
            .await
            .unwrap();
        let result = repo.save_country(Country::new("DE", "Duplicate", None)).await;
        assert!(matches!(result, Err(RepositoryError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_region_requires_country() {
        let repo = LocalRepository::new();
        let result = repo
            .save_region(Region::new("DE-BY", "Bayern", "DE", Some(13_100_000)))
            .await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_country_cascades_to_regions() {
        let repo = LocalRepository::new();
        let country = repo
            .save_country(Country::new("DE", "Germany", Some(83_240_000)))
            .await
            .unwrap();
        repo.save_region(Region::new("DE-BY", "Bayern", "DE", Some(13_100_000)))
            .await
            .unwrap();
        repo.save_region(Region::new("DE-BW", "Baden-Württemberg", "DE", Some(11_100_000)))
            .await
            .unwrap();

        let removed = repo.delete_country(country.id.unwrap()).await.unwrap();
        assert_eq!(removed, 2);
        assert!(repo.list_regions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_school_holidays_by_country_joins_regions() {
        let repo = LocalRepository::new();
        repo.save_country(Country::new("DE", "Germany", None)).await.unwrap();
        repo.save_country(Country::new("AT", "Austria", None)).await.unwrap();
        repo.save_region(Region::new("DE-BY", "Bayern", "DE", None)).await.unwrap();
        repo.save_region(Region::new("AT-9", "Wien", "AT", None)).await.unwrap();

        repo.save_school_holiday(SchoolHoliday::new(
            "Sommerferien",
            "DE-BY",
            date(2025, 8, 1),
            date(2025, 9, 15),
        ))
        .await
        .unwrap();
        repo.save_school_holiday(SchoolHoliday::new(
            "Sommerferien",
            "AT-9",
            date(2025, 7, 1),
            date(2025, 8, 31),
        ))
        .await
        .unwrap();

        let de = repo.school_holidays_by_country_and_year("DE", 2025).await.unwrap();
        assert_eq!(de.len(), 1);
        assert_eq!(de[0].region_code, "DE-BY");
    }

    #[tokio::test]
    async fn test_school_holidays_in_range() {
        let repo = LocalRepository::new();
        repo.save_country(Country::new("DE", "Germany", None)).await.unwrap();
        repo.save_region(Region::new("DE-BY", "Bayern", "DE", None)).await.unwrap();
        repo.save_school_holiday(SchoolHoliday::new(
            "Osterferien",
            "DE-BY",
            date(2025, 4, 14),
            date(2025, 4, 25),
        ))
        .await
        .unwrap();

        let hit = repo
            .school_holidays_by_region_in_range("DE-BY", date(2025, 4, 20), date(2025, 5, 1))
            .await
            .unwrap();
        assert_eq!(hit.len(), 1);

        let miss = repo
            .school_holidays_by_region_in_range("DE-BY", date(2025, 5, 1), date(2025, 5, 31))
            .await
            .unwrap();
        assert!(miss.is_empty());
    }

    #[tokio::test]
    async fn test_delete_public_holidays_by_country_and_year() {
        let repo = LocalRepository::new();
        let holiday = PublicHoliday {
            id: None,
            country_code: "DE".to_string(),
            date: date(2025, 10, 3),
            local_name: "Tag der Deutschen Einheit".to_string(),
            english_name: "German Unity Day".to_string(),
            global: true,
            region_code: None,
            types: Some("Public".to_string()),
            year: 2025,
        };
        repo.save_public_holiday(holiday.clone()).await.unwrap();
        repo.save_public_holiday(PublicHoliday {
            year: 2024,
            date: date(2024, 10, 3),
            ..holiday
        })
        .await
        .unwrap();

        let removed = repo.delete_public_holidays("DE", 2025).await.unwrap();
        assert_eq!(removed, 1);
        assert_eq!(repo.list_public_holidays("DE", 2024).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_import_checksum_roundtrip() {
        let repo = LocalRepository::new();
        assert!(repo.get_import_checksum("DE", 2025).await.unwrap().is_none());
        repo.put_import_checksum("DE", 2025, "abc123").await.unwrap();
        assert_eq!(
            repo.get_import_checksum("DE", 2025).await.unwrap().as_deref(),
            Some("abc123")
        );
    }
}
