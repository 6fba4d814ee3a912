//! Public-holiday import orchestration.
//!
//! Fetches provider data for one country and year, skips the import when
//! the payload is unchanged since the previous run, and otherwise replaces
//! the stored records wholesale.

use chrono::{Datelike, NaiveDate};
use tracing::{info, warn};

use crate::clients::{HolidayProvider, ProviderHoliday};
use crate::db::checksum::calculate_checksum;
use crate::db::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::models::PublicHoliday;

/// The countries covered by [`import_all_countries`].
pub const IMPORT_COUNTRIES: [&str; 7] = ["DE", "AT", "CH", "FR", "ES", "NL", "IT"];

/// Import the public holidays of one country and year from the provider.
///
/// The country must exist in the store. When the provider payload hashes
/// to the checksum recorded by the previous import, the stored records are
/// returned unchanged; otherwise the existing records of that country and
/// year are deleted and replaced.
///
/// Provider rows without counties become one national record; rows with
/// counties become one record per region, skipping codes the store does
/// not know (logged, not fatal).
pub async fn import_public_holidays(
    repository: &dyn FullRepository,
    provider: &dyn HolidayProvider,
    country_code: &str,
    year: i32,
) -> RepositoryResult<Vec<PublicHoliday>> {
    info!(
        "Importing public holidays from provider for country={} year={}",
        country_code, year
    );

    repository
        .get_country_by_code(country_code)
        .await?
        .ok_or_else(|| {
            RepositoryError::not_found(format!("Unknown country code: {}", country_code))
        })?;

    let rows = provider
        .fetch_public_holidays(country_code, year)
        .await
        .map_err(|e| {
            RepositoryError::internal(format!("Holiday provider request failed: {}", e))
                .with_operation("import_public_holidays")
        })?;

    let payload = serde_json::to_string(&rows).map_err(|e| {
        RepositoryError::internal(format!("Failed to serialize provider payload: {}", e))
    })?;
    let checksum = calculate_checksum(&payload);
    if repository.get_import_checksum(country_code, year).await?.as_deref() == Some(checksum.as_str()) {
        info!(
            "Provider payload unchanged for country={} year={}, skipping import",
            country_code, year
        );
        return repository.list_public_holidays(country_code, year).await;
    }

    let removed = repository.delete_public_holidays(country_code, year).await?;
    if removed > 0 {
        info!(
            "Removed {} existing holidays for country={} year={}",
            removed, country_code, year
        );
    }

    let mut to_save = Vec::new();
    for row in &rows {
        to_save.extend(map_provider_row(repository, row).await?);
    }

    let saved = repository.save_public_holidays(to_save).await?;
    repository
        .put_import_checksum(country_code, year, &checksum)
        .await?;

    info!(
        "Imported {} holidays for country={} year={}",
        saved.len(),
        country_code,
        year
    );
    Ok(saved)
}

async fn map_provider_row(
    repository: &dyn FullRepository,
    row: &ProviderHoliday,
) -> RepositoryResult<Vec<PublicHoliday>> {
    let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").map_err(|e| {
        RepositoryError::validation(format!("Invalid provider date {}: {}", row.date, e))
    })?;
    let types = row.types.as_ref().map(|t| t.join(","));

    let base = PublicHoliday {
        id: None,
        country_code: row.country_code.clone(),
        date,
        local_name: row.local_name.clone(),
        english_name: row.name.clone(),
        global: row.global,
        region_code: None,
        types,
        year: date.year(),
    };

    let counties = match &row.counties {
        Some(counties) if !counties.is_empty() => counties,
        // No counties: a single national record.
        _ => return Ok(vec![base]),
    };

    let mut records = Vec::with_capacity(counties.len());
    for region_code in counties {
        if repository.get_region_by_code(region_code).await?.is_none() {
            warn!(
                "Region not found for code: {}. Skipping this regional holiday.",
                region_code
            );
            continue;
        }
        records.push(PublicHoliday {
            region_code: Some(region_code.clone()),
            ..base.clone()
        });
    }
    Ok(records)
}

/// Import all covered countries for one year, concurrently.
///
/// Returns `(country_code, imported_count)` pairs in the fixed country
/// order. A failing country fails the whole call.
pub async fn import_all_countries(
    repository: &dyn FullRepository,
    provider: &dyn HolidayProvider,
    year: i32,
) -> RepositoryResult<Vec<(String, usize)>> {
    let imports = IMPORT_COUNTRIES.iter().map(|country| async move {
        let imported = import_public_holidays(repository, provider, country, year).await?;
        Ok::<_, RepositoryError>((country.to_string(), imported.len()))
    });

    futures::future::try_join_all(imports).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    use crate::db::repositories::LocalRepository;
    use crate::db::repository::HolidayRepository;
    use crate::db::seed::seed_reference_data;

    /// Provider stub returning a fixed payload and counting fetches.
    struct FixedProvider {
        rows: Vec<ProviderHoliday>,
        fetches: Mutex<usize>,
    }

    impl FixedProvider {
        fn new(rows: Vec<ProviderHoliday>) -> Self {
            Self {
                rows,
                fetches: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl HolidayProvider for FixedProvider {
        async fn fetch_public_holidays(
            &self,
            country_code: &str,
            _year: i32,
        ) -> anyhow::Result<Vec<ProviderHoliday>> {
            *self.fetches.lock() += 1;
            let mut rows = self.rows.clone();
            for row in &mut rows {
                row.country_code = country_code.to_string();
            }
            Ok(rows)
        }
    }

    fn national_row(date: &str, local_name: &str) -> ProviderHoliday {
        ProviderHoliday {
            date: date.to_string(),
            local_name: local_name.to_string(),
            name: local_name.to_string(),
            country_code: "DE".to_string(),
            global: true,
            counties: None,
            types: Some(vec!["Public".to_string()]),
        }
    }

    fn regional_row(date: &str, local_name: &str, counties: &[&str]) -> ProviderHoliday {
        ProviderHoliday {
            date: date.to_string(),
            local_name: local_name.to_string(),
            name: local_name.to_string(),
            country_code: "DE".to_string(),
            global: false,
            counties: Some(counties.iter().map(|c| c.to_string()).collect()),
            types: Some(vec!["Public".to_string()]),
        }
    }

    #[tokio::test]
    async fn test_import_maps_national_and_regional_rows() {
        let repo = LocalRepository::new();
        seed_reference_data(&repo).await.unwrap();
        let provider = FixedProvider::new(vec![
            national_row("2025-10-03", "Tag der Deutschen Einheit"),
            regional_row("2025-08-15", "Mariä Himmelfahrt", &["DE-BY", "DE-SL"]),
        ]);

        let imported = import_public_holidays(&repo, &provider, "DE", 2025)
            .await
            .unwrap();
        assert_eq!(imported.len(), 3);
        assert_eq!(imported.iter().filter(|h| h.is_national()).count(), 1);
        assert_eq!(
            imported
                .iter()
                .filter(|h| h.region_code.as_deref() == Some("DE-BY"))
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn test_import_skips_unknown_regions() {
        let repo = LocalRepository::new();
        seed_reference_data(&repo).await.unwrap();
        let provider = FixedProvider::new(vec![regional_row(
            "2025-08-15",
            "Mariä Himmelfahrt",
            &["DE-BY", "DE-XX"],
        )]);

        let imported = import_public_holidays(&repo, &provider, "DE", 2025)
            .await
            .unwrap();
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].region_code.as_deref(), Some("DE-BY"));
    }

    #[tokio::test]
    async fn test_import_unknown_country_fails() {
        let repo = LocalRepository::new();
        let provider = FixedProvider::new(vec![]);
        let result = import_public_holidays(&repo, &provider, "XX", 2025).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_unchanged_payload_skips_reimport() {
        let repo = LocalRepository::new();
        seed_reference_data(&repo).await.unwrap();
        let provider =
            FixedProvider::new(vec![national_row("2025-10-03", "Tag der Deutschen Einheit")]);

        let first = import_public_holidays(&repo, &provider, "DE", 2025)
            .await
            .unwrap();
        let second = import_public_holidays(&repo, &provider, "DE", 2025)
            .await
            .unwrap();

        // Same records, same ids: the second run replayed nothing.
        assert_eq!(first, second);
        assert_eq!(*provider.fetches.lock(), 2);
    }

    #[tokio::test]
    async fn test_reimport_replaces_changed_payload() {
        let repo = LocalRepository::new();
        seed_reference_data(&repo).await.unwrap();

        let provider =
            FixedProvider::new(vec![national_row("2025-10-03", "Tag der Deutschen Einheit")]);
        import_public_holidays(&repo, &provider, "DE", 2025)
            .await
            .unwrap();

        let provider = FixedProvider::new(vec![
            national_row("2025-10-03", "Tag der Deutschen Einheit"),
            national_row("2025-12-25", "Erster Weihnachtstag"),
        ]);
        let imported = import_public_holidays(&repo, &provider, "DE", 2025)
            .await
            .unwrap();
        assert_eq!(imported.len(), 2);
        assert_eq!(
            repo.list_public_holidays("DE", 2025).await.unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn test_import_all_countries_reports_counts() {
        let repo = LocalRepository::new();
        seed_reference_data(&repo).await.unwrap();
        let provider =
            FixedProvider::new(vec![national_row("2025-01-01", "Neujahr")]);

        let summary = import_all_countries(&repo, &provider, 2025).await.unwrap();
        assert_eq!(summary.len(), IMPORT_COUNTRIES.len());
        assert!(summary.iter().all(|(_, count)| *count == 1));
        assert_eq!(summary[0].0, "DE");
    }
}
