//! Date-range vacation analysis.
//!
//! Collects the public holidays and school breaks falling into an
//! arbitrary date range, optionally narrowed to one subdivision.

use chrono::{Datelike, NaiveDate};

use crate::db::repository::{FullRepository, RepositoryResult};
use crate::routes::analysis::VacationAnalysisData;

/// Holidays and school breaks of `country_code` inside the inclusive
/// `[start_date, end_date]` range.
///
/// With a `subdivision` filter, national holiday records are kept but
/// regional records must match the subdivision; school breaks must match
/// it outright. School breaks count as inside the range when they overlap
/// it.
pub async fn analyze_range(
    repository: &dyn FullRepository,
    country_code: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    subdivision: Option<&str>,
) -> RepositoryResult<VacationAnalysisData> {
    let years = start_date.year()..=end_date.year();

    let mut holidays = Vec::new();
    for year in years.clone() {
        holidays.extend(repository.list_public_holidays(country_code, year).await?);
    }
    holidays.retain(|h| {
        h.date >= start_date
            && h.date <= end_date
            && match (subdivision, &h.region_code) {
                (Some(sub), Some(region)) => region == sub,
                // National records pass every subdivision filter.
                _ => true,
            }
    });

    let mut school_holidays = Vec::new();
    for year in years {
        school_holidays.extend(
            repository
                .school_holidays_by_country_and_year(country_code, year)
                .await?,
        );
    }
    school_holidays.retain(|sh| {
        sh.overlaps(start_date, end_date)
            && subdivision.map_or(true, |sub| sh.region_code == sub)
    });

    Ok(VacationAnalysisData {
        holidays,
        school_holidays,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::HolidayRepository;
    use crate::db::seed::seed_reference_data;
    use crate::models::PublicHoliday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn seeded_repo() -> LocalRepository {
        let repo = LocalRepository::new();
        seed_reference_data(&repo).await.unwrap();
        repo
    }

    fn holiday(date: NaiveDate, local_name: &str, region_code: Option<&str>) -> PublicHoliday {
        PublicHoliday {
            id: None,
            country_code: "DE".to_string(),
            date,
            local_name: local_name.to_string(),
            english_name: local_name.to_string(),
            global: region_code.is_none(),
            region_code: region_code.map(|c| c.to_string()),
            types: Some("Public".to_string()),
            year: date.year(),
        }
    }

    #[tokio::test]
    async fn test_range_filters_by_date() {
        let repo = seeded_repo().await;
        repo.save_public_holiday(holiday(date(2025, 10, 3), "Tag der Deutschen Einheit", None))
            .await
            .unwrap();
        repo.save_public_holiday(holiday(date(2025, 12, 25), "Erster Weihnachtstag", None))
            .await
            .unwrap();

        let data = analyze_range(&repo, "DE", date(2025, 10, 1), date(2025, 10, 31), None)
            .await
            .unwrap();
        assert_eq!(data.holidays.len(), 1);
        assert_eq!(data.holidays[0].local_name, "Tag der Deutschen Einheit");
        // Seeded October breaks overlap the range.
        assert!(!data.school_holidays.is_empty());
        assert!(data
            .school_holidays
            .iter()
            .all(|sh| sh.overlaps(date(2025, 10, 1), date(2025, 10, 31))));
    }

    #[tokio::test]
    async fn test_subdivision_keeps_national_holidays() {
        let repo = seeded_repo().await;
        repo.save_public_holiday(holiday(date(2025, 10, 3), "Tag der Deutschen Einheit", None))
            .await
            .unwrap();
        repo.save_public_holiday(holiday(date(2025, 8, 15), "Mariä Himmelfahrt", Some("DE-BY")))
            .await
            .unwrap();
        repo.save_public_holiday(holiday(date(2025, 8, 15), "Mariä Himmelfahrt", Some("DE-SL")))
            .await
            .unwrap();

        let data = analyze_range(
            &repo,
            "DE",
            date(2025, 8, 1),
            date(2025, 10, 31),
            Some("DE-BY"),
        )
        .await
        .unwrap();

        // National record plus the matching regional one.
        assert_eq!(data.holidays.len(), 2);
        assert!(data
            .school_holidays
            .iter()
            .all(|sh| sh.region_code == "DE-BY"));
    }

    #[tokio::test]
    async fn test_range_spanning_years_collects_both() {
        let repo = seeded_repo().await;
        repo.save_public_holiday(holiday(date(2025, 12, 25), "Erster Weihnachtstag", None))
            .await
            .unwrap();
        repo.save_public_holiday(holiday(date(2026, 1, 1), "Neujahr", None))
            .await
            .unwrap();

        let data = analyze_range(&repo, "DE", date(2025, 12, 20), date(2026, 1, 6), None)
            .await
            .unwrap();
        assert_eq!(data.holidays.len(), 2);
        // Weihnachtsferien overlap the range for every Bundesland.
        assert!(data
            .school_holidays
            .iter()
            .any(|sh| sh.name == "Weihnachtsferien"));
    }
}
