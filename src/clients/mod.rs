//! Outbound clients for third-party calendar providers.

pub mod nager;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use nager::NagerClient;

/// One public-holiday row as delivered by the provider.
///
/// Mirrors the Nager.Date v3 payload; `counties` lists ISO 3166-2
/// subdivision codes and is absent for national holidays.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderHoliday {
    /// ISO date string, e.g. "2025-10-03".
    pub date: String,
    pub local_name: String,
    pub name: String,
    pub country_code: String,
    #[serde(default)]
    pub global: bool,
    #[serde(default)]
    pub counties: Option<Vec<String>>,
    #[serde(default)]
    pub types: Option<Vec<String>>,
}

/// Source of public-holiday data for one country and year.
#[async_trait]
pub trait HolidayProvider: Send + Sync {
    async fn fetch_public_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> Result<Vec<ProviderHoliday>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_holiday_parses_nager_payload() {
        let json = r#"{
            "date": "2025-08-15",
            "localName": "Mariä Himmelfahrt",
            "name": "Assumption Day",
            "countryCode": "DE",
            "global": false,
            "counties": ["DE-BY", "DE-SL"],
            "launchYear": null,
            "types": ["Public"]
        }"#;
        let holiday: ProviderHoliday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.local_name, "Mariä Himmelfahrt");
        assert_eq!(holiday.counties.as_deref(), Some(&["DE-BY".to_string(), "DE-SL".to_string()][..]));
        assert!(!holiday.global);
    }

    #[test]
    fn test_provider_holiday_tolerates_missing_optionals() {
        let json = r#"{
            "date": "2025-10-03",
            "localName": "Tag der Deutschen Einheit",
            "name": "German Unity Day",
            "countryCode": "DE"
        }"#;
        let holiday: ProviderHoliday = serde_json::from_str(json).unwrap();
        assert!(holiday.counties.is_none());
        assert!(holiday.types.is_none());
        assert!(!holiday.global);
    }
}
