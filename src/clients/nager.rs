//! Nager.Date client for public-holiday imports.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use super::{HolidayProvider, ProviderHoliday};

/// Default Nager.Date v3 endpoint; `{base}/{year}/{countryCode}` yields
/// the public holidays of one country and year.
pub const DEFAULT_BASE_URL: &str = "https://date.nager.at/api/v3/PublicHolidays";

pub struct NagerClient {
    base_url: String,
}

impl NagerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for NagerClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl HolidayProvider for NagerClient {
    async fn fetch_public_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> Result<Vec<ProviderHoliday>> {
        let url = format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            year,
            country_code
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send request: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("API returned status {}: {}", status, body));
        }

        let holidays: Vec<ProviderHoliday> = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse response: {}", e))?;

        Ok(holidays)
    }
}
