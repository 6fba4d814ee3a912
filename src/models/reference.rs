//! Reference-data entities: countries and their subdivisions.

use serde::{Deserialize, Serialize};

use crate::api::{CountryId, RegionId};

/// A country known to the analyzer.
///
/// `code` is an uppercase ISO 3166-1 alpha-2 code and is unique across the
/// store. `population` may be absent for countries that only serve as a
/// grouping for regions; load computations require it to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CountryId>,
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<i64>,
}

impl Country {
    pub fn new(code: impl Into<String>, name: impl Into<String>, population: Option<i64>) -> Self {
        Self {
            id: None,
            code: code.into(),
            name: name.into(),
            population,
        }
    }
}

/// A subdivision of a country (Bundesland, canton, région, ...).
///
/// `code` is an ISO 3166-2 code (e.g. "DE-BY") and is unique across the
/// store. School holidays resolve their population through the region;
/// regions without a population are tolerated but contribute nothing to
/// load computations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RegionId>,
    pub code: String,
    pub name: String,
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<i64>,
}

impl Region {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        country_code: impl Into<String>,
        population: Option<i64>,
    ) -> Self {
        Self {
            id: None,
            code: code.into(),
            name: name.into(),
            country_code: country_code.into(),
            population,
        }
    }
}
