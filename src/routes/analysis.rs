use serde::{Deserialize, Serialize};

use crate::models::{PublicHoliday, SchoolHoliday};

// =========================================================
// Vacation-analysis types
// =========================================================

/// Holidays and school breaks falling into a requested date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationAnalysisData {
    pub holidays: Vec<PublicHoliday>,
    pub school_holidays: Vec<SchoolHoliday>,
}
