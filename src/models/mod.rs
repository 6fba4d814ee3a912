//! Domain entities for the holiday analyzer.

pub mod holiday;
pub mod reference;

pub use holiday::{PublicHoliday, SchoolHoliday};
pub use reference::{Country, Region};
