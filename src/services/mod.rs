//! Service layer: the load aggregation core plus import and analysis
//! orchestration on top of the repository.

pub mod analysis;
pub mod import;
pub mod vacation_load;

pub use analysis::analyze_range;
pub use import::{import_all_countries, import_public_holidays};
pub use vacation_load::{calculate_vacation_load, compute_vacation_load};
