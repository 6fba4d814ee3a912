//! Repository traits and error types.
//!
//! The store is split into two concerns: reference data (countries,
//! regions) and holiday records (public holidays, school breaks, import
//! bookkeeping). Handlers and services receive both through the
//! [`FullRepository`] supertrait.

pub mod error;
pub mod holidays;
pub mod reference;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use holidays::HolidayRepository;
pub use reference::ReferenceRepository;

/// Combined repository trait covering both concerns.
///
/// Blanket-implemented for any type implementing both halves, so a single
/// backend struct satisfies it automatically.
pub trait FullRepository: ReferenceRepository + HolidayRepository {}

impl<T: ReferenceRepository + HolidayRepository> FullRepository for T {}
