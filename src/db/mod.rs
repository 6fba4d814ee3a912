//! Store layer: repository traits, the in-memory backend, boot seeding
//! and import bookkeeping.

pub mod checksum;
pub mod repositories;
pub mod repository;
pub mod seed;

pub use repositories::LocalRepository;
pub use repository::{
    ErrorContext, FullRepository, HolidayRepository, ReferenceRepository, RepositoryError,
    RepositoryResult,
};
pub use seed::seed_reference_data;

/// Verify the store is reachable. The in-memory backend can always answer,
/// so this reduces to a successful count query.
pub async fn health_check(repository: &dyn FullRepository) -> RepositoryResult<bool> {
    repository.count_countries().await.map(|_| true)
}
