//! Repository implementations module.
//!
//! The analyzer embeds its store and reseeds reference data at boot, so
//! the in-memory `LocalRepository` is the only backend.

pub mod local;

pub use local::LocalRepository;
