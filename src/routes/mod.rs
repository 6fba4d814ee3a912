//! Route-specific data types.
//!
//! Each submodule holds the DTO types returned by one endpoint family.
//! The actual axum handlers live in [`crate::http`].

pub mod analysis;
pub mod load;
