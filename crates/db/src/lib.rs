//! In-memory book catalogue for the SHELF service.
//!
//! The catalogue keeps two lists: the pristine copy fetched once from a
//! [`SeedSource`], and the working list that create/update/delete mutate.
//! `reset` copies the pristine list back over the working one.

pub mod catalog;
pub mod seed;

pub use catalog::{Catalog, CatalogError};
pub use seed::{FakerSeed, SeedSource, StaticSeed};
