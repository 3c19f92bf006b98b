//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod fetch_people;
pub(crate) mod shared;
