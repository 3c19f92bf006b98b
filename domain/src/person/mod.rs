//! People retrieved from the remote source.
//!
//! - [`entities::Person`] — a fetched person
//! - [`value_objects::PersonId`] — its identifier

pub mod entities;
pub mod value_objects;
