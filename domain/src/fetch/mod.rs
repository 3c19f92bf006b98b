//! Fetch run value objects.
//!
//! - [`mode::FetchMode`] — concurrent or sequential scheduling
//! - [`progress::Percent`] / [`progress::FetchProgress`] — progress within a run

pub mod mode;
pub mod progress;
