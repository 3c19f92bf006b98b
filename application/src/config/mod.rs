//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`FetchParams`] — run control for the fetch-all use case (cancellation grace period)

pub mod fetch_params;

pub use fetch_params::FetchParams;
