//! People source adapters
//!
//! Implementations of the [`PeopleSource`](roster_application::PeopleSource) port:
//! - [`HttpPeopleSource`]: the remote people service over HTTP
//! - [`StaticPeopleSource`]: an in-memory roster for offline runs and demos

mod http_source;
mod static_source;

pub use http_source::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, HttpPeopleSource, SourceSettings,
};
pub use static_source::StaticPeopleSource;
