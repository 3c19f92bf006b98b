//! Person identifier value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a remote person (Value Object)
///
/// Opaque to the orchestrator beyond equality and ordering. The ID list
/// fetched at the start of a run is a snapshot of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(i64);

impl PersonId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw numeric value
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PersonId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for PersonId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidPersonId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_value() {
        let mut ids = vec![PersonId::new(3), PersonId::new(1), PersonId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![PersonId::new(1), PersonId::new(2), PersonId::new(3)]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(" 42 ".parse::<PersonId>().ok(), Some(PersonId::new(42)));
        assert_eq!(
            "abc".parse::<PersonId>(),
            Err(DomainError::InvalidPersonId("abc".to_string()))
        );
    }

    #[test]
    fn test_serde_is_transparent() {
        let ids: Vec<PersonId> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(ids.len(), 3);
        assert_eq!(serde_json::to_string(&ids[1]).unwrap(), "2");
    }
}
