//! Person entity

use super::value_objects::PersonId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A person retrieved from the remote source (Entity)
///
/// Immutable once constructed. The remote service matches property names
/// case-insensitively, so PascalCase keys are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(alias = "Id")]
    id: PersonId,
    #[serde(alias = "GivenName")]
    given_name: String,
    #[serde(alias = "FamilyName")]
    family_name: String,
    #[serde(alias = "StartDate", with = "start_date")]
    start_date: NaiveDate,
    #[serde(alias = "Rating", default)]
    rating: i32,
    #[serde(alias = "FormatString", default)]
    format_string: String,
}

impl Person {
    pub fn new(
        id: PersonId,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            given_name: given_name.into(),
            family_name: family_name.into(),
            start_date,
            rating: 0,
            format_string: String::new(),
        }
    }

    pub fn with_rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_format_string(mut self, format_string: impl Into<String>) -> Self {
        self.format_string = format_string.into();
        self
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn format_string(&self) -> &str {
        &self.format_string
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.given_name, self.family_name)
    }
}

/// The service emits `startDate` as a full timestamp (`1975-10-17T00:00:00`);
/// only the date part is meaningful.
mod start_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let date_part = raw.split('T').next().unwrap_or(&raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_display_uses_full_name() {
        let person = Person::new(PersonId::new(1), "John", "Koenig", date(1975, 10, 17));
        assert_eq!(person.to_string(), "John Koenig");
    }

    #[test]
    fn test_deserialize_camel_case_with_timestamp() {
        let json = r#"{
            "id": 2,
            "givenName": "Dylan",
            "familyName": "Hunt",
            "startDate": "2000-10-02T00:00:00",
            "rating": 8,
            "formatString": ""
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.id(), PersonId::new(2));
        assert_eq!(person.family_name(), "Hunt");
        assert_eq!(person.start_date(), date(2000, 10, 2));
        assert_eq!(person.rating(), 8);
    }

    #[test]
    fn test_deserialize_pascal_case_aliases() {
        let json = r#"{
            "Id": 3,
            "GivenName": "Leela",
            "FamilyName": "Turanga",
            "StartDate": "1999-03-28"
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.given_name(), "Leela");
        assert_eq!(person.rating(), 0);
        assert_eq!(person.format_string(), "");
    }

    #[test]
    fn test_serialize_date_only() {
        let person = Person::new(PersonId::new(1), "John", "Koenig", date(1975, 10, 17))
            .with_rating(6);
        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(value["startDate"], "1975-10-17");
        assert_eq!(value["givenName"], "John");
        assert_eq!(value["rating"], 6);
    }
}
