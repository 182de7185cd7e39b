//! Attribute keys and values carried by catalog records

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Attribute of a record that a question can ask about (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeKey {
    /// Elemental types (set of strings)
    Type,
    Color,
    Habitat,
    Classification,
    Weight,
    Height,
    /// Whether the creature evolves further (boolean)
    Evolution,
}

impl AttributeKey {
    pub const ALL: [AttributeKey; 7] = [
        AttributeKey::Type,
        AttributeKey::Color,
        AttributeKey::Habitat,
        AttributeKey::Classification,
        AttributeKey::Weight,
        AttributeKey::Height,
        AttributeKey::Evolution,
    ];

    /// Get the string identifier for this key
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKey::Type => "type",
            AttributeKey::Color => "color",
            AttributeKey::Habitat => "habitat",
            AttributeKey::Classification => "classification",
            AttributeKey::Weight => "weight",
            AttributeKey::Height => "height",
            AttributeKey::Evolution => "evolution",
        }
    }
}

impl std::fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AttributeKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttributeKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown attribute key: {}", s))
    }
}

impl Serialize for AttributeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AttributeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Answers that read as "true" when compared against a flag attribute
const AFFIRMATIVE: &[&str] = &["はい", "yes"];
/// Answers that read as "false" when compared against a flag attribute
const NEGATIVE: &[&str] = &["いいえ", "no"];

/// Map a yes/no answer onto a boolean, if it is one
pub fn parse_flag_answer(answer: &str) -> Option<bool> {
    if AFFIRMATIVE.contains(&answer) {
        Some(true)
    } else if NEGATIVE.contains(&answer) {
        Some(false)
    } else {
        None
    }
}

/// Value of a single record attribute (Value Object)
///
/// Every value is treated as a set for membership: a scalar is a
/// one-element set, a flag is matched after mapping the answer through
/// [`parse_flag_answer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Flag(bool),
    Text(String),
    Set(Vec<String>),
}

impl AttributeValue {
    pub fn text(value: impl Into<String>) -> Self {
        AttributeValue::Text(value.into())
    }

    pub fn set<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AttributeValue::Set(values.into_iter().map(Into::into).collect())
    }

    /// Whether `answer` is a member of this value
    pub fn contains(&self, answer: &str) -> bool {
        match self {
            AttributeValue::Text(value) => value == answer,
            AttributeValue::Set(values) => values.iter().any(|v| v == answer),
            AttributeValue::Flag(flag) => parse_flag_answer(answer) == Some(*flag),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(flag: bool) -> Self {
        AttributeValue::Flag(flag)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trips_through_str() {
        for key in AttributeKey::ALL {
            assert_eq!(key.as_str().parse::<AttributeKey>().unwrap(), key);
        }
        assert!("weight_kg".parse::<AttributeKey>().is_err());
    }

    #[test]
    fn test_scalar_is_singleton_set() {
        let color = AttributeValue::text("みどり");
        assert!(color.contains("みどり"));
        assert!(!color.contains("あお"));
        // no substring matching
        assert!(!color.contains("みど"));
    }

    #[test]
    fn test_set_membership() {
        let types = AttributeValue::set(["くさ", "じめん"]);
        assert!(types.contains("くさ"));
        assert!(types.contains("じめん"));
        assert!(!types.contains("みず"));
    }

    #[test]
    fn test_flag_maps_yes_and_no() {
        let evolves = AttributeValue::Flag(true);
        assert!(evolves.contains("はい"));
        assert!(evolves.contains("yes"));
        assert!(!evolves.contains("いいえ"));
        assert!(!evolves.contains("no"));

        let final_form = AttributeValue::Flag(false);
        assert!(final_form.contains("いいえ"));
        assert!(final_form.contains("no"));
        assert!(!final_form.contains("はい"));
    }

    #[test]
    fn test_flag_rejects_unrelated_answer() {
        assert!(!AttributeValue::Flag(true).contains("true"));
        assert!(!AttributeValue::Flag(false).contains("maybe"));
    }

    #[test]
    fn test_deserialize_untagged_values() {
        let flag: AttributeValue = serde_json::from_str("true").unwrap();
        assert_eq!(flag, AttributeValue::Flag(true));

        let text: AttributeValue = serde_json::from_str("\"森\"").unwrap();
        assert_eq!(text, AttributeValue::text("森"));

        let set: AttributeValue = serde_json::from_str(r#"["みず","はがね"]"#).unwrap();
        assert_eq!(set, AttributeValue::set(["みず", "はがね"]));
    }
}
