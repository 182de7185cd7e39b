//! Catalog record entity

use super::attribute::{AttributeKey, AttributeValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One creature in the guessing-game catalog (Entity)
///
/// Identified by `name`; attributes are keyed by [`AttributeKey`].
/// Records are never mutated once the catalog has been built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    #[serde(flatten)]
    attributes: BTreeMap<AttributeKey, AttributeValue>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute assignment
    pub fn with(mut self, key: AttributeKey, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key, value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: AttributeKey) -> Option<&AttributeValue> {
        self.attributes.get(&key)
    }

    pub fn has(&self, key: AttributeKey) -> bool {
        self.attributes.contains_key(&key)
    }

    /// Whether `answer` is consistent with this record's value for `key`.
    ///
    /// A record that lacks the attribute never matches.
    pub fn matches(&self, key: AttributeKey, answer: &str) -> bool {
        self.get(key).is_some_and(|value| value.contains(answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turtwig() -> Record {
        Record::new("ナエトル")
            .with(AttributeKey::Type, AttributeValue::set(["くさ"]))
            .with(AttributeKey::Color, "みどり")
            .with(AttributeKey::Evolution, true)
    }

    #[test]
    fn test_matches_each_value_shape() {
        let record = turtwig();
        assert!(record.matches(AttributeKey::Type, "くさ"));
        assert!(record.matches(AttributeKey::Color, "みどり"));
        assert!(record.matches(AttributeKey::Evolution, "はい"));
        assert!(!record.matches(AttributeKey::Evolution, "いいえ"));
    }

    #[test]
    fn test_missing_attribute_never_matches() {
        let record = turtwig();
        assert!(!record.has(AttributeKey::Habitat));
        assert!(!record.matches(AttributeKey::Habitat, "森"));
    }

    #[test]
    fn test_deserialize_flat_record() {
        let json = r#"{
            "name": "ポッチャマ",
            "type": ["みず"],
            "habitat": "海",
            "evolution": true
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.name(), "ポッチャマ");
        assert!(record.matches(AttributeKey::Type, "みず"));
        assert!(record.matches(AttributeKey::Habitat, "海"));
        assert_eq!(record.get(AttributeKey::Evolution), Some(&AttributeValue::Flag(true)));
    }
}
