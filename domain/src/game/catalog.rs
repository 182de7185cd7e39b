//! Guessing-game catalog: the record table plus the ordered question list

use super::attribute::{AttributeKey, AttributeValue, parse_flag_answer};
use super::question::Question;
use super::record::Record;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Raw catalog contents, as written in a catalog file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A validated, immutable catalog (Entity)
///
/// Question order is the interrogation order and never changes.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<Record>,
    questions: Vec<Question>,
}

impl Catalog {
    /// Build a catalog, checking that it can actually be played.
    pub fn try_new(records: Vec<Record>, questions: Vec<Question>) -> Result<Self, DomainError> {
        if records.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.name()) {
                return Err(DomainError::DuplicateRecord(record.name().to_string()));
            }
        }

        for question in &questions {
            if question.options().is_empty() {
                return Err(DomainError::EmptyOptions(question.key().to_string()));
            }
            if !records.iter().any(|r| r.has(question.key())) {
                return Err(DomainError::UnusedAttribute(question.key().to_string()));
            }

            // flag attributes only ever match yes/no answers
            let asks_flag = records
                .iter()
                .any(|r| matches!(r.get(question.key()), Some(AttributeValue::Flag(_))));
            if asks_flag
                && let Some(option) = question
                    .options()
                    .iter()
                    .find(|o| parse_flag_answer(o).is_none())
            {
                return Err(DomainError::NonFlagOption(
                    question.key().to_string(),
                    option.clone(),
                ));
            }
        }

        Ok(Self { records, questions })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// The built-in table: the four Sinnoh grass and water starters.
    pub fn sinnoh_starters() -> Self {
        use AttributeKey::*;

        let records = vec![
            Record::new("ナエトル")
                .with(Type, AttributeValue::set(["くさ"]))
                .with(Color, "みどり")
                .with(Evolution, true)
                .with(Habitat, "森")
                .with(Classification, "わかばポケモン")
                .with(Weight, "軽い")
                .with(Height, "小さい"),
            Record::new("ドダイトス")
                .with(Type, AttributeValue::set(["くさ", "じめん"]))
                .with(Color, "みどり")
                .with(Evolution, false)
                .with(Habitat, "森")
                .with(Classification, "だいちポケモン")
                .with(Weight, "重い")
                .with(Height, "大きい"),
            Record::new("ポッチャマ")
                .with(Type, AttributeValue::set(["みず"]))
                .with(Color, "あお")
                .with(Evolution, true)
                .with(Habitat, "海")
                .with(Classification, "ペンギンポケモン")
                .with(Weight, "軽い")
                .with(Height, "小さい"),
            Record::new("エンペルト")
                .with(Type, AttributeValue::set(["みず", "はがね"]))
                .with(Color, "あお")
                .with(Evolution, false)
                .with(Habitat, "海")
                .with(Classification, "かいていポケモン")
                .with(Weight, "重い")
                .with(Height, "大きい"),
        ];

        let questions = vec![
            Question::new(
                Type,
                "そのポケモンはどのタイプですか？",
                ["くさ", "ほのお", "みず", "じめん", "はがね"],
            ),
            Question::new(Color, "そのポケモンの色は何ですか？", ["みどり", "あか", "あお"]),
            Question::new(Habitat, "そのポケモンはどこに住んでいますか？", ["森", "山", "海"]),
            Question::new(
                Classification,
                "そのポケモンの分類は何ですか？",
                [
                    "わかばポケモン",
                    "だいちポケモン",
                    "ペンギンポケモン",
                    "かいていポケモン",
                ],
            ),
            Question::new(Weight, "そのポケモンの体重はどのくらいですか？", ["軽い", "普通", "重い"]),
            Question::new(Height, "そのポケモンの高さはどのくらいですか？", ["小さい", "普通", "大きい"]),
            Question::new(Evolution, "そのポケモンは進化しますか？", ["はい", "いいえ"]),
        ];

        Self { records, questions }
    }
}

impl TryFrom<CatalogData> for Catalog {
    type Error = DomainError;

    fn try_from(data: CatalogData) -> Result<Self, Self::Error> {
        Catalog::try_new(data.records, data.questions)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sinnoh_starters()
    }
}
