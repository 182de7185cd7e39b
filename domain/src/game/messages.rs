//! User-facing texts produced by the guessing game

use serde::{Deserialize, Serialize};

/// What to say when every question has been asked but several candidates remain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustedReport {
    /// Apologize and ask for a reset
    #[default]
    Apologize,
    /// Name the remaining candidates
    ListCandidates,
}

/// Message templates for game replies.
///
/// Placeholders: `{name}` in `solved`, `{options}` in `invalid_option`,
/// `{candidates}` in `remaining`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameMessages {
    pub reset: String,
    pub solved: String,
    pub no_match: String,
    pub exhausted: String,
    pub remaining: String,
    pub invalid_option: String,
    /// Joins options under a question prompt
    pub option_separator: String,
    /// Joins options inside the validation message
    pub invalid_option_separator: String,
    pub exhausted_report: ExhaustedReport,
}

impl Default for GameMessages {
    fn default() -> Self {
        Self {
            reset: "ゲームをリセットしました！".to_string(),
            solved: "答えは {name} です！".to_string(),
            no_match: "該当するポケモンが見つかりませんでした。ゲームをリセットしてください。"
                .to_string(),
            exhausted: "質問が終了しましたが、特定できませんでした。リセットしてください。"
                .to_string(),
            remaining: "候補: {candidates}".to_string(),
            invalid_option: "正しい選択肢を入力してください: {options}".to_string(),
            option_separator: " / ".to_string(),
            invalid_option_separator: ", ".to_string(),
            exhausted_report: ExhaustedReport::default(),
        }
    }
}

impl GameMessages {
    pub fn solved(&self, name: &str) -> String {
        self.solved.replace("{name}", name)
    }

    pub fn invalid_option(&self, options: &[String]) -> String {
        self.invalid_option
            .replace("{options}", &options.join(&self.invalid_option_separator))
    }

    pub fn question(&self, prompt: &str, options: &[String]) -> String {
        format!("{}\n{}", prompt, options.join(&self.option_separator))
    }

    pub fn exhausted<'a>(&self, remaining: impl Iterator<Item = &'a str>) -> String {
        match self.exhausted_report {
            ExhaustedReport::Apologize => self.exhausted.clone(),
            ExhaustedReport::ListCandidates => {
                let names: Vec<&str> = remaining.collect();
                format!(
                    "{}\n{}",
                    self.exhausted,
                    self.remaining.replace("{candidates}", &names.join("、"))
                )
            }
        }
    }
}
