//! Candidate filter: the guessing-game engine

use super::catalog::Catalog;
use super::messages::GameMessages;
use super::state::GameState;
use crate::core::keywords::ResetKeywords;
use serde::Serialize;
use std::sync::Arc;

/// What a game reply means, independent of its wording
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GameOutcome {
    /// Game restarted by a reset keyword
    Reset,
    /// Answer not among the current question's options; state unchanged
    InvalidOption,
    /// Asking the question at `index`
    Question { index: usize },
    /// Exactly one candidate remains
    Solved { name: String },
    /// No candidate is consistent with the answers
    NoMatch,
    /// Questions ran out with several candidates left
    Exhausted { remaining: usize },
}

impl GameOutcome {
    /// Whether the game cannot progress further without a reset
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GameOutcome::Solved { .. } | GameOutcome::NoMatch | GameOutcome::Exhausted { .. }
        )
    }
}

/// A reply produced by the game engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReply {
    pub outcome: GameOutcome,
    pub text: String,
}

impl GameReply {
    fn new(outcome: GameOutcome, text: impl Into<String>) -> Self {
        Self {
            outcome,
            text: text.into(),
        }
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Narrows a candidate set one answer at a time.
///
/// The engine itself is stateless; each conversation owns a
/// [`GameState`] that is passed into every call.
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    catalog: Arc<Catalog>,
    messages: GameMessages,
    reset_keywords: ResetKeywords,
}

impl CandidateFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            messages: GameMessages::default(),
            reset_keywords: ResetKeywords::game_default(),
        }
    }

    pub fn with_messages(mut self, messages: GameMessages) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_reset_keywords(mut self, keywords: ResetKeywords) -> Self {
        self.reset_keywords = keywords;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Start state for a new conversation
    pub fn new_game(&self) -> GameState {
        GameState::new(&self.catalog)
    }

    /// Restore `state` to the full table and the first question
    pub fn reset(&self, state: &mut GameState) {
        state.restore(&self.catalog);
    }

    /// Consume one user answer and produce the next reply.
    pub fn process_answer(&self, state: &mut GameState, answer: &str) -> GameReply {
        if self.reset_keywords.matches(answer) {
            self.reset(state);
            return GameReply::new(GameOutcome::Reset, self.messages.reset.clone());
        }

        if let Some(question) = self.catalog.question(state.cursor()) {
            if !question.accepts(answer) {
                return GameReply::new(
                    GameOutcome::InvalidOption,
                    self.messages.invalid_option(question.options()),
                );
            }

            let key = question.key();
            state.narrow(&self.catalog, |record| record.matches(key, answer));
        }

        self.next_prompt(state)
    }

    /// Describe `state` without changing it.
    pub fn next_prompt(&self, state: &GameState) -> GameReply {
        let mut candidates = state.candidates(&self.catalog);

        match (candidates.next(), candidates.next()) {
            (Some(only), None) => {
                return GameReply::new(
                    GameOutcome::Solved {
                        name: only.name().to_string(),
                    },
                    self.messages.solved(only.name()),
                );
            }
            (None, _) => {
                return GameReply::new(GameOutcome::NoMatch, self.messages.no_match.clone());
            }
            _ => {}
        }

        match self.catalog.question(state.cursor()) {
            Some(question) => GameReply::new(
                GameOutcome::Question {
                    index: state.cursor(),
                },
                self.messages.question(question.prompt(), question.options()),
            ),
            None => GameReply::new(
                GameOutcome::Exhausted {
                    remaining: state.candidate_count(),
                },
                self.messages
                    .exhausted(state.candidates(&self.catalog).map(|r| r.name())),
            ),
        }
    }
}
