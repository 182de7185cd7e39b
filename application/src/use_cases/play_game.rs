//! Play Game use case
//!
//! Routes each answer to the caller's own game state.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::session_registry::SessionRegistry;
use quizbot_domain::{CandidateFilter, ConversationId, GameReply, GameState};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for playing the guessing game, one state per conversation
pub struct PlayGameUseCase {
    filter: CandidateFilter,
    sessions: SessionRegistry<GameState>,
    logger: Arc<dyn ConversationLogger>,
}

impl PlayGameUseCase {
    pub fn new(filter: CandidateFilter) -> Self {
        Self {
            filter,
            sessions: SessionRegistry::new(),
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Apply `answer` to the conversation's game and return the reply
    pub async fn execute(&self, conversation: &ConversationId, answer: &str) -> GameReply {
        let session = self
            .sessions
            .get_or_insert_with(conversation, || self.filter.new_game());
        let mut state = session.lock().await;

        let before = state.candidate_count();
        let reply = self.filter.process_answer(&mut state, answer);

        debug!(
            conversation = %conversation,
            before,
            after = state.candidate_count(),
            cursor = state.cursor(),
            "Processed answer"
        );
        if reply.outcome.is_terminal() {
            info!(conversation = %conversation, outcome = ?reply.outcome, "Game reached an end state");
        }

        self.logger.log(ConversationEvent::new(
            "game_turn",
            serde_json::json!({
                "conversation": conversation.as_str(),
                "answer": answer,
                "result": &reply.outcome,
                "candidates": state.candidate_count(),
                "cursor": state.cursor(),
                "reply": &reply.text,
            }),
        ));

        reply
    }

    /// The prompt a conversation would see right now, without answering
    pub async fn current_prompt(&self, conversation: &ConversationId) -> GameReply {
        let session = self
            .sessions
            .get_or_insert_with(conversation, || self.filter.new_game());
        let state = session.lock().await;
        self.filter.next_prompt(&state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizbot_domain::{Catalog, GameOutcome};
    use std::sync::Mutex;

    fn id(s: &str) -> ConversationId {
        ConversationId::try_new(s).unwrap()
    }

    fn use_case() -> PlayGameUseCase {
        PlayGameUseCase::new(CandidateFilter::new(Arc::new(Catalog::sinnoh_starters())))
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(String, serde_json::Value)>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type.to_string(), event.payload));
        }
    }

    #[tokio::test]
    async fn test_conversations_do_not_interfere() {
        let uc = use_case();
        let alice = id("alice");
        let bob = id("bob");

        uc.execute(&alice, "みず").await;
        let bob_reply = uc.execute(&bob, "くさ").await;
        assert_eq!(bob_reply.outcome, GameOutcome::Question { index: 1 });

        // alice answers her own second question about water types
        let alice_reply = uc.execute(&alice, "あお").await;
        assert_eq!(alice_reply.outcome, GameOutcome::Question { index: 2 });

        let bob_reply = uc.execute(&bob, "みどり").await;
        assert_eq!(bob_reply.outcome, GameOutcome::Question { index: 2 });

        uc.execute(&alice, "海").await;
        let solved = uc.execute(&alice, "ペンギンポケモン").await;
        assert_eq!(solved.text, "答えは ポッチャマ です！");

        let bob_now = uc.current_prompt(&bob).await;
        assert_eq!(bob_now.outcome, GameOutcome::Question { index: 2 });
    }

    #[tokio::test]
    async fn test_reset_only_affects_caller() {
        let uc = use_case();
        let alice = id("alice");
        let bob = id("bob");

        uc.execute(&alice, "ほのお").await;
        uc.execute(&bob, "ほのお").await;

        let reply = uc.execute(&alice, "reset").await;
        assert_eq!(reply.outcome, GameOutcome::Reset);

        assert_eq!(
            uc.current_prompt(&alice).await.outcome,
            GameOutcome::Question { index: 0 }
        );
        assert_eq!(uc.current_prompt(&bob).await.outcome, GameOutcome::NoMatch);
    }

    #[tokio::test]
    async fn test_first_prompt_for_new_conversation() {
        let uc = use_case();
        let reply = uc.current_prompt(&id("new")).await;
        assert_eq!(reply.outcome, GameOutcome::Question { index: 0 });
    }

    #[tokio::test]
    async fn test_reset_restores_state_in_place() {
        let uc = use_case();
        let alice = id("alice");
        uc.execute(&alice, "くさ").await;
        uc.execute(&alice, "リセット").await;
        uc.execute(&alice, "リセット").await;

        assert_eq!(uc.sessions.len(), 1);
        assert_eq!(
            uc.current_prompt(&alice).await.outcome,
            GameOutcome::Question { index: 0 }
        );
    }

    #[tokio::test]
    async fn test_turns_are_logged() {
        let logger = Arc::new(RecordingLogger::default());
        let uc = use_case().with_logger(logger.clone());

        uc.execute(&id("alice"), "でんき").await;
        uc.execute(&id("alice"), "じめん").await;

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, "game_turn");
        assert_eq!(events[0].1["result"]["outcome"], "invalid_option");
        assert_eq!(events[1].1["result"]["outcome"], "solved");
        assert_eq!(events[1].1["result"]["name"], "ドダイトス");
        assert_eq!(events[1].1["candidates"], 1);
    }
}
