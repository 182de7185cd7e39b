//! Per-conversation state registry

use quizbot_domain::ConversationId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::Mutex as AsyncMutex;

/// Holds one piece of state per conversation.
///
/// The outer lock only guards the map and is never held across an
/// `.await`. Each entry has its own async mutex, so turns from the same
/// conversation serialize while different conversations proceed
/// independently.
///
/// Entries are never evicted. A reset restores a conversation's state in
/// place, so the map holds one entry per conversation seen since start-up.
pub struct SessionRegistry<T> {
    sessions: Mutex<HashMap<ConversationId, Arc<AsyncMutex<T>>>>,
}

impl<T> SessionRegistry<T> {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Get the state for `id`, creating it with `init` on first use
    pub fn get_or_insert_with(
        &self,
        id: &ConversationId,
        init: impl FnOnce() -> T,
    ) -> Arc<AsyncMutex<T>> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions
            .entry(id.clone())
            .or_insert_with(|| Arc::new(AsyncMutex::new(init())))
            .clone()
    }

    pub fn contains(&self, id: &ConversationId) -> bool {
        let sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        let sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for SessionRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
