use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Sessions kept when no explicit cap is configured.
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

struct Session {
    messages: Vec<ChatMessage>,
    last_used: u64,
}

struct Sessions {
    entries: HashMap<String, Session>,
    clock: u64,
}

/// Per-session chat history; the first message of a session is always its system prompt.
///
/// At most `max_sessions` sessions are kept; starting a new one past the cap
/// evicts the least recently used session.
pub struct ConversationStore {
    sessions: RwLock<Sessions>,
    limit: usize,
    max_sessions: usize,
}

impl ConversationStore {
    pub fn new(limit: usize) -> Self {
        Self::with_max_sessions(limit, DEFAULT_MAX_SESSIONS)
    }

    pub fn with_max_sessions(limit: usize, max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(Sessions {
                entries: HashMap::new(),
                clock: 0,
            }),
            limit: limit.max(2),
            max_sessions: max_sessions.max(1),
        }
    }

    fn trim(&self, history: &mut Vec<ChatMessage>) {
        if history.len() > self.limit {
            let excess = history.len() - self.limit;
            history.drain(1..=excess);
        }
    }

    fn evict_least_recent(&self, sessions: &mut Sessions) {
        while sessions.entries.len() >= self.max_sessions {
            let oldest = sessions
                .entries
                .iter()
                .min_by_key(|(_, session)| session.last_used)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    log::debug!("Evicting idle conversation session {}", id);
                    sessions.entries.remove(&id);
                }
                None => break,
            }
        }
    }

    /// Records a user turn and returns the history to send.
    pub async fn push_user(
        &self,
        session_id: &str,
        system_prompt: &str,
        content: &str,
    ) -> Vec<ChatMessage> {
        let mut sessions = self.sessions.write().await;
        sessions.clock += 1;
        let now = sessions.clock;

        if !sessions.entries.contains_key(session_id) {
            self.evict_least_recent(&mut sessions);
        }

        let session = sessions
            .entries
            .entry(session_id.to_string())
            .or_insert_with(|| Session {
                messages: vec![ChatMessage::new(ChatRole::System, system_prompt)],
                last_used: now,
            });
        session.last_used = now;

        session.messages.push(ChatMessage::new(ChatRole::User, content));
        self.trim(&mut session.messages);
        session.messages.clone()
    }

    pub async fn push_assistant(&self, session_id: &str, content: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.clock += 1;
        let now = sessions.clock;

        if let Some(session) = sessions.entries.get_mut(session_id) {
            session.last_used = now;
            session.messages.push(ChatMessage::new(ChatRole::Assistant, content));
            self.trim(&mut session.messages);
        }
    }

    pub async fn history(&self, session_id: &str) -> Vec<ChatMessage> {
        let sessions = self.sessions.read().await;
        sessions
            .entries
            .get(session_id)
            .map(|session| session.messages.clone())
            .unwrap_or_default()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.entries.len()
    }

    /// Forgets a session; its next turn starts from a fresh system prompt.
    pub async fn clear(&self, session_id: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.entries.remove(session_id);
    }
}
