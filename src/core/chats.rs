use crate::models::{ChatKind, ChatSession, Message};
use chrono::Utc;

/// All chat sessions of the local user, newest first
///
/// Sessions are keyed by counterpart or event id; a key is never created
/// twice and sessions are never removed.
#[derive(Debug, Clone, Default)]
pub struct ChatBook {
    sessions: Vec<ChatSession>,
    active: Option<String>,
}

impl ChatBook {
    /// Create the session for `id` unless it already exists; returns true when created
    pub fn ensure(&mut self, id: &str, kind: ChatKind) -> bool {
        if self.get(id).is_some() {
            return false;
        }

        let session = match kind {
            ChatKind::Direct => ChatSession::direct(id),
            ChatKind::Event => ChatSession::event(id),
        };
        self.sessions.insert(0, session);
        tracing::info!("Opened {:?} chat {}", kind, id);
        true
    }

    pub fn get(&self, id: &str) -> Option<&ChatSession> {
        self.sessions.iter().find(|session| session.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut ChatSession> {
        self.sessions.iter_mut().find(|session| session.id == id)
    }

    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Make `id` the active session and mark it read; returns false for unknown ids
    pub fn activate(&mut self, id: &str) -> bool {
        match self.get_mut(id) {
            Some(session) => {
                session.unread = 0;
                self.active = Some(id.to_string());
                true
            }
            None => false,
        }
    }

    /// Append a message to session `id`
    ///
    /// Messages from anyone but `local_id` count as unread unless the
    /// session is currently active.
    pub fn append(
        &mut self,
        id: &str,
        local_id: &str,
        sender_id: &str,
        text: &str,
        is_ai_generated: bool,
    ) -> Option<&Message> {
        let is_active = self.active.as_deref() == Some(id);
        let session = self.get_mut(id)?;

        session.messages.push(Message {
            id: uuid::Uuid::new_v4().to_string(),
            sender_id: sender_id.to_string(),
            receiver_id: id.to_string(),
            text: text.to_string(),
            timestamp: Utc::now(),
            is_ai_generated,
        });

        if sender_id != local_id && !is_active {
            session.unread += 1;
        }

        session.messages.last()
    }

    pub fn total_unread(&self) -> u32 {
        self.sessions.iter().map(|session| session.unread).sum()
    }
}
