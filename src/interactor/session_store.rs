use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::swap::SwapSession;

/// Swap sessions keyed by chat id. Each closure runs under the lock, so
/// transitions are atomic; nothing awaits while the lock is held.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<i64, SwapSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn update<R>(&self, chat_id: i64, f: impl FnOnce(&mut SwapSession) -> R) -> R {
        let mut sessions = self.sessions.lock().await;
        f(sessions.entry(chat_id).or_default())
    }

    pub async fn snapshot(&self, chat_id: i64) -> SwapSession {
        let sessions = self.sessions.lock().await;
        sessions.get(&chat_id).cloned().unwrap_or_default()
    }
}
