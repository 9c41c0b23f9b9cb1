use std::sync::Arc;

use log::{debug, warn};
use maca_client::AccountBackend;
use maca_core::{ChatMessage, Session};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const TITLE_MAX_CHARS: usize = 40;
const DEFAULT_TITLE: &str = "Nova arte";

/// Append-only message history for the active user.
///
/// With an online session each appended message is also handed to a single
/// background worker that posts it to the backend in order. Mirror failures
/// are logged and dropped.
pub struct ConversationLog {
    messages: Vec<ChatMessage>,
    mirror: Option<Mirror>,
}

struct Mirror {
    message_tx: mpsc::UnboundedSender<ChatMessage>,
    worker: JoinHandle<()>,
}

impl ConversationLog {
    /// Start an empty log. Must be called inside a tokio runtime when the
    /// session is online.
    pub fn open(backend: Arc<dyn AccountBackend>, session: Option<&Session>) -> Self {
        let mirror = session.and_then(Session::bearer_token).map(|token| {
            let (message_tx, message_rx) = mpsc::unbounded_channel();
            let worker = tokio::spawn(mirror_worker(backend, token.to_string(), message_rx));
            Mirror { message_tx, worker }
        });

        Self {
            messages: Vec::new(),
            mirror,
        }
    }

    /// Messages of the latest remote conversation. Empty when offline or
    /// when the backend has nothing or cannot be reached.
    pub async fn load(backend: &dyn AccountBackend, session: Option<&Session>) -> Vec<ChatMessage> {
        let Some(token) = session.and_then(Session::bearer_token) else {
            return Vec::new();
        };

        match backend.list_conversations(token).await {
            Ok(conversations) => conversations
                .into_iter()
                .next()
                .map(|conversation| conversation.messages)
                .unwrap_or_default(),
            Err(e) => {
                warn!("Could not load chat history: {e}");
                Vec::new()
            }
        }
    }

    pub fn append(&mut self, message: ChatMessage) {
        if let Some(mirror) = &self.mirror
            && mirror.message_tx.send(message.clone()).is_err()
        {
            warn!("Chat mirror stopped, message {} kept locally only", message.id);
        }
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_mirrored(&self) -> bool {
        self.mirror.is_some()
    }

    /// Wait until every queued message has been posted (or dropped).
    pub async fn close(&mut self) {
        if let Some(Mirror { message_tx, worker }) = self.mirror.take() {
            drop(message_tx);
            if let Err(e) = worker.await {
                warn!("Chat mirror worker ended abnormally: {e}");
            }
        }
    }
}

async fn mirror_worker(
    backend: Arc<dyn AccountBackend>,
    token: String,
    mut message_rx: mpsc::UnboundedReceiver<ChatMessage>,
) {
    let mut conversation_id: Option<String> = None;

    while let Some(message) = message_rx.recv().await {
        let id = match &conversation_id {
            Some(id) => id.clone(),
            None => match backend
                .create_conversation(&token, &conversation_title(&message))
                .await
            {
                Ok(conversation) => {
                    debug!("Created remote conversation {}", conversation.id);
                    conversation_id = Some(conversation.id.clone());
                    conversation.id
                }
                Err(e) => {
                    warn!("Could not create remote conversation, dropping message {}: {e}", message.id);
                    continue;
                }
            },
        };

        if let Err(e) = backend.post_message(&token, &id, &message).await {
            warn!("Could not mirror message {}: {e}", message.id);
        }
    }
}

fn conversation_title(message: &ChatMessage) -> String {
    let title: String = message.content.trim().chars().take(TITLE_MAX_CHARS).collect();
    if title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title
    }
}
