use crate::ConversationLog;
use crate::tests::{MockBackend, noon};

use maca_core::{ChatMessage, Conversation, GenerationResult, Session};

fn user_message(content: &str) -> ChatMessage {
    ChatMessage::user(content, None, noon(1))
}

#[tokio::test]
async fn given_offline_session_when_append_then_kept_locally_only() {
    // Given
    let backend = MockBackend::online(None);
    let mut log = ConversationLog::open(backend.clone(), Some(&Session::Offline));

    // When
    log.append(user_message("Promo"));
    log.close().await;

    // Then
    assert!(!log.is_mirrored());
    assert_eq!(log.messages().len(), 1);
    assert!(backend.posted.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_online_session_when_appending_then_mirrored_in_order() {
    // Given
    let backend = MockBackend::online(None);
    let mut log = ConversationLog::open(backend.clone(), Some(&Session::online("tok-1")));

    // When
    log.append(user_message("Promo de pizza para o fim de semana com borda recheada"));
    log.append(ChatMessage::assistant(
        &GenerationResult::Artwork {
            text: "Legenda".to_string(),
            images: Vec::new(),
        },
        noon(1),
    ));
    log.close().await;

    // Then
    let posted = backend.posted.lock().unwrap();
    assert_eq!(posted.len(), 2);
    assert_eq!(posted[0].0, "c-1");
    assert_eq!(posted[0].1.id, log.messages()[0].id);
    assert_eq!(posted[1].1.id, log.messages()[1].id);

    let titles = backend.created_titles.lock().unwrap();
    assert_eq!(titles.len(), 1);
    assert_eq!(titles[0].chars().count(), 40);
}

#[tokio::test]
async fn given_backend_down_when_appending_then_local_log_unaffected() {
    let backend = MockBackend::offline();
    let mut log = ConversationLog::open(backend.clone(), Some(&Session::online("tok-1")));

    log.append(user_message("Promo"));
    log.append(user_message("Outra"));
    log.close().await;

    assert_eq!(log.messages().len(), 2);
    assert!(backend.posted.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_history_when_load_then_first_conversation_messages() {
    // Given
    let backend = MockBackend::online(None);
    *backend.conversations.lock().unwrap() = vec![
        Conversation {
            id: "c-9".to_string(),
            title: "Recente".to_string(),
            messages: vec![user_message("Recente")],
            updated_at: None,
        },
        Conversation {
            id: "c-1".to_string(),
            title: "Antiga".to_string(),
            messages: vec![user_message("Antiga"), user_message("Antiga 2")],
            updated_at: None,
        },
    ];

    // When
    let messages = ConversationLog::load(backend.as_ref(), Some(&Session::online("tok-1"))).await;

    // Then
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "Recente");
}

#[tokio::test]
async fn given_offline_session_when_load_then_empty() {
    let backend = MockBackend::online(None);
    *backend.conversations.lock().unwrap() = vec![Conversation {
        id: "c-1".to_string(),
        title: String::new(),
        messages: vec![user_message("x")],
        updated_at: None,
    }];

    let messages = ConversationLog::load(backend.as_ref(), Some(&Session::Offline)).await;

    assert!(messages.is_empty());
}

#[tokio::test]
async fn given_unreachable_backend_when_load_then_empty() {
    let backend = MockBackend::offline();

    let messages = ConversationLog::load(backend.as_ref(), Some(&Session::online("tok-1"))).await;

    assert!(messages.is_empty());
}
