//! End-to-end conversation scenarios against a mock chat service.

#![allow(clippy::unwrap_used)]

use std::time::Duration;
use talk_cli::chat::{ChatSession, SessionConfig};
use talk_cli::service::HttpChatService;
use talk_cli::session::{DispatchState, FALLBACK_MESSAGE, Outcome, Rejection, Role};
use tokio_util::sync::CancellationToken;

fn session_for(url: &str, timeout: Duration) -> ChatSession {
    let service = HttpChatService::new(url, timeout).unwrap();
    let config = SessionConfig {
        endpoint: url.to_string(),
        timeout,
    };
    ChatSession::new(config, Box::new(service))
}

fn entries(session: &ChatSession) -> Vec<(Role, String)> {
    session
        .transcript()
        .snapshot()
        .iter()
        .map(|m| (m.role(), m.content().to_string()))
        .collect()
}

#[tokio::test]
async fn test_scenario_reply() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"response": "Hi there"}"#)
        .create_async()
        .await;

    let mut session = session_for(&server.url(), Duration::from_secs(5));
    let outcome = session.exchange("Hello", &CancellationToken::new()).await;

    assert_eq!(outcome, Ok(Outcome::Replied));
    assert_eq!(
        entries(&session),
        [
            (Role::User, "Hello".to_string()),
            (Role::Assistant, "Hi there".to_string())
        ]
    );
}

#[tokio::test]
async fn test_scenario_service_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat")
        .with_status(500)
        .create_async()
        .await;

    let mut session = session_for(&server.url(), Duration::from_secs(5));
    let outcome = session.exchange("Hello", &CancellationToken::new()).await;

    assert_eq!(outcome, Ok(Outcome::FellBack));
    assert_eq!(
        entries(&session),
        [
            (Role::User, "Hello".to_string()),
            (Role::Assistant, FALLBACK_MESSAGE.to_string())
        ]
    );
    assert_eq!(session.state(), DispatchState::Idle);
}

#[tokio::test]
async fn test_scenario_whitespace_only() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat")
        .expect(0)
        .create_async()
        .await;

    let mut session = session_for(&server.url(), Duration::from_secs(5));
    let outcome = session.exchange("  ", &CancellationToken::new()).await;

    assert_eq!(outcome, Err(Rejection::Empty));
    assert!(session.transcript().is_empty());
    assert_eq!(session.state(), DispatchState::Idle);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_session_id_is_stable_across_requests() {
    let mut server = mockito::Server::new_async().await;
    let mut session = session_for(&server.url(), Duration::from_secs(5));
    let session_id = session.session_id().to_string();

    let mock = server
        .mock("POST", "/chat")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "session_id": session_id
        })))
        .with_status(200)
        .with_body(r#"{"response": "ok"}"#)
        .expect(3)
        .create_async()
        .await;

    let cancel = CancellationToken::new();
    for text in ["one", "two", "three"] {
        assert_eq!(session.exchange(text, &cancel).await, Ok(Outcome::Replied));
    }

    mock.assert_async().await;
    assert_eq!(session.transcript().len(), 6);
}

#[tokio::test]
async fn test_resubmission_after_failure_succeeds() {
    let mut server = mockito::Server::new_async().await;
    let failing = server
        .mock("POST", "/chat")
        .with_status(502)
        .expect(1)
        .create_async()
        .await;

    let mut session = session_for(&server.url(), Duration::from_secs(5));
    let cancel = CancellationToken::new();
    assert_eq!(
        session.exchange("Hello", &cancel).await,
        Ok(Outcome::FellBack)
    );
    failing.assert_async().await;
    failing.remove_async().await;

    let _ok = server
        .mock("POST", "/chat")
        .with_status(200)
        .with_body(r#"{"response": "Back online"}"#)
        .create_async()
        .await;

    assert_eq!(
        session.exchange("Hello", &cancel).await,
        Ok(Outcome::Replied)
    );

    let roles: Vec<Role> = entries(&session).into_iter().map(|(r, _)| r).collect();
    assert_eq!(
        roles,
        [Role::User, Role::Assistant, Role::User, Role::Assistant]
    );
    assert_eq!(
        session.transcript().last().unwrap().content(),
        "Back online"
    );
}
