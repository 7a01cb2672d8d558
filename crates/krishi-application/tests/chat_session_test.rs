use std::sync::Arc;
use std::time::Duration;

use krishi_application::{ChatEvent, ChatSession, ReplyTiming};
use krishi_core::advisor::ResponseSelector;
use krishi_core::conversation::MessageRole;
use krishi_core::farm::{Climate, FarmContext, LandSizeClass, Region, Season, SoilType};
use tokio::sync::mpsc;
use tokio::time::sleep;

fn context() -> FarmContext {
    FarmContext::new(
        Region::Punjab,
        LandSizeClass::Medium,
        SoilType::Alluvial,
        Climate::SemiArid,
        Season::Kharif,
    )
}

fn selector() -> Arc<ResponseSelector> {
    Arc::new(ResponseSelector::builtin().expect("builtin templates compile"))
}

fn drain(rx: &mut mpsc::UnboundedReceiver<ChatEvent>) -> Vec<ChatEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test(start_paused = true)]
async fn test_welcome_appended_once_after_delay() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let session = ChatSession::start(context(), selector(), ReplyTiming::default(), tx);

    assert!(session.messages().await.is_empty(), "welcome must be delayed");

    sleep(Duration::from_millis(600)).await;
    let messages = session.messages().await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, MessageRole::Assistant);
    assert!(messages[0].text.contains("Punjab, medium farm with Alluvial Soil"));

    sleep(Duration::from_secs(5)).await;
    assert_eq!(session.messages().await.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_user_message_is_appended_immediately() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let session = ChatSession::start(context(), selector(), ReplyTiming::default(), tx);

    let sent = session.send("Fertilizer recommendations").await.expect("message sent");
    let messages = session.messages().await;

    assert_eq!(messages, vec![sent]);
    assert!(session.is_composing());
}

#[tokio::test(start_paused = true)]
async fn test_blank_input_is_ignored() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let session = ChatSession::start(context(), selector(), ReplyTiming::default(), tx);

    assert!(session.send("   ").await.is_none());
    assert!(session.send("").await.is_none());
    assert!(!session.is_composing());
    assert!(session.messages().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_replies_follow_send_order() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let selector = selector();
    let session = ChatSession::start(context(), Arc::clone(&selector), ReplyTiming::default(), tx);
    let inputs = ["what crops should I grow", "pest and water both", "hello there"];

    for input in inputs {
        session.send(input).await;
    }
    assert_eq!(session.pending_replies(), 3);

    sleep(Duration::from_secs(3)).await;

    let messages = session.messages().await;
    let users: Vec<&str> = messages
        .iter()
        .filter(|m| m.role == MessageRole::User)
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(users, inputs);

    // welcome at 500ms lands between the user messages and the replies
    let replies: Vec<&str> = messages[4..].iter().map(|m| m.text.as_str()).collect();
    let expected: Vec<String> = inputs
        .iter()
        .map(|input| selector.respond(input, &context()))
        .collect();
    assert_eq!(messages.len(), 7);
    assert_eq!(messages[3].text, selector.welcome_message(&context()));
    assert_eq!(replies, expected);
    assert!(!session.is_composing());

    let events = drain(&mut rx);
    let composing: Vec<&ChatEvent> = events
        .iter()
        .filter(|e| matches!(e, ChatEvent::Composing(_)))
        .collect();
    assert_eq!(
        composing,
        vec![&ChatEvent::Composing(true), &ChatEvent::Composing(false)]
    );
    assert_eq!(events.last(), Some(&ChatEvent::Composing(false)));
}

#[tokio::test(start_paused = true)]
async fn test_second_message_during_delay_queues() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let session = ChatSession::start(context(), selector(), ReplyTiming::default(), tx);

    session.send("crop plan").await;
    sleep(Duration::from_millis(1000)).await;
    session.send("water schedule").await;
    assert_eq!(session.pending_replies(), 2);

    sleep(Duration::from_millis(600)).await;
    // first reply is due at 1500ms, second at 2500ms
    assert_eq!(session.pending_replies(), 1);
    assert!(session.is_composing());

    sleep(Duration::from_millis(1000)).await;
    let roles: Vec<MessageRole> = session.messages().await.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![
            MessageRole::User,
            MessageRole::Assistant,
            MessageRole::User,
            MessageRole::Assistant,
            MessageRole::Assistant,
        ]
    );
    assert!(!session.is_composing());
}

#[tokio::test(start_paused = true)]
async fn test_every_user_message_gets_exactly_one_reply() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let session = ChatSession::start(context(), selector(), ReplyTiming::default(), tx);

    for n in 0..10 {
        session.send(&format!("question {n} about market prices")).await;
        sleep(Duration::from_millis(200)).await;
    }
    sleep(Duration::from_secs(3)).await;

    let messages = session.messages().await;
    let users = messages.iter().filter(|m| m.role == MessageRole::User).count();
    let assistants = messages.iter().filter(|m| m.role == MessageRole::Assistant).count();
    assert_eq!(users, 10);
    // one welcome plus one reply per question
    assert_eq!(assistants, 11);

    let last_user = messages.iter().rposition(|m| m.is_user()).unwrap();
    assert!(messages[last_user + 1..].iter().all(|m| !m.is_user()));
}

#[tokio::test(start_paused = true)]
async fn test_dropped_session_discards_queued_replies() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let session = ChatSession::start(context(), selector(), ReplyTiming::default(), tx);

    session.send("pest control").await;
    drop(session);
    sleep(Duration::from_secs(3)).await;

    let events = drain(&mut rx);
    let assistant_messages = events
        .iter()
        .filter(|e| matches!(e, ChatEvent::MessageAppended(m) if m.role == MessageRole::Assistant))
        .count();
    assert_eq!(assistant_messages, 0);
}

#[tokio::test(start_paused = true)]
async fn test_custom_timing() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let timing = ReplyTiming {
        welcome_delay: Duration::from_millis(10),
        reply_delay: Duration::from_millis(20),
    };
    let session = ChatSession::start(context(), selector(), timing, tx);
    session.send("weather").await;

    sleep(Duration::from_millis(25)).await;
    assert_eq!(session.messages().await.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_reply_does_not_wait_for_slower_welcome() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let timing = ReplyTiming {
        welcome_delay: Duration::from_millis(500),
        reply_delay: Duration::from_millis(100),
    };
    let session = ChatSession::start(context(), selector(), timing, tx);
    session.send("crop").await;

    sleep(Duration::from_millis(200)).await;
    let roles: Vec<MessageRole> = session.messages().await.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![MessageRole::User, MessageRole::Assistant]);
    assert!(!session.is_composing());

    sleep(Duration::from_millis(400)).await;
    let messages = session.messages().await;
    assert_eq!(messages.len(), 3);
    assert!(messages[2].text.starts_with("Hello! I'm your AI farming assistant"));
}
