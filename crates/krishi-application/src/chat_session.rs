//! One conversation with the farming assistant.
//!
//! User messages are appended as soon as they are sent. Assistant replies are
//! computed immediately but appended by a per-session worker after a fixed,
//! cosmetic delay. While any reply is queued the session is *composing*.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use krishi_core::advisor::ResponseSelector;
use krishi_core::config::AppConfig;
use krishi_core::conversation::{ChatMessage, Conversation};
use krishi_core::farm::FarmContext;
use tokio::sync::{RwLock, mpsc};
use tokio::time::Instant;

/// Cosmetic delays of the conversation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTiming {
    /// Delay before the welcome message appears.
    pub welcome_delay: Duration,
    /// Simulated typing time before each reply.
    pub reply_delay: Duration,
}

impl Default for ReplyTiming {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for ReplyTiming {
    fn from(config: &AppConfig) -> Self {
        Self {
            welcome_delay: config.welcome_delay(),
            reply_delay: config.reply_delay(),
        }
    }
}

/// Notifications published while a session runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// A message was appended to the conversation.
    MessageAppended(ChatMessage),
    /// The composing indicator turned on or off.
    Composing(bool),
}

#[derive(Debug)]
struct PendingReply {
    text: String,
    due: Instant,
}

/// State shared between a session handle and its background tasks.
#[derive(Debug)]
struct SessionShared {
    conversation: RwLock<Conversation>,
    pending: AtomicUsize,
    /// Guards every append and emit; `true` once the handle is dropped.
    closed: Mutex<bool>,
    events: mpsc::UnboundedSender<ChatEvent>,
}

impl SessionShared {
    fn new(events: mpsc::UnboundedSender<ChatEvent>) -> Self {
        Self {
            conversation: RwLock::new(Conversation::new()),
            pending: AtomicUsize::new(0),
            closed: Mutex::new(false),
            events,
        }
    }

    fn emit(&self, event: ChatEvent) {
        // A dropped receiver only means nobody renders the session.
        let _ = self.events.send(event);
    }

    fn close(&self) {
        *self.closed.lock().unwrap_or_else(PoisonError::into_inner) = true;
    }

    /// Appends and publishes `message` unless the session is closed.
    ///
    /// The closed flag is checked and held across the push and the emit, so
    /// nothing is published after [`close`](Self::close) returns.
    async fn append(&self, message: ChatMessage) -> bool {
        let mut conversation = self.conversation.write().await;
        let closed = self.closed.lock().unwrap_or_else(PoisonError::into_inner);
        if *closed {
            return false;
        }
        conversation.push(message.clone());
        self.emit(ChatEvent::MessageAppended(message));
        true
    }
}

/// A running conversation bound to one captured [`FarmContext`].
///
/// Dropping the session closes it; the welcome and replies still queued are
/// discarded.
#[derive(Debug)]
pub struct ChatSession {
    context: FarmContext,
    selector: Arc<ResponseSelector>,
    timing: ReplyTiming,
    shared: Arc<SessionShared>,
    replies: mpsc::UnboundedSender<PendingReply>,
}

impl ChatSession {
    /// Opens a conversation and schedules its welcome message.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(
        context: FarmContext,
        selector: Arc<ResponseSelector>,
        timing: ReplyTiming,
        events: mpsc::UnboundedSender<ChatEvent>,
    ) -> Self {
        let shared = Arc::new(SessionShared::new(events));

        let (replies, reply_rx) = mpsc::unbounded_channel();
        tokio::spawn(run_reply_worker(reply_rx, Arc::clone(&shared)));

        // The welcome runs on its own timer so answers never wait behind it.
        let welcome = selector.welcome_message(&context);
        tokio::spawn(deliver_welcome(
            welcome,
            timing.welcome_delay,
            Arc::clone(&shared),
        ));

        tracing::info!(region = %context.region(), season = %context.season(), "chat session started");

        Self {
            context,
            selector,
            timing,
            shared,
            replies,
        }
    }

    pub fn context(&self) -> &FarmContext {
        &self.context
    }

    /// Sends a user message.
    ///
    /// Whitespace-only input is ignored and returns `None`. Otherwise the user
    /// message is appended right away and its reply is queued behind any
    /// replies still pending.
    pub async fn send(&self, text: &str) -> Option<ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }

        let message = ChatMessage::user(text);
        self.shared.append(message.clone()).await;

        let reply = self.selector.respond(text, &self.context);
        if self.shared.pending.fetch_add(1, Ordering::AcqRel) == 0 {
            self.shared.emit(ChatEvent::Composing(true));
        }

        let pending = PendingReply {
            text: reply,
            due: Instant::now() + self.timing.reply_delay,
        };
        if self.replies.send(pending).is_err() {
            tracing::warn!("reply worker stopped; reply dropped");
        }

        Some(message)
    }

    /// Snapshot of the conversation in arrival order.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.shared.conversation.read().await.messages().to_vec()
    }

    pub fn pending_replies(&self) -> usize {
        self.shared.pending.load(Ordering::Acquire)
    }

    pub fn is_composing(&self) -> bool {
        self.pending_replies() > 0
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.shared.close();
        tracing::debug!("chat session closed");
    }
}

async fn deliver_welcome(text: String, delay: Duration, shared: Arc<SessionShared>) {
    tokio::time::sleep(delay).await;
    if !shared.append(ChatMessage::assistant(text)).await {
        tracing::debug!("welcome discarded, session closed");
    }
}

/// Appends queued answers in send order, each no earlier than its deadline.
///
/// Every answer is queued with the same delay, so deadlines never decrease
/// along the queue.
async fn run_reply_worker(
    mut replies: mpsc::UnboundedReceiver<PendingReply>,
    shared: Arc<SessionShared>,
) {
    while let Some(reply) = replies.recv().await {
        tokio::time::sleep_until(reply.due).await;
        if !shared.append(ChatMessage::assistant(reply.text)).await {
            break;
        }

        if shared.pending.fetch_sub(1, Ordering::AcqRel) == 1 {
            shared.emit(ChatEvent::Composing(false));
        }
    }
    tracing::debug!("reply worker finished");
}
