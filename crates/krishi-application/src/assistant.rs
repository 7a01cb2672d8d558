//! Page-level controller that ties the wizard, translations and chat together.

use std::sync::Arc;

use krishi_core::advisor::ResponseSelector;
use krishi_core::config::AppConfig;
use krishi_core::conversation::ChatMessage;
use krishi_core::error::Result;
use krishi_core::farm::{FarmContext, FarmContextDraft};
use krishi_core::i18n::{TranslationProvider, Translator};
use krishi_core::wizard::{WizardController, WizardView};
use tokio::sync::mpsc;

use crate::chat_session::{ChatEvent, ChatSession, ReplyTiming};

/// The farming assistant as seen by a front-end.
///
/// A fresh [`ChatSession`] is opened on every successful form submission and
/// dropped on back navigation, so each conversation entry gets its own history
/// and welcome message.
pub struct FarmAssistant {
    wizard: WizardController,
    translations: TranslationProvider,
    selector: Arc<ResponseSelector>,
    timing: ReplyTiming,
    events: mpsc::UnboundedSender<ChatEvent>,
    session: Option<ChatSession>,
}

impl FarmAssistant {
    pub fn new(
        translations: TranslationProvider,
        selector: Arc<ResponseSelector>,
        timing: ReplyTiming,
        events: mpsc::UnboundedSender<ChatEvent>,
    ) -> Self {
        Self {
            wizard: WizardController::new(),
            translations,
            selector,
            timing,
            events,
            session: None,
        }
    }

    /// Builds an assistant from configuration with the builtin rules.
    pub fn from_config(
        config: &AppConfig,
        mut translations: TranslationProvider,
        events: mpsc::UnboundedSender<ChatEvent>,
    ) -> Result<Self> {
        translations.set_language(&config.language);
        let selector = Arc::new(ResponseSelector::builtin()?);
        Ok(Self::new(
            translations,
            selector,
            ReplyTiming::from(config),
            events,
        ))
    }

    pub fn view(&self) -> WizardView {
        self.wizard.view()
    }

    pub fn context(&self) -> Option<&FarmContext> {
        self.wizard.context()
    }

    pub fn session(&self) -> Option<&ChatSession> {
        self.session.as_ref()
    }

    pub fn start(&mut self) -> bool {
        self.wizard.start()
    }

    pub fn can_submit(&self, draft: &FarmContextDraft) -> bool {
        self.wizard.can_submit(draft)
    }

    /// Submits the form. On success a new conversation starts.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, draft: &FarmContextDraft) -> bool {
        if !self.wizard.submit(draft) {
            return false;
        }
        self.session = self.wizard.context().cloned().map(|context| {
            ChatSession::start(
                context,
                Arc::clone(&self.selector),
                self.timing,
                self.events.clone(),
            )
        });
        true
    }

    /// Returns to the form, closing the current conversation.
    pub fn back(&mut self) -> bool {
        if !self.wizard.back() {
            return false;
        }
        self.session = None;
        true
    }

    /// Sends chat input. Returns `None` outside the conversation view or for
    /// blank input.
    pub async fn send(&self, text: &str) -> Option<ChatMessage> {
        match &self.session {
            Some(session) => session.send(text).await,
            None => {
                tracing::debug!("chat input ignored in {:?} view", self.view());
                None
            }
        }
    }

    pub fn set_language(&mut self, code: &str) {
        self.translations.set_language(code);
    }

    pub fn language(&self) -> &str {
        self.translations.language()
    }

    /// Translator for the current language.
    ///
    /// Fails only when the provider was never initialized.
    pub fn translator(&self) -> Result<Translator> {
        self.translations.translator()
    }
}
