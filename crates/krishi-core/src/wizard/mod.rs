//! Wizard controller for the three assistant views.
//!
//! ```text
//! Introduction --start--> Form --submit(complete)--> Conversation
//!                          ^                              |
//!                          +------------back--------------+
//! ```
//!
//! The captured [`FarmContext`] lives inside the `Conversation` state, so it
//! exists exactly while the conversation view is active.

use crate::farm::{FarmContext, FarmContextDraft};
use serde::{Deserialize, Serialize};

/// The view currently shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardView {
    Introduction,
    Form,
    Conversation,
}

/// Internal wizard state; the context is only present in conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    Introduction,
    Form,
    Conversation(FarmContext),
}

impl WizardState {
    pub fn view(&self) -> WizardView {
        match self {
            Self::Introduction => WizardView::Introduction,
            Self::Form => WizardView::Form,
            Self::Conversation(_) => WizardView::Conversation,
        }
    }
}

/// Drives the `Introduction -> Form -> Conversation` flow.
///
/// Every transition method returns whether the state changed. Calls that do
/// not apply to the current view are no-ops.
#[derive(Debug, Clone)]
pub struct WizardController {
    state: WizardState,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardController {
    /// Creates a controller on the introduction view.
    pub fn new() -> Self {
        Self {
            state: WizardState::Introduction,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn view(&self) -> WizardView {
        self.state.view()
    }

    /// The captured context, present only on the conversation view.
    pub fn context(&self) -> Option<&FarmContext> {
        match &self.state {
            WizardState::Conversation(context) => Some(context),
            _ => None,
        }
    }

    /// `Introduction -> Form`.
    pub fn start(&mut self) -> bool {
        if self.state != WizardState::Introduction {
            tracing::debug!("start ignored in {:?} view", self.view());
            return false;
        }
        self.state = WizardState::Form;
        tracing::debug!("wizard: introduction -> form");
        true
    }

    /// Whether `submit` would accept this draft right now.
    ///
    /// Front-ends evaluate this after every field edit to show a "ready" hint.
    pub fn can_submit(&self, draft: &FarmContextDraft) -> bool {
        self.state == WizardState::Form && draft.is_complete()
    }

    /// `Form -> Conversation`, only when every field of `draft` is set.
    ///
    /// An incomplete draft leaves the wizard on the form without raising an
    /// error.
    pub fn submit(&mut self, draft: &FarmContextDraft) -> bool {
        if self.state != WizardState::Form {
            tracing::debug!("submit ignored in {:?} view", self.view());
            return false;
        }
        match draft.complete() {
            Some(context) => {
                tracing::debug!(region = %context.region(), "wizard: form -> conversation");
                self.state = WizardState::Conversation(context);
                true
            }
            None => {
                tracing::debug!(missing = ?draft.missing_fields(), "submit with incomplete form");
                false
            }
        }
    }

    /// `Conversation -> Form`, discarding the captured context.
    pub fn back(&mut self) -> bool {
        if !matches!(self.state, WizardState::Conversation(_)) {
            tracing::debug!("back ignored in {:?} view", self.view());
            return false;
        }
        self.state = WizardState::Form;
        tracing::debug!("wizard: conversation -> form");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::farm::FormField;

    fn full_draft() -> FarmContextDraft {
        FarmContextDraft::from_raw("Kerala", "medium", "Laterite Soil", "Coastal", "kharif")
            .unwrap()
    }

    fn controller_on_form() -> WizardController {
        let mut wizard = WizardController::new();
        assert!(wizard.start());
        wizard
    }

    #[test]
    fn test_starts_on_introduction() {
        let wizard = WizardController::new();
        assert_eq!(wizard.view(), WizardView::Introduction);
        assert!(wizard.context().is_none());
    }

    #[test]
    fn test_start_moves_to_form_once() {
        let mut wizard = WizardController::new();
        assert!(wizard.start());
        assert_eq!(wizard.view(), WizardView::Form);
        assert!(!wizard.start());
        assert_eq!(wizard.view(), WizardView::Form);
    }

    #[test]
    fn test_submit_with_any_empty_field_stays_on_form() {
        for field in FormField::all() {
            let mut wizard = controller_on_form();
            let mut draft = full_draft();
            draft.clear(field);

            assert!(!wizard.can_submit(&draft));
            assert!(!wizard.submit(&draft), "{field} empty but submit accepted");
            assert_eq!(wizard.view(), WizardView::Form);
            assert!(wizard.context().is_none());
        }
    }

    #[test]
    fn test_complete_submit_captures_context() {
        let mut wizard = controller_on_form();
        let draft = full_draft();

        assert!(wizard.can_submit(&draft));
        assert!(wizard.submit(&draft));
        assert_eq!(wizard.view(), WizardView::Conversation);
        assert_eq!(wizard.context(), draft.complete().as_ref());
        assert_eq!(FarmContextDraft::from(wizard.context().unwrap()), draft);
    }

    #[test]
    fn test_submit_outside_form_is_ignored() {
        let mut wizard = WizardController::new();
        assert!(!wizard.submit(&full_draft()));
        assert_eq!(wizard.view(), WizardView::Introduction);
    }

    #[test]
    fn test_back_discards_context() {
        let mut wizard = controller_on_form();
        wizard.submit(&full_draft());

        assert!(wizard.back());
        assert_eq!(wizard.view(), WizardView::Form);
        assert!(wizard.context().is_none());
        assert!(!wizard.back());
    }

    #[test]
    fn test_reentry_requires_fresh_context() {
        let mut wizard = controller_on_form();
        wizard.submit(&full_draft());
        wizard.back();

        let mut second = full_draft();
        second.set(FormField::Season, "rabi").unwrap();
        assert!(wizard.submit(&second));
        assert_eq!(wizard.context(), second.complete().as_ref());
    }
}
