//! Shared application state for the HTTP surface.

use std::sync::Arc;

use crate::application::handlers::{
    CancelIntentHandler, DeleteConversationHandler, ExportConversationHandler, GetConversationHandler, PreviewMatchHandler,
    ResolveAdviceHandler, SelectIntentHandler, SendReminderHandler, StartConversationHandler,
    SubmitQuestionHandler,
};
use crate::config::FeatureFlags;
use crate::domain::advice::{AdviceResolver, Advisor};
use crate::ports::{ReminderNotifier, SessionStore};

use super::error::ApiError;

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct AppState {
    pub session_store: Arc<dyn SessionStore>,
    pub resolver: Arc<AdviceResolver>,
    pub notifier: Arc<dyn ReminderNotifier>,
    pub features: FeatureFlags,
}

impl AppState {
    pub fn new(
        session_store: Arc<dyn SessionStore>,
        resolver: Arc<AdviceResolver>,
        notifier: Arc<dyn ReminderNotifier>,
        features: FeatureFlags,
    ) -> Self {
        Self {
            session_store,
            resolver,
            notifier,
            features,
        }
    }

    fn advisor(&self) -> Arc<dyn Advisor> {
        self.resolver.clone()
    }

    /// Converts a handler error, applying the verbose-errors flag.
    pub fn reject(&self, err: impl Into<ApiError>) -> ApiError {
        err.into().redacted(self.features.verbose_errors)
    }

    pub fn resolve_advice_handler(&self) -> ResolveAdviceHandler {
        ResolveAdviceHandler::new(self.advisor())
    }

    pub fn preview_match_handler(&self) -> PreviewMatchHandler {
        PreviewMatchHandler::new(self.resolver.clone())
    }

    pub fn start_conversation_handler(&self) -> StartConversationHandler {
        StartConversationHandler::new(self.session_store.clone())
    }

    pub fn submit_question_handler(&self) -> SubmitQuestionHandler {
        SubmitQuestionHandler::new(self.session_store.clone(), self.advisor())
    }

    pub fn select_intent_handler(&self) -> SelectIntentHandler {
        SelectIntentHandler::new(self.session_store.clone(), self.advisor())
    }

    pub fn cancel_intent_handler(&self) -> CancelIntentHandler {
        CancelIntentHandler::new(self.session_store.clone())
    }

    pub fn get_conversation_handler(&self) -> GetConversationHandler {
        GetConversationHandler::new(self.session_store.clone())
    }

    pub fn delete_conversation_handler(&self) -> DeleteConversationHandler {
        DeleteConversationHandler::new(self.session_store.clone())
    }

    pub fn export_conversation_handler(&self) -> ExportConversationHandler {
        ExportConversationHandler::new(self.session_store.clone())
    }

    pub fn send_reminder_handler(&self) -> SendReminderHandler {
        SendReminderHandler::new(self.notifier.clone(), self.features.enable_reminders)
    }
}
