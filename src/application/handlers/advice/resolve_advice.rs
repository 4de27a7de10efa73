//! ResolveAdviceHandler - Stateless single-shot resolution

use std::sync::Arc;

use thiserror::Error;

use crate::domain::advice::{AdviceRequest, AdviceResult, Advisor, Intent};
use crate::domain::foundation::ValidationError;

/// Command to resolve one question outside any conversation
#[derive(Debug, Clone)]
pub struct ResolveAdviceCommand {
    pub question: String,
    pub intent: Option<Intent>,
}

#[derive(Debug, Error)]
pub enum ResolveAdviceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Handler for stateless resolution
pub struct ResolveAdviceHandler {
    advisor: Arc<dyn Advisor>,
}

impl ResolveAdviceHandler {
    pub fn new(advisor: Arc<dyn Advisor>) -> Self {
        Self { advisor }
    }

    pub fn handle(&self, cmd: ResolveAdviceCommand) -> Result<AdviceResult, ResolveAdviceError> {
        let request = AdviceRequest::new(cmd.question, cmd.intent)?;
        Ok(self.advisor.resolve(&request))
    }
}
