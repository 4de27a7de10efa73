//! Integration tests for the two-step advice protocol.
//!
//! Drives the conversation handlers against the in-memory store the way the
//! HTTP layer does, covering the four reference scenarios:
//! 1. A question about alcohol gets the alcohol rule verdict
//! 2. A question about lying gets the lying rule verdict
//! 3. An unmatched question asks for an intent, then answers positively
//! 4. Cancelling the clarification renders nothing and discards the question

use std::sync::Arc;

use conseiller::adapters::InMemorySessionStore;
use conseiller::application::handlers::{
    CancelIntentCommand, CancelIntentHandler, ExportConversationHandler, ExportConversationQuery,
    GetConversationHandler, GetConversationQuery, SelectIntentCommand, SelectIntentHandler,
    StartConversationHandler, SubmitQuestionCommand, SubmitQuestionHandler,
};
use conseiller::domain::advice::{
    AdviceResolver, AdviceResult, Advisor, Intent, Tone, CLARIFICATION_PROMPT,
};
use conseiller::domain::conversation::{ConversationState, Role};
use conseiller::domain::foundation::ConversationId;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    store: Arc<InMemorySessionStore>,
    advisor: Arc<dyn Advisor>,
}

impl Harness {
    fn new() -> Self {
        Self {
            store: Arc::new(InMemorySessionStore::new()),
            advisor: Arc::new(AdviceResolver::default()),
        }
    }

    async fn start(&self) -> ConversationId {
        StartConversationHandler::new(self.store.clone())
            .handle()
            .await
            .unwrap()
            .session
            .id()
    }

    async fn ask(&self, id: ConversationId, question: &str) -> AdviceResult {
        SubmitQuestionHandler::new(self.store.clone(), self.advisor.clone())
            .handle(SubmitQuestionCommand {
                conversation_id: id,
                question: question.to_string(),
            })
            .await
            .unwrap()
            .turn
            .result
    }

    async fn answer(&self, id: ConversationId, intent: Intent) -> AdviceResult {
        SelectIntentHandler::new(self.store.clone(), self.advisor.clone())
            .handle(SelectIntentCommand {
                conversation_id: id,
                intent,
            })
            .await
            .unwrap()
            .turn
            .result
    }

    async fn cancel(&self, id: ConversationId) -> bool {
        CancelIntentHandler::new(self.store.clone())
            .handle(CancelIntentCommand { conversation_id: id })
            .await
            .unwrap()
            .cancelled
    }

    async fn state(&self, id: ConversationId) -> ConversationState {
        GetConversationHandler::new(self.store.clone())
            .handle(GetConversationQuery { conversation_id: id })
            .await
            .unwrap()
            .state()
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn alcohol_question_gets_rule_verdict() {
    let harness = Harness::new();
    let id = harness.start().await;

    let result = harness.ask(id, "Je vais boire de l'alcool à une soirée").await;

    let verdict = result.verdict().expect("verdict");
    assert!(verdict.outcome_bad.contains("alcool est servi"));
    assert!(verdict.explanation.starts_with("Explication logique : 👉 Conseil : Privilégie une alternative halal"));
    assert_eq!(verdict.tone, Tone::Encouraging);
    assert_eq!(harness.state(id).await, ConversationState::AwaitingVerdict);
}

#[tokio::test]
async fn lying_question_gets_rule_verdict() {
    let harness = Harness::new();
    let id = harness.start().await;

    let result = harness.ask(id, "Est-ce que je peux mentir à mon patron ?").await;

    let verdict = result.verdict().expect("verdict");
    assert!(verdict.outcome_good.contains("Dire la vérité"));
    assert!(verdict.citation.starts_with("Coran"));
    assert_eq!(verdict.tone, Tone::Encouraging);
}

#[tokio::test]
async fn unmatched_question_then_curiosity_gets_positive_verdict() {
    let harness = Harness::new();
    let id = harness.start().await;

    let first = harness.ask(id, "Puis-je porter une cravate rouge ?").await;
    assert_eq!(
        first,
        AdviceResult::NeedsIntent {
            prompt: CLARIFICATION_PROMPT.to_string()
        }
    );
    assert_eq!(harness.state(id).await, ConversationState::AwaitingIntent);

    let second = harness.answer(id, Intent::Curiosity).await;
    assert_eq!(second.verdict().expect("verdict").tone, Tone::Positive);
    assert_eq!(harness.state(id).await, ConversationState::AwaitingVerdict);
}

#[tokio::test]
async fn cancelled_clarification_renders_nothing() {
    let harness = Harness::new();
    let id = harness.start().await;

    harness.ask(id, "Puis-je porter une cravate rouge ?").await;
    let before = GetConversationHandler::new(harness.store.clone())
        .handle(GetConversationQuery { conversation_id: id })
        .await
        .unwrap();

    assert!(harness.cancel(id).await);

    let after = GetConversationHandler::new(harness.store.clone())
        .handle(GetConversationQuery { conversation_id: id })
        .await
        .unwrap();
    assert_eq!(after.state(), ConversationState::AwaitingVerdict);
    assert!(after.pending_question().is_none());
    assert_eq!(after.messages().len(), before.messages().len());
}

// =============================================================================
// Protocol details
// =============================================================================

#[tokio::test]
async fn every_intent_yields_the_same_generic_verdict() {
    let harness = Harness::new();
    let mut verdicts = Vec::new();

    for intent in Intent::menu().into_iter().chain([Intent::from("autre chose")]) {
        let id = harness.start().await;
        harness.ask(id, "Puis-je porter une cravate rouge ?").await;
        verdicts.push(harness.answer(id, intent).await);
    }

    assert!(verdicts.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn transcript_lists_whole_exchange() {
    let harness = Harness::new();
    let id = harness.start().await;
    harness.ask(id, "Puis-je porter une cravate rouge ?").await;
    harness.answer(id, Intent::PleaseOthers).await;

    let transcript = ExportConversationHandler::new(harness.store.clone())
        .handle(ExportConversationQuery { conversation_id: id })
        .await
        .unwrap();

    let roles: Vec<&str> = transcript
        .content
        .split("\n\n")
        .filter_map(|block| block.split_once(": ").map(|(role, _)| role))
        .filter(|role| ["SYSTEM", "USER", "ASSISTANT"].contains(role))
        .collect();
    assert_eq!(roles.first(), Some(&"SYSTEM"));
    assert!(roles.contains(&"USER"));
    assert!(transcript.content.contains(CLARIFICATION_PROMPT));
}

#[tokio::test]
async fn conversations_are_isolated() {
    let harness = Harness::new();
    let first = harness.start().await;
    let second = harness.start().await;

    harness.ask(first, "Puis-je porter une cravate rouge ?").await;

    assert_eq!(harness.state(first).await, ConversationState::AwaitingIntent);
    assert_eq!(harness.state(second).await, ConversationState::AwaitingVerdict);

    let session = GetConversationHandler::new(harness.store.clone())
        .handle(GetConversationQuery { conversation_id: second })
        .await
        .unwrap();
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].role(), Role::System);
}
