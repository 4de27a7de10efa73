//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `advice` - Rule matching and advice resolution (the decision engine)
//! - `conversation` - Conversation session and the clarification protocol
//! - `reminder` - Spiritual reminder notifications

pub mod advice;
pub mod conversation;
pub mod foundation;
pub mod reminder;
