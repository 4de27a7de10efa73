//! Conseiller - Conversational Advice Generator
//!
//! This crate classifies everyday questions against an ordered rule table,
//! asks for the user's intent when no rule applies, and answers with a
//! structured verdict (good outcome, bad outcome, explanation, citation).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
