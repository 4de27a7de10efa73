//! Storage Adapters
//!
//! Implementations of the SessionStore port.
//!
//! - **InMemorySessionStore** - Keeps sessions in memory for the process lifetime

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
