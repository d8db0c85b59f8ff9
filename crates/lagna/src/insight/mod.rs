//! Rule-matched chart readings for chat messages.
//!
//! Deterministic table lookups; no language model is involved.

pub mod responder;
pub mod templates;

pub use responder::{classify, compose, respond, Insight, InsightMessage, ResponseType, Topic};
