//! Knowledge base API client

mod client;

pub use client::{KnowledgeBaseClient, SUBSCRIPTION_KEY_HEADER};
