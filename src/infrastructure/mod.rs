//! Infrastructure layer - HTTP transport and the knowledge base client

pub mod http;
pub mod knowledge_base;
pub mod logging;
