//! Domain layer - Knowledge base types, validation and error taxonomy

pub mod error;
pub mod knowledge_base;

pub use error::DomainError;
pub use knowledge_base::{
    Answer, AnswerResult, CreateKnowledgeBaseResponse, DataExtractionResult,
    KnowledgeBaseChanges, KnowledgeBaseId, KnowledgeBaseValidationError, QnaPair,
    UpdateOperation,
};
