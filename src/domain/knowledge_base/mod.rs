//! Knowledge base domain - QnA pairs, updates, answers and remote errors

mod answer;
mod entity;
mod error_code;
mod validation;

pub use answer::{Answer, AnswerResult, GenerateAnswerRequest, DEFAULT_TOP};
pub use entity::{
    CreateKnowledgeBaseRequest, CreateKnowledgeBaseResponse, DataExtractionResult,
    KnowledgeBaseChanges, KnowledgeBaseId, QnaPair, UpdateOperation,
};
pub use error_code::{map_error_response, remote_error_code};
pub use validation::{
    validate_knowledge_base_id, validate_name, validate_qna_pairs, validate_question,
    KnowledgeBaseValidationError,
};
