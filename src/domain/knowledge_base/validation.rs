//! Knowledge base argument validation

use std::fmt;

use crate::domain::DomainError;

/// Knowledge base validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum KnowledgeBaseValidationError {
    /// Knowledge base ID is empty
    EmptyId,
    /// Knowledge base name is empty
    EmptyName,
    /// Question passed to generateAnswer is empty
    EmptyQuestion,
    /// Neither `add` nor `delete` carries any change
    EmptyUpdate,
    /// A QnA pair list that must not be empty is empty
    EmptyQnaPairs,
}

impl fmt::Display for KnowledgeBaseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Knowledge base ID cannot be empty"),
            Self::EmptyName => write!(f, "BadArgument: The Name field is required."),
            Self::EmptyQuestion => write!(f, "BadArgument: The Question field is required."),
            Self::EmptyUpdate => write!(f, "BadArgument: The Add or Delete field is required."),
            Self::EmptyQnaPairs => write!(f, "BadArgument: The QnaPairs field is required."),
        }
    }
}

impl std::error::Error for KnowledgeBaseValidationError {}

impl From<KnowledgeBaseValidationError> for DomainError {
    fn from(error: KnowledgeBaseValidationError) -> Self {
        DomainError::validation(error.to_string())
    }
}

/// Validate a knowledge base ID
pub fn validate_knowledge_base_id(id: &str) -> Result<(), KnowledgeBaseValidationError> {
    if id.is_empty() {
        return Err(KnowledgeBaseValidationError::EmptyId);
    }

    Ok(())
}

/// Validate the name given to a new knowledge base
pub fn validate_name(name: &str) -> Result<(), KnowledgeBaseValidationError> {
    if name.is_empty() {
        return Err(KnowledgeBaseValidationError::EmptyName);
    }

    Ok(())
}

/// Validate a question sent to generateAnswer
pub fn validate_question(question: &str) -> Result<(), KnowledgeBaseValidationError> {
    if question.is_empty() {
        return Err(KnowledgeBaseValidationError::EmptyQuestion);
    }

    Ok(())
}

/// Validate a QnA pair list that must carry at least one pair
pub fn validate_qna_pairs<T>(pairs: &[T]) -> Result<(), KnowledgeBaseValidationError> {
    if pairs.is_empty() {
        return Err(KnowledgeBaseValidationError::EmptyQnaPairs);
    }

    Ok(())
}
