//! Knowledge base entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_knowledge_base_id, KnowledgeBaseValidationError};

/// Knowledge base identifier assigned by the remote service (opaque)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KnowledgeBaseId(String);

impl KnowledgeBaseId {
    /// Create a new KnowledgeBaseId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, KnowledgeBaseValidationError> {
        let id = id.into();
        validate_knowledge_base_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for KnowledgeBaseId {
    type Error = KnowledgeBaseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<KnowledgeBaseId> for String {
    fn from(id: KnowledgeBaseId) -> Self {
        id.0
    }
}

impl std::fmt::Display for KnowledgeBaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single question/answer entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QnaPair {
    pub question: String,
    pub answer: String,
}

impl QnaPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// One side (`add` or `delete`) of a knowledge base update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBaseChanges {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qna_pairs: Vec<QnaPair>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
}

impl KnowledgeBaseChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_qna_pairs(mut self, pairs: impl IntoIterator<Item = QnaPair>) -> Self {
        self.qna_pairs.extend(pairs);
        self
    }

    pub fn with_qna_pair(mut self, pair: QnaPair) -> Self {
        self.qna_pairs.push(pair);
        self
    }

    pub fn with_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.urls.extend(urls.into_iter().map(Into::into));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.qna_pairs.is_empty() && self.urls.is_empty()
    }
}

/// Body of a PATCH against a knowledge base
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateOperation {
    #[serde(default, skip_serializing_if = "KnowledgeBaseChanges::is_empty")]
    pub add: KnowledgeBaseChanges,
    #[serde(default, skip_serializing_if = "KnowledgeBaseChanges::is_empty")]
    pub delete: KnowledgeBaseChanges,
}

impl UpdateOperation {
    pub fn new(add: KnowledgeBaseChanges, delete: KnowledgeBaseChanges) -> Self {
        Self { add, delete }
    }

    /// Update that only adds content
    pub fn add(changes: KnowledgeBaseChanges) -> Self {
        Self::new(changes, KnowledgeBaseChanges::default())
    }

    /// Update that only deletes content
    pub fn delete(changes: KnowledgeBaseChanges) -> Self {
        Self::new(KnowledgeBaseChanges::default(), changes)
    }

    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.delete.is_empty()
    }
}

/// Body of a create request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKnowledgeBaseRequest {
    pub name: String,
    pub qna_pairs: Vec<QnaPair>,
    pub urls: Vec<String>,
}

/// Response of a create request
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKnowledgeBaseResponse {
    pub kb_id: KnowledgeBaseId,
    /// Present when URLs were supplied
    #[serde(default)]
    pub data_extraction_results: Vec<DataExtractionResult>,
}

/// Per-source extraction outcome reported on create
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataExtractionResult {
    pub source_type: String,
    /// `Success` or a failure code such as `NoQuestionsFound`
    pub extraction_status_code: String,
    pub source: String,
}

impl DataExtractionResult {
    pub fn is_success(&self) -> bool {
        self.extraction_status_code == "Success"
    }
}
