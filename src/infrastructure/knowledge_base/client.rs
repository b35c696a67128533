//! QnA Maker knowledge base client
//!
//! Every operation is one request against `base_endpoint + path`, except
//! `update(.., publish = true)` which chains a PUT after a successful PATCH.
//! A failed PUT does not roll back the PATCH.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::domain::knowledge_base::{
    map_error_response, validate_name, validate_qna_pairs, validate_question, AnswerResult,
    CreateKnowledgeBaseRequest, CreateKnowledgeBaseResponse, GenerateAnswerRequest,
    KnowledgeBaseChanges, KnowledgeBaseId, KnowledgeBaseValidationError, QnaPair,
    UpdateOperation, DEFAULT_TOP,
};
use crate::domain::DomainError;
use crate::infrastructure::http::{
    HttpClient, HttpClientTrait, HttpMethod, HttpRequest, HttpResponse,
};

/// Authentication header expected by the API
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Client for the QnA Maker knowledge base API
#[derive(Debug)]
pub struct KnowledgeBaseClient<C: HttpClientTrait = HttpClient> {
    client: C,
    config: ClientConfig,
}

impl KnowledgeBaseClient<HttpClient> {
    /// Build a client backed by reqwest, using the configured timeout
    pub fn new(config: ClientConfig) -> Result<Self, DomainError> {
        config.validate()?;
        let client = HttpClient::with_timeout(config.timeout)?;

        Ok(Self { client, config })
    }
}

impl<C: HttpClientTrait> KnowledgeBaseClient<C> {
    /// Build a client on top of an existing transport
    pub fn with_client(client: C, config: ClientConfig) -> Result<Self, DomainError> {
        config.validate()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a knowledge base from QnA pairs and/or URLs to extract from
    pub async fn create(
        &self,
        name: &str,
        qna_pairs: Vec<QnaPair>,
        urls: Vec<String>,
    ) -> Result<CreateKnowledgeBaseResponse, DomainError> {
        validate_name(name)?;

        let qna_pairs = if self.config.seed_empty_knowledge_base
            && qna_pairs.is_empty()
            && urls.is_empty()
        {
            vec![QnaPair::new("hi", "Hello")]
        } else {
            qna_pairs
        };

        let request = CreateKnowledgeBaseRequest {
            name: name.to_string(),
            qna_pairs,
            urls,
        };

        let response: CreateKnowledgeBaseResponse = self
            .execute_json(HttpMethod::Post, "create", Some(encode(&request)?))
            .await?;

        info!(kb_id = %response.kb_id, name, "Knowledge base created");
        Ok(response)
    }

    /// Delete a knowledge base
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let id = KnowledgeBaseId::new(id)?;

        self.execute(HttpMethod::Delete, id.as_str(), None).await?;

        info!(kb_id = %id, "Knowledge base deleted");
        Ok(())
    }

    /// Best answer for `question` using the remote default `top`
    pub async fn generate_answer(
        &self,
        id: &str,
        question: &str,
    ) -> Result<AnswerResult, DomainError> {
        self.generate_answer_with_top(id, question, DEFAULT_TOP).await
    }

    /// Up to `top` answers for `question`; `top` is not validated locally
    pub async fn generate_answer_with_top(
        &self,
        id: &str,
        question: &str,
        top: i32,
    ) -> Result<AnswerResult, DomainError> {
        let id = KnowledgeBaseId::new(id)?;
        validate_question(question)?;

        let body = encode(&GenerateAnswerRequest::new(question, top))?;
        let path = format!("{}/generateAnswer", id);

        let result: AnswerResult = self
            .execute_json(HttpMethod::Post, &path, Some(body))
            .await?;

        Ok(result.normalized())
    }

    /// Apply an update and optionally publish it
    pub async fn update(
        &self,
        id: &str,
        operation: UpdateOperation,
        publish: bool,
    ) -> Result<(), DomainError> {
        let id = KnowledgeBaseId::new(id)?;

        if operation.is_empty() {
            return Err(KnowledgeBaseValidationError::EmptyUpdate.into());
        }

        self.execute(HttpMethod::Patch, id.as_str(), Some(encode(&operation)?))
            .await?;
        debug!(kb_id = %id, "Knowledge base updated");

        if publish {
            self.publish(id.as_str()).await?;
        }

        Ok(())
    }

    /// Promote the draft state of a knowledge base to live
    pub async fn publish(&self, id: &str) -> Result<(), DomainError> {
        let id = KnowledgeBaseId::new(id)?;

        self.execute(HttpMethod::Put, id.as_str(), None).await?;

        info!(kb_id = %id, "Knowledge base published");
        Ok(())
    }

    pub async fn add_qna_pairs(
        &self,
        id: &str,
        qna_pairs: Vec<QnaPair>,
        publish: bool,
    ) -> Result<(), DomainError> {
        validate_qna_pairs(&qna_pairs)?;

        let changes = KnowledgeBaseChanges::new().with_qna_pairs(qna_pairs);
        self.update(id, UpdateOperation::add(changes), publish).await
    }

    pub async fn delete_qna_pairs(
        &self,
        id: &str,
        qna_pairs: Vec<QnaPair>,
        publish: bool,
    ) -> Result<(), DomainError> {
        validate_qna_pairs(&qna_pairs)?;

        let changes = KnowledgeBaseChanges::new().with_qna_pairs(qna_pairs);
        self.update(id, UpdateOperation::delete(changes), publish)
            .await
    }

    fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_endpoint.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Shared request path; the only place responses are turned into errors
    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, DomainError> {
        let url = self.build_url(path);
        let mut request = HttpRequest::new(method, url.as_str())
            .with_header(SUBSCRIPTION_KEY_HEADER, self.config.subscription_key.as_str());

        if let Some(body) = body {
            request = request
                .with_header("Content-Type", "application/json")
                .with_json(body);
        }

        debug!(%method, %url, "Sending knowledge base request");

        let response = self.client.send(request).await.inspect_err(|e| {
            warn!(%method, %url, error = %e, "Knowledge base request failed");
        })?;

        if response.is_success() {
            return Ok(response);
        }

        let error = if response.body.trim().is_empty() {
            DomainError::remote(response.status, status_reason(response.status))
        } else {
            map_error_response(response.status, &response.body)
        };

        warn!(
            %method,
            %url,
            status = response.status,
            code = ?error.code(),
            "Knowledge base request rejected: {}",
            error.message()
        );

        Err(error)
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, DomainError> {
        let response = self.execute(method, path, body).await?;

        serde_json::from_str(&response.body).map_err(|e| {
            DomainError::serialization(format!("Failed to parse response: {}", e))
        })
    }
}

fn encode<T: Serialize>(body: &T) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(body)
        .map_err(|e| DomainError::serialization(format!("Failed to encode request: {}", e)))
}

fn status_reason(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(|reason| format!("HTTP {} {}", status, reason))
        .unwrap_or_else(|| format!("HTTP {}", status))
}
