//! generateAnswer request and result types

use serde::{Deserialize, Deserializer, Serialize};

/// Number of answers the remote service returns when `top` is not sent
pub const DEFAULT_TOP: i32 = 1;

/// Body of a generateAnswer request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateAnswerRequest {
    pub question: String,
    /// Omitted when equal to the remote default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,
}

impl GenerateAnswerRequest {
    /// `top` is passed through unvalidated, only the remote default is dropped
    pub fn new(question: impl Into<String>, top: i32) -> Self {
        Self {
            question: question.into(),
            top: (top != DEFAULT_TOP).then_some(top),
        }
    }
}

/// A single matched answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    /// Questions the answer is stored under; `null` decodes as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub questions: Vec<String>,
    pub score: f64,
}

/// Decoded generateAnswer response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answers: Vec<Answer>,
}

impl AnswerResult {
    /// Drop the remote "no good match" sentinel: exactly one answer scored 0
    pub fn normalized(mut self) -> Self {
        if self.is_no_match_sentinel() {
            self.answers.clear();
        }
        self
    }

    fn is_no_match_sentinel(&self) -> bool {
        matches!(self.answers.as_slice(), [only] if only.score == 0.0)
    }

    /// Best scoring answer, if any
    pub fn best(&self) -> Option<&Answer> {
        self.answers
            .iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
