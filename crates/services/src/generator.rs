//! Question generation over an OpenAI-compatible chat endpoint.

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use interview_core::model::{CandidateProfile, Question};

use crate::error::GenerationError;

/// Number of questions a generation request must yield.
pub const QUESTION_COUNT: usize = 10;

const SYSTEM_PROMPT: &str = "You are an expert technical interviewer. Generate exactly 10 \
multiple choice questions. Return ONLY a valid JSON array with no extra text, no markdown, \
no explanation. Each object must have exactly these fields: \
{\"question\": \"the question text\", \"options\": [\"option A\", \"option B\", \"option C\", \
\"option D\"], \"correct\": 0}. The \"correct\" field is the index (0,1,2,3) of the correct \
option.";

/// Source of interview questions for a candidate profile.
///
/// The production implementation talks to a generative text service; tests
/// substitute a deterministic fake.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Generate the full question set for one session.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` for transport failures and for any
    /// malformed response. No retries are attempted.
    async fn generate(&self, profile: &CandidateProfile) -> Result<Vec<Question>, GenerationError>;
}

//
// ─── CONFIG ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug)]
pub struct QuestionGenConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl QuestionGenConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("INTERVIEW_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("INTERVIEW_AI_BASE_URL")
            .unwrap_or_else(|_| "https://api.groq.com/openai/v1".into());
        let model =
            env::var("INTERVIEW_AI_MODEL").unwrap_or_else(|_| "llama-3.3-70b-versatile".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

//
// ─── SERVICE ──────────────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct QuestionGenService {
    client: Client,
    config: Option<QuestionGenConfig>,
}

impl QuestionGenService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(QuestionGenConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<QuestionGenConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    async fn request_raw(&self, profile: &CandidateProfile) -> Result<String, GenerationError> {
        let config = self.config.as_ref().ok_or(GenerationError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt(profile),
                },
            ],
            temperature: 0.7,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(GenerationError::EmptyResponse)?;

        Ok(content)
    }
}

#[async_trait]
impl QuestionSource for QuestionGenService {
    async fn generate(&self, profile: &CandidateProfile) -> Result<Vec<Question>, GenerationError> {
        let raw = self.request_raw(profile).await?;
        debug!("question service returned {} bytes", raw.len());
        parse_questions(&raw)
    }
}

fn user_prompt(profile: &CandidateProfile) -> String {
    format!(
        "Generate {QUESTION_COUNT} MCQ technical interview questions for a {} level {} who \
         knows {}. Return only the JSON array.",
        profile.experience(),
        profile.job_role(),
        profile.tech_stack()
    )
}

/// Parse the model's reply into validated questions.
///
/// Tolerates markdown code fences around the JSON array; every shape
/// problem maps to a `GenerationError`.
fn parse_questions(raw: &str) -> Result<Vec<Question>, GenerationError> {
    let clean = raw.replace("```json", "").replace("```", "");
    let payload: Vec<QuestionPayload> = serde_json::from_str(clean.trim())?;

    if payload.len() != QUESTION_COUNT {
        return Err(GenerationError::WrongQuestionCount {
            expected: QUESTION_COUNT,
            got: payload.len(),
        });
    }

    payload
        .into_iter()
        .map(|item| Question::new(item.question, item.options, item.correct))
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}

//
// ─── WIRE TYPES ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuestionPayload {
    question: String,
    options: Vec<String>,
    correct: usize,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
