//! Description generation through an external text-generation provider.
//!
//! The rest of the application treats this as an opaque call behind
//! [`DescriptionGenerator`]: title, category and style options in, generated
//! text or one generic failure out. Provider detail never crosses the
//! boundary; whatever goes wrong, the caller sees [`GENERATION_FAILED`].

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use clap::ValueEnum;
use serde_json::{Value, json};
use std::env;
use std::time::Duration;

pub const GENERATION_FAILED: &str = "Failed to generate description. Please try again.";

const API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Tone {
    Professional,
    Friendly,
    Innovative,
    Technical,
    Formal,
    Enthusiastic,
    Concise,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Innovative => "innovative",
            Tone::Technical => "technical",
            Tone::Formal => "formal",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Concise => "concise",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Length {
    Short,
    Medium,
    Long,
}

impl Length {
    /// Size label → prompt instruction.
    pub fn instruction(&self) -> &'static str {
        match self {
            Length::Short => "1 concise sentence",
            Length::Medium => "2-3 sentences",
            Length::Long => "3-4 detailed sentences",
        }
    }
}

pub struct GenerationRequest {
    pub title: String,
    pub category: String,
    pub tone: Tone,
    pub length: Length,
}

pub trait DescriptionGenerator {
    fn generate(&self, request: &GenerationRequest) -> AppResult<String>;
}

/// Build the provider prompt for a request.
pub fn build_prompt(request: &GenerationRequest, company_name: &str) -> String {
    format!(
        "Write a {tone} description ({length}) for a technical service titled \"{title}\" \
         in the category of \"{category}\". \
         The company is \"{company}\", known for innovation and reliability. \
         Focus on the value proposition for the client.",
        tone = request.tone.as_str(),
        length = request.length.instruction(),
        title = request.title,
        category = request.category,
        company = company_name,
    )
}

/// Gemini-backed implementation. The API key comes from the environment,
/// model and timeout from the configuration.
pub struct GeminiGenerator {
    model: String,
    company_name: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl GeminiGenerator {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| {
            warning(format!("{} is not set", API_KEY_VAR));
            AppError::Generation(GENERATION_FAILED.to_string())
        })?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(cfg.generation_timeout_secs))
            .build()
            .map_err(|e| {
                warning(format!("Could not build HTTP client: {}", e));
                AppError::Generation(GENERATION_FAILED.to_string())
            })?;

        Ok(Self {
            model: cfg.gemini_model.clone(),
            company_name: cfg.company_name.clone(),
            api_key,
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        )
    }
}

impl DescriptionGenerator for GeminiGenerator {
    fn generate(&self, request: &GenerationRequest) -> AppResult<String> {
        let prompt = build_prompt(request, &self.company_name);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .map_err(|e| {
                warning(format!("Generation request failed: {}", e));
                AppError::Generation(GENERATION_FAILED.to_string())
            })?;

        if !response.status().is_success() {
            warning(format!("Generation provider answered {}", response.status()));
            return Err(AppError::Generation(GENERATION_FAILED.to_string()));
        }

        let payload: Value = response.json().map_err(|e| {
            warning(format!("Generation response was not valid JSON: {}", e));
            AppError::Generation(GENERATION_FAILED.to_string())
        })?;

        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|t| t.trim().to_string());

        match text {
            Some(t) if !t.is_empty() => Ok(t),
            _ => {
                warning("Generation response carried no text");
                Err(AppError::Generation(GENERATION_FAILED.to_string()))
            }
        }
    }
}
