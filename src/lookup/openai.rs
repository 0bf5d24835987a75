// ABOUTME: OpenAI-compatible chat-completion provider for nutrition lookups
// ABOUTME: Maps 429 to rate-limit and 402 to quota-exhausted errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

//! # OpenAI-Compatible Lookup Provider
//!
//! Implementation of [`NutritionLookup`] against any endpoint speaking the
//! OpenAI chat-completions protocol.
//!
//! ## Configuration
//!
//! Set `AHARA_LOOKUP_API_KEY` with your API key. `AHARA_LOOKUP_BASE_URL` and
//! `AHARA_LOOKUP_MODEL` override the endpoint and model when pointing at a
//! compatible gateway.

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use ahara_core::errors::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::{parse_food_payload, FoodData, NutritionLookup};

/// Environment variable for the lookup API key
const API_KEY_ENV: &str = "AHARA_LOOKUP_API_KEY";

/// Environment variable overriding the API base URL
const BASE_URL_ENV: &str = "AHARA_LOOKUP_BASE_URL";

/// Environment variable overriding the model
const MODEL_ENV: &str = "AHARA_LOOKUP_MODEL";

/// Default chat-completions endpoint base
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model to use
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// System prompt pinning the twelve-field JSON contract
const SYSTEM_PROMPT: &str = r#"You are a nutritional database expert with deep knowledge of Ayurvedic principles. When given a food name, return ONLY a JSON object with this exact structure (no additional text, markdown, or explanation):
{
  "name": "Food Name",
  "category": "one of: Grains, Pulses, Vegetables, Fruits, Dairy, Fats, Spices, Proteins, Nuts, Seeds",
  "calories": number (per 100g),
  "protein": number (grams per 100g),
  "carbs": number (grams per 100g),
  "fat": number (grams per 100g),
  "fiber": number (grams per 100g),
  "rasa": "one of: Sweet, Sour, Salty, Pungent, Bitter, Astringent (or combination like Sweet/Sour)",
  "guna": "one of: Heavy, Light, Oily, Dry, Hot, Cold (or combination)",
  "virya": "Hot or Cold",
  "vipaka": "Sweet, Sour, or Pungent",
  "dosha": "brief description of dosha balancing effect (e.g., 'Balances Vata & Pitta', 'Balances all Doshas')"
}

Important guidelines:
- Provide accurate nutritional values based on USDA or standard nutritional databases
- If exact data is unavailable, provide reasonable estimates based on similar foods
- For Ayurvedic properties, use traditional Ayurvedic knowledge
- Return ONLY the JSON object, no explanations or markdown formatting"#;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<Choice>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Nutrition lookup over an OpenAI-compatible chat-completions API
pub struct OpenAiNutritionProvider {
    api_key: String,
    base_url: String,
    model: String,
    client: Client,
}

impl OpenAiNutritionProvider {
    /// Create a provider with an API key and the default endpoint and model
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            client: Client::new(),
        }
    }

    /// Create a provider from `AHARA_LOOKUP_API_KEY` and the optional
    /// `AHARA_LOOKUP_BASE_URL` / `AHARA_LOOKUP_MODEL` overrides
    ///
    /// # Errors
    ///
    /// Returns a config error if the API key variable is not set.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var(API_KEY_ENV)
            .map_err(|_| AppError::config(format!("{API_KEY_ENV} environment variable not set")))?;
        let mut provider = Self::new(api_key);
        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            provider.base_url = base_url;
        }
        if let Ok(model) = env::var(MODEL_ENV) {
            provider.model = model;
        }
        Ok(provider)
    }

    /// Override the endpoint base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Map API error status to the appropriate error class
    ///
    /// 429 and 402 get dedicated codes so callers can show actionable
    /// messages; everything else is a generic external-service failure.
    fn map_api_error(status: u16, response_text: &str) -> AppError {
        let message = serde_json::from_str::<ChatResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        match status {
            429 => AppError::rate_limited("Rate limit exceeded. Please try again in a moment."),
            402 => AppError::quota_exhausted("AI credits exhausted. Please add credits to continue."),
            _ => AppError::external_service(format!("lookup API error ({status}): {message}")),
        }
    }
}

#[async_trait]
impl NutritionLookup for OpenAiNutritionProvider {
    #[instrument(skip(self), fields(model = %self.model))]
    async fn lookup(&self, food_name: &str) -> AppResult<FoodData> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_owned(),
                },
                ChatMessage {
                    role: "user",
                    content: format!(
                        "Provide complete nutritional and Ayurvedic information for: {food_name}"
                    ),
                },
            ],
        };

        debug!(food = food_name, "sending nutrition lookup request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::external_service(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            error!(status = %status, "lookup API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let chat_response: ChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            error!(error = %e, "failed to parse lookup response envelope");
            AppError::invalid_format(format!("malformed completion response: {e}"))
        })?;

        if let Some(api_error) = chat_response.error {
            return Err(AppError::external_service(format!(
                "lookup API error: {}",
                api_error.message
            )));
        }

        let content = chat_response
            .choices
            .and_then(|mut choices| {
                if choices.is_empty() {
                    None
                } else {
                    choices.swap_remove(0).message.content
                }
            })
            .ok_or_else(|| AppError::external_service("no response content from lookup model"))?;

        parse_food_payload(&content)
    }
}

// Redacts the API key
impl Debug for OpenAiNutritionProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("OpenAiNutritionProvider")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
