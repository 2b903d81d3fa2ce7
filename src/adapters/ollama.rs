//! Ollama inference adapter
//!
//! Calls the non-streaming `/api/generate` endpoint of an Ollama server.

use std::time::Duration;

use anyhow::Context;
use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::core::error::PipelineError;
use crate::core::ports::InferenceClient;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Inference client for an Ollama server
///
/// Uses a blocking HTTP client; call it from a plain thread or from
/// `spawn_blocking`, never directly inside an async task.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    endpoint: String,
    model: String,
}

impl OllamaClient {
    /// Create a client for `base_url` (e.g. `http://localhost:11434`)
    pub fn new(base_url: &str, model: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: generate_endpoint(base_url),
            model: model.to_string(),
        })
    }
}

fn generate_endpoint(base_url: &str) -> String {
    format!("{}/api/generate", base_url.trim_end_matches('/'))
}

impl InferenceClient for OllamaClient {
    fn complete(&self, prompt: &str) -> Result<String, PipelineError> {
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        debug!("POST {} (model {})", self.endpoint, self.model);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| PipelineError::InferenceFailure(format!("{} failed to respond: {e}", self.model)))?;

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| PipelineError::InferenceFailure(format!("unexpected response body: {e}")))?;

        debug!("Model answered with {} characters", parsed.response.len());
        Ok(parsed.response)
    }

    fn model(&self) -> String {
        self.model.clone()
    }
}
