//! Blocking client for the `generateContent` endpoint.

use std::{str::FromStr, thread, time::Duration};

use anyhow::{Context as _, Result, anyhow, bail};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use super::wire::{Content, GenerateRequest, GenerateResponse, Part};
use crate::log;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Supported model aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    Flash,
    Pro,
}

impl Model {
    /// Full model id used in the request path.
    pub fn id(self) -> &'static str {
        match self {
            Model::Flash => "gemini-2.5-flash-image-preview",
            Model::Pro => "gemini-2.5-pro",
        }
    }
}

impl FromStr for Model {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gemini-flash" | "flash" => Ok(Model::Flash),
            "gemini-pro" | "pro" => Ok(Model::Pro),
            other => bail!("unknown model `{other}`, use \"gemini-flash\" or \"gemini-pro\""),
        }
    }
}

/// What one API call produced: decoded image bytes plus any text the
/// model sent alongside them.
pub struct GeneratedOutput {
    pub images: Vec<Vec<u8>>,
    pub commentary: Vec<String>,
}

/// Blocking Gemini client with fixed-count retry.
///
/// Retries sleep a constant delay between attempts - no backoff, no
/// jitter. Failures after the last attempt propagate to the caller.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    api_key: String,
    model: Model,
    attempts: u32,
    retry_delay: Duration,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: Model, attempts: u32, retry_delay: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            model,
            attempts: attempts.max(1),
            retry_delay,
        })
    }

    /// Generate from a text prompt.
    pub fn generate(&self, prompt: &str) -> Result<GeneratedOutput> {
        self.request(vec![Content {
            parts: vec![Part::text(prompt)],
        }])
    }

    /// Edit an existing image with a natural-language instruction.
    pub fn edit(&self, image: &[u8], mime_type: &str, instruction: &str) -> Result<GeneratedOutput> {
        self.request(vec![Content {
            parts: vec![
                Part::image(mime_type, BASE64.encode(image)),
                Part::text(instruction),
            ],
        }])
    }

    fn request(&self, contents: Vec<Content>) -> Result<GeneratedOutput> {
        let url = format!("{API_BASE}/models/{}:generateContent", self.model.id());
        let body = GenerateRequest { contents };

        let mut last_err = None;
        for attempt in 1..=self.attempts {
            match self.send(&url, &body) {
                Ok(response) => return collect_output(response),
                Err(e) => {
                    if attempt < self.attempts {
                        log!("generate"; "attempt {attempt} failed ({e}), retrying in {}s",
                            self.retry_delay.as_secs());
                        thread::sleep(self.retry_delay);
                    }
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| anyhow!("no request attempts were made")))
    }

    fn send(&self, url: &str, body: &GenerateRequest) -> Result<GenerateResponse> {
        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .context("request failed")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            bail!("API returned {status}: {}", detail.trim());
        }
        response
            .json::<GenerateResponse>()
            .context("malformed API response")
    }
}

/// Split a response into decoded images and model commentary.
fn collect_output(response: GenerateResponse) -> Result<GeneratedOutput> {
    let mut images = Vec::new();
    let mut commentary = Vec::new();

    for candidate in response.candidates {
        let Some(content) = candidate.content else {
            continue;
        };
        for part in content.parts {
            if let Some(text) = part.text {
                commentary.push(text);
            }
            if let Some(inline) = part.inline_data {
                let bytes = BASE64
                    .decode(inline.data.as_bytes())
                    .context("inline image payload is not valid base64")?;
                images.push(bytes);
            }
        }
    }

    Ok(GeneratedOutput { images, commentary })
}
