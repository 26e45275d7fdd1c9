//! Remote text-generation providers.
//!
//! The deterministic template engine never touches this module; when a
//! remote provider is selected, the CLI builds a prompt from the same
//! classified inputs and hands it to a single `generate` capability.

mod gemini;
mod groq;
mod prompt;

pub use gemini::GeminiClient;
pub use groq::GroqClient;
pub use prompt::{COMPOSE_SYSTEM, build_user_prompt};

use std::future::Future;
use std::time::Duration;

use anyhow::Result;

use crate::constants::{PROVIDER_INITIAL_RETRY_DELAY_MS, PROVIDER_MAX_RETRIES};

/// A configured remote generation backend
#[derive(Clone)]
pub enum Provider {
    Gemini(GeminiClient),
    Groq(GroqClient),
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Gemini(_) => "gemini",
            Provider::Groq(_) => "groq",
        }
    }

    /// Generate the email text for a built prompt, retrying transient
    /// failures with exponential backoff.
    pub async fn generate(&self, user_prompt: &str) -> Result<String> {
        let initial_delay = Duration::from_millis(PROVIDER_INITIAL_RETRY_DELAY_MS);
        with_backoff(PROVIDER_MAX_RETRIES, initial_delay, || async {
            match self {
                Provider::Gemini(client) => client.generate(COMPOSE_SYSTEM, user_prompt).await,
                Provider::Groq(client) => client.generate(COMPOSE_SYSTEM, user_prompt).await,
            }
        })
        .await
    }
}

/// Run an async operation up to `1 + max_retries` times, doubling the
/// delay between attempts. Returns the last error when exhausted.
async fn with_backoff<F, Fut, T>(
    max_retries: u32,
    initial_delay: Duration,
    mut operation: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut delay = initial_delay;
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                attempt += 1;
                if attempt > max_retries {
                    return Err(e);
                }
                tracing::warn!(
                    "Provider request failed (attempt {}/{}): {}. Retrying in {:?}...",
                    attempt,
                    max_retries + 1,
                    e,
                    delay
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
        }
    }
}
