//! The generation pipeline: phrase in, persisted pitch out.
//!
//! Strictly sequential: the summary needs the extracted terms, the prompt
//! needs the summary, the generation call needs the prompt, and the store
//! write needs the generated text. Nothing here retries; extraction has
//! its own bounded retry and the route layer reports generation faults to
//! the user instead of retrying them.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use openai_client::{ChatRequest, Message, OpenAIClient, OpenAIError};
use wiki_terms::{build_prompt, ExtractError, Language, PageFetcher, TermExtractor};

use super::error::StoreError;
use super::store::PitchStore;
use super::types::{NewPitch, Pitch};
use crate::kernel::summary::SummaryClient;

/// Model and sampling parameters for pitch generation. High temperature
/// on purpose: the pitches are supposed to be unhinged.
const GENERATION_MODEL: &str = "gpt-4o-mini";
const GENERATION_TEMPERATURE: f32 = 1.0;
const GENERATION_MAX_TOKENS: u32 = 2048;

/// Generates pitch text from a prompt.
///
/// Seam over the OpenAI client so pipeline tests run without a network.
#[async_trait]
pub trait PitchGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, OpenAIError>;
}

#[async_trait]
impl PitchGenerator for OpenAIClient {
    async fn generate(&self, prompt: &str) -> Result<String, OpenAIError> {
        let response = self
            .chat_completion(
                ChatRequest::new(GENERATION_MODEL)
                    .message(Message::user(prompt))
                    .temperature(GENERATION_TEMPERATURE)
                    .max_tokens(GENERATION_MAX_TOKENS),
            )
            .await?;
        Ok(response.content)
    }
}

/// A fault anywhere along the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("term extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("pitch generation failed: {0}")]
    Generation(#[from] OpenAIError),

    #[error("could not save pitch: {0}")]
    Store(#[from] StoreError),
}

/// Object-safe view of the pipeline, so the web layer can hold it as a
/// trait object and tests can substitute a canned runner.
#[async_trait]
pub trait PipelineRunner: Send + Sync {
    async fn run(&self, phrase: &str, language: Language) -> Result<Pitch, PipelineError>;
}

#[async_trait]
impl<F: PageFetcher, G: PitchGenerator> PipelineRunner for PitchPipeline<F, G> {
    async fn run(&self, phrase: &str, language: Language) -> Result<Pitch, PipelineError> {
        PitchPipeline::run(self, phrase, language).await
    }
}

/// Orchestrates extract → summarize → prompt → generate → persist.
pub struct PitchPipeline<F: PageFetcher, G: PitchGenerator> {
    extractor: TermExtractor<F>,
    summary: SummaryClient,
    generator: G,
    store: Arc<PitchStore>,
}

impl<F: PageFetcher, G: PitchGenerator> PitchPipeline<F, G> {
    pub fn new(
        extractor: TermExtractor<F>,
        summary: SummaryClient,
        generator: G,
        store: Arc<PitchStore>,
    ) -> Self {
        Self {
            extractor,
            summary,
            generator,
            store,
        }
    }

    /// Run the full pipeline for a submitted phrase.
    pub async fn run(&self, phrase: &str, language: Language) -> Result<Pitch, PipelineError> {
        let terms = self.extractor.extract_terms(phrase, language).await?;

        // The summary service is optional deployment-wise; when absent the
        // prompt simply goes out without the flavor clause.
        let summary = if self.summary.is_configured() {
            Some(self.summary.get_summary(&terms).await)
        } else {
            None
        };

        let ai_prompt = build_prompt(&terms, language, summary.as_deref());
        let text = self.generator.generate(&ai_prompt).await?;

        let pitch = self
            .store
            .create(NewPitch {
                prompt: phrase.to_string(),
                one: terms[0].clone(),
                two: terms[1].clone(),
                three: terms[2].clone(),
                pitch: text,
            })
            .await?;

        info!(id = pitch.id, phrase = %phrase, "pitch generated and stored");
        Ok(pitch)
    }
}
