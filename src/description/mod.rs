mod gemini;
mod prompt;
mod simulated;

pub use gemini::*;
pub use prompt::*;
pub use simulated::*;

use crate::config::{GeneratorKind, SiteConfig};
use crate::error::Result;
use crate::types::ListingSummary;

/// Turns a listing into marketing copy, remotely or by simulation
#[derive(Debug, Clone, PartialEq)]
pub enum DescriptionGenerator {
    Gemini(GeminiClient),
    Simulated(SimulatedGenerator),
}

impl DescriptionGenerator {
    pub fn from_config(config: &SiteConfig) -> Self {
        match config.generator_kind() {
            GeneratorKind::Gemini => DescriptionGenerator::Gemini(GeminiClient::new(
                config.gemini_endpoint.clone(),
                config.gemini_model.clone(),
                config.api_key.clone(),
            )),
            GeneratorKind::Simulated => {
                DescriptionGenerator::Simulated(SimulatedGenerator::new(config.simulated_delay_ms))
            }
        }
    }

    pub async fn generate(&self, listing: &ListingSummary) -> Result<String> {
        let prompt = build_prompt(listing);
        match self {
            DescriptionGenerator::Gemini(client) => {
                log::info!("Calling Gemini API with prompt: {}", prompt);
                client.generate(&prompt).await
            }
            DescriptionGenerator::Simulated(simulated) => {
                log::info!("Simulating description for prompt: {}", prompt);
                Ok(simulated.generate(listing).await)
            }
        }
    }
}
