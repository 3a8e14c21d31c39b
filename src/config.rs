use std::rc::Rc;
use yew::prelude::*;

pub const PAGE_CONTENT_PATH: &str = "page_content.json";
pub const PORTFOLIO_PATH: &str = "portfolio.json";
pub const TESTIMONIALS_PATH: &str = "testimonials.json";

pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Delay before the simulated generator answers (milliseconds)
pub const SIMULATED_DELAY_MS: u32 = 1500;

/// Fraction of an element that must be on screen before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Which description generator a click is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    Gemini,
    Simulated,
}

/// Site-wide settings, shared with components through a context
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub page_content_path: String,
    pub portfolio_path: String,
    pub testimonials_path: String,
    pub gemini_endpoint: String,
    pub gemini_model: String,
    pub api_key: String,
    pub simulated_delay_ms: u32,
    pub reveal_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_content_path: PAGE_CONTENT_PATH.to_string(),
            portfolio_path: PORTFOLIO_PATH.to_string(),
            testimonials_path: TESTIMONIALS_PATH.to_string(),
            gemini_endpoint: GEMINI_ENDPOINT.to_string(),
            gemini_model: GEMINI_MODEL.to_string(),
            api_key: String::new(),
            simulated_delay_ms: SIMULATED_DELAY_MS,
            reveal_threshold: REVEAL_THRESHOLD,
        }
    }
}

impl SiteConfig {
    /// Defaults plus the API key inlined at build time from `GEMINI_API_KEY`
    pub fn from_build_env() -> Self {
        Self::default().with_api_key(option_env!("GEMINI_API_KEY").unwrap_or_default())
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = api_key.trim().to_string();
        self
    }

    /// An empty key means there is nothing to authenticate the remote call
    /// with, so descriptions are simulated.
    pub fn generator_kind(&self) -> GeneratorKind {
        if self.api_key.is_empty() {
            GeneratorKind::Simulated
        } else {
            GeneratorKind::Gemini
        }
    }
}

/// Config from the nearest provider, or the defaults when rendered standalone
#[hook]
pub fn use_site_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.page_content_path, "page_content.json");
        assert_eq!(config.portfolio_path, "portfolio.json");
        assert_eq!(config.testimonials_path, "testimonials.json");
        assert_eq!(config.simulated_delay_ms, 1500);
        assert!((config.reveal_threshold - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_key_selects_simulated() {
        let config = SiteConfig::default().with_api_key("   ");
        assert_eq!(config.generator_kind(), GeneratorKind::Simulated);
    }

    #[test]
    fn test_key_selects_gemini() {
        let config = SiteConfig::default().with_api_key("abc123");
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.generator_kind(), GeneratorKind::Gemini);
    }
}
