use gloo::timers::future::TimeoutFuture;

use crate::types::ListingSummary;

/// Answers with canned copy after an artificial delay, for builds without an API key
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedGenerator {
    pub delay_ms: u32,
}

impl SimulatedGenerator {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }

    pub async fn generate(&self, listing: &ListingSummary) -> String {
        TimeoutFuture::new(self.delay_ms).await;
        simulated_description(listing)
    }
}

pub fn simulated_description(listing: &ListingSummary) -> String {
    format!(
        "Discover this exquisite {}, a true gem in the heart of the Netherlands. \
         Boasting {}, this property offers a unique blend of comfort and style. \
         Priced at {}, it represents an exceptional opportunity for discerning buyers \
         seeking a premium living experience. Don't miss your chance to own a piece of Dutch paradise.",
        listing.title.to_lowercase(),
        listing.details.to_lowercase(),
        listing.price
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_title_and_details_but_not_price() {
        let listing = ListingSummary::new(
            "Modern Villa".to_string(),
            "5 Bedrooms, Private Garden".to_string(),
            "EUR 1.2M".to_string(),
        );
        let text = simulated_description(&listing);
        assert!(text.starts_with("Discover this exquisite modern villa, a true gem"));
        assert!(text.contains("Boasting 5 bedrooms, private garden, this property"));
        assert!(text.contains("Priced at EUR 1.2M, it represents"));
        assert!(text.ends_with("own a piece of Dutch paradise."));
    }
}
