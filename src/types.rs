use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

impl ImageRef {
    pub fn new(src: String, alt: String) -> Self {
        Self { src, alt }
    }
}

/// `page_content.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub hero_section: HeroContent,
    pub guiding_section: GuidingContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub background_image: String,
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidingContent {
    pub title: String,
    pub image: ImageRef,
    pub paragraphs: Vec<String>,
}

/// One entry of `portfolio.json`. The document itself is a bare array and
/// items have no identity beyond their position in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub image: String,
    pub image_alt: String,
    pub title: String,
    pub details: String,
    pub price: String,
}

impl PortfolioItem {
    pub fn summary(&self) -> ListingSummary {
        ListingSummary::new(
            self.title.clone(),
            self.details.clone(),
            self.price.clone(),
        )
    }
}

/// `testimonials.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsDocument {
    pub testimonials: Vec<Testimonial>,
    pub section_image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

impl Testimonial {
    pub fn new(quote: String, author: String) -> Self {
        Self { quote, author }
    }
}

/// The visible text of a portfolio card, handed to the description generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSummary {
    pub title: String,
    pub details: String,
    pub price: String,
}

impl ListingSummary {
    pub fn new(title: String, details: String, price: String) -> Self {
        Self {
            title,
            details,
            price,
        }
    }
}
