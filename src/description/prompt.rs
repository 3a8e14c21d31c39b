use crate::types::ListingSummary;

/// Shown in the modal when generation fails for any reason
pub const GENERATION_FAILED_MESSAGE: &str =
    "Sorry, we could not generate a description at this time. Please try again later.";

pub fn build_prompt(listing: &ListingSummary) -> String {
    format!(
        "Write a compelling and professional real estate description for a property in the Netherlands. \
         Be creative and engaging. Details: Title: {}, Features: {}, Price: {}.",
        listing.title, listing.details, listing.price
    )
}

/// Generated text goes into the modal as markup, line breaks included.
/// Nothing is escaped.
pub fn description_markup(text: &str) -> String {
    text.replace('\n', "<br>")
}
