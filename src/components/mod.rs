pub mod description_modal;
pub mod reveal;

pub use description_modal::DescriptionModal;
pub use reveal::{Reveal, RevealDelay};
