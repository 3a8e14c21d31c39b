mod utils;

pub mod app;
pub mod components;
pub mod config;
pub mod description;
pub mod error;
pub mod guiding_section;
pub mod hero_section;
pub mod loader;
pub mod modal;
pub mod portfolio_section;
pub mod testimonials_section;
pub mod types;

use std::rc::Rc;
use wasm_bindgen::prelude::*;

use app::{App, AppProps};
use config::SiteConfig;

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    let config = Rc::new(SiteConfig::from_build_env());
    log::debug!("Description generator: {:?}", config.generator_kind());
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
