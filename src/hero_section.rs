use yew::prelude::*;

use crate::config::use_site_config;
use crate::loader::{use_json_resource, LoadState};
use crate::types::PageContent;
use crate::utils::background_image_style;

#[derive(Properties, PartialEq)]
pub struct HeroViewProps {
    pub state: LoadState<PageContent>,
}

/// Hero banner. Failure is only logged; the banner stays up without copy.
#[function_component(HeroView)]
pub fn hero_view(props: &HeroViewProps) -> Html {
    let hero = props.state.loaded().map(|content| &content.hero_section);

    let style = hero.map(|hero| background_image_style(&hero.background_image));
    let title = hero.map(|hero| hero.title.clone()).unwrap_or_default();
    let subtitle = hero.map(|hero| hero.subtitle.clone()).unwrap_or_default();
    let button_text = hero.map(|hero| hero.button_text.clone()).unwrap_or_default();

    html! {
        <section
            id="home"
            style={style}
            class="relative h-screen flex items-center justify-center bg-cover bg-center"
        >
            <div class="absolute inset-0 bg-black/50" />
            <div class="relative z-10 text-center text-white px-4">
                <h1 id="hero-title" class="text-5xl md:text-6xl font-bold mb-4">{title}</h1>
                <p id="hero-subtitle" class="text-xl md:text-2xl mb-8">{subtitle}</p>
                <a
                    id="hero-button"
                    href="#portfolio"
                    class="bg-orange-500 hover:bg-orange-600 text-white font-bold py-3 px-8 rounded-full text-lg transition duration-300"
                >
                    {button_text}
                </a>
            </div>
        </section>
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let config = use_site_config();
    let state = use_json_resource::<PageContent>(config.page_content_path.clone(), "hero content");

    html! {
        <HeroView state={(*state).clone()} />
    }
}
