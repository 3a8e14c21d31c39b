use yew::prelude::*;

use crate::components::{Reveal, RevealDelay};
use crate::config::use_site_config;
use crate::loader::{use_json_resource, LoadState};
use crate::types::PageContent;

#[derive(Properties, PartialEq)]
pub struct GuidingViewProps {
    pub state: LoadState<PageContent>,
}

/// Left empty until loaded, and on failure.
#[function_component(GuidingView)]
pub fn guiding_view(props: &GuidingViewProps) -> Html {
    let content = props.state.loaded().map(|content| {
        let section = &content.guiding_section;
        html! {
            <>
                <Reveal>
                    <h2 class="text-4xl font-bold text-gray-800 mb-12">{&section.title}</h2>
                </Reveal>
                <div class="flex flex-col md:flex-row items-center gap-10">
                    <Reveal class="md:w-1/2" delay={RevealDelay::Ms100}>
                        <img
                            src={section.image.src.clone()}
                            alt={section.image.alt.clone()}
                            class="rounded-lg shadow-xl w-full"
                        />
                    </Reveal>
                    <Reveal class="md:w-1/2" delay={RevealDelay::Ms200}>
                        {
                            section.paragraphs.iter().map(|paragraph| html! {
                                <p class="text-lg text-gray-700 leading-relaxed mb-4">{paragraph}</p>
                            }).collect::<Html>()
                        }
                    </Reveal>
                </div>
            </>
        }
    });

    html! {
        <section id="about" class="py-20 bg-white">
            <div id="guiding-section-container" class="container mx-auto px-6 text-center md:text-left">
                { content.unwrap_or_default() }
            </div>
        </section>
    }
}

#[function_component(GuidingSection)]
pub fn guiding_section() -> Html {
    let config = use_site_config();
    let state =
        use_json_resource::<PageContent>(config.page_content_path.clone(), "guiding section content");

    html! {
        <GuidingView state={(*state).clone()} />
    }
}
