use yew::prelude::*;

use crate::components::{Reveal, RevealDelay};
use crate::config::use_site_config;
use crate::loader::{use_json_resource, LoadState};
use crate::types::TestimonialsDocument;

pub const TESTIMONIALS_LOAD_FAILED: &str = "Failed to load testimonials.";

#[derive(Properties, PartialEq)]
pub struct TestimonialsViewProps {
    pub state: LoadState<TestimonialsDocument>,
}

#[function_component(TestimonialsView)]
pub fn testimonials_view(props: &TestimonialsViewProps) -> Html {
    let content = match &props.state {
        LoadState::Loading => html! {},
        LoadState::Loaded(doc) => html! {
            <>
                <Reveal class="md:w-1/2" delay={RevealDelay::Ms100}>
                    {
                        doc.testimonials.iter().map(|testimonial| html! {
                            <div class="bg-stone-50 p-8 rounded-lg shadow-lg mb-6">
                                <p class="text-gray-700 italic mb-4">{format!("\"{}\"", testimonial.quote)}</p>
                                <p class="font-semibold text-gray-800">{format!("- {}", testimonial.author)}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </Reveal>
                <Reveal class="md:w-1/2" delay={RevealDelay::Ms200}>
                    <img
                        src={doc.section_image.src.clone()}
                        alt={doc.section_image.alt.clone()}
                        class="rounded-lg shadow-xl w-full"
                    />
                </Reveal>
            </>
        },
        LoadState::Failed => html! {
            <p class="text-red-500 col-span-full">{TESTIMONIALS_LOAD_FAILED}</p>
        },
    };

    html! {
        <section id="testimonials" class="py-20 bg-white">
            <div class="container mx-auto px-6">
                <h2 class="text-4xl font-bold text-center text-gray-800 mb-12">{"What Our Clients Say"}</h2>
                <div id="testimonials-container" class="flex flex-col md:flex-row items-center gap-10">
                    { content }
                </div>
            </div>
        </section>
    }
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let config = use_site_config();
    let state =
        use_json_resource::<TestimonialsDocument>(config.testimonials_path.clone(), "testimonials");

    html! {
        <TestimonialsView state={(*state).clone()} />
    }
}
