use yew::prelude::*;

use crate::components::Reveal;
use crate::config::use_site_config;
use crate::loader::{use_json_resource, LoadState};
use crate::types::{ListingSummary, PortfolioItem};

pub const PORTFOLIO_LOAD_FAILED: &str = "Failed to load portfolio projects. Please try again later.";

#[derive(Properties, PartialEq)]
pub struct PortfolioCardProps {
    pub item: PortfolioItem,
    pub on_generate: Callback<ListingSummary>,
}

#[function_component(PortfolioCard)]
pub fn portfolio_card(props: &PortfolioCardProps) -> Html {
    let onclick = {
        let summary = props.item.summary();
        let on_generate = props.on_generate.clone();
        Callback::from(move |_: MouseEvent| {
            on_generate.emit(summary.clone());
        })
    };

    let item = &props.item;
    html! {
        <Reveal class="bg-white rounded-lg shadow-lg overflow-hidden hover:shadow-xl transition duration-300">
            <img src={item.image.clone()} alt={item.image_alt.clone()} class="w-full h-64 object-cover" />
            <div class="p-6">
                <h3 class="text-xl font-semibold text-gray-800 mb-2 property-title">{&item.title}</h3>
                <p class="text-gray-600 mb-2 property-details">{&item.details}</p>
                <p class="text-gray-700 font-bold text-lg property-price">{&item.price}</p>
                <button
                    {onclick}
                    class="mt-4 bg-orange-500 hover:bg-orange-600 text-white font-bold py-2 px-4 rounded-full text-sm generate-description-btn"
                >
                    {"✨ Generate Description"}
                </button>
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioViewProps {
    pub state: LoadState<Vec<PortfolioItem>>,
    pub on_generate: Callback<ListingSummary>,
}

/// Grid of property cards in source order
#[function_component(PortfolioView)]
pub fn portfolio_view(props: &PortfolioViewProps) -> Html {
    let grid = match &props.state {
        LoadState::Loading => html! {},
        LoadState::Loaded(items) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                html! {
                    <PortfolioCard
                        key={idx}
                        item={item.clone()}
                        on_generate={props.on_generate.clone()}
                    />
                }
            })
            .collect::<Html>(),
        LoadState::Failed => html! {
            <p class="text-red-500 col-span-full">{PORTFOLIO_LOAD_FAILED}</p>
        },
    };

    html! {
        <section id="portfolio" class="py-20 bg-stone-100">
            <div class="container mx-auto px-6">
                <h2 class="text-4xl font-bold text-center text-gray-800 mb-12">{"Our Portfolio"}</h2>
                <div id="portfolio-grid" class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    { grid }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioSectionProps {
    pub on_generate: Callback<ListingSummary>,
}

#[function_component(PortfolioSection)]
pub fn portfolio_section(props: &PortfolioSectionProps) -> Html {
    let config = use_site_config();
    let state = use_json_resource::<Vec<PortfolioItem>>(config.portfolio_path.clone(), "portfolio items");

    html! {
        <PortfolioView state={(*state).clone()} on_generate={props.on_generate.clone()} />
    }
}
