use std::rc::Rc;
use yew::prelude::*;

use crate::components::DescriptionModal;
use crate::config::SiteConfig;
use crate::description::DescriptionGenerator;
use crate::guiding_section::GuidingSection;
use crate::hero_section::HeroSection;
use crate::modal::{ModalAction, ModalState};
use crate::portfolio_section::PortfolioSection;
use crate::testimonials_section::TestimonialsSection;
use crate::types::ListingSummary;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let modal = use_reducer(ModalState::default);

    let on_generate = {
        let dispatcher = modal.dispatcher();
        let config = props.config.clone();
        // rebuilt on every render, so this is the session of the open modal
        let session = modal.session();
        Callback::from(move |listing: ListingSummary| {
            dispatcher.dispatch(ModalAction::Open);

            let dispatcher = dispatcher.clone();
            let generator = DescriptionGenerator::from_config(&config);
            wasm_bindgen_futures::spawn_local(async move {
                match generator.generate(&listing).await {
                    Ok(text) => dispatcher.dispatch(ModalAction::Completed { session, text }),
                    Err(e) => {
                        log::error!("Error calling API: {}", e);
                        dispatcher.dispatch(ModalAction::GenerationFailed { session });
                    }
                }
            });
        })
    };

    let on_close = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(ModalAction::Close))
    };

    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.config.clone()}>
            <HeroSection />
            <PortfolioSection {on_generate} />
            <GuidingSection />
            <TestimonialsSection />
            <DescriptionModal state={(*modal).clone()} {on_close} />
        </ContextProvider<Rc<SiteConfig>>>
    }
}
