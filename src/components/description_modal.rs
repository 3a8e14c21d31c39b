use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::description::description_markup;
use crate::modal::ModalState;

#[derive(Properties, PartialEq)]
pub struct DescriptionModalProps {
    pub state: ModalState,
    pub on_close: Callback<()>,
}

/// Overlay showing the generated description.
/// Closes on the × button, on a click on the backdrop itself, or on Escape.
#[function_component(DescriptionModal)]
pub fn description_modal(props: &DescriptionModalProps) -> Html {
    // Escape closes the modal
    {
        let on_close = props.on_close.clone();
        let visible = props.state.is_visible();
        use_effect_with(visible, move |visible| {
            let listener = visible.then(|| {
                EventListener::new(&gloo_utils::document(), "keydown", move |event| {
                    if let Some(keyboard_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                        if keyboard_event.key() == "Escape" {
                            on_close.emit(());
                        }
                    }
                })
            });

            move || drop(listener)
        });
    }

    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            // only the backdrop itself, not clicks bubbling up from the dialog
            let target = e.target_dyn_into::<Element>();
            if target.is_some() && target == backdrop_ref.cast::<Element>() {
                on_close.emit(());
            }
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let body = props
        .state
        .body()
        .map(|text| Html::from_html_unchecked(AttrValue::from(format!("<div>{}</div>", description_markup(text)))))
        .unwrap_or_default();

    html! {
        <div
            id="descriptionModal"
            ref={backdrop_ref}
            onclick={on_backdrop_click}
            class={classes!(
                "modal",
                "fixed",
                "inset-0",
                "z-50",
                "flex",
                "items-center",
                "justify-center",
                "bg-black/50",
                (!props.state.is_visible()).then_some("hidden")
            )}
        >
            <div class="modal-content relative bg-white rounded-lg shadow-xl max-w-lg w-full mx-4 p-8">
                <button
                    onclick={on_close_click}
                    class="close-button absolute top-3 right-4 text-2xl text-gray-500 hover:text-gray-800"
                    aria-label="Close"
                >
                    {"×"}
                </button>
                <h3 class="text-2xl font-bold text-gray-800 mb-4">{"✨ Property Description"}</h3>
                <div
                    id="loadingSpinner"
                    class={classes!(
                        "loader",
                        "mx-auto",
                        "my-6",
                        (!props.state.is_loading()).then_some("hidden")
                    )}
                />
                <div id="modalDescription" class="text-gray-700 leading-relaxed">
                    { body }
                </div>
            </div>
        </div>
    }
}
