use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::use_site_config;
use crate::error::Result;

/// Staggered start for elements revealed side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealDelay {
    #[default]
    None,
    Ms100,
    Ms200,
}

impl RevealDelay {
    pub fn class(&self) -> Option<&'static str> {
        match self {
            RevealDelay::None => None,
            RevealDelay::Ms100 => Some("animate-delay-100"),
            RevealDelay::Ms200 => Some("animate-delay-200"),
        }
    }
}

/// One-shot switch: fires on the first intersecting notification only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Returns true exactly once, for the first intersecting notification
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Watches one element and calls `on_reveal` the first time it scrolls into
/// view, then unobserves it. Disconnects on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe(element: &Element, threshold: f64, on_reveal: impl Fn() + 'static) -> Result<Self> {
        let mut latch = RevealLatch::default();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if latch.observe(entry.is_intersecting()) {
                        observer.unobserve(&entry.target());
                        on_reveal();
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay: RevealDelay,
    #[prop_or_default]
    pub children: Children,
}

/// `animate-on-scroll` wrapper that gains `is-visible` once, on first sight
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_state(|| false);
    let threshold = use_site_config().reveal_threshold;

    {
        let node_ref = node_ref.clone();
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let observer = node_ref.cast::<Element>().and_then(|element| {
                match RevealObserver::observe(&element, threshold, move || visible.set(true)) {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        log::error!("Could not observe element for scroll animation: {}", e);
                        None
                    }
                }
            });

            move || drop(observer)
        });
    }

    html! {
        <div
            ref={node_ref}
            class={classes!(
                props.class.clone(),
                "animate-on-scroll",
                props.delay.class(),
                (*visible).then_some("is-visible")
            )}
        >
            { props.children.clone() }
        </div>
    }
}
