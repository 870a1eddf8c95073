use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Share of the section that has to be on screen before it fades in.
const VISIBILITY_THRESHOLD: f64 = 0.1;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    pub children: Children,
}

/// Starts transparent and fades in the first time it scrolls into view, then stays visible.
#[function_component(FadeInSection)]
pub fn fade_in_section(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(move |_| {
            let mut observer_handle = None;

            if let Some(element) = node.cast::<Element>() {
                let on_intersect = {
                    let visible = visible.clone();
                    Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            if entry.is_intersecting() {
                                visible.set(true);
                                observer.unobserve(&entry.target());
                            }
                        }
                    }) as Box<dyn FnMut(Array, IntersectionObserver)>)
                };

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));

                match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
                    Ok(observer) => {
                        observer.observe(&element);
                        observer_handle = Some((observer, on_intersect));
                    }
                    Err(e) => {
                        // no observer support, just show the content
                        log::warn!("IntersectionObserver unavailable: {:?}", e);
                        visible.set(true);
                    }
                }
            }

            move || {
                if let Some((observer, _on_intersect)) = observer_handle {
                    observer.disconnect();
                }
            }
        }, ());
    }

    let class = if *visible { "fade-in visible" } else { "fade-in" };

    html! {
        <div ref={node} {class}>
            { for props.children.iter() }
        </div>
    }
}
