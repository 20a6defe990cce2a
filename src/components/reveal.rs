use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub const REVEAL_SELECTOR: &str = ".mission-item, .feature, .benefit-card, .pricing-card";

const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

const HIDDEN: &[(&str, &str)] = &[
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

const SHOWN: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn apply(element: &HtmlElement, styles: &[(&str, &str)]) {
    let style = element.style();
    for (property, value) in styles {
        if let Err(e) = style.set_property(property, value) {
            log::warn!("Could not set {} on animated element: {:?}", property, e);
        }
    }
}

fn observe(selector: &str) -> Result<(IntersectionObserver, EntriesCallback), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;

    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            if let Ok(element) = entry.target().dyn_into::<HtmlElement>() {
                apply(&element, SHOWN);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let nodes = document.query_selector_all(selector)?;
    let mut count = 0;
    for element in (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
    {
        apply(&element, HIDDEN);
        observer.observe(&element);
        count += 1;
    }
    log::debug!("Fading in {} elements on scroll", count);

    Ok((observer, callback))
}

/// Fades elements matching `selector` in as they scroll into view. Runs once
/// after the first render.
#[hook]
pub fn use_reveal_on_scroll(selector: &'static str) {
    use_effect_with_deps(
        move |_| {
            let observed = match observe(selector) {
                Ok(observed) => Some(observed),
                Err(e) => {
                    log::error!("Scroll animations disabled: {:?}", e);
                    None
                }
            };
            move || {
                if let Some((observer, _callback)) = observed {
                    observer.disconnect();
                }
            }
        },
        (),
    );
}
