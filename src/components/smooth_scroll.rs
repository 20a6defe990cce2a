use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

/// Element id an in-page link points at, if any.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smoothly scrolls the element named by `href` to the top of the viewport.
/// Returns false when there is nothing to scroll to.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = anchor_target(href) else {
        return false;
    };
    let target = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));

    match target {
        Some(target) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            log::debug!("No scroll target for {}", href);
            false
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that scrolls instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let extra = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(&href);
            if let Some(extra) = &extra {
                extra.emit(e);
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_targets() {
        assert_eq!(anchor_target("#pricing"), Some("pricing"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/about"), None);
        assert_eq!(anchor_target(""), None);
    }
}
