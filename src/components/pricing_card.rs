use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::smooth_scroll::AnchorLink;

const HOVER_Z_INDEX: &str = "10";
const RESTING_Z_INDEX: &str = "1";

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub name: AttrValue,
    pub price: AttrValue,
    pub period: AttrValue,
    pub features: Vec<&'static str>,
    #[prop_or_default]
    pub featured: bool,
}

fn z_index(hovered: bool) -> &'static str {
    if hovered {
        HOVER_Z_INDEX
    } else {
        RESTING_Z_INDEX
    }
}

// Set on the element itself, the inline style also carries the fade-in state.
fn set_z_index(node: &NodeRef, hovered: bool) {
    let Some(card) = node.cast::<HtmlElement>() else {
        return;
    };
    if let Err(e) = card.style().set_property("z-index", z_index(hovered)) {
        log::warn!("Could not set z-index on pricing card: {:?}", e);
    }
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let card_ref = use_node_ref();

    let onmouseenter = {
        let card_ref = card_ref.clone();
        Callback::from(move |_: MouseEvent| set_z_index(&card_ref, true))
    };
    let onmouseleave = {
        let card_ref = card_ref.clone();
        Callback::from(move |_: MouseEvent| set_z_index(&card_ref, false))
    };

    html! {
        <div
            class={classes!("pricing-card", props.featured.then(|| "featured"))}
            ref={card_ref}
            {onmouseenter}
            {onmouseleave}
        >
            if props.featured {
                <span class="pricing-badge">{"Most Popular"}</span>
            }
            <h3>{props.name.clone()}</h3>
            <div class="pricing-price">
                <span class="amount">{props.price.clone()}</span>
                <span class="period">{props.period.clone()}</span>
            </div>
            <ul class="pricing-features">
                { for props.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
            <AnchorLink href="#contact" class="btn btn-primary">{"Get Started"}</AnchorLink>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hovered_card_is_raised_above_its_neighbours() {
        assert_eq!(z_index(true), "10");
        assert_eq!(z_index(false), "1");
    }
}
