use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::smooth_scroll::AnchorLink;

pub const RESTING_SHADOW: &str = "0 2px 4px rgba(0, 0, 0, 0.1)";
pub const RAISED_SHADOW: &str = "0 4px 6px rgba(0, 0, 0, 0.15)";

/// How far below the top of the viewport a section counts as current.
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#mission", "Mission"),
    ("#features", "Features"),
    ("#benefits", "Benefits"),
    ("#pricing", "Pricing"),
    ("#contact", "Contact"),
];

pub fn navbar_shadow(scroll_y: f64) -> &'static str {
    if scroll_y <= 0.0 {
        RESTING_SHADOW
    } else {
        RAISED_SHADOW
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section under `scroll_y + ACTIVE_SECTION_OFFSET`. Later sections
/// win when they overlap.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let probe = scroll_y + ACTIVE_SECTION_OFFSET;
    sections
        .iter()
        .filter(|s| probe >= s.top && probe < s.top + s.height)
        .last()
        .map(|s| s.id.as_str())
}

fn measure_sections() -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds {
            id: section.id(),
            top: section.offset_top() as f64,
            height: section.offset_height() as f64,
        })
        .collect()
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let shadow = use_state_eq(|| RESTING_SHADOW);
    let active = use_state_eq(|| None::<String>);
    let nav_ref = use_node_ref();

    {
        let shadow = shadow.clone();
        let active = active.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scroll_y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            shadow.set(navbar_shadow(scroll_y));

            let sections = measure_sections();
            if let Some(id) = active_section(&sections, scroll_y) {
                active.set(Some(id.to_string()));
            }
        });
    }

    {
        let menu_open = menu_open.clone();
        use_click_away(nav_ref.clone(), move |_: Event| {
            menu_open.set(false);
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let open_class = (*menu_open).then(|| "active");

    html! {
        <nav class="navbar" ref={nav_ref} style={format!("box-shadow: {};", *shadow)}>
            <div class="nav-container">
                <AnchorLink href="#home" class="nav-logo">
                    {"NowPV"}<span class="nav-logo-by">{" by Ecosite"}</span>
                </AnchorLink>

                <button class={classes!("mobile-menu-toggle", open_class)} onclick={toggle_menu} aria-label="Toggle navigation">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <ul class={classes!("nav-links", open_class)}>
                    { for NAV_LINKS.iter().map(|(href, label)| {
                        let is_active = active
                            .as_deref()
                            .map_or(false, |id| href.strip_prefix('#') == Some(id));
                        html! {
                            <li>
                                <AnchorLink
                                    href={*href}
                                    class={classes!(is_active.then(|| "active"))}
                                    onclick={close_menu.clone()}
                                >
                                    {*label}
                                </AnchorLink>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            top,
            height,
        }
    }

    #[test]
    fn shadow_deepens_once_scrolled() {
        assert_eq!(navbar_shadow(0.0), RESTING_SHADOW);
        assert_eq!(navbar_shadow(-12.0), RESTING_SHADOW);
        assert_eq!(navbar_shadow(1.0), RAISED_SHADOW);
    }

    #[test]
    fn active_section_uses_offset_probe() {
        let sections = vec![
            section("home", 0.0, 600.0),
            section("mission", 600.0, 400.0),
            section("features", 1000.0, 800.0),
        ];
        assert_eq!(active_section(&sections, 0.0), Some("home"));
        // 499 + 100 is still inside home, 500 + 100 is the first pixel of mission
        assert_eq!(active_section(&sections, 499.0), Some("home"));
        assert_eq!(active_section(&sections, 500.0), Some("mission"));
        assert_eq!(active_section(&sections, 1200.0), Some("features"));
    }

    #[test]
    fn no_section_below_the_last_one() {
        let sections = vec![section("home", 0.0, 600.0)];
        assert_eq!(active_section(&sections, 900.0), None);
        assert_eq!(active_section(&[], 0.0), None);
    }

    #[test]
    fn overlapping_sections_prefer_the_later() {
        let sections = vec![section("pricing", 0.0, 1000.0), section("contact", 500.0, 500.0)];
        assert_eq!(active_section(&sections, 600.0), Some("contact"));
    }

    #[test]
    fn nav_links_are_in_page_anchors() {
        assert!(NAV_LINKS.iter().all(|(href, _)| href.starts_with('#')));
    }
}
