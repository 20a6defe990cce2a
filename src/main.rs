use yew::prelude::*;
use log::info;

mod config;
mod contact {
    pub mod endpoint;
    pub mod form;
    pub mod mail_handoff;
    pub mod outcome;
    pub mod submission;
}
mod components {
    pub mod form_field;
    pub mod nav;
    pub mod pricing_card;
    pub mod reveal;
    pub mod smooth_scroll;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn print_banner() {
    gloo_console::log!(
        "%cNowPV by Ecosite",
        "color: #2d8659; font-size: 20px; font-weight: bold;"
    );
    gloo_console::log!(
        "%cAccelerating commercial solar deployment 🌞",
        "color: #4a4a4a; font-size: 14px;"
    );
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    print_banner();
    info!("Starting NowPV site");
    yew::Renderer::<App>::new().render();
}
