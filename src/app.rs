use dioxus::prelude::*;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::CalculatorPage,
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
}

#[component]
pub fn App() -> Element {
    // One owning signal for the whole session; every page reads and
    // mutates through this context, results are re-derived on render.
    let state = use_signal(AppState::default);
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}
