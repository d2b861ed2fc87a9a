use dioxus::prelude::*;

use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let version = version_label();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                    div {
                        h1 { class: "text-xl font-semibold tracking-tight", "{APP_NAME}" }
                        p { class: "text-xs text-slate-500 italic", "know your margins before you ship" }
                    }
                    span { class: "text-xs text-slate-600", "{version}" }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
        }
    }
}
