use dioxus::prelude::*;

use crate::domain::{MarginIndicator, MarginStatus};

#[component]
pub fn MarginBadge(indicator: MarginIndicator) -> Element {
    let (label, theme) = match indicator.status {
        MarginStatus::Green => (
            "Healthy",
            "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
        ),
        MarginStatus::Yellow => (
            "Thin",
            "border-amber-500/40 bg-amber-500/10 text-amber-200",
        ),
        MarginStatus::Red => ("Losing", "border-rose-500/40 bg-rose-500/10 text-rose-200"),
    };
    let margin_display = format!("{:.1}%", indicator.margin * 100.0);

    rsx! {
        div {
            class: "rounded-xl border px-4 py-3 {theme}",
            div {
                class: "flex items-center justify-between",
                span { class: "text-xs font-semibold uppercase tracking-wide", "Net Margin" }
                span { class: "text-xs font-semibold uppercase", "{label}" }
            }
            p { class: "mt-2 text-2xl font-semibold", "{margin_display}" }
            p { class: "mt-1 text-xs opacity-80", "{indicator.rationale}" }
        }
    }
}
