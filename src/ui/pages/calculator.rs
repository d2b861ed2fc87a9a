use dioxus::prelude::*;

use crate::{
    domain::{margin_indicator, summarize, AppState, GlobalField, ItemField},
    ui::{
        components::{
            item_table::{ItemRow, ItemTable},
            kpi_card::KpiCard,
            margin_badge::MarginBadge,
            results_panel::{format_money, ResultsPanel},
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    // Snapshot the inputs, derive everything fresh. Nothing below survives
    // a render, so the figures can never go stale.
    let inputs = state.with(|st| st.inputs.clone());
    let summary = summarize(&inputs);
    let indicator = margin_indicator(&summary);

    let rows: Vec<ItemRow> = inputs
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| ItemRow {
            index,
            id: item.id.clone(),
            name: item.name.clone(),
            selling_price: item.selling_price,
            cost_per_unit: item.cost_per_unit,
            units_sold: item.units_sold,
            line_profit: (item.selling_price - item.cost_per_unit) * item.units_sold as f64,
        })
        .collect();

    let on_add = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            state.with_mut(|st| {
                st.add_item();
            });
            push_toast(toasts.clone(), ToastKind::Success, "Added a new product.");
        }
    };

    let on_remove = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |index: usize| match state.with_mut(|st| st.remove_item(index)) {
            Ok(removed) => {
                push_toast(
                    toasts.clone(),
                    ToastKind::Info,
                    format!("Removed {}.", removed.name),
                );
            }
            Err(err) => {
                push_toast(toasts.clone(), ToastKind::Error, err.to_string());
            }
        }
    };

    let on_edit = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |(index, field): (usize, ItemField)| {
            if let Err(err) = state.with_mut(|st| st.update_item(index, field)) {
                push_toast(toasts.clone(), ToastKind::Error, err.to_string());
            }
        }
    };

    let on_shipping = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            if let Ok(value) = evt.value().trim().parse::<f64>() {
                state.with_mut(|st| st.update_global(GlobalField::ShippingCosts(value)));
            }
        }
    };

    let on_tax_rate = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            if let Ok(value) = evt.value().trim().parse::<f64>() {
                state.with_mut(|st| st.update_global(GlobalField::TaxRate(value)));
            }
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "Revenue".to_string(),
                    value: format_money(summary.revenue),
                    description: Some(format!("{} product(s)", inputs.items.len())),
                }
                KpiCard {
                    title: "Net Profit After Tax".to_string(),
                    value: format_money(summary.net_profit_after_tax),
                    description: Some("After shipping and income tax".to_string()),
                }
                MarginBadge { indicator: indicator }
            }

            section {
                class: "grid gap-6 lg:grid-cols-[3fr,2fr]",
                div {
                    class: "space-y-4",
                    div { class: "flex items-center justify-between",
                        h2 { class: "text-sm font-semibold text-slate-200", "Product Line" }
                        button {
                            class: "{theme::BTN_PRIMARY}",
                            onclick: on_add,
                            "Add Product"
                        }
                    }

                    ItemTable {
                        rows,
                        on_edit,
                        on_remove,
                    }

                    div {
                        class: "{theme::PANEL} grid gap-4 px-4 py-4 sm:grid-cols-2",
                        div {
                            label { class: "{theme::LABEL}", "Shipping Costs ($)" }
                            input {
                                class: "{theme::INPUT}",
                                r#type: "number",
                                step: "0.01",
                                value: "{inputs.shipping_costs}",
                                oninput: on_shipping,
                            }
                        }
                        div {
                            label { class: "{theme::LABEL}", "Tax Rate (%)" }
                            input {
                                class: "{theme::INPUT}",
                                r#type: "number",
                                step: "0.1",
                                value: "{inputs.tax_rate}",
                                oninput: on_tax_rate,
                            }
                        }
                    }
                }

                div {
                    class: "space-y-4",
                    ResultsPanel { summary: summary }
                }
            }
        }
    }
}
