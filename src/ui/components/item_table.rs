use dioxus::prelude::*;

use super::results_panel::format_money;
use crate::domain::ItemField;
use crate::ui::theme;

/// One editable row, addressed by position. `line_profit` is derived by the
/// page from the same inputs the row displays.
#[derive(Clone, PartialEq)]
pub struct ItemRow {
    pub index: usize,
    pub id: String,
    pub name: String,
    pub selling_price: f64,
    pub cost_per_unit: f64,
    pub units_sold: u32,
    pub line_profit: f64,
}

#[component]
pub fn ItemTable(
    rows: Vec<ItemRow>,
    on_edit: EventHandler<(usize, ItemField)>,
    on_remove: EventHandler<usize>,
) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div {
            class: "{theme::PANEL} overflow-hidden",
            table {
                class: "min-w-full divide-y divide-slate-800 text-sm",
                thead {
                    class: "bg-slate-900/60 text-left text-xs uppercase tracking-wide text-slate-500",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Product" }
                        th { class: "px-4 py-3 font-medium", "Selling Price" }
                        th { class: "px-4 py-3 font-medium", "Cost / Unit" }
                        th { class: "px-4 py-3 font-medium", "Units Sold" }
                        th { class: "px-4 py-3 font-medium text-right", "Line Profit" }
                        th { class: "px-4 py-3" }
                    }
                }
                tbody {
                    class: "divide-y divide-slate-800",
                    for row in rows {
                        ItemRowView {
                            key: "{row.id}",
                            row,
                            on_edit: on_edit.clone(),
                            on_remove: on_remove.clone(),
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm text-slate-500",
                                colspan: "6",
                                "Add a product to start calculating."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ItemRowViewProps {
    row: ItemRow,
    on_edit: EventHandler<(usize, ItemField)>,
    on_remove: EventHandler<usize>,
}

#[component]
fn ItemRowView(props: ItemRowViewProps) -> Element {
    let row = props.row;
    let index = row.index;
    let edit_name = props.on_edit.clone();
    let edit_price = props.on_edit.clone();
    let edit_cost = props.on_edit.clone();
    let edit_units = props.on_edit.clone();
    let on_remove = props.on_remove.clone();

    let profit_class = if row.line_profit < 0.0 {
        "px-4 py-3 text-right text-rose-300"
    } else {
        "px-4 py-3 text-right text-slate-200"
    };

    rsx! {
        tr {
            class: "hover:bg-slate-800/40",
            td {
                class: "px-4 py-3",
                input {
                    class: "{theme::INPUT_CELL}",
                    r#type: "text",
                    value: row.name.clone(),
                    oninput: move |evt: FormEvent| {
                        edit_name.call((index, ItemField::Name(evt.value())));
                    },
                }
            }
            td {
                class: "px-4 py-3",
                input {
                    class: "{theme::INPUT_CELL}",
                    r#type: "number",
                    step: "0.01",
                    value: "{row.selling_price}",
                    oninput: move |evt: FormEvent| {
                        if let Ok(price) = evt.value().trim().parse::<f64>() {
                            edit_price.call((index, ItemField::SellingPrice(price)));
                        }
                    },
                }
            }
            td {
                class: "px-4 py-3",
                input {
                    class: "{theme::INPUT_CELL}",
                    r#type: "number",
                    step: "0.01",
                    value: "{row.cost_per_unit}",
                    oninput: move |evt: FormEvent| {
                        if let Ok(cost) = evt.value().trim().parse::<f64>() {
                            edit_cost.call((index, ItemField::CostPerUnit(cost)));
                        }
                    },
                }
            }
            td {
                class: "px-4 py-3",
                input {
                    class: "{theme::INPUT_CELL}",
                    r#type: "number",
                    min: "0",
                    step: "1",
                    value: "{row.units_sold}",
                    oninput: move |evt: FormEvent| {
                        if let Ok(units) = evt.value().trim().parse::<u32>() {
                            edit_units.call((index, ItemField::UnitsSold(units)));
                        }
                    },
                }
            }
            td { class: "{profit_class}", {format_money(row.line_profit)} }
            td {
                class: "px-4 py-3 text-right",
                button {
                    class: "{theme::BTN_REMOVE}",
                    onclick: move |_| on_remove.call(index),
                    "Remove"
                }
            }
        }
    }
}
