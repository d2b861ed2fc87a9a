use dioxus::prelude::*;

use crate::domain::ProfitSummary;
use crate::ui::theme;

/// Currency formatting for display only; the underlying figures are never
/// rounded.
pub fn format_money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}

#[component]
pub fn ResultsPanel(summary: ProfitSummary) -> Element {
    let rows = [
        ("Revenue", summary.revenue, false),
        ("Cost of Goods Sold", summary.cogs, false),
        ("Gross Profit", summary.gross_profit, false),
        (
            "Net Profit Before Tax",
            summary.net_profit_before_tax,
            false,
        ),
        ("Income Tax", summary.income_tax, false),
        ("Net Profit After Tax", summary.net_profit_after_tax, true),
    ];

    rsx! {
        div {
            class: "{theme::PANEL} p-6",
            h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Results" }
            dl {
                class: "mt-4 divide-y divide-slate-800",
                for (label, value, emphasize) in rows {
                    ResultRow { label, value, emphasize }
                }
            }
        }
    }
}

#[component]
fn ResultRow(label: &'static str, value: f64, emphasize: bool) -> Element {
    let value_class = if emphasize {
        if value < 0.0 {
            "text-lg font-semibold text-rose-300"
        } else {
            "text-lg font-semibold text-emerald-300"
        }
    } else if value < 0.0 {
        "text-sm text-rose-300"
    } else {
        "text-sm text-slate-200"
    };

    rsx! {
        div {
            class: "flex items-center justify-between py-3",
            dt { class: "text-sm text-slate-400", "{label}" }
            dd { class: "{value_class}", {format_money(value)} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::format_money;

    #[test]
    fn money_formatting_keeps_the_sign_outside_the_symbol() {
        assert_eq!(format_money(1500.0), "$1500.00");
        assert_eq!(format_money(-50.0), "-$50.00");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(0.005), "$0.01");
    }
}
