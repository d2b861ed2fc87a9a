use super::entities::{CalculatorInputs, ProfitSummary};

/// Derives the full set of profitability figures from the current inputs.
///
/// Pure and total: no rounding, no caching, no validation. Negative prices
/// or a tax rate outside 0-100 flow straight through the arithmetic; any
/// display rounding happens in the view.
pub fn summarize(inputs: &CalculatorInputs) -> ProfitSummary {
    let mut revenue = 0.0;
    let mut cogs = 0.0;

    for item in &inputs.items {
        let units = item.units_sold as f64;
        revenue += item.selling_price * units;
        cogs += item.cost_per_unit * units;
    }

    let gross_profit = revenue - cogs;
    let net_profit_before_tax = gross_profit - inputs.shipping_costs;

    // Tax is only charged on a positive result; a loss is not refunded.
    let income_tax = if net_profit_before_tax > 0.0 {
        net_profit_before_tax * inputs.tax_rate / 100.0
    } else {
        0.0
    };

    ProfitSummary {
        revenue,
        cogs,
        gross_profit,
        net_profit_before_tax,
        income_tax,
        net_profit_after_tax: net_profit_before_tax - income_tax,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarginIndicator {
    pub status: MarginStatus,
    /// After-tax margin as a fraction of revenue.
    pub margin: f64,
    pub rationale: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarginStatus {
    Green,
    Yellow,
    Red,
}

/// Classifies a summary by its after-tax margin for the badge in the UI.
/// Presentation-only: the thresholds carry no accounting meaning.
pub fn margin_indicator(summary: &ProfitSummary) -> MarginIndicator {
    const HEALTHY_MARGIN: f64 = 0.15;
    const THIN_MARGIN: f64 = 0.05;

    if summary.revenue <= 0.0 {
        let status = if summary.net_profit_after_tax < 0.0 {
            MarginStatus::Red
        } else {
            MarginStatus::Yellow
        };
        return MarginIndicator {
            status,
            margin: 0.0,
            rationale: "No revenue yet".to_string(),
        };
    }

    let margin = summary.net_profit_after_tax / summary.revenue;
    let status = if margin >= HEALTHY_MARGIN {
        MarginStatus::Green
    } else if margin >= THIN_MARGIN {
        MarginStatus::Yellow
    } else {
        MarginStatus::Red
    };

    let rationale = format!(
        "Net {:.0} on revenue {:.0}",
        summary.net_profit_after_tax, summary.revenue
    );

    MarginIndicator {
        status,
        margin,
        rationale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LineItem;

    fn item(selling_price: f64, cost_per_unit: f64, units_sold: u32) -> LineItem {
        LineItem {
            id: format!("test-{selling_price}-{cost_per_unit}-{units_sold}"),
            name: "Test Product".to_string(),
            selling_price,
            cost_per_unit,
            units_sold,
        }
    }

    fn inputs(items: Vec<LineItem>, shipping_costs: f64, tax_rate: f64) -> CalculatorInputs {
        CalculatorInputs {
            items,
            shipping_costs,
            tax_rate,
        }
    }

    #[test]
    fn single_item_with_shipping_and_tax() {
        let summary = summarize(&inputs(vec![item(15.0, 5.0, 100)], 50.0, 20.0));

        assert_eq!(summary.revenue, 1500.0);
        assert_eq!(summary.cogs, 500.0);
        assert_eq!(summary.gross_profit, 1000.0);
        assert_eq!(summary.net_profit_before_tax, 950.0);
        assert_eq!(summary.income_tax, 190.0);
        assert_eq!(summary.net_profit_after_tax, 760.0);
    }

    #[test]
    fn empty_item_list_is_driven_by_shipping_alone() {
        let summary = summarize(&inputs(vec![], 50.0, 20.0));

        assert_eq!(summary.revenue, 0.0);
        assert_eq!(summary.cogs, 0.0);
        assert_eq!(summary.gross_profit, 0.0);
        assert_eq!(summary.net_profit_before_tax, -50.0);
        assert_eq!(summary.income_tax, 0.0);
        assert_eq!(summary.net_profit_after_tax, -50.0);
    }

    #[test]
    fn zero_shipping_and_zero_tax_passes_gross_through() {
        let summary = summarize(&inputs(vec![item(10.0, 3.0, 50)], 0.0, 0.0));

        assert_eq!(summary.gross_profit, 350.0);
        assert_eq!(summary.income_tax, 0.0);
        assert_eq!(summary.net_profit_after_tax, 350.0);
    }

    #[test]
    fn tax_is_never_applied_to_a_loss() {
        // Gross profit 100, shipping 100 -> exactly break-even: no tax.
        let breakeven = summarize(&inputs(vec![item(2.0, 1.0, 100)], 100.0, 35.0));
        assert_eq!(breakeven.net_profit_before_tax, 0.0);
        assert_eq!(breakeven.income_tax, 0.0);

        let loss = summarize(&inputs(vec![item(2.0, 1.0, 100)], 250.0, 35.0));
        assert_eq!(loss.income_tax, 0.0);
        assert_eq!(loss.net_profit_after_tax, loss.net_profit_before_tax);
    }

    #[test]
    fn after_tax_always_equals_before_tax_minus_tax() {
        let cases = [
            inputs(vec![item(15.0, 5.0, 100)], 50.0, 20.0),
            inputs(vec![item(1.0, 9.0, 40), item(8.0, 2.0, 3)], -30.0, 120.0),
            inputs(vec![], -75.0, 50.0),
            inputs(vec![item(-4.0, 2.0, 10)], 0.0, 20.0),
        ];

        for inputs in &cases {
            let summary = summarize(inputs);
            assert_eq!(
                summary.net_profit_after_tax,
                summary.net_profit_before_tax - summary.income_tax
            );
            assert!(summary.income_tax >= 0.0);
            if summary.net_profit_before_tax <= 0.0 {
                assert_eq!(summary.income_tax, 0.0);
            }
        }
    }

    #[test]
    fn negative_prices_flow_through_unvalidated() {
        let summary = summarize(&inputs(vec![item(-5.0, -2.0, 10)], 0.0, 20.0));

        assert_eq!(summary.revenue, -50.0);
        assert_eq!(summary.cogs, -20.0);
        assert_eq!(summary.gross_profit, -30.0);
        assert_eq!(summary.income_tax, 0.0);
    }

    #[test]
    fn multiple_items_sum_independently_of_order() {
        let a = item(15.0, 5.0, 100);
        let b = item(10.0, 3.0, 50);

        let forward = summarize(&inputs(vec![a.clone(), b.clone()], 50.0, 20.0));
        let reverse = summarize(&inputs(vec![b, a], 50.0, 20.0));

        assert_eq!(forward, reverse);
        assert_eq!(forward.revenue, 2000.0);
        assert_eq!(forward.cogs, 650.0);
    }

    #[test]
    fn margin_indicator_tracks_after_tax_margin() {
        let healthy = summarize(&inputs(vec![item(15.0, 5.0, 100)], 50.0, 20.0));
        assert_eq!(margin_indicator(&healthy).status, MarginStatus::Green);

        let thin = summarize(&inputs(vec![item(10.0, 9.0, 100)], 30.0, 20.0));
        assert_eq!(margin_indicator(&thin).status, MarginStatus::Yellow);

        let losing = summarize(&inputs(vec![item(10.0, 12.0, 100)], 0.0, 20.0));
        assert_eq!(margin_indicator(&losing).status, MarginStatus::Red);

        let idle = summarize(&inputs(vec![], 0.0, 20.0));
        assert_eq!(margin_indicator(&idle).status, MarginStatus::Yellow);
    }
}
