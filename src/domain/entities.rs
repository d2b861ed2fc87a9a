/// One product entry in the calculator: what it sells for, what a unit
/// costs to make, and how many units moved.
#[derive(Clone, Debug, PartialEq)]
pub struct LineItem {
    /// Assigned at creation, never changed, never reused after removal.
    pub id: String,
    pub name: String,
    pub selling_price: f64,
    pub cost_per_unit: f64,
    pub units_sold: u32,
}

/// Everything the user can edit. Order of `items` only matters for display;
/// the aggregation is order-independent.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorInputs {
    pub items: Vec<LineItem>,
    /// Single shared cost across the whole line, not per item. Negative
    /// values are accepted and simply flow through the arithmetic.
    pub shipping_costs: f64,
    /// Percentage, nominally 0-100. Not enforced.
    pub tax_rate: f64,
}

/// Derived figures. Never stored independently: recomputed in full from
/// [`CalculatorInputs`] on every read, so there is no staleness to manage.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProfitSummary {
    pub revenue: f64,
    pub cogs: f64,
    pub gross_profit: f64,
    pub net_profit_before_tax: f64,
    pub income_tax: f64,
    pub net_profit_after_tax: f64,
}
