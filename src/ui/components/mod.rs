pub mod item_table;
pub mod kpi_card;
pub mod margin_badge;
pub mod results_panel;
pub mod toast;
