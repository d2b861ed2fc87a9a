//! Calculator semantics live here, free of any UI concern.

pub mod app_state;
pub mod entities;
pub mod evaluation;

pub use app_state::{AppState, GlobalField, ItemField, StateError};
pub use entities::{CalculatorInputs, LineItem, ProfitSummary};
pub use evaluation::{margin_indicator, summarize, MarginIndicator, MarginStatus};
