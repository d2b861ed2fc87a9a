use super::entities::{CalculatorInputs, LineItem};
use crate::util::generate_item_id;

/// Field selector for [`AppState::update_item`]. One variant per editable
/// field, carrying the replacement value, so a caller can never pair a
/// field with a value of the wrong type.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemField {
    Name(String),
    SellingPrice(f64),
    CostPerUnit(f64),
    UnitsSold(u32),
}

/// Field selector for the two line-wide scalars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GlobalField {
    ShippingCosts(f64),
    TaxRate(f64),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StateError {
    #[error("line item index {index} is out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// The whole mutable session state. Held behind a single signal in the UI;
/// every mutation goes through the methods below and the rendered figures
/// are re-derived from `inputs` afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub inputs: CalculatorInputs,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            inputs: CalculatorInputs {
                items: vec![LineItem {
                    id: generate_item_id(),
                    name: "FidgiPop Classic".to_string(),
                    selling_price: 15.0,
                    cost_per_unit: 5.0,
                    units_sold: 100,
                }],
                shipping_costs: 50.0,
                tax_rate: 20.0,
            },
        }
    }
}

impl AppState {
    /// Appends a new line item with a fresh id and fixed starter values,
    /// returning the new id so the UI can focus the row. Cannot fail.
    pub fn add_item(&mut self) -> String {
        let id = generate_item_id();
        self.inputs.items.push(LineItem {
            id: id.clone(),
            name: "New Product".to_string(),
            selling_price: 10.0,
            cost_per_unit: 3.0,
            units_sold: 50,
        });
        id
    }

    /// Removes the item at `index` and returns it. Out-of-range indices are
    /// rejected rather than ignored; the same policy applies to
    /// [`Self::update_item`].
    pub fn remove_item(&mut self, index: usize) -> Result<LineItem, StateError> {
        let len = self.inputs.items.len();
        if index >= len {
            return Err(StateError::IndexOutOfBounds { index, len });
        }
        Ok(self.inputs.items.remove(index))
    }

    /// Replaces one field of the item at `index`, leaving its id and the
    /// other fields untouched. The whole slot is rebuilt so a reader that
    /// cloned the previous item never sees a half-applied edit.
    pub fn update_item(&mut self, index: usize, field: ItemField) -> Result<(), StateError> {
        let len = self.inputs.items.len();
        let Some(slot) = self.inputs.items.get_mut(index) else {
            return Err(StateError::IndexOutOfBounds { index, len });
        };

        let mut next = slot.clone();
        match field {
            ItemField::Name(name) => next.name = name,
            ItemField::SellingPrice(price) => next.selling_price = price,
            ItemField::CostPerUnit(cost) => next.cost_per_unit = cost,
            ItemField::UnitsSold(units) => next.units_sold = units,
        }
        *slot = next;
        Ok(())
    }

    /// Replaces shipping costs or the tax rate. No bounds enforcement:
    /// negative shipping or a rate above 100% simply show up in the results.
    pub fn update_global(&mut self, field: GlobalField) {
        match field {
            GlobalField::ShippingCosts(value) => self.inputs.shipping_costs = value,
            GlobalField::TaxRate(value) => self.inputs.tax_rate = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_item_appends_with_fresh_id() {
        let mut state = AppState::default();
        let before = state.inputs.items.clone();

        let id = state.add_item();

        assert_eq!(state.inputs.items.len(), before.len() + 1);
        let added = state.inputs.items.last().unwrap();
        assert_eq!(added.id, id);
        assert_eq!(added.name, "New Product");
        assert!(before.iter().all(|item| item.id != id));
    }

    #[test]
    fn add_then_remove_restores_prior_sequence() {
        let mut state = AppState::default();
        state.add_item();
        let before = state.inputs.items.clone();

        state.add_item();
        let removed = state.remove_item(before.len()).unwrap();

        assert_eq!(state.inputs.items, before);
        assert!(before.iter().all(|item| item.id != removed.id));
    }

    #[test]
    fn remove_item_rejects_out_of_range_index() {
        let mut state = AppState::default();
        let before = state.inputs.items.clone();

        let err = state.remove_item(5).unwrap_err();

        assert_eq!(err, StateError::IndexOutOfBounds { index: 5, len: 1 });
        assert_eq!(state.inputs.items, before);
    }

    #[test]
    fn update_item_name_leaves_numbers_and_id_alone() {
        let mut state = AppState::default();
        let before = state.inputs.items[0].clone();

        state
            .update_item(0, ItemField::Name("Renamed".to_string()))
            .unwrap();

        let after = &state.inputs.items[0];
        assert_eq!(after.name, "Renamed");
        assert_eq!(after.id, before.id);
        assert_eq!(after.selling_price, before.selling_price);
        assert_eq!(after.cost_per_unit, before.cost_per_unit);
        assert_eq!(after.units_sold, before.units_sold);
    }

    #[test]
    fn update_item_rejects_out_of_range_index() {
        let mut state = AppState {
            inputs: CalculatorInputs {
                items: Vec::new(),
                shipping_costs: 0.0,
                tax_rate: 0.0,
            },
        };

        let err = state.update_item(0, ItemField::UnitsSold(1)).unwrap_err();

        assert_eq!(err, StateError::IndexOutOfBounds { index: 0, len: 0 });
    }

    #[test]
    fn update_global_accepts_out_of_range_values() {
        let mut state = AppState::default();

        state.update_global(GlobalField::ShippingCosts(-25.0));
        state.update_global(GlobalField::TaxRate(140.0));

        assert_eq!(state.inputs.shipping_costs, -25.0);
        assert_eq!(state.inputs.tax_rate, 140.0);
    }
}
