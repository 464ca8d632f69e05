// ============================================================================
// CONSTRUCTOR STATE - Bandeja del constructor (bollo + rellenos ordenados)
// ============================================================================
// Un solo bollo; añadir otro lo reemplaza. Los rellenos mantienen el orden
// que decide el usuario (drag & drop -> Move).
// ============================================================================

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::models::{ConstructorIngredient, Ingredient};
use crate::state::order_state::OrderState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Error)]
pub enum ConstructorError {
    #[error("Índices fuera de rango: from={from}, to={to}, len={len}")]
    IndexOutOfBounds { from: usize, to: usize, len: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ConstructorState {
    pub bun: Option<ConstructorIngredient>,
    pub ingredients: Vec<ConstructorIngredient>,
    /// Último `Move` rechazado; cualquier acción válida lo limpia
    pub move_error: Option<ConstructorError>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConstructorAction {
    Add(ConstructorIngredient),
    Remove { instance_id: String },
    Move { from: usize, to: usize },
    Clear,
}

impl ConstructorAction {
    /// Prepara `Add` asignando un id de instancia nuevo
    pub fn add(ingredient: Ingredient) -> Self {
        Self::Add(ConstructorIngredient::new(ingredient))
    }

    pub fn remove(instance_id: impl Into<String>) -> Self {
        Self::Remove {
            instance_id: instance_id.into(),
        }
    }
}

impl ConstructorState {
    pub fn reduce(&mut self, action: ConstructorAction) {
        match action {
            ConstructorAction::Add(item) => {
                if item.ingredient.is_bun() {
                    self.bun = Some(item);
                } else {
                    self.ingredients.push(item);
                }
                self.move_error = None;
            }
            ConstructorAction::Remove { instance_id } => {
                self.ingredients.retain(|i| i.instance_id != instance_id);
                self.move_error = None;
            }
            ConstructorAction::Move { from, to } => match self.check_move(from, to) {
                Ok(()) => {
                    let item = self.ingredients.remove(from);
                    self.ingredients.insert(to, item);
                    self.move_error = None;
                }
                Err(e) => {
                    log::warn!("⚠️ [CONSTRUCTOR] Move rechazado: {}", e);
                    self.move_error = Some(e);
                }
            },
            ConstructorAction::Clear => {
                *self = Self::default();
            }
        }
    }

    /// Ambos índices deben ser posiciones válidas de la lista actual
    pub fn check_move(&self, from: usize, to: usize) -> Result<(), ConstructorError> {
        let len = self.ingredients.len();
        if from >= len || to >= len {
            return Err(ConstructorError::IndexOutOfBounds { from, to, len });
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.bun.is_none() && self.ingredients.is_empty()
    }

    /// 2×bollo + rellenos. Los precios vienen del servidor: satura en u32::MAX.
    pub fn total_price(&self) -> u32 {
        let bun = self.bun.as_ref().map_or(0, |b| b.price().saturating_mul(2));
        self.ingredients
            .iter()
            .fold(bun, |total, i| total.saturating_add(i.price()))
    }

    /// Ids para POST /orders: bollo, rellenos..., bollo. `None` sin bollo.
    pub fn order_ingredient_ids(&self) -> Option<Vec<String>> {
        let bun = self.bun.as_ref()?;
        let mut ids = Vec::with_capacity(self.ingredients.len() + 2);
        ids.push(bun.catalog_id().to_string());
        ids.extend(self.ingredients.iter().map(|i| i.catalog_id().to_string()));
        ids.push(bun.catalog_id().to_string());
        Some(ids)
    }

    /// Contadores de las tarjetas del catálogo (el bollo cuenta 2)
    pub fn ingredient_counts(&self) -> HashMap<String, u32> {
        let mut counts = HashMap::new();
        if let Some(bun) = &self.bun {
            counts.insert(bun.catalog_id().to_string(), 2);
        }
        for item in &self.ingredients {
            *counts.entry(item.catalog_id().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// El botón de pedido solo se habilita con bollo y sin envío en curso
    pub fn can_submit(&self, order: &OrderState) -> bool {
        self.bun.is_some() && !order.order_request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{bun, main, named, sauce};
    use crate::models::IngredientType;

    fn tray_with_fillings(names: &[&str]) -> ConstructorState {
        let mut state = ConstructorState::default();
        state.reduce(ConstructorAction::add(bun()));
        for name in names {
            state.reduce(ConstructorAction::add(named(name, IngredientType::Main, 10)));
        }
        state
    }

    fn filling_names(state: &ConstructorState) -> Vec<String> {
        state
            .ingredients
            .iter()
            .map(|i| i.ingredient.name.clone())
            .collect()
    }

    #[test]
    fn second_bun_replaces_first() {
        let mut state = ConstructorState::default();
        let other_bun = named("Флюоресцентная булка", IngredientType::Bun, 988);

        state.reduce(ConstructorAction::add(bun()));
        state.reduce(ConstructorAction::add(main()));
        state.reduce(ConstructorAction::add(other_bun.clone()));

        assert_eq!(state.bun.as_ref().map(|b| b.ingredient.id.clone()), Some(other_bun.id));
        assert_eq!(state.ingredients.len(), 1);
        assert!(state.ingredients.iter().all(|i| !i.ingredient.is_bun()));
    }

    #[test]
    fn same_ingredient_twice_gets_distinct_instance_ids() {
        let mut state = ConstructorState::default();
        state.reduce(ConstructorAction::add(sauce()));
        state.reduce(ConstructorAction::add(sauce()));

        assert_eq!(state.ingredients.len(), 2);
        assert_ne!(
            state.ingredients[0].instance_id,
            state.ingredients[1].instance_id
        );
        assert_eq!(state.ingredient_counts().get(&sauce().id), Some(&2));
    }

    #[test]
    fn remove_by_instance_id_only_removes_that_entry() {
        let mut state = ConstructorState::default();
        state.reduce(ConstructorAction::add(sauce()));
        state.reduce(ConstructorAction::add(sauce()));
        let target = state.ingredients[0].instance_id.clone();
        let kept = state.ingredients[1].instance_id.clone();

        state.reduce(ConstructorAction::remove(target));

        assert_eq!(state.ingredients.len(), 1);
        assert_eq!(state.ingredients[0].instance_id, kept);
    }

    #[test]
    fn removing_the_bun_instance_is_a_no_op() {
        let mut state = tray_with_fillings(&["F1"]);
        let bun_instance = state.bun.as_ref().unwrap().instance_id.clone();
        let before = state.clone();

        state.reduce(ConstructorAction::remove(bun_instance));

        assert_eq!(state, before);
    }

    #[test]
    fn move_first_to_second_swaps_fillings() {
        let mut state = tray_with_fillings(&["F1", "F2"]);
        let bun_before = state.bun.clone();

        state.reduce(ConstructorAction::Move { from: 0, to: 1 });

        assert_eq!(filling_names(&state), vec!["F2", "F1"]);
        assert_eq!(state.bun, bun_before);
    }

    #[test]
    fn move_is_a_permutation() {
        let names = ["A", "B", "C", "D", "E"];
        for from in 0..names.len() {
            for to in 0..names.len() {
                let mut state = tray_with_fillings(&names);
                let moved = state.ingredients[from].instance_id.clone();
                let mut before: Vec<String> =
                    state.ingredients.iter().map(|i| i.instance_id.clone()).collect();

                state.reduce(ConstructorAction::Move { from, to });

                assert_eq!(state.ingredients[to].instance_id, moved);
                let mut after: Vec<String> =
                    state.ingredients.iter().map(|i| i.instance_id.clone()).collect();
                before.sort();
                after.sort();
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn move_shifts_intervening_elements() {
        let mut state = tray_with_fillings(&["A", "B", "C", "D"]);
        state.reduce(ConstructorAction::Move { from: 3, to: 0 });
        assert_eq!(filling_names(&state), vec!["D", "A", "B", "C"]);

        state.reduce(ConstructorAction::Move { from: 0, to: 2 });
        assert_eq!(filling_names(&state), vec!["A", "B", "D", "C"]);
    }

    #[test]
    fn out_of_range_move_is_rejected_and_tray_untouched() {
        let mut state = tray_with_fillings(&["F1", "F2"]);
        let before = state.ingredients.clone();

        state.reduce(ConstructorAction::Move { from: 0, to: 2 });

        assert_eq!(state.ingredients, before);
        assert_eq!(
            state.move_error,
            Some(ConstructorError::IndexOutOfBounds { from: 0, to: 2, len: 2 })
        );

        state.reduce(ConstructorAction::Move { from: 1, to: 0 });
        assert_eq!(state.move_error, None);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut state = tray_with_fillings(&["F1", "F2"]);
        state.reduce(ConstructorAction::Clear);
        let once = state.clone();
        state.reduce(ConstructorAction::Clear);

        assert_eq!(state, once);
        assert_eq!(state, ConstructorState::default());
        assert!(state.is_empty());
    }

    #[test]
    fn price_counts_bun_twice() {
        let mut state = ConstructorState::default();
        state.reduce(ConstructorAction::add(sauce()));
        assert_eq!(state.total_price(), sauce().price);

        state.reduce(ConstructorAction::add(bun()));
        state.reduce(ConstructorAction::add(main()));
        assert_eq!(
            state.total_price(),
            2 * bun().price + sauce().price + main().price
        );
    }

    #[test]
    fn price_saturates_instead_of_overflowing() {
        let mut state = ConstructorState::default();
        state.reduce(ConstructorAction::add(named(
            "Булка-гигант",
            IngredientType::Bun,
            u32::MAX / 2 + 1,
        )));
        assert_eq!(state.total_price(), u32::MAX);

        state.reduce(ConstructorAction::add(main()));
        assert_eq!(state.total_price(), u32::MAX);
    }

    #[test]
    fn order_ids_bracket_fillings_with_bun() {
        let mut state = ConstructorState::default();
        state.reduce(ConstructorAction::add(main()));
        assert_eq!(state.order_ingredient_ids(), None);

        state.reduce(ConstructorAction::add(bun()));
        state.reduce(ConstructorAction::add(sauce()));
        assert_eq!(
            state.order_ingredient_ids(),
            Some(vec![bun().id, main().id, sauce().id, bun().id])
        );
    }

    #[test]
    fn can_submit_needs_bun_and_idle_order() {
        let mut state = ConstructorState::default();
        let mut order = OrderState::default();
        assert!(!state.can_submit(&order));

        state.reduce(ConstructorAction::add(bun()));
        assert!(state.can_submit(&order));

        order.order_request = true;
        assert!(!state.can_submit(&order));
    }
}
