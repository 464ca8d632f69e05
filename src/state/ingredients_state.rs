// ============================================================================
// INGREDIENTS STATE - Catálogo de ingredientes
// ============================================================================

use serde::Serialize;

use crate::models::{Ingredient, IngredientType, Order, OrderComposition, OrderLine};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct IngredientsState {
    pub ingredients: Vec<Ingredient>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum IngredientsAction {
    FetchPending,
    FetchFulfilled(Vec<Ingredient>),
    FetchRejected(String),
}

impl IngredientsState {
    pub fn reduce(&mut self, action: IngredientsAction) {
        match action {
            IngredientsAction::FetchPending => {
                self.is_loading = true;
                self.error = None;
            }
            IngredientsAction::FetchFulfilled(ingredients) => {
                self.is_loading = false;
                self.ingredients = ingredients;
            }
            // La lista anterior se conserva
            IngredientsAction::FetchRejected(error) => {
                self.is_loading = false;
                self.error = Some(error);
            }
        }
    }

    /// Filtro puro, conserva el orden del catálogo
    pub fn by_category(&self, kind: IngredientType) -> Vec<&Ingredient> {
        self.ingredients.iter().filter(|i| i.kind == kind).collect()
    }

    pub fn buns(&self) -> Vec<&Ingredient> {
        self.by_category(IngredientType::Bun)
    }

    pub fn sauces(&self) -> Vec<&Ingredient> {
        self.by_category(IngredientType::Sauce)
    }

    pub fn mains(&self) -> Vec<&Ingredient> {
        self.by_category(IngredientType::Main)
    }

    pub fn find(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    /// Resuelve los ids de un pedido contra el catálogo (vista de detalle).
    /// Las líneas salen en orden de primera aparición.
    pub fn compose_order(&self, order: &Order) -> OrderComposition {
        let mut composition = OrderComposition::default();
        for id in &order.ingredients {
            let Some(ingredient) = self.find(id) else {
                if !composition.missing.contains(id) {
                    composition.missing.push(id.clone());
                }
                continue;
            };
            composition.total_price =
                composition.total_price.saturating_add(ingredient.price);
            match composition
                .lines
                .iter_mut()
                .find(|line| line.ingredient.id == *id)
            {
                Some(line) => line.count += 1,
                None => composition.lines.push(OrderLine {
                    ingredient: ingredient.clone(),
                    count: 1,
                }),
            }
        }
        composition
    }
}
