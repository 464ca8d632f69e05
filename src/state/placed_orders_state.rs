// ============================================================================
// PLACED ORDERS STATE - Historial de pedidos del usuario
// ============================================================================
// A diferencia del feed, la lista se vacía al empezar una recarga y también
// si falla, para no mostrar datos viejos.
// ============================================================================

use serde::Serialize;

use crate::models::Order;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PlacedOrdersState {
    pub orders: Vec<Order>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlacedOrdersAction {
    FetchPending,
    FetchFulfilled(Vec<Order>),
    FetchRejected(String),
}

impl PlacedOrdersState {
    pub fn reduce(&mut self, action: PlacedOrdersAction) {
        match action {
            PlacedOrdersAction::FetchPending => {
                self.is_loading = true;
                self.orders.clear();
                self.error = None;
            }
            PlacedOrdersAction::FetchFulfilled(orders) => {
                self.is_loading = false;
                self.orders = orders;
            }
            PlacedOrdersAction::FetchRejected(error) => {
                self.is_loading = false;
                self.orders.clear();
                self.error = Some(error);
            }
        }
    }

    pub fn find(&self, number: u64) -> Option<&Order> {
        self.orders.iter().find(|o| o.number == number)
    }
}
