// ============================================================================
// ORDER STATE - Envío del pedido + consulta de un pedido por número
// ============================================================================
// Dos ciclos de vida independientes con errores separados: un fallo al
// consultar un pedido no se confunde con un fallo al enviarlo.
// ============================================================================

use serde::Serialize;

use crate::models::Order;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OrderState {
    pub post_order_error: Option<String>,
    pub fetch_order_by_id_error: Option<String>,
    /// Consulta por número en curso
    pub is_loading: bool,
    /// Envío en curso
    pub order_request: bool,
    pub order_data: Option<Order>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OrderAction {
    SubmitPending,
    SubmitFulfilled(Order),
    SubmitRejected(String),
    LookupPending,
    LookupFulfilled(Order),
    LookupRejected(String),
    ClearOrderData,
}

impl OrderState {
    pub fn reduce(&mut self, action: OrderAction) {
        match action {
            OrderAction::SubmitPending => {
                self.order_request = true;
                self.post_order_error = None;
            }
            OrderAction::SubmitFulfilled(order) => {
                self.order_request = false;
                self.order_data = Some(order);
            }
            OrderAction::SubmitRejected(error) => {
                self.order_request = false;
                self.post_order_error = Some(error);
            }
            OrderAction::LookupPending => {
                self.is_loading = true;
                self.fetch_order_by_id_error = None;
            }
            OrderAction::LookupFulfilled(order) => {
                self.is_loading = false;
                self.order_data = Some(order);
            }
            // order_data se conserva
            OrderAction::LookupRejected(error) => {
                self.is_loading = false;
                self.fetch_order_by_id_error = Some(error);
            }
            OrderAction::ClearOrderData => {
                self.order_data = None;
            }
        }
    }
}
