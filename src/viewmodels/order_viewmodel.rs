// ============================================================================
// ORDER VIEWMODEL - Envío del pedido y consulta por número
// ============================================================================
// El store no bloquea un segundo envío mientras hay uno en curso: la vista
// deshabilita el botón con `ConstructorState::can_submit`.
// ============================================================================

use std::rc::Rc;

use crate::models::Order;
use crate::services::{ApiError, BurgerApi, SessionStorage};
use crate::state::{AppStore, ConstructorAction, OrderAction};

const SUBMIT_ERROR: &str = "Error realizando el pedido";
const LOOKUP_ERROR: &str = "Error cargando el pedido";

pub struct OrderViewModel {
    store: AppStore,
    api: Rc<dyn BurgerApi>,
    session: SessionStorage,
}

impl OrderViewModel {
    pub fn new(store: AppStore, api: Rc<dyn BurgerApi>, session: SessionStorage) -> Self {
        Self {
            store,
            api,
            session,
        }
    }

    /// POST /orders con ids en orden bollo, rellenos..., bollo
    pub async fn submit_order(&self, ingredient_ids: Vec<String>) -> Result<Order, ApiError> {
        log::info!(
            "🍔 [ORDER] Enviando pedido ({} ingredientes)",
            ingredient_ids.len()
        );
        self.store.dispatch(OrderAction::SubmitPending);

        match self.post_order(&ingredient_ids).await {
            Ok(order) => {
                log::info!("✅ [ORDER] Pedido #{} creado", order.number);
                self.store.dispatch(OrderAction::SubmitFulfilled(order.clone()));
                Ok(order)
            }
            Err(e) => {
                log::error!("❌ [ORDER] {}: {}", SUBMIT_ERROR, e);
                self.store
                    .dispatch(OrderAction::SubmitRejected(format!("{}: {}", SUBMIT_ERROR, e)));
                Err(e)
            }
        }
    }

    async fn post_order(&self, ingredient_ids: &[String]) -> Result<Order, ApiError> {
        let Some(first) = ingredient_ids.first() else {
            return Err(ApiError::InvalidRequest(
                "el pedido no tiene ingredientes".to_string(),
            ));
        };
        // Solo se valida contra el catálogo si el id es conocido
        let headed_by_non_bun = self.store.select(|s| {
            s.ingredients
                .find(first)
                .map_or(false, |ingredient| !ingredient.is_bun())
        });
        if headed_by_non_bun {
            return Err(ApiError::InvalidRequest(
                "el pedido debe empezar por un bollo".to_string(),
            ));
        }

        let token = self
            .session
            .access_token()
            .ok_or(ApiError::MissingCredentials)?;
        self.api.create_order(&token, ingredient_ids).await
    }

    /// Envía la bandeja actual y la vacía si el pedido se crea
    pub async fn submit_tray(&self) -> Result<Order, ApiError> {
        let ids = self
            .store
            .select(|s| s.burger_constructor.order_ingredient_ids());
        let Some(ids) = ids else {
            let e = ApiError::InvalidRequest("falta el bollo".to_string());
            self.store.dispatch(OrderAction::SubmitPending);
            self.store
                .dispatch(OrderAction::SubmitRejected(format!("{}: {}", SUBMIT_ERROR, e)));
            return Err(e);
        };

        let order = self.submit_order(ids).await?;
        self.store.dispatch(ConstructorAction::Clear);
        Ok(order)
    }

    /// GET /orders/{number}; se queda con el primer resultado
    pub async fn fetch_order_by_number(&self, number: u64) -> Result<Order, ApiError> {
        log::info!("🔍 [ORDER] Buscando pedido #{}", number);
        self.store.dispatch(OrderAction::LookupPending);

        let result = self.api.get_order_by_number(number).await.and_then(|orders| {
            orders
                .into_iter()
                .next()
                .ok_or_else(|| ApiError::Rejected(format!("pedido #{} no encontrado", number)))
        });

        match result {
            Ok(order) => {
                self.store.dispatch(OrderAction::LookupFulfilled(order.clone()));
                Ok(order)
            }
            Err(e) => {
                log::error!("❌ [ORDER] {} #{}: {}", LOOKUP_ERROR, number, e);
                self.store
                    .dispatch(OrderAction::LookupRejected(format!("{}: {}", LOOKUP_ERROR, e)));
                Err(e)
            }
        }
    }

    /// Al salir de la vista de detalle
    pub fn clear_order_data(&self) {
        self.store.dispatch(OrderAction::ClearOrderData);
    }
}
