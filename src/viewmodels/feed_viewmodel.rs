// ============================================================================
// FEED VIEWMODEL - Feed público + historial del usuario
// ============================================================================

use std::rc::Rc;

use crate::services::{ApiError, BurgerApi, SessionStorage};
use crate::state::{AppStore, FeedAction, PlacedOrdersAction};

const FEED_ERROR: &str = "Error cargando el feed de pedidos";
const USER_ORDERS_ERROR: &str = "Error cargando tus pedidos";

pub struct FeedViewModel {
    store: AppStore,
    api: Rc<dyn BurgerApi>,
    session: SessionStorage,
}

impl FeedViewModel {
    pub fn new(store: AppStore, api: Rc<dyn BurgerApi>, session: SessionStorage) -> Self {
        Self {
            store,
            api,
            session,
        }
    }

    /// GET /orders/all. Si falla se mantiene el último feed bueno.
    pub async fn fetch_feed(&self) -> Result<(), ApiError> {
        log::info!("📰 [FEED] Cargando feed...");
        self.store.dispatch(FeedAction::FetchPending);

        match self.api.get_feed().await {
            Ok(snapshot) => {
                log::info!(
                    "✅ [FEED] {} pedidos (total {}, hoy {})",
                    snapshot.orders.len(),
                    snapshot.total,
                    snapshot.total_today
                );
                self.store.dispatch(FeedAction::FetchFulfilled(snapshot));
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [FEED] {}: {}", FEED_ERROR, e);
                self.store
                    .dispatch(FeedAction::FetchRejected(format!("{}: {}", FEED_ERROR, e)));
                Err(e)
            }
        }
    }

    /// GET /orders autenticado
    pub async fn fetch_user_orders(&self) -> Result<usize, ApiError> {
        log::info!("📋 [FEED] Cargando pedidos del usuario...");
        self.store.dispatch(PlacedOrdersAction::FetchPending);

        let result = match self.session.access_token() {
            Some(token) => self.api.get_user_orders(&token).await,
            None => Err(ApiError::MissingCredentials),
        };

        match result {
            Ok(orders) => {
                let count = orders.len();
                self.store.dispatch(PlacedOrdersAction::FetchFulfilled(orders));
                Ok(count)
            }
            Err(e) => {
                log::error!("❌ [FEED] {}: {}", USER_ORDERS_ERROR, e);
                self.store.dispatch(PlacedOrdersAction::FetchRejected(format!(
                    "{}: {}",
                    USER_ORDERS_ERROR, e
                )));
                Err(e)
            }
        }
    }
}
