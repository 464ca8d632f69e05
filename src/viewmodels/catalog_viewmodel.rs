// ============================================================================
// CATALOG VIEWMODEL - Carga del catálogo de ingredientes
// ============================================================================

use std::rc::Rc;

use crate::services::{ApiError, BurgerApi};
use crate::state::{AppStore, IngredientsAction};

const CATALOG_ERROR: &str = "Error cargando ingredientes";

pub struct CatalogViewModel {
    store: AppStore,
    api: Rc<dyn BurgerApi>,
}

impl CatalogViewModel {
    pub fn new(store: AppStore, api: Rc<dyn BurgerApi>) -> Self {
        Self { store, api }
    }

    /// Se llama una vez al arrancar. Si falla, la lista anterior se conserva.
    pub async fn fetch_catalog(&self) -> Result<usize, ApiError> {
        log::info!("🥬 [CATALOG] Cargando ingredientes...");
        self.store.dispatch(IngredientsAction::FetchPending);

        match self.api.get_ingredients().await {
            Ok(ingredients) => {
                let count = ingredients.len();
                log::info!("✅ [CATALOG] {} ingredientes cargados", count);
                self.store
                    .dispatch(IngredientsAction::FetchFulfilled(ingredients));
                Ok(count)
            }
            Err(e) => {
                log::error!("❌ [CATALOG] {}: {}", CATALOG_ERROR, e);
                self.store.dispatch(IngredientsAction::FetchRejected(format!(
                    "{}: {}",
                    CATALOG_ERROR, e
                )));
                Err(e)
            }
        }
    }
}
