// ============================================================================
// APP - Composición: store + servicios + viewmodels
// ============================================================================

use std::rc::Rc;

use crate::routing::{self, Route, RouteDecision};
use crate::services::{BurgerApi, HttpApiClient, SessionStorage};
use crate::state::{AppStore, ConstructorAction};
use crate::viewmodels::{CatalogViewModel, FeedViewModel, OrderViewModel, UserViewModel};

/// Aplicación principal. Los clones comparten store y servicios.
#[derive(Clone)]
pub struct App {
    store: AppStore,
    api: Rc<dyn BurgerApi>,
    session: SessionStorage,
}

impl App {
    /// API HTTP real + cookie/localStorage del navegador
    pub fn new() -> Self {
        Self::with_services(Rc::new(HttpApiClient::new()), SessionStorage::browser())
    }

    pub fn with_services(api: Rc<dyn BurgerApi>, session: SessionStorage) -> Self {
        Self {
            store: AppStore::new(),
            api,
            session,
        }
    }

    pub fn store(&self) -> &AppStore {
        &self.store
    }

    pub fn catalog(&self) -> CatalogViewModel {
        CatalogViewModel::new(self.store.clone(), self.api.clone())
    }

    pub fn orders(&self) -> OrderViewModel {
        OrderViewModel::new(self.store.clone(), self.api.clone(), self.session.clone())
    }

    pub fn feed(&self) -> FeedViewModel {
        FeedViewModel::new(self.store.clone(), self.api.clone(), self.session.clone())
    }

    pub fn user(&self) -> UserViewModel {
        UserViewModel::new(self.store.clone(), self.api.clone(), self.session.clone())
    }

    /// Arranque: comprobar sesión y después cargar el catálogo
    pub async fn bootstrap(&self) {
        log::info!("🚀 [APP] Arrancando...");
        self.user().check_session().await;
        if let Err(e) = self.catalog().fetch_catalog().await {
            log::warn!("⚠️ [APP] Catálogo no disponible: {}", e);
        }
        log::info!("✅ [APP] Arranque completado");
    }

    /// Añade a la bandeja un ingrediente del catálogo por id
    pub fn add_ingredient(&self, ingredient_id: &str) -> bool {
        let Some(ingredient) = self
            .store
            .select(|s| s.ingredients.find(ingredient_id).cloned())
        else {
            log::warn!("⚠️ [APP] Ingrediente desconocido: {}", ingredient_id);
            return false;
        };
        self.store.dispatch(ConstructorAction::add(ingredient));
        true
    }

    pub fn route_decision(&self, path: &str, from: Option<&str>) -> RouteDecision {
        let route = Route::parse(path);
        let from = from.map(Route::parse);
        self.store
            .select(|s| routing::resolve(&route, &s.user, from.as_ref()))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
