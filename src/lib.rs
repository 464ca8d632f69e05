// ============================================================================
// STELLAR BURGERS - NÚCLEO DE ESTADO (RUST + WASM)
// ============================================================================
// - Models: Estructuras compartidas con el backend
// - Services: SOLO comunicación API + persistencia de credenciales
// - State: Slices con reducers + store raíz con Rc<RefCell>
// - ViewModels: Operaciones asíncronas que despachan acciones
// - Routing: Tabla de rutas y guardas de acceso
// La capa de vista (JS) lee el estado en JSON y llama a las funciones
// exportadas más abajo.
// ============================================================================

pub mod app;
pub mod config;
pub mod models;
pub mod routing;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(test)]
mod testing;

use std::cell::RefCell;
use std::future::Future;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub use crate::app::App;
use crate::config::CONFIG;
use crate::models::{LoginData, RegisterData, UserUpdate};
use crate::routing::RouteDecision;
use crate::state::ConstructorAction;

// Instancia global de la App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!(
        "🍔 Stellar Burgers - Rust + WASM ({}, API {})",
        CONFIG.environment,
        CONFIG.api_url
    );

    let app = App::new();
    APP.with(|cell| *cell.borrow_mut() = Some(app.clone()));
    spawn_local(async move { app.bootstrap().await });

    Ok(())
}

fn current_app() -> Result<App, JsValue> {
    APP.with(|cell| cell.borrow().clone())
        .ok_or_else(|| JsValue::from_str("App no inicializada"))
}

/// Los errores ya quedan en el estado; aquí solo se lanza la tarea
fn spawn_with_app<F, Fut>(task: F) -> Result<(), JsValue>
where
    F: FnOnce(App) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    let app = current_app()?;
    spawn_local(task(app));
    Ok(())
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ============================================================================
// ESTADO
// ============================================================================

#[wasm_bindgen]
pub fn state_snapshot() -> Result<String, JsValue> {
    let app = current_app()?;
    app.store()
        .select(|state| serde_json::to_string(state))
        .map_err(to_js_error)
}

/// El callback recibe el estado completo en JSON tras cada cambio
#[wasm_bindgen]
pub fn on_state_change(callback: js_sys::Function) -> Result<(), JsValue> {
    let app = current_app()?;
    app.store().subscribe(move |state| match serde_json::to_string(state) {
        Ok(json) => {
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                log::error!("❌ [STORE] Error en callback: {:?}", e);
            }
        }
        Err(e) => log::error!("❌ [STORE] Error serializando estado: {}", e),
    });
    Ok(())
}

/// {"kind": "loading" | "render" | "redirect", "to"?, "from"?}
#[wasm_bindgen]
pub fn route_decision(path: &str, from: Option<String>) -> Result<String, JsValue> {
    let app = current_app()?;
    let decision = match app.route_decision(path, from.as_deref()) {
        RouteDecision::Loading => serde_json::json!({ "kind": "loading" }),
        RouteDecision::Render => serde_json::json!({ "kind": "render" }),
        RouteDecision::Redirect { to, from } => serde_json::json!({
            "kind": "redirect",
            "to": to.path(),
            "from": from.map(|route| route.path()),
        }),
    };
    Ok(decision.to_string())
}

// ============================================================================
// CONSTRUCTOR
// ============================================================================

#[wasm_bindgen]
pub fn add_ingredient(ingredient_id: &str) -> Result<bool, JsValue> {
    Ok(current_app()?.add_ingredient(ingredient_id))
}

#[wasm_bindgen]
pub fn remove_ingredient(instance_id: &str) -> Result<(), JsValue> {
    current_app()?
        .store()
        .dispatch(ConstructorAction::remove(instance_id));
    Ok(())
}

#[wasm_bindgen]
pub fn move_ingredient(from: usize, to: usize) -> Result<(), JsValue> {
    current_app()?
        .store()
        .dispatch(ConstructorAction::Move { from, to });
    Ok(())
}

#[wasm_bindgen]
pub fn clear_constructor() -> Result<(), JsValue> {
    current_app()?.store().dispatch(ConstructorAction::Clear);
    Ok(())
}

// ============================================================================
// PEDIDOS
// ============================================================================

#[wasm_bindgen]
pub fn submit_order() -> Result<(), JsValue> {
    spawn_with_app(|app| async move {
        let _ = app.orders().submit_tray().await;
    })
}

#[wasm_bindgen]
pub fn fetch_order(number: u32) -> Result<(), JsValue> {
    spawn_with_app(move |app| async move {
        let _ = app.orders().fetch_order_by_number(u64::from(number)).await;
    })
}

#[wasm_bindgen]
pub fn clear_order_data() -> Result<(), JsValue> {
    current_app()?.orders().clear_order_data();
    Ok(())
}

#[wasm_bindgen]
pub fn fetch_feed() -> Result<(), JsValue> {
    spawn_with_app(|app| async move {
        let _ = app.feed().fetch_feed().await;
    })
}

#[wasm_bindgen]
pub fn fetch_user_orders() -> Result<(), JsValue> {
    spawn_with_app(|app| async move {
        let _ = app.feed().fetch_user_orders().await;
    })
}

// ============================================================================
// USUARIO
// ============================================================================

#[wasm_bindgen]
pub fn login(email: String, password: String) -> Result<(), JsValue> {
    spawn_with_app(move |app| async move {
        let _ = app.user().login(&LoginData { email, password }).await;
    })
}

#[wasm_bindgen]
pub fn register(email: String, name: String, password: String) -> Result<(), JsValue> {
    spawn_with_app(move |app| async move {
        let data = RegisterData {
            email,
            name,
            password,
        };
        let _ = app.user().register(&data).await;
    })
}

#[wasm_bindgen]
pub fn logout() -> Result<(), JsValue> {
    spawn_with_app(|app| async move {
        let _ = app.user().logout().await;
    })
}

#[wasm_bindgen]
pub fn update_profile(
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<(), JsValue> {
    spawn_with_app(move |app| async move {
        let update = UserUpdate {
            email,
            name,
            password,
        };
        let _ = app.user().update_profile(&update).await;
    })
}

#[wasm_bindgen]
pub fn forgot_password(email: String) -> Result<(), JsValue> {
    spawn_with_app(move |app| async move {
        let _ = app.user().forgot_password(&email).await;
    })
}

#[wasm_bindgen]
pub fn reset_password(password: String, token: String) -> Result<(), JsValue> {
    spawn_with_app(move |app| async move {
        let _ = app.user().reset_password(&password, &token).await;
    })
}
