// ============================================================================
// SESSION STORAGE - Persistencia de credenciales
// ============================================================================
// access token  -> cookie de vida corta
// refresh token -> localStorage (vida larga)
// ============================================================================

use std::rc::Rc;

use crate::config::{StorageKeys, CONFIG};
use crate::models::AuthTokens;
use crate::utils::storage::{CookieStore, KeyValueStore, LocalStore, StorageError};

#[derive(Clone)]
pub struct SessionStorage {
    access: Rc<dyn KeyValueStore>,
    local: Rc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl SessionStorage {
    pub fn new(access: Rc<dyn KeyValueStore>, local: Rc<dyn KeyValueStore>) -> Self {
        Self {
            access,
            local,
            keys: CONFIG.storage_keys.clone(),
        }
    }

    /// Cookie + localStorage del navegador
    pub fn browser() -> Self {
        Self::new(
            Rc::new(CookieStore::new(CONFIG.access_token_max_age_secs)),
            Rc::new(LocalStore),
        )
    }

    pub fn access_token(&self) -> Option<String> {
        self.access.get(&self.keys.access_token)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.local.get(&self.keys.refresh_token)
    }

    pub fn has_session(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn save_tokens(&self, tokens: &AuthTokens) -> Result<(), StorageError> {
        self.access
            .set(&self.keys.access_token, &tokens.access_token)?;
        self.local
            .set(&self.keys.refresh_token, &tokens.refresh_token)?;
        log::info!("💾 [AUTH] Credenciales guardadas");
        Ok(())
    }

    /// Borra ambos tokens; intenta los dos aunque el primero falle
    pub fn clear_tokens(&self) -> Result<(), StorageError> {
        let access = self.access.remove(&self.keys.access_token);
        let refresh = self.local.remove(&self.keys.refresh_token);
        log::info!("🗑️ [AUTH] Credenciales eliminadas");
        access.and(refresh)
    }

    /// Logout: tokens + bandera de reset. Intenta todo aunque algo falle.
    pub fn clear_session(&self) -> Result<(), StorageError> {
        let tokens = self.clear_tokens();
        let reset = self.clear_password_reset();
        tokens.and(reset)
    }

    pub fn mark_password_reset(&self) -> Result<(), StorageError> {
        self.local.set(&self.keys.password_reset, "true")
    }

    pub fn password_reset_requested(&self) -> bool {
        self.local.get(&self.keys.password_reset).is_some()
    }

    pub fn clear_password_reset(&self) -> Result<(), StorageError> {
        self.local.remove(&self.keys.password_reset)
    }
}
